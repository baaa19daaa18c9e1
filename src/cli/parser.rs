use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rServiceLog
/// CLI application to record car-service jobs with SQLite
#[derive(Parser)]
#[command(
    name = "rservicelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple service-log CLI: record workshop jobs per technician and analyse revenue",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a service job
    Add {
        /// Day of the service (YYYY-MM-DD)
        date: String,

        /// Technician identifier
        master: String,

        /// Vehicle description
        car: String,

        #[arg(
            long = "service",
            short = 's',
            help = "Service rendered (repeat for several services)"
        )]
        services: Vec<String>,

        #[arg(long = "work", help = "Labor cost")]
        work: Option<String>,

        #[arg(long = "parts", help = "Parts markup")]
        parts: Option<String>,
    },

    /// Change fields of an existing job
    Edit {
        /// Entry id
        id: i64,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "master", help = "New technician")]
        master: Option<String>,

        #[arg(long = "car", help = "New vehicle description")]
        car: Option<String>,

        #[arg(
            long = "service",
            short = 's',
            help = "Replace the services list (repeatable)"
        )]
        services: Vec<String>,

        #[arg(long = "work", help = "New labor cost")]
        work: Option<String>,

        #[arg(long = "parts", help = "New parts markup")]
        parts: Option<String>,
    },

    /// Delete a job by id
    Del {
        /// Entry id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Erase every recorded job (maintenance)
    Clear {
        #[arg(long = "yes", help = "Confirm the erase without prompting")]
        yes: bool,
    },

    /// List jobs grouped by technician
    List {
        #[arg(long, short, help = "Filter by technician or vehicle (case-insensitive)")]
        search: Option<String>,
    },

    /// Revenue analytics over a period
    Report {
        #[arg(
            long,
            short,
            help = "this_week | last_week | this_month | last_month | custom"
        )]
        period: Option<String>,

        #[arg(long = "from", help = "Custom range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Custom range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "daily", help = "Show revenue for every day of the range")]
        daily: bool,
    },

    /// Export the jobs of a period
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: report_<from>_to_<to>)")]
        file: Option<String>,

        #[arg(
            long,
            short,
            help = "this_week | last_week | this_month | last_month | custom"
        )]
        period: Option<String>,

        #[arg(long = "from", help = "Custom range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Custom range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the technician roster
    Master {
        #[command(subcommand)]
        action: MasterAction,
    },

    /// Browse or extend the services catalog
    Services {
        #[command(subcommand)]
        action: ServicesAction,
    },
}

#[derive(Subcommand)]
pub enum MasterAction {
    /// Add a technician (or replace its credential)
    Add {
        id: String,

        #[arg(long, default_value = "")]
        credential: String,
    },
    /// Remove a technician from the roster
    Remove { id: String },
    /// List technicians
    List,
}

#[derive(Subcommand)]
pub enum ServicesAction {
    /// Print the merged catalog
    List,
    /// Add a custom service to a category
    Add { category: String, name: String },
}
