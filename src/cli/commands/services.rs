use crate::cli::parser::{Commands, ServicesAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::catalog::{add_custom_service, merged_catalog};
use crate::ui::messages::{header, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Services { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut storage = pool.storage();

        match action {
            ServicesAction::List => {
                for (category, names) in merged_catalog(&storage)? {
                    header(&category);
                    for name in names {
                        println!("  - {name}");
                    }
                }
            }
            ServicesAction::Add { category, name } => {
                if add_custom_service(&mut storage, category, name)? {
                    ttlog_soft(&pool.conn, "services", category, &format!("added '{name}'"));
                    success(format!("Service '{name}' added to '{category}'."));
                } else {
                    info(format!("Service '{name}' already listed in '{category}'."));
                }
            }
        }
    }
    Ok(())
}
