use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logbook::{MasterGroup, group_by_master, search};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use crate::utils::format_money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search: query } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let entries = RecordStore::new(pool.storage()).list();

        let matching = search(&entries, query.as_deref().unwrap_or(""));
        if matching.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        for group in group_by_master(&matching) {
            print_group(&group);
        }
    }
    Ok(())
}

fn print_group(group: &MasterGroup<'_>) {
    header(format!(
        "{} — {} jobs, {}",
        group.master,
        group.entries.len(),
        format_money(group.total())
    ));

    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Date"),
        Column::left("Car"),
        Column::left("Services"),
        Column::right("Work"),
        Column::right("Parts"),
        Column::right("Total"),
    ]);

    for e in &group.entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date.clone(),
            truncate(&e.car, 30),
            truncate(&e.services_joined(), 40),
            format_money(e.work_cost),
            format_money(e.parts_markup),
            format_money(e.total()),
        ]);
    }

    print!("{}", table.render());
}
