use super::resolve_cli_range;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{AggregateResult, aggregate};
use crate::core::period::DateRange;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, colorize_amount};
use crate::utils::formatting::{bold, share_bar};
use crate::utils::table::{Column, Table};
use crate::utils::{format_money, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        from,
        to,
        daily,
    } = cmd
    {
        let range = resolve_cli_range(period, from, to, cfg)?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = RecordStore::new(pool.storage()).list();
        let result = aggregate(&entries, range.start, range.end);

        print_kpis(&range, &result);
        print_technicians(&result);
        if *daily {
            print_daily(&result);
        }
    }
    Ok(())
}

fn print_kpis(range: &DateRange, r: &AggregateResult) {
    header(format!("Report {range}"));

    let kpis = [
        ("Revenue", r.total_revenue),
        ("Service share", r.service_share),
        ("Master payout", r.master_payout),
    ];
    for (label, value) in kpis {
        println!(
            "{CYAN}• {}{RESET} {}",
            pad_right(label, 14),
            colorize_amount(value, &format_money(value))
        );
    }
    println!("{CYAN}• {}{RESET} {}", pad_right("Jobs", 14), bold(&r.job_count.to_string()));
}

fn print_technicians(r: &AggregateResult) {
    header("By technician");

    if r.by_technician.is_empty() {
        println!("No jobs in this period.");
        return;
    }

    let max = r
        .ranked_technicians()
        .first()
        .map(|(_, v)| *v)
        .unwrap_or(0.0);

    let mut table = Table::new(vec![
        Column::left("Master"),
        Column::right("Revenue"),
        Column::right("Share"),
        Column::left(""),
    ]);
    for ((master, value), (_, share)) in r.ranked_technicians().iter().zip(r.technician_shares()) {
        table.add_row(vec![
            master.clone(),
            format_money(*value),
            format!("{:.1}%", share * 100.0),
            share_bar(*value, max, 20),
        ]);
    }
    print!("{}", table.render());
}

fn print_daily(r: &AggregateResult) {
    header("Daily revenue");

    let mut table = Table::new(vec![Column::left("Day"), Column::right("Revenue")]);
    for (day, value) in r.days.iter().zip(&r.daily_revenue) {
        table.add_row(vec![
            day.format("%Y-%m-%d %a").to_string(),
            format_money(*value),
        ]);
    }
    print!("{}", table.render());
}
