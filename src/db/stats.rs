use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::roster::roster_masters;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::format_money;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) STORED KEYS
    //
    let storage = pool.storage();
    println!("{}• Keys:{}", CYAN, RESET);
    for (key, len, updated_at) in storage.keys()? {
        println!("    {key:<18} {len:>9} bytes  {GREY}{updated_at}{RESET}");
    }

    //
    // 3) TOTAL ENTRIES
    //
    let masters = roster_masters(&storage);
    let entries = RecordStore::new(storage).list();
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );
    println!("{}• Masters in roster:{} {}", CYAN, RESET, masters.len());

    //
    // 4) DATE RANGE
    //
    let mut dates: Vec<_> = entries.iter().filter_map(|e| e.naive_date()).collect();
    dates.sort();

    let first = dates.first().copied();
    let last = dates.last().copied();

    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 5) AVERAGE JOBS/DAY + REVENUE
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l - f).num_days().max(1);
        let avg = dates.len() as f64 / days as f64;
        println!("{}• Average jobs/day:{} {:.2}", CYAN, RESET, avg);
    }

    let revenue: f64 = entries.iter().map(|e| e.total()).sum();
    println!(
        "{}• Lifetime revenue:{} {}",
        CYAN,
        RESET,
        format_money(revenue)
    );

    println!();
    Ok(())
}
