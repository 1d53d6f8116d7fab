use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::count_stats;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED DAYS
    //
    let days = count_stats(&pool.conn)?;
    println!("{}• Stored days:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) =
        pool.conn
            .query_row("SELECT MIN(date), MAX(date) FROM stats", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

    let none = || format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(none));
    println!("    to:   {}", last.unwrap_or_else(none));

    //
    // 4) TOTALS
    //
    let (milk_ml, unchi_count): (Option<i64>, Option<i64>) = pool.conn.query_row(
        "SELECT SUM(milk_ml), SUM(unchi_count) FROM stats",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Feeding total:{} {} ml",
        CYAN,
        RESET,
        milk_ml.unwrap_or(0)
    );
    println!(
        "{}• Stool events:{} {}",
        CYAN,
        RESET,
        unchi_count.unwrap_or(0)
    );

    //
    // 5) SCHEMA
    //
    let applied = applied_migrations(&pool.conn)?;
    println!("{}• Migrations:{} {}", CYAN, RESET, applied.len());
    for version in applied {
        println!("    {GREY}{version}{RESET}");
    }

    println!();
    Ok(())
}
