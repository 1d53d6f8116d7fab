use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_stats;
use crate::errors::AppResult;
use crate::models::daily_aggregate::DailyAggregate;
use crate::utils::colors::colorize_optional;
use crate::utils::date::parse_period;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let bounds = match period.as_deref() {
            None | Some("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        let rows = load_stats(&mut pool, bounds)?;

        if rows.is_empty() {
            println!("No stored days for the requested period.");
            return Ok(());
        }

        print!("{}", render_rows(&rows));
    }
    Ok(())
}

/// Render daily rows as a table. Missing values are shown as a grey "--".
pub fn render_rows(rows: &[DailyAggregate]) -> String {
    let mut table = Table::new(vec![
        Column::left("DATE", 10),
        Column::right("MILK", 5),
        Column::right("ML", 6),
        Column::right("STOOL", 5),
        Column::right("AMOUNT", 6),
        Column::right("AGE(M)", 6),
    ]);

    for r in rows {
        table.add_row(vec![
            r.date_str(),
            colorize_optional(r.feeding_count),
            colorize_optional(r.feeding_volume_total),
            colorize_optional(r.stool_count),
            colorize_optional(r.stool_volume_total),
            colorize_optional(r.age_of_month),
        ]);
    }

    table.render()
}
