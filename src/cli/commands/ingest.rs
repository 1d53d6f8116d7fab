use crate::cli::commands::list::render_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::sink::{MemorySink, SqliteSink};
use crate::errors::AppResult;
use crate::models::dialect::Dialect;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `ingest` command.
///
/// Configuration (dialect, birth date) is validated before any file is read.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ingest {
        dialect,
        dir,
        birth_date,
        dry_run,
    } = cmd
    {
        //
        // 1. Configuration
        //
        let dialect = Dialect::parse(dialect)?;
        let birth = cfg.resolve_birth_date(birth_date.as_deref())?;
        let input_dir = match dir {
            Some(d) => expand_tilde(d),
            None => cfg.input_dir(dialect),
        };

        //
        // 2. Input texts
        //
        info(format!(
            "Reading {} exports from {}",
            dialect,
            input_dir.display()
        ));
        let sources = IngestLogic::load_sources(&input_dir)?;
        if sources.is_empty() {
            warning(format!("No .txt files found in {}", input_dir.display()));
        }

        //
        // 3. Run
        //
        if *dry_run {
            let mut sink = MemorySink::new();
            let report = IngestLogic::run(&sources, dialect, birth, &mut sink)?;
            print!("{}", render_rows(&sink.rows()));
            info(format!(
                "Dry run: {} file(s), {} event(s), {} day(s); nothing written",
                report.files, report.events, report.rows
            ));
            return Ok(());
        }

        let pool = DbPool::open_initialized(&cfg.database)?;
        let report = {
            let mut sink = SqliteSink::new(&pool.conn);
            IngestLogic::run(&sources, dialect, birth, &mut sink)?
        };

        success(format!(
            "Ingested {} file(s), {} event(s): {} day(s) inserted, {} already stored",
            report.files, report.events, report.inserted, report.skipped
        ));

        ttlog_or_warn(
            &pool.conn,
            "ingest",
            dialect.as_str(),
            &format!(
                "{} file(s) from {}: {} inserted, {} skipped",
                report.files,
                input_dir.display(),
                report.inserted,
                report.skipped
            ),
        );
    }

    Ok(())
}
