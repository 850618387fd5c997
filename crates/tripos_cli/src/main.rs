//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tripos_core` linkage.
//! - Print the home-screen summary of the stored (or seed) document.
//!
//! With a data directory argument the store and logs live there; without
//! one an in-memory store is used and nothing is written to disk.

use std::error::Error;
use tripos_core::db::{open_db, open_db_in_memory};
use tripos_core::{
    checklist_counts, date_range_caption, init_logging, total_expense_twd, Calculator,
    ChecklistCategory, CoreConfig, PersistenceGateway, SqliteSlotStore, TripSession,
    STORAGE_KEY,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("tripos_core ping={}", tripos_core::ping());
    println!("tripos_core version={}", tripos_core::core_version());

    let config = std::env::args().nth(1).map(CoreConfig::in_dir);
    let conn = match &config {
        Some(config) => {
            init_logging(config.log_level, &config.log_dir)?;
            if let Some(parent) = config.db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            open_db(&config.db_path)?
        }
        None => open_db_in_memory()?,
    };

    let store = SqliteSlotStore::try_new(&conn)?;
    let key = config
        .as_ref()
        .map_or(STORAGE_KEY, |config| config.storage_key.as_str());
    let session = TripSession::open(PersistenceGateway::with_key(store, key));
    let doc = session.document();

    let (packed, luggage) = checklist_counts(&doc.checklist, ChecklistCategory::Luggage);
    let calculator = Calculator::with_rate(config.as_ref().map_or(
        tripos_core::DEFAULT_JPY_TO_TWD_RATE,
        |config| config.default_rate,
    ))?;

    println!("trip dates={}", date_range_caption(&doc.itinerary));
    println!("wallet twd={}", total_expense_twd(&doc.expenses));
    println!("luggage packed={packed}/{luggage}");
    println!("calculator rate={}", calculator.rate());
    Ok(())
}
