//! Startup initialization: schema plus default catalog.

use crate::domain::{SeedActivity, SEED_CATALOG};
use crate::error::AppError;
use crate::infra::{get_connection, run_migrations, Store};
use rusqlite::{params, Connection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Activities inserted by this run; zero when the catalog already existed.
    pub activities_seeded: usize,
    pub participants_seeded: usize,
}

/// Ensure tables exist and seed the default catalog if `activities` is empty.
pub fn initialize(store: &Store) -> Result<BootstrapReport, AppError> {
    initialize_with(store, SEED_CATALOG)
}

/// Like [`initialize`] with a caller-supplied catalog.
pub fn initialize_with(
    store: &Store,
    catalog: &[SeedActivity],
) -> Result<BootstrapReport, AppError> {
    let mut conn = get_connection(store)?;
    run_migrations(&mut conn)?;

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM activities", [], |r| r.get(0))?;
    if existing > 0 {
        log::info!("activities table has {} rows, skipping seed", existing);
        return Ok(BootstrapReport {
            activities_seeded: 0,
            participants_seeded: 0,
        });
    }

    let report = seed(&mut conn, catalog)?;
    log::info!(
        "seeded {} activities with {} participants",
        report.activities_seeded,
        report.participants_seeded
    );
    Ok(report)
}

fn seed(conn: &mut Connection, catalog: &[SeedActivity]) -> Result<BootstrapReport, AppError> {
    let tx = conn.transaction()?;
    let mut participants_seeded = 0;
    for a in catalog {
        tx.execute(
            "INSERT INTO activities (name, description, schedule, max_participants) VALUES (?1, ?2, ?3, ?4)",
            params![a.name, a.description, a.schedule, a.max_participants],
        )?;
        for email in a.participants {
            // Duplicates in the catalog are ignored.
            participants_seeded += tx.execute(
                "INSERT OR IGNORE INTO participants (activity_name, email) VALUES (?1, ?2)",
                params![a.name, email],
            )?;
        }
    }
    tx.commit()?;
    Ok(BootstrapReport {
        activities_seeded: catalog.len(),
        participants_seeded,
    })
}
