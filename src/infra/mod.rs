//! Infrastructure: SQLite connection, migrations.

pub mod db;

pub use db::{get_connection, run_migrations, Store};
