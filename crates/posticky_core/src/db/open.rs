//! Opening the notes database.
//!
//! Returned connections have `foreign_keys=ON`, a busy timeout, and the full
//! schema applied. Failures before migration are reported as
//! `DbError::Open` with the location attached.

use super::migrations::apply_migrations;
use super::{DbError, DbLocation, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the notes file at `path`, creating it when missing.
///
/// # Side effects
/// - Emits `db_open` events with location mode, duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_at(DbLocation::File(path.as_ref().to_path_buf()))
}

/// Opens a fresh in-memory notes database; contents vanish on drop.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_at(DbLocation::Memory)
}

fn open_at(location: DbLocation) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = location.mode();
    info!("event=db_open module=db status=start mode={mode}");

    match connect(&location).and_then(|mut conn| {
        let applied = apply_migrations(&mut conn)?;
        Ok((conn, applied))
    }) {
        Ok((conn, applied)) => {
            info!(
                "event=db_open module=db status=ok mode={mode} migrations_applied={} duration_ms={}",
                applied.len(),
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn connect(location: &DbLocation) -> DbResult<Connection> {
    let configure = |conn: Connection| -> rusqlite::Result<Connection> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    };
    let opened = match location {
        DbLocation::File(path) => Connection::open(path),
        DbLocation::Memory => Connection::open_in_memory(),
    };

    opened.and_then(configure).map_err(|source| DbError::Open {
        location: location.clone(),
        source,
    })
}
