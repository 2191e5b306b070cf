//! Durable SQLite key-value backend.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for the kv store.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before returning a usable store.
//!
//! # Invariants
//! - Returned stores have `foreign_keys=ON`.
//! - Returned stores have migrations fully applied.

use super::migrations::apply_migrations;
use super::{KeyValueStore, KvResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// SQLite-backed key-value store.
///
/// One row per key in `kv_entries`; values are opaque text and `put`
/// overwrites in place.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl std::fmt::Debug for SqliteKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteKeyValueStore").finish_non_exhaustive()
    }
}

impl SqliteKeyValueStore {
    /// Gives direct access to the underlying connection, for callers that
    /// need raw inspection (diagnostics, tests).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> KvResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Opens a SQLite kv database file and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `kv_open` logging events with duration and status.
pub fn open_kv(path: impl AsRef<Path>) -> KvResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=kv_open module=kv status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=kv_open module=kv status=error mode=file duration_ms={} error_code=kv_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, started_at, "file")
}

/// Opens an in-memory SQLite kv database and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `kv_open` logging events with duration and status.
pub fn open_kv_in_memory() -> KvResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=kv_open module=kv status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=kv_open module=kv status=error mode=memory duration_ms={} error_code=kv_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, started_at, "memory")
}

fn finish_open(
    mut conn: Connection,
    started_at: Instant,
    mode: &'static str,
) -> KvResult<SqliteKeyValueStore> {
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=kv_open module=kv status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteKeyValueStore { conn })
        }
        Err(err) => {
            error!(
                "event=kv_open module=kv status=error mode={mode} duration_ms={} error_code=kv_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> KvResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
