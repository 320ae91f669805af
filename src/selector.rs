//! Random creature selection from the read-only lookup table.
//!
//! The table is `pokemon(pokemon TEXT, id TEXT, gen INTEGER)`. `id` is text,
//! so it does not range-query correctly; positions are taken from the
//! implicit `rowid` instead.
//!
//! Selection is two-stage: a generation is chosen uniformly from the
//! requested set, then a rowid uniformly within that generation's range.
//! Records in small generations are therefore more likely than records in
//! large ones. Callers rely on that distribution, so it is kept.

use crate::config::Config;
use crate::error::{Result, WtpError};
use crate::models::Record;
use rand::seq::IteratorRandom;
use rand::Rng;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Picks random records from the lookup table
#[derive(Debug, Clone)]
pub struct Selector {
    db_path: PathBuf,
}

impl Selector {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.database)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens the lookup table read-only; the handle closes when dropped
    fn open(&self) -> Result<Connection> {
        log::debug!("Opening lookup table: {}", self.db_path.display());
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    /// Pick a random record whose generation is in `groups`
    pub fn pick<R: Rng>(&self, groups: &BTreeSet<i64>, rng: &mut R) -> Result<Record> {
        let conn = self.open()?;
        pick_from(&conn, groups, rng)
    }
}

/// Inner pick that accepts an explicit connection — used in tests.
pub fn pick_from<R: Rng>(
    conn: &Connection,
    groups: &BTreeSet<i64>,
    rng: &mut R,
) -> Result<Record> {
    let group = *groups
        .iter()
        .choose(rng)
        .ok_or_else(|| WtpError::NotFound("no generations requested".to_string()))?;

    let (lowest, highest) = rowid_range(conn, group)?
        .ok_or_else(|| WtpError::NotFound(format!("no records in generation {}", group)))?;

    let rowid = rng.random_range(lowest..=highest);
    log::debug!(
        "Picked rowid {} from generation {} (range {}..={})",
        rowid,
        group,
        lowest,
        highest
    );

    record_at(conn, rowid, group)?.ok_or_else(|| {
        WtpError::NotFound(format!("no generation {} record at rowid {}", group, rowid))
    })
}

/// Returns the inclusive rowid range of a generation, or `None` if it is empty
fn rowid_range(conn: &Connection, group: i64) -> Result<Option<(i64, i64)>> {
    let lowest: Option<i64> = conn.query_row(
        "SELECT MIN(rowid) FROM pokemon WHERE gen = ?1",
        params![group],
        |row| row.get(0),
    )?;
    let highest: Option<i64> = conn.query_row(
        "SELECT MAX(rowid) FROM pokemon WHERE gen = ?1",
        params![group],
        |row| row.get(0),
    )?;

    Ok(lowest.zip(highest))
}

/// Rows of one generation are expected to be contiguous; a gap or a foreign
/// row inside the range yields `None` rather than a record from elsewhere.
fn record_at(conn: &Connection, rowid: i64, group: i64) -> Result<Option<Record>> {
    let record = conn
        .query_row(
            "SELECT pokemon, id, gen FROM pokemon WHERE rowid = ?1 AND gen = ?2",
            params![rowid, group],
            |row| {
                Ok(Record {
                    name: row.get(0)?,
                    id: row.get(1)?,
                    group: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(record)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
