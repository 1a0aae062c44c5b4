//! Manager identities allowed to run cross-employee reports.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection};

const SCHEMA_MANAGERS: &str = "CREATE TABLE IF NOT EXISTS managers (
    contact_id TEXT PRIMARY KEY,
    full_name TEXT NOT NULL
);";
const INSERT: &str = "INSERT OR REPLACE INTO managers (contact_id, full_name) VALUES (?1, ?2)";
const DELETE: &str = "DELETE FROM managers WHERE contact_id = ?1";
const SELECT_ALL: &str = "SELECT contact_id, full_name FROM managers";
const COUNT_BY_CONTACT: &str = "SELECT COUNT(*) FROM managers WHERE contact_id = ?1";

#[derive(Debug, Clone)]
pub struct Manager {
    pub contact_id: String,
    pub full_name: String,
}

pub struct Managers {
    conn: Connection,
}

impl Managers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_MANAGERS, [])?;
        Ok(Managers { conn: db.conn })
    }

    pub fn insert(&mut self, contact_id: &str, full_name: &str) -> Result<()> {
        self.conn.execute(INSERT, params![contact_id, full_name])?;
        Ok(())
    }

    pub fn remove(&mut self, contact_id: &str) -> Result<()> {
        self.conn.execute(DELETE, params![contact_id])?;
        Ok(())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Manager>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let iter = stmt.query_map([], |row| {
            Ok(Manager {
                contact_id: row.get(0)?,
                full_name: row.get(1)?,
            })
        })?;
        let mut managers = Vec::new();
        for manager in iter {
            managers.push(manager?);
        }
        Ok(managers)
    }

    pub fn is_manager(&mut self, contact_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_BY_CONTACT, params![contact_id], |row| row.get(0))?;
        Ok(count > 0)
    }
}
