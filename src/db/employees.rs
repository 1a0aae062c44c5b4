//! Employee records: the subjects work hours are recorded for.
//!
//! Removal is a soft deactivation; inactive employees keep their history
//! but disappear from selection and from reports. A contact id links an
//! employee to the identity of the person running the CLI.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    full_name TEXT NOT NULL,
    contact_id TEXT,
    active INTEGER NOT NULL DEFAULT 1
);";
const INSERT: &str = "INSERT INTO employees (full_name) VALUES (?1)";
const SELECT_ALL: &str = "SELECT id, full_name, contact_id, active FROM employees";
const SELECT_ACTIVE: &str = "SELECT id, full_name, contact_id, active FROM employees WHERE active = 1";
const SELECT_BY_ID: &str = "SELECT id, full_name, contact_id, active FROM employees WHERE id = ?1";
const SELECT_BY_CONTACT: &str = "SELECT id, full_name, contact_id, active FROM employees WHERE contact_id = ?1 AND active = 1";
const UPDATE_CONTACT: &str = "UPDATE employees SET contact_id = ?1 WHERE id = ?2";
const DEACTIVATE: &str = "UPDATE employees SET active = 0 WHERE id = ?1";

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub contact_id: Option<String>,
    pub active: bool,
}

pub struct Employees {
    conn: Connection,
}

impl Employees {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(Employees { conn: db.conn })
    }

    /// Adds an employee, active by default. Returns the new id.
    pub fn insert(&mut self, full_name: &str) -> Result<i64> {
        self.conn.execute(INSERT, params![full_name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Employee>> {
        self.query(SELECT_ALL)
    }

    pub fn fetch_active(&mut self) -> Result<Vec<Employee>> {
        self.query(SELECT_ACTIVE)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Employee>> {
        let employee = self.conn.query_row(SELECT_BY_ID, params![id], map_row).optional()?;
        Ok(employee)
    }

    /// Resolves the active employee linked to a contact identity.
    pub fn fetch_by_contact(&mut self, contact_id: &str) -> Result<Option<Employee>> {
        let employee = self.conn.query_row(SELECT_BY_CONTACT, params![contact_id], map_row).optional()?;
        Ok(employee)
    }

    /// Links a contact identity to an employee record.
    pub fn assign_contact(&mut self, id: i64, contact_id: &str) -> Result<()> {
        self.conn.execute(UPDATE_CONTACT, params![contact_id, id])?;
        Ok(())
    }

    /// Soft delete: the employee keeps history but leaves selection and reports.
    pub fn deactivate(&mut self, id: i64) -> Result<()> {
        self.conn.execute(DEACTIVATE, params![id])?;
        Ok(())
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql)?;
        let iter = stmt.query_map([], map_row)?;
        let mut employees = Vec::new();
        for employee in iter {
            employees.push(employee?);
        }
        Ok(employees)
    }
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        full_name: row.get(1)?,
        contact_id: row.get(2)?,
        active: row.get::<_, i64>(3)? != 0,
    })
}
