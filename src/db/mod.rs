pub mod schema;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::core::StyleSummary;

/// One answer row for the append-only audit log.
#[derive(Debug, Clone)]
pub struct ResponseRow {
    pub identifier: String,
    pub name: String,
    pub style: String,
    pub question: String,
    pub answer: i64,
}

/// A persisted per-style summary from the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub id: i64,
    pub identifier: String,
    pub style: String,
    pub score: f64,
    pub tendency: String,
    pub created_at: String,
}

pub struct Database {
    conn: Connection,
}

/// Thread-safe wrapper around Database.
#[derive(Clone)]
pub struct SharedDatabase {
    inner: Arc<Mutex<Database>>,
}

impl SharedDatabase {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let db = Database::open(path)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(db)),
        })
    }

    /// Log one completed assessment: all answer rows plus the per-style
    /// summaries, in a single transaction. Write-only from the scoring path.
    pub fn record_assessment(
        &self,
        identifier: &str,
        rows: &[ResponseRow],
        summaries: &[StyleSummary],
    ) -> Result<(), rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.record_assessment(identifier, rows, summaries)
    }

    /// Total number of logged answer rows.
    pub fn response_count(&self) -> Result<usize, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.response_count()
    }

    /// All summaries recorded for an identifier, newest first.
    pub fn summaries_for(&self, identifier: &str) -> Result<Vec<SummaryRecord>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.summaries_for(identifier)
    }

    /// Most recent summaries across all identifiers.
    pub fn recent_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.recent_summaries(limit)
    }

    /// Summaries recorded at or after the given instant.
    pub fn summaries_since(&self, from: DateTime<Utc>) -> Result<Vec<SummaryRecord>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.summaries_since(from)
    }
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    pub fn record_assessment(
        &self,
        identifier: &str,
        rows: &[ResponseRow],
        summaries: &[StyleSummary],
    ) -> Result<(), rusqlite::Error> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut insert_response = tx.prepare_cached(
                "INSERT INTO responses (identifier, name, style, question, answer, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'))",
            )?;
            for row in rows {
                insert_response.execute(rusqlite::params![
                    row.identifier,
                    row.name,
                    row.style,
                    row.question,
                    row.answer
                ])?;
            }

            let mut insert_summary = tx.prepare_cached(
                "INSERT INTO summaries (identifier, style, score, tendency, created_at)
                 VALUES (?1, ?2, ?3, ?4, datetime('now'))",
            )?;
            for summary in summaries {
                insert_summary.execute(rusqlite::params![
                    identifier,
                    summary.style_name,
                    summary.score,
                    summary.tendency.label()
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn response_count(&self) -> Result<usize, rusqlite::Error> {
        self.conn.query_row("SELECT COUNT(*) FROM responses", [], |row| {
            row.get::<_, i64>(0).map(|c| c as usize)
        })
    }

    fn row_to_summary(row: &rusqlite::Row) -> rusqlite::Result<SummaryRecord> {
        Ok(SummaryRecord {
            id: row.get(0)?,
            identifier: row.get(1)?,
            style: row.get(2)?,
            score: row.get(3)?,
            tendency: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    pub fn summaries_for(&self, identifier: &str) -> Result<Vec<SummaryRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, identifier, style, score, tendency, created_at
             FROM summaries WHERE identifier = ?1 ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map(rusqlite::params![identifier], Self::row_to_summary)?;
        rows.collect()
    }

    pub fn recent_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, identifier, style, score, tendency, created_at
             FROM summaries ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(rusqlite::params![limit as i64], Self::row_to_summary)?;
        rows.collect()
    }

    pub fn summaries_since(&self, from: DateTime<Utc>) -> Result<Vec<SummaryRecord>, rusqlite::Error> {
        let from_str = from.format("%Y-%m-%d %H:%M:%S").to_string();
        let mut stmt = self.conn.prepare(
            "SELECT id, identifier, style, score, tendency, created_at
             FROM summaries WHERE created_at >= ?1 ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map(rusqlite::params![from_str], Self::row_to_summary)?;
        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tendency;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn open_temp_db() -> SharedDatabase {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "leadscope_test_{}_{}.db",
            std::process::id(),
            id
        ));
        // Remove if leftover from previous run
        let _ = std::fs::remove_file(&path);
        SharedDatabase::open(&path).unwrap()
    }

    fn response_row(identifier: &str, style: &str, answer: i64) -> ResponseRow {
        ResponseRow {
            identifier: identifier.to_string(),
            name: "Jo".to_string(),
            style: style.to_string(),
            question: "I ask the team for input".to_string(),
            answer,
        }
    }

    fn summary(style: &str, score: f64, tendency: Tendency) -> StyleSummary {
        StyleSummary {
            style_code: 1,
            style_name: style.to_string(),
            score,
            answered: 5,
            tendency,
            description: "text".to_string(),
        }
    }

    #[test]
    fn record_and_count() {
        let db = open_temp_db();
        let rows = vec![
            response_row("19930510", "Democratic", 5),
            response_row("19930510", "Democratic", 4),
        ];
        let summaries = vec![summary("Democratic", 3.0, Tendency::Moderate)];
        db.record_assessment("19930510", &rows, &summaries).unwrap();

        assert_eq!(db.response_count().unwrap(), 2);
    }

    #[test]
    fn summaries_for_identifier() {
        let db = open_temp_db();
        db.record_assessment(
            "19930510",
            &[],
            &[
                summary("Democratic", 6.0, Tendency::High),
                summary("Autocratic", -2.0, Tendency::Low),
            ],
        )
        .unwrap();
        db.record_assessment("20010101", &[], &[summary("Democratic", 0.0, Tendency::Moderate)])
            .unwrap();

        let found = db.summaries_for("19930510").unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.identifier == "19930510"));
        assert_eq!(found.iter().find(|s| s.style == "Democratic").unwrap().tendency, "High");
    }

    #[test]
    fn summaries_for_unknown_identifier_is_empty() {
        let db = open_temp_db();
        assert!(db.summaries_for("00000000").unwrap().is_empty());
    }

    #[test]
    fn recent_summaries_respects_limit() {
        let db = open_temp_db();
        for i in 0..4 {
            db.record_assessment(
                &format!("1000000{i}"),
                &[],
                &[summary("Democratic", i as f64, Tendency::Moderate)],
            )
            .unwrap();
        }
        let recent = db.recent_summaries(2).unwrap();
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn empty_log_counts_zero() {
        let db = open_temp_db();
        assert_eq!(db.response_count().unwrap(), 0);
    }

    #[test]
    fn summaries_since_includes_fresh_rows() {
        let db = open_temp_db();
        db.record_assessment("19930510", &[], &[summary("Democratic", 1.0, Tendency::Moderate)])
            .unwrap();

        let hour_ago = Utc::now() - chrono::Duration::hours(1);
        assert_eq!(db.summaries_since(hour_ago).unwrap().len(), 1);

        let tomorrow = Utc::now() + chrono::Duration::hours(24);
        assert!(db.summaries_since(tomorrow).unwrap().is_empty());
    }
}
