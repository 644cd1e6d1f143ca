use rusqlite::Connection;

pub fn migrate(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS responses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier  TEXT NOT NULL,
            name        TEXT NOT NULL,
            style       TEXT NOT NULL,
            question    TEXT NOT NULL,
            answer      INTEGER NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS summaries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier  TEXT NOT NULL,
            style       TEXT NOT NULL,
            score       REAL NOT NULL,
            tendency    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_responses_identifier ON responses(identifier);
        CREATE INDEX IF NOT EXISTS idx_summaries_identifier ON summaries(identifier);
        CREATE INDEX IF NOT EXISTS idx_summaries_created ON summaries(created_at DESC);
        ",
    )?;
    Ok(())
}
