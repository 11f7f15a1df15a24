use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Create tables with COMPLETE schema for new databases
  // Migrations below handle upgrades for existing databases
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS tracked_verses (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      surah INTEGER NOT NULL,
      ayah INTEGER NOT NULL,
      strength_factor REAL NOT NULL DEFAULT 2.5,
      interval_days INTEGER NOT NULL DEFAULT 0,
      review_count INTEGER NOT NULL DEFAULT 0,
      next_due TEXT NOT NULL,
      last_quality TEXT,
      learned_at TEXT NOT NULL,
      UNIQUE(surah, ayah)
    );

    CREATE TABLE IF NOT EXISTS review_logs (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      verse_id INTEGER NOT NULL,
      quality TEXT NOT NULL,
      reviewed_at TEXT NOT NULL,
      interval_days INTEGER NOT NULL DEFAULT 0,
      FOREIGN KEY (verse_id) REFERENCES tracked_verses(id)
    );

    CREATE TABLE IF NOT EXISTS settings (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL
    );

    -- Default settings
    INSERT OR IGNORE INTO settings (key, value) VALUES ('active_profile', 'default');

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_tracked_verses_next_due ON tracked_verses(next_due);
    CREATE INDEX IF NOT EXISTS idx_tracked_verses_surah ON tracked_verses(surah);
    CREATE INDEX IF NOT EXISTS idx_review_logs_verse_id ON review_logs(verse_id);
    CREATE INDEX IF NOT EXISTS idx_review_logs_reviewed_at ON review_logs(reviewed_at);
    "#,
  )?;

  // ============================================================
  // MIGRATIONS FOR EXISTING DATABASES
  // These are no-ops for new databases (columns already exist)
  // ============================================================

  // Migration: last_quality was added after the first release
  add_column_if_missing(conn, "tracked_verses", "last_quality", "TEXT")?;

  // Migration: review_logs gained the granted interval
  add_column_if_missing(conn, "review_logs", "interval_days", "INTEGER NOT NULL DEFAULT 0")?;

  Ok(())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
  let query = format!("SELECT {} FROM {} LIMIT 0", column, table);
  conn.prepare(&query).is_ok()
}

fn add_column_if_missing(
  conn: &Connection,
  table: &str,
  column: &str,
  definition: &str,
) -> Result<()> {
  if !column_exists(conn, table, column) {
    let query = format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, definition);
    conn.execute(&query, [])?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_migrations_are_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    run_migrations(&conn).unwrap();

    let profile: String = conn
      .query_row(
        "SELECT value FROM settings WHERE key = 'active_profile'",
        [],
        |row| row.get(0),
      )
      .unwrap();
    assert_eq!(profile, "default");
  }

  #[test]
  fn test_unique_verse_constraint() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();

    conn
      .execute(
        "INSERT INTO tracked_verses (surah, ayah, next_due, learned_at) VALUES (1, 1, '', '')",
        [],
      )
      .unwrap();
    let dup = conn.execute(
      "INSERT INTO tracked_verses (surah, ayah, next_due, learned_at) VALUES (1, 1, '', '')",
      [],
    );
    assert!(dup.is_err());
  }
}
