//! Tracked-verse CRUD and schedule state persistence.
//!
//! This is the store the review workflow goes through: `get_all_tracked`
//! reads every verse with its schedule and `update_after_review` writes
//! one schedule back.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, Row, params};

use crate::domain::{Quality, ScheduleState, TrackedVerse, VerseRef};

pub fn insert_tracked_verse(conn: &Connection, verse: &TrackedVerse) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO tracked_verses (surah, ayah, strength_factor, interval_days, review_count,
                                next_due, last_quality, learned_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#,
        params![
            verse.verse.surah as i64,
            verse.verse.ayah as i64,
            verse.schedule.strength_factor,
            verse.schedule.interval_days,
            verse.schedule.review_count,
            verse.schedule.next_due.to_rfc3339(),
            verse.schedule.last_quality.map(|q| q.as_str()),
            verse.learned_at.to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_verse_by_id(conn: &Connection, id: i64) -> Result<Option<TrackedVerse>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, surah, ayah, strength_factor, interval_days, review_count,
           next_due, last_quality, learned_at
    FROM tracked_verses WHERE id = ?1
    "#,
    )?;

    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_tracked(row)?))
    } else {
        Ok(None)
    }
}

pub fn get_verse_by_ref(conn: &Connection, verse: VerseRef) -> Result<Option<TrackedVerse>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, surah, ayah, strength_factor, interval_days, review_count,
           next_due, last_quality, learned_at
    FROM tracked_verses WHERE surah = ?1 AND ayah = ?2
    "#,
    )?;

    let mut rows = stmt.query(params![verse.surah as i64, verse.ayah as i64])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_tracked(row)?))
    } else {
        Ok(None)
    }
}

/// All tracked verses in mushaf order
pub fn get_all_tracked(conn: &Connection) -> Result<Vec<TrackedVerse>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, surah, ayah, strength_factor, interval_days, review_count,
           next_due, last_quality, learned_at
    FROM tracked_verses
    ORDER BY surah ASC, ayah ASC
    "#,
    )?;

    let verses = stmt
        .query_map([], |row| row_to_tracked(row))?
        .collect::<Result<Vec<_>>>()?;
    Ok(verses)
}

/// Persist the schedule state produced by the scheduler for one verse
pub fn update_after_review(conn: &Connection, id: i64, state: &ScheduleState) -> Result<()> {
    conn.execute(
        r#"
    UPDATE tracked_verses
    SET strength_factor = ?1, interval_days = ?2, review_count = ?3,
        next_due = ?4, last_quality = ?5
    WHERE id = ?6
    "#,
        params![
            state.strength_factor,
            state.interval_days,
            state.review_count,
            state.next_due.to_rfc3339(),
            state.last_quality.map(|q| q.as_str()),
            id,
        ],
    )?;
    Ok(())
}

/// Stop tracking a verse. Returns false when the id is unknown.
pub fn delete_tracked(conn: &Connection, id: i64) -> Result<bool> {
    conn.execute("DELETE FROM review_logs WHERE verse_id = ?1", params![id])?;
    let deleted = conn.execute("DELETE FROM tracked_verses WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}

fn row_to_tracked(row: &Row) -> Result<TrackedVerse> {
    let surah: i64 = row.get(1)?;
    let ayah: i64 = row.get(2)?;
    let next_due: String = row.get(6)?;
    let last_quality: Option<String> = row.get(7)?;
    let learned_at: String = row.get(8)?;

    Ok(TrackedVerse {
        id: row.get(0)?,
        verse: VerseRef {
            surah: surah as u16,
            ayah: ayah as u16,
        },
        schedule: ScheduleState {
            strength_factor: row.get(3)?,
            interval_days: row.get(4)?,
            review_count: row.get(5)?,
            next_due: parse_timestamp(&next_due),
            last_quality: last_quality.as_deref().and_then(Quality::from_str),
        },
        learned_at: parse_timestamp(&learned_at),
    })
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
