//! Memorization progress queries

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};
use serde::Serialize;

use crate::domain::quran;

/// Per-surah memorization progress
#[derive(Debug, Clone, Serialize)]
pub struct SurahProgress {
    pub surah: u16,
    pub name: &'static str,
    pub tracked_count: i64,
    pub ayah_count: u16,
}

pub fn get_total_tracked(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM tracked_verses", [], |row| row.get(0))
}

/// Count of verses due on or before the calendar day of `now`
pub fn get_due_count(conn: &Connection, now: DateTime<Utc>) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM tracked_verses WHERE date(next_due) <= date(?1)",
        params![now.to_rfc3339()],
        |row| row.get(0),
    )
}

/// Earliest upcoming review time, if any verse is tracked
pub fn get_next_due_time(conn: &Connection) -> Result<Option<DateTime<Utc>>> {
    let result: Option<String> =
        conn.query_row("SELECT MIN(next_due) FROM tracked_verses", [], |row| row.get(0))?;

    Ok(result.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }))
}

/// Mean strength factor across tracked verses (None when nothing is tracked)
pub fn get_average_strength(conn: &Connection) -> Result<Option<f64>> {
    conn.query_row("SELECT AVG(strength_factor) FROM tracked_verses", [], |row| {
        row.get(0)
    })
}

/// Progress per surah, limited to surahs with at least one tracked verse
pub fn get_surah_progress(conn: &Connection) -> Result<Vec<SurahProgress>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT surah, COUNT(*)
    FROM tracked_verses
    GROUP BY surah
    ORDER BY surah ASC
    "#,
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(rows
        .into_iter()
        .filter_map(|(surah, tracked_count)| {
            let meta = quran::get_surah(surah as u16)?;
            Some(SurahProgress {
                surah: meta.number,
                name: meta.name,
                tracked_count,
                ayah_count: meta.ayah_count,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_conn;
    use crate::db::verses::insert_tracked_verse;
    use crate::domain::{TrackedVerse, VerseRef};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 10, 0, 0).unwrap()
    }

    fn track(conn: &Connection, surah: u16, ayah: u16, learned: DateTime<Utc>) -> i64 {
        let tracked = TrackedVerse::new(VerseRef::new(surah, ayah).unwrap(), learned);
        insert_tracked_verse(conn, &tracked).unwrap()
    }

    #[test]
    fn test_total_and_due_counts() {
        let conn = test_conn();
        assert_eq!(get_total_tracked(&conn).unwrap(), 0);
        assert_eq!(get_due_count(&conn, fixed_now()).unwrap(), 0);

        // Fresh verses are due immediately
        track(&conn, 1, 1, fixed_now());
        track(&conn, 1, 2, fixed_now() - Duration::days(4));
        // Due tomorrow
        let id = track(&conn, 1, 3, fixed_now());
        let future = crate::domain::ScheduleState {
            strength_factor: 2.5,
            interval_days: 1,
            review_count: 1,
            next_due: fixed_now() + Duration::days(1),
            last_quality: None,
        };
        crate::db::verses::update_after_review(&conn, id, &future).unwrap();

        assert_eq!(get_total_tracked(&conn).unwrap(), 3);
        assert_eq!(get_due_count(&conn, fixed_now()).unwrap(), 2);
    }

    #[test]
    fn test_next_due_time() {
        let conn = test_conn();
        assert!(get_next_due_time(&conn).unwrap().is_none());

        track(&conn, 1, 1, fixed_now() + Duration::days(2));
        track(&conn, 1, 2, fixed_now());
        assert_eq!(get_next_due_time(&conn).unwrap(), Some(fixed_now()));
    }

    #[test]
    fn test_average_strength() {
        let conn = test_conn();
        assert!(get_average_strength(&conn).unwrap().is_none());

        track(&conn, 1, 1, fixed_now());
        let avg = get_average_strength(&conn).unwrap().unwrap();
        assert!((avg - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_surah_progress() {
        let conn = test_conn();
        track(&conn, 1, 1, fixed_now());
        track(&conn, 1, 2, fixed_now());
        track(&conn, 112, 1, fixed_now());

        let progress = get_surah_progress(&conn).unwrap();
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].surah, 1);
        assert_eq!(progress[0].name, "Al-Fatihah");
        assert_eq!(progress[0].tracked_count, 2);
        assert_eq!(progress[0].ayah_count, 7);
        assert_eq!(progress[1].surah, 112);
        assert_eq!(progress[1].tracked_count, 1);
    }
}
