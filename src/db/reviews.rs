//! Review logging and history queries

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, Result, params};

use crate::domain::{Quality, ReviewLog};

pub fn insert_review_log(conn: &Connection, log: &ReviewLog) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO review_logs (verse_id, quality, reviewed_at, interval_days)
    VALUES (?1, ?2, ?3, ?4)
    "#,
        params![
            log.verse_id,
            log.quality.as_str(),
            log.reviewed_at.to_rfc3339(),
            log.interval_days,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Recent reviews for a verse, newest first
pub fn get_reviews_for_verse(conn: &Connection, verse_id: i64, limit: usize) -> Result<Vec<ReviewLog>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, verse_id, quality, reviewed_at, interval_days
    FROM review_logs
    WHERE verse_id = ?1
    ORDER BY reviewed_at DESC
    LIMIT ?2
    "#,
    )?;

    let logs = stmt
        .query_map(params![verse_id, limit as i64], |row| {
            let quality: String = row.get(2)?;
            let reviewed_at: String = row.get(3)?;
            Ok(ReviewLog {
                id: row.get(0)?,
                verse_id: row.get(1)?,
                // Unknown quality strings should not exist; treat them as "good"
                quality: Quality::from_str(&quality).unwrap_or(Quality::Good),
                reviewed_at: DateTime::parse_from_rfc3339(&reviewed_at)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
                interval_days: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(logs)
}

/// Number of reviews completed on the calendar day of `now`
pub fn count_reviews_on(conn: &Connection, now: DateTime<Utc>) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM review_logs WHERE date(reviewed_at) = date(?1)",
        params![now.to_rfc3339()],
        |row| row.get(0),
    )
}

/// Consecutive days with at least one review, counting back from `today`.
///
/// A day with no review yet today does not break the streak as long as
/// yesterday had one.
pub fn get_review_streak(conn: &Connection, today: NaiveDate) -> Result<i64> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT date(reviewed_at) FROM review_logs ORDER BY 1 DESC")?;
    let days = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>>>()?;

    let mut streak = 0i64;
    let mut expected = today;
    for day in days {
        let Ok(day) = NaiveDate::parse_from_str(&day, "%Y-%m-%d") else {
            continue;
        };
        if day > expected {
            // Log from the future relative to the caller's clock; skip
            continue;
        }
        if streak == 0 && day == expected.pred_opt().unwrap_or(expected) {
            // No review yet today; streak still alive through yesterday
            expected = day;
        }
        if day == expected {
            streak += 1;
            expected = match expected.pred_opt() {
                Some(prev) => prev,
                None => break,
            };
        } else {
            break;
        }
    }
    Ok(streak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::verses::insert_tracked_verse;
    use crate::domain::{TrackedVerse, VerseRef};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 14, 0, 0).unwrap()
    }

    /// review_logs.verse_id has a foreign key to tracked_verses, so seed
    /// verses with ids 1-3 for the tests to log against.
    fn test_conn() -> Connection {
        let conn = crate::db::test_conn();
        for ayah in 1..=3 {
            let tracked = TrackedVerse::new(VerseRef::new(1, ayah).unwrap(), fixed_now());
            insert_tracked_verse(&conn, &tracked).unwrap();
        }
        conn
    }

    fn log_at(conn: &Connection, verse_id: i64, at: DateTime<Utc>) {
        let log = ReviewLog::new(verse_id, Quality::Good, 3, at);
        insert_review_log(conn, &log).unwrap();
    }

    #[test]
    fn test_insert_and_fetch() {
        let conn = test_conn();
        let log = ReviewLog::new(1, Quality::Easy, 7, fixed_now());
        let id = insert_review_log(&conn, &log).unwrap();
        assert!(id > 0);

        let logs = get_reviews_for_verse(&conn, 1, 10).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].quality, Quality::Easy);
        assert_eq!(logs[0].interval_days, 7);
    }

    #[test]
    fn test_fetch_newest_first() {
        let conn = test_conn();
        log_at(&conn, 1, fixed_now() - Duration::days(2));
        log_at(&conn, 1, fixed_now());
        log_at(&conn, 2, fixed_now()); // other verse, excluded

        let logs = get_reviews_for_verse(&conn, 1, 10).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].reviewed_at > logs[1].reviewed_at);
    }

    #[test]
    fn test_count_reviews_on_day() {
        let conn = test_conn();
        log_at(&conn, 1, fixed_now());
        log_at(&conn, 2, fixed_now() - Duration::hours(3));
        log_at(&conn, 3, fixed_now() - Duration::days(1));

        assert_eq!(count_reviews_on(&conn, fixed_now()).unwrap(), 2);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let conn = test_conn();
        log_at(&conn, 1, fixed_now());
        log_at(&conn, 1, fixed_now() - Duration::days(1));
        log_at(&conn, 1, fixed_now() - Duration::days(2));
        log_at(&conn, 1, fixed_now() - Duration::days(5)); // gap before this

        let streak = get_review_streak(&conn, fixed_now().date_naive()).unwrap();
        assert_eq!(streak, 3);
    }

    #[test]
    fn test_streak_survives_quiet_today() {
        let conn = test_conn();
        log_at(&conn, 1, fixed_now() - Duration::days(1));
        log_at(&conn, 1, fixed_now() - Duration::days(2));

        let streak = get_review_streak(&conn, fixed_now().date_naive()).unwrap();
        assert_eq!(streak, 2);
    }

    #[test]
    fn test_streak_broken_by_gap() {
        let conn = test_conn();
        log_at(&conn, 1, fixed_now() - Duration::days(3));

        let streak = get_review_streak(&conn, fixed_now().date_naive()).unwrap();
        assert_eq!(streak, 0);
    }

    #[test]
    fn test_streak_empty_log() {
        let conn = test_conn();
        assert_eq!(get_review_streak(&conn, fixed_now().date_naive()).unwrap(), 0);
    }
}
