//! age.rs
//!
//! Exact elapsed-age computation from a birth date:
//!     years / months / weeks / days, plus cumulative totals
//!     (days, hours, minutes) over the whole elapsed span.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month preceding *today*)
//!   • leap years
//!   • varying month lengths
//!
//! The calendar breakdown and the cumulative totals are two independent views
//! of the same elapsed time: the breakdown borrows month lengths, the totals
//! divide one millisecond span with fixed unit sizes (ceil for days, floor for
//! hours and minutes). They are not required to reconcile exactly.

use chrono::{Datelike, NaiveDate};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Full age breakdown for one (birth date, evaluation date) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeResult {
    pub years: u32,
    /// 0–11.
    pub months: u32,
    /// 0–4, whole weeks of the remainder days after months are subtracted.
    pub weeks: u32,
    /// 0–6, remainder after weeks.
    pub days: u32,
    pub total_days: u64,
    pub total_hours: u64,
    pub total_minutes: u64,
    pub zodiac_sign: &'static str,
}

/// Computes the age between `birthdate` and `today`.
///
/// Total function: callers must reject `birthdate > today` beforehand.
///
/// The day borrow always takes the length of the month immediately preceding
/// `today`'s month, never the birth month. That is the normative rule of this
/// calculator (it matches the usual "how old am I" tools), even though it can
/// feel surprising across leap-year boundaries.
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> AgeResult {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut raw_days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if raw_days < 0 {
        months -= 1;

        // Determine the previous month relative to `today`.
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        raw_days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    // A birth day-of-month longer than the borrowed month (e.g. Jan 31 seen
    // from Mar 1) can leave the remainder at -1 or -2; clamp so the
    // weeks/days decomposition stays in range.
    let raw_days = raw_days.max(0);

    let diff_millis = today
        .signed_duration_since(birthdate)
        .num_milliseconds()
        .abs();
    let (total_days, total_hours, total_minutes) = totals_from_millis(diff_millis);

    AgeResult {
        years: years as u32,
        months: months as u32,
        weeks: (raw_days / 7) as u32,
        days: (raw_days % 7) as u32,
        total_days,
        total_hours,
        total_minutes,
        zodiac_sign: zodiac_sign(birthdate.month(), birthdate.day()),
    }
}

/// Total elapsed (days, hours, minutes) for a millisecond span.
///
/// Days round up, hours and minutes truncate. The asymmetry is part of the
/// output contract, not an accident.
fn totals_from_millis(diff_millis: i64) -> (u64, u64, u64) {
    let total_days = (diff_millis + MS_PER_DAY - 1) / MS_PER_DAY;
    let total_hours = diff_millis / MS_PER_HOUR;
    let total_minutes = diff_millis / MS_PER_MINUTE;
    (total_days as u64, total_hours as u64, total_minutes as u64)
}

/// Western zodiac sign (Vietnamese label) for a month/day, year-independent.
///
/// The twelve inclusive ranges partition the year with no gaps or overlaps;
/// Ma Kết (Dec 22 – Jan 19) is the fallback arm.
pub fn zodiac_sign(month: u32, day: u32) -> &'static str {
    match (month, day) {
        (1, 20..) | (2, ..=18) => "Bảo Bình",
        (2, 19..) | (3, ..=20) => "Song Ngư",
        (3, 21..) | (4, ..=19) => "Bạch Dương",
        (4, 20..) | (5, ..=20) => "Kim Ngưu",
        (5, 21..) | (6, ..=20) => "Song Tử",
        (6, 21..) | (7, ..=22) => "Cự Giải",
        (7, 23..) | (8, ..=22) => "Sư Tử",
        (8, 23..) | (9, ..=22) => "Xử Nữ",
        (9, 23..) | (10, ..=22) => "Thiên Bình",
        (10, 23..) | (11, ..=21) => "Thiên Yết",
        (11, 22..) | (12, ..=21) => "Nhân Mã",
        _ => "Ma Kết",
    }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn same_day_is_all_zero() {
        let today = d(2024, 7, 15);
        let age = compute_age(today, today);
        assert_eq!(age.years, 0);
        assert_eq!(age.months, 0);
        assert_eq!(age.weeks, 0);
        assert_eq!(age.days, 0);
        assert_eq!(age.total_days, 0);
        assert_eq!(age.total_hours, 0);
        assert_eq!(age.total_minutes, 0);
    }

    #[test]
    fn simple_breakdown() {
        // 1992-06-14 → 2024-07-01: 32 years, 17 remainder days.
        let age = compute_age(d(1992, 6, 14), d(2024, 7, 1));
        assert_eq!(age.years, 32);
        assert_eq!(age.months, 0);
        assert_eq!(age.weeks, 2);
        assert_eq!(age.days, 3);
    }

    #[test]
    fn day_borrow_uses_month_before_today() {
        // Day underflow in March borrows February of *today's* year (29 days
        // in 2000), not the birth month.
        let age = compute_age(d(2000, 1, 15), d(2000, 3, 1));
        assert_eq!(age.years, 0);
        assert_eq!(age.months, 1);
        // raw = 1 - 15 + 29 = 15
        assert_eq!(age.weeks, 2);
        assert_eq!(age.days, 1);
    }

    #[test]
    fn leap_day_birth_across_leap_boundary() {
        // Birth on a leap day, evaluated just past the next (non-leap)
        // February: the borrow takes Feb 2001's 28 days.
        let age = compute_age(d(2000, 2, 29), d(2001, 3, 1));
        assert_eq!(age.years, 1);
        assert_eq!(age.months, 0);
        assert_eq!(age.weeks, 0);
        assert_eq!(age.days, 0);
    }

    #[test]
    fn month_underflow_borrows_a_year() {
        let age = compute_age(d(1999, 12, 31), d(2000, 1, 1));
        assert_eq!(age.years, 0);
        assert_eq!(age.months, 0);
        assert_eq!(age.weeks, 0);
        assert_eq!(age.days, 1);
        assert_eq!(age.total_days, 1);
        assert_eq!(age.total_hours, 24);
    }

    #[test]
    fn breakdown_stays_in_range() {
        let birthdays = [
            d(1970, 1, 1),
            d(1992, 6, 14),
            d(2000, 1, 31),
            d(2000, 2, 29),
            d(2003, 12, 22),
        ];
        for birth in birthdays {
            let mut today = birth;
            for _ in 0..500 {
                let age = compute_age(birth, today);
                assert!(age.months <= 11, "{birth} → {today}: months {}", age.months);
                assert!(age.weeks <= 4, "{birth} → {today}: weeks {}", age.weeks);
                assert!(age.days <= 6, "{birth} → {today}: days {}", age.days);
                today = today.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn advancing_today_never_decreases_age() {
        let birth = d(1995, 8, 31);
        let mut today = birth;
        let mut prev = compute_age(birth, today);
        for _ in 0..1200 {
            today = today.succ_opt().unwrap();
            let age = compute_age(birth, today);
            assert!(age.total_days >= prev.total_days);
            assert!(age.total_hours >= prev.total_hours);
            assert!(age.total_minutes >= prev.total_minutes);
            assert!((age.years, age.months) >= (prev.years, prev.months));
            prev = age;
        }
    }

    #[test]
    fn weeks_and_days_recompose_raw_remainder() {
        // Pairs with a known post-borrow raw remainder.
        let cases = [
            (d(1992, 6, 14), d(2024, 7, 1), 17),
            (d(2000, 1, 15), d(2000, 3, 1), 15),
            (d(2010, 5, 3), d(2010, 5, 31), 28),
            (d(2010, 5, 3), d(2010, 6, 2), 30),
        ];
        for (birth, today, raw) in cases {
            let age = compute_age(birth, today);
            assert_eq!(age.weeks * 7 + age.days, raw, "{birth} → {today}");
        }
    }

    #[test]
    fn totals_ceil_days_but_floor_hours_and_minutes() {
        // 25 hours exactly: days round up to 2, hours and minutes truncate.
        assert_eq!(totals_from_millis(90_000_000), (2, 25, 1500));
        assert_eq!(totals_from_millis(0), (0, 0, 0));
        assert_eq!(totals_from_millis(1), (1, 0, 0));
        assert_eq!(totals_from_millis(MS_PER_DAY), (1, 24, 1440));
    }

    #[test]
    fn zodiac_boundaries() {
        let boundaries = [
            (1, 19, "Ma Kết"),
            (1, 20, "Bảo Bình"),
            (2, 18, "Bảo Bình"),
            (2, 19, "Song Ngư"),
            (3, 20, "Song Ngư"),
            (3, 21, "Bạch Dương"),
            (4, 19, "Bạch Dương"),
            (4, 20, "Kim Ngưu"),
            (5, 20, "Kim Ngưu"),
            (5, 21, "Song Tử"),
            (6, 20, "Song Tử"),
            (6, 21, "Cự Giải"),
            (7, 22, "Cự Giải"),
            (7, 23, "Sư Tử"),
            (8, 22, "Sư Tử"),
            (8, 23, "Xử Nữ"),
            (9, 22, "Xử Nữ"),
            (9, 23, "Thiên Bình"),
            (10, 22, "Thiên Bình"),
            (10, 23, "Thiên Yết"),
            (11, 21, "Thiên Yết"),
            (11, 22, "Nhân Mã"),
            (12, 21, "Nhân Mã"),
            (12, 22, "Ma Kết"),
        ];
        for (month, day, expected) in boundaries {
            assert_eq!(zodiac_sign(month, day), expected, "{month}/{day}");
        }
    }

    #[test]
    fn zodiac_covers_every_day_of_the_year() {
        // 2000 is a leap year, so Feb 29 is covered too.
        let mut date = d(2000, 1, 1);
        while date.year() == 2000 {
            let sign = zodiac_sign(date.month(), date.day());
            assert!(!sign.is_empty());
            date = date.succ_opt().unwrap();
        }
    }
}
