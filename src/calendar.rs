//! Pure calendar arithmetic.
//!
//! Everything here works on `chrono::NaiveDate` — a date with the time of
//! day already stripped — so equality and ordering can never be disturbed by
//! time-of-day or DST artifacts. "Now" only enters through the [`Clock`]
//! trait.

use chrono::{Datelike, Days, Duration as ChronoDuration, NaiveDate, Weekday};

use crate::traits::Clock;

/// Check whether `date` is the current day according to `clock`.
pub fn is_today(date: NaiveDate, clock: &dyn Clock) -> bool {
    date == clock.today()
}

/// First calendar day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // day 1 always exists for a valid year/month pair
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    match next_month_anchor(date) {
        Some(next) => next - ChronoDuration::days(1),
        // At the end of the representable range; saturate to the max date.
        None => NaiveDate::MAX,
    }
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// First day of the next month, or `None` past the representable range.
pub fn next_month_anchor(date: NaiveDate) -> Option<NaiveDate> {
    let (mut year, mut month) = (date.year(), date.month());
    if month == 12 {
        month = 1;
        year += 1;
    } else {
        month += 1;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// First day of the previous month, or `None` past the representable range.
pub fn previous_month_anchor(date: NaiveDate) -> Option<NaiveDate> {
    let (mut year, mut month) = (date.year(), date.month());
    if month == 1 {
        month = 12;
        year -= 1;
    } else {
        month -= 1;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Walk back from `date` to the start of its week, where weeks begin on
/// `first_weekday`. Saturates at the representable range's first day.
pub fn start_of_week(date: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// True when both dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Display label for the month containing `date`, e.g. "June 2026".
pub fn month_description(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Two-letter symbol for a weekday, used in the header row.
pub fn weekday_symbol(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// The seven weekday symbols ordered from `first_weekday`.
pub fn weekday_symbols(first_weekday: Weekday) -> [&'static str; 7] {
    let mut day = first_weekday;
    std::array::from_fn(|_| {
        let symbol = weekday_symbol(day);
        day = day.succ();
        symbol
    })
}
