//! Integration tests for the picker using mock dependencies.
//!
//! These tests drive the full interaction surface (tap, long-press phases,
//! month navigation, availability reloads) with MockClock and MockObserver
//! for deterministic, reproducible behavior.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use daygrid::{
    CellPoint, Clock, DatePicker, DayInteraction, DayPolicy, DefaultPolicy, HitRegion,
    LONG_PRESS_MARGIN, MockClock, MockObserver, PickerEvent, StaticPolicy,
};

const CELL: HitRegion = HitRegion::new(44.0, 38.0);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock_at(d: NaiveDate) -> Arc<MockClock> {
    Arc::new(MockClock::new(
        Utc.with_ymd_and_hms(
            chrono::Datelike::year(&d),
            chrono::Datelike::month(&d),
            chrono::Datelike::day(&d),
            12,
            0,
            0,
        )
        .unwrap(),
    ))
}

fn make_picker(
    present: NaiveDate,
    policy: impl DayPolicy + 'static,
) -> (DatePicker, Arc<MockObserver>) {
    let observer = Arc::new(MockObserver::new());
    let picker = DatePicker::new(
        present,
        Arc::new(policy),
        clock_at(present),
        observer.clone(),
    );
    (picker, observer)
}

fn weekend_blocked() -> StaticPolicy {
    StaticPolicy {
        unselectable_weekdays: vec![Weekday::Sat, Weekday::Sun],
        ..Default::default()
    }
}

// ==================== Selection Commitment Tests ====================

/// Taps and long-press commits never leave more than one selected date.
#[test]
fn test_single_selection_across_interaction_sequences() {
    let (mut picker, observer) = make_picker(date(2026, 6, 17), DefaultPolicy);

    let sequence = [
        (date(2026, 6, 3), DayInteraction::TapEnd),
        (date(2026, 6, 8), DayInteraction::LongPressEnd),
        (date(2026, 6, 25), DayInteraction::TapEnd),
        (date(2026, 6, 25), DayInteraction::TapEnd),
    ];

    for (day, interaction) in sequence {
        picker.handle_interaction(day, interaction, CELL);
        assert_eq!(picker.selected_date(), Some(day));
        assert_eq!(picker.semi_selected_date(), None);
    }

    // Every commit was reported, in order.
    assert_eq!(
        observer.selected_dates(),
        vec![
            date(2026, 6, 3),
            date(2026, 6, 8),
            date(2026, 6, 25),
            date(2026, 6, 25),
        ]
    );
}

/// Selecting a non-selectable date leaves the state byte-for-byte equal.
#[test]
fn test_tap_on_blocked_weekend_is_noop() {
    let (mut picker, observer) = make_picker(date(2026, 6, 17), weekend_blocked());
    let before = picker.selected_date();

    // 2026-06-20 is a Saturday.
    let outcome = picker.handle_interaction(date(2026, 6, 20), DayInteraction::TapEnd, CELL);

    assert_eq!(outcome.committed, None);
    assert_eq!(picker.selected_date(), before);
    assert_eq!(observer.selected_dates(), Vec::<NaiveDate>::new());
}

/// The presented date only starts selected when the policy allows it.
#[test]
fn test_initial_selection_respects_policy() {
    // 2026-06-21 is a Sunday.
    let (picker, _) = make_picker(date(2026, 6, 21), weekend_blocked());
    assert_eq!(picker.selected_date(), None);

    let (picker, _) = make_picker(date(2026, 6, 17), weekend_blocked());
    assert_eq!(picker.selected_date(), Some(date(2026, 6, 17)));
}

// ==================== Long-Press Preview Tests ====================

/// A full preview cycle: begin, wander inside, commit on release.
#[test]
fn test_long_press_preview_then_commit() {
    let (mut picker, observer) = make_picker(date(2026, 6, 17), DefaultPolicy);
    let target = date(2026, 6, 23);

    picker.handle_interaction(target, DayInteraction::LongPressBegin, CELL);
    assert_eq!(picker.semi_selected_date(), Some(target));
    // Previewing alone never notifies the host.
    assert_eq!(observer.selected_dates(), Vec::<NaiveDate>::new());

    picker.handle_interaction(
        target,
        DayInteraction::LongPressMove(CellPoint::new(10.0, 10.0)),
        CELL,
    );
    assert_eq!(picker.semi_selected_date(), Some(target));

    let outcome = picker.handle_interaction(target, DayInteraction::LongPressEnd, CELL);

    assert_eq!(outcome.committed, Some(target));
    assert_eq!(picker.selected_date(), Some(target));
    assert_eq!(picker.semi_selected_date(), None);
    assert_eq!(observer.selected_dates(), vec![target]);
}

/// Dragging past the expanded hit region cancels the preview, requests a
/// gesture reset, and leaves no residue for the next press.
#[test]
fn test_drag_out_cancels_cleanly() {
    let (mut picker, observer) = make_picker(date(2026, 6, 17), DefaultPolicy);
    let target = date(2026, 6, 23);

    picker.handle_interaction(target, DayInteraction::LongPressBegin, CELL);

    let outside = CellPoint::new(CELL.width + LONG_PRESS_MARGIN + 5.0, 0.0);
    let outcome =
        picker.handle_interaction(target, DayInteraction::LongPressMove(outside), CELL);

    assert!(outcome.reset_gesture);
    assert_eq!(picker.semi_selected_date(), None);
    assert_eq!(picker.selected_date(), Some(date(2026, 6, 17)));
    assert_eq!(observer.selected_dates(), Vec::<NaiveDate>::new());

    // A fresh press starts a brand-new preview cycle.
    picker.handle_interaction(target, DayInteraction::LongPressBegin, CELL);
    assert_eq!(picker.semi_selected_date(), Some(target));
}

/// Long-pressing the already-selected day shows no preview at all.
#[test]
fn test_long_press_on_selected_day_shows_no_preview() {
    let d = date(2026, 6, 17);
    let (mut picker, _) = make_picker(d, DefaultPolicy);

    picker.handle_interaction(d, DayInteraction::LongPressBegin, CELL);

    assert_eq!(picker.semi_selected_date(), None);
}

// ==================== Month Navigation Tests ====================

/// Selection survives navigating away and back.
#[test]
fn test_selection_survives_month_round_trip() {
    let d = date(2026, 6, 17);
    let (mut picker, _) = make_picker(d, DefaultPolicy);

    picker.show_next_month();
    picker.show_next_month();
    picker.show_previous_month();
    picker.show_previous_month();

    assert_eq!(picker.selected_date(), Some(d));
    assert!(picker.grid().day(d).is_some_and(|cell| cell.in_month));
}

/// Month presentations are announced with their display labels.
#[test]
fn test_navigation_event_stream() {
    let (mut picker, observer) = make_picker(date(2026, 1, 15), DefaultPolicy);

    picker.show_previous_month();
    picker.show_next_month();
    picker.handle_interaction(date(2026, 1, 20), DayInteraction::TapEnd, CELL);

    assert_eq!(
        observer.events(),
        vec![
            PickerEvent::MonthPresented("January 2026".to_string()),
            PickerEvent::MonthPresented("December 2025".to_string()),
            PickerEvent::MonthPresented("January 2026".to_string()),
            PickerEvent::DaySelected(date(2026, 1, 20)),
        ]
    );
}

/// A selection on the previous page is not reachable for interaction but
/// stays recorded.
#[test]
fn test_off_page_selection_is_kept_but_untouchable() {
    let d = date(2026, 6, 17);
    let (mut picker, observer) = make_picker(d, DefaultPolicy);

    picker.show_next_month();

    // Tapping the old date now refers to an off-page cell: refused.
    let outcome = picker.handle_interaction(d, DayInteraction::TapEnd, CELL);
    assert_eq!(outcome.committed, None);
    assert_eq!(picker.selected_date(), Some(d));
    assert_eq!(observer.selected_dates(), Vec::<NaiveDate>::new());
}

/// Shown out-of-month days take part in selection like any other day.
#[test]
fn test_out_of_month_day_selection() {
    // July 2026 leads with June 29 and 30 under Monday-first weeks.
    let (mut picker, observer) = make_picker(date(2026, 7, 15), DefaultPolicy);
    let filler = date(2026, 6, 30);

    let outcome = picker.handle_interaction(filler, DayInteraction::TapEnd, CELL);

    assert_eq!(outcome.committed, Some(filler));
    assert_eq!(observer.selected_dates(), vec![filler]);
}

/// Hidden out-of-month days are completely inert.
#[test]
fn test_hidden_out_of_month_days_are_inert() {
    let policy = StaticPolicy {
        show_out_of_month_days: false,
        ..Default::default()
    };
    let (mut picker, _) = make_picker(date(2026, 7, 15), policy);
    let filler = date(2026, 6, 30);

    assert!(!picker.is_day_selectable(filler));
    assert!(picker.appearance_of(filler).is_some_and(|a| !a.visible));

    picker.handle_interaction(filler, DayInteraction::LongPressBegin, CELL);
    assert_eq!(picker.semi_selected_date(), None);
}

// ==================== Today & Appearance Tests ====================

/// The documented precedence: an unavailable day that is today shows the
/// current-day label color.
#[test]
fn test_today_styling_beats_unavailable() {
    // The clock sits on a weekend day; both weekend days are blocked, so
    // today is unavailable whatever the local timezone makes of the instant.
    let clock = clock_at(date(2026, 6, 20));
    let today = clock.today();
    let picker = DatePicker::new(
        today,
        Arc::new(weekend_blocked()),
        clock,
        Arc::new(MockObserver::new()),
    );

    let appearance = picker.appearance_of(today).unwrap();

    assert!(!appearance.interactive);
    assert_eq!(appearance.text, picker.policy().today_text());
}

/// Today styling follows the clock across midnight after a reload.
#[test]
fn test_today_styling_follows_clock() {
    let clock = clock_at(date(2026, 6, 17));
    let today = clock.today();
    let mut picker = DatePicker::new(
        today,
        Arc::new(DefaultPolicy),
        clock.clone(),
        Arc::new(MockObserver::new()),
    );

    assert_eq!(
        picker.appearance_of(today).unwrap().text,
        picker.policy().today_text()
    );

    clock.advance(chrono::Duration::days(1));
    picker.reload_availability();

    let tomorrow = today + chrono::Duration::days(1);
    assert_ne!(
        picker.appearance_of(today).unwrap().text,
        picker.policy().today_text()
    );
    assert_eq!(
        picker.appearance_of(tomorrow).unwrap().text,
        picker.policy().today_text()
    );
}
