//! Host customization of the picker, and per-cell appearance resolution.
//!
//! A [`DayPolicy`] is the single surface through which a host application
//! customizes the picker: selectability, colors, fonts, the selection shape,
//! the first weekday and out-of-month visibility. Every hook has a default,
//! so a host only overrides what it cares about. All hooks must be pure
//! lookups; they are re-evaluated on every grid build and on
//! availability reloads.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{
    grid::DayCell,
    style::{self, LabelFont, Rgba, SelectionShape},
};

/// Host-supplied customization hooks.
pub trait DayPolicy: Send + Sync {
    /// Whether `date` may be selected. Non-selectable days never receive
    /// interaction handlers and can never become selected or semi-selected.
    fn is_selectable(&self, _date: NaiveDate) -> bool {
        true
    }

    /// Label color override for a specific date. Takes precedence over the
    /// in-month default and over the unavailable label color.
    fn color_for_date(&self, _date: NaiveDate) -> Option<Rgba> {
        None
    }

    /// Background color override for a specific date.
    fn background_for_date(&self, _date: NaiveDate) -> Option<Rgba> {
        None
    }

    /// Whether leading/trailing days of the neighbouring months are shown.
    fn show_out_of_month_days(&self) -> bool {
        true
    }

    /// Which weekday starts a week.
    fn first_weekday(&self) -> Weekday {
        Weekday::Mon
    }

    fn in_month_text(&self) -> Rgba {
        style::IN_MONTH_TEXT
    }

    fn in_month_background(&self) -> Rgba {
        style::IN_MONTH_BG
    }

    fn out_of_month_text(&self) -> Rgba {
        style::OUT_OF_MONTH_TEXT
    }

    fn out_of_month_background(&self) -> Rgba {
        style::OUT_OF_MONTH_BG
    }

    fn unavailable_text(&self) -> Rgba {
        style::UNAVAILABLE_TEXT
    }

    fn unavailable_background(&self) -> Rgba {
        style::UNAVAILABLE_BG
    }

    fn today_text(&self) -> Rgba {
        style::TODAY_TEXT
    }

    fn selected_text(&self) -> Rgba {
        style::SELECTED_TEXT
    }

    fn selection_fill(&self) -> Rgba {
        style::SELECTION_FILL
    }

    fn semi_selection_fill(&self) -> Rgba {
        style::SEMI_SELECTION_FILL
    }

    fn selection_shape(&self) -> SelectionShape {
        SelectionShape::default()
    }

    fn label_font(&self) -> LabelFont {
        LabelFont::default()
    }
}

/// Policy with every hook at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl DayPolicy for DefaultPolicy {}

/// Resolved display state of one cell, before selection styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAppearance {
    /// False for hidden out-of-month cells: no label, no background.
    pub visible: bool,
    /// Whether the cell receives interaction handlers.
    pub interactive: bool,
    pub text: Rgba,
    pub background: Rgba,
}

impl DayAppearance {
    fn hidden() -> Self {
        Self {
            visible: false,
            interactive: false,
            text: Rgba::rgba(0.0, 0.0, 0.0, 0.0),
            background: Rgba::rgba(0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// Resolve the appearance of `day` under `policy`.
///
/// The precedence order matters: per-date overrides beat the unavailable
/// styling, and the today label color beats everything except the selected
/// state (which the rendering layer applies on top).
pub fn resolve_appearance(
    day: &DayCell,
    policy: &dyn DayPolicy,
    today: NaiveDate,
) -> DayAppearance {
    if !day.in_month && !policy.show_out_of_month_days() {
        return DayAppearance::hidden();
    }

    let selectable = policy.is_selectable(day.date);

    let (mut text, mut background) = if day.in_month {
        let text = policy.color_for_date(day.date).unwrap_or(policy.in_month_text());
        let background = policy
            .background_for_date(day.date)
            .unwrap_or(policy.in_month_background());
        (text, background)
    } else {
        (policy.out_of_month_text(), policy.out_of_month_background())
    };

    if !selectable {
        // Per-date overrides survive the unavailable styling, each channel
        // independently. Out-of-month cells never carry overrides.
        if !day.in_month || policy.color_for_date(day.date).is_none() {
            text = policy.unavailable_text();
        }
        if !day.in_month || policy.background_for_date(day.date).is_none() {
            background = policy.unavailable_background();
        }
    }

    // Today wins over everything resolved so far, including unavailable.
    if day.date == today {
        text = policy.today_text();
    }

    DayAppearance {
        visible: true,
        interactive: selectable,
        text,
        background,
    }
}

/// A policy configured from plain values, with weekday-based rules.
///
/// This is what the demo application builds from its configuration file; it
/// is also convenient in tests. Weekdays listed in `unselectable_weekdays`
/// are unavailable, and `flagged_weekday` receives per-date color overrides.
#[derive(Debug, Clone)]
pub struct StaticPolicy {
    pub unselectable_weekdays: Vec<Weekday>,
    pub unselectable_dates: Vec<NaiveDate>,
    pub flagged_weekday: Option<Weekday>,
    pub flagged_text: Option<Rgba>,
    pub flagged_background: Option<Rgba>,
    pub show_out_of_month_days: bool,
    pub first_weekday: Weekday,
    pub selection_shape: SelectionShape,
    pub label_font: LabelFont,
}

impl Default for StaticPolicy {
    fn default() -> Self {
        Self {
            unselectable_weekdays: Vec::new(),
            unselectable_dates: Vec::new(),
            flagged_weekday: None,
            flagged_text: None,
            flagged_background: None,
            show_out_of_month_days: true,
            first_weekday: Weekday::Mon,
            selection_shape: SelectionShape::default(),
            label_font: LabelFont::default(),
        }
    }
}

impl StaticPolicy {
    fn is_flagged(&self, date: NaiveDate) -> bool {
        self.flagged_weekday.is_some_and(|w| date.weekday() == w)
    }
}

impl DayPolicy for StaticPolicy {
    fn is_selectable(&self, date: NaiveDate) -> bool {
        !self.unselectable_weekdays.contains(&date.weekday())
            && !self.unselectable_dates.contains(&date)
    }

    fn color_for_date(&self, date: NaiveDate) -> Option<Rgba> {
        if self.is_flagged(date) { self.flagged_text } else { None }
    }

    fn background_for_date(&self, date: NaiveDate) -> Option<Rgba> {
        if self.is_flagged(date) {
            self.flagged_background
        } else {
            None
        }
    }

    fn show_out_of_month_days(&self) -> bool {
        self.show_out_of_month_days
    }

    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn selection_shape(&self) -> SelectionShape {
        self.selection_shape
    }

    fn label_font(&self) -> LabelFont {
        self.label_font.clone()
    }
}
