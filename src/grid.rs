//! The month grid model: day cells grouped into whole weeks.
//!
//! A [`MonthGrid`] is one navigable page of the picker. It always consists of
//! complete 7-day weeks; days before the first or after the last of the
//! anchor month are filled in from the neighbouring months and tagged
//! `in_month = false`. Cells are owned by value and addressed by
//! [`CellIndex`]; nothing in the grid points back at its parent.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendar;

pub const DAYS_PER_WEEK: usize = 7;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The stripped date this cell represents.
    pub date: NaiveDate,
    /// Whether the date belongs to the presented month (false for filler).
    pub in_month: bool,
    /// Day-of-month ordinal, the visible label (1-31).
    pub day_value: u32,
    /// Column position within the week (0-6).
    pub index_in_week: usize,
}

/// A row of exactly seven consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    days: [DayCell; DAYS_PER_WEEK],
}

impl Week {
    /// Build the week starting at `start`, tagging month membership against
    /// `anchor`. Saturates at the end of the representable date range.
    fn build(start: NaiveDate, anchor: NaiveDate) -> Self {
        let days = std::array::from_fn(|i| {
            let date = start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(NaiveDate::MAX);
            DayCell {
                date,
                in_month: calendar::same_month(date, anchor),
                day_value: date.day(),
                index_in_week: i,
            }
        });
        Self { days }
    }

    pub fn days(&self) -> &[DayCell; DAYS_PER_WEEK] {
        &self.days
    }
}

/// Position of a cell within its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIndex {
    pub week: usize,
    pub day: usize,
}

impl CellIndex {
    /// Flat row-major offset, used to address per-cell side tables.
    pub fn flat(self) -> usize {
        self.week * DAYS_PER_WEEK + self.day
    }
}

/// One month page: 4-6 whole weeks covering every day of the anchor month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    anchor: NaiveDate,
    first_weekday: Weekday,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Build the grid for the month containing `date`, with weeks starting
    /// on `first_weekday`.
    pub fn build(date: NaiveDate, first_weekday: Weekday) -> Self {
        let anchor = calendar::first_of_month(date);
        let last = calendar::last_of_month(anchor);

        let mut weeks = Vec::with_capacity(6);
        let mut start = calendar::start_of_week(anchor, first_weekday);
        loop {
            weeks.push(Week::build(start, anchor));
            match start.checked_add_days(Days::new(DAYS_PER_WEEK as u64)) {
                Some(next) if next <= last => start = next,
                _ => break,
            }
        }

        Self {
            anchor,
            first_weekday,
            weeks,
        }
    }

    /// First day of the presented month.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Total number of cells (week count × 7).
    pub fn cell_count(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// Iterate all cells in display order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|w| w.days().iter())
    }

    /// Whether `date` falls inside the presented month.
    pub fn contains_month(&self, date: NaiveDate) -> bool {
        calendar::same_month(date, self.anchor)
    }

    /// Locate the cell showing `date`, if it is on this page.
    pub fn position_of(&self, date: NaiveDate) -> Option<CellIndex> {
        let first_shown = self.weeks.first()?.days()[0].date;
        let offset = (date - first_shown).num_days();
        if offset < 0 || offset as usize >= self.cell_count() {
            return None;
        }
        let offset = offset as usize;
        Some(CellIndex {
            week: offset / DAYS_PER_WEEK,
            day: offset % DAYS_PER_WEEK,
        })
    }

    /// The cell showing `date`, if it is on this page.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.position_of(date)
            .map(|idx| &self.weeks[idx.week].days()[idx.day])
    }

    /// Display label for the presented month, e.g. "June 2026".
    pub fn description(&self) -> String {
        calendar::month_description(self.anchor)
    }
}
