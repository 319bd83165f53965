//! The picker facade.
//!
//! [`DatePicker`] owns one presented month page, the per-cell appearance
//! cache and the selection state machine, and notifies the host observer
//! when a day is committed or another month is presented. Rendering layers
//! read from it; interaction glue feeds [`DayInteraction`] values into it.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    calendar,
    grid::{CellIndex, MonthGrid},
    policy::{self, DayAppearance, DayPolicy},
    selection::{DayInteraction, HitRegion, InteractionOutcome, SelectionController},
    traits::{Clock, PickerObserver},
};

pub struct DatePicker {
    policy: Arc<dyn DayPolicy>,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn PickerObserver>,
    grid: MonthGrid,
    appearances: Vec<DayAppearance>,
    selection: SelectionController,
}

impl DatePicker {
    /// Create a picker presenting the month of `present`.
    ///
    /// `present` starts out selected when the policy allows it; otherwise no
    /// date is selected. The observer immediately receives the initial
    /// `month_presented` notification.
    pub fn new(
        present: NaiveDate,
        policy: Arc<dyn DayPolicy>,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn PickerObserver>,
    ) -> Self {
        let grid = MonthGrid::build(present, policy.first_weekday());
        let initial = policy.is_selectable(present).then_some(present);

        let mut picker = Self {
            policy,
            clock,
            observer,
            grid,
            appearances: Vec::new(),
            selection: SelectionController::new(initial),
        };
        picker.refresh_appearances();
        picker.notify_month_presented();
        picker
    }

    // ==================== Read Access ====================

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn policy(&self) -> &dyn DayPolicy {
        self.policy.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.selected_date()
    }

    pub fn semi_selected_date(&self) -> Option<NaiveDate> {
        self.selection.semi_selected_date()
    }

    /// Display label of the presented month, e.g. "June 2026".
    pub fn month_description(&self) -> String {
        self.grid.description()
    }

    /// Weekday symbols for the header row, in display order.
    pub fn weekday_symbols(&self) -> [&'static str; 7] {
        calendar::weekday_symbols(self.grid.first_weekday())
    }

    /// Resolved appearance of the cell at `index`.
    pub fn appearance_at(&self, index: CellIndex) -> &DayAppearance {
        &self.appearances[index.flat()]
    }

    /// Resolved appearance of the cell showing `date`, if on this page.
    pub fn appearance_of(&self, date: NaiveDate) -> Option<&DayAppearance> {
        self.grid
            .position_of(date)
            .map(|idx| self.appearance_at(idx))
    }

    /// Whether the cell showing `date` accepts interaction. Off-page dates
    /// are never selectable.
    pub fn is_day_selectable(&self, date: NaiveDate) -> bool {
        self.appearance_of(date).is_some_and(|a| a.interactive)
    }

    // ==================== Interaction ====================

    /// Route one pointer interaction on the cell showing `date`.
    ///
    /// Ineligible days (hidden, non-selectable, off-page) are silently
    /// refused. A committed selection is reported to the observer.
    pub fn handle_interaction(
        &mut self,
        date: NaiveDate,
        interaction: DayInteraction,
        hit: HitRegion,
    ) -> InteractionOutcome {
        let selectable = self.is_day_selectable(date);
        let outcome = self.selection.handle(date, selectable, interaction, hit);

        if let Some(committed) = outcome.committed {
            if let Err(error) = self.observer.day_selected(committed) {
                tracing::warn!(%error, "day_selected observer failed");
            }
        }
        outcome
    }

    /// Drop any active semi-selection preview, e.g. when the pointer leaves
    /// the grid entirely or the month changes mid-gesture.
    pub fn cancel_preview(&mut self) {
        self.selection.semi_deselect();
    }

    // ==================== Navigation ====================

    /// Present the month containing `date`. Presenting the current month
    /// again is a no-op; the selection is never moved or cleared by
    /// navigation.
    pub fn present(&mut self, date: NaiveDate) {
        if self.grid.contains_month(date) {
            return;
        }
        self.grid = MonthGrid::build(date, self.policy.first_weekday());
        self.refresh_appearances();
        self.notify_month_presented();
    }

    /// Present the following month, if representable.
    pub fn show_next_month(&mut self) {
        match calendar::next_month_anchor(self.grid.anchor()) {
            Some(anchor) => self.present(anchor),
            None => tracing::debug!("already at the last representable month"),
        }
    }

    /// Present the preceding month, if representable.
    pub fn show_previous_month(&mut self) {
        match calendar::previous_month_anchor(self.grid.anchor()) {
            Some(anchor) => self.present(anchor),
            None => tracing::debug!("already at the first representable month"),
        }
    }

    // ==================== Policy Refresh ====================

    /// Re-evaluate every cell against the current policy values without
    /// rebuilding the grid. Hosts call this after their availability or
    /// color rules change.
    pub fn reload_availability(&mut self) {
        self.refresh_appearances();
    }

    fn refresh_appearances(&mut self) {
        let today = self.clock.today();
        self.appearances = self
            .grid
            .days()
            .map(|day| policy::resolve_appearance(day, self.policy.as_ref(), today))
            .collect();
    }

    fn notify_month_presented(&self) {
        let description = self.grid.description();
        tracing::debug!(%description, "month presented");
        if let Err(error) = self.observer.month_presented(&description) {
            tracing::warn!(%error, "month_presented observer failed");
        }
    }
}
