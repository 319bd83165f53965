//! Selection state machine.
//!
//! [`SelectionController`] owns the committed selection and the transient
//! long-press preview ("semi-selection"), each at most one date at a time.
//! Interaction glue feeds it [`DayInteraction`] values; every ineligible
//! transition is a silent no-op. The controller re-validates selectability
//! on every commit even though non-selectable cells never get interaction
//! handlers in the first place.

use chrono::NaiveDate;

/// A pointer position relative to a cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPoint {
    pub x: f32,
    pub y: f32,
}

impl CellPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// How far outside the cell a long-press may wander before it cancels.
pub const LONG_PRESS_MARGIN: f32 = 40.0;

/// The cell bounds a long-press drag is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub width: f32,
    pub height: f32,
}

impl HitRegion {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `point` is inside the cell bounds expanded by
    /// [`LONG_PRESS_MARGIN`] on every side.
    pub fn contains(&self, point: CellPoint) -> bool {
        point.x >= -LONG_PRESS_MARGIN
            && point.x <= self.width + LONG_PRESS_MARGIN
            && point.y >= -LONG_PRESS_MARGIN
            && point.y <= self.height + LONG_PRESS_MARGIN
    }
}

/// A pointer event on a specific day cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayInteraction {
    /// A tap was released on the cell.
    TapEnd,
    /// A long-press crossed its activation threshold on the cell.
    LongPressBegin,
    /// The long-press pointer moved; the point is cell-relative.
    LongPressMove(CellPoint),
    /// The long-press was released.
    LongPressEnd,
}

/// What an interaction produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionOutcome {
    /// The date that was committed as selected, if any.
    pub committed: Option<NaiveDate>,
    /// The gesture recognizer must be reset so a re-entry starts a fresh
    /// press instead of resuming the cancelled one.
    pub reset_gesture: bool,
}

impl InteractionOutcome {
    fn none() -> Self {
        Self::default()
    }
}

/// Owner of the committed and preview selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<NaiveDate>,
    semi_selected: Option<NaiveDate>,
}

impl SelectionController {
    /// A controller with `initial` already selected. Callers gate `initial`
    /// on selectability; `None` starts with nothing selected.
    pub fn new(initial: Option<NaiveDate>) -> Self {
        Self {
            selected: initial,
            semi_selected: None,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn semi_selected_date(&self) -> Option<NaiveDate> {
        self.semi_selected
    }

    /// Commit `date` as the selection. The previous selection is dropped
    /// first; a non-selectable date leaves the state untouched.
    pub fn select(&mut self, date: NaiveDate, selectable: bool) -> Option<NaiveDate> {
        if !selectable {
            tracing::debug!(%date, "refusing selection of non-selectable day");
            return None;
        }
        self.deselect();
        self.selected = Some(date);
        tracing::debug!(%date, "day selected");
        Some(date)
    }

    /// Drop the committed selection, if any.
    pub fn deselect(&mut self) {
        if let Some(previous) = self.selected.take() {
            tracing::debug!(%previous, "day deselected");
        }
    }

    /// Show the preview indicator on `date`. No-op on the already-selected
    /// day and on non-selectable days.
    pub fn semi_select(&mut self, date: NaiveDate, selectable: bool) {
        if !selectable || self.selected == Some(date) {
            return;
        }
        self.semi_selected = Some(date);
        tracing::debug!(%date, "day semi-selected");
    }

    /// Remove the preview indicator. Safe to call when none is shown.
    pub fn semi_deselect(&mut self) {
        if let Some(previous) = self.semi_selected.take() {
            tracing::debug!(%previous, "day semi-deselected");
        }
    }

    /// Feed one interaction on the day `date` into the state machine.
    ///
    /// `selectable` is the resolved interactivity of the cell (month
    /// membership, visibility and policy already applied); `hit` is the
    /// cell's bounds for drag-out detection.
    pub fn handle(
        &mut self,
        date: NaiveDate,
        selectable: bool,
        interaction: DayInteraction,
        hit: HitRegion,
    ) -> InteractionOutcome {
        match interaction {
            DayInteraction::TapEnd => InteractionOutcome {
                committed: self.select(date, selectable),
                reset_gesture: false,
            },
            DayInteraction::LongPressBegin => {
                self.semi_select(date, selectable);
                InteractionOutcome::none()
            }
            DayInteraction::LongPressMove(point) => {
                if self.semi_selected == Some(date) && !hit.contains(point) {
                    self.semi_deselect();
                    return InteractionOutcome {
                        committed: None,
                        reset_gesture: true,
                    };
                }
                InteractionOutcome::none()
            }
            DayInteraction::LongPressEnd => {
                self.semi_deselect();
                InteractionOutcome {
                    committed: self.select(date, selectable),
                    reset_gesture: false,
                }
            }
        }
    }
}
