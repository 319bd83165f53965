//! Daygrid Library
//!
//! An embeddable month-calendar date picker: a headless model (grid
//! construction, per-day styling policy, single-selection state machine)
//! plus an optional iced rendering widget behind the `gui` feature.

pub mod animation;
pub mod calendar;
pub mod config;
pub mod grid;
pub mod picker;
pub mod policy;
pub mod selection;
pub mod style;
pub mod traits;

// GUI-only modules
#[cfg(feature = "gui")]
pub mod widgets;

// Re-export commonly used types
pub use animation::{FADE_DURATION_MS, Fade, FadeDirection};
pub use calendar::{
    days_in_month,
    first_of_month,
    is_today,
    last_of_month,
    month_description,
    next_month_anchor,
    previous_month_anchor,
    same_month,
    start_of_week,
    weekday_symbol,
    weekday_symbols,
};
pub use config::{AppConfig, ConfigError, PickerConfig, parse_weekday};
pub use grid::{CellIndex, DAYS_PER_WEEK, DayCell, MonthGrid, Week};
pub use picker::DatePicker;
pub use policy::{DayAppearance, DayPolicy, DefaultPolicy, StaticPolicy, resolve_appearance};
pub use selection::{
    CellPoint, DayInteraction, HitRegion, InteractionOutcome, LONG_PRESS_MARGIN,
    SelectionController,
};
pub use style::{FontScale, LabelFont, Rgba, SelectionShape};
pub use traits::{
    Clock, MockClock, MockObserver, NoopObserver, PickerEvent, PickerObserver, SystemClock,
};
