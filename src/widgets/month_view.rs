//! Canvas widget drawing one month page.
//!
//! The widget is draw-only: pointer events are captured by the application
//! with a `mouse_area` wrapper and fed back into the picker as
//! `DayInteraction` values. [`GridMetrics`] is the shared geometry both
//! sides use, so hit-testing and drawing can never disagree about where a
//! cell is.

use chrono::NaiveDate;
use iced::{
    Point, Rectangle, Renderer, Size, Theme, mouse,
    widget::canvas::{self, Path, Text},
};

use crate::{
    grid::{CellIndex, DAYS_PER_WEEK},
    picker::DatePicker,
    selection::{CellPoint, HitRegion},
    style::{self, SelectionShape},
};

/// Share of the widget height given to the weekday header row.
pub const HEADER_RATIO: f32 = 0.12;

/// Geometry of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub width: f32,
    pub height: f32,
    pub header_height: f32,
    pub weeks: usize,
}

impl GridMetrics {
    pub fn new(size: Size, weeks: usize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            header_height: size.height * HEADER_RATIO,
            weeks,
        }
    }

    /// Width and height of one day cell.
    pub fn cell_size(&self) -> (f32, f32) {
        (
            self.width / DAYS_PER_WEEK as f32,
            (self.height - self.header_height) / self.weeks as f32,
        )
    }

    /// The cell under `point`, if any. Points inside the header row map to
    /// no cell.
    pub fn cell_at(&self, point: Point) -> Option<CellIndex> {
        if point.x < 0.0 || point.x >= self.width {
            return None;
        }
        if point.y < self.header_height || point.y >= self.height {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size();
        Some(CellIndex {
            week: ((point.y - self.header_height) / cell_h) as usize,
            day: (point.x / cell_w) as usize,
        })
    }

    /// Top-left corner of the cell at `index`.
    pub fn cell_origin(&self, index: CellIndex) -> Point {
        let (cell_w, cell_h) = self.cell_size();
        Point::new(
            index.day as f32 * cell_w,
            self.header_height + index.week as f32 * cell_h,
        )
    }

    /// `point` translated into coordinates relative to the cell at `index`.
    pub fn point_in_cell(&self, point: Point, index: CellIndex) -> CellPoint {
        let origin = self.cell_origin(index);
        CellPoint::new(point.x - origin.x, point.y - origin.y)
    }

    /// The drag-cancel bounds of a single cell.
    pub fn hit_region(&self) -> HitRegion {
        let (cell_w, cell_h) = self.cell_size();
        HitRegion::new(cell_w, cell_h)
    }
}

pub struct MonthView<'a> {
    pub picker: &'a DatePicker,
    /// The semi-selection indicator to draw, with its fade alpha.
    pub semi: Option<(NaiveDate, f32)>,
    pub font: iced::Font,
    pub cache: &'a canvas::Cache,
    pub overlay_cache: &'a canvas::Cache,
}

impl<'a> MonthView<'a> {
    fn indicator_path(shape: SelectionShape, origin: Point, cell_w: f32, cell_h: f32) -> Path {
        let inset = 2.0;
        match shape {
            SelectionShape::Circle => {
                let radius = cell_w.min(cell_h) / 2.0 - inset;
                Path::circle(
                    Point::new(origin.x + cell_w / 2.0, origin.y + cell_h / 2.0),
                    radius,
                )
            }
            SelectionShape::Square => {
                let side = cell_w.min(cell_h) - 2.0 * inset;
                Path::rectangle(
                    Point::new(
                        origin.x + (cell_w - side) / 2.0,
                        origin.y + (cell_h - side) / 2.0,
                    ),
                    Size::new(side, side),
                )
            }
            SelectionShape::RoundedRect => Path::rounded_rectangle(
                Point::new(origin.x + inset, origin.y + inset),
                Size::new(cell_w - 2.0 * inset, cell_h - 2.0 * inset),
                6.0.into(),
            ),
            SelectionShape::FullCell => {
                Path::rectangle(origin, Size::new(cell_w, cell_h))
            }
        }
    }
}

impl<'a, Message> canvas::Program<Message> for MonthView<'a> {
    type State = ();

    fn draw(
        &self,
        _: &Self::State,
        renderer: &Renderer,
        _: &Theme,
        bounds: Rectangle,
        _: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let metrics = GridMetrics::new(bounds.size(), self.picker.grid().week_count());
        let (cell_w, cell_h) = metrics.cell_size();
        let policy = self.picker.policy();
        let label_size = policy.label_font().scale.size_for(cell_w, cell_h);
        let shape = policy.selection_shape();

        // 1. Header, day cells and the committed selection (cached).
        let grid_geo = self.cache.draw(renderer, bounds.size(), |frame| {
            // Weekday header row
            let header_bg = Path::rectangle(
                Point::ORIGIN,
                Size::new(metrics.width, metrics.header_height),
            );
            frame.fill(&header_bg, iced::Color::from(style::WEEKDAY_HEADER_BG));

            for (i, symbol) in self.picker.weekday_symbols().iter().enumerate() {
                frame.fill_text(Text {
                    content: symbol.to_string(),
                    position: Point::new(
                        i as f32 * cell_w + cell_w / 2.0,
                        metrics.header_height / 2.0,
                    ),
                    color: style::WEEKDAY_HEADER_TEXT.into(),
                    size: (metrics.header_height * 0.5).into(),
                    font: self.font,
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center,
                    ..Default::default()
                });
            }

            let selected = self.picker.selected_date();

            for (w, week) in self.picker.grid().weeks().iter().enumerate() {
                for (d, day) in week.days().iter().enumerate() {
                    let index = CellIndex { week: w, day: d };
                    let appearance = self.picker.appearance_at(index);
                    if !appearance.visible {
                        continue;
                    }

                    let origin = metrics.cell_origin(index);
                    let bg = Path::rectangle(
                        Point::new(origin.x + 1.0, origin.y + 1.0),
                        Size::new(cell_w - 2.0, cell_h - 2.0),
                    );
                    frame.fill(&bg, iced::Color::from(appearance.background));

                    let is_selected = selected == Some(day.date);
                    if is_selected {
                        let indicator =
                            Self::indicator_path(shape, origin, cell_w, cell_h);
                        frame.fill(&indicator, iced::Color::from(policy.selection_fill()));
                    }

                    let text_color = if is_selected {
                        policy.selected_text()
                    } else {
                        appearance.text
                    };
                    frame.fill_text(Text {
                        content: day.day_value.to_string(),
                        position: Point::new(
                            origin.x + cell_w / 2.0,
                            origin.y + cell_h / 2.0,
                        ),
                        color: text_color.into(),
                        size: label_size.into(),
                        font: self.font,
                        align_x: iced::alignment::Horizontal::Center.into(),
                        align_y: iced::alignment::Vertical::Center,
                        ..Default::default()
                    });
                }
            }
        });

        // 2. Semi-selection indicator (dynamic, cleared every frame so the
        // fade alpha is always current).
        self.overlay_cache.clear();

        let overlay_geo = self.overlay_cache.draw(renderer, bounds.size(), |frame| {
            if let Some((date, alpha)) = self.semi {
                if let Some(index) = self.picker.grid().position_of(date) {
                    let origin = metrics.cell_origin(index);
                    let indicator = Self::indicator_path(shape, origin, cell_w, cell_h);
                    let fill = policy.semi_selection_fill();
                    frame.fill(
                        &indicator,
                        iced::Color::from(fill.with_alpha(fill.a * alpha)),
                    );
                }
            }
        });

        vec![grid_geo, overlay_geo]
    }
}
