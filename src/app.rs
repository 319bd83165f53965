use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use daygrid::{
    AppConfig, Clock, DatePicker, DayInteraction, Fade, FadeDirection, PickerObserver,
    StaticPolicy, style,
    widgets::month_view::{GridMetrics, MonthView},
};
use iced::{
    Alignment, Border, Element, Length, Point, Size, Subscription, Task, Theme,
    widget::{Space, button, canvas, canvas::Canvas, column, container, mouse_area, row, text},
};

/// How long a press must be held before it becomes a long-press preview.
const LONG_PRESS_DELAY_MS: u64 = 450;
/// Redraw cadence while the preview indicator is fading.
const FADE_TICK_MS: u64 = 16;

/// Observer wired into the demo picker; it just logs what the host would
/// normally react to.
#[derive(Debug, Clone, Default)]
struct LoggingObserver;

impl PickerObserver for LoggingObserver {
    fn day_selected(&self, date: NaiveDate) -> anyhow::Result<()> {
        tracing::info!(%date, "day selected");
        Ok(())
    }

    fn month_presented(&self, description: &str) -> anyhow::Result<()> {
        tracing::info!(description, "month presented");
        Ok(())
    }
}

/// An in-flight press on a day cell.
struct PressState {
    id: u64,
    date: NaiveDate,
    long_press: bool,
}

pub struct DaygridApp {
    picker: DatePicker,
    clock: Arc<dyn Clock>,
    label_font: iced::Font,
    grid_size: Size,

    grid_cache: canvas::Cache,
    overlay_cache: canvas::Cache,

    cursor: Option<Point>,
    press: Option<PressState>,
    press_counter: u64,
    /// The preview indicator currently drawn, possibly fading out after the
    /// model has already dropped its semi-selection.
    semi_visual: Option<(NaiveDate, Fade)>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    PreviousMonth,
    NextMonth,
    GoToToday,
    ReloadAvailability,

    // Pointer routing
    GridPressed,
    GridReleased,
    GridExited,
    GridCursorMoved(Point),
    LongPressFired(u64),

    // Animation
    FadeTick,
}

impl DaygridApp {
    pub fn new(
        config: Arc<AppConfig>,
        policy: StaticPolicy,
        present: NaiveDate,
        clock: Arc<dyn Clock>,
    ) -> (Self, Task<Message>) {
        let label_font = match &policy.label_font.family {
            // iced wants a 'static family name; the config string lives for
            // the whole process anyway.
            Some(family) => iced::Font::with_name(Box::leak(family.clone().into_boxed_str())),
            None => iced::Font::default(),
        };

        let grid_size = Size::new(
            config.window.width - 40.0,
            config.window.height - 200.0,
        );

        let picker = DatePicker::new(
            present,
            Arc::new(policy),
            clock.clone(),
            Arc::new(LoggingObserver),
        );

        let app = Self {
            picker,
            clock,
            label_font,
            grid_size,
            grid_cache: canvas::Cache::new(),
            overlay_cache: canvas::Cache::new(),
            cursor: None,
            press: None,
            press_counter: 0,
            semi_visual: None,
        };

        (app, Task::none())
    }

    fn metrics(&self) -> GridMetrics {
        GridMetrics::new(self.grid_size, self.picker.grid().week_count())
    }

    /// Start fading out whatever preview indicator is on screen.
    fn fade_out_preview(&mut self) {
        if let Some((date, fade)) = self.semi_visual {
            self.semi_visual = Some((date, fade.redirect(FadeDirection::Out, self.clock.now_utc())));
        }
    }

    fn abandon_press(&mut self) {
        if self.press.take().is_some_and(|p| p.long_press) {
            self.picker.cancel_preview();
        }
        self.fade_out_preview();
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PreviousMonth => {
                self.abandon_press();
                self.picker.show_previous_month();
                self.grid_cache.clear();
                Task::none()
            }
            Message::NextMonth => {
                self.abandon_press();
                self.picker.show_next_month();
                self.grid_cache.clear();
                Task::none()
            }
            Message::GoToToday => {
                self.abandon_press();
                self.picker.present(self.clock.today());
                self.grid_cache.clear();
                Task::none()
            }
            Message::ReloadAvailability => {
                self.picker.reload_availability();
                self.grid_cache.clear();
                Task::none()
            }
            Message::GridCursorMoved(point) => {
                self.cursor = Some(point);
                if let Some(press) = &self.press {
                    if press.long_press {
                        let metrics = self.metrics();
                        if let Some(index) = self.picker.grid().position_of(press.date) {
                            let relative = metrics.point_in_cell(point, index);
                            let outcome = self.picker.handle_interaction(
                                press.date,
                                DayInteraction::LongPressMove(relative),
                                metrics.hit_region(),
                            );
                            if outcome.reset_gesture {
                                self.press = None;
                                self.fade_out_preview();
                            }
                        }
                    }
                }
                Task::none()
            }
            Message::GridPressed => {
                let Some(point) = self.cursor else {
                    return Task::none();
                };
                let metrics = self.metrics();
                let Some(index) = metrics.cell_at(point) else {
                    return Task::none();
                };
                let date = self.picker.grid().weeks()[index.week].days()[index.day].date;
                if !self.picker.is_day_selectable(date) {
                    return Task::none();
                }

                self.press_counter += 1;
                let id = self.press_counter;
                self.press = Some(PressState {
                    id,
                    date,
                    long_press: false,
                });

                Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_millis(LONG_PRESS_DELAY_MS)).await;
                    },
                    move |_| Message::LongPressFired(id),
                )
            }
            Message::LongPressFired(id) => {
                let begun = match &mut self.press {
                    Some(press) if press.id == id && !press.long_press => {
                        press.long_press = true;
                        Some(press.date)
                    }
                    _ => None,
                };
                if let Some(date) = begun {
                    let hit = self.metrics().hit_region();
                    self.picker
                        .handle_interaction(date, DayInteraction::LongPressBegin, hit);
                    if self.picker.semi_selected_date() == Some(date) {
                        self.semi_visual =
                            Some((date, Fade::begin(FadeDirection::In, self.clock.now_utc())));
                    }
                }
                Task::none()
            }
            Message::GridReleased => {
                if let Some(press) = self.press.take() {
                    let interaction = if press.long_press {
                        DayInteraction::LongPressEnd
                    } else {
                        DayInteraction::TapEnd
                    };
                    let hit = self.metrics().hit_region();
                    self.picker.handle_interaction(press.date, interaction, hit);
                    self.fade_out_preview();
                    self.grid_cache.clear();
                }
                Task::none()
            }
            Message::GridExited => {
                self.cursor = None;
                self.abandon_press();
                Task::none()
            }
            Message::FadeTick => {
                if let Some((_, fade)) = self.semi_visual {
                    let now = self.clock.now_utc();
                    if fade.direction() == FadeDirection::Out && fade.is_settled(now) {
                        self.semi_visual = None;
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let nav_btn = |label: &str, message: Message| {
            button(text(label.to_string()).size(18))
                .on_press(message)
                .padding([6, 14])
                .style(|_, _| button::Style {
                    background: Some(iced::Color::from(style::IN_MONTH_BG).into()),
                    text_color: style::IN_MONTH_TEXT.into(),
                    border: Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
        };

        let header = row![
            nav_btn("‹", Message::PreviousMonth),
            Space::new().width(Length::Fill),
            text(self.picker.month_description())
                .size(22)
                .color(iced::Color::from(style::IN_MONTH_TEXT)),
            Space::new().width(Length::Fill),
            nav_btn("›", Message::NextMonth),
        ]
        .align_y(Alignment::Center);

        let now = self.clock.now_utc();
        let semi = self
            .semi_visual
            .map(|(date, fade)| (date, fade.alpha_at(now)));

        let grid = Canvas::new(MonthView {
            picker: &self.picker,
            semi,
            font: self.label_font,
            cache: &self.grid_cache,
            overlay_cache: &self.overlay_cache,
        })
        .width(Length::Fixed(self.grid_size.width))
        .height(Length::Fixed(self.grid_size.height));

        let grid = mouse_area(grid)
            .on_press(Message::GridPressed)
            .on_release(Message::GridReleased)
            .on_move(Message::GridCursorMoved)
            .on_exit(Message::GridExited);

        let selected_label = match self.picker.selected_date() {
            Some(date) => date.format("%A, %B %e, %Y").to_string(),
            None => "No date selected".to_string(),
        };

        let footer = row![
            text(selected_label)
                .size(15)
                .color(iced::Color::from(style::OUT_OF_MONTH_TEXT)),
            Space::new().width(Length::Fill),
            nav_btn("Today", Message::GoToToday),
            Space::new().width(10),
            nav_btn("Reload", Message::ReloadAvailability),
        ]
        .align_y(Alignment::Center);

        container(
            column![header, Space::new().height(14), grid, Space::new().height(14), footer]
                .width(Length::Shrink),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();
        if self.semi_visual.is_some() {
            subs.push(
                iced::time::every(Duration::from_millis(FADE_TICK_MS)).map(|_| Message::FadeTick),
            );
        }
        Subscription::batch(subs)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
