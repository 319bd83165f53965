#[cfg(feature = "gui")]
mod app;

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use daygrid::{
    AppConfig, CellIndex, Clock, DatePicker, NoopObserver, StaticPolicy, SystemClock,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[cfg(feature = "gui")]
use crate::app::{DaygridApp, Message};

#[derive(Parser, Debug)]
#[command(name = "daygrid")]
#[command(about = "Calendar date picker - GUI widget demo or terminal preview")]
struct Args {
    /// Print the month grid to the terminal instead of opening a window
    #[arg(long)]
    print: bool,

    /// Initial date to present (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Extra configuration file, overriding all other sources
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    #[cfg(feature = "gui")]
    let filter = if args.print {
        EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .parse_lossy("daygrid=debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .parse_lossy("daygrid=debug,fontdb=error,wgpu=warn,naga=warn")
    };

    #[cfg(not(feature = "gui"))]
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .parse_lossy("daygrid=debug");

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = AppConfig::load_with_file(args.config.as_deref())
        .context("Failed to load configuration")?;
    let config = Arc::new(config);

    let policy = config
        .picker
        .to_policy()
        .context("Failed to build picker policy")?;

    let clock = Arc::new(SystemClock);
    let present = args.date.unwrap_or_else(|| clock.today());

    if args.print {
        run_print(policy, present)
    } else {
        #[cfg(feature = "gui")]
        {
            run_gui(config, policy, present)
        }
        #[cfg(not(feature = "gui"))]
        {
            anyhow::bail!("GUI mode not available. Build with --features gui or run with --print")
        }
    }
}

/// Render the presented month as text - the headless preview mode.
fn run_print(policy: StaticPolicy, present: NaiveDate) -> Result<()> {
    let picker = DatePicker::new(
        present,
        Arc::new(policy),
        Arc::new(SystemClock),
        Arc::new(NoopObserver),
    );

    print!("{}", render_month_text(&picker));
    Ok(())
}

/// Text rendering of one month page. Hidden cells are blank, unavailable
/// days are parenthesized, the selected day is bracketed and today carries
/// an asterisk.
fn render_month_text(picker: &DatePicker) -> String {
    let mut out = String::new();
    let width = 4 * daygrid::DAYS_PER_WEEK;

    let _ = writeln!(out, "{:^width$}", picker.month_description());
    for symbol in picker.weekday_symbols() {
        let _ = write!(out, " {:>2} ", symbol);
    }
    let _ = writeln!(out);

    let today = SystemClock.today();
    for (w, week) in picker.grid().weeks().iter().enumerate() {
        for (d, day) in week.days().iter().enumerate() {
            let appearance = picker.appearance_at(CellIndex { week: w, day: d });
            if !appearance.visible {
                let _ = write!(out, "    ");
                continue;
            }

            let cell = if picker.selected_date() == Some(day.date) {
                format!("[{:>2}]", day.day_value)
            } else if !appearance.interactive {
                format!("({:>2})", day.day_value)
            } else if day.date == today {
                format!(" {:>2}*", day.day_value)
            } else {
                format!(" {:>2} ", day.day_value)
            };
            let _ = write!(out, "{cell}");
        }
        let _ = writeln!(out);
    }
    out
}

/// Run in GUI mode - the interactive picker window.
#[cfg(feature = "gui")]
fn run_gui(config: Arc<AppConfig>, policy: StaticPolicy, present: NaiveDate) -> Result<()> {
    let window_width = config.window.width;
    let window_height = config.window.height;
    let title = config.window.title.clone();

    let app = iced::application(
        move || {
            DaygridApp::new(
                config.clone(),
                policy.clone(),
                present,
                Arc::new(SystemClock),
            )
        },
        update,
        view,
    )
    .title(move |_state: &DaygridApp| title.clone())
    .subscription(subscription)
    .theme(theme)
    .window(iced::window::Settings {
        size: iced::Size::new(window_width, window_height),
        ..Default::default()
    })
    .antialiasing(true);

    app.run().context("Failed to run application")?;

    Ok(())
}

#[cfg(feature = "gui")]
fn update(app: &mut DaygridApp, message: Message) -> iced::Task<Message> {
    app.update(message)
}

#[cfg(feature = "gui")]
fn view(app: &DaygridApp) -> iced::Element<'_, Message> {
    app.view()
}

#[cfg(feature = "gui")]
fn subscription(app: &DaygridApp) -> iced::Subscription<Message> {
    app.subscription()
}

#[cfg(feature = "gui")]
fn theme(app: &DaygridApp) -> iced::Theme {
    app.theme()
}
