#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use chrono::NaiveDate;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Date used for age-dependent validation, set from command line
static TODAY: OnceLock<NaiveDate> = OnceLock::new();

/// Get the validation date (set from command line or the local date)
pub fn get_today() -> NaiveDate {
    TODAY
        .get()
        .copied()
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Florida Will Wizard - Last will and testament questionnaire
#[derive(Parser, Debug)]
#[command(name = "willwizard-desktop")]
#[command(about = "Florida Will Wizard - guided last will and testament questionnaire")]
struct Args {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 760.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 940.0)]
    height: f64,

    /// Treat this date (YYYY-MM-DD) as today when deciding which children are minors
    #[arg(long)]
    today: Option<NaiveDate>,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Some(today) = args.today {
        let _ = TODAY.set(today);
    }

    tracing::info!(
        today = %get_today(),
        width = args.width,
        height = args.height,
        "Starting Florida Will Wizard"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Florida Will Wizard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
