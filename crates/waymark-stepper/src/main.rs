//! Entry point for the journey stepper.
//!
//! Opens the Dioxus desktop window, or with `--summary` prints the journey
//! to stdout and exits.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use waymark_core::{JourneyEvent, JourneyObserver, JourneyState, StepCatalog, TracingObserver};
use waymark_logging::{LogConfig, WaymarkSubscriberBuilder};
use waymark_stepper::components::App;
use waymark_stepper::summary::render_summary;
use waymark_stepper::theme::{Theme, CURRENT_THEME};
use waymark_stepper::STYLES_CSS;

/// Catalog handed to the root component.
static CATALOG: OnceLock<Arc<StepCatalog>> = OnceLock::new();

/// Theme selected on the command line.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Daylight,
    Midnight,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Daylight => Theme::Daylight,
            ThemeArg::Midnight => Theme::Midnight,
        }
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "waymark-stepper")]
#[command(about = "Onboarding journey stepper")]
struct Args {
    /// Path to a JSON step catalog (falls back to WAYMARK_CATALOG, then the built-in journey)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Print a text summary of the journey and exit
    #[arg(long)]
    summary: bool,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit JSONL logs on stderr instead of human-readable lines
    #[arg(long)]
    json_logs: bool,

    /// Also write JSONL logs into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Initial theme
    #[arg(long, value_enum, default_value = "daylight")]
    theme: ThemeArg,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = LogConfig {
        default_level: args.log_level.clone(),
        ..LogConfig::default()
    };
    log_config.console.pretty = !args.json_logs;
    if let Some(dir) = &args.log_dir {
        log_config = log_config.with_file(dir);
    }
    let _log_guard = WaymarkSubscriberBuilder::new()
        .with_config(log_config)
        .init()
        .context("failed to initialize logging")?;

    let catalog = load_catalog(args.catalog)?;
    tracing::info!(
        steps = catalog.len(),
        completed_pct = format!("{:.0}", catalog.completion_percentage()),
        "Catalog ready"
    );

    if args.summary {
        print!("{}", render_summary(&JourneyState::new(catalog)));
        return Ok(());
    }

    CATALOG.set(Arc::new(catalog)).ok();
    INITIAL_THEME.set(args.theme.into()).ok();

    tracing::info!("Starting journey stepper");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Getting Started - Waymark")
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);

    Ok(())
}

/// Resolves the catalog from the flag, the environment, or the built-in list.
fn load_catalog(flag: Option<PathBuf>) -> anyhow::Result<StepCatalog> {
    let path = flag.or_else(|| std::env::var_os("WAYMARK_CATALOG").map(PathBuf::from));
    match path {
        Some(path) => StepCatalog::load(&path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(StepCatalog::builtin()),
    }
}

/// Root component: applies the initial theme and logs journey events.
#[component]
fn RootApp() -> Element {
    // GlobalSignal writes need the Dioxus runtime, so this cannot happen in main.
    use_hook(|| {
        if let Some(theme) = INITIAL_THEME.get() {
            *CURRENT_THEME.write() = *theme;
        }
    });

    let catalog = CATALOG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(StepCatalog::builtin()));

    rsx! {
        App {
            catalog,
            on_event: move |event: JourneyEvent| TracingObserver.notify(&event),
        }
    }
}
