use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use eggsy_core::Clock;
use eggsy_core::model::{CookSettings, CookSettingsDraft, SettingsError};
use services::CookTimerService;
use tracing_subscriber::EnvFilter;
use ui::platform::{ChimePlayerRef, DesktopChimePlayer};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPercent { raw: String },
    InvalidSeconds { raw: String },
    InvalidSettings(SettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPercent { raw } => write!(f, "invalid --chatter value: {raw}"),
            ArgsError::InvalidSeconds { raw } => {
                write!(f, "invalid --celebration-secs value: {raw}")
            }
            ArgsError::InvalidSettings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<SettingsError> for ArgsError {
    fn from(err: SettingsError) -> Self {
        ArgsError::InvalidSettings(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--muted] [--chatter <percent>] [--celebration-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --chatter 10            chance per second that the egg chats");
    eprintln!("  --celebration-secs 3    how long the confetti stays up");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EGGSY_MUTED, EGGSY_CHATTER, EGGSY_CELEBRATION_SECS, EGGSY_LOG");
}

fn env_flag(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_settings(args: &mut impl Iterator<Item = String>) -> Result<CookSettings, ArgsError> {
    let mut draft = CookSettingsDraft {
        muted: env_flag("EGGSY_MUTED"),
        chatter_percent: std::env::var("EGGSY_CHATTER")
            .ok()
            .and_then(|value| value.parse::<u8>().ok()),
        celebration_seconds: std::env::var("EGGSY_CELEBRATION_SECS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok()),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--muted" => {
                draft.muted = Some(true);
            }
            "--chatter" => {
                let value = require_value(args, "--chatter")?;
                let parsed: u8 = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidPercent { raw: value.clone() })?;
                draft.chatter_percent = Some(parsed);
            }
            "--celebration-secs" => {
                let value = require_value(args, "--celebration-secs")?;
                let parsed: u32 = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidSeconds { raw: value.clone() })?;
                draft.celebration_seconds = Some(parsed);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(draft.validate()?)
}

struct DesktopApp {
    cook_service: Arc<CookTimerService>,
    chime_player: ChimePlayerRef,
}

impl UiApp for DesktopApp {
    fn app_title(&self) -> &str {
        "Eggsy"
    }

    fn cook_service(&self) -> Arc<CookTimerService> {
        Arc::clone(&self.cook_service)
    }

    fn chime_player(&self) -> ChimePlayerRef {
        Arc::clone(&self.chime_player)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EGGSY_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let settings = parse_settings(&mut args).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    tracing::info!(
        muted = settings.muted(),
        chatter = settings.chatter_percent(),
        "starting Eggsy"
    );

    let cook_service = Arc::new(CookTimerService::with_thread_dice(
        Clock::default_clock(),
        settings,
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        cook_service,
        chime_player: Arc::new(DesktopChimePlayer),
    });
    let context = build_app_context(&app);

    // Keep the card-sized window from behaving like a modal on macOS dev
    // setups, same as any other tao-backed app.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Eggsy")
            .with_inner_size(LogicalSize::new(460.0, 640.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
