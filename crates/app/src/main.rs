mod logging;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Question, question_bank};
use services::{AssetSource, DirAssetSource};
use ui::{App, UiApp, build_app_context};

use logging::{LoggingConfig, init_logging};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAssetsDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAssetsDir { raw } => write!(f, "invalid --assets value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questions: Vec<Question>,
    assets: Arc<DirAssetSource>,
    autoplay_audio: bool,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn assets(&self) -> Arc<dyn AssetSource> {
        self.assets.clone()
    }

    fn autoplay_audio(&self) -> bool {
        self.autoplay_audio
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    assets_dir: PathBuf,
    mute: bool,
    log_filter: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--assets <dir>] [--mute] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --assets assets");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_ASSETS_DIR, QUIZ_MUTE=1, RUST_LOG");
}

fn env_flag(value: Option<String>) -> bool {
    value.is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        assets_env: Option<String>,
        mute_env: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut assets_dir = assets_env
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("assets"), PathBuf::from);
        let mut mute = env_flag(mute_env);
        let mut log_filter = None;
        let mut help = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" => {
                    let value = require_value(&mut args, "--assets")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidAssetsDir { raw: value });
                    }
                    assets_dir = PathBuf::from(value);
                }
                "--mute" => mute = true,
                "--log" => log_filter = Some(require_value(&mut args, "--log")?),
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            assets_dir,
            mute,
            log_filter,
            help,
        })
    }

    fn from_env() -> Result<Self, ArgsError> {
        Self::parse(
            std::env::args().skip(1),
            std::env::var("QUIZ_ASSETS_DIR").ok(),
            std::env::var("QUIZ_MUTE").ok(),
        )
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_env().inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let questions = question_bank();
    for question in &questions {
        question.validate().map_err(quiz_core::Error::from)?;
    }

    log::info!(
        "starting quiz: {} questions, assets at {}, audio {}",
        questions.len(),
        args.assets_dir.display(),
        if args.mute { "muted" } else { "on" }
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions,
        assets: Arc::new(DirAssetSource::new(args.assets_dir)),
        autoplay_audio: !args.mute,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
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
