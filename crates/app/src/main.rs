use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::LaunchBuilder;
use quiz_core::catalog::Catalog;
use quiz_core::gate::EntryGate;
use services::{load_catalog, FeedbackSounds};
use ui::{build_app_context, App, EvalSounds, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCode { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCode { raw } => {
                write!(f, "invalid --code value (want 3 digits): {raw}")
            }
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--levels <path>] [--code <3 digits>] [--asset-base <prefix>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --levels assets/levels.json");
    eprintln!("  --code 000");
    eprintln!("  --asset-base /assets/");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATCH_LEARN_LEVELS, MATCH_LEARN_CODE, MATCH_LEARN_ASSETS");
}

struct Args {
    levels_path: PathBuf,
    access_code: String,
    asset_base: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut levels_path = std::env::var("MATCH_LEARN_LEVELS")
            .map_or_else(|_| PathBuf::from("assets/levels.json"), PathBuf::from);
        let mut access_code =
            std::env::var("MATCH_LEARN_CODE").unwrap_or_else(|_| "000".to_string());
        let mut asset_base =
            std::env::var("MATCH_LEARN_ASSETS").unwrap_or_else(|_| "/assets/".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--levels" => {
                    levels_path = PathBuf::from(require_value(args, "--levels")?);
                }
                "--code" => {
                    access_code = require_value(args, "--code")?;
                }
                "--asset-base" => {
                    asset_base = require_value(args, "--asset-base")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            levels_path,
            access_code,
            asset_base,
        })
    }
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    entry_gate: EntryGate,
    sounds: Arc<dyn FeedbackSounds>,
    asset_base: String,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn entry_gate(&self) -> EntryGate {
        self.entry_gate.clone()
    }

    fn feedback_sounds(&self) -> Arc<dyn FeedbackSounds> {
        Arc::clone(&self.sounds)
    }

    fn asset_base(&self) -> String {
        self.asset_base.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Load + validate the catalog before any window opens, so a broken
    // levels file fails the launch instead of an empty game.
    let catalog = Arc::new(load_catalog(&parsed.levels_path)?);
    let entry_gate = EntryGate::new(&parsed.access_code).map_err(|_| ArgsError::InvalidCode {
        raw: parsed.access_code.clone(),
    })?;

    let app = DesktopApp {
        catalog,
        entry_gate,
        sounds: Arc::new(EvalSounds::new(parsed.asset_base.clone())),
        asset_base: parsed.asset_base,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal
    // window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Match & Learn")
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
