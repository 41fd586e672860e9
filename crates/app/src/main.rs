use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppConfig, AppServices, ConfigError, ConfigOverrides, WordSource, WordSourceKind,
    parse_session_size,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSource { raw: String },
    InvalidCount { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSource { raw } => {
                write!(f, "invalid --source value: {raw} (expected local or remote)")
            }
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn word_source(&self) -> Arc<dyn WordSource> {
        self.services.word_source()
    }

    fn session_size(&self) -> usize {
        self.services.session_size()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    source: Option<WordSourceKind>,
    count: Option<usize>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  speller [--source <local|remote>] [--count <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source local");
    eprintln!("  --count {}", AppConfig::DEFAULT_SESSION_SIZE);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SPELLER_WORD_SOURCE, SPELLER_SESSION_SIZE, SPELLER_LOG");
    eprintln!("  SPELLER_AI_API_KEY, SPELLER_AI_BASE_URL, SPELLER_AI_MODEL");
    eprintln!("  SPELLER_AI_LEVEL, SPELLER_AI_CATEGORY");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(args, "--source")?;
                    let kind = value
                        .parse::<WordSourceKind>()
                        .map_err(|_| ArgsError::InvalidSource { raw: value.clone() })?;
                    parsed.source = Some(kind);
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    let count = parse_session_size(&value)
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                    parsed.count = Some(count);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Command-line flags take precedence over the environment.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source: self.source,
            session_size: self.count,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SPELLER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let config = AppConfig::from_env(args.overrides()).map_err(|e: ConfigError| {
        tracing::error!(error = %e, "invalid environment configuration");
        e
    })?;
    tracing::info!(
        source = ?config.source,
        session_size = config.session_size,
        "starting speller"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::new(&config),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Speller")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = raw.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    fn broken_env(key: &str) -> Option<String> {
        match key {
            AppConfig::SOURCE_VAR => Some("cloud".into()),
            AppConfig::SESSION_SIZE_VAR => Some("abc".into()),
            _ => None,
        }
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&["--source", "remote", "--count", "5"]).unwrap();

        let config = AppConfig::resolve(args.overrides(), |_| None).unwrap();

        assert_eq!(config.source, WordSourceKind::Remote);
        assert_eq!(config.session_size, 5);
    }

    #[test]
    fn no_flags_keep_config() {
        let args = parse(&[]).unwrap();

        let config = AppConfig::resolve(args.overrides(), |_| None).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn flags_win_over_invalid_environment() {
        let args = parse(&["--source", "local", "--count", "5"]).unwrap();

        let config = AppConfig::resolve(args.overrides(), broken_env).unwrap();

        assert_eq!(config.source, WordSourceKind::Local);
        assert_eq!(config.session_size, 5);
    }

    #[test]
    fn invalid_environment_without_flag_fails() {
        let args = parse(&["--source", "local"]).unwrap();

        let err = AppConfig::resolve(args.overrides(), broken_env).unwrap_err();

        assert_eq!(err, ConfigError::InvalidSessionSize("abc".into()));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            parse(&["--count", "0"]),
            Err(ArgsError::InvalidCount { .. })
        ));
        assert!(matches!(
            parse(&["--source", "cloud"]),
            Err(ArgsError::InvalidSource { .. })
        ));
        assert!(matches!(
            parse(&["--count"]),
            Err(ArgsError::MissingValue { flag: "--count" })
        ));
        assert!(matches!(parse(&["--deck"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn help_flag_is_recognised() {
        assert!(parse(&["-h"]).unwrap().help);
    }
}
