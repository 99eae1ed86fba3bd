//! Command-line overrides for the Tellus globe.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Command-line arguments shared by Tellus binaries.
///
/// CLI values override settings loaded from `config.ron`. Binaries embed
/// this with `#[command(flatten)]`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Age shown at startup, in Ma.
    #[arg(long)]
    pub age: Option<u32>,

    /// Supercontinent threshold, in Ma.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(age) = args.age {
            self.timeline.initial_age_ma = age;
        }
        if let Some(threshold) = args.threshold {
            self.drift.threshold_ma = threshold;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        args: CliArgs,
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            age: Some(250),
            threshold: Some(200.0),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.timeline.initial_age_ma, 250);
        assert_eq!(config.drift.threshold_ma, 200.0);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_parses_flags() {
        let harness = Harness::try_parse_from([
            "tellus",
            "--age",
            "66",
            "--log-level",
            "debug",
            "--config",
            "/tmp/tellus",
        ])
        .unwrap();
        assert_eq!(harness.args.age, Some(66));
        assert_eq!(harness.args.log_level.as_deref(), Some("debug"));
        assert_eq!(harness.args.config, Some(PathBuf::from("/tmp/tellus")));
        assert_eq!(harness.args.width, None);
    }

    #[test]
    fn test_cli_rejects_negative_age() {
        assert!(Harness::try_parse_from(["tellus", "--age", "-5"]).is_err());
    }
}
