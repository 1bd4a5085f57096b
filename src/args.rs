//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Terminal HUD viewer for train-simulation consists.
#[derive(Debug, Parser)]
#[command(name = "railhud", version, about)]
pub struct Args {
    /// Load a consist snapshot (JSON) instead of the built-in demo.
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Freeze the feed: render the consist as loaded without ticking.
    #[arg(long)]
    pub freeze: bool,

    /// Log filter when `RUST_LOG` is unset (e.g. `info`, `railhud=debug`).
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// What: Resolve the tracing filter string.
///
/// Inputs:
/// - `args`: Parsed command line
///
/// Output:
/// - The `--log-level` value when given, otherwise `"info"`.
pub fn determine_log_level(args: &Args) -> String {
    args.log_level.clone().unwrap_or_else(|| "info".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// What: Argument parsing covers defaults and all flags
    ///
    /// - Input: No flags, then every flag
    /// - Output: Defaults, then the provided values
    #[test]
    fn args_parse_flags() {
        let a = Args::parse_from(["railhud"]);
        assert!(a.snapshot.is_none());
        assert!(!a.freeze);
        assert_eq!(determine_log_level(&a), "info");

        let b = Args::parse_from([
            "railhud",
            "--snapshot",
            "consist.json",
            "--freeze",
            "--log-level",
            "debug",
        ]);
        assert_eq!(b.snapshot.as_deref(), Some(std::path::Path::new("consist.json")));
        assert!(b.freeze);
        assert_eq!(determine_log_level(&b), "debug");
    }
}
