use std::path::PathBuf;

use clap::Parser;

/// Nightglow: a small real-time scene renderer with HDR and bloom.
#[derive(Parser, Debug)]
#[command(name = "nightglow", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Program state file override (replaces `persistence.settings_file`).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Asset directory override (replaces `scene.asset_root`).
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `nightglow=trace,wgpu=warn`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["nightglow"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.settings.is_none());
        assert!(args.assets.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn all_overrides_parse() {
        let args = Args::try_parse_from([
            "nightglow",
            "--config",
            "/tmp/ng.toml",
            "--settings",
            "state.txt",
            "--assets",
            "res",
            "--log-level",
            "nightglow=debug",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/ng.toml")));
        assert_eq!(args.settings, Some(PathBuf::from("state.txt")));
        assert_eq!(args.assets, Some(PathBuf::from("res")));
        assert_eq!(args.log_level.as_deref(), Some("nightglow=debug"));
        assert!(args.print_config);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["nightglow", "--execute", "ls"]).is_err());
    }
}
