use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["doxy-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.scan.paths, vec![PathBuf::from(".")]);
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.strict);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths_and_config() {
    let cli = Cli::parse_from([
        "doxy-guard",
        "check",
        "include",
        "src/meter.h",
        "--config",
        "custom.toml",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.scan.paths,
                vec![PathBuf::from("include"), PathBuf::from("src/meter.h")]
            );
            assert_eq!(args.scan.config, Some(PathBuf::from("custom.toml")));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_extensions_and_excludes() {
    let cli = Cli::parse_from([
        "doxy-guard",
        "check",
        "--ext",
        "h,hpp",
        "-x",
        "**/build/**",
        "-x",
        "**/third_party/**",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.scan.ext, Some(vec!["h".to_string(), "hpp".to_string()]));
            assert_eq!(args.scan.exclude.len(), 2);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_format_and_output() {
    let cli = Cli::parse_from(["doxy-guard", "check", "-f", "sarif", "-o", "report.sarif"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Sarif);
            assert_eq!(args.output, Some(PathBuf::from("report.sarif")));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_strict_conflicts_with_warn_only() {
    let result = Cli::try_parse_from(["doxy-guard", "check", "--strict", "--warn-only"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["doxy-guard", "check", "--format", "html"]);
    assert!(result.is_err());
}

#[test]
fn cli_fix_flags() {
    let cli = Cli::parse_from(["doxy-guard", "fix", "meter.h", "--offline", "--dry-run"]);
    match cli.command {
        Commands::Fix(args) => {
            assert_eq!(args.scan.paths, vec![PathBuf::from("meter.h")]);
            assert!(args.offline);
            assert!(args.dry_run);
            assert!(!args.stdout);
        }
        _ => panic!("Expected Fix command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["doxy-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".doxy-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["doxy-guard", "config", "validate"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Validate { config } => {
                assert_eq!(config, PathBuf::from(".doxy-guard.toml"));
            }
            ConfigAction::Show { .. } => panic!("Expected Validate action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["doxy-guard", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Show { config, format } => {
                assert!(config.is_none());
                assert!(matches!(format, ConfigOutputFormat::Json));
            }
            ConfigAction::Validate { .. } => panic!("Expected Show action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_guidelines_reference() {
    let cli = Cli::parse_from(["doxy-guard", "guidelines", "--reference", "angle_set.h"]);
    match cli.command {
        Commands::Guidelines(args) => {
            assert_eq!(args.reference, Some(PathBuf::from("angle_set.h")));
        }
        _ => panic!("Expected Guidelines command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["doxy-guard", "-vv", "--no-config", "--color", "never", "check", "-q"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(cli.no_config);
    assert!(matches!(cli.color, ColorChoice::Never));
}
