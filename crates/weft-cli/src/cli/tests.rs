use super::*;
use clap::{CommandFactory, Parser};
use weft_config::{Mode, Target};

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn inspect_defaults_to_development_spa() {
    let cli = Cli::try_parse_from(["weft", "inspect"]).unwrap();
    let Command::Inspect(args) = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(Mode::from(args.mode), Mode::Development);
    assert_eq!(Target::from(args.target), Target::WebApp);
    assert!(!args.debug);
    assert!(args.theme.is_none());
}

#[test]
fn inspect_accepts_long_target_names() {
    let cli = Cli::try_parse_from([
        "weft",
        "inspect",
        "--mode",
        "production",
        "--target",
        "embedded-mobile",
        "--theme",
        "ios",
        "--debug",
    ])
    .unwrap();
    let Command::Inspect(args) = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(args.mode, ModeArg::Prod);
    assert_eq!(Target::from(args.target), Target::EmbeddedMobile);
    assert_eq!(args.theme.as_deref(), Some("ios"));
    assert!(args.debug);
}

#[test]
fn unknown_target_is_rejected() {
    assert!(Cli::try_parse_from(["weft", "inspect", "--target", "desktop"]).is_err());
}

#[test]
fn verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["weft", "-v", "-q", "paths"]).is_err());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["weft", "paths", "--no-color", "--compact"]).unwrap();
    assert!(cli.no_color);
    assert!(matches!(cli.command, Command::Paths(PathsArgs { compact: true })));
}
