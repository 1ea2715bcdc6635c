use clap::Parser;
use sender_options::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["sender-options", "show"]).unwrap();

    match cli.command {
        Commands::Show(args) => assert!(!args.reveal_key),
        Commands::Check(_) => panic!("Wrong command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_show_reveal_key() {
    let cli = Cli::try_parse_from(["sender-options", "show", "--reveal-key"]).unwrap();

    match cli.command {
        Commands::Show(args) => assert!(args.reveal_key),
        Commands::Check(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_check_with_global_flags() {
    let cli = Cli::try_parse_from([
        "sender-options",
        "check",
        "--json",
        "--config",
        "/etc/sender/config.yaml",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Check(_)));
    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/sender/config.yaml")));
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["sender-options"]).is_err());
}

#[test]
fn test_parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["sender-options", "send"]).is_err());
}
