//! CLI parsing tests

use super::*;
use std::path::PathBuf;

#[test]
fn test_parse_train_defaults() {
    let cli = parse_args(["wgan-toy", "train"]).unwrap();
    match cli.command {
        Command::Train(args) => {
            assert_eq!(args, RunArgs::default());
            assert_eq!(args.overrides(), Default::default());
        }
        Command::Validate(_) => panic!("Expected Train command"),
    }
    assert!(!cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn test_parse_train_with_overrides() {
    let cli = parse_args([
        "wgan-toy",
        "train",
        "--mode",
        "wgan",
        "--dataset",
        "swissroll",
        "--batch-size",
        "64",
        "--critic-iters",
        "3",
        "--penalty-mode",
        "pagan",
        "--one-sided",
        "false",
        "--fixed-generator",
        "--log-dir",
        "runs/a",
        "--seed",
        "42",
    ])
    .unwrap();

    let Command::Train(args) = cli.command else {
        panic!("Expected Train command");
    };
    let overrides = args.overrides();
    assert_eq!(overrides.mode.as_deref(), Some("wgan"));
    assert_eq!(overrides.dataset.as_deref(), Some("swissroll"));
    assert_eq!(overrides.batch_size, Some(64));
    assert_eq!(overrides.critic_iters, Some(3));
    assert_eq!(overrides.penalty_mode.as_deref(), Some("pagan"));
    assert_eq!(overrides.one_sided, Some(false));
    assert_eq!(overrides.fixed_generator, Some(true));
    assert_eq!(overrides.log_dir, Some(PathBuf::from("runs/a")));
    assert_eq!(overrides.seed, Some(42));
}

#[test]
fn test_parse_validate_with_config_file() {
    let cli = parse_args(["wgan-toy", "validate", "--config", "run.yaml", "-v"]).unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Validate(args) => assert_eq!(args.config, Some(PathBuf::from("run.yaml"))),
        Command::Train(_) => panic!("Expected Validate command"),
    }
}

#[test]
fn test_unknown_names_pass_through_to_config_layer() {
    // Selector strings are validated by the configuration layer, not clap
    let cli = parse_args(["wgan-toy", "train", "--penalty-mode", "bogus"]).unwrap();
    let Command::Train(args) = cli.command else {
        panic!("Expected Train command");
    };
    assert_eq!(args.penalty_mode.as_deref(), Some("bogus"));
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(parse_args(["wgan-toy"]).is_err());
}
