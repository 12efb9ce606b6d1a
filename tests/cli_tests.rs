use clap::Parser;
use cwmp_datamodel::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_generate() {
    let cli = Cli::try_parse_from([
        "cwmp-gen",
        "generate",
        "--definition",
        "definitions/tr181_dsl.yaml",
        "--out",
        "src/model/tr181",
        "--force",
    ])
    .unwrap();
    match cli.command {
        Commands::Generate {
            definition,
            out,
            force,
        } => {
            assert_eq!(definition, PathBuf::from("definitions/tr181_dsl.yaml"));
            assert_eq!(out, Some(PathBuf::from("src/model/tr181")));
            assert!(force);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_generate_defaults() {
    let cli = Cli::try_parse_from([
        "cwmp-gen",
        "generate",
        "-d",
        "definitions/tr098_layer2_bridging.yaml",
    ])
    .unwrap();
    match cli.command {
        Commands::Generate { out, force, .. } => {
            assert!(out.is_none());
            assert!(!force);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_parse_lint() {
    let cli = Cli::try_parse_from(["cwmp-gen", "lint", "-d", "definitions/tr181_dsl.yaml"]).unwrap();
    assert!(matches!(cli.command, Commands::Lint { .. }));
}

#[test]
fn test_missing_definition_is_an_error() {
    assert!(Cli::try_parse_from(["cwmp-gen", "generate"]).is_err());
}
