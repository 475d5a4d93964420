//! Command dispatch against in-memory stdin/stdout.

use std::fs;
use std::io::Cursor;

use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use bintree_render::application::ApplicationError;
use bintree_render::cli::{execute_command, resolve_settings, Cli, CliError};
use bintree_render::config::Settings;
use bintree_render::exitcode;

fn run(args: &[&str], stdin: &str) -> Result<String, CliError> {
    run_with(args, stdin, &Settings::default())
}

fn run_with(args: &[&str], stdin: &str, settings: &Settings) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("bintree-render").chain(args.iter().copied()))
        .expect("valid arguments");
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    execute_command(&cli, settings, &mut input, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn given_demo_when_run_then_reference_diagram() {
    assert_eq!(run(&["demo"], "").unwrap(), "   1\n     2\n      3\n");
}

#[rstest]
#[case(&["render", "1,null,2,null,3"], "")]
#[case(&["render"], "1,null,2,null,3\n")]
#[case(&["render", "-"], "[1, null, 2, null, 3]")]
fn given_chain_notation_when_render_then_same_as_demo(#[case] args: &[&str], #[case] stdin: &str) {
    assert_eq!(run(args, stdin).unwrap(), run(&["demo"], "").unwrap());
}

#[test]
fn given_file_input_when_render_then_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.txt");
    fs::write(&path, "a,b,c").unwrap();

    let out = run(&["render", "--file", path.to_str().unwrap()], "").unwrap();

    assert_eq!(out, " a\nb c\n");
}

#[test]
fn given_missing_file_when_render_then_noinput() {
    let err = run(&["render", "-f", "/definitely/not/here.txt"], "").unwrap_err();
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_custom_null_token_when_render_then_used() {
    let out = run(&["render", "--null-token", "_", "1,_,2"], "").unwrap();
    assert_eq!(out, " 1\n  2\n");
}

#[test]
fn given_empty_tree_when_render_then_no_output() {
    assert_eq!(run(&["render", "[]"], "").unwrap(), "");
}

#[test]
fn given_bad_notation_when_render_then_dataerr() {
    let err = run(&["render", "1,,2"], "").unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_tree_deeper_than_limit_when_render_then_dataerr() {
    let settings = Settings {
        max_depth: 2,
        ..Settings::default()
    };
    let err = run_with(&["render", "1,null,2,null,3"], "", &settings).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert!(err.to_string().contains("exceeds the configured maximum of 2"));
}

#[test]
fn given_right_chain_of_200k_nodes_when_render_then_dataerr_without_overflow() {
    let mut notation = String::from("0");
    for i in 1..200_000 {
        notation.push_str(&format!(",null,{i}"));
    }

    let err = run(&["render"], &notation).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[rstest]
#[case("1", "1\n")]
#[case("1,null,2,null,3", "3\n")]
#[case("", "0\n")]
fn given_notation_when_depth_then_prints_depth(#[case] notation: &str, #[case] expected: &str) {
    assert_eq!(run(&["depth"], notation).unwrap(), expected);
}

#[test]
fn given_depth_three_when_table_then_prints_nested_lists() {
    assert_eq!(run(&["table", "3"], "").unwrap(), "[[3], [1, 5], [0, 2, 4, 6]]\n");
}

#[rstest]
#[case("0")]
#[case("17")]
fn given_out_of_range_depth_when_table_then_usage_error(#[case] depth: &str) {
    let err = run(&["table", depth], "").unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_config_show_when_run_then_prints_toml() {
    let out = run(&["config", "show"], "").unwrap();
    assert!(out.contains("null_token = \"null\""));
}

#[test]
fn given_config_template_when_run_then_prints_commented_template() {
    let out = run(&["config", "template"], "").unwrap();
    assert!(out.starts_with("# bintree-render configuration"));
}

#[test]
fn given_completion_when_run_then_emits_script() {
    let out = run(&["completion", "bash"], "").unwrap();
    assert!(out.contains("bintree-render"));
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("bintree-render").chain(args.iter().copied()))
        .expect("valid arguments")
}

fn broken_config() -> Result<Settings, ApplicationError> {
    Err(ApplicationError::Config {
        message: "parse bintree-render.toml: invalid type".to_string(),
    })
}

#[rstest]
#[case(&["demo"])]
#[case(&["completion", "zsh"])]
#[case(&["config", "path"])]
#[case(&["config", "template"])]
fn given_broken_config_when_command_ignores_settings_then_defaults(#[case] args: &[&str]) {
    let cli = parse(args);
    let settings = resolve_settings(&cli.command, broken_config).unwrap();
    assert_eq!(settings, Settings::default());
}

#[rstest]
#[case(&["render", "1"])]
#[case(&["depth", "1"])]
#[case(&["table", "2"])]
#[case(&["config", "show"])]
fn given_broken_config_when_command_reads_settings_then_config_error(#[case] args: &[&str]) {
    let cli = parse(args);
    let err = CliError::from(resolve_settings(&cli.command, broken_config).unwrap_err());
    assert_eq!(err.exit_code(), exitcode::CONFIG);
}
