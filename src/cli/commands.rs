//! Command handlers.
//!
//! Handlers write to the supplied sink instead of stdout so they can be driven
//! from tests.

use std::fs;
use std::io::{Read, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{
    ensure_depth_within, print_tree, print_tree_with_depth, ApplicationError, ApplicationResult,
    IoResultExt,
};
use crate::cli::args::{Cli, Commands, ConfigCommands, TreeInput};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{level_order, ColumnTable, Node, Tree};
use crate::parser::parse_level_order;

/// Settings for `command`, calling `load` only when the command reads them.
///
/// `demo`, `completion`, `config path` and `config template` run on defaults, so
/// a broken config file does not lock them out.
pub fn resolve_settings<F>(command: &Commands, load: F) -> ApplicationResult<Settings>
where
    F: FnOnce() -> ApplicationResult<Settings>,
{
    if command.uses_settings() {
        load()
    } else {
        debug!("command does not read settings, using defaults");
        Ok(Settings::default())
    }
}

pub fn execute_command(
    cli: &Cli,
    settings: &Settings,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> CliResult<()> {
    match &cli.command {
        Commands::Render { input } => _render(input, settings, stdin, out),
        Commands::Depth { input } => _depth(input, settings, stdin, out),
        Commands::Demo => _demo(out),
        Commands::Table { depth } => _table(*depth, settings, out),
        Commands::Config { command } => _config(command, settings, out),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, out);
            Ok(())
        }
    }
}

/// Reads the notation from the argument, a file, or stdin, and parses it.
#[instrument(skip(settings, stdin))]
fn read_tree(input: &TreeInput, settings: &Settings, stdin: &mut dyn Read) -> ApplicationResult<Tree<String>> {
    let text = match (&input.tree, &input.file) {
        (Some(tree), _) if tree != "-" => tree.clone(),
        (_, Some(path)) => {
            if !path.exists() {
                return Err(ApplicationError::InputNotFound(path.clone()));
            }
            fs::read_to_string(path).with_path_context("read tree file", path)?
        }
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).with_context("read tree from stdin")?;
            buf
        }
    };
    let null_token = input.null_token.as_deref().unwrap_or(settings.null_token.as_str());
    debug!("parsing {} bytes with null token {:?}", text.len(), null_token);
    Ok(parse_level_order(&text, null_token)?)
}

fn warn_on_wide_values(root: Option<&Node<String>>) {
    if level_order(root)
        .into_iter()
        .flatten()
        .any(|value| value.chars().count() > 1)
    {
        output::warning("values wider than one character will not line up with deeper levels");
    }
}

#[instrument(skip(settings, stdin, out))]
fn _render(
    input: &TreeInput,
    settings: &Settings,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> CliResult<()> {
    let tree = read_tree(input, settings, stdin)?;
    let depth = ensure_depth_within(tree.as_deref(), settings.max_depth)?;
    warn_on_wide_values(tree.as_deref());
    print_tree_with_depth(tree.as_deref(), depth, out)?;
    Ok(())
}

#[instrument(skip(settings, stdin, out))]
fn _depth(
    input: &TreeInput,
    settings: &Settings,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> CliResult<()> {
    let tree = read_tree(input, settings, stdin)?;
    let depth = tree.as_deref().map_or(0, Node::depth);
    writeln!(out, "{}", depth).with_context("write depth")?;
    Ok(())
}

#[instrument(skip(out))]
fn _demo(out: &mut dyn Write) -> CliResult<()> {
    let root = Node::new(1).with_right(Node::new(2).with_right(Node::new(3)));
    print_tree(Some(&root), out)?;
    Ok(())
}

#[instrument(skip(settings, out))]
fn _table(depth: usize, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    if depth == 0 || depth > settings.max_depth {
        return Err(CliError::InvalidArgs(format!(
            "depth must be between 1 and {}, got {}",
            settings.max_depth, depth
        )));
    }
    writeln!(out, "{}", ColumnTable::build(depth)).with_context("write column table")?;
    Ok(())
}

#[instrument(skip(settings, out))]
fn _config(command: &ConfigCommands, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    let text = match command {
        ConfigCommands::Show => settings.to_toml()?,
        ConfigCommands::Path => match global_config_path() {
            Some(path) => format!("{}\n", path.display()),
            None => {
                return Err(CliError::Usage(
                    "no config directory available on this platform".to_string(),
                ))
            }
        },
        ConfigCommands::Template => Settings::template(),
    };
    out.write_all(text.as_bytes()).with_context("write config")?;
    Ok(())
}
