use std::io;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bintree_render::cli::{execute_command, output, resolve_settings, Cli, CliResult};
use bintree_render::config::Settings;
use bintree_render::exitcode;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let code = match run(&cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(&cli.command, Settings::load)?;
    tracing::debug!("settings: {:?}", settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command(cli, &settings, &mut io::stdin().lock(), &mut out)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
