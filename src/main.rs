//! i18n-code binary entrypoint kept minimal. Subcommands live in `args`.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

struct CliTimer;

impl tracing_subscriber::fmt::time::FormatTime for CliTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Install the stderr logger. `RUST_LOG` wins over `level`.
fn init_logging(level: &str) {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_timer(CliTimer)
        .init();
    let _ = LOG_GUARD.set(guard);
}

fn main() -> ExitCode {
    let cli = args::Args::parse();

    // Options are read before logging starts so `debug: true` can raise the level.
    let loaded = args::load_cli_options(cli.config.as_deref());
    let config_debug = loaded.as_ref().is_ok_and(|l| l.options.debug);
    init_logging(&args::determine_log_level(&cli, config_debug));

    let loaded = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "failed to load i18n configuration");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "using i18n configuration"),
        None => tracing::info!("no i18n configuration found, using defaults"),
    }

    let setup = i18n_code::setup(&loaded.options, &loaded.root_dir);
    args::process_args(&cli, &setup)
}
