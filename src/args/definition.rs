//! Command-line argument definition and processing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use i18n_code::Setup;

/// i18n-code - locale detection, translation and localized routes from an i18n config file
#[derive(Parser, Debug)]
#[command(name = "i18n-code")]
#[command(version)]
#[command(about = "Locale detection, translation and localized routes from an i18n config file", long_about = None)]
pub struct Args {
    /// Configuration file (default: ./i18n.{yml,yaml,toml,json}, then ~/.config/i18n-code/)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the locale for a request path and Accept-Language header
    Resolve {
        /// Request path (e.g. /ja/home)
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Accept-Language header value (e.g. "zh-CN,zh;q=0.9")
        #[arg(short = 'a', long)]
        accept_language: Option<String>,
    },

    /// Translate a dot-notation key
    Translate {
        /// Message key (e.g. home.header.notify)
        key: String,

        /// Locale to translate into (default: the configured default locale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Placeholder value as NAME=VALUE (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },

    /// Print locale-prefixed variants of page routes as JSON
    Routes {
        /// Pages as PATH or PATH:NAME (e.g. / /about:about)
        #[arg(required = true, num_args = 1..)]
        pages: Vec<String>,

        /// Include the original routes in the output
        #[arg(long)]
        keep_original: bool,
    },

    /// Print the effective runtime configuration as JSON
    Config,
}

/// What: Run the selected subcommand.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `setup`: Runtime configuration built from the config file
///
/// Output:
/// - Process exit code
pub fn process_args(args: &Args, setup: &Setup) -> ExitCode {
    use crate::args::{resolve, routes, show, translate};

    match &args.command {
        Command::Resolve {
            path,
            accept_language,
        } => resolve::handle_resolve(setup, path, accept_language.as_deref()),
        Command::Translate {
            key,
            locale,
            params,
        } => translate::handle_translate(setup, key, locale.as_deref(), params),
        Command::Routes {
            pages,
            keep_original,
        } => routes::handle_routes(setup, pages, *keep_original),
        Command::Config => show::handle_show_config(setup),
    }
}
