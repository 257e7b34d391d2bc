//! `appcfg`: inspect the application configuration
//!
//! Exit codes: 0 on success, 1 on invalid configuration or unknown model,
//! 2 when a section or path has nothing in it.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use appcfg_core::AppConfig;

mod commands;

use commands::{Format, Outcome};

fn cli() -> Command {
    Command::new("appcfg")
        .version(appcfg_core::VERSION)
        .about("Inspect application configuration and model routing")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level (RUST_LOG overrides)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .default_value("json")
                .value_parser(value_parser!(Format))
                .help("Output encoding"),
        )
        .subcommand(Command::new("sections").about("List section names"))
        .subcommand(
            Command::new("section")
                .about("Show one section, derived fields included")
                .arg(Arg::new("name").required(true).help("Section name, e.g. vercelSandbox")),
        )
        .subcommand(
            Command::new("get")
                .about("Show the value at a dot-path")
                .arg(Arg::new("path").required(true).help("Dot-path, e.g. e2b.timeoutMs")),
        )
        .subcommand(
            Command::new("model")
                .about("Resolve a model id to its dispatch target")
                .arg(Arg::new("id").required(true).help("Model id, e.g. zai/glm-4.7")),
        )
        .subcommand(Command::new("models").about("List models in recommendation order"))
        .subcommand(Command::new("check").about("Validate the configuration"))
        .subcommand(Command::new("dump").about("Show the whole configuration tree"))
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing_subscriber::registry().with(layer).init();
}

fn argument<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing argument <{id}>"))
}

fn run(matches: &ArgMatches) -> Result<Outcome> {
    let format = matches.get_one::<Format>("format").copied().unwrap_or_default();
    let config = AppConfig::global().context("failed to load configuration")?;

    let outcome = match matches.subcommand() {
        Some(("sections", _)) => Outcome::Rendered(commands::sections()),
        Some(("section", args)) => commands::section(config, argument(args, "name")?, format)?,
        Some(("get", args)) => commands::get(config, argument(args, "path")?, format)?,
        Some(("model", args)) => {
            Outcome::Rendered(commands::model(config, argument(args, "id")?, format)?)
        }
        Some(("models", _)) => Outcome::Rendered(commands::models(config, format)?),
        Some(("check", _)) => Outcome::Rendered(commands::check(config)?),
        Some(("dump", _)) => Outcome::Rendered(commands::dump(config, format)?),
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    };
    Ok(outcome)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(Outcome::Rendered(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Absent(notice)) => {
            eprintln!("{notice}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
