// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::{commands, infra::t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("case-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("fetch")
                .about(t!("cmd_fetch_about", locale = locale).to_string())
                .arg(
                    Arg::new("source")
                        .help(t!("arg_source", locale = locale).to_string())
                        .value_name("URL_OR_FILE")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("language")
                        .short('l')
                        .long("language")
                        .help(t!("arg_language", locale = locale).to_string())
                        .value_name("SOLUTION_LANGUAGE")
                        .default_value("cpp")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help(t!("arg_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help(t!("arg_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .help(t!("arg_timeout", locale = locale).to_string())
                        .value_name("SECONDS")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("add")
                .about(t!("cmd_add_about", locale = locale).to_string())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help(t!("arg_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .help(t!("arg_input", locale = locale).to_string())
                        .value_name("INPUT")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .action(ArgAction::Set),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("fetch", fetch_matches)) => {
            let source = fetch_matches
                .get_one::<String>("source")
                .expect("required argument")
                .clone();
            let solution_language = fetch_matches
                .get_one::<String>("language")
                .expect("has default")
                .clone();
            let dir = fetch_matches
                .get_one::<PathBuf>("dir")
                .expect("has default")
                .clone();

            commands::fetch::execute(source, solution_language, dir).await?;
        }
        Some(("run", run_matches)) => {
            let dir = run_matches
                .get_one::<PathBuf>("dir")
                .expect("has default")
                .clone();
            let timeout = run_matches.get_one::<u64>("timeout").copied();

            commands::run::execute(dir, timeout).await?;
        }
        Some(("add", add_matches)) => {
            let dir = add_matches
                .get_one::<PathBuf>("dir")
                .expect("has default")
                .clone();
            let input = add_matches.get_one::<String>("input").cloned();
            let output = add_matches.get_one::<String>("output").cloned();

            commands::add::execute(dir, input, output)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
