//! Command-line definition and argument extraction

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::time::Duration;
use vehrec_core::Field;

/// Exit code for a form that fails validation
pub(crate) const EXIT_INVALID: u8 = 2;

/// Exit code for a failed prediction request
pub(crate) const EXIT_REQUEST_FAILED: u8 = 1;

pub(crate) fn build() -> Command {
    Command::new("vehrec")
        .version(vehrec_core::VERSION)
        .about("Vehicle recommendations from an ML prediction endpoint")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("options").about("List the dropdown catalogs"))
        .subcommand(
            query_args(Command::new("check"))
                .about("Validate a query and print the request payload"),
        )
        .subcommand(
            query_args(Command::new("recommend"))
                .about("Send a query and print the recommended vehicles")
                .arg(
                    Arg::new("endpoint")
                        .long("endpoint")
                        .value_name("URL")
                        .help("Prediction endpoint (defaults to $ML_MODEL_URL)"),
                )
                .arg(
                    Arg::new("timeout-secs")
                        .long("timeout-secs")
                        .value_name("N")
                        .value_parser(value_parser!(u64))
                        .help("Give up after N seconds (default: wait)"),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .action(ArgAction::SetTrue)
                        .help("Render HTML instead of text"),
                ),
        )
}

fn query_args(cmd: Command) -> Command {
    Field::ALL.iter().fold(cmd, |cmd, field| {
        cmd.arg(
            Arg::new(field.name())
                .long(field.name())
                .value_name(field.label())
                .default_value("")
                .hide_default_value(true)
                .help(field.placeholder()),
        )
    })
}

/// Field edits in form order; missing flags are empty strings
pub(crate) fn field_values(args: &ArgMatches) -> Vec<(Field, String)> {
    Field::ALL
        .iter()
        .map(|&field| {
            let value = args
                .get_one::<String>(field.name())
                .cloned()
                .unwrap_or_default();
            (field, value)
        })
        .collect()
}

pub(crate) fn timeout(args: &ArgMatches) -> Option<Duration> {
    args.get_one::<u64>("timeout-secs")
        .map(|secs| Duration::from_secs(*secs))
}
