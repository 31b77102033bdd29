//! The modsum CLI tool

mod util;

use clap::{Parser, Subcommand};
use env_logger::fmt::Color;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use modsum::judge::{judge, judge_against_output, Error as JudgeError, Verdict};
use modsum::parser_util::Error as ParseError;
use modsum::solver::{self, FlushPolicy};
use modsum::{buffered_write_file, input_name, read_input, STDIN_PATH};
use std::io::{self, Write};
use std::path::Path;
use strum::{Display, EnumString, EnumVariantNames};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, EnumVariantNames, Display)]
pub enum FlushArgument {
    #[strum(serialize = "case")]
    Case,
    #[strum(serialize = "end")]
    End,
}

impl From<FlushArgument> for FlushPolicy {
    fn from(flush: FlushArgument) -> Self {
        match flush {
            FlushArgument::Case => FlushPolicy::EachCase,
            FlushArgument::End => FlushPolicy::AtEnd,
        }
    }
}

#[derive(Parser)]
#[command(name = "modsum", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Reads test cases and prints "Case #<i>: <sum mod M>" for each of them.
    Solve {
        /// Input file, "-" for stdin
        #[arg(default_value_t = String::from(STDIN_PATH))]
        input: String,

        /// Output file. Results are written to stdout if not given.
        #[arg(short, long)]
        output: Option<String>,

        /// Force overwriting of the output file.
        #[arg(short, long)]
        #[arg(default_value_t = false)]
        force: bool,

        /// Flush the output after every case or only at the end.
        #[arg(long)]
        #[arg(default_value_t = FlushArgument::End)]
        #[arg(value_parser = clap_enum_variants!(FlushArgument))]
        flush: FlushArgument,
    },
    /// Checks an attempted output for an input file.
    /// Prints "Accepted" or the reason for rejection; exits with 1 on rejection.
    Judge {
        /// Input file the attempt was produced from
        input: String,

        /// Output file to check
        attempt: String,

        /// Compare against this reference output instead of recomputing the answers.
        #[arg(long)]
        expected: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Solve {
            input: STDIN_PATH.to_string(),
            output: None,
            force: false,
            flush: FlushArgument::End,
        }
    }
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => {
                    style.set_color(Color::Red);
                }
                Level::Warn => {
                    style.set_color(Color::Yellow);
                }
                _ => {}
            }
            writeln!(buf, "{}", style.value(record.args()))
        })
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
    } else {
        run_command(args.command.unwrap_or_default());
    }
    Ok(())
}

#[allow(clippy::print_stderr)]
fn run_command(command: Commands) {
    if let Err(errors) = execute(command) {
        for error in errors {
            eprintln!("{error}");
        }
        std::process::exit(1);
    }
}

fn execute(command: Commands) -> Result<(), Vec<String>> {
    match command {
        Commands::Solve {
            input,
            output,
            force,
            flush,
        } => solve(&input, output.as_deref(), force, flush.into()),
        Commands::Judge {
            input,
            attempt,
            expected,
        } => {
            let verdict = run_judge(&input, &attempt, expected.as_deref())?;
            print_verdict(&verdict);
            if verdict.is_accepted() {
                Ok(())
            } else {
                Err(vec![])
            }
        }
    }
}

fn read(path: &str) -> Result<String, Vec<String>> {
    read_input(path).map_err(|e| vec![format!("Failed to read {}: {e}", input_name(path))])
}

fn solve(
    input: &str,
    output: Option<&str>,
    force: bool,
    flush: FlushPolicy,
) -> Result<(), Vec<String>> {
    let name = input_name(input);
    let contents = read(input)?;

    let result = match output {
        Some(output) => {
            let output = Path::new(output);
            if output.exists() && !force {
                return Err(vec![format!(
                    "Output file {} already exists. Use --force to overwrite.",
                    output.display()
                )]);
            }
            buffered_write_file(output, |w| {
                solver::run_with_policy(Some(name), &contents, w, flush)
            })
            .map_err(|e| vec![format!("Failed to write {}: {e}", output.display())])?
        }
        None => solver::run_with_policy(Some(name), &contents, io::stdout().lock(), flush),
    };

    match result {
        Ok(count) => {
            log::debug!("Wrote {count} result line(s).");
            Ok(())
        }
        Err(solver::Error::Parse(err)) => Err(report_parse_error(name, &err)),
        Err(err) => Err(vec![err.to_string()]),
    }
}

fn run_judge(input: &str, attempt: &str, expected: Option<&str>) -> Result<Verdict, Vec<String>> {
    let name = input_name(input);
    let input_contents = read(input)?;
    let attempt_contents = read(attempt)?;
    let verdict = match expected {
        Some(expected) => {
            let expected_contents = read(expected)?;
            let num_cases = modsum::parser::CaseReader::new(Some(name), &input_contents)
                .map_err(|err| report_parse_error(name, &err))?
                .num_cases();
            judge_against_output(&expected_contents, &attempt_contents, num_cases)
        }
        None => judge(Some(name), &input_contents, &attempt_contents),
    };
    verdict.map_err(|err| match err {
        JudgeError::Input(solver::Error::Parse(err)) => report_parse_error(name, &err),
        err => vec![err.to_string()],
    })
}

fn report_parse_error(name: &str, err: &ParseError) -> Vec<String> {
    err.output_to_stderr();
    vec![format!("Failed to read test cases from {name}.")]
}

#[allow(clippy::print_stdout)]
fn print_verdict(verdict: &Verdict) {
    println!("{verdict}");
}
