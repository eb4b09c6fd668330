//! Demo binary: a small two-command program driven entirely by specs.
//!
//! Shows the full wiring: build a [`MainSpec`], dispatch `std::env::args`,
//! and pattern-match the outcome into help pages, a version line, or the
//! selected command's bound values.

use std::process::ExitCode;

use optbind_bind::{DispatchOutcome, Dispatcher, ParseResult};
use optbind_core::{
    CommandSpec, DefaultResources, EnumSpec, LastArgsSpec, MainSpec, OptionSpec, OtherOptionSpec,
    ValueType,
};
use optbind_help::{CommandHelp, MainHelp, TableRenderer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn program_spec() -> MainSpec {
    MainSpec::new()
        .with_header(&format!("optbind - version {VERSION}"))
        .with_header("Declarative command-line binding demo")
        .with_usage("<command> <options> <flags>")
        .with_other(OtherOptionSpec::help(["-h", "-help"]).with_description("Displays this help and exit"))
        .with_other(OtherOptionSpec::version(["-v", "-version"]).with_description("Displays version and exit"))
        .with_command(
            CommandSpec::new("decode")
                .with_alias("d")
                .with_description("Decodes an input file")
                .with_usage("decode -i <input> [options] [flags]")
                .with_option(
                    OptionSpec::value("-i", ValueType::FilePath)
                        .with_alias("--input-path")
                        .with_description("Input file path"),
                )
                .with_option(
                    OptionSpec::value("-o", ValueType::FilePath)
                        .with_alias("--out-path")
                        .with_default("out")
                        .with_description("Output path"),
                )
                .with_option(
                    OptionSpec::value("-max", ValueType::Integer)
                        .with_description("Maximum number of entries, decimal or 0x-hex"),
                )
                .with_option(
                    OptionSpec::choice("-l", ["aaa", "bbb", "ccc"]).with_description("Level"),
                )
                .with_option(
                    OptionSpec::choice_of("-m", EnumSpec::new("Mode", ["strict", "lenient"]))
                        .with_description("Decode mode"),
                )
                .with_option(
                    OptionSpec::flag("-f")
                        .with_alias("--force")
                        .with_description("Overwrite existing output"),
                )
                .with_option(
                    OptionSpec::flag("-h")
                        .with_alias("-help")
                        .with_description("Displays help for this command"),
                )
                .with_example("decode -i input.bin -max 0x200 -f")
                .with_example("d --input-path input.bin -l bbb -m strict"),
        )
        .with_command(
            CommandSpec::new("build")
                .with_alias("b")
                .with_description("Builds an archive from files")
                .with_usage("build -i <dir> [-x <name> ...] <files ...>")
                .with_option(
                    OptionSpec::value("-i", ValueType::FilePath).with_description("Source directory"),
                )
                .with_option(
                    OptionSpec::list("-x", ValueType::String)
                        .with_description("Name to exclude, repeatable"),
                )
                .with_option(
                    OptionSpec::flag("-h")
                        .with_alias("-help")
                        .with_description("Displays help for this command"),
                )
                .with_last_args(
                    LastArgsSpec::new(ValueType::FilePath).with_description("Files to include"),
                )
                .with_example("build -i ./src -x tmp a.txt b.txt"),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let spec = program_spec();
    let dispatcher = match Dispatcher::new(&spec) {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            eprintln!("bad program spec: {err}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!(count = args.len(), "dispatching arguments");
    match dispatcher.dispatch(&args) {
        Ok(outcome) => run(&spec, outcome),
        Err(err) => {
            eprintln!("{}", err.message(&DefaultResources));
            ExitCode::FAILURE
        }
    }
}

fn run(spec: &MainSpec, outcome: DispatchOutcome<'_>) -> ExitCode {
    // A raised help flag (or a bare command name) turns the selection into
    // that command's help page; the dispatcher leaves that call to us.
    let outcome = match outcome {
        DispatchOutcome::Selected {
            command,
            result,
            args_empty,
        } if args_empty || result.flag("-h") => DispatchOutcome::Help(Some(command)),
        other => other,
    };

    match outcome {
        DispatchOutcome::Help(None) => {
            print!("{}", main_help(spec));
            ExitCode::SUCCESS
        }
        DispatchOutcome::Help(Some(command)) => {
            print!("{}", CommandHelp::new(command).render(&DefaultResources));
            ExitCode::SUCCESS
        }
        DispatchOutcome::Version => {
            println!("optbind {VERSION}");
            ExitCode::SUCCESS
        }
        DispatchOutcome::Other(id) => {
            eprintln!("no handler registered for action '{id}'");
            ExitCode::FAILURE
        }
        DispatchOutcome::Selected { command, result, .. } => {
            match command.name.as_str() {
                "decode" => run_decode(&result),
                "build" => run_build(&result),
                other => eprintln!("no runner for command '{other}'"),
            }
            ExitCode::SUCCESS
        }
    }
}

fn main_help(spec: &MainSpec) -> String {
    MainHelp::new(spec)
        .with_renderer(TableRenderer::new().with_border(true))
        .with_footer("To get help about each command run with:")
        .with_footer("   <command> -h")
        .render(&DefaultResources)
}

fn run_decode(result: &ParseResult) {
    println!("decode:");
    if let Some(input) = result.get_path("-i") {
        println!("  input   = {}", input.display());
    }
    if let Some(output) = result.get_path("-o") {
        println!("  output  = {}", output.display());
    }
    if let Some(max) = result.get_int("-max") {
        println!("  max     = {max}");
    }
    if let Some(level) = result.get_str("-l") {
        println!("  level   = {level}");
    }
    if let Some(mode) = result.get_str("-m") {
        println!("  mode    = {mode}");
    }
    println!("  force   = {}", result.flag("-f"));
}

fn run_build(result: &ParseResult) {
    println!("build:");
    if let Some(source) = result.get_path("-i") {
        println!("  source  = {}", source.display());
    }
    for excluded in result.list("-x") {
        println!("  exclude = {excluded}");
    }
    for file in result.last_args() {
        println!("  include = {file}");
    }
}
