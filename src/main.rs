//! Command-line driver for the pseudocode front end.

use anyhow::{Context, Result};
use clap::Parser;
use pseudoc::codegen::Target;
use pseudoc::frontend::dump::{dump_program, dump_tokens};
use pseudoc::{compile, parse, resolve, strip_comments, tokenize};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pseudoc", version, about = "Pseudocode front end and compiler")]
struct Args {
    /// Source file to process
    input: PathBuf,

    /// Print the token sequence before parsing
    #[arg(short = 't', long)]
    tokeniser_debug: bool,

    /// Stop after tokenising
    #[arg(short = 'T', long)]
    tokenise_only: bool,

    /// Print the syntax tree before resolution
    #[arg(short = 'p', long)]
    parser_debug: bool,

    /// Stop after parsing
    #[arg(short = 'P', long)]
    parse_only: bool,

    /// Output language
    #[arg(long, value_enum, default_value_t = Target::C)]
    emit: Target,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let stripped = strip_comments(&source);

    let tokens = tokenize(&stripped)
        .with_context(|| format!("failed to tokenise {}", args.input.display()))?;
    if args.tokeniser_debug || args.tokenise_only {
        print!("{}", dump_tokens(&tokens));
    }
    if args.tokenise_only {
        return Ok(());
    }

    let program = parse(&tokens)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    if args.parser_debug || args.parse_only {
        print!("{}", dump_program(&program));
    }
    if args.parse_only {
        return Ok(());
    }

    resolve(&program)
        .with_context(|| format!("failed to resolve {}", args.input.display()))?;

    let emitted = compile(&program, args.emit);
    match &args.output {
        Some(path) => fs::write(path, emitted)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{emitted}"),
    }
    Ok(())
}
