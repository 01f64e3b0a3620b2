extern crate clap;
extern crate thiserror;

use std::{
    collections::HashSet,
    io,
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use bf2c::{
    codegen::assemble,
    formatter::{clang_format, ClangFormat, FormatError, Formatter, Passthrough},
    lexer::{Instruction, Lexer, LexerTokenKind},
    optimizer::{optimize, Optimizations},
    output,
};
use clap::Parser;
use colored::Colorize;
use thiserror::Error;

/// Brainf**k to C compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to operate on
    #[arg()]
    file: PathBuf,

    /// Also save the C code here (`.c` is appended if missing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Trace every stage of the pipeline
    #[arg(short, long)]
    verbose: bool,

    /// Emit one statement per instruction instead of folding runs
    #[arg(long)]
    no_optimize: bool,

    /// Skip the external formatter
    #[arg(long)]
    no_format: bool,

    /// The clang-format binary to run
    #[arg(long, env = "CLANG_FORMAT", default_value_t = clang_format::DEFAULT_PROGRAM.to_string())]
    clang_format: String,

    /// Style handed to clang-format
    #[arg(long, default_value_t = clang_format::DEFAULT_STYLE.to_string())]
    style: String,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Can't read {path:}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Can't write {path:}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Progress output, only shown with `--verbose`
macro_rules! trace {
    ($verbose: expr, $($arg: tt)*) => {
        if $verbose {
            println!($($arg)*);
        }
    };
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {0:} {1:}", "caused by:".red(), cause);
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let verbose = args.verbose;
    let mut optimizations = Optimizations::all();
    if args.no_optimize {
        optimizations = HashSet::new();
    }

    trace!(verbose, "Running {}", args.file.display());

    let text = std::fs::read_to_string(&args.file).map_err(|source| CliError::Read {
        path: args.file.display().to_string(),
        source,
    })?;
    trace!(verbose, "{}\n{}", "Raw input:".blue(), text);

    trace!(verbose, "{}", "Starting lexing".blue());
    let now = Instant::now();
    let tokens = Lexer::new(&text).located_tokens();
    let mut instructions: Vec<Instruction> = vec![];
    let mut comments = vec![];
    for (position, token) in tokens {
        match token {
            LexerTokenKind::Instruction(instruction) => instructions.push(instruction),
            LexerTokenKind::Comment(comment) => comments.push((position, comment)),
        }
    }
    trace!(
        verbose,
        "{} {} instructions in {:.2?}",
        "Finished lexing with".green(),
        instructions.len(),
        now.elapsed()
    );
    trace!(verbose, "{} {}", "Comments:".blue(), comments.len());
    for (position, comment) in &comments {
        trace!(verbose, "  {} {:?}", position, comment);
    }
    trace!(
        verbose,
        "{}\n{}",
        "Sanitized input:".blue(),
        instructions.iter().map(|i| i.as_char()).collect::<String>()
    );

    trace!(verbose, "{} {:?}", "Starting optimizations".blue(), &optimizations);
    let now = Instant::now();
    let ops = optimize(&instructions, &optimizations);
    trace!(
        verbose,
        "{} {} ops in {:.2?}",
        "Finished optimizations with".green(),
        ops.len(),
        now.elapsed()
    );

    let c_code = assemble(&ops);

    let formatter: Box<dyn Formatter> = if args.no_format {
        Box::new(Passthrough)
    } else {
        Box::new(ClangFormat::new(args.clang_format, args.style))
    };

    trace!(verbose, "{}", "Starting formatting".blue());
    let now = Instant::now();
    let c_code = formatter.format(&c_code)?;
    trace!(verbose, "{} {:.2?}", "Finished formatting in".green(), now.elapsed());
    trace!(verbose, "{}\n{}", "Formatted output:".blue(), c_code);

    // the formatted trace above already showed the code
    if !verbose {
        print!("{}", c_code);
    }

    if let Some(path) = args.output {
        let path = output::save(&path, &c_code).map_err(|source| CliError::Write {
            path: output::with_c_extension(&path).display().to_string(),
            source,
        })?;
        trace!(verbose, "{} {}", "Output written to".green(), path.display());
    }

    Ok(())
}
