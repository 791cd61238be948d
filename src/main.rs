use std::{
    fs,
    io::{self, BufRead, Read, Write},
};

use clap::Parser;
use sapphire::{Scope, interpreter::value::core::display_optional, run};

/// Sapphire is a small line-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sapphire to treat CONTENTS as the path of a script file.
    #[arg(short, long)]
    file: bool,

    /// Starts a read-eval loop where every input line runs against one
    /// persistent scope. Type `quit` to leave.
    #[arg(short, long)]
    interactive: bool,

    /// Does not echo `=> <result>` after running.
    #[arg(short, long)]
    quiet: bool,

    /// The script, or a path with `--file`. Read from standard input when
    /// omitted.
    contents: Option<String>,
}

/// Installs a `tracing` subscriber writing to standard error, but only when
/// `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();

    if args.interactive {
        if let Err(e) = repl(args.quiet) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let script = match (args.file, args.contents) {
        (true, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|_| {
                                  eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                  std::process::exit(1);
                              }),
        (true, None) => {
            eprintln!("--file needs a path.");
            std::process::exit(1);
        },
        (false, Some(contents)) => contents,
        (false, None) => {
            let mut contents = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut contents) {
                eprintln!("Failed to read standard input: {e}");
                std::process::exit(1);
            }
            contents
        },
    };

    let mut scope = Scope::with_builtins();
    if !run_line(&script, &mut scope, args.quiet) {
        std::process::exit(1);
    }
}

/// Runs one line and reports its result, warnings and errors.
///
/// Returns `false` if the line failed.
fn run_line(source: &str, scope: &mut Scope, quiet: bool) -> bool {
    let result = run(source, scope);

    for warning in scope.take_warnings() {
        eprintln!("{warning}");
    }

    match result {
        Ok(value) => {
            if !quiet {
                println!("=> {}", display_optional(value.as_ref()));
            }
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn repl(quiet: bool) -> io::Result<()> {
    let mut scope = Scope::with_builtins();
    let stdin = io::stdin();

    println!("[Sapphire]");
    loop {
        print!("sapphire> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line == "quit" {
            break;
        }
        if !line.is_empty() {
            run_line(line, &mut scope, quiet);
        }
    }

    Ok(())
}
