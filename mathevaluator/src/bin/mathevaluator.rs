use clap::Parser;
use mathevaluator::{EvalResult, Session};
use rustyline::error::ReadlineError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate math expressions", long_about = None)]
struct Args {
    /// Significant digits to print
    #[arg(short, long, default_value_t = mathevaluator::DEFAULT_PRECISION)]
    precision: usize,

    /// History file for the interactive prompt
    #[arg(long)]
    history: Option<PathBuf>,

    /// Don't read or write a history file
    #[arg(long)]
    no_history: bool,

    /// Evaluate this expression and exit
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

fn print_result(result: EvalResult, precision: usize) {
    match result {
        EvalResult::Malformed => println!("> Malformed expression"),
        value => println!("> {}", value.to_string_with(precision)),
    }
}

fn history_path(args: &Args) -> Option<PathBuf> {
    if args.no_history {
        return None;
    }
    args.history
        .clone()
        .or_else(|| dirs::home_dir().map(|h| h.join(".mathevaluator_history")))
}

fn repl(args: &Args) -> Result<(), ReadlineError> {
    let mut rl = rustyline::DefaultEditor::new()?;
    let histpath = history_path(args);
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history at {}", path.display());
        }
    }

    let mut session = Session::new();
    println!("Enter a mathematical expression:");
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
            Ok(line) => {
                let line = line.trim();
                if line == "exit" {
                    break;
                }
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                print_result(session.evaluate(line), args.precision);
                println!();
            }
        }
    }

    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            log::warn!("can't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        let result = mathevaluator::evaluate(&input, None);
        print_result(result, args.precision);
        if result.is_error() {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&args) {
        eprintln!("Readline err: {:?}", e);
        std::process::exit(1);
    }
}
