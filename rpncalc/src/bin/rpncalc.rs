use clap::Parser;
use log::{debug, warn};
use rpncalc::{CalcError, ShuntingParser};
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Evaluate arithmetic expressions with + - * /, parens and the
/// functions pow, abs, max and min.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also print the postfix form and the infix form it reads back as.
    #[arg(short, long)]
    rpn: bool,

    /// History file for the prompt, defaults to ~/.rpncalc_history
    #[arg(long)]
    history: Option<PathBuf>,

    /// Expression to evaluate once. Without it an interactive prompt
    /// starts, type 'e' to leave.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

mod repl {
    use super::*;

    pub fn evalexpr(input: &str, show_rpn: bool) -> Result<f64, CalcError> {
        let rpn = ShuntingParser::parse_str(input)?;
        if show_rpn {
            println!("RPN: {}", rpn.to_postfix_string());
            println!("Infix: {}", rpn);
        }
        Ok(rpn.eval()?)
    }

    pub fn report(result: &Result<f64, CalcError>) {
        match result {
            Ok(value) => println!("Result: {}", value),
            Err(e) => println!("Error: {}", e),
        }
    }

    pub fn run(args: &Args) -> Result<(), ReadlineError> {
        let histpath = args
            .history
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".rpncalc_history")));
        let mut rl = rustyline::DefaultEditor::new()?;
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                debug!("No history yet at {}", path.display());
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
                Ok(line) => {
                    let input = line.trim();
                    if input == "e" {
                        break;
                    }
                    let _ = rl.add_history_entry(input);
                    report(&evalexpr(input, args.rpn));
                }
            }
        }
        if let Some(path) = &histpath {
            if let Err(e) = rl.save_history(path) {
                warn!("Couldn't save history to {}: {}", path.display(), e);
            }
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.expr.is_empty() {
        let result = repl::evalexpr(&args.expr.join(" "), args.rpn);
        repl::report(&result);
        if result.is_err() {
            std::process::exit(1);
        }
    } else if let Err(e) = repl::run(&args) {
        eprintln!("Readline error: {}", e);
        std::process::exit(1);
    }
}
