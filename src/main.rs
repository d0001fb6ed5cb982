use std::{io, process::exit};

use argh::FromArgs;
#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
use ron::ser::PrettyConfig;
use rpn::{calculator::EVAL_CAPACITY, Calculator, Error};
use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEMO: &[&str] = &[
    "",
    "1 1 &",
    "1 1",
    "1 1 + +",
    "Random Junk",
    "1",
    "1 1 +",
    "15 5 +",
    "15 -5 *",
    "1 1 1 + -",
    "15 7 1 1 + - // 3 * 2 1 1 + + -",
    "-5 27 *",
    "5 -27 *",
    "-5 -27 *",
    "-5 0 *",
    "0 5 *",
    "0 0 *",
    "0 kk *",
    "7 0 //",
];

/// CLI options
#[derive(FromArgs)]
struct Opts {
    #[argh(subcommand)]
    cmd: Cmd,
}

/// Command
#[derive(FromArgs)]
#[argh(subcommand)]
enum Cmd {
    Eval(EvalCmd),
    Tokens(TokensCmd),
    Demo(DemoCmd),
}

/// Evaluate expressions (reads one per line from stdin when none are given)
#[derive(FromArgs)]
#[argh(subcommand, name = "eval")]
struct EvalCmd {
    #[argh(option, default = "EVAL_CAPACITY as i64", description = "stack capacity")]
    capacity: i64,
    #[argh(positional)]
    expressions: Vec<String>,
}

/// Show the tokens of an expression
#[derive(FromArgs)]
#[argh(subcommand, name = "tokens")]
struct TokensCmd {
    #[argh(positional)]
    expression: String,
}

/// Evaluate a set of sample expressions
#[derive(FromArgs)]
#[argh(subcommand, name = "demo")]
struct DemoCmd {}

fn print_ron<T: Serialize>(value: &T) -> Result<(), Error> {
    println!(
        "{}",
        ron::ser::to_string_pretty(
            value,
            PrettyConfig::default()
                .struct_names(true)
                .indentor("  ")
                .compact_arrays(true)
        )?
    );

    Ok(())
}

fn cmd(opts: Opts) -> Result<(), Error> {
    match opts.cmd {
        Cmd::Eval(EvalCmd {
            capacity,
            expressions,
        }) => {
            let calculator = Calculator::with_capacity(capacity);

            if expressions.is_empty() {
                calculator.eval_lines(io::stdin().lock(), io::stdout().lock())?;
            } else {
                for expression in expressions {
                    println!("{}", calculator.eval(&expression)?);
                }
            }
        }
        // tokens and demo only print, evaluation is covered by the library tests
        Cmd::Tokens(TokensCmd { expression }) => {
            return print_ron(&Calculator::parse(&expression));
        }
        Cmd::Demo(DemoCmd {}) => {
            let calculator = Calculator::default();

            for expression in DEMO {
                match calculator.eval(expression) {
                    Ok(value) => println!("({expression}) = {value}"),
                    Err(e) => println!("'{expression}' fails to be evaluated: {e}"),
                }
            }
        }
    }

    Ok(())
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = argh::from_env();

    if let Err(e) = cmd(opts) {
        eprintln!("{e} at {}", e.span());
        exit(1);
    }
}
