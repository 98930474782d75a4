//! Categuess CLI entry point.

use categuess_debug::DebugConfig;
use categuess_foundation::PuzzleId;
use categuess_runtime::{Repl, RuntimeConfig, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    puzzles: Option<PathBuf>,
    seed: Option<u64>,
    show_help: bool,
    show_version: bool,
    check: bool,
    export: Option<PathBuf>,
    guess: Option<String>,
    puzzle: Option<String>,
    // Debug flags
    debug: bool,
    json_trace: bool,
}

impl CliConfig {
    fn runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::new().with_debug(
            DebugConfig::default()
                .with_enabled(self.debug || self.json_trace)
                .with_json_output(self.json_trace),
        );
        if let Some(path) = &self.puzzles {
            config = config.with_puzzles_path(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn take_value<'a>(
    args: &'a [String],
    i: &mut usize,
    flag: &str,
) -> Result<&'a str, Box<dyn std::error::Error>> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--debug" => config.debug = true,
            "--json-trace" => config.json_trace = true,
            "--check" => config.check = true,
            "--puzzles" => {
                config.puzzles = Some(PathBuf::from(take_value(args, &mut i, "--puzzles")?));
            }
            "--export" => {
                config.export = Some(PathBuf::from(take_value(args, &mut i, "--export")?));
            }
            "--guess" => config.guess = Some(take_value(args, &mut i, "--guess")?.to_string()),
            "--puzzle" => config.puzzle = Some(take_value(args, &mut i, "--puzzle")?.to_string()),
            "--seed" => {
                let value = take_value(args, &mut i, "--seed")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    if config.guess.is_some() && config.puzzle.is_none() {
        return Err("--guess requires --puzzle ID".into());
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("categuess {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Print debug flag status if any are enabled
    if config.debug || config.json_trace {
        eprintln!("\x1b[33mDebug flags enabled:\x1b[0m");
        if config.debug {
            eprintln!("  - Match tracing (--debug)");
        }
        if config.json_trace {
            eprintln!("  - JSON trace output (--json-trace)");
        }
        if let Some(seed) = config.seed {
            eprintln!("  - Seed: {seed}");
        }
        eprintln!();
    }

    let mut session = Session::from_config(&config.runtime_config())?;

    if config.check {
        let errors = session.collection().validate();
        if !errors.is_empty() {
            for error in &errors {
                eprintln!("\x1b[31m{error}\x1b[0m");
            }
            return Err(format!("{} invalid puzzle(s)", errors.len()).into());
        }
        println!("{} puzzles OK", session.collection().len());
    }

    if let Some(path) = &config.export {
        session.collection().save_to_file(path)?;
        println!(
            "Wrote {} puzzles to {}",
            session.collection().len(),
            path.display()
        );
    }

    if let (Some(guess), Some(id)) = (&config.guess, &config.puzzle) {
        let round = session.start_round_with(&PuzzleId::new(id.as_str()))?;
        let category = round.puzzle().category.clone();
        let explained = session.explainer().evaluate(guess, &category);
        if let Some(trace) = &explained.trace {
            session.explainer().emit(trace);
        }
        println!("{}", explained.verdict);
        return Ok(());
    }

    // Batch-only flags exit without starting the game
    if config.check || config.export.is_some() {
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCateguess\x1b[0m - Name the category five words share

\x1b[1mUSAGE:\x1b[0m
    categuess [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    --puzzles PATH       Load puzzles from PATH (.json, .mpk, .msgpack)
    --seed N             Seed puzzle selection
    --check              Validate the puzzle collection and exit
    --export PATH        Write the puzzle collection to PATH and exit
    --guess TEXT         Evaluate one guess and exit (needs --puzzle)
    --puzzle ID          Puzzle to evaluate --guess against

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --debug              Print a match trace for every guess
    --json-trace         Print match traces as JSON

\x1b[1mEXAMPLES:\x1b[0m
    categuess                                   Start a game
    categuess --puzzles pack.mpk --seed 7       Play a custom pack, reproducibly
    categuess --export pack.mpk                 Pack the built-in puzzles
    categuess --guess \"dog\" --puzzle dog-breeds --debug

\x1b[1mGAME COMMANDS:\x1b[0m
    :new                 Start a new puzzle
    :words, :reveal      Show the words again
    :giveup              Reveal the category
    :debug on|off        Toggle match diagnostics
    :help                Show commands
    :quit                Exit
    Ctrl+D               Exit
    Ctrl+C               Cancel current input

For more information, visit https://github.com/ndouglas/categuess"
    );
}
