mod terminal;

use clap::Parser;
use std::error::Error;
use std::io;
use std::path::Path;
use std::process;
use std::time::Duration;
use terminal::{discard, TerminalSink};
use tmrun::types::{DEFAULT_HALT_STATE, DEFAULT_INITIAL_STATE};
use tmrun::{render_frame, Config, TableLoader, TransitionTable, TuringMachine, TuringMachineError};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Animates a single-tape Turing machine driven by a CSV rule table.
///
/// Each table row reads `state,symbol,next state,action`, where the action is `<-`, `->`,
/// or a single symbol to write.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, disable_help_flag = true)]
#[clap(after_help = "EXAMPLES:
  tmrun -t increment.csv -i 111
  cat increment.csv | tmrun -t - -i 111 --quiet")]
struct Cli {
    /// Initial state
    #[clap(short = 's', long = "start", default_value = DEFAULT_INITIAL_STATE)]
    initial: String,

    /// Halting state
    #[clap(short = 'h', long = "halt", default_value = DEFAULT_HALT_STATE)]
    halt: String,

    /// Input tape contents
    #[clap(short, long, default_value = "")]
    input: String,

    /// Path to the CSV rule table, or `-` to read it from stdin
    #[clap(short, long, default_value = "table.csv")]
    table: String,

    /// Delay between frames, in milliseconds
    #[clap(short, long, default_value_t = 250)]
    delay: u64,

    /// Print frames one after another instead of redrawing the screen
    #[clap(long)]
    no_clear: bool,

    /// Skip the animation and print only the final frame
    #[clap(short, long)]
    quiet: bool,

    /// Print the final machine configuration as JSON after halting
    #[clap(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[clap(long, default_value = "warn")]
    log_level: String,

    /// Print help
    #[clap(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            initial_state: self.initial.clone(),
            halt_state: self.halt.clone(),
            input: self.input.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let table = load_table(&cli.table).unwrap_or_else(|e| fail(e));
    info!(path = %cli.table, rules = table.len(), "rule table loaded");

    let mut machine = TuringMachine::new(table, &cli.config());

    let result = if cli.quiet {
        machine.run(&mut discard)
    } else {
        let delay = Duration::from_millis(cli.delay);
        machine.run(&mut TerminalSink::new(io::stdout(), delay, !cli.no_clear))
    };

    if let Err(e) = result {
        fail(e);
    }

    if cli.quiet {
        print!("{}", render_frame(&machine.snapshot()));
    }

    if cli.json {
        println!("{}", serde_json::to_string(&machine.summary())?);
    }

    Ok(())
}

/// Loads the rule table from a file, or from stdin when `path` is `-`.
fn load_table(path: &str) -> Result<TransitionTable, TuringMachineError> {
    if path == "-" {
        TableLoader::load_table_from_reader(io::stdin().lock())
    } else {
        TableLoader::load_table(Path::new(path))
    }
}

/// Installs a stderr subscriber so log lines never interleave with the animation.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn fail(error: TuringMachineError) -> ! {
    eprintln!("Error: {}", error);
    process::exit(1);
}
