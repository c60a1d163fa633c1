use std::fmt;
use std::path::PathBuf;

use services::{SessionController, UserDirectory};
use storage::{FlatFileQuestionBank, FlatFileUserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod terminal;

use terminal::{StdinInput, TerminalSink};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--users <path>] [--questions <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --users users.txt");
    eprintln!("  --questions data/questions.txt");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_USERS_FILE, QUIZ_QUESTIONS_FILE");
}

struct Args {
    users_file: PathBuf,
    questions_file: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut users_file = std::env::var("QUIZ_USERS_FILE")
            .map_or_else(|_| PathBuf::from("users.txt"), PathBuf::from);
        let mut questions_file = std::env::var("QUIZ_QUESTIONS_FILE")
            .map_or_else(|_| PathBuf::from("data/questions.txt"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--users" => {
                    users_file = PathBuf::from(require_value(args, "--users")?);
                }
                "--questions" => {
                    questions_file = PathBuf::from(require_value(args, "--questions")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            users_file,
            questions_file,
        })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_ansi(true))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let user_store = FlatFileUserStore::new(&args.users_file);
    let question_bank = FlatFileQuestionBank::new(&args.questions_file);

    // A missing user store is normal on first run; the directory starts empty.
    let directory = UserDirectory::load_from(&user_store);

    let mut controller = SessionController::new(
        question_bank,
        user_store,
        directory,
        StdinInput,
        TerminalSink,
    );
    controller.run()?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
