use std::path::Path;
use std::process;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;

use MathQuizMini::core::expression::Difficulty;
use MathQuizMini::core::log::QuizLog;
use MathQuizMini::core::session;

/// Timed arithmetic quiz: answer as many generated expressions as you can
/// before the clock runs out. The greater the difficulty, the greater the
/// range of numbers.
#[derive(Parser)]
#[command(name = "mathquiz")]
#[command(version)]
#[command(after_help = "Example: mathquiz 60 2\n\
    This will start a game with a duration of 60 seconds and a difficulty of medium")]
struct Cli {
    /// The duration of the game in seconds. Must be greater than 9
    #[arg(allow_negative_numbers = true)]
    duration: f64,

    /// The difficulty of the game. Must be 1 (easy)/ 2 (medium)/ 3 (hard)
    difficulty: u8,
}

fn main() {
    // exit codes: 1 usage, 2 bad argument value, 3 log file failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
                let _ = err.print();
                process::exit(2);
            }
            _ => {
                let _ = err.print();
                process::exit(1);
            }
        },
    };

    let Some(difficulty) = Difficulty::from_level(cli.difficulty) else {
        eprintln!("Invalid input. Difficulty must be 1 (easy)/ 2 (medium)/ 3 (hard)");
        process::exit(2);
    };
    if !cli.duration.is_finite() || cli.duration <= 9.0 {
        eprintln!("Duration must be greater than 9 seconds");
        process::exit(2);
    }

    // all validation done before any thread starts
    let log = match QuizLog::create(Path::new("./log.txt")) {
        Ok(log) => log,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(3);
        }
    };

    let outcome = session::run(Duration::from_secs_f64(cli.duration), difficulty, log);

    println!("======================================");
    if outcome.drained() {
        println!("Good job!\nYou answered all the questions faster\nthan the game could generate them!");
    } else {
        println!("Time is up!");
    }
    println!("======================================");
    println!("Correct answers: {}", outcome.stats.correct);
    println!("Incorrect answers: {}", outcome.stats.incorrect);
    println!("Score: {}/{}", outcome.stats.correct, outcome.stats.total());
    println!("======================================");
}
