use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::core::clock::SessionClock;
use crate::core::expression::{self, Difficulty, Expression};
use crate::core::log::QuizLog;
use crate::core::queue::{self, SafeQueue};

/// How often the producer enqueues a fresh expression
pub const PRODUCER_CADENCE: Duration = Duration::from_secs(3);

/// Sleep granularity between producer ticks, so the loop yields CPU but
/// still notices the stop signal and deadline promptly
const POLL_SLICE: Duration = Duration::from_millis(25);

const RED: &str = "\u{1b}[0;31m";
const GREEN: &str = "\u{1b}[0;32m";
const RESET: &str = "\u{1b}[0;0m";

/// Running score, mutated only by the consumer loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of scored answers
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }
}

/// Cooperative stop flag shared by both loops. Once set, never cleared.
pub struct StopSignal(AtomicBool);

impl StopSignal {
    pub fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper
pub type SafeStop = Arc<StopSignal>;

/// Final result of a session: the score plus how many expressions were
/// still queued when both loops finished
#[derive(Debug)]
pub struct SessionOutcome {
    pub stats: SessionStats,
    pub remaining: usize,
}

impl SessionOutcome {
    /// True when the consumer answered everything before the deadline
    pub fn drained(&self) -> bool {
        self.remaining == 0
    }
}

/// Producer loop: enqueue one fresh expression every `cadence` until the
/// stop signal is set or the deadline passes. Each enqueue is recorded in
/// the quiz log with its elapsed session time. Never sets the stop signal
/// itself.
pub fn run_producer(
    queue: &SafeQueue<Expression>,
    clock: SessionClock,
    stop: &StopSignal,
    log: &mut QuizLog,
    difficulty: Difficulty,
    cadence: Duration,
) {
    let mut next_tick = cadence;
    while !stop.is_set() && !clock.expired() {
        let elapsed = clock.elapsed();
        if elapsed >= next_tick {
            // mid-session log write failures are non-fatal
            let _ = log.record_enqueue(elapsed.as_secs_f64());
            queue.lock().unwrap().enqueue(expression::generate(difficulty));
            next_tick += cadence;
            continue;
        }
        let wait = POLL_SLICE.min(next_tick - elapsed).min(clock.remaining());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}

/// Consumer loop: present the front expression, read one answer line, and
/// score it. A correct answer dequeues the expression; a wrong one leaves
/// it at the front so it is re-presented. An empty queue sets the stop
/// signal (drained). Runs until the stop signal, the deadline, or the end
/// of the input stream.
pub fn run_consumer<R: BufRead, W: Write>(
    queue: &SafeQueue<Expression>,
    clock: SessionClock,
    stop: &StopSignal,
    mut input: R,
    mut output: W,
) -> SessionStats {
    let mut stats = SessionStats::new();
    while !stop.is_set() && !clock.expired() {
        // copy the front out so the lock is not held across the blocking read
        let front = queue.lock().unwrap().peek_front().copied();
        let Some(top_expression) = front else {
            stop.set();
            break;
        };
        let _ = write!(output, "{}: ", top_expression);
        let _ = output.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            // input stream closed: stop answering, let the producer run out the clock
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let Ok(answer) = line.trim().parse::<i64>() else {
            let _ = writeln!(output, "Invalid input. Enter a number");
            continue;
        };
        if answer != top_expression.evaluate() {
            let _ = writeln!(output, "{}Incorrect{}", RED, RESET);
            stats.incorrect += 1;
            continue;
        }
        let _ = writeln!(output, "{}Correct answer{}", GREEN, RESET);
        stats.correct += 1;
        let _ = queue.lock().unwrap().dequeue();
    }
    stats
}

/// Run a full session with explicit input/output streams.
///
/// Seeds the queue with one expression, starts the clock, spawns the
/// producer and consumer threads over shared handles, and joins both
/// before reading the final queue size.
pub fn run_session<R, W>(
    duration: Duration,
    difficulty: Difficulty,
    mut log: QuizLog,
    input: R,
    output: W,
) -> SessionOutcome
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let expression_queue: SafeQueue<Expression> = queue::shared();
    expression_queue.lock().unwrap().enqueue(expression::generate(difficulty));

    let clock = SessionClock::start(duration);
    let stop: SafeStop = Arc::new(StopSignal::new());

    let producer = {
        let queue = Arc::clone(&expression_queue);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            run_producer(&queue, clock, &stop, &mut log, difficulty, PRODUCER_CADENCE);
        })
    };
    let consumer = {
        let queue = Arc::clone(&expression_queue);
        let stop = Arc::clone(&stop);
        thread::spawn(move || run_consumer(&queue, clock, &stop, input, output))
    };

    // Wait for both loops to complete
    producer.join().unwrap();
    let stats = consumer.join().unwrap();

    let remaining = expression_queue.lock().unwrap().len();
    SessionOutcome { stats, remaining }
}

/// Run a full session against stdin/stdout
pub fn run(duration: Duration, difficulty: Difficulty, log: QuizLog) -> SessionOutcome {
    run_session(duration, difficulty, log, BufReader::new(io::stdin()), io::stdout())
}
