use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;

use lislab::bench::{random_sequence, run_comparison, CompareConfig};
use lislab::chart::render_chart;
use lislab::history::{AlgorithmKind, RunHistory, RunRecord};
use lislab::input::{parse_sequence, Sequence};
use lislab::{lis_dp, lis_patience};

#[derive(Parser)]
#[command(
    name = "lislab",
    about = "Visualize and race two longest-increasing-subsequence solvers"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the LIS of a sequence and report the elapsed time
    #[command(allow_negative_numbers = true)]
    Run {
        /// Sequence items, e.g. `10 9 2 5 3 7 101 18` or `pear apple fig`
        #[arg(required = true)]
        sequence: Vec<String>,

        /// Which solver to run
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Patience)]
        algorithm: AlgorithmArg,
    },

    /// Print a small random sequence in input syntax
    Random {
        /// Number of items; picked from 5..20 when omitted
        #[arg(long)]
        len: Option<usize>,
    },

    /// Time both solvers across increasing input sizes and chart the result
    Compare {
        /// Comma-separated input sizes
        #[arg(long, value_delimiter = ',', default_values_t = vec![100, 1_000, 10_000])]
        sizes: Vec<usize>,

        /// Largest size the quadratic solver still runs at
        #[arg(long, default_value_t = 2_000)]
        dp_cutoff: usize,

        /// Seed for a reproducible comparison
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Quadratic dynamic programming
    Dp,
    /// Patience sorting with binary search
    Patience,
    /// Run both and print both results
    Both,
}

impl AlgorithmArg {
    fn kinds(self) -> &'static [AlgorithmKind] {
        match self {
            AlgorithmArg::Dp => &[AlgorithmKind::Dp],
            AlgorithmArg::Patience => &[AlgorithmKind::Patience],
            AlgorithmArg::Both => &[AlgorithmKind::Dp, AlgorithmKind::Patience],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            sequence,
            algorithm,
        }) => cmd_run(&sequence.join(" "), algorithm),
        Some(Commands::Random { len }) => cmd_random(len),
        Some(Commands::Compare {
            sizes,
            dp_cutoff,
            seed,
        }) => cmd_compare(CompareConfig {
            sizes,
            dp_cutoff,
            seed,
        }),
        None => repl(),
    }
}

// ---------------------------------------------------------------------------
// Scripted subcommands
// ---------------------------------------------------------------------------

fn cmd_run(raw: &str, algorithm: AlgorithmArg) -> Result<()> {
    let sequence = parse_sequence(raw)?;
    for &kind in algorithm.kinds() {
        let outcome = execute(kind, &sequence);
        print_outcome(kind, &outcome);
    }
    Ok(())
}

fn cmd_random(len: Option<usize>) -> Result<()> {
    let mut rng = rand::thread_rng();
    // 5 to 19 items with values under 100, small enough to read at a glance.
    let len = len.unwrap_or_else(|| rng.gen_range(5..20));
    let values = random_sequence(&mut rng, len, 100);
    println!("{}", join_spaced(&values));
    Ok(())
}

fn cmd_compare(config: CompareConfig) -> Result<()> {
    println!("running benchmarks...");
    let report = run_comparison(&config, |n| println!("benchmarking n = {n}..."));
    print!("{}", render_chart(&report));
    println!();
    if report.dp_skipped() {
        println!(
            "done. DP is skipped for n > {} to keep the run from stalling.",
            report.dp_cutoff
        );
    } else {
        println!("done.");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

fn repl() -> Result<()> {
    let mut history = RunHistory::default();
    let mut current: Option<Sequence> = None;
    let mut input = io::stdin().lock();
    let mut line = String::new();

    println!("lislab: longest increasing subsequence lab");
    println!("type a sequence to run the optimized solver; :help lists commands");

    loop {
        print!("lis> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(rest) = trimmed.strip_prefix(':') else {
            repl_run(AlgorithmKind::Patience, trimmed, &mut current, &mut history);
            continue;
        };
        let (command, arg) = match rest.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (rest, ""),
        };

        match command {
            "q" | "quit" => break,
            "help" => print_help(),
            "history" => print_history(&history),
            "theory" => print_theory(),
            "random" => {
                let mut rng = rand::thread_rng();
                let len = rng.gen_range(5..20);
                let values = random_sequence(&mut rng, len, 100);
                println!("{}", join_spaced(&values));
                current = Some(Sequence::Numbers(values));
            }
            "compare" => cmd_compare(CompareConfig::default())?,
            "dp" => {
                repl_run(AlgorithmKind::Dp, arg, &mut current, &mut history);
            }
            "opt" | "patience" => {
                repl_run(AlgorithmKind::Patience, arg, &mut current, &mut history);
            }
            "both" => {
                if repl_run(AlgorithmKind::Dp, arg, &mut current, &mut history) {
                    repl_run(AlgorithmKind::Patience, "", &mut current, &mut history);
                }
            }
            _ => println!("unknown command :{command}; :help lists commands"),
        }
    }

    Ok(())
}

/// Runs one solver inside the session, remembering the input on success.
fn repl_run(
    kind: AlgorithmKind,
    arg: &str,
    current: &mut Option<Sequence>,
    history: &mut RunHistory,
) -> bool {
    let sequence = if arg.is_empty() {
        match current {
            Some(sequence) => sequence.clone(),
            None => {
                println!("no sequence yet; type one or use :random");
                return false;
            }
        }
    } else {
        match parse_sequence(arg) {
            Ok(sequence) => sequence,
            Err(err) => {
                println!("warning: {err}");
                return false;
            }
        }
    };

    *current = Some(sequence.clone());
    let outcome = execute(kind, &sequence);
    print_outcome(kind, &outcome);
    history.record(RunRecord::new(
        kind,
        &sequence.to_string(),
        &outcome.rendered,
        outcome.elapsed,
    ));
    true
}

// ---------------------------------------------------------------------------
// Shared run plumbing
// ---------------------------------------------------------------------------

struct RunOutcome {
    rendered: String,
    elapsed: Duration,
}

fn execute(kind: AlgorithmKind, sequence: &Sequence) -> RunOutcome {
    match sequence {
        Sequence::Numbers(values) => time_lis(kind, values),
        Sequence::Words(values) => time_lis(kind, values),
    }
}

fn time_lis<T: Ord + Clone + ToString>(kind: AlgorithmKind, values: &[T]) -> RunOutcome {
    let start = Instant::now();
    let result = match kind {
        AlgorithmKind::Dp => lis_dp(values),
        AlgorithmKind::Patience => lis_patience(values),
    };
    let elapsed = start.elapsed();

    let rendered = result
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    RunOutcome { rendered, elapsed }
}

fn print_outcome(kind: AlgorithmKind, outcome: &RunOutcome) {
    println!(
        "longest increasing subsequence ({}): {}",
        kind.label(),
        outcome.rendered
    );
    println!("time: {}", precise_ms(outcome.elapsed));
}

fn print_history(history: &RunHistory) {
    if history.is_empty() {
        println!("no runs yet.");
        return;
    }
    for record in history.iter() {
        println!("{}: input [{}]", record.algorithm.label(), record.input_summary);
        println!(
            "  result: {} ({})",
            record.result_summary,
            precise_ms(record.elapsed)
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  <sequence>        run the optimized solver on the sequence");
    println!("  :dp [sequence]    run the quadratic solver");
    println!("  :opt [sequence]   run the optimized solver");
    println!("  :both [sequence]  run both solvers on the same input");
    println!("  :random           generate a random sequence and keep it as input");
    println!("  :compare          time both solvers at n = 100, 1000, 10000");
    println!("  :history          show the last five runs");
    println!("  :theory           explain how the two solvers work");
    println!("  :quit             exit");
}

fn print_theory() {
    println!("quadratic dynamic programming, O(n²)");
    println!("  length[i] holds the longest increasing subsequence ending at i.");
    println!("  Every j < i with a smaller value offers length[j] + 1; the first");
    println!("  j reaching a new best becomes parent[i]. The answer ends where");
    println!("  length[i] peaks, and walking parents backwards spells it out.");
    println!();
    println!("patience sorting, O(n log n)");
    println!("  tails[k] holds the smallest value that can end an increasing");
    println!("  subsequence of length k + 1. Each value replaces the leftmost");
    println!("  tail not smaller than it (binary search) or opens a new slot.");
    println!("  The slot count is the answer length; predecessor links recorded");
    println!("  at placement time spell out one witness subsequence.");
}

/// Four fractional digits, the precision the run output shows.
fn precise_ms(elapsed: Duration) -> String {
    format!("{:.4} ms", elapsed.as_secs_f64() * 1_000.0)
}

fn join_spaced(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
