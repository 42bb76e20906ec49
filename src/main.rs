//! 8-Puzzle Solver
//!
//! Solves a 3x3 sliding-tile puzzle with greedy best-first search and
//! compares three heuristics: misplaced tiles, Manhattan distance and
//! Euclidean distance. With no arguments it solves the built-in start
//! position once per heuristic and prints the path and move count for each.

use clap::{Args, Parser, Subcommand};

use eight_puzzle::{board, compare, report, Board, HeuristicKind};
use board::{GOAL, INITIAL};

/// Solves the 8-puzzle with greedy best-first search.
#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board with one or all heuristics.
    Solve(SolveArgs),
    /// Print each heuristic's estimate for a board.
    Estimate(BoardArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// Start board as nine comma-separated tiles, 0 for the blank.
    #[arg(long, default_value = "1,2,3,4,0,5,6,7,8")]
    initial: Board,
    /// Goal board in the same format.
    #[arg(long, default_value = "1,2,3,4,5,6,7,8,0")]
    goal: Board,
}

#[derive(Args)]
struct SolveArgs {
    #[command(flatten)]
    boards: BoardArgs,
    /// Heuristic to use; all three run in order when omitted.
    #[arg(long, value_enum)]
    heuristic: Option<HeuristicKind>,
    /// Print every board along each solution path.
    #[arg(long)]
    trace: bool,
    /// Print search counters to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve(args)) => run_solve(&args),
        Some(Command::Estimate(args)) => run_estimate(&args),
        None => {
            // default: the built-in puzzle with every heuristic
            print!("{}", default_report());
        }
    }
}

/// Solves the built-in puzzle with h1, h2 and h3 and formats the results.
fn default_report() -> String {
    let results: Vec<_> = compare(&INITIAL, &GOAL, &HeuristicKind::ALL)
        .into_iter()
        .map(|(kind, result)| (kind, result.outcome))
        .collect();
    report::format_comparison(&results)
}

/// Solves the requested board and prints one block per heuristic.
fn run_solve(args: &SolveArgs) {
    let BoardArgs { initial, goal } = &args.boards;

    if !initial.can_reach(goal) {
        eprintln!("Warning: goal is unreachable from this start; the search will exhaust the frontier.");
    }

    let kinds = match args.heuristic {
        Some(kind) => vec![kind],
        None => HeuristicKind::ALL.to_vec(),
    };

    for (kind, result) in compare(initial, goal, &kinds) {
        print!("{}", report::format_outcome(kind, &result.outcome));

        if args.trace {
            if let Some(path) = result.outcome.path() {
                println!("{}", report::format_trace(initial, path));
            }
        }
        if args.stats {
            eprintln!("{}", report::format_stats(kind, &result.stats));
        }
    }
}

/// Prints the heuristic estimates for the requested board.
fn run_estimate(args: &BoardArgs) {
    print!("{}", report::format_estimates(&args.initial, &args.goal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_report_snapshot() {
        insta::assert_snapshot!(default_report(), @r"
        Solution using h1: RIGHT, DOWN, LEFT, LEFT, UP, RIGHT, DOWN, RIGHT, UP, LEFT, LEFT, DOWN, RIGHT, RIGHT
        Number of moves using h1: 14
        Solution using h2: LEFT, DOWN, RIGHT, UP, LEFT, DOWN, RIGHT, RIGHT, UP, LEFT, LEFT, DOWN, RIGHT, RIGHT, UP, LEFT, DOWN, LEFT, UP, RIGHT, RIGHT, DOWN, LEFT, UP, LEFT, DOWN, RIGHT, RIGHT
        Number of moves using h2: 28
        Solution using h3: DOWN, LEFT, UP, RIGHT, DOWN, RIGHT, UP, LEFT, LEFT, DOWN, RIGHT, RIGHT, UP, LEFT, DOWN, LEFT, UP, RIGHT, RIGHT, DOWN, LEFT, UP, LEFT, DOWN, RIGHT, RIGHT
        Number of moves using h3: 26
        ");
    }

    #[test]
    fn test_default_report_has_six_lines() {
        assert_eq!(default_report().lines().count(), 6);
    }

    #[test]
    fn test_parse_solve_arguments() {
        let cli = Cli::try_parse_from([
            "eight-puzzle",
            "solve",
            "--initial",
            "1,2,3,4,5,6,7,0,8",
            "--heuristic",
            "h2",
            "--stats",
        ])
        .unwrap();

        let Some(Command::Solve(args)) = cli.command else {
            panic!("expected solve subcommand");
        };
        assert_eq!(args.boards.initial, Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap());
        assert_eq!(args.boards.goal, GOAL);
        assert_eq!(args.heuristic, Some(HeuristicKind::H2));
        assert!(args.stats);
        assert!(!args.trace);
    }

    #[test]
    fn test_rejects_invalid_board() {
        let result = Cli::try_parse_from(["eight-puzzle", "estimate", "--goal", "1,1,2,3,4,5,6,7,8"]);
        assert!(result.is_err());
    }
}
