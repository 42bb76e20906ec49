//! Greedy best-first search over board states.
//!
//! The frontier always yields the entry with the lowest heuristic score,
//! ignoring the cost of the path so far. Equal scores come out in insertion
//! order. States are marked visited when popped; a state already queued
//! twice may therefore be expanded twice, and a visited state is never
//! reconsidered. The result can be far from the shortest path.
//!
//! Key data layout:
//! - Paths are parent links into a per-search arena instead of per-entry
//!   vectors, so pushing a successor is O(1)
//! - FxHashSet for the visited set

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::heuristics::Heuristic;
use crate::moves::{successors, Move};

/// Final state of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was popped; moves are listed in the order applied.
    Found(Vec<Move>),
    /// The frontier emptied without reaching the goal.
    NotFound,
}

impl Outcome {
    /// Returns the path if one was found.
    pub fn path(&self) -> Option<&[Move]> {
        match self {
            Outcome::Found(path) => Some(path.as_slice()),
            Outcome::NotFound => None,
        }
    }

    /// Returns the number of moves if a path was found.
    pub fn move_count(&self) -> Option<usize> {
        self.path().map(<[Move]>::len)
    }
}

/// Work counters collected during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries popped and expanded (the goal pop is not counted).
    pub expanded: usize,
    /// Successors pushed onto the frontier.
    pub generated: usize,
    /// Largest frontier size seen after a push.
    pub frontier_peak: usize,
}

/// Outcome plus counters for one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// One step of a partial path: the move taken and the step before it.
#[derive(Clone, Copy)]
struct PathStep {
    parent: Option<usize>,
    direction: Move,
}

/// A queued board with its priority.
struct FrontierEntry {
    score: f64,
    /// Monotonic insertion counter; breaks score ties first-in first-out.
    order: u64,
    board: Board,
    /// Last step of the path leading here, `None` for the start board.
    tail: Option<usize>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    /// Reversed so the max-heap `BinaryHeap` pops the lowest score, then the
    /// oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Per-run search state. Nothing here outlives a single [`gbfs`] call.
struct Search<'h, H: Heuristic + ?Sized> {
    goal: Board,
    heuristic: &'h H,
    frontier: BinaryHeap<FrontierEntry>,
    visited: FxHashSet<Board>,
    steps: Vec<PathStep>,
    next_order: u64,
    stats: SearchStats,
}

impl<'h, H: Heuristic + ?Sized> Search<'h, H> {
    fn new(goal: &Board, heuristic: &'h H) -> Self {
        Self {
            goal: *goal,
            heuristic,
            frontier: BinaryHeap::new(),
            visited: FxHashSet::default(),
            steps: Vec::new(),
            next_order: 0,
            stats: SearchStats::default(),
        }
    }

    fn push(&mut self, board: Board, tail: Option<usize>) {
        let score = self.heuristic.estimate(&board, &self.goal);
        self.frontier.push(FrontierEntry {
            score,
            order: self.next_order,
            board,
            tail,
        });
        self.next_order += 1;
    }

    /// Walks parent links back from `tail` and returns moves in applied order.
    fn path_to(&self, mut tail: Option<usize>) -> Vec<Move> {
        let mut path = Vec::new();
        while let Some(index) = tail {
            let step = self.steps[index];
            path.push(step.direction);
            tail = step.parent;
        }
        path.reverse();
        path
    }

    fn run(mut self, initial: &Board) -> SearchResult {
        self.push(*initial, None);
        self.stats.frontier_peak = self.frontier.len();

        while let Some(entry) = self.frontier.pop() {
            if entry.board == self.goal {
                return SearchResult {
                    outcome: Outcome::Found(self.path_to(entry.tail)),
                    stats: self.stats,
                };
            }

            self.visited.insert(entry.board);
            self.stats.expanded += 1;

            for (direction, next) in successors(&entry.board) {
                if self.visited.contains(&next) {
                    continue;
                }

                self.steps.push(PathStep {
                    parent: entry.tail,
                    direction,
                });
                let tail = Some(self.steps.len() - 1);
                self.push(next, tail);

                self.stats.generated += 1;
                self.stats.frontier_peak = self.stats.frontier_peak.max(self.frontier.len());
            }
        }

        SearchResult {
            outcome: Outcome::NotFound,
            stats: self.stats,
        }
    }
}

/// Runs greedy best-first search from `initial` toward `goal`.
///
/// Deterministic: identical inputs always give an identical path. An
/// exhausted frontier is reported as [`Outcome::NotFound`], not as an error.
pub fn gbfs<H: Heuristic + ?Sized>(initial: &Board, goal: &Board, heuristic: &H) -> SearchResult {
    Search::new(goal, heuristic).run(initial)
}
