use std::collections::HashMap;

use super::board::Board;
use super::types::{GameOutcome, Move, Player};

/// Minimax value of a position. `best_move` is `None` on terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Move,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Scale terminal scores by `1 + empty cells` so earlier wins rank higher.
    pub prefer_faster_wins: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Exhaustive minimax over the 3x3 game tree.
///
/// Results are memoized per `(board, player to move)` from the mover's point of
/// view, so the same entry serves either maximizing player. The engine performs no
/// I/O and holds no state besides the cache.
#[derive(Debug)]
pub struct SearchEngine {
    options: SearchOptions,
    cache: Option<HashMap<(Board, Player), SearchResult>>,
    hits: u64,
    misses: u64,
}

impl SearchEngine {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            cache: Some(HashMap::new()),
            hits: 0,
            misses: 0,
        }
    }

    /// An engine that recomputes every node.
    pub fn uncached(options: SearchOptions) -> Self {
        Self {
            options,
            cache: None,
            hits: 0,
            misses: 0,
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn evaluate(&mut self, board: &Board, to_move: Player, maximizing: Player) -> SearchResult {
        let result = self.negamax(*board, to_move);
        if maximizing == to_move {
            result
        } else {
            SearchResult {
                best_move: result.best_move,
                score: -result.score,
            }
        }
    }

    /// Scores each legal move for `player` and sorts best first.
    ///
    /// The sort is stable, so equal scores keep ascending cell order and the head of
    /// the list is the move the engine itself would pick.
    pub fn rank_moves(&mut self, board: &Board, player: Player) -> Vec<ScoredMove> {
        let mut ranked: Vec<ScoredMove> = board
            .legal_moves()
            .into_iter()
            .map(|position| {
                let child = board.with_mark(position, player);
                let result = self.evaluate(&child, player.opponent(), player);
                ScoredMove {
                    position,
                    score: result.score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        self.hits = 0;
        self.misses = 0;
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.as_ref().map_or(0, HashMap::len),
            hits: self.hits,
            misses: self.misses,
        }
    }

    fn negamax(&mut self, board: Board, to_move: Player) -> SearchResult {
        if let Some(cache) = &self.cache
            && let Some(&cached) = cache.get(&(board, to_move))
        {
            self.hits += 1;
            return cached;
        }
        self.misses += 1;

        let result = match board.outcome() {
            GameOutcome::Win(winner) => SearchResult {
                best_move: None,
                score: self.terminal_score(&board, winner, to_move),
            },
            GameOutcome::Draw => SearchResult {
                best_move: None,
                score: 0,
            },
            GameOutcome::InProgress => {
                let mut best = SearchResult {
                    best_move: None,
                    score: i32::MIN,
                };

                for position in board.legal_moves() {
                    let child = board.with_mark(position, to_move);
                    let score = -self.negamax(child, to_move.opponent()).score;
                    if best.best_move.is_none() || score > best.score {
                        best = SearchResult {
                            best_move: Some(position),
                            score,
                        };
                    }
                }

                best
            }
        };

        if let Some(cache) = self.cache.as_mut() {
            cache.insert((board, to_move), result);
        }

        result
    }

    fn terminal_score(&self, board: &Board, winner: Player, to_move: Player) -> i32 {
        let magnitude = if self.options.prefer_faster_wins {
            1 + board.empty_count() as i32
        } else {
            1
        };

        if winner == to_move { magnitude } else { -magnitude }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}
