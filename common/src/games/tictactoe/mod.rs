mod board;
mod bot_controller;
mod game_state;
mod hint;
mod search;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{DEFAULT_SECOND_BEST_CHANCE, OpponentPolicy, calculate_minimax_move};
pub use game_state::Round;
pub use hint::{Hint, HintVerdict, hint, hint_details};
pub use search::{CacheStats, ScoredMove, SearchEngine, SearchOptions, SearchResult};
pub use settings::{RoundSettings, validate_second_best_chance};
pub use types::{
    CELL_COUNT, Difficulty, GameOutcome, Mark, Move, Player, RoundResult, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
