use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, InvalidMoveReason, Result};

use super::types::{CELL_COUNT, GameOutcome, Mark, Move, Player, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// A 3x3 board stored row-major. Boards are values: `apply` returns a new board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells, checking the X/O count invariant.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Result<Self> {
        let board = Self { cells };
        let (x_count, o_count) = board.counts();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(GameError::InvalidPieceCounts { x_count, o_count });
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: Move) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    /// Returns `(x_count, o_count)`.
    pub fn counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Mark::X => (x + 1, o),
            Mark::O => (x, o + 1),
            Mark::Empty => (x, o),
        })
    }

    /// X moves whenever the counts are level.
    pub fn turn(&self) -> Player {
        let (x_count, o_count) = self.counts();
        if x_count > o_count {
            Player::O
        } else {
            Player::X
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        get_available_moves(&self.cells)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn apply(&self, position: Move, player: Player) -> Result<Board> {
        if position >= CELL_COUNT {
            return Err(GameError::InvalidMove {
                position,
                reason: InvalidMoveReason::OutOfRange,
            });
        }

        if !self.cells[position].is_empty() {
            return Err(GameError::InvalidMove {
                position,
                reason: InvalidMoveReason::Occupied,
            });
        }

        let expected = self.turn();
        if player != expected {
            return Err(GameError::InvalidMove {
                position,
                reason: InvalidMoveReason::OutOfTurn(expected),
            });
        }

        let mut next = *self;
        next.cells[position] = player.mark();
        Ok(next)
    }

    /// Places a mark without validation. The search walks positions with an
    /// explicit player to move, which need not match `turn()`.
    pub(crate) fn with_mark(&self, position: Move, player: Player) -> Board {
        let mut next = *self;
        next.cells[position] = player.mark();
        next
    }

    pub fn winner(&self) -> Option<Player> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(winner) = self.winner() {
            GameOutcome::Win(winner)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

pub fn get_available_moves(cells: &[Mark; CELL_COUNT]) -> Vec<Move> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses `"XX.OO...."`; `|`, `/` and whitespace between cells are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r' | '\t'))
            .collect();

        let symbols: Vec<char> = if symbols.len() == CELL_COUNT {
            symbols
        } else {
            symbols.into_iter().filter(|c| *c != ' ').collect()
        };

        if symbols.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardLength { got: symbols.len() });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (position, c) in symbols.into_iter().enumerate() {
            cells[position] = Mark::from_char(c, position)?;
        }

        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                f.write_str("/")?;
            }
            let c = match cell {
                Mark::X => 'X',
                Mark::O => 'O',
                Mark::Empty => '.',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty_and_in_progress() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.outcome(), GameOutcome::InProgress);
        assert_eq!(board.turn(), Player::X);
    }

    #[test]
    fn test_apply_excludes_cell_from_legal_moves() {
        let next = Board::new().apply(4, Player::X).unwrap();
        assert!(!next.legal_moves().contains(&4));
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.turn(), Player::O);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let original = Board::new();
        let _ = original.apply(0, Player::X).unwrap();
        assert_eq!(original, Board::new());
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let result = Board::new().apply(9, Player::X);
        assert_eq!(
            result,
            Err(GameError::InvalidMove {
                position: 9,
                reason: InvalidMoveReason::OutOfRange
            })
        );
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let board = board("X........");
        let result = board.apply(0, Player::O);
        assert!(matches!(
            result,
            Err(GameError::InvalidMove {
                position: 0,
                reason: InvalidMoveReason::Occupied
            })
        ));
    }

    #[test]
    fn test_apply_rejects_wrong_player() {
        let result = Board::new().apply(0, Player::O);
        assert!(matches!(
            result,
            Err(GameError::InvalidMove {
                reason: InvalidMoveReason::OutOfTurn(Player::X),
                ..
            })
        ));
    }

    #[test]
    fn test_count_invariant_holds_through_a_full_game() {
        let mut board = Board::new();
        for position in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            board = board.apply(position, board.turn()).unwrap();
            let (x, o) = board.counts();
            assert!(x == o || x == o + 1);
            assert!(!board.legal_moves().contains(&position));
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_drawn_board() {
        let board = board("XOX XOO OXX");
        assert_eq!(board.outcome(), GameOutcome::Draw);
        assert!(board.legal_moves().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        let board = board("XXX/OOX/XOO");
        assert!(board.is_full());
        assert_eq!(board.outcome(), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_winner_on_partial_board() {
        let board = board("OOO/XX./X..");
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.outcome(), GameOutcome::Win(Player::O));
        assert_eq!(board.winning_line().unwrap().cells, [0, 1, 2]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(GameError::InvalidBoardLength { got: 2 })
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(GameError::InvalidCellCharacter {
                character: 'Z',
                position: 2
            })
        );
        assert_eq!(
            "OO.......".parse::<Board>(),
            Err(GameError::InvalidPieceCounts {
                x_count: 0,
                o_count: 2
            })
        );
    }

    #[test]
    fn test_parse_accepts_spaces_as_empty_cells() {
        let board: Board = "X O      ".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::Empty));
        assert_eq!(board.get(2), Some(Mark::O));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let original = board("XX.OO....");
        assert_eq!(original.to_string(), "XX./OO./...");
        assert_eq!(original.to_string().parse::<Board>().unwrap(), original);
    }
}
