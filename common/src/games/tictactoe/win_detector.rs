use super::types::{Mark, Move, Player, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[Move; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; 9]) -> Option<Player> {
    check_win_with_line(cells).map(|line| line.player)
}

pub fn check_win_with_line(cells: &[Mark; 9]) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let player = cells[line[0]].player()?;
        if cells[line[1]] == cells[line[0]] && cells[line[2]] == cells[line[0]] {
            Some(WinningLine::new(player, line))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Mark; 9] {
        let mut cells = [Mark::Empty; 9];
        for (i, c) in s.chars().enumerate() {
            cells[i] = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        cells
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut cells = [Mark::Empty; 9];
            for index in line {
                cells[index] = Mark::O;
            }
            assert_eq!(check_win(&cells), Some(Player::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_empty_cells_never_win() {
        assert_eq!(check_win(&[Mark::Empty; 9]), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_win(&cells_from("XXO......")), None);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let line = check_win_with_line(&cells_from("O.X.X.X.O")).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.cells, [2, 4, 6]);
    }
}
