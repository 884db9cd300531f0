use common::games::tictactoe::{Board, Mark, Player};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const HUMAN_COLOR: &str = "\x1b[36m";
const OPPONENT_COLOR: &str = "\x1b[35m";

const ROW_SEPARATOR: &str = "---------";

/// Draws the board as three ` | `-joined rows. Empty cells show their index.
#[derive(Debug, Clone, Copy)]
pub struct BoardRenderer {
    human: Player,
    use_color: bool,
}

impl BoardRenderer {
    pub fn new(human: Player, use_color: bool) -> Self {
        Self { human, use_color }
    }

    pub fn render(&self, board: &Board) -> String {
        let winning_line = board.winning_line();

        let rows: Vec<String> = board
            .cells()
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, &mark)| {
                        let index = row * 3 + column;
                        let highlighted = winning_line.is_some_and(|line| line.contains(index));
                        self.render_cell(index, mark, highlighted)
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();

        rows.join(&format!("\n{}\n", ROW_SEPARATOR))
    }

    fn render_cell(&self, index: usize, mark: Mark, highlighted: bool) -> String {
        let Some(player) = mark.player() else {
            return if self.use_color {
                format!("{}{}{}", DIM, index, RESET)
            } else {
                index.to_string()
            };
        };

        if !self.use_color {
            return player.to_string();
        }

        let color = if player == self.human {
            HUMAN_COLOR
        } else {
            OPPONENT_COLOR
        };
        let weight = if highlighted { BOLD } else { "" };
        format!("{}{}{}{}", weight, color, player, RESET)
    }
}
