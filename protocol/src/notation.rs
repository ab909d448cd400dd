//! 局面文本表示法
//!
//! 格式：`<棋盘> <走子方>`
//!
//! 棋盘从第 8 行到第 1 行，行间以 `/` 分隔，每行 8 个字符：
//! `B` 黑子、`W` 白子、`.` 空格。走子方为 `b` 或 `w`。
//!
//! 示例（初始局面）：
//! `......../......../......../...BW.../...WB.../......../......../........ b`

use crate::board::{Board, BoardState};
use crate::constants::BOARD_SIZE;
use crate::error::OthelloError;
use crate::piece::{Position, Side};

/// 初始局面
pub const INITIAL_POSITION: &str =
    "......../......../......../...BW.../...WB.../......../......../........ b";

/// 局面表示法处理
pub struct Notation;

impl Notation {
    /// 解析局面字符串
    pub fn parse(s: &str) -> Result<BoardState, OthelloError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.is_empty() {
            return Err(OthelloError::InvalidNotation {
                reason: "Empty position string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        // 走子方（默认黑方）
        let current_turn = match parts.get(1) {
            Some(turn) => {
                let c = turn.chars().next().unwrap_or('b');
                Side::from_char(c).ok_or_else(|| OthelloError::InvalidNotation {
                    reason: format!("Invalid side to move '{}'", turn),
                })?
            }
            None => Side::Black,
        };

        Ok(BoardState::from_board(board, current_turn))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, OthelloError> {
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(OthelloError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        // 从上到下是 y=7 到 y=0
        for (row_idx, row) in rows.iter().enumerate() {
            let y = (BOARD_SIZE - 1 - row_idx) as u8;
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != BOARD_SIZE {
                return Err(OthelloError::InvalidNotation {
                    reason: format!("Row {} has {} squares", y + 1, cells.len()),
                });
            }

            for (x, c) in cells.into_iter().enumerate() {
                let square = match c {
                    '.' | '-' => None,
                    other => Some(Side::from_char(other).ok_or_else(|| {
                        OthelloError::InvalidNotation {
                            reason: format!("Invalid square character '{}'", other),
                        }
                    })?),
                };
                board.set(Position::new_unchecked(x as u8, y), square);
            }
        }

        Ok(board)
    }

    /// 生成局面字符串
    pub fn to_string(state: &BoardState) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .rev()
            .map(|y| {
                (0..BOARD_SIZE)
                    .map(|x| match state.board.get(Position::new_unchecked(x as u8, y as u8)) {
                        Some(side) => side.to_char(),
                        None => '.',
                    })
                    .collect()
            })
            .collect();

        format!(
            "{} {}",
            rows.join("/"),
            state.current_turn.to_char().to_ascii_lowercase()
        )
    }

    /// 带坐标的棋盘文本（用于终端显示）
    pub fn render(board: &Board) -> String {
        let mut out = String::from("  a b c d e f g h\n");
        for y in (0..BOARD_SIZE).rev() {
            out.push_str(&format!("{} ", y + 1));
            for x in 0..BOARD_SIZE {
                let c = match board.get(Position::new_unchecked(x as u8, y as u8)) {
                    Some(side) => side.to_char(),
                    None => '.',
                };
                out.push(c);
                if x + 1 < BOARD_SIZE {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initial() {
        let state = Notation::parse(INITIAL_POSITION).unwrap();
        assert_eq!(state, BoardState::initial());
    }

    #[test]
    fn test_to_string_initial() {
        assert_eq!(Notation::to_string(&BoardState::initial()), INITIAL_POSITION);
    }

    #[test]
    fn test_side_defaults_to_black() {
        let board_only = INITIAL_POSITION.split_whitespace().next().unwrap();
        let state = Notation::parse(board_only).unwrap();
        assert_eq!(state.current_turn, Side::Black);
    }

    #[test]
    fn test_parse_white_to_move() {
        let s = "W......./......../......../......../......../......../......../.......B w";
        let state = Notation::parse(s).unwrap();
        assert_eq!(state.current_turn, Side::White);
        assert_eq!(state.board.get(Position::new_unchecked(0, 7)), Some(Side::White));
        assert_eq!(state.board.get(Position::new_unchecked(7, 0)), Some(Side::Black));
    }

    #[test]
    fn test_invalid_notation() {
        assert!(Notation::parse("").is_err());
        assert!(Notation::parse("......../........ b").is_err());
        assert!(Notation::parse(
            "......../......../......../...WX.../...BW.../......../......../........ b"
        )
        .is_err());
        assert!(Notation::parse(
            "......../......../......../...WB.../...BW.../......../......../........ x"
        )
        .is_err());
        // 行长度错误
        assert!(Notation::parse(
            "......./......../......../...WB.../...BW.../......../......../........ b"
        )
        .is_err());
    }

    #[test]
    fn test_render() {
        let text = Notation::render(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "5 . . . B W . . .");
        assert_eq!(lines[5], "4 . . . W B . . .");
    }
}
