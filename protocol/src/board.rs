//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use crate::piece::{Position, Side};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 y * 8 + x，使用 Vec 以支持 serde
    squares: Vec<Option<Side>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; SQUARE_COUNT],
        }
    }

    /// 创建初始棋盘（中央四子：d4/e5 白，d5/e4 黑）
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.set(Position::new_unchecked(3, 3), Some(Side::White));
        board.set(Position::new_unchecked(4, 4), Some(Side::White));
        board.set(Position::new_unchecked(3, 4), Some(Side::Black));
        board.set(Position::new_unchecked(4, 3), Some(Side::Black));
        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Side> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, pos: Position, side: Option<Side>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = side;
        }
    }

    /// 指定阵营的棋子数
    pub fn count(&self, side: Side) -> u32 {
        self.squares.iter().filter(|s| **s == Some(side)).count() as u32
    }

    /// 空格数
    pub fn empty_count(&self) -> u32 {
        self.squares.iter().filter(|s| s.is_none()).count() as u32
    }

    /// 棋盘是否已下满
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    /// 按行优先顺序遍历所有格子（a1, b1, ..., h8）
    pub fn squares(&self) -> impl Iterator<Item = (Position, Option<Side>)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).map(move |index| {
            let pos = Position::new_unchecked((index % BOARD_SIZE) as u8, (index / BOARD_SIZE) as u8);
            (pos, self.squares[index])
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// 完整的棋盘状态（包含走子方）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
}

impl BoardState {
    /// 创建初始状态（黑方先行）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Side::Black,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Side) -> Self {
        Self { board, current_turn }
    }

    /// 白子数
    pub fn white_count(&self) -> u32 {
        self.board.count(Side::White)
    }

    /// 黑子数
    pub fn black_count(&self) -> u32 {
        self.board.count(Side::Black)
    }

    /// 指定阵营的棋子数
    pub fn count(&self, side: Side) -> u32 {
        self.board.count(side)
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}
