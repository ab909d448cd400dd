//! 走法生成和验证

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, BoardState};
use crate::constants::DIRECTIONS;
use crate::error::OthelloError;
use crate::piece::{Position, Side};

/// 走法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 落子位置
    pub position: Position,
    /// 落子方
    pub side: Side,
    /// 被翻转的棋子
    pub flips: Vec<Position>,
}

impl Move {
    /// 创建新走法
    pub fn new(position: Position, side: Side, flips: Vec<Position>) -> Self {
        Self {
            position,
            side,
            flips,
        }
    }

    /// 翻子数
    pub fn flip_count(&self) -> usize {
        self.flips.len()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定阵营的所有合法走法
    ///
    /// 按行优先顺序（a1, b1, ..., h8）返回，该顺序决定了同分走法的取舍。
    pub fn generate_legal(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(16);

        for (pos, square) in board.squares() {
            if square.is_some() {
                continue;
            }
            let flips = Self::flips_for(board, pos, side);
            if !flips.is_empty() {
                moves.push(Move::new(pos, side, flips));
            }
        }

        moves
    }

    /// 计算在指定位置落子会翻转的棋子（落子处必须为空）
    pub fn flips_for(board: &Board, pos: Position, side: Side) -> Vec<Position> {
        let mut flips = Vec::new();
        if board.get(pos).is_some() {
            return flips;
        }

        for (dx, dy) in DIRECTIONS {
            let mut line = Vec::new();
            let mut current = pos;

            while let Some(next) = current.offset(dx, dy) {
                match board.get(next) {
                    Some(s) if s == side.opponent() => {
                        line.push(next);
                        current = next;
                    }
                    Some(_) => {
                        // 己方棋子封口，夹住的对方棋子全部翻转
                        flips.append(&mut line);
                        break;
                    }
                    None => break,
                }
            }
        }

        flips
    }

    /// 指定阵营是否无子可下
    pub fn is_terminal(board: &Board, side: Side) -> bool {
        !board
            .squares()
            .any(|(pos, square)| square.is_none() && Self::has_flips(board, pos, side))
    }

    /// 双方都无子可下，对局结束
    pub fn is_game_over(board: &Board) -> bool {
        Self::is_terminal(board, Side::Black) && Self::is_terminal(board, Side::White)
    }

    /// 执行走法，返回新状态（不修改原状态）
    pub fn apply(state: &BoardState, mv: &Move) -> BoardState {
        let mut board = state.board.clone();
        board.set(mv.position, Some(mv.side));
        for pos in &mv.flips {
            board.set(*pos, Some(mv.side));
        }
        BoardState::from_board(board, mv.side.opponent())
    }

    /// 停着：走子方无子可下时把回合交给对方
    pub fn pass(state: &BoardState) -> BoardState {
        let mut next = state.clone();
        next.switch_turn();
        next
    }

    /// 查找当前走子方在指定位置的合法走法
    pub fn find_move(state: &BoardState, pos: Position) -> Result<Move, OthelloError> {
        let flips = Self::flips_for(&state.board, pos, state.current_turn);
        if flips.is_empty() {
            trace!("{} 无法在 {} 落子", state.current_turn, pos);
            return Err(OthelloError::InvalidMove {
                position: pos.to_string(),
            });
        }
        Ok(Move::new(pos, state.current_turn, flips))
    }

    /// 是否至少能翻转一个棋子（不收集翻转列表）
    fn has_flips(board: &Board, pos: Position, side: Side) -> bool {
        DIRECTIONS.iter().any(|&(dx, dy)| {
            let mut current = pos;
            let mut seen_opponent = false;
            while let Some(next) = current.offset(dx, dy) {
                match board.get(next) {
                    Some(s) if s == side.opponent() => {
                        seen_opponent = true;
                        current = next;
                    }
                    Some(_) => return seen_opponent,
                    None => return false,
                }
            }
            false
        })
    }
}
