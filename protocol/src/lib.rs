//! 黑白棋（Othello）共享协议库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 走法生成和规则判定（翻子、停着、终局）
//! - 局面文本表示法

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod piece;

pub use board::{Board, BoardState};
pub use constants::*;
pub use error::{OthelloError, Result};
pub use moves::{Move, MoveGenerator};
pub use notation::{Notation, INITIAL_POSITION};
pub use piece::{Position, Side};
