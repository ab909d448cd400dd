//! 错误类型定义

use thiserror::Error;

/// 黑白棋规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OthelloError {
    /// 无效的位置
    #[error("Invalid position: ({x}, {y})")]
    InvalidPosition { x: i8, y: i8 },

    /// 无效的走法（落子处已有棋子或无子可翻）
    #[error("Invalid move at {position}")]
    InvalidMove { position: String },

    /// 无效的局面字符串
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, OthelloError>;
