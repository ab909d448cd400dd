//! 错误类型定义

use thiserror::Error;

/// AI 引擎错误
#[derive(Error, Debug)]
pub enum AiError {
    /// 配置无效（深度为 0 或 alpha/beta 哨兵值不满足 min < max）
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// 根节点的子节点中找不到与搜索结果相等的估值
    #[error("Move resolution failed: no root child has utility {value}")]
    MoveResolutionFailed { value: i32 },

    /// 搜索被外部取消
    #[error("Search cancelled")]
    Cancelled,

    /// JSON 配置解析错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// AI 操作结果类型
pub type Result<T> = std::result::Result<T, AiError>;
