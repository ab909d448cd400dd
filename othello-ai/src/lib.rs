//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 走法生成约定（`GameRules`）及黑白棋实现
//! - Minimax + Alpha-Beta 搜索，边搜索边建树
//! - 搜索统计（节点数、剪枝数、叶子数、深度）
//! - Agent：重置计数、计时、按估值回查最佳走法
//! - 显式博弈树（用于调试和测试）

mod agent;
mod config;
mod error;
mod node;
mod rules;
mod search;
mod stats;
mod tree;

pub use agent::{Agent, AgentMove};
pub use config::{AiConfig, Difficulty};
pub use error::{AiError, Result};
pub use node::SearchNode;
pub use rules::{GameRules, OthelloRules};
pub use search::SearchEngine;
pub use stats::SearchStats;
pub use tree::ExplicitTree;
