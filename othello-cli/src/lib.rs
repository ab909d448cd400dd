//! 黑白棋命令行
//!
//! 包含:
//! - 命令行参数与配置加载
//! - 玩家（minimax Agent、随机走子）
//! - 对局控制
//! - 分析报告

pub mod cli;
pub mod game;
pub mod player;
pub mod report;

pub use cli::{Cli, Command, DifficultyArg, OpponentArg};
pub use game::{GameRunner, GameSummary, MoveRecord};
pub use player::{AgentPlayer, Player, RandomPlayer};
pub use report::AnalysisReport;
