//! 命令行参数

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use othello_ai::{AiConfig, Difficulty};

/// 黑白棋 minimax 引擎
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Minimax / alpha-beta Othello engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Command {
    /// 分析一个局面，给出 AI 选择的走法和搜索统计
    Analyze {
        /// 局面字符串，缺省为初始局面
        position: Option<String>,

        #[command(flatten)]
        search: SearchArgs,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 从初始局面下完一整局，AI 执黑
    Play {
        #[command(flatten)]
        search: SearchArgs,

        /// 白方对手
        #[arg(long, value_enum, default_value = "random")]
        opponent: OpponentArg,

        /// 随机对手的种子
        #[arg(long, default_value = "0")]
        seed: u64,

        /// 以 JSON 输出对局摘要
        #[arg(long)]
        json: bool,
    },
}

/// 搜索参数
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 难度预设
    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// 最大搜索深度（覆盖配置文件和难度）
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// 关闭 alpha-beta 剪枝
    #[arg(long)]
    pub no_pruning: bool,

    /// 双方都无子可下时提前估值
    #[arg(long)]
    pub stop_at_game_over: bool,

    /// 搜索中允许停着
    #[arg(long)]
    pub allow_pass: bool,
}

impl SearchArgs {
    /// 合并配置：配置文件 < 难度 < 单项参数
    pub fn to_config(&self) -> Result<AiConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AiConfig::default(),
        };

        if let Some(difficulty) = self.difficulty {
            config.max_depth = AiConfig::from_difficulty(difficulty.into()).max_depth;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if self.no_pruning {
            config.pruning = false;
        }
        config.stop_at_game_over |= self.stop_at_game_over;
        config.allow_pass |= self.allow_pass;

        config.validate()?;
        Ok(config)
    }
}

/// 难度
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// 对手类型
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentArg {
    /// 随机走子
    Random,
    /// 同配置的 minimax Agent
    Agent,
}

/// 读取 JSON 配置文件
pub fn load_config(path: &Path) -> Result<AiConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = AiConfig::from_json(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
