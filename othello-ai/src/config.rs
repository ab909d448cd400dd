//! AI 配置

use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：depth=2
    Easy,
    /// 中等：depth=4
    Medium,
    /// 困难：depth=6
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 最大搜索深度（层数，根节点为第 0 层）
    pub max_depth: u32,
    /// alpha 初始哨兵值，必须小于任何真实估值
    pub min_value: i32,
    /// beta 初始哨兵值，必须大于任何真实估值
    pub max_value: i32,
    /// 是否启用 alpha-beta 剪枝，关闭后退化为纯 minimax
    pub pruning: bool,
    /// 双方都无子可下时提前按叶子估值
    pub stop_at_game_over: bool,
    /// 走子方无子可下而对方可下时，按停着继续向下搜索
    pub allow_pass: bool,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let max_depth = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        };
        Self {
            max_depth,
            ..Self::base()
        }
    }

    /// 指定深度，其余取默认值
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::base()
        }
    }

    /// 从 JSON 字符串加载（缺省字段取默认值），并校验
    pub fn from_json(json: &str) -> Result<Self, AiError> {
        let config: AiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置，非法时直接拒绝，不做截断修正
    pub fn validate(&self) -> Result<(), AiError> {
        if self.max_depth == 0 {
            return Err(AiError::InvalidConfig {
                reason: "max_depth must be positive".to_string(),
            });
        }
        if self.min_value >= self.max_value {
            return Err(AiError::InvalidConfig {
                reason: format!(
                    "min_value ({}) must be less than max_value ({})",
                    self.min_value, self.max_value
                ),
            });
        }
        Ok(())
    }

    /// 校验哨兵值是否严格位于估值范围之外
    pub fn validate_bounds(&self, utility_bound: i32) -> Result<(), AiError> {
        if self.min_value >= -utility_bound || self.max_value <= utility_bound {
            return Err(AiError::InvalidConfig {
                reason: format!(
                    "sentinels [{}, {}] must lie outside utility range [-{}, {}]",
                    self.min_value, self.max_value, utility_bound, utility_bound
                ),
            });
        }
        Ok(())
    }

    fn base() -> Self {
        Self {
            max_depth: 4,
            min_value: i32::MIN,
            max_value: i32::MAX,
            pruning: true,
            stop_at_game_over: false,
            allow_pass: false,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}
