//! 分析报告

use othello_ai::{AgentMove, AiConfig, SearchStats};
use protocol::{BoardState, Move, Notation, Side};
use serde::Serialize;

/// 单个局面的分析结果
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub position: String,
    pub side: Side,
    /// 选中的走法，无子可下为 `None`
    pub best_move: Option<String>,
    pub flips: usize,
    pub value: Option<i32>,
    pub stats: SearchStats,
    pub elapsed_ms: u64,
    pub config: AiConfig,
}

impl AnalysisReport {
    pub fn new(state: &BoardState, result: &AgentMove<Move>, config: &AiConfig) -> Self {
        Self {
            position: Notation::to_string(state),
            side: state.current_turn,
            best_move: result.mv.as_ref().map(|m| m.position.to_string()),
            flips: result.mv.as_ref().map(Move::flip_count).unwrap_or(0),
            value: result.value,
            stats: result.stats,
            elapsed_ms: result.elapsed.as_millis() as u64,
            config: config.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.best_move {
            Some(mv) => writeln!(f, "{} plays {} (flips {})", self.side, mv, self.flips)?,
            None => writeln!(f, "{} has no legal move", self.side)?,
        }
        if let Some(value) = self.value {
            writeln!(f, "value: {}", value)?;
        }
        writeln!(f, "{}", self.stats)?;
        write!(f, "time: {} ms", self.elapsed_ms)
    }
}
