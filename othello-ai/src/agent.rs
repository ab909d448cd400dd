//! AI Agent
//!
//! 包装搜索引擎：判定无子可下、重置统计、计时，
//! 并在根节点的子节点中按搜索估值回查要走的棋。

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use protocol::{BoardState, Move, Side};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AiConfig;
use crate::error::AiError;
use crate::node::SearchNode;
use crate::rules::{GameRules, OthelloRules};
use crate::search::SearchEngine;
use crate::stats::SearchStats;

/// Agent 的一次决策结果
#[derive(Debug, Clone, Serialize)]
pub struct AgentMove<M> {
    /// 选中的走法，无子可下时为 `None`
    pub mv: Option<M>,
    /// 根节点估值，未搜索时为 `None`
    pub value: Option<i32>,
    /// 本次搜索的统计
    pub stats: SearchStats,
    /// 搜索耗时
    pub elapsed: Duration,
}

impl<M> AgentMove<M> {
    /// 无子可下
    pub fn none() -> Self {
        Self {
            mv: None,
            value: None,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.mv.is_none()
    }
}

/// AI Agent
pub struct Agent<R: GameRules> {
    name: String,
    side: Side,
    rules: R,
    config: AiConfig,
    stats: SearchStats,
    cancel: Option<Arc<AtomicBool>>,
}

impl Agent<OthelloRules> {
    /// 创建黑白棋 Agent
    pub fn othello(side: Side, config: AiConfig) -> Self {
        Self::new(format!("minimax-{}", side), side, OthelloRules, config)
    }

    /// 为当前走子方选择走法
    pub fn play(&mut self, state: &BoardState) -> Result<AgentMove<Move>, AiError> {
        if state.current_turn != self.side {
            warn!("{} 不是 {} 的回合", self.name, state.current_turn);
        }
        self.choose_move(state)
    }
}

impl<R: GameRules> Agent<R> {
    pub fn new(name: impl Into<String>, side: Side, rules: R, config: AiConfig) -> Self {
        Self {
            name: name.into(),
            side,
            rules,
            config,
            stats: SearchStats::default(),
            cancel: None,
        }
    }

    /// 设置取消标志，置位后进行中的搜索尽快结束并返回 `AiError::Cancelled`
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 极大方
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// 最近一次搜索的统计
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// 选择最佳走法
    pub fn choose_move(&mut self, root: &R::State) -> Result<AgentMove<R::Move>, AiError> {
        self.config.validate()?;
        if let Some(bound) = self.rules.utility_bound() {
            self.config.validate_bounds(bound)?;
        }

        if self.rules.is_terminal(root, self.side) {
            debug!("{} 无子可下", self.name);
            return Ok(AgentMove::none());
        }

        self.stats.reset();
        let mut tree = SearchNode::root(root.clone());

        let started = Instant::now();
        let (value, cancelled) = {
            let mut engine = SearchEngine::new(&self.rules, &self.config, self.side, &mut self.stats);
            if let Some(flag) = &self.cancel {
                engine = engine.with_cancel_flag(flag);
            }
            let value = engine.search_root(&mut tree);
            (value, engine.was_cancelled())
        };
        let elapsed = started.elapsed();

        if cancelled {
            warn!("{} 搜索被取消，耗时 {:?}", self.name, elapsed);
            return Err(AiError::Cancelled);
        }

        info!(
            agent = %self.name,
            elapsed_ms = elapsed.as_millis() as u64,
            "搜索完成，估值 {}，{}",
            value,
            self.stats
        );

        let mv = resolve_move(&tree, value)?;
        Ok(AgentMove {
            mv: Some(mv),
            value: Some(value),
            stats: self.stats,
            elapsed,
        })
    }
}

/// 在根节点的子节点中找第一个估值等于 `value` 的，返回产生它的走法
fn resolve_move<S, M: Clone>(root: &SearchNode<S, M>, value: i32) -> Result<M, AiError> {
    root.first_child_with_utility(value)
        .and_then(|child| child.leading_move().cloned())
        .ok_or(AiError::MoveResolutionFailed { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ExplicitTree;
    use protocol::{MoveGenerator, Notation, Position};

    fn textbook_agent(config: AiConfig) -> (Agent<ExplicitTree>, usize) {
        let tree = ExplicitTree::uniform(2, &[3, 5, 2, 9, 0, 1, 7, 4]).unwrap();
        let root = tree.root();
        (Agent::new("textbook", Side::White, tree, config), root)
    }

    #[test]
    fn test_choose_textbook_move() {
        let (mut agent, root) = textbook_agent(AiConfig::with_depth(3));
        let first_child = agent.rules().available_moves(&root, Side::White)[0];

        let result = agent.choose_move(&root).unwrap();
        assert_eq!(result.mv, Some(first_child));
        assert_eq!(result.value, Some(5));
        assert_eq!(result.stats.pruned, 2);
        assert_eq!(*agent.stats(), result.stats);
    }

    #[test]
    fn test_terminal_root_returns_none() {
        let tree = ExplicitTree::single(3);
        let root = tree.root();
        let mut agent = Agent::new("stuck", Side::White, tree, AiConfig::with_depth(3));

        let result = agent.choose_move(&root).unwrap();
        assert!(result.is_pass());
        assert_eq!(result.value, None);
        assert_eq!(result.stats, SearchStats::default());
        assert_eq!(*agent.stats(), SearchStats::default());
    }

    #[test]
    fn test_terminal_root_leaves_previous_stats() {
        let (mut agent, root) = textbook_agent(AiConfig::with_depth(3));
        agent.choose_move(&root).unwrap();
        let before = *agent.stats();

        // 换成无子可下的局面，统计既不清零也不增加
        let leaf = agent.rules().available_moves(&root, Side::White)[0];
        let leaf = agent.rules().available_moves(&leaf, Side::White)[0];
        let leaf = agent.rules().available_moves(&leaf, Side::White)[0];
        let result = agent.choose_move(&leaf).unwrap();
        assert!(result.is_pass());
        assert_eq!(*agent.stats(), before);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (mut agent, root) = textbook_agent(AiConfig::with_depth(0));
        assert!(matches!(
            agent.choose_move(&root),
            Err(AiError::InvalidConfig { .. })
        ));

        let config = AiConfig {
            min_value: 10,
            max_value: -10,
            ..AiConfig::with_depth(3)
        };
        let (mut agent, root) = textbook_agent(config);
        assert!(matches!(
            agent.choose_move(&root),
            Err(AiError::InvalidConfig { .. })
        ));
        assert_eq!(agent.stats().nodes_examined, 0);
    }

    #[test]
    fn test_othello_sentinels_must_exceed_disc_range() {
        let config = AiConfig {
            min_value: -10,
            max_value: 10,
            ..AiConfig::with_depth(2)
        };
        let mut agent = Agent::othello(Side::Black, config);
        assert!(matches!(
            agent.play(&BoardState::initial()),
            Err(AiError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_cancelled_search() {
        let flag = Arc::new(AtomicBool::new(true));
        let (agent, root) = textbook_agent(AiConfig::with_depth(3));
        let mut agent = agent.with_cancel_flag(flag);
        assert!(matches!(agent.choose_move(&root), Err(AiError::Cancelled)));
    }

    #[test]
    fn test_resolve_move_mismatch() {
        let mut root: SearchNode<u8, char> = SearchNode::root(0);
        let mut child = SearchNode::child(1, Some('a'));
        child.set_utility(4);
        root.add_child(child);

        assert_eq!(resolve_move(&root, 4).unwrap(), 'a');
        assert!(matches!(
            resolve_move(&root, 5),
            Err(AiError::MoveResolutionFailed { value: 5 })
        ));
    }

    #[test]
    fn test_resolve_move_skips_pass_child() {
        let mut root: SearchNode<u8, char> = SearchNode::root(0);
        let mut pass = SearchNode::child(1, None);
        pass.set_utility(4);
        root.add_child(pass);
        assert!(resolve_move(&root, 4).is_err());
    }

    #[test]
    fn test_othello_opening_move() {
        let mut agent = Agent::othello(Side::Black, AiConfig::with_depth(1));
        let state = BoardState::initial();
        let result = agent.play(&state).unwrap();

        // 开局四步都翻一子，估值相同，取生成顺序第一个
        let mv = result.mv.unwrap();
        assert_eq!(mv.position, Position::parse("d3").unwrap());
        assert_eq!(result.value, Some(3));
        assert_eq!(result.stats.leaves_reached, 4);
        assert!(MoveGenerator::find_move(&state, mv.position).is_ok());
    }

    #[test]
    fn test_othello_picks_larger_capture() {
        // 黑方在 c1 只翻一子，在 d8 可翻两子
        let state = Notation::parse(
            "BWW...../......../......../......../......../......../......../BW...... b",
        )
        .unwrap();
        let mut agent = Agent::othello(Side::Black, AiConfig::with_depth(1));
        let result = agent.play(&state).unwrap();
        assert_eq!(result.mv.unwrap().position, Position::parse("d8").unwrap());
        assert_eq!(result.value, Some(4));
    }
}
