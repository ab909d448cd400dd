//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，边搜索边建树：
//! 每个被完整估值的子节点都挂到父节点下，估值写回节点，
//! 供 Agent 在根节点的子节点中按估值回查走法。

use std::sync::atomic::{AtomicBool, Ordering};

use protocol::Side;
use tracing::{debug, trace};

use crate::config::AiConfig;
use crate::node::SearchNode;
use crate::rules::GameRules;
use crate::stats::SearchStats;

/// 搜索树节点类型
pub type Node<R> = SearchNode<<R as GameRules>::State, <R as GameRules>::Move>;

/// 搜索引擎
pub struct SearchEngine<'a, R: GameRules> {
    rules: &'a R,
    config: &'a AiConfig,
    /// 极大方
    side: Side,
    stats: &'a mut SearchStats,
    cancel: Option<&'a AtomicBool>,
    cancelled: bool,
}

impl<'a, R: GameRules> SearchEngine<'a, R> {
    /// 创建搜索引擎，统计数据写入调用方持有的 `stats`
    pub fn new(rules: &'a R, config: &'a AiConfig, side: Side, stats: &'a mut SearchStats) -> Self {
        Self {
            rules,
            config,
            side,
            stats,
            cancel: None,
            cancelled: false,
        }
    }

    /// 设置取消标志，每个节点入口检查一次
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// 从根节点开始搜索（第 0 层，极大方，哨兵边界）
    pub fn search_root(&mut self, root: &mut Node<R>) -> i32 {
        let value = self.search(root, 0, true, self.config.min_value, self.config.max_value);
        debug!("根节点估值 {}，{}", value, self.stats);
        value
    }

    /// Alpha-Beta 搜索
    ///
    /// 返回极大方在该节点、截止深度内双方最优应对下的估值，并写回 `node`。
    /// 剪枝为 fail-hard：极大层 `value >= beta`、极小层 `value <= alpha` 即停止。
    /// 触发剪枝的子节点也会挂到 `node` 下。
    pub fn search(
        &mut self,
        node: &mut Node<R>,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.record_visit(depth);

        if self.is_cancelled() {
            self.cancelled = true;
            let value = self.utility(node.state());
            node.set_utility(value);
            return value;
        }

        // 到达深度限制，返回评估值
        if depth >= self.config.max_depth {
            return self.leaf(node);
        }

        let side = self.side_to_move(maximizing);
        let moves = self.rules.available_moves(node.state(), side);

        // 无子可动
        if moves.is_empty() {
            let opponent_stuck = self.rules.is_terminal(node.state(), side.opponent());
            if self.config.stop_at_game_over && opponent_stuck {
                return self.leaf(node);
            }
            if self.config.allow_pass && !opponent_stuck {
                let mut child = SearchNode::child(self.rules.pass(node.state()), None);
                let value = self.search(&mut child, depth + 1, !maximizing, alpha, beta);
                node.add_child(child);
                node.set_utility(value);
                return value;
            }
            // 否则保持哨兵值
        }

        let mut value = if maximizing {
            self.config.min_value
        } else {
            self.config.max_value
        };

        for mv in moves {
            let mut child = SearchNode::child(self.rules.new_state(node.state(), &mv), Some(mv));
            let child_value = self.search(&mut child, depth + 1, !maximizing, alpha, beta);
            node.add_child(child);

            if maximizing {
                value = value.max(child_value);
                if self.config.pruning && value >= beta {
                    self.stats.record_prune();
                    trace!(depth, value, beta, "Beta 剪枝");
                    break;
                }
                alpha = alpha.max(value);
            } else {
                value = value.min(child_value);
                if self.config.pruning && value <= alpha {
                    self.stats.record_prune();
                    trace!(depth, value, alpha, "Alpha 剪枝");
                    break;
                }
                beta = beta.min(value);
            }
        }

        node.set_utility(value);
        value
    }

    /// 搜索是否因取消标志提前结束
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    fn side_to_move(&self, maximizing: bool) -> Side {
        if maximizing {
            self.side
        } else {
            self.side.opponent()
        }
    }

    fn leaf(&mut self, node: &mut Node<R>) -> i32 {
        self.stats.record_leaf();
        let value = self.utility(node.state());
        node.set_utility(value);
        value
    }

    /// 子力差：极大方棋子数 - 对方棋子数
    fn utility(&self, state: &R::State) -> i32 {
        self.rules.piece_count(state, self.side) - self.rules.piece_count(state, self.side.opponent())
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled || self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
