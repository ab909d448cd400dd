//! 搜索统计

use serde::{Deserialize, Serialize};

/// 搜索统计，每次顶层搜索前清零
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 访问过的节点数
    pub nodes_examined: u64,
    /// 剪枝次数
    pub pruned: u64,
    /// 到达深度上限的叶子数
    pub leaves_reached: u64,
    /// 到达的最大深度
    pub search_depth: u32,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 记录一次节点访问
    pub(crate) fn record_visit(&mut self, depth: u32) {
        self.nodes_examined += 1;
        self.search_depth = self.search_depth.max(depth);
    }

    pub(crate) fn record_prune(&mut self) {
        self.pruned += 1;
    }

    pub(crate) fn record_leaf(&mut self) {
        self.leaves_reached += 1;
    }

    /// 内部节点（非叶子）访问数
    pub fn internal_nodes(&self) -> u64 {
        self.nodes_examined.saturating_sub(self.leaves_reached)
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes examined: {}, pruned: {}, leaves reached: {}, depth: {}",
            self.nodes_examined, self.pruned, self.leaves_reached, self.search_depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut stats = SearchStats::default();
        stats.record_visit(0);
        stats.record_visit(3);
        stats.record_visit(1);
        stats.record_leaf();
        stats.record_prune();

        assert_eq!(stats.nodes_examined, 3);
        assert_eq!(stats.search_depth, 3);
        assert_eq!(stats.internal_nodes(), 2);

        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_display() {
        let stats = SearchStats {
            nodes_examined: 12,
            pruned: 2,
            leaves_reached: 6,
            search_depth: 3,
        };
        assert_eq!(
            stats.to_string(),
            "nodes examined: 12, pruned: 2, leaves reached: 6, depth: 3"
        );
    }
}
