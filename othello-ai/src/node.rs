//! 搜索树节点
//!
//! 每个节点独占自己的子节点列表，子节点只记录产生它的走法（值拷贝），
//! 不持有指向父节点的引用。

/// 搜索树节点
#[derive(Debug, Clone)]
pub struct SearchNode<S, M> {
    state: S,
    utility: Option<i32>,
    children: Vec<SearchNode<S, M>>,
    leading_move: Option<M>,
}

impl<S, M> SearchNode<S, M> {
    /// 创建根节点
    pub fn root(state: S) -> Self {
        Self {
            state,
            utility: None,
            children: Vec::new(),
            leading_move: None,
        }
    }

    /// 创建由 `mv` 产生的子节点；停着时 `mv` 为 `None`
    pub fn child(state: S, mv: Option<M>) -> Self {
        Self {
            state,
            utility: None,
            children: Vec::new(),
            leading_move: mv,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// 搜索赋予的估值，未访问时为 `None`
    pub fn utility(&self) -> Option<i32> {
        self.utility
    }

    pub fn set_utility(&mut self, value: i32) {
        self.utility = Some(value);
    }

    /// 已展开的子节点（按走法生成顺序，被剪掉的分支不会出现）
    pub fn children(&self) -> &[SearchNode<S, M>] {
        &self.children
    }

    pub fn add_child(&mut self, child: SearchNode<S, M>) {
        self.children.push(child);
    }

    /// 产生该节点的走法
    pub fn leading_move(&self) -> Option<&M> {
        self.leading_move.as_ref()
    }

    /// 第一个估值等于 `value` 的子节点
    pub fn first_child_with_utility(&self, value: i32) -> Option<&SearchNode<S, M>> {
        self.children.iter().find(|c| c.utility == Some(value))
    }

    /// 子树节点总数（含自身）
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_size()).sum::<usize>()
    }

    /// 丢弃子树，取回局面
    pub fn into_state(self) -> S {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_unvisited() {
        let node: SearchNode<u32, u32> = SearchNode::root(7);
        assert_eq!(node.utility(), None);
        assert!(node.children().is_empty());
        assert!(node.leading_move().is_none());
        assert_eq!(*node.state(), 7);
    }

    #[test]
    fn test_first_child_with_utility_keeps_order() {
        let mut root: SearchNode<u32, &str> = SearchNode::root(0);
        for (i, (mv, value)) in [("a", 3), ("b", 5), ("c", 5)].into_iter().enumerate() {
            let mut child = SearchNode::child(i as u32 + 1, Some(mv));
            child.set_utility(value);
            root.add_child(child);
        }

        let found = root.first_child_with_utility(5).unwrap();
        assert_eq!(found.leading_move(), Some(&"b"));
        assert!(root.first_child_with_utility(9).is_none());
        assert_eq!(root.subtree_size(), 4);
    }
}
