//! 显式博弈树
//!
//! 用显式给出的树代替真实对局，便于手工核对 minimax 结果。
//! 叶子估值取白方视角：白方棋子数即叶子值，黑方棋子数恒为 0。

use protocol::Side;

use crate::rules::GameRules;

#[derive(Debug, Clone)]
struct TreeNode {
    value: i32,
    children: Vec<usize>,
}

/// 显式博弈树，局面和走法都用节点编号表示
#[derive(Debug, Clone, Default)]
pub struct ExplicitTree {
    nodes: Vec<TreeNode>,
    root: usize,
}

impl ExplicitTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只有一个无子可下的根节点
    pub fn single(value: i32) -> Self {
        let mut tree = Self::new();
        let root = tree.push_leaf(value);
        tree.set_root(root);
        tree
    }

    /// 由叶子值构建满 `branching` 叉树，叶子数必须是 `branching` 的正整数次幂
    pub fn uniform(branching: usize, leaves: &[i32]) -> Option<Self> {
        if branching < 2 || leaves.is_empty() {
            return None;
        }

        let mut tree = Self::new();
        let mut level: Vec<usize> = leaves.iter().map(|&v| tree.push_leaf(v)).collect();
        while level.len() > 1 {
            if level.len() % branching != 0 {
                return None;
            }
            level = level
                .chunks(branching)
                .map(|group| tree.push_internal(group.to_vec()))
                .collect();
        }

        tree.set_root(level[0]);
        Some(tree)
    }

    /// 添加叶子节点，返回编号
    pub fn push_leaf(&mut self, value: i32) -> usize {
        self.nodes.push(TreeNode {
            value,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// 添加内部节点，返回编号
    pub fn push_internal(&mut self, children: Vec<usize>) -> usize {
        self.nodes.push(TreeNode { value: 0, children });
        self.nodes.len() - 1
    }

    pub fn set_root(&mut self, root: usize) {
        self.root = root;
    }

    /// 根节点编号
    pub fn root(&self) -> usize {
        self.root
    }

    /// 节点估值（内部节点为 0）
    pub fn value(&self, node: usize) -> i32 {
        self.nodes.get(node).map(|n| n.value).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl GameRules for ExplicitTree {
    type State = usize;
    type Move = usize;

    fn available_moves(&self, state: &usize, _side: Side) -> Vec<usize> {
        self.nodes
            .get(*state)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn new_state(&self, _state: &usize, mv: &usize) -> usize {
        *mv
    }

    fn piece_count(&self, state: &usize, side: Side) -> i32 {
        match side {
            Side::White => self.value(*state),
            Side::Black => 0,
        }
    }
}
