//! 走法生成约定
//!
//! 搜索引擎只通过 `GameRules` 访问局面：判定无子可下、枚举走法、
//! 由走法派生新局面、统计双方棋子数。规则合法性完全由实现方负责。

use protocol::{BoardState, Move, MoveGenerator, Side, SQUARE_COUNT};

/// 走法生成器约定
pub trait GameRules {
    /// 局面
    type State: Clone;
    /// 走法
    type Move: Clone + std::fmt::Debug;

    /// `side` 在 `state` 中是否无子可下
    fn is_terminal(&self, state: &Self::State, side: Side) -> bool {
        self.available_moves(state, side).is_empty()
    }

    /// 枚举 `side` 的所有合法走法，顺序决定同分时的取舍和剪枝效率
    fn available_moves(&self, state: &Self::State, side: Side) -> Vec<Self::Move>;

    /// 由走法派生新局面，不得修改 `state`
    fn new_state(&self, state: &Self::State, mv: &Self::Move) -> Self::State;

    /// 双方都无子可下
    fn is_game_over(&self, state: &Self::State) -> bool {
        self.is_terminal(state, Side::Black) && self.is_terminal(state, Side::White)
    }

    /// 停着后的局面
    fn pass(&self, state: &Self::State) -> Self::State {
        state.clone()
    }

    /// `side` 在 `state` 中的棋子数
    fn piece_count(&self, state: &Self::State, side: Side) -> i32;

    /// 估值绝对值上界，用于校验 alpha/beta 哨兵值
    fn utility_bound(&self) -> Option<i32> {
        None
    }
}

/// 黑白棋规则
#[derive(Debug, Clone, Copy, Default)]
pub struct OthelloRules;

impl GameRules for OthelloRules {
    type State = BoardState;
    type Move = Move;

    fn is_terminal(&self, state: &BoardState, side: Side) -> bool {
        MoveGenerator::is_terminal(&state.board, side)
    }

    fn available_moves(&self, state: &BoardState, side: Side) -> Vec<Move> {
        MoveGenerator::generate_legal(&state.board, side)
    }

    fn new_state(&self, state: &BoardState, mv: &Move) -> BoardState {
        MoveGenerator::apply(state, mv)
    }

    fn is_game_over(&self, state: &BoardState) -> bool {
        MoveGenerator::is_game_over(&state.board)
    }

    fn pass(&self, state: &BoardState) -> BoardState {
        MoveGenerator::pass(state)
    }

    fn piece_count(&self, state: &BoardState, side: Side) -> i32 {
        state.count(side) as i32
    }

    fn utility_bound(&self) -> Option<i32> {
        Some(SQUARE_COUNT as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_othello_rules_initial() {
        let rules = OthelloRules;
        let state = BoardState::initial();

        assert!(!rules.is_terminal(&state, Side::Black));
        assert_eq!(rules.available_moves(&state, Side::Black).len(), 4);
        assert_eq!(rules.piece_count(&state, Side::White), 2);
        assert_eq!(rules.utility_bound(), Some(64));
    }

    #[test]
    fn test_new_state_is_pure() {
        let rules = OthelloRules;
        let state = BoardState::initial();
        let mv = rules.available_moves(&state, Side::Black).remove(0);

        let child = rules.new_state(&state, &mv);
        assert_eq!(state, BoardState::initial());
        assert_eq!(rules.piece_count(&child, Side::Black), 4);
        assert_eq!(child.current_turn, Side::White);
    }

    #[test]
    fn test_pass_switches_turn() {
        let rules = OthelloRules;
        let state = BoardState::initial();
        assert_eq!(rules.pass(&state).current_turn, Side::White);
    }
}
