//! 对局控制

use anyhow::{bail, Result};
use othello_ai::SearchStats;
use protocol::{BoardState, MoveGenerator, Notation, Side};
use serde::Serialize;
use tracing::{debug, info};

use crate::player::Player;

/// 一步棋的记录
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    /// 第几步（从 1 开始，停着也计数）
    pub ply: u32,
    pub side: Side,
    /// 落子位置，停着为 `None`
    pub position: Option<String>,
    /// 搜索估值（随机玩家为 `None`）
    pub value: Option<i32>,
    pub stats: SearchStats,
    pub elapsed_ms: u64,
}

/// 对局摘要
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub black: String,
    pub white: String,
    pub black_count: u32,
    pub white_count: u32,
    /// 胜方，平局为 `None`
    pub winner: Option<Side>,
    pub final_position: String,
    pub moves: Vec<MoveRecord>,
}

/// 对局控制器
pub struct GameRunner {
    black: Box<dyn Player>,
    white: Box<dyn Player>,
}

impl GameRunner {
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>) -> Result<Self> {
        if black.side() != Side::Black || white.side() != Side::White {
            bail!(
                "players seated on wrong sides: {} / {}",
                black.side(),
                white.side()
            );
        }
        Ok(Self { black, white })
    }

    /// 从初始局面下到终局
    pub fn run(&mut self, on_move: impl FnMut(&MoveRecord, &BoardState)) -> Result<GameSummary> {
        self.run_from(BoardState::initial(), on_move)
    }

    /// 从指定局面下到终局
    pub fn run_from(
        &mut self,
        mut state: BoardState,
        mut on_move: impl FnMut(&MoveRecord, &BoardState),
    ) -> Result<GameSummary> {
        let mut moves = Vec::new();
        let mut ply = 0;

        while !MoveGenerator::is_game_over(&state.board) {
            ply += 1;
            let side = state.current_turn;
            let player = match side {
                Side::Black => &mut self.black,
                Side::White => &mut self.white,
            };

            let result = player.next_move(&state)?;
            let position = match &result.mv {
                Some(mv) => {
                    // 不信任玩家给出的翻子列表，按规则重新生成
                    let legal = MoveGenerator::find_move(&state, mv.position)?;
                    state = MoveGenerator::apply(&state, &legal);
                    Some(legal.position.to_string())
                }
                None => {
                    if !MoveGenerator::is_terminal(&state.board, side) {
                        bail!("{} passed while having legal moves", player.name());
                    }
                    debug!("{} 停着", side);
                    state = MoveGenerator::pass(&state);
                    None
                }
            };

            let record = MoveRecord {
                ply,
                side,
                position,
                value: result.value,
                stats: result.stats,
                elapsed_ms: result.elapsed.as_millis() as u64,
            };
            on_move(&record, &state);
            moves.push(record);
        }

        let black_count = state.black_count();
        let white_count = state.white_count();
        let winner = match black_count.cmp(&white_count) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        };
        info!("对局结束 黑 {} : 白 {}，共 {} 步", black_count, white_count, ply);

        Ok(GameSummary {
            black: self.black.name().to_string(),
            white: self.white.name().to_string(),
            black_count,
            white_count,
            winner,
            final_position: Notation::to_string(&state),
            moves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{AgentPlayer, RandomPlayer};
    use othello_ai::AiConfig;

    #[test]
    fn test_random_game_terminates() {
        let mut runner = GameRunner::new(
            Box::new(RandomPlayer::new(Side::Black, 1)),
            Box::new(RandomPlayer::new(Side::White, 2)),
        )
        .unwrap();

        let mut seen = 0;
        let summary = runner.run(|_, _| seen += 1).unwrap();
        assert_eq!(summary.moves.len(), seen);
        assert!(summary.black_count + summary.white_count <= 64);

        let final_state = Notation::parse(&summary.final_position).unwrap();
        assert!(MoveGenerator::is_game_over(&final_state.board));
    }

    #[test]
    fn test_agent_vs_random_is_reproducible() {
        let play = || {
            let mut runner = GameRunner::new(
                Box::new(AgentPlayer::new(Side::Black, AiConfig::with_depth(2))),
                Box::new(RandomPlayer::new(Side::White, 5)),
            )
            .unwrap();
            runner.run(|_, _| {}).unwrap()
        };

        let a = play();
        let b = play();
        assert_eq!(a.final_position, b.final_position);
        assert_eq!(a.winner, b.winner);
        assert!(a.moves.iter().filter(|m| m.side == Side::Black).all(|m| m.value.is_some() || m.position.is_none()));
    }

    #[test]
    fn test_wrong_seats_rejected() {
        let result = GameRunner::new(
            Box::new(RandomPlayer::new(Side::White, 1)),
            Box::new(RandomPlayer::new(Side::White, 2)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_run_from_finished_position() {
        let state = Notation::parse(
            "BBBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB/WWWWWWWW/WWWWWWWW/WWWWWWWW/WWWWWWW. b",
        )
        .unwrap();
        let mut runner = GameRunner::new(
            Box::new(RandomPlayer::new(Side::Black, 1)),
            Box::new(RandomPlayer::new(Side::White, 2)),
        )
        .unwrap();

        let summary = runner.run_from(state, |_, _| {}).unwrap();
        // 黑方在 h1 落子后棋盘下满，对局结束
        assert_eq!(summary.moves.len(), 1);
        assert_eq!(summary.moves[0].position.as_deref(), Some("h1"));
        assert_eq!(summary.winner, Some(Side::Black));
    }
}
