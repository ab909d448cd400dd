//! 玩家

use anyhow::Result;
use othello_ai::{Agent, AgentMove, AiConfig, OthelloRules};
use protocol::{BoardState, Move, MoveGenerator, Side};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 对局中的一方
pub trait Player {
    fn name(&self) -> &str;

    fn side(&self) -> Side;

    /// 为当前局面选择走法，无子可下时返回 `mv: None`
    fn next_move(&mut self, state: &BoardState) -> Result<AgentMove<Move>>;
}

/// minimax Agent
pub struct AgentPlayer {
    agent: Agent<OthelloRules>,
}

impl AgentPlayer {
    pub fn new(side: Side, config: AiConfig) -> Self {
        Self {
            agent: Agent::othello(side, config),
        }
    }
}

impl Player for AgentPlayer {
    fn name(&self) -> &str {
        self.agent.name()
    }

    fn side(&self) -> Side {
        self.agent.side()
    }

    fn next_move(&mut self, state: &BoardState) -> Result<AgentMove<Move>> {
        Ok(self.agent.play(state)?)
    }
}

/// 随机走子（固定种子，可复现）
pub struct RandomPlayer {
    name: String,
    side: Side,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(side: Side, seed: u64) -> Self {
        Self {
            name: format!("random-{}", side),
            side,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        self.side
    }

    fn next_move(&mut self, state: &BoardState) -> Result<AgentMove<Move>> {
        let moves = MoveGenerator::generate_legal(&state.board, self.side);
        let mut result = AgentMove::none();
        result.mv = moves.choose(&mut self.rng).cloned();
        Ok(result)
    }
}
