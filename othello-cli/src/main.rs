use anyhow::Result;
use clap::Parser;
use othello_ai::Agent;
use othello_cli::cli::SearchArgs;
use othello_cli::{AgentPlayer, AnalysisReport, Cli, Command, GameRunner, OpponentArg, Player, RandomPlayer};
use protocol::{Notation, Side, INITIAL_POSITION};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("othello_cli=info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            position,
            search,
            json,
        } => analyze(position.as_deref().unwrap_or(INITIAL_POSITION), &search, json),
        Command::Play {
            search,
            opponent,
            seed,
            json,
        } => play(&search, opponent, seed, json),
    }
}

fn analyze(position: &str, search: &SearchArgs, json: bool) -> Result<()> {
    let config = search.to_config()?;
    let state = Notation::parse(position)?;

    let mut agent = Agent::othello(state.current_turn, config.clone());
    let result = agent.play(&state)?;
    let report = AnalysisReport::new(&state, &result, &config);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", Notation::render(&state.board));
        println!("{}", report);
    }
    Ok(())
}

fn play(search: &SearchArgs, opponent: OpponentArg, seed: u64, json: bool) -> Result<()> {
    let config = search.to_config()?;
    let black = Box::new(AgentPlayer::new(Side::Black, config.clone()));
    let white: Box<dyn Player> = match opponent {
        OpponentArg::Random => Box::new(RandomPlayer::new(Side::White, seed)),
        OpponentArg::Agent => Box::new(AgentPlayer::new(Side::White, config)),
    };
    info!("{} 对 {}", black.name(), white.name());

    let mut runner = GameRunner::new(black, white)?;
    let summary = runner.run(|record, state| {
        if json {
            return;
        }
        match &record.position {
            Some(pos) => println!("{:>3}. {} {}", record.ply, record.side, pos),
            None => println!("{:>3}. {} pass", record.ply, record.side),
        }
        if record.value.is_some() {
            println!("     {} ({} ms)", record.stats, record.elapsed_ms);
        }
        print!("{}", Notation::render(&state.board));
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let result = match summary.winner {
            Some(side) => format!("{} wins", side),
            None => "draw".to_string(),
        };
        println!(
            "Black {} : White {} - {}",
            summary.black_count, summary.white_count, result
        );
    }
    Ok(())
}
