//! Headless board runner (default binary).
//!
//! Auto-plays a seeded board: probes random adjacent pairs until a swap
//! produces a match, resolves the cascade to idle, and logs per-episode
//! stats. Useful for smoke runs and for watching cascade behavior without a
//! display attached. Set `RUST_LOG=debug` to see per-round engine activity.

use anyhow::{anyhow, Result};

use triad::core::SimpleRng;
use triad::engine::{CountingFeedback, Game, InstantFx, SwapOutcome, TallyScore};
use triad::types::{BoardConfig, Coord, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    board: BoardConfig,
    seed: u32,
    episodes: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    run(config)
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut board = BoardConfig::default();
    let mut seed: u32 = 1;
    let mut episodes: u32 = 10;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                board.width = parse_value(args, i, "--width")?;
            }
            "--height" => {
                i += 1;
                board.height = parse_value(args, i, "--height")?;
            }
            "--kinds" => {
                i += 1;
                board.kinds = parse_value(args, i, "--kinds")?;
            }
            "--seed" => {
                i += 1;
                seed = parse_value(args, i, "--seed")?;
            }
            "--episodes" => {
                i += 1;
                episodes = parse_value(args, i, "--episodes")?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(RunConfig {
        board,
        seed,
        episodes,
    })
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {flag}"))?;
    v.parse()
        .map_err(|_| anyhow!("invalid value for {flag}: {v}"))
}

fn run(config: RunConfig) -> Result<()> {
    let mut game = Game::new(config.board, config.seed)?;
    let mut rng = SimpleRng::new(config.seed ^ 0x9E37_79B9);
    let mut fx = InstantFx::new();
    let mut score = TallyScore::new();
    let mut feedback = CountingFeedback::new();

    let mut episodes = 0u32;
    let mut attempts = 0u64;
    while episodes < config.episodes {
        attempts += 1;
        if attempts > config.episodes as u64 * 10_000 {
            return Err(anyhow!(
                "gave up after {attempts} swap attempts; board produced only {episodes} episodes"
            ));
        }

        let (a, b) = random_adjacent_pair(&mut rng, config.board);
        match game.try_swap(a, b, &mut feedback)? {
            SwapOutcome::Accepted => {
                let combo = game.run_to_idle(&mut fx, &mut score)?;
                episodes += 1;
                log::info!(
                    "episode {episodes}: swap {a} <-> {b}, combo x{combo}, total {}",
                    score.total
                );
                fx.clear_transitions();
            }
            SwapOutcome::RejectedNoMatch => {}
        }
    }

    println!(
        "{episodes} episodes in {attempts} swap attempts ({} rejected)",
        feedback.rejected
    );
    println!("final score: {}", score.total);
    print_board(&game);
    Ok(())
}

/// Pick a uniformly random in-bounds pair of cardinal neighbors.
fn random_adjacent_pair(rng: &mut SimpleRng, board: BoardConfig) -> (Coord, Coord) {
    loop {
        let x = rng.next_range(board.width as u32) as u8;
        let y = rng.next_range(board.height as u32) as u8;
        let a = Coord::new(x, y);

        let dir = Direction::ALL[rng.next_range(4) as usize];
        let (nx, ny) = a.step(dir);
        if nx >= 0 && ny >= 0 && (nx as u8) < board.width && (ny as u8) < board.height {
            return (a, Coord::new(nx as u8, ny as u8));
        }
    }
}

fn print_board(game: &Game) {
    let snap = game.snapshot();
    for y in 0..snap.height() {
        let mut line = String::with_capacity(snap.width() as usize);
        for x in 0..snap.width() {
            match snap.kind_at(x, y) {
                Some(k) => line.push(char::from(b'A' + k)),
                None => line.push('.'),
            }
        }
        println!("{line}");
    }
}
