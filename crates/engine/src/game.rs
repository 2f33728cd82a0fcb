//! Game facade - one board, one generator, one cascade engine
//!
//! Hosts integrate against this type: construct it with a config and a seed,
//! gate input on [`Game::is_busy`], submit swaps, and pump [`Game::tick`]
//! while feeding presentation completions back through [`Game::task_done`].

use triad_core::{find_all_matches, Board, BoardSnapshot, TileGenerator};
use triad_types::{BoardConfig, BoardError, ConfigError, Coord, SwapError};

use crate::cascade::{CascadeEngine, Phase};
use crate::ports::{FeedbackSink, InstantFx, Presenter, ScoreSink};
use crate::swap::{self, SwapOutcome};
use crate::tasks::TaskTicket;

/// A complete match-3 simulation.
#[derive(Debug)]
pub struct Game {
    config: BoardConfig,
    board: Board,
    generator: TileGenerator,
    cascade: CascadeEngine,
}

impl Game {
    /// Build a board from a validated config and fill it with the
    /// constrained starting policy, so play begins with no match on it.
    pub fn new(config: BoardConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut board = Board::new(config.width, config.height);
        let mut generator = TileGenerator::new(config.kinds, seed);
        generator.fill_board(&mut board);

        Ok(Self {
            config,
            board,
            generator,
            cascade: CascadeEngine::new(),
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Combo rounds of the current (or last) episode.
    pub fn combo(&self) -> u32 {
        self.cascade.combo()
    }

    pub fn phase(&self) -> Phase {
        self.cascade.phase()
    }

    /// True while a cascade resolves; the input layer must not submit swaps.
    pub fn is_busy(&self) -> bool {
        self.cascade.is_locked()
    }

    /// Submit an adjacency swap. See [`swap::try_swap`].
    pub fn try_swap(
        &mut self,
        a: Coord,
        b: Coord,
        feedback: &mut dyn FeedbackSink,
    ) -> Result<SwapOutcome, SwapError> {
        swap::try_swap(&mut self.board, &mut self.cascade, a, b, feedback)
    }

    /// Advance the cascade one cooperative tick.
    pub fn tick(
        &mut self,
        fx: &mut dyn Presenter,
        score: &mut dyn ScoreSink,
    ) -> Result<Phase, BoardError> {
        self.cascade
            .tick(&mut self.board, &mut self.generator, fx, score)
    }

    /// Complete one presentation task issued during `tick`.
    pub fn task_done(&mut self, ticket: TaskTicket) -> bool {
        self.cascade.task_done(ticket)
    }

    /// Drive the cascade to idle with an instant presenter, draining its
    /// completions between ticks. This is the canonical pump for headless
    /// hosts; display-driven hosts write the same loop against their own
    /// presenter. Returns the episode's final combo count.
    pub fn run_to_idle(
        &mut self,
        fx: &mut InstantFx,
        score: &mut dyn ScoreSink,
    ) -> Result<u32, BoardError> {
        while self.is_busy() {
            let _ = self.tick(fx, score)?;
            for ticket in fx.drain_done() {
                let _ = self.task_done(ticket);
            }
        }
        Ok(self.cascade.combo())
    }

    /// Regenerate the board in place with the starting fill policy. Cell
    /// identities are reused; any episode state is discarded.
    pub fn reset(&mut self) {
        self.cascade = CascadeEngine::new();
        self.generator.fill_board(&mut self.board);
        debug_assert!(find_all_matches(&self.board).is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{NullFeedback, TallyScore};

    #[test]
    fn test_new_game_starts_stable() {
        let game = Game::new(BoardConfig::default(), 12345).unwrap();
        assert!(!game.is_busy());
        assert!(find_all_matches(game.board()).is_empty());
        assert_eq!(game.combo(), 0);
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        assert!(Game::new(BoardConfig::new(0, 8, 5), 1).is_err());
        assert!(Game::new(BoardConfig::new(8, 8, 2), 1).is_err());
    }

    #[test]
    fn test_reset_restores_a_stable_board() {
        let mut game = Game::new(BoardConfig::default(), 99).unwrap();
        let first = game.snapshot();

        game.reset();
        assert!(!game.is_busy());
        assert!(find_all_matches(game.board()).is_empty());
        // A reset redraws from the generator, so the layout moves on.
        assert_ne!(game.snapshot(), first);
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = Game::new(BoardConfig::default(), 7).unwrap();
        let b = Game::new(BoardConfig::default(), 7).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());

        let c = Game::new(BoardConfig::default(), 8).unwrap();
        assert_ne!(a.snapshot(), c.snapshot());
    }

    #[test]
    fn test_tick_while_idle_is_a_no_op() {
        let mut game = Game::new(BoardConfig::default(), 3).unwrap();
        let before = game.snapshot();
        let mut fx = InstantFx::new();
        let mut score = TallyScore::new();

        assert_eq!(game.tick(&mut fx, &mut score).unwrap(), Phase::Idle);
        assert_eq!(game.snapshot(), before);
        assert!(fx.transitions().is_empty());
    }

    #[test]
    fn test_locked_game_reports_busy_to_input() {
        let mut game = Game::new(BoardConfig::default(), 3).unwrap();
        let mut feedback = NullFeedback;

        // Probe every adjacent pair until one swap is accepted; with five
        // kinds on an 8x8 board some swap always completes a run eventually,
        // but tolerate fully stuck layouts by skipping the assertion.
        let mut accepted = false;
        'probe: for y in 0..8u8 {
            for x in 0..7u8 {
                let a = Coord::new(x, y);
                let b = Coord::new(x + 1, y);
                if let Ok(SwapOutcome::Accepted) = game.try_swap(a, b, &mut feedback) {
                    accepted = true;
                    break 'probe;
                }
            }
        }

        if accepted {
            assert!(game.is_busy());
            let err = game
                .try_swap(Coord::new(0, 0), Coord::new(0, 1), &mut feedback)
                .unwrap_err();
            assert_eq!(err, SwapError::Locked);

            let mut fx = InstantFx::new();
            let mut score = TallyScore::new();
            game.run_to_idle(&mut fx, &mut score).unwrap();
            assert!(!game.is_busy());
            assert!(find_all_matches(game.board()).is_empty());
        }
    }
}
