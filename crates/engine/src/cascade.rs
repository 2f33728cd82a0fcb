//! Cascade engine - the clear/drop/fill/settle state machine
//!
//! One episode runs from an accepted swap until the board has no match left.
//! Each round: detect runs, report the score, clear the matched cells, let
//! survivors fall, refill the holes, settle the presentation, detect again.
//! The combo counter is the number of rounds that found matches, and is the
//! multiplier handed to the score sink.
//!
//! The engine is tick-driven and cooperative. Phases with presentation
//! (clearing, settling) fan out one task per affected cell and act as
//! barriers: `tick` refuses to advance until the host has completed every
//! ticket via [`CascadeEngine::task_done`]. Phases without presentation
//! (dropping, filling) pass through within a single tick. The board is only
//! mutated between barriers, never while tasks are in flight.

use triad_core::{find_all_matches, Board, TileGenerator};
use triad_types::{BoardError, CellId};

use crate::ports::{Presenter, ScoreSink, Transition};
use crate::tasks::{TaskSet, TaskTicket};

/// Engine phases. `Clearing` and `Settling` are the barrier phases a host
/// can observe while presentation tasks are in flight; `Dropping` and
/// `Filling` complete synchronously inside one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Rematching,
    Clearing,
    Dropping,
    Filling,
    Settling,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Idle
    }
}

/// The cascade state machine for one board.
#[derive(Debug, Default)]
pub struct CascadeEngine {
    phase: Phase,
    combo: u32,
    tasks: TaskSet,
    /// Survivors relocated by the current round's drop.
    moved: Vec<CellId>,
    /// Cells refilled by the current round, in column/top-down order.
    refilled: Vec<CellId>,
}

impl CascadeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an episode is resolving. Swap input is rejected while locked.
    pub fn is_locked(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Rounds that found matches so far in the current episode.
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Presentation tasks still outstanding at the current barrier.
    pub fn open_tasks(&self) -> usize {
        self.tasks.open_count()
    }

    /// Enter an episode: lock the board and reset the combo counter. Called
    /// by swap validation once a swap has produced a match.
    pub fn begin(&mut self) {
        self.combo = 0;
        self.phase = Phase::Rematching;
    }

    /// Complete one per-cell presentation task. Unknown or repeated tickets
    /// are ignored so a chatty presenter cannot double-advance a barrier.
    pub fn task_done(&mut self, ticket: TaskTicket) -> bool {
        let fresh = self.tasks.complete(ticket);
        if !fresh {
            log::trace!("ignoring unknown or duplicate task ticket {ticket:?}");
        }
        fresh
    }

    /// Advance the state machine as far as it can go this tick: through any
    /// synchronous phases, up to the next barrier with outstanding tasks or
    /// back to idle. A no-op while the current barrier still has open tasks.
    pub fn tick(
        &mut self,
        board: &mut Board,
        generator: &mut TileGenerator,
        fx: &mut dyn Presenter,
        score: &mut dyn ScoreSink,
    ) -> Result<Phase, BoardError> {
        if !self.tasks.is_drained() {
            return Ok(self.phase());
        }

        loop {
            self.phase = match self.phase {
                Phase::Idle => return Ok(Phase::Idle),
                Phase::Rematching => self.run_rematch(board, fx, score),
                Phase::Clearing => self.run_drop(board)?,
                Phase::Dropping => self.run_fill(board, generator),
                Phase::Filling => self.run_settle(board, fx)?,
                Phase::Settling => Phase::Rematching,
            };

            if !self.tasks.is_drained() {
                return Ok(self.phase);
            }
        }
    }

    /// Detect. No match ends the episode; a match opens the next round:
    /// score is reported immediately (never gated on presentation), matched
    /// cells are flagged destroyed, and their removal tasks fan out.
    fn run_rematch(
        &mut self,
        board: &mut Board,
        fx: &mut dyn Presenter,
        score: &mut dyn ScoreSink,
    ) -> Phase {
        let matches = find_all_matches(board);
        if matches.is_empty() {
            log::debug!("board stable after {} round(s)", self.combo);
            return Phase::Idle;
        }

        self.combo += 1;
        score.increment_score(matches.len(), self.combo);
        log::debug!("round {}: {} cells matched", self.combo, matches.len());

        for id in matches.iter() {
            board.mark_destroyed(id);
        }
        for id in matches.iter() {
            fx.begin(self.tasks.issue(), id, Transition::Remove);
        }
        Phase::Clearing
    }

    /// Apply gravity column by column: every survivor falls by the number of
    /// destroyed cells below it, via identity-preserving slot swaps, leaving
    /// the destroyed cells at the top of their columns.
    fn run_drop(&mut self, board: &mut Board) -> Result<Phase, BoardError> {
        self.moved.clear();

        for x in 0..board.width() as i16 {
            for (id, fall) in column_drop_plan(board, x) {
                let from = board.position_of(id)?;
                let target = board
                    .get(x, (from.y + fall) as i16)
                    .expect("drop target within column");
                board.swap_cells(id, target)?;
                self.moved.push(id);
            }
        }

        log::trace!("dropped {} cells", self.moved.len());
        Ok(Phase::Dropping)
    }

    /// Refill every hole (now at the top of its column) with an
    /// unconstrained random kind.
    fn run_fill(&mut self, board: &mut Board, generator: &mut TileGenerator) -> Phase {
        self.refilled = generator.refill_destroyed(board);
        log::trace!("refilled {} cells", self.refilled.len());
        Phase::Filling
    }

    /// Fan out the settle presentation: a move task per dropped survivor and
    /// a spawn task per refilled cell. The logical grid is already final;
    /// this barrier exists only so the display catches up before rematch.
    fn run_settle(
        &mut self,
        board: &Board,
        fx: &mut dyn Presenter,
    ) -> Result<Phase, BoardError> {
        for id in std::mem::take(&mut self.moved) {
            let to = board.position_of(id)?;
            fx.begin(self.tasks.issue(), id, Transition::Move { to });
        }
        for id in std::mem::take(&mut self.refilled) {
            let at = board.position_of(id)?;
            fx.begin(self.tasks.issue(), id, Transition::Spawn { at });
        }
        Ok(Phase::Settling)
    }
}

/// Fall distance for each surviving cell of one column, bottom-up: the count
/// of destroyed cells below it. Bottom-up order is also a safe application
/// order, since every landing slot holds a destroyed cell being displaced.
fn column_drop_plan(board: &Board, x: i16) -> Vec<(CellId, u8)> {
    let mut plan = Vec::new();
    let mut destroyed_below: u8 = 0;

    for y in (0..board.height() as i16).rev() {
        let id = board.get(x, y).expect("in-bounds column scan");
        if board.cell(id).is_destroyed() {
            destroyed_below += 1;
        } else if destroyed_below > 0 {
            plan.push((id, destroyed_below));
        }
    }
    plan
}
