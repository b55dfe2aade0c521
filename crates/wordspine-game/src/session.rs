use std::collections::VecDeque;

use log::debug;
use wordspine_core::{Cell, Letter, Level};

use crate::{
    Direction, Selection, Validator, VerticalProgress, WordStatus, level_score, score,
};

/// Lifecycle phase of a session.
///
/// `NotStarted -> Active <-> Paused -> Complete` (terminal), or
/// `Active -> TimedOut` (terminal). Terminal phases only end via
/// [`Session::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Created but never started.
    NotStarted,
    /// Countdown running, input accepted.
    Active,
    /// Countdown stopped, counters kept.
    Paused,
    /// Solved; terminal until restart.
    Complete,
    /// Clock ran out before completion; terminal, score zero.
    TimedOut,
}

/// A normalized input command.
///
/// The platform input adapter translates raw key codes, composition events,
/// and virtual-keyboard quirks into these; the session never sees anything
/// rawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Type a letter at the selected cell.
    Type(Letter),
    /// Clear the selected cell (Backspace/Delete); the selection stays put.
    Erase,
    /// Move the selection.
    Move(Direction),
}

/// An event for the rendering/UI collaborator, drained from the session
/// after each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The selected cell changed; carries the row's clue for display.
    SelectionChanged {
        /// The newly selected cell.
        cell: Cell,
        /// Clue of the horizontal word on that row.
        clue: String,
    },
    /// A cell's letter changed; the renderer mirrors it.
    CellChanged {
        /// The affected cell.
        cell: Cell,
        /// The new letter, or `None` when erased.
        letter: Option<Letter>,
    },
    /// A fully filled row was checked.
    RowValidated {
        /// The validated row.
        row: u8,
        /// Whether it matches the answer.
        correct: bool,
    },
    /// The fully filled vertical word was checked.
    VerticalValidated {
        /// Whether it matches the answer.
        correct: bool,
    },
    /// The spine display should refresh.
    VerticalProgress(VerticalProgress),
    /// The countdown moved; also emitted once on start.
    TimeChanged {
        /// Seconds left on the clock.
        remaining: u32,
    },
    /// A hint filled a row.
    HintApplied {
        /// The filled row.
        row: u8,
        /// Total hints consumed so far.
        hints_used: u32,
    },
    /// The puzzle was solved. Emitted at most once per start.
    Completed {
        /// Final score.
        score: i64,
        /// Seconds that were left on the clock.
        time_remaining: u32,
        /// Hints consumed.
        hints_used: u32,
    },
    /// The clock reached zero before completion.
    TimeExpired,
    /// The host should move on to the next level. Emitted at most once per
    /// completion, whether via the auto-advance delay or an explicit
    /// [`Session::advance_now`].
    AdvanceRequested,
}

/// One puzzle play-through: timer, hints, selection, validation, and
/// completion sequencing.
///
/// The session is single-threaded and event-driven: each external trigger
/// (command, tap, timer tick) is handled to completion, queueing
/// [`GameEvent`]s that the host drains and renders. The clock is the host's
/// job: call [`tick`](Self::tick) once per second while the session is
/// alive. There is no background timer to leak or cancel.
///
/// # Example
///
/// ```
/// use wordspine_core::{Cell, Level, Letter};
/// use wordspine_game::{Command, GameEvent, Phase, Session};
///
/// let mut session = Session::new(Level::example());
/// session.start();
/// session.select_cell(Cell::new(0, 0));
/// session.apply(Command::Type(Letter::from_char('c').unwrap()));
///
/// let events: Vec<GameEvent> = session.drain_events().collect();
/// assert!(events.iter().any(|e| matches!(e, GameEvent::CellChanged { .. })));
/// ```
#[derive(Debug)]
pub struct Session {
    level: Level,
    validator: Validator,
    selection: Selection,
    phase: Phase,
    time_remaining: u32,
    hints_used: u32,
    final_score: Option<i64>,
    auto_advance_delay: Option<u32>,
    advance_in: Option<u32>,
    advance_fired: bool,
    events: VecDeque<GameEvent>,
}

impl Session {
    /// Creates a session for `level` in the [`Phase::NotStarted`] phase.
    #[must_use]
    pub fn new(level: Level) -> Self {
        let validator = Validator::new(&level);
        let time_remaining = level.time_limit;
        Self {
            level,
            validator,
            selection: Selection::new(),
            phase: Phase::NotStarted,
            time_remaining,
            hints_used: 0,
            final_score: None,
            auto_advance_delay: None,
            advance_in: None,
            advance_fired: false,
            events: VecDeque::new(),
        }
    }

    /// Requests [`GameEvent::AdvanceRequested`] automatically `seconds`
    /// after completion. Zero means immediately. Without this, advancing is
    /// the host's explicit [`advance_now`](Self::advance_now) call.
    #[must_use]
    pub fn with_auto_advance_delay(mut self, seconds: u32) -> Self {
        self.auto_advance_delay = Some(seconds);
        self
    }

    /// Starts the session, or restarts it from any phase.
    ///
    /// Clears the answer grid, caches, selection, and hint count; resets the
    /// clock to the level's time limit; discards undrained events from a
    /// previous run.
    pub fn start(&mut self) {
        self.validator.reset();
        self.selection.clear();
        self.hints_used = 0;
        self.final_score = None;
        self.advance_in = None;
        self.advance_fired = false;
        self.time_remaining = self.level.time_limit;
        self.phase = Phase::Active;
        self.events.clear();
        self.events.push_back(GameEvent::TimeChanged {
            remaining: self.time_remaining,
        });
        debug!("session started: level {:?}", self.level.id);
    }

    /// Stops the countdown without touching any counters.
    pub fn pause(&mut self) {
        if self.phase.is_active() {
            self.phase = Phase::Paused;
        }
    }

    /// Restarts the countdown. No-op unless paused.
    pub fn resume(&mut self) {
        if self.phase.is_paused() {
            self.phase = Phase::Active;
        }
    }

    /// Selects a cell (pointer tap). Inert cells and terminal phases are
    /// no-ops; an accepted selection emits [`GameEvent::SelectionChanged`].
    pub fn select_cell(&mut self, cell: Cell) {
        if self.phase.is_complete() || self.phase.is_timed_out() {
            return;
        }
        if self.selection.select(&self.level, cell) {
            self.emit_selection_changed();
        }
    }

    /// Applies a normalized input command.
    ///
    /// No-op unless the session is active and a cell is selected.
    pub fn apply(&mut self, command: Command) {
        if !self.phase.is_active() {
            return;
        }
        let Some(cell) = self.selection.current() else {
            return;
        };
        match command {
            Command::Type(letter) => {
                self.validator.set_letter(cell, Some(letter));
                self.events.push_back(GameEvent::CellChanged {
                    cell,
                    letter: Some(letter),
                });
                self.revalidate(cell.row);
                // Completion may have ended the session mid-word.
                if self.phase.is_active() && self.selection.advance(&self.level) {
                    self.emit_selection_changed();
                }
            }
            Command::Erase => {
                self.validator.set_letter(cell, None);
                self.events
                    .push_back(GameEvent::CellChanged { cell, letter: None });
                self.revalidate(cell.row);
            }
            Command::Move(direction) => {
                if self.selection.step(&self.level, direction) {
                    self.emit_selection_changed();
                }
            }
        }
    }

    /// Consumes a hint: fills the selected row with its answer.
    ///
    /// With no cell selected, this only selects the first cell of the first
    /// horizontal word and consumes nothing. The fill path requires an
    /// active session, like [`apply`](Self::apply); terminal phases are
    /// no-ops entirely.
    pub fn use_hint(&mut self) {
        if self.phase.is_complete() || self.phase.is_timed_out() {
            return;
        }
        let Some(cell) = self.selection.current() else {
            if let Some(first) = self.level.horizontal_words.first() {
                let cell = Cell::new(first.position, first.intersection_index);
                if self.selection.select(&self.level, cell) {
                    self.emit_selection_changed();
                }
            }
            return;
        };
        if !self.phase.is_active() {
            return;
        }

        let Some(word) = self.level.word(cell.row) else {
            return;
        };
        let row = cell.row;
        let letters = word.letters();
        let span = word.span();

        self.hints_used += 1;
        for (col, letter) in span.cols().zip(letters) {
            let cell = Cell::new(row, col);
            self.validator.set_letter(cell, Some(letter));
            self.events.push_back(GameEvent::CellChanged {
                cell,
                letter: Some(letter),
            });
        }
        self.events.push_back(GameEvent::HintApplied {
            row,
            hints_used: self.hints_used,
        });
        debug!("hint filled row {row} ({} hints used)", self.hints_used);
        self.revalidate(row);
    }

    /// Advances the clock by one second (host-driven, 1 Hz).
    ///
    /// While active: decrements the countdown and, at exactly zero, ends the
    /// session as [`Phase::TimedOut`] with a zero score regardless of board
    /// state. After completion: counts down the auto-advance delay. Ignored
    /// in every other phase, so pausing or dropping the session cancels the
    /// countdown structurally.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Active => {
                if self.time_remaining > 0 {
                    self.time_remaining -= 1;
                    self.events.push_back(GameEvent::TimeChanged {
                        remaining: self.time_remaining,
                    });
                    if self.time_remaining == 0 {
                        self.phase = Phase::TimedOut;
                        self.final_score = Some(0);
                        self.events.push_back(GameEvent::TimeExpired);
                        debug!("time expired: level {:?}", self.level.id);
                    }
                }
            }
            Phase::Complete => {
                if let Some(remaining) = self.advance_in {
                    let remaining = remaining.saturating_sub(1);
                    if remaining == 0 {
                        self.fire_advance();
                    } else {
                        self.advance_in = Some(remaining);
                    }
                }
            }
            Phase::NotStarted | Phase::Paused | Phase::TimedOut => {}
        }
    }

    /// Explicit "next level" action after completion.
    ///
    /// Idempotent with the auto-advance delay: however both paths race,
    /// [`GameEvent::AdvanceRequested`] is emitted at most once.
    pub fn advance_now(&mut self) {
        if self.phase.is_complete() {
            self.fire_advance();
        }
    }

    /// Drains the queued events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// The level being played.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// The clock formatted as `MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        score::format_clock(self.time_remaining)
    }

    /// Hints consumed since the last start.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// The final score in a terminal phase, or a live preview of what
    /// completing right now would be worth.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.final_score.unwrap_or_else(|| {
            level_score(self.level.points, self.time_remaining, self.hints_used)
        })
    }

    /// The selected cell, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Cell> {
        self.selection.current()
    }

    /// Clue for the selected cell's row.
    #[must_use]
    pub fn selected_clue(&self) -> Option<&str> {
        let cell = self.selection.current()?;
        self.level.word(cell.row).map(|w| w.clue.as_str())
    }

    /// The player's letter at `cell`, if filled.
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> Option<Letter> {
        self.validator.letter(cell)
    }

    /// Snapshot of the spine display.
    #[must_use]
    pub fn vertical_progress(&self) -> VerticalProgress {
        self.validator.vertical_progress(&self.level)
    }

    /// Read access to validation state (row/vertical correctness).
    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    fn emit_selection_changed(&mut self) {
        if let Some(cell) = self.selection.current() {
            let clue = self
                .level
                .word(cell.row)
                .map(|w| w.clue.clone())
                .unwrap_or_default();
            self.events
                .push_back(GameEvent::SelectionChanged { cell, clue });
        }
    }

    /// Re-runs row + vertical validation after a mutation on `row`, then
    /// checks completion.
    fn revalidate(&mut self, row: u8) {
        let mut refresh = false;

        match self.validator.validate_row(&self.level, row) {
            WordStatus::Correct => {
                self.events
                    .push_back(GameEvent::RowValidated { row, correct: true });
                refresh = true;
            }
            WordStatus::Incorrect => {
                self.events
                    .push_back(GameEvent::RowValidated { row, correct: false });
            }
            WordStatus::Incomplete => {}
        }

        match self.validator.validate_vertical(&self.level) {
            WordStatus::Correct => {
                self.events
                    .push_back(GameEvent::VerticalValidated { correct: true });
                refresh = true;
            }
            WordStatus::Incorrect => {
                self.events
                    .push_back(GameEvent::VerticalValidated { correct: false });
            }
            WordStatus::Incomplete => {}
        }

        if refresh {
            let progress = self.validator.vertical_progress(&self.level);
            self.events.push_back(GameEvent::VerticalProgress(progress));
        }

        if self.validator.is_complete() && !self.phase.is_complete() {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.phase = Phase::Complete;
        let score = level_score(self.level.points, self.time_remaining, self.hints_used);
        self.final_score = Some(score);
        self.events.push_back(GameEvent::Completed {
            score,
            time_remaining: self.time_remaining,
            hints_used: self.hints_used,
        });
        debug!(
            "level {:?} complete: score {score}, {} left, {} hints",
            self.level.id,
            score::format_clock(self.time_remaining),
            self.hints_used
        );
        self.advance_fired = false;
        match self.auto_advance_delay {
            Some(0) => self.fire_advance(),
            delay => self.advance_in = delay,
        }
    }

    fn fire_advance(&mut self) {
        if !self.advance_fired {
            self.advance_fired = true;
            self.advance_in = None;
            self.events.push_back(GameEvent::AdvanceRequested);
        }
    }
}
