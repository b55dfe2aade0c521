//! Game logic for Wordspine puzzles.
//!
//! Built on the data model in `wordspine-core`, this crate provides:
//!
//! - [`Validator`]: per-row and vertical-word correctness over the answer
//!   grid, with completion detection.
//! - [`Selection`]: the current cell and directional/typing navigation.
//! - [`level_score`]: the scoring rule.
//! - [`Session`]: the orchestrating state machine for countdown, hints,
//!   start/pause/resume, and completion sequencing. It consumes normalized
//!   [`Command`]s and emits [`GameEvent`]s through a drained queue; the
//!   rendering collaborator never reaches into game state directly.
//! - [`ProgressStore`]: the completed-levels / cumulative-score record over
//!   a platform key-value store.
//!
//! # Example
//!
//! ```
//! use wordspine_core::{Cell, Level, Letter};
//! use wordspine_game::{Command, Phase, Session};
//!
//! let mut session = Session::new(Level::example());
//! session.start();
//! session.select_cell(Cell::new(0, 0));
//! for c in "cat".chars() {
//!     session.apply(Command::Type(Letter::from_char(c).unwrap()));
//! }
//! session.select_cell(Cell::new(1, 0));
//! for c in "dog".chars() {
//!     session.apply(Command::Type(Letter::from_char(c).unwrap()));
//! }
//! assert_eq!(session.phase(), Phase::Complete);
//! ```

pub use self::{
    progress::{
        COMPLETED_LEVELS_KEY, KeyValueStore, MemoryStore, ProgressStore, StoreError,
        TOTAL_SCORE_KEY,
    },
    score::{format_clock, level_score},
    selection::{Direction, Selection},
    session::{Command, GameEvent, Phase, Session},
    validator::{Validator, VerticalProgress, WordStatus},
};

mod progress;
mod score;
mod selection;
mod session;
mod validator;
