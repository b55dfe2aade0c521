//! Core data model for Wordspine puzzles.
//!
//! A Wordspine level is a stack of horizontal answer words, each starting at
//! a fixed column of its own row. Reading the letter at each word's starting
//! column from top to bottom spells the level's vertical word (the "spine").
//!
//! This crate holds the immutable level description, the coordinate and
//! letter value types, and the sparse grid of player-entered answers. It
//! performs no I/O and emits no events; validation and session control live
//! in `wordspine-game`.

pub use self::{
    answers::AnswerGrid,
    cell::Cell,
    letter::Letter,
    level::{
        Difficulty, HorizontalWord, Level, LevelError, Points, VerticalWord, WordSpan,
    },
};

mod answers;
mod cell;
mod letter;
mod level;
