//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while driving a story session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The input did not match any offered option.
    #[error("invalid selection '{input}': choose a number between 1 and {count}")]
    InvalidSelection {
        /// The rejected input line.
        input: String,
        /// How many options were on offer.
        count: usize,
    },

    /// An empty name was submitted at the name beat.
    #[error("a hero needs a name, even a borrowed one")]
    NameRequired,

    /// Input was submitted after the terminal beat.
    #[error("the story has already ended")]
    SessionFinished,

    /// The epilogue was requested before the terminal beat.
    #[error("the story is not over yet")]
    EpiloguePending,
}
