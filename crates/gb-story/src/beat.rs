//! The linear story path.

use serde::{Deserialize, Serialize};

/// A named stage of the story.
///
/// Each beat has exactly one successor; the path is finite, acyclic, and
/// visits no beat twice. `Epilogue` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beat {
    /// Free-text name capture.
    Name,
    /// World selection.
    World,
    /// Origin selection.
    Origin,
    /// Blessing selection.
    Power,
    /// Legacy selection.
    Legacy,
    /// The nth authored story event (0-based).
    Event(usize),
    /// Terminal beat: the epilogue is available.
    Epilogue,
}

impl Beat {
    /// The successor beat, given how many events the story has.
    pub fn next(self, event_count: usize) -> Self {
        match self {
            Self::Name => Self::World,
            Self::World => Self::Origin,
            Self::Origin => Self::Power,
            Self::Power => Self::Legacy,
            Self::Legacy if event_count == 0 => Self::Epilogue,
            Self::Legacy => Self::Event(0),
            Self::Event(index) if index + 1 < event_count => Self::Event(index + 1),
            Self::Event(_) => Self::Epilogue,
            Self::Epilogue => Self::Epilogue,
        }
    }

    /// Whether this is the terminal beat.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Epilogue)
    }
}

impl std::fmt::Display for Beat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::World => write!(f, "World"),
            Self::Origin => write!(f, "Origin"),
            Self::Power => write!(f, "Blessing"),
            Self::Legacy => write!(f, "Legacy"),
            Self::Event(index) => write!(f, "Event {}", index + 1),
            Self::Epilogue => write!(f, "Epilogue"),
        }
    }
}
