#![forbid(unsafe_code)]

//! Engine lifecycle state.
//!
//! The host environment may try to inject the styling engine into the same
//! document more than once. Rather than a free-floating module flag, the
//! guard is an explicit state value owned by the engine and checked once at
//! construction.

/// Lifecycle state of a styling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    /// No engine has been constructed for the document yet.
    #[default]
    Uninitialized,
    /// The engine is constructed and may accept styling requests.
    Ready,
}

impl EngineState {
    /// Check whether the engine may accept requests.
    #[inline]
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uninitialized() {
        assert_eq!(EngineState::default(), EngineState::Uninitialized);
        assert!(!EngineState::default().is_ready());
    }

    #[test]
    fn ready_is_ready() {
        assert!(EngineState::Ready.is_ready());
    }
}
