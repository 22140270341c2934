use crate::error::AssemblyError;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a composition root.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssemblyState {
    Unassembled = 0,
    Assembling = 1,
    Assembled = 2,
}

impl AssemblyState {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Unassembled,
            1 => Self::Assembling,
            _ => Self::Assembled,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unassembled => "unassembled",
            Self::Assembling => "assembling",
            Self::Assembled => "assembled",
        }
    }
}

impl fmt::Display for AssemblyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared view of the assembly state, held by the assembler and every sender it creates.
///
/// Only the assembler moves it forward; the state never goes back.
#[derive(Debug, Clone, Default)]
pub struct AssemblyGate {
    state: Arc<AtomicU8>,
}

impl AssemblyGate {
    #[must_use]
    pub fn state(&self) -> AssemblyState {
        AssemblyState::from_u8(self.state.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn is_assembled(&self) -> bool {
        self.state() == AssemblyState::Assembled
    }

    /// # Errors
    /// [`AssemblyError::NotYetComposed`] unless the gate reads `Assembled`.
    pub fn ensure_assembled(&self, sender: &str) -> Result<(), AssemblyError> {
        match self.state() {
            AssemblyState::Assembled => Ok(()),
            state => Err(AssemblyError::NotYetComposed {
                sender: sender.to_owned().into(),
                state,
                context: None,
            }),
        }
    }

    /// Moves `from -> to`; fails with the observed state when the gate was elsewhere.
    pub(crate) fn advance(&self, from: AssemblyState, to: AssemblyState) -> Result<(), AssemblyState> {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(AssemblyState::from_u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unassembled_and_only_moves_forward() {
        let gate = AssemblyGate::default();
        assert_eq!(gate.state(), AssemblyState::Unassembled);

        gate.advance(AssemblyState::Unassembled, AssemblyState::Assembling).unwrap();
        assert_eq!(
            gate.advance(AssemblyState::Unassembled, AssemblyState::Assembling),
            Err(AssemblyState::Assembling)
        );

        gate.advance(AssemblyState::Assembling, AssemblyState::Assembled).unwrap();
        assert!(gate.is_assembled());
        assert!(gate.ensure_assembled("alarm").is_ok());
    }

    #[test]
    fn clones_observe_the_same_state() {
        let gate = AssemblyGate::default();
        let seen_by_sender = gate.clone();

        let err = seen_by_sender.ensure_assembled("alarm").unwrap_err();
        assert_eq!(err.kind(), "NotYetComposed");

        gate.advance(AssemblyState::Unassembled, AssemblyState::Assembling).unwrap();
        gate.advance(AssemblyState::Assembling, AssemblyState::Assembled).unwrap();
        assert!(seen_by_sender.is_assembled());
    }
}
