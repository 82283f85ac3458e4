// Selection state for the card viewer
//
// Two views exist:
// - AllItems: every card in the grid (initial)
// - Showing(i): card i enlarged
//
// Activating a card in the grid shows it; activating anything while a card
// is shown returns to the grid.

use crate::error::CardsError;
use crate::models::{Frame, ViewKind};

/// Which cards are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// All cards in the selection grid.
    #[default]
    AllItems,
    /// A single card, by deck index.
    Showing(usize),
}

impl SelectionState {
    /// Applies a click or tap on the card at `index`.
    ///
    /// While showing a single card the index is ignored.
    pub const fn on_activate(self, index: usize) -> Self {
        match self {
            Self::AllItems => Self::Showing(index),
            Self::Showing(_) => Self::AllItems,
        }
    }

    pub fn view(&self) -> ViewKind {
        match self {
            Self::AllItems => ViewKind::Selection,
            Self::Showing(_) => ViewKind::Current,
        }
    }

    /// The card shown on its own, if any.
    pub fn shown(&self) -> Option<usize> {
        match self {
            Self::AllItems => None,
            Self::Showing(index) => Some(*index),
        }
    }
}

/// Receiver of card activations.
///
/// The rendering layer reports which card was clicked as plain data instead
/// of binding one callback per card. Every accepted activation re-renders
/// once and returns the new frame.
pub trait ActivationHandler {
    fn on_activate(&mut self, index: usize) -> Result<Frame, CardsError>;
}
