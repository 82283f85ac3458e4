use thiserror::Error;

/// Errors raised by the card session.
///
/// Degenerate geometry is not an error: the layout solver always produces a
/// best-effort result. Only missing preconditions and rejected input end up
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// The environment did not provide a viewport to lay cards out in.
    #[error("no viewport available to lay out cards")]
    NoViewport,
    /// The deck has no cards.
    #[error("no cards in deck")]
    NoCards,
    /// A card was activated that is not part of the deck.
    #[error("card index {index} out of range for deck of {count}")]
    IndexOutOfRange { index: usize, count: usize },
}
