//! Fits a deck of cards into a viewport.
//!
//! All cards are shown in a grid at the largest scale that still fits every
//! one of them, or a single card is shown enlarged. Clicking toggles between
//! the two views.

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod image_loader;
pub mod layout;
pub mod models;
pub mod selection;
pub mod session;

pub use deck::CardDeck;
pub use error::CardsError;
pub use layout::{compute_grid, compute_single, render, GridLayout};
pub use models::{CardItem, CardSize, Frame, GridFit, Placement, SingleFit, ViewKind, Viewport};
pub use selection::{ActivationHandler, SelectionState};
pub use session::CardSession;
