use tracing::{debug, info, warn};

use crate::deck::CardDeck;
use crate::error::CardsError;
use crate::layout::{render, GridLayout};
use crate::models::{Frame, ViewportSource};
use crate::selection::{ActivationHandler, SelectionState};

/// One viewing session over a fixed deck.
///
/// Owns the selection state and re-renders on every activation and resize.
/// The viewport is asked for its size on each render.
#[derive(Debug)]
pub struct CardSession<V: ViewportSource> {
    deck: CardDeck,
    viewport: V,
    layout: GridLayout,
    state: SelectionState,
    renders: u64,
}

impl<V: ViewportSource> CardSession<V> {
    /// Starts a session, failing if there is nothing to draw into.
    pub fn new(deck: CardDeck, viewport: V, layout: GridLayout) -> Result<Self, CardsError> {
        if viewport.viewport().is_none() {
            return Err(CardsError::NoViewport);
        }
        if deck.is_empty() {
            return Err(CardsError::NoCards);
        }

        info!("Starting card session with {} cards", deck.len());
        Ok(Self {
            deck,
            viewport,
            layout,
            state: SelectionState::default(),
            renders: 0,
        })
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn viewport_source(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport, e.g. to apply a resize before
    /// calling `on_resize`.
    pub fn viewport_source_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Number of frames rendered so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Lays out the deck for the current state and viewport.
    pub fn render(&mut self) -> Result<Frame, CardsError> {
        let viewport = self.viewport.viewport().ok_or(CardsError::NoViewport)?;
        let frame = render(self.state, viewport, &self.deck, &self.layout);
        self.renders += 1;
        debug!(
            render = self.renders,
            view = ?frame.view,
            width = viewport.width,
            height = viewport.height,
            scale = frame.scale(),
            "Rendered frame"
        );
        Ok(frame)
    }

    /// Re-renders after the viewport changed. The state is left alone.
    pub fn on_resize(&mut self) -> Result<Frame, CardsError> {
        self.render()
    }
}

impl<V: ViewportSource> ActivationHandler for CardSession<V> {
    fn on_activate(&mut self, index: usize) -> Result<Frame, CardsError> {
        if self.state == SelectionState::AllItems && index >= self.deck.len() {
            warn!(index, "Ignoring activation of unknown card");
            return Err(CardsError::IndexOutOfRange {
                index,
                count: self.deck.len(),
            });
        }

        self.state = self.state.on_activate(index);
        match self.state.shown() {
            Some(shown) => info!("Showing card {}", shown),
            None => info!("Returning to card selection"),
        }
        self.render()
    }
}
