//! Layout of a card deck inside a viewport.
//!
//! - `grid` - all cards, uniformly scaled, in a centered grid
//! - `single` - one card scaled to fill the viewport
//! - `render` - picks one of the two from the selection state

pub mod grid;
pub mod render;
pub mod single;

pub use grid::GridLayout;
pub use render::render;
pub use single::compute_single;

use crate::models::{CardSize, GridFit, Viewport};

/// Grid layout for `count` cards with a custom gap and default search bounds.
pub fn compute_grid(viewport: Viewport, card: CardSize, count: usize, gap: f64) -> GridFit {
    GridLayout::with_gap(gap).compute(viewport, card, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_grid_uses_gap() {
        let card = CardSize::new(100.0, 100.0);
        let viewport = Viewport::new(600.0, 600.0);
        let tight = compute_grid(viewport, card, 4, 0.0);
        let padded = compute_grid(viewport, card, 4, 20.0);
        assert_eq!((tight.cols, tight.rows), (2, 2));
        assert_eq!(tight.cell_width, 300.0);
        assert!(padded.scale < tight.scale);
    }
}
