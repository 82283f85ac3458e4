use crate::deck::CardDeck;
use crate::models::{Frame, Placement, Viewport, ViewKind};
use crate::selection::SelectionState;

use super::grid::GridLayout;
use super::single::compute_single;

/// Lays out the deck for the given selection state.
///
/// The whole frame is recomputed from its inputs; nothing is carried over
/// from earlier renders. A `Showing` index is not checked against the deck.
pub fn render(
    state: SelectionState,
    viewport: Viewport,
    deck: &CardDeck,
    layout: &GridLayout,
) -> Frame {
    let cell = deck.cell_size();

    match state {
        SelectionState::AllItems => {
            let grid = layout.compute(viewport, cell, deck.len());
            let placements = deck
                .cards()
                .iter()
                .map(|card| {
                    let (x, y) = grid.position(card.index);
                    Placement {
                        index: card.index,
                        x,
                        y,
                        scale: grid.scale,
                        is_single: false,
                    }
                })
                .collect();

            Frame {
                view: ViewKind::Selection,
                placements,
                grid: Some(grid),
                single: None,
            }
        }
        SelectionState::Showing(index) => {
            let single = compute_single(viewport, cell);
            Frame {
                view: ViewKind::Current,
                placements: vec![Placement {
                    index,
                    x: single.origin_x,
                    y: single.origin_y,
                    scale: single.scale,
                    is_single: true,
                }],
                grid: None,
                single: Some(single),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardSize;

    fn deck(count: usize) -> CardDeck {
        CardDeck::from_sizes((0..count).map(|_| CardSize::new(100.0, 150.0))).unwrap()
    }

    #[test]
    fn test_selection_places_every_card_row_major() {
        let frame = render(
            SelectionState::AllItems,
            Viewport::new(1000.0, 600.0),
            &deck(4),
            &GridLayout::default(),
        );

        assert_eq!(frame.view, ViewKind::Selection);
        assert!(frame.single.is_none());
        let xs: Vec<f64> = frame.placements.iter().map(|p| p.x).collect();
        assert_eq!(xs, [0.0, 250.0, 500.0, 750.0]);
        assert!(frame.placements.iter().all(|p| p.y == 113.0));
        assert!(frame.placements.iter().all(|p| !p.is_single));
        assert_eq!(frame.scale(), 2.458984375);
    }

    #[test]
    fn test_selection_wraps_rows() {
        let frame = render(
            SelectionState::AllItems,
            Viewport::new(600.0, 600.0),
            &CardDeck::from_sizes((0..4).map(|_| CardSize::new(100.0, 100.0))).unwrap(),
            &GridLayout::with_gap(0.0),
        );

        let grid = frame.grid.unwrap();
        assert_eq!((grid.cols, grid.rows), (2, 2));
        let positions: Vec<(f64, f64)> = frame.placements.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            positions,
            [(0.0, 0.0), (300.0, 0.0), (0.0, 300.0), (300.0, 300.0)]
        );
    }

    #[test]
    fn test_showing_places_one_card() {
        let frame = render(
            SelectionState::Showing(2),
            Viewport::new(400.0, 1000.0),
            &deck(4),
            &GridLayout::default(),
        );

        assert_eq!(frame.view, ViewKind::Current);
        assert!(frame.grid.is_none());
        assert_eq!(frame.placements.len(), 1);
        let placement = frame.placements[0];
        assert_eq!(placement.index, 2);
        assert!(placement.is_single);
        assert_eq!((placement.x, placement.y), (0.0, 200.0));
        assert_eq!(placement.scale, 4.0);
    }

    #[test]
    fn test_uses_largest_card_as_cell() {
        let deck = CardDeck::from_sizes([CardSize::new(50.0, 150.0), CardSize::new(100.0, 75.0)])
            .unwrap();
        let frame = render(
            SelectionState::Showing(0),
            Viewport::new(400.0, 1000.0),
            &deck,
            &GridLayout::default(),
        );
        assert_eq!(frame.scale(), 4.0);
    }
}
