use tracing::debug;

use crate::models::{CardSize, SingleFit, Viewport};

/// Fits one card into the whole viewport, preserving its aspect ratio.
///
/// No gap is applied since the card has no neighbours. The scaled size is
/// floored to whole pixels before centering.
pub fn compute_single(viewport: Viewport, card: CardSize) -> SingleFit {
    let scale = (viewport.width / card.width).min(viewport.height / card.height);
    let width = (card.width * scale).floor();
    let height = (card.height * scale).floor();
    let origin_x = ((viewport.width - width) / 2.0).floor();
    let origin_y = ((viewport.height - height) / 2.0).floor();

    debug!(scale, width, height, "Computed single card layout");

    SingleFit {
        scale,
        width,
        height,
        origin_x,
        origin_y,
    }
}
