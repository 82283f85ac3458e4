use tracing::{debug, trace};

use crate::models::{CardSize, GridFit, Viewport};

/// Configuration for the grid fitting algorithm.
///
/// All cards share one cell. The solver looks for the largest uniform scale
/// at which every card still gets a cell, then drops columns the grid does
/// not need so the result is closer to square.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Padding added to every cell in pixels (default: 5)
    pub gap: f64,
    /// Upper bound on doubling steps and, separately, on halving steps (default: 100)
    pub max_iterations: u32,
    /// Bisection steps once the scale is bracketed (default: 10)
    pub refine_steps: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            gap: 5.0,
            max_iterations: 100,
            refine_steps: 10,
        }
    }
}

impl GridLayout {
    pub fn new(gap: f64, max_iterations: u32, refine_steps: u32) -> Self {
        Self {
            gap,
            max_iterations,
            refine_steps,
        }
    }

    pub fn with_gap(gap: f64) -> Self {
        Self {
            gap,
            ..Default::default()
        }
    }

    /// Whole-pixel pitch of a cell along one axis. Never rounds up.
    fn cell_pitch(&self, extent: f64, scale: f64) -> f64 {
        (extent * scale + self.gap).floor()
    }

    /// Number of cells of `cell` at `scale` that fit into `viewport`.
    pub fn capacity(&self, viewport: Viewport, cell: CardSize, scale: f64) -> u64 {
        let cols = cells_along(viewport.width, self.cell_pitch(cell.width, scale));
        let rows = cells_along(viewport.height, self.cell_pitch(cell.height, scale));
        cols.saturating_mul(rows)
    }

    /// Finds the largest scale at which `count` cells fit.
    ///
    /// # Algorithm
    /// 1. Starting at 1, double while the capacity still suffices.
    /// 2. Halve while the capacity does not suffice.
    /// 3. Bisect between the last sufficient scale and twice that scale.
    ///
    /// Steps 1 and 2 are bounded by `max_iterations` each, step 3 runs
    /// `refine_steps` times. The sufficient lower bound is returned, so the
    /// result is best-effort (but finite work) for degenerate geometry.
    pub fn fit_scale(&self, viewport: Viewport, cell: CardSize, count: usize) -> f64 {
        let count = count as u64;
        let fits = |scale: f64| self.capacity(viewport, cell, scale) >= count;

        let mut scale = 1.0f64;
        let mut grown = 0u32;
        while grown < self.max_iterations && fits(scale) {
            scale *= 2.0;
            grown += 1;
        }

        let mut shrunk = 0u32;
        while shrunk < self.max_iterations && !fits(scale) {
            scale /= 2.0;
            shrunk += 1;
        }
        trace!(grown, shrunk, scale, "Bracketed grid scale");

        let mut high = 2.0 * scale;
        for _ in 0..self.refine_steps {
            let mid = (scale + high) / 2.0;
            if fits(mid) {
                scale = mid;
            } else {
                high = mid;
            }
        }

        scale
    }

    /// Computes the grid for `count` cards of size `cell` in `viewport`.
    pub fn compute(&self, viewport: Viewport, cell: CardSize, count: usize) -> GridFit {
        let scale = self.fit_scale(viewport, cell, count);

        let cell_width = self.cell_pitch(cell.width, scale);
        let cell_height = self.cell_pitch(cell.height, scale);
        let raw_cols = cells_along(viewport.width, cell_width);
        let rows = cells_along(viewport.height, cell_height);
        let cols = trim_columns(raw_cols, rows, count as u64);

        let origin_x = ((viewport.width - cell_width * cols as f64) / 2.0).floor();
        let origin_y = ((viewport.height - cell_height * rows as f64) / 2.0).floor();

        debug!(
            count,
            scale,
            cols,
            rows,
            trimmed = raw_cols - cols,
            "Computed grid layout"
        );

        GridFit {
            scale,
            cell_width,
            cell_height,
            cols,
            rows,
            origin_x,
            origin_y,
        }
    }
}

/// How many cells of `pitch` fit along `extent`, rounded down.
///
/// A non-positive extent holds nothing. A zero pitch on a positive extent
/// holds unboundedly many cells, which saturates.
fn cells_along(extent: f64, pitch: f64) -> u64 {
    if extent.is_nan() || extent <= 0.0 {
        return 0;
    }
    let cells = (extent / pitch).floor();
    if cells.is_nan() || cells <= 0.0 {
        0
    } else {
        cells as u64
    }
}

/// Removes columns while `(cols - 1) * rows >= count`. Rows are kept.
///
/// Equivalent to dropping one column at a time, without looping over a
/// possibly saturated column count.
fn trim_columns(cols: u64, rows: u64, count: u64) -> u64 {
    if rows == 0 {
        return cols;
    }
    cols.min(count.div_ceil(rows))
}
