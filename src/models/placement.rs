/// Which of the two views a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// All cards in a grid.
    Selection,
    /// A single enlarged card.
    Current,
}

impl ViewKind {
    /// Class names given to the container of each placed card.
    pub fn container_class(&self) -> &'static str {
        match self {
            Self::Selection => "card-container card-selection",
            Self::Current => "card-container card-current",
        }
    }
}

/// Result of fitting a deck into a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit {
    pub scale: f64,
    /// Pixel pitch of one cell, gap included.
    pub cell_width: f64,
    pub cell_height: f64,
    pub cols: u64,
    pub rows: u64,
    /// Top-left corner of the centered grid.
    pub origin_x: f64,
    pub origin_y: f64,
}

impl GridFit {
    /// Grid column and row of the card at `index` (row-major).
    pub fn cell_of(&self, index: usize) -> (u64, u64) {
        let index = index as u64;
        if self.cols == 0 {
            return (0, index);
        }
        (index % self.cols, index / self.cols)
    }

    /// Pixel position of the card at `index`.
    pub fn position(&self, index: usize) -> (f64, f64) {
        let (col, row) = self.cell_of(index);
        (
            self.origin_x + col as f64 * self.cell_width,
            self.origin_y + row as f64 * self.cell_height,
        )
    }

    pub fn capacity(&self) -> u64 {
        self.cols.saturating_mul(self.rows)
    }
}

/// Result of fitting one card into the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleFit {
    pub scale: f64,
    /// Scaled card size, floored to whole pixels.
    pub width: f64,
    pub height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Where and how large one card is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub is_single: bool,
}

impl Placement {
    /// Scale expressed as a font size, for content sized in em.
    pub fn font_size_percent(&self) -> f64 {
        100.0 * self.scale
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub view: ViewKind,
    pub placements: Vec<Placement>,
    pub grid: Option<GridFit>,
    pub single: Option<SingleFit>,
}

impl Frame {
    pub fn scale(&self) -> f64 {
        match (&self.grid, &self.single) {
            (Some(grid), _) => grid.scale,
            (None, Some(single)) => single.scale,
            (None, None) => 0.0,
        }
    }
}
