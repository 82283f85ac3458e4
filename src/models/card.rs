/// Intrinsic size of a card in content-relative units.
///
/// Sizes are scaled uniformly by a single factor, so only the ratio and the
/// magnitude relative to other cards matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

impl CardSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Smallest cell a deck may use: one unit per axis.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    /// Component-wise maximum of two sizes.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardItem {
    /// Position in the deck, fixed for the lifetime of a session.
    pub index: usize,
    pub name: String,
    pub size: CardSize,
}

impl CardItem {
    pub fn new(index: usize, name: impl Into<String>, size: CardSize) -> Self {
        Self {
            index,
            name: name.into(),
            size,
        }
    }
}
