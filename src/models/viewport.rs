/// Drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Source of the current viewport size.
///
/// Queried on every render; implementations must not hand out a cached size
/// that predates the last resize.
pub trait ViewportSource {
    /// Returns `None` when there is nothing to draw into.
    fn viewport(&self) -> Option<Viewport>;
}

/// A viewport whose size is set explicitly, e.g. from replayed resize events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    size: Option<Viewport>,
}

impl FixedViewport {
    pub fn new(size: Viewport) -> Self {
        Self { size: Some(size) }
    }

    /// A source that never yields a viewport.
    pub fn missing() -> Self {
        Self { size: None }
    }

    pub fn resize(&mut self, size: Viewport) {
        self.size = Some(size);
    }
}

impl ViewportSource for FixedViewport {
    fn viewport(&self) -> Option<Viewport> {
        self.size
    }
}
