/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centers a `w`x`h` block, pinned to 0 when it does not fit.
    pub fn centered_origin(&self, w: u16, h: u16) -> (u16, u16) {
        (
            self.width.saturating_sub(w) / 2,
            self.height.saturating_sub(h) / 2,
        )
    }
}

impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}
