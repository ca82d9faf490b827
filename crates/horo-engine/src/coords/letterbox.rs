/// Drawable window size in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport for a surface of `width` x `height` physical pixels.
    #[inline]
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Destination rectangle of the canvas inside the window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[inline]
    pub fn min(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Bottom-right corner, exclusive.
    #[inline]
    pub fn max(self) -> [f32; 2] {
        [self.x + self.width, self.y + self.height]
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Places a `content_w` x `content_h` canvas centered in `target`, as large
    /// as fits while keeping its aspect ratio.
    ///
    /// When the target is at least as large as the canvas the scale is a
    /// whole number so every canvas pixel maps to the same block size. The
    /// origin is snapped to whole pixels.
    pub fn fit_centered(content_w: u32, content_h: u32, target: Viewport) -> Rect {
        if content_w == 0 || content_h == 0 || !target.is_valid() {
            return Rect::default();
        }

        let cw = content_w as f32;
        let ch = content_h as f32;
        let fit = (target.width / cw).min(target.height / ch);
        let scale = if fit >= 1.0 { fit.floor() } else { fit };

        let (width, height) = (cw * scale, ch * scale);
        Rect {
            x: ((target.width - width) / 2.0).floor(),
            y: ((target.height - height) / 2.0).floor(),
            width,
            height,
        }
    }
}
