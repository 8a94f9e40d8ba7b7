// Math utilities: boxes and transforms

use glam::Vec2;

/// Axis-aligned rectangle stored as top-left corner plus size.
/// Y grows downward (screen space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Shrink the rectangle around its center by the given factors
    pub fn narrowed(&self, width_factor: f32, height_factor: f32) -> Self {
        Self::centered(
            self.center(),
            self.width * width_factor,
            self.height * height_factor,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if the two boxes share some horizontal span (touching edges don't count)
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// True if the two boxes share some vertical span (touching edges don't count)
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() > other.top() && self.top() < other.bottom()
    }
}

/// Position and signed scale of something drawn on screen.
///
/// The position is the sprite's anchor (its center). A negative `scale.x`
/// mirrors the sprite horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub scale: Vec2,
}

impl Transform {
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self { position, scale }
    }

    /// Size of a sprite frame once this transform's scale is applied
    pub fn scaled_size(&self, frame_width: f32, frame_height: f32) -> Vec2 {
        Vec2::new(
            frame_width * self.scale.x.abs(),
            frame_height * self.scale.y.abs(),
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE)
    }
}
