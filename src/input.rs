use glam::Vec2;

/// Last-known pointer position in viewport pixels. Both fields stay `None`
/// until the first pointer event and are never reset afterwards.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PointerState {
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = Some(x);
        self.y = Some(y);
    }

    pub fn position(&self) -> Option<Vec2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// Viewport dimensions in CSS pixels, updated on resize. Guards against
/// zero sizes from a not-yet-laid-out container.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}
