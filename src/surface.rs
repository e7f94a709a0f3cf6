//! The drawing interface the simulation renders through.

use crate::color::Rgb;

/// A 2D canvas that only receives draw calls; pixels are never read back.
pub trait Surface {
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_fill_color(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Alpha(f64),
    Color(Rgb),
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { x: f64, y: f64, radius: f64 },
}

/// Headless surface that keeps every call it receives.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Circle { x, y, radius } => Some((x, y, radius)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Rect {
                x,
                y,
                width,
                height,
            } => Some((x, y, width, height)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn set_global_alpha(&mut self, alpha: f64) {
        self.calls.push(DrawCall::Alpha(alpha));
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Color(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(DrawCall::Circle { x, y, radius });
    }
}
