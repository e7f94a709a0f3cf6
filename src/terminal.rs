//! Half-block terminal canvas.
//!
//! Each terminal cell shows two vertically stacked pixels: the background
//! color paints the upper one and the foreground color of `▄` the lower one.
//! Simulation coordinates are divided by `scale` before they reach a pixel.

use std::io::{self, Write};

use crate::color::Rgb;
use crate::surface::Surface;

pub struct TerminalSurface {
    width: usize,
    height: usize,
    scale: f64,
    pixels: Vec<[f32; 3]>,
    alpha: f32,
    fill: [f32; 3],
    output_buf: Vec<u8>,
}

fn to_channels(color: Rgb) -> [f32; 3] {
    [f32::from(color.0), f32::from(color.1), f32::from(color.2)]
}

fn to_rgb(channels: [f32; 3]) -> Rgb {
    let c = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    (c(channels[0]), c(channels[1]), c(channels[2]))
}

impl TerminalSurface {
    pub fn new(cols: usize, rows: usize, scale: f64, background: Rgb) -> Self {
        let width = cols;
        let height = rows * 2;
        Self {
            width,
            height,
            scale,
            pixels: vec![to_channels(background); width * height],
            alpha: 1.0,
            fill: [0.0; 3],
            output_buf: Vec::with_capacity(width * height * 25),
        }
    }

    /// Canvas size in simulation units.
    pub fn virtual_size(&self) -> (f64, f64) {
        (self.width as f64 * self.scale, self.height as f64 * self.scale)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| to_rgb(self.pixels[y * self.width + x]))
    }

    fn blend(&mut self, x: usize, y: usize) {
        let a = self.alpha;
        let px = &mut self.pixels[y * self.width + x];
        for (channel, fill) in px.iter_mut().zip(self.fill) {
            *channel = *channel * (1.0 - a) + fill * a;
        }
    }

    /// Pixel span covering `[start, end)` in simulation units, clipped to `limit`.
    fn span(&self, start: f64, end: f64, limit: usize) -> std::ops::Range<usize> {
        let lo = (start / self.scale).floor().max(0.0) as usize;
        let hi = (end / self.scale).ceil().clamp(0.0, limit as f64) as usize;
        lo.min(hi)..hi
    }

    pub fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_top: Option<Rgb> = None;
        let mut prev_bot: Option<Rgb> = None;

        for y in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let top = to_rgb(self.pixels[y * self.width + x]);
                let bot = if y + 1 < self.height {
                    to_rgb(self.pixels[(y + 1) * self.width + x])
                } else {
                    top
                };

                if prev_top != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = Some(top);
                }
                if prev_bot != Some(bot) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = Some(bot);
                }
                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top = None;
            prev_bot = None;
            if y + 2 < self.height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0) as f32;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = to_channels(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let xs = self.span(x, x + width, self.width);
        let ys = self.span(y, y + height, self.height);
        for py in ys {
            for px in xs.clone() {
                self.blend(px, py);
            }
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        let cx = x / self.scale;
        let cy = y / self.scale;
        let r = radius / self.scale;

        let mut hit = false;
        let xs = self.span(x - radius, x + radius, self.width);
        let ys = self.span(y - radius, y + radius, self.height);
        for py in ys {
            for px in xs.clone() {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(px, py);
                    hit = true;
                }
            }
        }

        // Dots smaller than a pixel still light the pixel they sit in.
        if !hit && cx >= 0.0 && cy >= 0.0 {
            let (px, py) = (cx as usize, cy as usize);
            if px < self.width && py < self.height {
                self.blend(px, py);
            }
        }
    }
}
