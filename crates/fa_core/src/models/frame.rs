//! # Frame Buffers
//!
//! Row-major interleaved RGB pixel buffers and the `FrameSource` seam the
//! team classifier reads pixels through.

use super::color::Rgb;
use super::tracks::BBox;
use crate::error::{AnalysisError, Result};

/// Row-major RGB8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Wrap a raw buffer; `data.len()` must equal `width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(AnalysisError::InvalidFrame {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Paint a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, bbox: BBox, color: Rgb) {
        let (x0, x1) = clip_span(bbox.x1, bbox.x2, self.width);
        let (y0, y1) = clip_span(bbox.y1, bbox.y2, self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let i = (y * self.width + x) * 3;
                self.data[i..i + 3].copy_from_slice(&color);
            }
        }
    }

    /// Pixels inside `bbox`, clipped to the frame. Coordinates are truncated.
    pub fn crop(&self, bbox: BBox) -> PixelRegion {
        let (x0, x1) = clip_span(bbox.x1, bbox.x2, self.width);
        let (y0, y1) = clip_span(bbox.y1, bbox.y2, self.height);

        let mut pixels = Vec::with_capacity((x1 - x0) * (y1 - y0));
        for y in y0..y1 {
            for x in x0..x1 {
                pixels.push(self.pixel(x, y));
            }
        }
        PixelRegion {
            width: x1 - x0,
            height: y1 - y0,
            pixels,
        }
    }
}

fn clip_span(lo: f32, hi: f32, limit: usize) -> (usize, usize) {
    let clip = |v: f32| -> usize {
        if v.is_nan() || v <= 0.0 {
            0
        } else {
            (v as usize).min(limit)
        }
    };
    let a = clip(lo);
    let b = clip(hi);
    (a, b.max(a))
}

/// A rectangular block of pixels cut out of a frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelRegion {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

impl PixelRegion {
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Upper half of the region (rows `0..height/2`).
    pub fn top_half(&self) -> PixelRegion {
        let rows = self.height / 2;
        PixelRegion {
            width: self.width,
            height: rows,
            pixels: self.pixels[..rows * self.width].to_vec(),
        }
    }

    /// Flat indices of top-left, top-right, bottom-left, bottom-right.
    pub fn corner_indices(&self) -> Option<[usize; 4]> {
        if self.is_empty() {
            return None;
        }
        let last_row = (self.height - 1) * self.width;
        Some([0, self.width - 1, last_row, last_row + self.width - 1])
    }
}

/// Access to per-frame pixel buffers by frame index.
pub trait FrameSource {
    fn frame(&self, index: usize) -> Option<&RgbFrame>;
}

impl FrameSource for Vec<RgbFrame> {
    fn frame(&self, index: usize) -> Option<&RgbFrame> {
        self.get(index)
    }
}

/// A single decoded frame, typically the reference frame at index 0.
#[derive(Debug, Clone)]
pub struct SingleFrame {
    pub index: usize,
    pub frame: RgbFrame,
}

impl SingleFrame {
    pub fn reference(frame: RgbFrame) -> Self {
        Self { index: 0, frame }
    }
}

impl FrameSource for SingleFrame {
    fn frame(&self, index: usize) -> Option<&RgbFrame> {
        (index == self.index).then_some(&self.frame)
    }
}

/// No pixels at all; team labels must come from upstream records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFrames;

impl FrameSource for NoFrames {
    fn frame(&self, _index: usize) -> Option<&RgbFrame> {
        None
    }
}
