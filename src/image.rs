//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
#[cfg(any(feature = "builder", feature = "png_source"))]
use png::{BitDepth, ColorType, Decoder, Transformations};
#[cfg(any(feature = "builder", feature = "png_source"))]
use std::io::Cursor;

use crate::{Color, Dimensioni, Error, Result};

/// Owned 8-bit RGBA pixel buffer, row major.
///
/// Used by [`crate::Canvas`] as its image type, and by hosts that want to feed
/// `image()`/`image_button()` without a platform texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl RgbaImage {
    /// Wraps raw RGBA bytes, four per pixel.
    pub fn from_rgba(width: i32, height: i32, bytes: &[u8]) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::Image(format!("dimensions must be positive, got {}x{}", width, height)));
        }
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::Image(format!("expected {} RGBA bytes, found {}", expected, bytes.len())));
        }
        let pixels = bytes.chunks_exact(4).map(|c| Color { r: c[0], g: c[1], b: c[2], a: c[3] }).collect();
        Ok(Self { width, height, pixels })
    }

    /// Image of `width` x `height` pixels all set to `color`.
    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self { width, height, pixels: vec![color; width as usize * height as usize] }
    }

    /// Decodes a PNG. Grayscale and RGB inputs are expanded to opaque RGBA.
    #[cfg(any(feature = "builder", feature = "png_source"))]
    pub fn from_png(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let mut decoder = Decoder::new(&mut cursor);
        decoder.set_transformations(Transformations::normalize_to_color8());
        let mut reader = decoder.read_info().map_err(|e| Error::Image(format!("PNG decode error: {}", e)))?;
        let buf_size = reader.output_buffer_size().ok_or_else(|| Error::Image("PNG decoder did not report output size".into()))?;
        let mut data = vec![0; buf_size];
        let info = reader.next_frame(&mut data).map_err(|e| Error::Image(format!("PNG decode error: {}", e)))?;

        if info.bit_depth != BitDepth::Eight {
            return Err(Error::Image(format!("unsupported PNG bit depth: {:?}", info.bit_depth)));
        }
        let pixel_size = match info.color_type {
            ColorType::Grayscale | ColorType::Indexed => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        };

        let mut pixels = Vec::with_capacity((info.width * info.height) as usize);
        for line in data.chunks(info.line_size).take(info.height as usize) {
            for px in line.chunks_exact(pixel_size).take(info.width as usize) {
                let color = match info.color_type {
                    ColorType::Grayscale => Color { r: px[0], g: px[0], b: px[0], a: 0xff },
                    ColorType::GrayscaleAlpha => Color { r: px[0], g: px[0], b: px[0], a: px[1] },
                    ColorType::Indexed => return Err(Error::Image("indexed PNGs are not supported".into())),
                    ColorType::Rgb => Color { r: px[0], g: px[1], b: px[2], a: 0xff },
                    ColorType::Rgba => Color { r: px[0], g: px[1], b: px[2], a: px[3] },
                };
                pixels.push(color);
            }
        }
        tracing::debug!(width = info.width, height = info.height, "decoded png");
        Ok(Self { width: info.width as i32, height: info.height as i32, pixels })
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 { self.width }

    /// Height in pixels.
    pub fn height(&self) -> i32 { self.height }

    /// Extents in the form renderers report them.
    pub fn size(&self) -> Dimensioni { Dimensioni::new(self.width, self.height) }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// All pixels, row major.
    pub fn pixels(&self) -> &[Color] { &self.pixels }
}
