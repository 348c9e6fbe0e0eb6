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
use fontdue::{Font, FontSettings};

use crate::{Dimensioni, Error, Result};

/// Text measurement backed by a TrueType/OpenType font.
///
/// Widget scales are relative: a scale of `1.0` renders at `pixels_per_unit`
/// pixels, so the default button scale of `0.4` with 22 px per unit gives
/// roughly 9 px tall glyphs.
pub struct FontMetrics {
    font: Font,
    pixels_per_unit: f32,
}

impl FontMetrics {
    /// Parses font data.
    pub fn from_bytes(data: &[u8], pixels_per_unit: f32) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|e| Error::Font(e.to_string()))?;
        Ok(Self { font, pixels_per_unit })
    }

    /// Loads a font file from disk.
    pub fn load(path: &str, pixels_per_unit: f32) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| Error::Font(format!("cannot read font file '{}': {}", path, e)))?;
        Self::from_bytes(&data, pixels_per_unit)
    }

    /// Pixel size used for `scale`.
    pub fn pixel_size(&self, scale: f64) -> f32 { self.pixels_per_unit * scale as f32 }

    /// Advance width of `text` and ascent above the baseline.
    pub fn text_size(&self, text: &str, scale: f64) -> Dimensioni {
        let px = self.pixel_size(scale);
        let width: f32 = text.chars().map(|c| self.font.metrics(c, px).advance_width).sum();
        let height = self.font.horizontal_line_metrics(px).map(|m| m.ascent).unwrap_or(px);
        Dimensioni::new(width.round() as i32, height.round() as i32)
    }
}
