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
use crate::*;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Names a surface recorded by a [`Canvas`], e.g. one per window frame.
pub struct SurfaceId(pub u32);

#[derive(Clone, Debug, PartialEq)]
/// One recorded draw call.
pub enum Command {
    /// Rectangle, filled or outlined.
    Rect {
        /// Target surface.
        surface: SurfaceId,
        /// Bounds.
        rect: Rect,
        /// Paint color.
        color: Color,
        /// Fill mode.
        fill: Fill,
    },
    /// One pixel line.
    Line {
        /// Target surface.
        surface: SurfaceId,
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Paint color.
        color: Color,
    },
    /// Text starting at a baseline position.
    Text {
        /// Target surface.
        surface: SurfaceId,
        /// Drawn string.
        text: String,
        /// Baseline origin.
        pos: Point,
        /// Font scale.
        scale: f64,
        /// Paint color.
        color: Color,
    },
    /// Image copy.
    Image {
        /// Target surface.
        surface: SurfaceId,
        /// Destination rectangle, sized like the source image.
        rect: Rect,
    },
}

impl Command {
    /// Surface the command draws on.
    pub fn surface(&self) -> SurfaceId {
        match self {
            Command::Rect { surface, .. } | Command::Line { surface, .. } | Command::Text { surface, .. } | Command::Image { surface, .. } => *surface,
        }
    }
}

/// Width of one glyph at scale 1 for the built-in monospace metrics.
pub const MONO_ADVANCE: f64 = 20.0;
/// Glyph height at scale 1 for the built-in monospace metrics.
pub const MONO_HEIGHT: f64 = 22.0;

/// Renderer that records every call as a [`Command`].
///
/// Text is measured with fixed monospace metrics unless a font is attached,
/// which keeps layouts reproducible in tests and headless hosts.
#[derive(Default)]
pub struct Canvas {
    commands: Vec<Command>,
    #[cfg(feature = "builder")]
    font: Option<FontMetrics>,
}

impl Canvas {
    /// Creates an empty canvas with monospace metrics.
    pub fn new() -> Self { Self::default() }

    /// Creates an empty canvas that measures text with `font`.
    #[cfg(feature = "builder")]
    pub fn with_font(font: FontMetrics) -> Self { Self { commands: Vec::new(), font: Some(font) } }

    /// Commands recorded since the last [`Canvas::take_commands`].
    pub fn commands(&self) -> &[Command] { &self.commands }

    /// Returns the recorded commands and starts a new recording.
    pub fn take_commands(&mut self) -> Vec<Command> { std::mem::take(&mut self.commands) }

    /// Drops every recorded command.
    pub fn clear(&mut self) { self.commands.clear() }

    /// Every recorded string, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Size of `text` under the monospace metrics.
    pub fn monospace_size(text: &str, scale: f64) -> Dimensioni {
        let count = text.chars().count() as f64;
        Dimensioni::new((count * MONO_ADVANCE * scale).round() as i32, (MONO_HEIGHT * scale).round() as i32)
    }
}

impl Renderer for Canvas {
    type Surface = SurfaceId;
    type Image = RgbaImage;

    fn rectangle(&mut self, surface: &SurfaceId, rect: Rect, color: Color, fill: Fill) {
        self.commands.push(Command::Rect { surface: *surface, rect, color, fill });
    }

    fn line(&mut self, surface: &SurfaceId, from: Point, to: Point, color: Color) {
        self.commands.push(Command::Line { surface: *surface, from, to, color });
    }

    fn text(&mut self, surface: &SurfaceId, text: &str, pos: Point, scale: f64, color: Color) {
        self.commands.push(Command::Text {
            surface: *surface,
            text: text.to_string(),
            pos,
            scale,
            color,
        });
    }

    fn text_size(&self, text: &str, scale: f64) -> Dimensioni {
        #[cfg(feature = "builder")]
        {
            if let Some(font) = &self.font {
                return font.text_size(text, scale);
            }
        }
        Self::monospace_size(text, scale)
    }

    fn image_size(&self, image: &RgbaImage) -> Dimensioni { image.size() }

    fn blit(&mut self, surface: &SurfaceId, image: &RgbaImage, dst: Rect) {
        let rect = Rect::new(dst.x, dst.y, image.width(), image.height());
        self.commands.push(Command::Image { surface: *surface, rect });
    }
}
