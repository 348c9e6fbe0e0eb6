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
#![deny(missing_docs)]
//! `cvui-redux` is an immediate-mode UI layer: the host describes buttons, checkboxes,
//! counters, trackbars, text and images every frame, and the engine answers with their
//! interaction results while laying them out in nested rows and columns.
//!
//! No widget tree is retained. The engine keeps the per-window mouse state and a stack
//! of layout blocks; drawing goes through the [`Renderer`] trait and window events come
//! in through [`ContextHandle`]s handed out by [`Ui::watch`].

mod canvas;
mod context;
mod draw_context;
mod error;
#[cfg(feature = "builder")]
mod font;
mod format;
mod geometry;
mod image;
mod input;
mod interaction;
mod label;
mod layout;
mod ui;
mod widgets;
mod window;

pub use canvas::*;
pub use context::{Context, ContextHandle};
pub use error::{Error, Result};
#[cfg(feature = "builder")]
pub use font::FontMetrics;
pub use format::NumberFormat;
pub use geometry::*;
pub use image::*;
pub use input::*;
pub use interaction::{Status, iarea};
pub use label::{Label, SHORTCUT_MARKER};
pub use layout::{Block, BlockKind};
pub use rs_math3d::{Dimensioni, Recti, Vec2i};
pub use ui::Ui;
pub use widgets::*;
pub use window::WindowSource;

use bitflags::*;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Decodes a `0xTTRRGGBB` color.
    ///
    /// The top byte is transparency rather than opacity, so plain `0xRRGGBB`
    /// literals are opaque and `0xff000000` is fully transparent.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 0xff - ((hex >> 24) & 0xff) as u8,
        }
    }

    /// Returns `true` when nothing would be drawn with this color.
    pub fn is_transparent(&self) -> bool { self.a == 0 }
}

/// Convenience constructor for [`Color`].
pub const fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Convenience constructor for [`Point`].
pub const fn point(x: i32, y: i32) -> Point { Point::new(x, y) }

/// Convenience constructor for [`Rect`].
pub const fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect { Rect::new(x, y, w, h) }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How a rectangle is painted.
pub enum Fill {
    /// Interior filled with the color.
    Solid,
    /// Border only, with the given thickness in pixels.
    Outline(i32),
}

/// Drawing backend the engine paints through.
///
/// The engine never reads pixels back; text extents are the only values it
/// asks the renderer for.
pub trait Renderer {
    /// Target a draw call lands on, e.g. an image buffer or a window id.
    type Surface: Clone;
    /// Image type accepted by [`Renderer::blit`].
    type Image;

    /// Draws a filled or outlined rectangle.
    fn rectangle(&mut self, surface: &Self::Surface, rect: Rect, color: Color, fill: Fill);
    /// Draws a one pixel line between two points.
    fn line(&mut self, surface: &Self::Surface, from: Point, to: Point, color: Color);
    /// Draws `text` with its baseline starting at `pos`.
    fn text(&mut self, surface: &Self::Surface, text: &str, pos: Point, scale: f64, color: Color);
    /// Measures `text` at `scale` without drawing it.
    fn text_size(&self, text: &str, scale: f64) -> Dimensioni;
    /// Width and height of an image.
    fn image_size(&self, image: &Self::Image) -> Dimensioni;
    /// Copies `image` onto `surface` at `dst`.
    fn blit(&mut self, surface: &Self::Surface, image: &Self::Image, dst: Rect);
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options that control how a trackbar behaves and what it draws.
    pub struct TrackbarOptions : u32 {
        /// Hides every label.
        const HIDE_LABELS = 32;
        /// Hides the label under the handle.
        const HIDE_VALUE_LABEL = 16;
        /// Hides the labels at both ends.
        const HIDE_MIN_MAX_LABELS = 8;
        /// Snaps values to multiples of the step.
        const DISCRETE = 4;
        /// Hides the small step ticks.
        const HIDE_STEP_SCALE = 2;
        /// Hides the labels of the segment ticks.
        const HIDE_SEGMENT_LABELS = 1;
        /// No special options.
        const NONE = 0;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Button and modifier state reported alongside a mouse event.
    pub struct EventFlags : u32 {
        /// Alt key held.
        const ALTKEY = 32;
        /// Shift key held.
        const SHIFTKEY = 16;
        /// Control key held.
        const CTRLKEY = 8;
        /// Middle button held.
        const MBUTTON = 4;
        /// Right button held.
        const RBUTTON = 2;
        /// Left button held.
        const LBUTTON = 1;
        /// Nothing held.
        const NONE = 0;
    }
}

impl TrackbarOptions {
    /// Returns `true` if values snap to the step.
    pub fn is_discrete(&self) -> bool { self.intersects(Self::DISCRETE) }
    /// Returns `true` if no label is drawn at all.
    pub fn hides_labels(&self) -> bool { self.intersects(Self::HIDE_LABELS) }
    /// Returns `true` if the value label under the handle is hidden.
    pub fn hides_value_label(&self) -> bool { self.intersects(Self::HIDE_VALUE_LABEL) }
    /// Returns `true` if the min/max labels are hidden.
    pub fn hides_min_max_labels(&self) -> bool { self.intersects(Self::HIDE_MIN_MAX_LABELS) }
    /// Returns `true` if the segment labels are hidden.
    pub fn hides_segment_labels(&self) -> bool { self.intersects(Self::HIDE_SEGMENT_LABELS) }
    /// Returns `true` if the step ticks are hidden.
    pub fn hides_step_scale(&self) -> bool { self.intersects(Self::HIDE_STEP_SCALE) }
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Metrics that drive widget geometry.
pub struct Style {
    /// Scale of regular text.
    pub font_scale: f64,
    /// Scale of button labels while the button is held.
    pub pressed_font_scale: f64,
    /// Scale of trackbar labels.
    pub small_font_scale: f64,
    /// Added to the label extent of auto-sized buttons.
    pub button_padding: Size,
    /// Side of the checkbox square.
    pub checkbox_size: i32,
    /// Gap between checkbox square and label.
    pub checkbox_gap: i32,
    /// Side of the counter `-`/`+` buttons.
    pub counter_button_size: i32,
    /// Width of the counter value display.
    pub counter_display_width: i32,
    /// Horizontal margin between trackbar bounds and its working area.
    pub trackbar_margin_x: i32,
    /// Height of a trackbar.
    pub trackbar_height: i32,
    /// Height of window title bars.
    pub title_height: i32,
    /// Default argument of `space()`.
    pub space: i32,
    /// Default text color as `0xTTRRGGBB`.
    pub text_color: u32,
    /// Default sparkline color as `0xTTRRGGBB`.
    pub sparkline_color: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_scale: 0.4,
            pressed_font_scale: 0.39,
            small_font_scale: 0.3,
            button_padding: Size::new(30, 18),
            checkbox_size: 15,
            checkbox_gap: 6,
            counter_button_size: 22,
            counter_display_width: 48,
            trackbar_margin_x: 14,
            trackbar_height: 45,
            title_height: 20,
            space: 5,
            text_color: 0xCECECE,
            sparkline_color: 0x00FF00,
        }
    }
}
