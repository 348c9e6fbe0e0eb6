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
//! Pure widget logic: everything a widget decides from the mouse state and its
//! geometry, kept apart from the engine so it can be tested without a renderer.

mod core_widgets;
mod trackbar;

pub use core_widgets::*;
pub use trackbar::*;

/// Where a widget goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Place<S> {
    /// Free-form: explicit surface and position, the layout flow is not touched.
    At {
        /// Surface to draw on.
        surface: S,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
    },
    /// At the anchor of the innermost open row/column, which is then advanced.
    Flow,
}

impl<S> Place<S> {
    /// Shorthand for [`Place::At`].
    pub fn at(surface: S, x: i32, y: i32) -> Self { Place::At { surface, x, y } }

    /// Returns `true` for the block variant.
    pub fn is_flow(&self) -> bool { matches!(self, Place::Flow) }
}
