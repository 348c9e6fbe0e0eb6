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
use thiserror::Error;

/// Result type returned by every fallible engine call.
pub type Result<T> = std::result::Result<T, Error>;

/// Usage errors reported by the engine.
///
/// None of these are transient. A host receiving one of the layout errors
/// should consider the current frame lost; the engine refuses further block
/// calls until the next [`crate::Ui::update`].
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// An `end*()` call had no matching `begin*()`.
    #[error("mismatch in the number of begin*()/end*() calls")]
    Unbalanced,
    /// `update()` was called while blocks were still open.
    #[error("update() called with {0} unfinished begin*() block(s)")]
    UnfinishedBlocks(usize),
    /// A block-variant call was made outside any `begin*()`/`end*()` pair.
    #[error("call requires an enclosing begin*()/end*() block")]
    MissingBlock,
    /// The `end*()` kind differs from the block on top of the stack.
    #[error("end{requested}() called to close a {open} block")]
    MismatchedEnd {
        /// Kind of the block that was open.
        open: &'static str,
        /// Kind requested by the `end*()` call.
        requested: &'static str,
    },
    /// No window was named and neither a current nor a default one is set.
    #[error("no context available, call init() first")]
    NoContext,
    /// A raw mouse button identifier outside left/middle/right.
    #[error("invalid mouse button {0}")]
    InvalidMouseButton(i32),
    /// A window name that was never passed to `watch()`.
    #[error("window '{0}' is not watched")]
    UnwatchedWindow(String),
    /// An earlier layout error invalidated the current frame.
    #[error("frame invalidated by an earlier layout error")]
    FrameInvalidated,
    /// A raw event code the event source does not define.
    #[error("invalid mouse event {0}")]
    InvalidEvent(i32),
    /// Image data could not be decoded or has the wrong length.
    #[error("image: {0}")]
    Image(String),
    /// Font data could not be loaded.
    #[error("font: {0}")]
    Font(String),
}

impl Error {
    /// Numeric code of the error, stable across releases.
    pub fn code(&self) -> i32 {
        match self {
            Error::Unbalanced => 1,
            Error::UnfinishedBlocks(_) => 2,
            Error::MissingBlock => 3,
            Error::MismatchedEnd { .. } => 4,
            Error::NoContext => 5,
            Error::InvalidMouseButton(_) => 6,
            Error::UnwatchedWindow(_) => 7,
            Error::FrameInvalidated => 8,
            Error::InvalidEvent(_) => 9,
            Error::Image(_) => 10,
            Error::Font(_) => 11,
        }
    }

    /// Returns `true` for errors that leave the block stack unusable.
    pub fn is_layout(&self) -> bool {
        matches!(self, Error::Unbalanced | Error::UnfinishedBlocks(_) | Error::MissingBlock | Error::MismatchedEnd { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_the_documented_numbering() {
        assert_eq!(Error::Unbalanced.code(), 1);
        assert_eq!(Error::UnfinishedBlocks(2).code(), 2);
        assert_eq!(Error::MissingBlock.code(), 3);
        assert_eq!(Error::MismatchedEnd { open: "Row", requested: "Column" }.code(), 4);
        assert_eq!(Error::NoContext.code(), 5);
        assert_eq!(Error::InvalidMouseButton(9).code(), 6);
    }

    #[test]
    fn messages_name_the_offending_call() {
        let err = Error::MismatchedEnd { open: "Row", requested: "Column" };
        assert_eq!(err.to_string(), "endColumn() called to close a Row block");
        assert!(err.is_layout());
        assert!(!Error::NoContext.is_layout());
    }
}
