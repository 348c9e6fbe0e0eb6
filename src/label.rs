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
/// Marker that introduces a keyboard shortcut inside a label.
pub const SHORTCUT_MARKER: char = '&';

/// A button label split around its keyboard shortcut.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    /// Character following the marker, if any.
    pub shortcut: Option<char>,
    /// Text before the marker.
    pub before: String,
    /// Text after the shortcut character.
    pub after: String,
}

impl Label {
    /// Parses `text`, e.g. `"Re&start"` gives `before = "Re"`, shortcut `s`, `after = "tart"`.
    ///
    /// A marker in the last position is kept as plain text. When a label
    /// holds more than one marker the last one picks the shortcut.
    pub fn parse(text: &str) -> Self {
        let mut label = Label::default();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == SHORTCUT_MARKER {
                if let Some(next) = chars.next() {
                    label.shortcut = Some(next);
                    continue;
                }
            }
            if label.shortcut.is_none() {
                label.before.push(c);
            } else {
                label.after.push(c);
            }
        }
        label
    }

    /// Returns `true` if the label carries a shortcut.
    pub fn has_shortcut(&self) -> bool { self.shortcut.is_some() }

    /// Returns `true` if `key` triggers the shortcut, ignoring case.
    pub fn matches(&self, key: char) -> bool {
        match self.shortcut {
            Some(s) => s.to_lowercase().eq(key.to_lowercase()),
            None => false,
        }
    }
}
