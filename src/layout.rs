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
use crate::{Error, Point, Rect, Result, Size};

/// Direction in which a block places its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Children flow left to right.
    Row,
    /// Children flow top to bottom.
    Column,
    /// Free-form placement, the layout flow is never advanced.
    None,
}

impl BlockKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            BlockKind::Row => "Row",
            BlockKind::Column => "Column",
            BlockKind::None => "None",
        }
    }
}

/// One layout scope opened by `begin_row()`/`begin_column()`.
#[derive(Clone, Debug)]
pub struct Block<S> {
    /// Surface every child of the block is drawn on.
    pub surface: S,
    /// Declared bounds. Negative extents are resolved from `fill` when the block ends.
    pub rect: Rect,
    /// Union extent of the children placed so far.
    pub fill: Rect,
    /// Where the next child goes.
    pub anchor: Point,
    /// Gap added after every child along the primary axis.
    pub padding: i32,
    /// Flow direction.
    pub kind: BlockKind,
}

impl<S> Block<S> {
    /// Creates a block whose anchor sits at its own origin.
    pub fn new(kind: BlockKind, surface: S, rect: Rect, padding: i32) -> Self {
        Self {
            surface,
            rect,
            fill: Rect::new(rect.x, rect.y, 0, 0),
            anchor: rect.origin(),
            padding,
            kind,
        }
    }

    /// Advances the anchor past a child of `size`.
    ///
    /// Rows grow `fill.width` by the child width plus padding and keep the
    /// tallest child as `fill.height`; columns do the same with the axes swapped.
    pub fn update_layout_flow(&mut self, size: Size) {
        match self.kind {
            BlockKind::Row => {
                let value = size.width + self.padding;
                self.anchor.x += value;
                self.fill.width += value;
                self.fill.height = self.fill.height.max(size.height);
            }
            BlockKind::Column => {
                let value = size.height + self.padding;
                self.anchor.y += value;
                self.fill.height += value;
                self.fill.width = self.fill.width.max(size.width);
            }
            BlockKind::None => (),
        }
    }

    /// Size the block occupies in its parent: declared extents, or `fill` for negative ones.
    pub fn resolved_size(&self) -> Size {
        Size::new(
            if self.rect.width < 0 { self.fill.width } else { self.rect.width },
            if self.rect.height < 0 { self.fill.height } else { self.rect.height },
        )
    }
}

/// LIFO stack of open blocks.
pub(crate) struct BlockStack<S> {
    stack: Vec<Block<S>>,
}

impl<S> Default for BlockStack<S> {
    fn default() -> Self { Self { stack: Vec::with_capacity(16) } }
}

impl<S> BlockStack<S> {
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn clear(&mut self) { self.stack.clear(); }

    pub fn push(&mut self, block: Block<S>) {
        tracing::trace!(kind = block.kind.name(), depth = self.stack.len() + 1, "push block");
        self.stack.push(block);
    }

    pub fn pop(&mut self) -> Result<Block<S>> {
        let block = self.stack.pop().ok_or(Error::Unbalanced)?;
        tracing::trace!(kind = block.kind.name(), depth = self.stack.len(), "pop block");
        Ok(block)
    }

    pub fn top(&self) -> Result<&Block<S>> { self.stack.last().ok_or(Error::MissingBlock) }

    pub fn top_mut(&mut self) -> Result<&mut Block<S>> { self.stack.last_mut().ok_or(Error::MissingBlock) }

    /// Opens a new scope at `(x, y)`. Negative `width`/`height` request auto-sizing.
    pub fn begin(&mut self, kind: BlockKind, surface: S, x: i32, y: i32, width: i32, height: i32, padding: i32) {
        self.push(Block::new(kind, surface, Rect::new(x, y, width, height), padding));
    }

    /// Closes the top scope and feeds its size into the parent's layout flow.
    pub fn end(&mut self, kind: BlockKind) -> Result<Block<S>> {
        let block = self.pop()?;
        if block.kind != kind {
            return Err(Error::MismatchedEnd { open: block.kind.name(), requested: kind.name() });
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.update_layout_flow(block.resolved_size());
        }
        Ok(block)
    }
}
