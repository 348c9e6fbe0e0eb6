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
use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use crate::{Error, EventFlags, Mouse, MouseEventKind, Result};

/// Per-window interaction state.
#[derive(Clone, Debug)]
pub struct Context {
    window: String,
    /// Mouse state of the window.
    pub mouse: Mouse,
}

impl Context {
    fn new(window: &str) -> Self { Self { window: window.to_string(), mouse: Mouse::default() } }

    /// Name of the watched window.
    pub fn window(&self) -> &str { &self.window }
}

/// Shared handle to a window [`Context`].
///
/// This is what the host wires to its platform mouse callback. Each call to
/// [`ContextHandle::handle_mouse`] updates the context under a single borrow,
/// so widgets never observe half of an event.
#[derive(Clone, Debug)]
pub struct ContextHandle(Rc<RefCell<Context>>);

impl ContextHandle {
    fn new(window: &str) -> Self { Self(Rc::new(RefCell::new(Context::new(window)))) }

    /// Applies one normalized mouse event at `(x, y)`.
    pub fn handle_mouse(&self, kind: MouseEventKind, x: i32, y: i32, flags: EventFlags) {
        let mut ctx = self.0.borrow_mut();
        tracing::trace!(window = %ctx.window, ?kind, x, y, flags = flags.bits(), "mouse event");
        ctx.mouse.apply(kind, x, y);
    }

    /// Decodes a raw event code and applies it.
    pub fn handle_raw_mouse(&self, event: i32, x: i32, y: i32, flags: i32) -> Result<()> {
        let kind = MouseEventKind::try_from(event)?;
        self.handle_mouse(kind, x, y, EventFlags::from_bits_truncate(flags as u32));
        Ok(())
    }

    /// Snapshot of the current mouse state.
    pub fn mouse(&self) -> Mouse { self.0.borrow().mouse }

    /// Copy of the whole context.
    ///
    /// The copy does not follow later events, and holding it never blocks the
    /// mouse callback.
    pub fn snapshot(&self) -> Context { self.0.borrow().clone() }

    pub(crate) fn clear_edges(&self) { self.0.borrow_mut().mouse.clear_edges(); }
}

/// Window name to context mapping plus the current/default selection.
#[derive(Default)]
pub(crate) struct ContextRegistry {
    contexts: HashMap<String, ContextHandle>,
    default: Option<String>,
    current: Option<String>,
}

impl ContextRegistry {
    /// Registers `window`, replacing any earlier context with a fresh one.
    pub fn watch(&mut self, window: &str) -> ContextHandle {
        let handle = ContextHandle::new(window);
        self.contexts.insert(window.to_string(), handle.clone());
        handle
    }

    pub fn set_default(&mut self, window: &str) {
        self.default = Some(window.to_string());
        self.current = Some(window.to_string());
    }

    pub fn set_current(&mut self, window: &str) { self.current = Some(window.to_string()); }

    pub fn is_watched(&self, window: &str) -> bool { self.contexts.contains_key(window) }

    /// Picks the explicit window, then the current one, then the default.
    pub fn resolve(&self, window: Option<&str>) -> Result<&ContextHandle> {
        let name = match (window, &self.current, &self.default) {
            (Some(name), _, _) => name,
            (None, Some(current), _) => current.as_str(),
            (None, None, Some(default)) => default.as_str(),
            (None, None, None) => return Err(Error::NoContext),
        };
        self.contexts.get(name).ok_or_else(|| Error::UnwatchedWindow(name.to_string()))
    }
}
