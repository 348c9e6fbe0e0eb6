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
use crate::{Error, Point, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
/// Physical mouse buttons tracked per window.
pub enum ButtonId {
    /// Left button.
    Left = 0,
    /// Middle button.
    Middle = 1,
    /// Right button.
    Right = 2,
}

impl ButtonId {
    /// Every tracked button, in index order.
    pub const ALL: [ButtonId; 3] = [ButtonId::Left, ButtonId::Middle, ButtonId::Right];
}

impl TryFrom<i32> for ButtonId {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self> {
        match id {
            0 => Ok(ButtonId::Left),
            1 => Ok(ButtonId::Middle),
            2 => Ok(ButtonId::Right),
            _ => Err(Error::InvalidMouseButton(id)),
        }
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
/// Level and edge state of one button.
pub struct MouseButton {
    /// Held down. Stays set across frames until released.
    pub pressed: bool,
    /// Went down since the last `update()`.
    pub just_pressed: bool,
    /// Went up since the last `update()`. This is what widgets treat as a click.
    pub just_released: bool,
}

impl MouseButton {
    fn press(&mut self) {
        self.pressed = true;
        self.just_pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
        self.just_released = true;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Answers `query` against this button.
    pub fn is(&self, query: MouseQuery) -> bool {
        match query {
            MouseQuery::Down => self.just_pressed,
            MouseQuery::Click | MouseQuery::Up => self.just_released,
            MouseQuery::IsDown => self.pressed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Questions a host can ask about a button.
pub enum MouseQuery {
    /// The button went down this frame.
    Down,
    /// The button went up this frame.
    Up,
    /// Same as [`MouseQuery::Up`].
    Click,
    /// The button is currently held.
    IsDown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Normalized mouse events delivered by the event source.
pub enum MouseEventKind {
    /// Pointer moved.
    Move,
    /// A button went down.
    ButtonDown(ButtonId),
    /// A button went up.
    ButtonUp(ButtonId),
    /// A button was double clicked.
    DoubleClick(ButtonId),
    /// Vertical wheel scrolled.
    Wheel,
    /// Horizontal wheel scrolled.
    HWheel,
}

impl TryFrom<i32> for MouseEventKind {
    type Error = Error;

    /// Decodes the raw codes used by highgui-style event sources.
    fn try_from(code: i32) -> Result<Self> {
        use ButtonId::*;
        let kind = match code {
            0 => MouseEventKind::Move,
            1 => MouseEventKind::ButtonDown(Left),
            2 => MouseEventKind::ButtonDown(Right),
            3 => MouseEventKind::ButtonDown(Middle),
            4 => MouseEventKind::ButtonUp(Left),
            5 => MouseEventKind::ButtonUp(Right),
            6 => MouseEventKind::ButtonUp(Middle),
            7 => MouseEventKind::DoubleClick(Left),
            8 => MouseEventKind::DoubleClick(Right),
            9 => MouseEventKind::DoubleClick(Middle),
            10 => MouseEventKind::Wheel,
            11 => MouseEventKind::HWheel,
            _ => return Err(Error::InvalidEvent(code)),
        };
        Ok(kind)
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
/// Mouse state of one window.
pub struct Mouse {
    buttons: [MouseButton; 3],
    /// Logical OR of every button.
    pub any_button: MouseButton,
    /// Last known cursor position.
    pub position: Point,
}

impl Mouse {
    /// State of a single button.
    pub fn button(&self, id: ButtonId) -> &MouseButton { &self.buttons[id as usize] }

    /// Applies one normalized event.
    pub fn apply(&mut self, kind: MouseEventKind, x: i32, y: i32) {
        match kind {
            MouseEventKind::ButtonDown(id) => {
                self.buttons[id as usize].press();
                self.any_button.press();
            }
            MouseEventKind::ButtonUp(id) => {
                self.buttons[id as usize].release();
                self.any_button.release();
            }
            _ => (),
        }
        self.position = Point::new(x, y);
    }

    /// Clears the one-shot flags of every button.
    pub fn clear_edges(&mut self) {
        for b in &mut self.buttons {
            b.clear_edges();
        }
        self.any_button.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release_sets_edges() {
        let mut mouse = Mouse::default();
        mouse.apply(MouseEventKind::ButtonDown(ButtonId::Right), 4, 5);
        assert!(mouse.button(ButtonId::Right).pressed);
        assert!(mouse.button(ButtonId::Right).just_pressed);
        assert!(mouse.any_button.pressed);
        assert!(!mouse.button(ButtonId::Left).pressed);
        assert_eq!(mouse.position, Point::new(4, 5));

        mouse.apply(MouseEventKind::ButtonUp(ButtonId::Right), 6, 7);
        let right = mouse.button(ButtonId::Right);
        assert!(!right.pressed);
        assert!(right.just_pressed);
        assert!(right.just_released);
        assert!(mouse.any_button.just_released);
        assert_eq!(mouse.position, Point::new(6, 7));
    }

    #[test]
    fn clear_edges_keeps_level_state() {
        let mut mouse = Mouse::default();
        mouse.apply(MouseEventKind::ButtonDown(ButtonId::Left), 0, 0);
        mouse.clear_edges();
        assert!(mouse.button(ButtonId::Left).pressed);
        assert!(!mouse.button(ButtonId::Left).just_pressed);
        assert!(mouse.any_button.pressed);
        assert!(!mouse.any_button.just_pressed);
    }

    #[test]
    fn move_and_wheel_only_update_position() {
        let mut mouse = Mouse::default();
        mouse.apply(MouseEventKind::Move, 3, 3);
        mouse.apply(MouseEventKind::Wheel, 9, 1);
        assert_eq!(mouse.any_button, MouseButton::default());
        assert_eq!(mouse.position, Point::new(9, 1));
    }

    #[test]
    fn raw_codes_decode() {
        assert_eq!(MouseEventKind::try_from(2), Ok(MouseEventKind::ButtonDown(ButtonId::Right)));
        assert_eq!(MouseEventKind::try_from(6), Ok(MouseEventKind::ButtonUp(ButtonId::Middle)));
        assert_eq!(MouseEventKind::try_from(12), Err(Error::InvalidEvent(12)));
        assert_eq!(ButtonId::try_from(3), Err(Error::InvalidMouseButton(3)));
    }

    #[test]
    fn queries_map_to_flags() {
        let b = MouseButton { pressed: true, just_pressed: false, just_released: true };
        assert!(b.is(MouseQuery::IsDown));
        assert!(b.is(MouseQuery::Click));
        assert!(b.is(MouseQuery::Up));
        assert!(!b.is(MouseQuery::Down));
    }
}
