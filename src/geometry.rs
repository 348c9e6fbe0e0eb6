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
use rs_math3d::{Dimensioni, Recti, Vec2i};

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Integer position in surface pixels.
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    /// Returns `true` if the point lies within `rect`, edges included.
    pub fn inside(&self, rect: &Rect) -> bool { rect.contains(self) }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Width and height pair used for layout extents.
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Creates a size from its extents.
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Axis-aligned box anchored at its top-left corner.
///
/// Width and height are not required to be positive. Blocks use negative
/// extents to request sizing from their children.
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its origin and extents.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self { Self { x, y, width, height } }

    /// Creates a rectangle at `origin` with the given `size`.
    pub const fn from_origin(origin: Point, size: Size) -> Self { Self::new(origin.x, origin.y, size.width, size.height) }

    /// Returns `true` if `point` is inside the rectangle.
    ///
    /// Both the right and the bottom edge belong to the rectangle, so a
    /// 10 pixel wide box at `x = 0` accepts `x = 10`.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.x.saturating_add(self.width) && point.y >= self.y && point.y <= self.y.saturating_add(self.height)
    }

    /// Returns `width * height`, negative for degenerate rectangles.
    pub fn area(&self) -> i32 { self.width.saturating_mul(self.height) }

    /// Top-left corner.
    pub fn origin(&self) -> Point { Point::new(self.x, self.y) }

    /// Extents of the rectangle.
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }

    /// Shrinks (or grows, for negative `n`) the rectangle on every side.
    pub fn inset(&self, n: i32) -> Self { Self::new(self.x + n, self.y + n, self.width - n * 2, self.height - n * 2) }
}

impl From<Vec2i> for Point {
    fn from(v: Vec2i) -> Self { Self::new(v.x, v.y) }
}

impl From<Point> for Vec2i {
    fn from(p: Point) -> Self { Vec2i::new(p.x, p.y) }
}

impl From<Dimensioni> for Size {
    fn from(d: Dimensioni) -> Self { Self::new(d.width, d.height) }
}

impl From<Size> for Dimensioni {
    fn from(s: Size) -> Self { Dimensioni::new(s.width, s.height) }
}

impl From<Recti> for Rect {
    fn from(r: Recti) -> Self { Self::new(r.x, r.y, r.width, r.height) }
}

impl From<Rect> for Recti {
    fn from(r: Rect) -> Self { Recti::new(r.x, r.y, r.width, r.height) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_right_and_bottom_edges() {
        let r = Rect::new(10, 10, 20, 5);
        assert!(r.contains(&Point::new(10, 10)));
        assert!(r.contains(&Point::new(30, 15)));
        assert!(!r.contains(&Point::new(31, 15)));
        assert!(!r.contains(&Point::new(30, 16)));
        assert!(!r.contains(&Point::new(9, 12)));
    }

    #[test]
    fn contains_near_the_integer_bounds() {
        let r = Rect::new(i32::MAX - 5, i32::MIN + 1, 100, 100);
        assert!(r.contains(&Point::new(i32::MAX, i32::MIN + 50)));
        assert!(!r.contains(&Point::new(i32::MAX - 6, i32::MIN + 50)));
        assert!(!r.contains(&Point::new(i32::MAX, i32::MIN)));
    }

    #[test]
    fn inside_matches_contains() {
        let r = Rect::new(0, 0, 4, 4);
        for x in -1..6 {
            for y in -1..6 {
                let p = Point::new(x, y);
                assert_eq!(p.inside(&r), r.contains(&p));
            }
        }
    }

    #[test]
    fn area_of_degenerate_rect_is_negative() {
        assert_eq!(Rect::new(0, 0, 6, 7).area(), 42);
        assert_eq!(Rect::new(0, 0, -1, 7).area(), -7);
    }

    #[test]
    fn math3d_round_trip() {
        let r = Rect::new(1, 2, 3, 4);
        let back: Rect = <Recti as From<Rect>>::from(r).into();
        assert_eq!(back, r);
        let s: Size = Dimensioni::new(7, 9).into();
        assert_eq!(s, Size::new(7, 9));
    }
}
