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

/// Returns `true` if a button with `label` fires this frame.
///
/// A button fires on a click inside its area or when the last key pressed
/// matches the label's shortcut, ignoring case.
pub fn button_fired(status: Status, label: &Label, last_key: Option<char>) -> bool {
    status == Status::Click || last_key.is_some_and(|key| label.matches(key))
}

/// Picks the image an image button shows for `status`.
pub fn button_image<'a, I>(status: Status, idle: &'a I, over: &'a I, down: &'a I) -> &'a I {
    match status {
        Status::Out => idle,
        Status::Over | Status::Click => over,
        Status::Down => down,
    }
}

/// Hit area of a checkbox: the square, the gap and the label, as tall as the square.
pub fn checkbox_area(x: i32, y: i32, box_size: i32, gap: i32, label_width: i32) -> Rect { Rect::new(x, y, box_size + label_width + gap, box_size) }

/// Toggles `state` on a release while the cursor is inside `hit`. Returns the new state.
pub fn checkbox_toggle(hit: Rect, mouse: &Mouse, state: &mut bool) -> bool {
    if hit.contains(&mouse.position) && mouse.any_button.just_released {
        *state = !*state;
    }
    *state
}

/// Numbers a counter can step. Integer steps saturate at the type bounds.
pub trait CounterValue: Copy {
    /// `self + step`.
    fn step_up(self, step: Self) -> Self;
    /// `self - step`.
    fn step_down(self, step: Self) -> Self;
    /// Value handed to the display format.
    fn to_display(self) -> f64;
}

macro_rules! counter_int {
    ($($t:ty),*) => {$(
        impl CounterValue for $t {
            fn step_up(self, step: Self) -> Self { self.saturating_add(step) }
            fn step_down(self, step: Self) -> Self { self.saturating_sub(step) }
            fn to_display(self) -> f64 { self as f64 }
        }
    )*};
}

macro_rules! counter_float {
    ($($t:ty),*) => {$(
        impl CounterValue for $t {
            fn step_up(self, step: Self) -> Self { self + step }
            fn step_down(self, step: Self) -> Self { self - step }
            fn to_display(self) -> f64 { self as f64 }
        }
    )*};
}

counter_int!(i32, i64, u32);
counter_float!(f32, f64);

/// Applies the counter's `-`/`+` buttons to `value`. Returns the new value.
pub fn counter_step<T: CounterValue>(value: &mut T, step: T, minus: bool, plus: bool) -> T {
    if minus {
        *value = value.step_down(step);
    }
    if plus {
        *value = value.step_up(step);
    }
    *value
}

/// Normalizes a rectangle whose width or height is negative by flipping it around `(x, y)`.
pub fn flip_rect(x: i32, y: i32, width: i32, height: i32) -> Rect {
    Rect::new(if width < 0 { x + width } else { x }, if height < 0 { y + height } else { y }, width.abs(), height.abs())
}

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
}

/// Polyline of a sparkline inside `rect`.
///
/// Values are spread evenly over the width; the lowest maps 5 pixels above the
/// bottom edge, the highest to the top. A flat series sits on the lower line.
pub fn sparkline_points(values: &[f64], rect: Rect, min: f64, max: f64) -> Vec<Point> {
    let scale = max - min;
    let gap = rect.width as f64 / values.len().max(1) as f64;
    let span = (rect.height - 5) as f64;
    let bottom = rect.y + rect.height - 5;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = if scale != 0.0 { (v - min) / scale } else { 0.0 };
            Point::new((rect.x as f64 + gap * i as f64) as i32, bottom - (ratio * span) as i32)
        })
        .collect()
}

/// Message shown instead of a sparkline with fewer than two values.
pub fn sparkline_placeholder(len: usize) -> Option<&'static str> {
    match len {
        0 => Some("No data."),
        1 => Some("Insufficient data points."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(x: i32, y: i32, events: &[MouseEventKind]) -> Mouse {
        let mut m = Mouse::default();
        for e in events {
            m.apply(*e, x, y);
        }
        m.apply(MouseEventKind::Move, x, y);
        m
    }

    fn click_at(x: i32, y: i32) -> Mouse {
        mouse(x, y, &[MouseEventKind::ButtonDown(ButtonId::Left), MouseEventKind::ButtonUp(ButtonId::Left)])
    }

    #[test]
    fn button_fires_on_click_or_shortcut() {
        let label = Label::parse("&Quit");
        assert!(button_fired(Status::Click, &label, None));
        assert!(!button_fired(Status::Over, &label, None));
        assert!(!button_fired(Status::Down, &label, Some('x')));
        assert!(button_fired(Status::Out, &label, Some('Q')));
        assert!(button_fired(Status::Out, &label, Some('q')));
        assert!(!button_fired(Status::Out, &Label::parse("Quit"), Some('q')));
    }

    #[test]
    fn image_button_images_follow_status() {
        let (idle, over, down) = (1, 2, 3);
        assert_eq!(*button_image(Status::Out, &idle, &over, &down), 1);
        assert_eq!(*button_image(Status::Over, &idle, &over, &down), 2);
        assert_eq!(*button_image(Status::Click, &idle, &over, &down), 2);
        assert_eq!(*button_image(Status::Down, &idle, &over, &down), 3);
    }

    #[test]
    fn checkbox_toggles_on_click_inside_only() {
        let hit = checkbox_area(10, 10, 15, 6, 40);
        assert_eq!(hit, Rect::new(10, 10, 61, 15));

        let mut state = false;
        assert!(!checkbox_toggle(hit, &click_at(200, 200), &mut state));
        assert!(checkbox_toggle(hit, &click_at(60, 15), &mut state));
        assert!(!checkbox_toggle(hit, &click_at(12, 12), &mut state));
        // held but not released
        let held = mouse(12, 12, &[MouseEventKind::ButtonDown(ButtonId::Left)]);
        assert!(!checkbox_toggle(hit, &held, &mut state));
    }

    #[test]
    fn counter_steps_both_ways() {
        let mut v = 10;
        assert_eq!(counter_step(&mut v, 3, true, false), 7);
        assert_eq!(counter_step(&mut v, 3, false, true), 10);
        assert_eq!(counter_step(&mut v, 3, false, false), 10);
        let mut f = 0.5;
        assert_eq!(counter_step(&mut f, 0.25, false, true), 0.75);
    }

    #[test]
    fn integer_counters_saturate() {
        let mut v = i32::MAX - 1;
        assert_eq!(counter_step(&mut v, 5, false, true), i32::MAX);
        let mut low = i32::MIN + 2;
        assert_eq!(counter_step(&mut low, 5, true, false), i32::MIN);
        let mut unsigned = 1u32;
        assert_eq!(counter_step(&mut unsigned, 3, true, false), 0);
    }

    #[test]
    fn negative_sizes_flip_around_the_anchor() {
        assert_eq!(flip_rect(50, 50, -20, 10), Rect::new(30, 50, 20, 10));
        assert_eq!(flip_rect(50, 50, 20, -10), Rect::new(50, 40, 20, 10));
        assert_eq!(flip_rect(5, 5, 3, 4), Rect::new(5, 5, 3, 4));
    }

    #[test]
    fn sparkline_geometry() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3.0, -1.0, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(sparkline_placeholder(0), Some("No data."));
        assert_eq!(sparkline_placeholder(1), Some("Insufficient data points."));
        assert_eq!(sparkline_placeholder(2), None);

        let pts = sparkline_points(&[0.0, 10.0], Rect::new(0, 0, 100, 25), 0.0, 10.0);
        assert_eq!(pts, vec![Point::new(0, 20), Point::new(50, 0)]);
        let flat = sparkline_points(&[4.0, 4.0], Rect::new(0, 0, 100, 25), 4.0, 4.0);
        assert!(flat.iter().all(|p| p.y == 20));
    }
}
