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

/// Clamps `value` into `[0, 1]`. NaN maps to 0.
pub fn clamp01(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value >= 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Per-call trackbar configuration.
pub struct TrackbarParams {
    /// Value at the left end.
    pub min: f64,
    /// Value at the right end.
    pub max: f64,
    /// Snapping step, also the spacing of the small ticks when discrete.
    pub step: f64,
    /// Number of labeled segments.
    pub segments: i32,
    /// Behaviour and drawing options.
    pub options: TrackbarOptions,
    /// printf-style format of the labels.
    pub label_format: String,
}

impl TrackbarParams {
    /// Builds params, replacing `max <= 0` with 25 and an empty format with `"%.0Lf"`.
    pub fn new(min: f64, max: f64, step: f64, segments: i32, label_format: &str, options: TrackbarOptions) -> Self {
        Self {
            min,
            max: if max <= 0.0 { 25.0 } else { max },
            step,
            segments,
            options,
            label_format: if label_format.is_empty() { "%.0Lf".to_string() } else { label_format.to_string() },
        }
    }

    /// `max - min`.
    pub fn range(&self) -> f64 { self.max - self.min }

    /// Formats `value` with the label format.
    pub fn label(&self, value: f64) -> String { NumberFormat::parse(&self.label_format).format(value) }

    /// Snaps `value` to `min + step * k` when the trackbar is discrete and `step != 0`.
    pub fn discretize(&self, value: f64) -> f64 {
        if !self.options.is_discrete() || self.step == 0.0 {
            return value;
        }
        let k = ((value - self.min) / self.step).round();
        self.min + self.step * k
    }

    /// Maps a cursor column inside `bounds` to a value.
    ///
    /// The ratio runs over the working width `bounds.width - 2 * margin`. A
    /// working width of zero or less always yields `min`.
    pub fn pixel_to_value(&self, bounds: Rect, margin: i32, pixel_x: i32) -> f64 {
        let working = bounds.width - 2 * margin;
        let ratio = if working > 0 { clamp01((pixel_x - (bounds.x + margin)) as f64 / working as f64) } else { 0.0 };
        self.min + ratio * self.range()
    }

    /// Maps a value to the cursor column that selects it. A degenerate range maps to the left end.
    pub fn value_to_pixel(&self, bounds: Rect, margin: i32, value: f64) -> i32 {
        let range = self.range();
        let ratio = if range != 0.0 { clamp01((value - self.min) / range) } else { 0.0 };
        let working = (bounds.width - 2 * margin).max(0);
        ((bounds.x + margin) as f64 + ratio * working as f64).floor() as i32
    }
}

impl Default for TrackbarParams {
    fn default() -> Self { Self::new(0.0, 25.0, 1.0, 1, "%.1Lf", TrackbarOptions::NONE) }
}

/// Moves `value` under the cursor while a button is held over `bounds`.
///
/// Returns `true` if the value changed.
pub fn trackbar_update(params: &TrackbarParams, bounds: Rect, margin: i32, mouse: &Mouse, value: &mut f64) -> bool {
    let last = *value;
    if mouse.any_button.pressed && bounds.contains(&mouse.position) {
        *value = params.discretize(params.pixel_to_value(bounds, margin, mouse.position.x));
    }
    *value != last
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MARGIN: i32 = 14;

    fn bounds() -> Rect { rect(10, 0, 228, 45) }

    #[test]
    fn params_apply_defaults() {
        let p = TrackbarParams::new(0.0, -1.0, 1.0, 1, "", TrackbarOptions::NONE);
        assert_eq!(p.max, 25.0);
        assert_eq!(p.label_format, "%.0Lf");
        assert_eq!(p.label(3.6), "4");
        assert_eq!(TrackbarParams::default().label(2.26), "2.3");
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
        assert_eq!(clamp01(f64::NAN), 0.0);
    }

    #[test]
    fn pixel_mapping_covers_the_working_area() {
        let p = TrackbarParams::new(0.0, 100.0, 1.0, 1, "", TrackbarOptions::NONE);
        let b = bounds();
        assert_eq!(p.pixel_to_value(b, MARGIN, b.x + MARGIN), 0.0);
        assert_eq!(p.pixel_to_value(b, MARGIN, b.x + b.width - MARGIN), 100.0);
        assert_eq!(p.pixel_to_value(b, MARGIN, b.x + 100 + MARGIN), 50.0);
        assert_eq!(p.pixel_to_value(b, MARGIN, 0), 0.0);
        assert_eq!(p.pixel_to_value(b, MARGIN, 1000), 100.0);
        assert_eq!(p.value_to_pixel(b, MARGIN, 50.0), b.x + MARGIN + 100);
    }

    #[test]
    fn degenerate_ranges_do_not_divide_by_zero() {
        let p = TrackbarParams::new(5.0, 5.0, 1.0, 1, "", TrackbarOptions::NONE);
        assert_eq!(p.value_to_pixel(bounds(), MARGIN, 5.0), bounds().x + MARGIN);
        let narrow = rect(0, 0, 2 * MARGIN, 45);
        let q = TrackbarParams::default();
        assert_eq!(q.pixel_to_value(narrow, MARGIN, 10), q.min);
    }

    #[test]
    fn discrete_values_snap_to_steps() {
        let p = TrackbarParams::new(1.0, 11.0, 0.5, 2, "", TrackbarOptions::DISCRETE);
        assert_eq!(p.discretize(3.3), 3.5);
        assert_eq!(p.discretize(3.2), 3.0);
        let continuous = TrackbarParams::new(1.0, 11.0, 0.5, 2, "", TrackbarOptions::NONE);
        assert_eq!(continuous.discretize(3.3), 3.3);
        let zero_step = TrackbarParams::new(1.0, 11.0, 0.0, 2, "", TrackbarOptions::DISCRETE);
        assert_eq!(zero_step.discretize(3.3), 3.3);
    }

    #[test]
    fn update_follows_held_cursor_only() {
        let p = TrackbarParams::new(0.0, 200.0, 1.0, 1, "", TrackbarOptions::NONE);
        let b = bounds();
        let mut mouse = Mouse::default();
        let mut value = 10.0;
        mouse.apply(MouseEventKind::Move, b.x + MARGIN + 50, 20);
        assert!(!trackbar_update(&p, b, MARGIN, &mouse, &mut value));
        assert_eq!(value, 10.0);

        mouse.apply(MouseEventKind::ButtonDown(ButtonId::Left), b.x + MARGIN + 50, 20);
        assert!(trackbar_update(&p, b, MARGIN, &mouse, &mut value));
        assert_eq!(value, 50.0);
        assert!(!trackbar_update(&p, b, MARGIN, &mouse, &mut value));
    }

    proptest! {
        #[test]
        fn pixel_round_trip_within_one_pixel(
            min in -1000.0f64..1000.0, span in 0.5f64..1000.0, t in 0.0f64..=1.0,
            x in -200i32..200, width in 40i32..600,
        ) {
            let p = TrackbarParams { min, max: min + span, ..TrackbarParams::default() };
            let b = rect(x, 0, width, 45);
            let v = min + t * span;
            let back = p.pixel_to_value(b, MARGIN, p.value_to_pixel(b, MARGIN, v));
            let one_pixel = span / (width - 2 * MARGIN) as f64;
            prop_assert!((back - v).abs() <= one_pixel + 1e-9);
        }

        #[test]
        fn discretized_values_are_step_multiples(
            min in -100.0f64..100.0, step in 0.25f64..10.0, v in -500.0f64..500.0,
        ) {
            let p = TrackbarParams {
                min,
                max: min + 100.0,
                step,
                options: TrackbarOptions::DISCRETE,
                ..TrackbarParams::default()
            };
            let k = (p.discretize(v) - min) / step;
            prop_assert!((k - k.round()).abs() < 1e-6);
        }
    }
}
