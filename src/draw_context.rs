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

const TEXT: u32 = 0xCECECE;
const BUTTON_OUTLINE: u32 = 0x292929;
const BUTTON_BORDER: u32 = 0x4A4A4A;
const CHECK_FILL: u32 = 0x75BFFF;
const TITLE_FILL: u32 = 0x212121;
const WINDOW_FILL: u32 = 0x313131;
const TICK: u32 = 0x515151;
const PATH_SHADOW: u32 = 0x0E0E0E;
const TRACKBAR_BAR_HEIGHT: i32 = 7;

/// Paints widgets with their fixed colors through a [`Renderer`].
pub(crate) struct DrawCtx<'a, R: Renderer> {
    renderer: &'a mut R,
    surface: &'a R::Surface,
    style: &'a Style,
}

fn hex(c: u32) -> Color { Color::from_hex(c) }

impl<'a, R: Renderer> DrawCtx<'a, R> {
    pub(crate) fn new(renderer: &'a mut R, surface: &'a R::Surface, style: &'a Style) -> Self { Self { renderer, surface, style } }

    pub(crate) fn text_size(&self, text: &str, scale: f64) -> Size { self.renderer.text_size(text, scale).into() }

    fn outline(&mut self, rect: Rect, color: u32) { self.renderer.rectangle(self.surface, rect, hex(color), Fill::Outline(1)); }

    fn fill(&mut self, rect: Rect, color: u32) { self.renderer.rectangle(self.surface, rect, hex(color), Fill::Solid); }

    fn line(&mut self, from: Point, to: Point, color: u32) { self.renderer.line(self.surface, from, to, hex(color)); }

    /// Text with its baseline at `pos`.
    pub(crate) fn text(&mut self, text: &str, pos: Point, scale: f64, color: u32) { self.renderer.text(self.surface, text, pos, scale, hex(color)); }

    pub(crate) fn image(&mut self, image: &R::Image, rect: Rect) { self.renderer.blit(self.surface, image, rect); }

    /// Border plus an optional fill. The fill is skipped when fully transparent.
    pub(crate) fn rect(&mut self, rect: Rect, border: u32, fill: u32) {
        if !hex(fill).is_transparent() {
            self.fill(rect, fill);
        }
        self.outline(rect, border);
    }

    pub(crate) fn button(&mut self, status: Status, shape: Rect) {
        self.outline(shape, BUTTON_OUTLINE);
        let border = shape.inset(1);
        self.outline(border, BUTTON_BORDER);
        let inside = border.inset(1);
        let color = match status {
            Status::Out => 0x424242,
            Status::Over => 0x525252,
            Status::Down | Status::Click => 0x323232,
        };
        self.fill(inside, color);
    }

    fn put_text(&mut self, status: Status, text: &str, pos: Point) -> i32 {
        if text.is_empty() {
            return 0;
        }
        let scale = if status == Status::Down { self.style.pressed_font_scale } else { self.style.font_scale };
        self.text(text, pos, scale, TEXT);
        self.text_size(text, scale).width
    }

    /// Label centered in `shape`, with the shortcut character underlined.
    pub(crate) fn button_label(&mut self, status: Status, shape: Rect, label: &str) {
        let size = self.text_size(label, self.style.font_scale);
        let mut pos = Point::new(shape.x + shape.width / 2 - size.width / 2, shape.y + shape.height / 2 + size.height / 2);
        let parsed = Label::parse(label);
        let Some(shortcut) = parsed.shortcut else {
            self.put_text(status, label, pos);
            return;
        };

        pos.x += self.put_text(status, &parsed.before, pos);
        let start = pos.x;
        let mut buf = [0u8; 4];
        pos.x += self.put_text(status, shortcut.encode_utf8(&mut buf), pos);
        let end = pos.x;
        self.put_text(status, &parsed.after, pos);
        self.line(Point::new(start, pos.y + 3), Point::new(end, pos.y + 3), TEXT);
    }

    pub(crate) fn checkbox(&mut self, status: Status, shape: Rect) {
        self.outline(shape, if status == Status::Out { 0x636363 } else { 0x808080 });
        let border = shape.inset(1);
        self.outline(border, 0x171717);
        self.fill(border.inset(1), 0x292929);
    }

    pub(crate) fn checkbox_label(&mut self, shape: Rect, label: &str, text: Size, color: u32) {
        let pos = Point::new(shape.x + shape.width + self.style.checkbox_gap, shape.y + text.height + shape.height / 2 - text.height / 2 - 1);
        self.text(label, pos, self.style.font_scale, color);
    }

    pub(crate) fn checkbox_check(&mut self, shape: Rect) { self.fill(shape.inset(1), CHECK_FILL); }

    pub(crate) fn counter(&mut self, shape: Rect, value: &str) {
        self.fill(shape, 0x292929);
        self.outline(shape, 0x454545);
        let size = self.text_size(value, self.style.font_scale);
        let pos = Point::new(shape.x + shape.width / 2 - size.width / 2, shape.y + size.height / 2 + shape.height / 2);
        self.text(value, pos, self.style.font_scale, TEXT);
    }

    pub(crate) fn window(&mut self, title_bar: Rect, content: Rect, title: &str) {
        self.outline(title_bar, BUTTON_BORDER);
        let inside = title_bar.inset(1);
        self.fill(inside, TITLE_FILL);
        self.text(title, Point::new(inside.x + 5, inside.y + 12), self.style.font_scale, TEXT);
        self.outline(content, BUTTON_BORDER);
        self.fill(content.inset(1), WINDOW_FILL);
    }

    pub(crate) fn sparkline(&mut self, points: &[Point], color: u32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }

    fn text_centered(&mut self, pos: Point, text: &str) {
        let scale = self.style.small_font_scale;
        let size = self.text_size(text, scale);
        self.text(text, Point::new(pos.x - size.width / 2, pos.y), scale, TEXT);
    }

    /// Path, tick marks, segment labels and handle of a trackbar.
    pub(crate) fn trackbar(&mut self, status: Status, shape: Rect, value: f64, params: &TrackbarParams) {
        let margin = self.style.trackbar_margin_x;
        let working = Rect::new(shape.x + margin, shape.y, shape.width - 2 * margin, shape.height);
        let bar_top = working.y + working.height / 2;

        self.trackbar_path(status, working, bar_top);
        let hide_labels = params.options.hides_labels();
        if !params.options.hides_step_scale() && !hide_labels {
            self.trackbar_steps(shape, params, bar_top);
        }
        if !hide_labels {
            self.trackbar_segments(shape, params, bar_top);
        }
        self.trackbar_handle(status, shape, value, params, bar_top);
    }

    fn trackbar_path(&mut self, status: Status, working: Rect, bar_top: i32) {
        let bar = Rect::new(working.x, bar_top, working.width, TRACKBAR_BAR_HEIGHT);
        self.rect(bar, if status == Status::Out { 0x3E3E3E } else { 0x4E4E4E }, 0x292929);
        let y = bar.y + TRACKBAR_BAR_HEIGHT - 2;
        self.line(Point::new(bar.x + 1, y), Point::new(bar.x + bar.width - 2, y), PATH_SHADOW);
    }

    /// Small ticks, one per step when discrete, else twenty over the range.
    fn trackbar_steps(&mut self, shape: Rect, params: &TrackbarParams, bar_top: i32) {
        let margin = self.style.trackbar_margin_x;
        let step = if params.options.is_discrete() { params.step } else { params.range() / 20.0 };
        // no more ticks than pixels
        if !(step > 0.0) || params.range() / step > shape.width.max(0) as f64 {
            return;
        }
        let count = (params.range() / step).floor() as i32;
        for i in 0..=count {
            let x = params.value_to_pixel(shape, margin, params.min + step * i as f64);
            self.line(Point::new(x, bar_top), Point::new(x, bar_top - 3), TICK);
        }
    }

    fn trackbar_segment_label(&mut self, shape: Rect, params: &TrackbarParams, value: f64, bar_top: i32, show_label: bool) {
        let x = params.value_to_pixel(shape, self.style.trackbar_margin_x, value);
        self.line(Point::new(x, bar_top), Point::new(x, bar_top - 8), TICK);
        if show_label {
            let text = params.label(value);
            self.text_centered(Point::new(x, bar_top - 11), &text);
        }
    }

    fn trackbar_segments(&mut self, shape: Rect, params: &TrackbarParams, bar_top: i32) {
        let segments = params.segments.max(1);
        let length = params.range() / segments as f64;
        let min_max = !params.options.hides_min_max_labels();
        let segment_labels = !params.options.hides_segment_labels();

        self.trackbar_segment_label(shape, params, params.min, bar_top, min_max);
        if length > 0.0 {
            for i in 0..=segments {
                self.trackbar_segment_label(shape, params, params.min + length * i as f64, bar_top, segment_labels);
            }
        }
        self.trackbar_segment_label(shape, params, params.max, bar_top, min_max);
    }

    fn trackbar_handle(&mut self, status: Status, shape: Rect, value: f64, params: &TrackbarParams, bar_top: i32) {
        let x = params.value_to_pixel(shape, self.style.trackbar_margin_x, value);
        let top_left = Point::new(x - 3, bar_top - 4);
        let bottom_right = Point::new(x + 3, bar_top + TRACKBAR_BAR_HEIGHT + 4);
        let handle = Rect::new(top_left.x, top_left.y, bottom_right.x - top_left.x, bottom_right.y - top_left.y);

        self.rect(handle, TITLE_FILL, TITLE_FILL);
        self.rect(handle.inset(1), 0x515151, if status == Status::Out { 0x424242 } else { 0x525252 });

        if !params.options.hides_value_label() {
            let text = params.label(value);
            self.text_centered(Point::new(x, bottom_right.y + 11), &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint<F: FnOnce(&mut DrawCtx<'_, Canvas>)>(f: F) -> Canvas {
        let mut canvas = Canvas::new();
        let style = Style::default();
        let surface = SurfaceId(0);
        f(&mut DrawCtx::new(&mut canvas, &surface, &style));
        canvas
    }

    #[test]
    fn button_fill_follows_status() {
        let fills: Vec<Color> = [Status::Out, Status::Over, Status::Down]
            .iter()
            .map(|s| {
                let canvas = paint(|d| d.button(*s, rect(0, 0, 40, 20)));
                match canvas.commands().last() {
                    Some(Command::Rect { color, fill: Fill::Solid, rect, .. }) => {
                        assert_eq!(*rect, Rect::new(2, 2, 36, 16));
                        *color
                    }
                    other => panic!("unexpected {:?}", other),
                }
            })
            .collect();
        assert_eq!(fills, vec![hex(0x424242), hex(0x525252), hex(0x323232)]);
    }

    #[test]
    fn shortcut_label_is_split_and_underlined() {
        let canvas = paint(|d| d.button_label(Status::Over, rect(0, 0, 80, 30), "Re&start"));
        assert_eq!(canvas.texts(), vec!["Re", "s", "tart"]);
        // centered on the raw label, marker included: 8 glyphs of 8 px
        let underline = canvas.commands().iter().find_map(|c| match c {
            Command::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        });
        assert_eq!(underline, Some((point(8 + 16, 22), point(8 + 24, 22))));
    }

    #[test]
    fn transparent_fill_is_skipped() {
        let canvas = paint(|d| d.rect(rect(0, 0, 5, 5), 0xFF0000, 0xff000000));
        assert_eq!(canvas.commands().len(), 1);
        let canvas = paint(|d| d.rect(rect(0, 0, 5, 5), 0xFF0000, 0x00FF00));
        assert_eq!(canvas.commands().len(), 2);
    }

    #[test]
    fn trackbar_options_hide_labels() {
        let params = TrackbarParams::new(0.0, 10.0, 1.0, 2, "%.0Lf", TrackbarOptions::NONE);
        let canvas = paint(|d| d.trackbar(Status::Out, rect(0, 0, 150, 45), 5.0, &params));
        // min, 3 segment ticks, max, value
        assert_eq!(canvas.texts(), vec!["0", "0", "5", "10", "10", "5"]);

        let hidden = TrackbarParams { options: TrackbarOptions::HIDE_LABELS, ..params.clone() };
        let canvas = paint(|d| d.trackbar(Status::Out, rect(0, 0, 150, 45), 5.0, &hidden));
        assert_eq!(canvas.texts(), vec!["5"]);

        let bare = TrackbarParams { options: TrackbarOptions::HIDE_LABELS | TrackbarOptions::HIDE_VALUE_LABEL, ..params };
        let canvas = paint(|d| d.trackbar(Status::Out, rect(0, 0, 150, 45), 5.0, &bare));
        assert!(canvas.texts().is_empty());
    }
}
