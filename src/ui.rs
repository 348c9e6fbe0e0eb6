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
use std::fmt;

use crate::context::ContextRegistry;
use crate::draw_context::DrawCtx;
use crate::layout::BlockStack;
use crate::window::key_to_char;
use crate::*;

/// Resolved position of one widget call.
struct Target<S> {
    surface: S,
    origin: Point,
    flow: bool,
}

/// Primary entry point: window registry, layout stack and widgets over a renderer.
///
/// Every widget takes a [`Place`]. `Place::At` draws at an explicit position
/// on an explicit surface; `Place::Flow` draws at the anchor of the innermost
/// open row or column and advances it by the widget size.
pub struct Ui<R: Renderer> {
    renderer: R,
    style: Style,
    contexts: ContextRegistry,
    blocks: BlockStack<R::Surface>,
    last_key: Option<char>,
    delay_wait_key: i32,
    frame_invalid: bool,
}

impl<R: Renderer> Ui<R> {
    /// Creates an engine drawing through `renderer` with the default style.
    pub fn new(renderer: R) -> Self { Self::with_style(renderer, Style::default()) }

    /// Creates an engine with an explicit style.
    pub fn with_style(renderer: R, style: Style) -> Self {
        Self {
            renderer,
            style,
            contexts: ContextRegistry::default(),
            blocks: BlockStack::default(),
            last_key: None,
            delay_wait_key: -1,
            frame_invalid: false,
        }
    }

    /// The renderer.
    pub fn renderer(&self) -> &R { &self.renderer }

    /// Mutable access to the renderer, e.g. to flush recorded commands.
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    /// Current widget metrics.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the widget metrics.
    pub fn set_style(&mut self, style: Style) { self.style = style; }
}

// Windows and frames
impl<R: Renderer> Ui<R> {
    /// Watches `window` and makes it the default and current context.
    ///
    /// A positive `delay_wait_key` makes [`Ui::update_with`] poll the window
    /// source for a key every frame.
    pub fn init(&mut self, window: &str, delay_wait_key: i32) -> ContextHandle {
        let handle = self.watch(window);
        self.contexts.set_default(window);
        self.delay_wait_key = delay_wait_key;
        self.last_key = None;
        tracing::debug!(window, delay_wait_key, "init");
        handle
    }

    /// Watches every window; the first one becomes the default context.
    pub fn init_windows(&mut self, windows: &[&str], delay_wait_key: i32) -> Vec<ContextHandle> {
        let handles: Vec<_> = windows.iter().map(|w| self.watch(w)).collect();
        if let Some(first) = windows.first() {
            self.contexts.set_default(first);
        }
        self.delay_wait_key = delay_wait_key;
        self.last_key = None;
        tracing::debug!(?windows, delay_wait_key, "init");
        handles
    }

    /// Like [`Ui::init`], creating the window and wiring its mouse callback through `source`.
    pub fn init_with<W: WindowSource>(&mut self, source: &mut W, window: &str, delay_wait_key: i32, create: bool) -> ContextHandle {
        let handle = self.watch_with(source, window, create);
        self.contexts.set_default(window);
        self.delay_wait_key = delay_wait_key;
        self.last_key = None;
        tracing::debug!(window, delay_wait_key, "init");
        handle
    }

    /// Starts tracking mouse state for `window`.
    ///
    /// The returned handle is what the host feeds mouse events into. Watching
    /// a window again replaces its state.
    pub fn watch(&mut self, window: &str) -> ContextHandle {
        tracing::debug!(window, "watch");
        self.contexts.watch(window)
    }

    /// Watches `window` and routes its mouse events from `source`.
    pub fn watch_with<W: WindowSource>(&mut self, source: &mut W, window: &str, create: bool) -> ContextHandle {
        if create {
            source.create_window(window);
        }
        let handle = self.watch(window);
        source.set_mouse_callback(window, handle.clone());
        handle
    }

    /// Makes `window` the context of the following calls.
    pub fn context(&mut self, window: &str) -> Result<()> {
        if !self.contexts.is_watched(window) {
            return Err(Error::UnwatchedWindow(window.to_string()));
        }
        self.contexts.set_current(window);
        Ok(())
    }

    /// Feeds a mouse event to a watched window.
    pub fn handle_mouse(&self, window: &str, kind: MouseEventKind, x: i32, y: i32, flags: EventFlags) -> Result<()> {
        self.contexts.resolve(Some(window))?.handle_mouse(kind, x, y, flags);
        Ok(())
    }

    /// Ends the frame of `window` (or the current context).
    ///
    /// Clears the one-shot button flags and the last key, re-arms an
    /// invalidated frame and fails with [`Error::UnfinishedBlocks`] if rows or
    /// columns are still open. The open blocks are discarded in that case.
    ///
    /// The frame is reset even when `window` cannot be resolved; that error
    /// takes precedence over [`Error::UnfinishedBlocks`].
    pub fn update(&mut self, window: Option<&str>) -> Result<()> {
        let cleared = self.contexts.resolve(window).map(|c| c.clear_edges());
        self.last_key = None;
        let finished = self.finish_frame();
        cleared.and(finished)
    }

    /// Like [`Ui::update`], then polls `source` for a key when a wait-key delay is configured.
    pub fn update_with<W: WindowSource>(&mut self, source: &mut W, window: Option<&str>) -> Result<()> {
        let cleared = self.contexts.resolve(window).map(|c| c.clear_edges());
        self.last_key = None;
        if cleared.is_ok() && self.delay_wait_key > 0 {
            self.last_key = source.wait_key(self.delay_wait_key).and_then(key_to_char);
        }
        let finished = self.finish_frame();
        cleared.and(finished)
    }

    /// Runs `f` as one frame of `window` and calls [`Ui::update`] afterwards.
    ///
    /// The update runs even when `f` fails; the first error is returned.
    pub fn frame<F: FnOnce(&mut Self) -> Result<()>>(&mut self, window: Option<&str>, f: F) -> Result<()> {
        let res = f(self);
        let updated = self.update(window);
        res.and(updated)
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.frame_invalid = false;
        if self.blocks.is_empty() {
            return Ok(());
        }
        let err = Error::UnfinishedBlocks(self.blocks.depth());
        tracing::warn!(error = %err, code = err.code(), "update with open blocks");
        self.blocks.clear();
        Err(err)
    }

    /// Key pressed during the last `update_with`, or set with [`Ui::set_last_key`].
    pub fn last_key_pressed(&self) -> Option<char> { self.last_key }

    /// Sets the key that button shortcuts compare against until the next update.
    pub fn set_last_key(&mut self, key: Option<char>) { self.last_key = key; }

    /// Delay passed to [`WindowSource::wait_key`], non-positive when keys are not polled.
    pub fn delay_wait_key(&self) -> i32 { self.delay_wait_key }

    /// Returns `false` after a layout error, until the next update.
    pub fn is_frame_valid(&self) -> bool { !self.frame_invalid }
}

// Mouse
impl<R: Renderer> Ui<R> {
    fn mouse(&self) -> Result<Mouse> { Ok(self.contexts.resolve(None)?.mouse()) }

    /// Cursor position in `window`, or in the current context.
    pub fn mouse_position(&self, window: Option<&str>) -> Result<Point> { Ok(self.contexts.resolve(window)?.mouse().position) }

    /// Asks `query` about any button of `window`.
    pub fn mouse_query(&self, window: Option<&str>, query: MouseQuery) -> Result<bool> { Ok(self.contexts.resolve(window)?.mouse().any_button.is(query)) }

    /// Asks `query` about one button, identified by its raw id (0 left, 1 middle, 2 right).
    pub fn mouse_button_query(&self, window: Option<&str>, button: i32, query: MouseQuery) -> Result<bool> {
        let id = ButtonId::try_from(button)?;
        Ok(self.contexts.resolve(window)?.mouse().button(id).is(query))
    }

    /// Interaction status of an arbitrary area in the current context.
    pub fn iarea(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Status> { Ok(iarea(Rect::new(x, y, width, height), &self.mouse()?)) }
}

// Layout
impl<R: Renderer> Ui<R> {
    fn check_frame(&self) -> Result<()> {
        if self.frame_invalid {
            return Err(Error::FrameInvalidated);
        }
        Ok(())
    }

    fn layout_error(&mut self, err: Error) -> Error {
        if err.is_layout() {
            tracing::warn!(error = %err, code = err.code(), depth = self.blocks.depth(), "frame invalidated");
            self.blocks.clear();
            self.frame_invalid = true;
        }
        err
    }

    fn target(&mut self, place: Place<R::Surface>) -> Result<Target<R::Surface>> {
        match place {
            Place::At { surface, x, y } => Ok(Target { surface, origin: Point::new(x, y), flow: false }),
            Place::Flow => {
                self.check_frame()?;
                let top = self.blocks.top().map(|b| (b.surface.clone(), b.anchor));
                match top {
                    Ok((surface, origin)) => Ok(Target { surface, origin, flow: true }),
                    Err(e) => Err(self.layout_error(e)),
                }
            }
        }
    }

    fn advance(&mut self, target: &Target<R::Surface>, size: Size) {
        if !target.flow {
            return;
        }
        if let Ok(top) = self.blocks.top_mut() {
            top.update_layout_flow(size);
        }
    }

    fn begin(&mut self, kind: BlockKind, place: Place<R::Surface>, width: i32, height: i32, padding: i32) -> Result<()> {
        self.check_frame()?;
        let t = self.target(place)?;
        self.blocks.begin(kind, t.surface, t.origin.x, t.origin.y, width, height, padding);
        Ok(())
    }

    fn end(&mut self, kind: BlockKind) -> Result<()> {
        self.check_frame()?;
        let res = self.blocks.end(kind).map(|_| ());
        res.map_err(|e| self.layout_error(e))
    }

    /// Opens a row. Negative `width`/`height` size the row from its children.
    pub fn begin_row(&mut self, place: Place<R::Surface>, width: i32, height: i32, padding: i32) -> Result<()> { self.begin(BlockKind::Row, place, width, height, padding) }

    /// Closes the innermost row.
    pub fn end_row(&mut self) -> Result<()> { self.end(BlockKind::Row) }

    /// Opens a column. Negative `width`/`height` size the column from its children.
    pub fn begin_column(&mut self, place: Place<R::Surface>, width: i32, height: i32, padding: i32) -> Result<()> { self.begin(BlockKind::Column, place, width, height, padding) }

    /// Closes the innermost column.
    pub fn end_column(&mut self) -> Result<()> { self.end(BlockKind::Column) }

    /// Leaves `value` pixels of room in the innermost row or column.
    pub fn space(&mut self, value: i32) -> Result<()> {
        self.check_frame()?;
        let res = self.blocks.top_mut().map(|top| top.update_layout_flow(Size::new(value, value)));
        res.map_err(|e| self.layout_error(e))
    }

    /// [`Ui::space`] with the style's default gap.
    pub fn space_default(&mut self) -> Result<()> { self.space(self.style.space) }
}

// Widgets
impl<R: Renderer> Ui<R> {
    /// Text in the default scale and color.
    pub fn text(&mut self, place: Place<R::Surface>, text: &str) -> Result<()> {
        let (scale, color) = (self.style.font_scale, self.style.text_color);
        self.text_styled(place, text, scale, color)
    }

    /// Text with its top-left corner at the place. `color` is `0xTTRRGGBB`.
    pub fn text_styled(&mut self, place: Place<R::Surface>, text: &str, scale: f64, color: u32) -> Result<()> {
        let t = self.target(place)?;
        let size: Size = self.renderer.text_size(text, scale).into();
        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).text(text, Point::new(t.origin.x, t.origin.y + size.height), scale, color);
        // one extra pixel so stacked lines do not touch
        self.advance(&t, Size::new(size.width, size.height + 1));
        Ok(())
    }

    /// Formatted text, e.g. `ui.print(place, 0.4, 0xCECECE, format_args!("fps: {}", fps))`.
    pub fn print(&mut self, place: Place<R::Surface>, scale: f64, color: u32, args: fmt::Arguments<'_>) -> Result<()> { self.text_styled(place, &args.to_string(), scale, color) }

    fn button_at(&mut self, surface: &R::Surface, origin: Point, width: i32, height: i32, label: &str) -> Result<bool> {
        let shape = Rect::new(origin.x, origin.y, width, height);
        let status = iarea(shape, &self.mouse()?);
        let mut draw = DrawCtx::new(&mut self.renderer, surface, &self.style);
        draw.button(status, shape);
        draw.button_label(status, shape, label);
        Ok(button_fired(status, &Label::parse(label), self.last_key))
    }

    /// Button sized to its label. Returns `true` when clicked or when its shortcut key was pressed.
    pub fn button(&mut self, place: Place<R::Surface>, label: &str) -> Result<bool> {
        let text: Size = self.renderer.text_size(label, self.style.font_scale).into();
        let pad = self.style.button_padding;
        self.button_sized(place, text.width + pad.width, text.height + pad.height, label)
    }

    /// Button with an explicit size.
    pub fn button_sized(&mut self, place: Place<R::Surface>, width: i32, height: i32, label: &str) -> Result<bool> {
        let t = self.target(place)?;
        let fired = self.button_at(&t.surface, t.origin, width, height, label)?;
        self.advance(&t, Size::new(width, height));
        Ok(fired)
    }

    /// Button drawn with one of three images, sized like `idle`.
    pub fn image_button(&mut self, place: Place<R::Surface>, idle: &R::Image, over: &R::Image, down: &R::Image) -> Result<bool> {
        let t = self.target(place)?;
        let size: Size = self.renderer.image_size(idle).into();
        let shape = Rect::from_origin(t.origin, size);
        let status = iarea(shape, &self.mouse()?);
        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).image(button_image(status, idle, over, down), shape);
        self.advance(&t, size);
        Ok(status == Status::Click)
    }

    /// Checkbox in the default text color. Returns the (possibly toggled) state.
    pub fn checkbox(&mut self, place: Place<R::Surface>, label: &str, state: &mut bool) -> Result<bool> {
        let color = self.style.text_color;
        self.checkbox_colored(place, label, state, color)
    }

    /// Checkbox with a label color in `0xTTRRGGBB`.
    pub fn checkbox_colored(&mut self, place: Place<R::Surface>, label: &str, state: &mut bool, color: u32) -> Result<bool> {
        let t = self.target(place)?;
        let mouse = self.mouse()?;
        let side = self.style.checkbox_size;
        let text: Size = self.renderer.text_size(label, self.style.font_scale).into();
        let square = Rect::new(t.origin.x, t.origin.y, side, side);
        let hit = checkbox_area(t.origin.x, t.origin.y, side, self.style.checkbox_gap, text.width);
        let status = if hit.contains(&mouse.position) { Status::Over } else { Status::Out };
        let checked = checkbox_toggle(hit, &mouse, state);

        let mut draw = DrawCtx::new(&mut self.renderer, &t.surface, &self.style);
        draw.checkbox(status, square);
        draw.checkbox_label(square, label, text, color);
        if checked {
            draw.checkbox_check(square);
        }
        self.advance(&t, hit.size());
        Ok(checked)
    }

    /// `-` and `+` buttons around a display of `value` rendered with `format`, e.g. `"%d"`.
    ///
    /// Returns the updated value.
    pub fn counter<T: CounterValue>(&mut self, place: Place<R::Surface>, value: &mut T, step: T, format: &str) -> Result<T> {
        let t = self.target(place)?;
        let side = self.style.counter_button_size;
        let display = Rect::new(t.origin.x + side, t.origin.y, self.style.counter_display_width, side);

        let minus = self.button_at(&t.surface, t.origin, side, side, "-")?;
        counter_step(value, step, minus, false);
        let text = NumberFormat::parse(format).format(value.to_display());
        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).counter(display, &text);
        let plus = self.button_at(&t.surface, Point::new(display.x + display.width, t.origin.y), side, side, "+")?;
        counter_step(value, step, false, plus);

        self.advance(&t, Size::new(side * 2 + display.width, display.height));
        Ok(*value)
    }

    /// Trackbar `width` pixels wide. Returns `true` if the value changed this frame.
    pub fn trackbar(&mut self, place: Place<R::Surface>, width: i32, value: &mut f64, params: &TrackbarParams) -> Result<bool> {
        let t = self.target(place)?;
        let mouse = self.mouse()?;
        let area = Rect::new(t.origin.x, t.origin.y, width, self.style.trackbar_height);
        let status = if area.contains(&mouse.position) { Status::Over } else { Status::Out };

        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).trackbar(status, area, *value, params);
        let changed = trackbar_update(params, area, self.style.trackbar_margin_x, &mouse, value);
        self.advance(&t, area.size());
        Ok(changed)
    }

    /// Draws `image` at its own size.
    pub fn image(&mut self, place: Place<R::Surface>, image: &R::Image) -> Result<()> {
        let t = self.target(place)?;
        let size: Size = self.renderer.image_size(image).into();
        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).image(image, Rect::from_origin(t.origin, size));
        self.advance(&t, size);
        Ok(())
    }

    /// Line chart of `values` scaled into `width` x `height`. `color` is `0xTTRRGGBB`.
    pub fn sparkline(&mut self, place: Place<R::Surface>, values: &[f64], width: i32, height: i32, color: u32) -> Result<()> {
        let t = self.target(place)?;
        let shape = Rect::new(t.origin.x, t.origin.y, width, height);
        let (scale, text_color) = (self.style.font_scale, self.style.text_color);
        match (sparkline_placeholder(values.len()), min_max(values)) {
            (None, Some((lo, hi))) => {
                let points = sparkline_points(values, shape, lo, hi);
                DrawCtx::new(&mut self.renderer, &t.surface, &self.style).sparkline(&points, color);
            }
            (message, _) => {
                let message = message.unwrap_or_default();
                let h = self.renderer.text_size(message, scale).height;
                DrawCtx::new(&mut self.renderer, &t.surface, &self.style).text(message, Point::new(t.origin.x, t.origin.y + h), scale, text_color);
            }
        }
        self.advance(&t, shape.size());
        Ok(())
    }

    /// Window frame with a title bar.
    pub fn window(&mut self, place: Place<R::Surface>, width: i32, height: i32, title: &str) -> Result<()> {
        let t = self.target(place)?;
        let th = self.style.title_height;
        let title_bar = Rect::new(t.origin.x, t.origin.y, width, th);
        let content = Rect::new(t.origin.x, t.origin.y + th, width, height - th);
        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).window(title_bar, content, title);
        self.advance(&t, Size::new(width, height));
        Ok(())
    }

    /// Rectangle with a border and a fill, colors in `0xTTRRGGBB`.
    ///
    /// Negative sizes extend left/up from the place. A fill of `0xff000000`
    /// is fully transparent and is not drawn.
    pub fn rect(&mut self, place: Place<R::Surface>, width: i32, height: i32, border: u32, fill: u32) -> Result<()> {
        let t = self.target(place)?;
        let shape = flip_rect(t.origin.x, t.origin.y, width, height);
        DrawCtx::new(&mut self.renderer, &t.surface, &self.style).rect(shape, border, fill);
        self.advance(&t, shape.size());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const S: SurfaceId = SurfaceId(7);

    fn at(x: i32, y: i32) -> Place<SurfaceId> { Place::at(S, x, y) }

    fn ui() -> (Ui<Canvas>, ContextHandle) {
        let mut ui = Ui::new(Canvas::new());
        let handle = ui.init("main", -1);
        (ui, handle)
    }

    fn click(handle: &ContextHandle, x: i32, y: i32) {
        handle.handle_mouse(MouseEventKind::Move, x, y, EventFlags::NONE);
        handle.handle_mouse(MouseEventKind::ButtonDown(ButtonId::Left), x, y, EventFlags::LBUTTON);
        handle.handle_mouse(MouseEventKind::ButtonUp(ButtonId::Left), x, y, EventFlags::NONE);
    }

    fn text_positions(canvas: &Canvas) -> Vec<(String, Point)> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, pos, .. } => Some((text.clone(), *pos)),
                _ => None,
            })
            .collect()
    }

    struct Scripted {
        keys: Vec<i32>,
        created: Vec<String>,
        wired: Vec<ContextHandle>,
    }

    impl WindowSource for Scripted {
        fn create_window(&mut self, name: &str) { self.created.push(name.to_string()); }
        fn set_mouse_callback(&mut self, _name: &str, context: ContextHandle) { self.wired.push(context); }
        fn wait_key(&mut self, _delay: i32) -> Option<i32> { self.keys.pop() }
    }

    #[test]
    fn calls_without_context_fail() {
        let mut ui = Ui::new(Canvas::new());
        assert_eq!(ui.button(at(0, 0), "OK"), Err(Error::NoContext));
        assert_eq!(ui.update(None), Err(Error::NoContext));
        assert_eq!(ui.context("ghost"), Err(Error::UnwatchedWindow("ghost".into())));
    }

    #[test]
    fn click_fires_exactly_once() {
        let (mut ui, handle) = ui();
        // "OK" is 16x9, so the button is 46x27
        click(&handle, 20, 20);
        assert_eq!(ui.button(at(10, 10), "OK"), Ok(true));
        assert_eq!(ui.button(at(10, 10), "OK"), Ok(true));
        assert_eq!(ui.update(None), Ok(()));
        assert_eq!(ui.button(at(10, 10), "OK"), Ok(false));
        assert_eq!(ui.iarea(10, 10, 46, 27), Ok(Status::Over));
    }

    #[test]
    fn click_outside_does_not_fire() {
        let (mut ui, handle) = ui();
        click(&handle, 57, 10);
        assert_eq!(ui.button(at(10, 10), "OK"), Ok(false));
        click(&handle, 56, 37);
        assert_eq!(ui.button(at(10, 10), "OK"), Ok(true));
    }

    #[test]
    fn shortcut_key_fires_button() {
        let (mut ui, _handle) = ui();
        ui.set_last_key(Some('S'));
        assert_eq!(ui.button(at(0, 0), "Re&start"), Ok(true));
        assert_eq!(ui.button(at(0, 0), "&Quit"), Ok(false));
        assert_eq!(ui.update(None), Ok(()));
        assert_eq!(ui.last_key_pressed(), None);
        assert_eq!(ui.button(at(0, 0), "Re&start"), Ok(false));
    }

    #[test]
    fn update_with_polls_keys_when_delay_is_set() {
        let mut source = Scripted { keys: vec!['q' as i32], created: vec![], wired: vec![] };
        let mut ui = Ui::new(Canvas::new());
        let handle = ui.init_with(&mut source, "main", 20, true);
        assert_eq!(source.created, vec!["main".to_string()]);
        assert_eq!(source.wired.len(), 1);

        // the wired handle shares state with the one returned
        source.wired[0].handle_mouse(MouseEventKind::Move, 3, 4, EventFlags::NONE);
        assert_eq!(handle.mouse().position, point(3, 4));

        assert_eq!(ui.update_with(&mut source, None), Ok(()));
        assert_eq!(ui.last_key_pressed(), Some('q'));
        assert_eq!(ui.button(at(0, 0), "&Quit"), Ok(true));
        assert_eq!(ui.update_with(&mut source, None), Ok(()));
        assert_eq!(ui.last_key_pressed(), None);
    }

    #[test]
    fn checkbox_toggles_on_click_inside_only() {
        let (mut ui, handle) = ui();
        let mut checked = false;
        click(&handle, 300, 300);
        assert_eq!(ui.checkbox(at(10, 10), "Check", &mut checked), Ok(false));
        ui.update(None).unwrap();

        click(&handle, 15, 15);
        assert_eq!(ui.checkbox(at(10, 10), "Check", &mut checked), Ok(true));
        assert!(checked);
        ui.update(None).unwrap();
        assert_eq!(ui.checkbox(at(10, 10), "Check", &mut checked), Ok(true));
        // checked box paints the check mark last
        assert!(matches!(ui.renderer().commands().last(), Some(Command::Rect { fill: Fill::Solid, .. })));
    }

    #[test]
    fn row_and_column_flow() {
        let (mut ui, _handle) = ui();
        ui.begin_column(at(0, 0), -1, -1, 0).unwrap();
        ui.begin_row(Place::Flow, -1, -1, 4).unwrap();
        ui.text(Place::Flow, "ab").unwrap();
        ui.text(Place::Flow, "abc").unwrap();
        ui.end_row().unwrap();
        ui.text(Place::Flow, "x").unwrap();
        ui.end_column().unwrap();
        assert_eq!(ui.update(None), Ok(()));

        let texts = text_positions(ui.renderer());
        // glyphs are 8x9, text adds one pixel of height
        assert_eq!(
            texts,
            vec![("ab".to_string(), point(0, 9)), ("abc".to_string(), point(20, 9)), ("x".to_string(), point(0, 19))]
        );
    }

    #[test]
    fn counter_layout_and_steps() {
        let (mut ui, handle) = ui();
        let mut value = 3;
        ui.begin_row(at(0, 0), -1, -1, 0).unwrap();
        click(&handle, 80, 10);
        assert_eq!(ui.counter(Place::Flow, &mut value, 2, "%d"), Ok(5));
        ui.text(Place::Flow, "after").unwrap();
        ui.end_row().unwrap();

        let texts = text_positions(ui.renderer());
        assert!(texts.iter().any(|(t, _)| t == "3"));
        assert_eq!(texts.last().map(|(_, p)| p.x), Some(92));

        let mut ratio = 0.5;
        assert_eq!(ui.counter(at(0, 100), &mut ratio, 0.25, "%.2f"), Ok(0.5));
    }

    #[test]
    fn trackbar_follows_held_cursor() {
        let (mut ui, handle) = ui();
        let params = TrackbarParams::new(0.0, 100.0, 1.0, 1, "%.0Lf", TrackbarOptions::DISCRETE);
        let mut value = 0.0;
        handle.handle_mouse(MouseEventKind::ButtonDown(ButtonId::Left), 14 + 50, 20, EventFlags::LBUTTON);
        // working width 228 - 28 = 200, so 50 px is a quarter
        assert_eq!(ui.trackbar(at(0, 0), 228, &mut value, &params), Ok(true));
        assert_eq!(value, 25.0);
        ui.update(None).unwrap();
        assert_eq!(ui.trackbar(at(0, 0), 228, &mut value, &params), Ok(false));
    }

    #[test]
    fn sparkline_placeholders_still_take_room() {
        let (mut ui, _handle) = ui();
        ui.begin_column(at(0, 0), -1, -1, 0).unwrap();
        ui.sparkline(Place::Flow, &[], 100, 30, 0x00FF00).unwrap();
        ui.sparkline(Place::Flow, &[1.0], 100, 30, 0x00FF00).unwrap();
        ui.sparkline(Place::Flow, &[1.0, 2.0, 3.0], 100, 30, 0x00FF00).unwrap();
        ui.text(Place::Flow, "end").unwrap();
        ui.end_column().unwrap();

        let texts = text_positions(ui.renderer());
        assert_eq!(texts[0], ("No data.".to_string(), point(0, 9)));
        assert_eq!(texts[1], ("Insufficient data points.".to_string(), point(0, 39)));
        assert_eq!(texts[2], ("end".to_string(), point(0, 99)));
        let lines = ui.renderer().commands().iter().filter(|c| matches!(c, Command::Line { .. })).count();
        assert_eq!(lines, 2);
    }

    #[test]
    fn rect_space_and_window_advance_the_flow() {
        let (mut ui, _handle) = ui();
        ui.begin_row(at(10, 10), -1, -1, 0).unwrap();
        ui.rect(Place::Flow, -20, 10, 0xFF0000, 0xff000000).unwrap();
        ui.space_default().unwrap();
        ui.window(Place::Flow, 50, 40, "w").unwrap();
        ui.text(Place::Flow, "z").unwrap();
        ui.end_row().unwrap();

        let first = ui.renderer().commands().first().cloned();
        assert_eq!(first, Some(Command::Rect { surface: S, rect: rect(-10, 10, 20, 10), color: Color::from_hex(0xFF0000), fill: Fill::Outline(1) }));
        let texts = text_positions(ui.renderer());
        assert_eq!(texts.last(), Some(&("z".to_string(), point(10 + 20 + 5 + 50, 19))));
    }

    #[test]
    fn layout_errors_invalidate_the_frame() {
        let (mut ui, handle) = ui();
        assert_eq!(ui.end_row(), Err(Error::Unbalanced));
        assert!(!ui.is_frame_valid());
        assert_eq!(ui.begin_row(at(0, 0), -1, -1, 0), Err(Error::FrameInvalidated));
        assert_eq!(ui.text(Place::Flow, "x"), Err(Error::FrameInvalidated));

        // free-form calls keep working
        click(&handle, 5, 5);
        assert_eq!(ui.button(at(0, 0), "OK"), Ok(true));

        assert_eq!(ui.update(None), Ok(()));
        assert!(ui.is_frame_valid());
        assert_eq!(ui.space(5), Err(Error::MissingBlock));
        ui.update(None).unwrap();

        ui.begin_row(at(0, 0), -1, -1, 0).unwrap();
        assert_eq!(ui.end_column(), Err(Error::MismatchedEnd { open: "Row", requested: "Column" }));
        ui.update(None).unwrap();

        ui.begin_column(at(0, 0), -1, -1, 0).unwrap();
        ui.begin_row(Place::Flow, -1, -1, 0).unwrap();
        assert_eq!(ui.update(None), Err(Error::UnfinishedBlocks(2)));
        assert_eq!(ui.update(None), Ok(()));
    }

    #[test]
    fn failed_update_still_resets_the_frame() {
        let (mut ui, _handle) = ui();
        ui.begin_row(at(0, 0), -1, -1, 0).unwrap();
        assert_eq!(ui.update(Some("typo")), Err(Error::UnwatchedWindow("typo".into())));

        ui.begin_column(at(0, 0), -1, -1, 0).unwrap();
        ui.text(Place::Flow, "x").unwrap();
        ui.end_column().unwrap();
        assert_eq!(ui.update(None), Ok(()));

        assert_eq!(ui.end_row(), Err(Error::Unbalanced));
        assert_eq!(ui.update(Some("typo")), Err(Error::UnwatchedWindow("typo".into())));
        assert!(ui.is_frame_valid());
        assert_eq!(ui.begin_row(at(0, 0), -1, -1, 0), Ok(()));
        assert_eq!(ui.end_row(), Ok(()));
    }

    #[test]
    fn update_with_skips_key_poll_for_unknown_window() {
        let mut source = Scripted { keys: vec!['q' as i32], created: vec![], wired: vec![] };
        let mut ui = Ui::new(Canvas::new());
        ui.init_with(&mut source, "main", 20, false);
        ui.begin_row(at(0, 0), -1, -1, 0).unwrap();
        assert_eq!(ui.update_with(&mut source, Some("typo")), Err(Error::UnwatchedWindow("typo".into())));
        assert_eq!(ui.last_key_pressed(), None);
        assert_eq!(source.keys.len(), 1);
        assert_eq!(ui.update_with(&mut source, None), Ok(()));
        assert_eq!(ui.last_key_pressed(), Some('q'));
    }

    proptest! {
        // each op is (begin, row); the frame is clean iff every call and the update succeed
        #[test]
        fn frame_is_clean_iff_blocks_are_lifo_matched(ops in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..24)) {
            let (mut ui, _handle) = ui();
            let mut open = Vec::new();
            let mut matched = true;
            let mut calls_ok = true;
            for (begin, row) in ops {
                let res = match (begin, row) {
                    (true, true) => ui.begin_row(at(0, 0), -1, -1, 0),
                    (true, false) => ui.begin_column(at(0, 0), -1, -1, 0),
                    (false, true) => ui.end_row(),
                    (false, false) => ui.end_column(),
                };
                calls_ok &= res.is_ok();
                if begin {
                    open.push(row);
                } else if matched {
                    matched = open.pop() == Some(row);
                }
            }
            let updated = ui.update(None);
            prop_assert_eq!(calls_ok && updated.is_ok(), matched && open.is_empty());
            prop_assert!(ui.is_frame_valid());
            prop_assert_eq!(ui.update(None), Ok(()));
        }
    }

    #[test]
    fn mouse_queries() {
        let mut ui = Ui::new(Canvas::new());
        let handles = ui.init_windows(&["a", "b"], -1);
        handles[1].handle_mouse(MouseEventKind::ButtonDown(ButtonId::Right), 9, 9, EventFlags::RBUTTON);

        assert_eq!(ui.mouse_query(None, MouseQuery::Down), Ok(false));
        assert_eq!(ui.mouse_query(Some("b"), MouseQuery::Down), Ok(true));
        assert_eq!(ui.mouse_button_query(Some("b"), 2, MouseQuery::IsDown), Ok(true));
        assert_eq!(ui.mouse_button_query(Some("b"), 0, MouseQuery::IsDown), Ok(false));
        assert_eq!(ui.mouse_button_query(Some("b"), 5, MouseQuery::IsDown), Err(Error::InvalidMouseButton(5)));
        assert_eq!(ui.mouse_position(Some("b")), Ok(point(9, 9)));

        ui.context("b").unwrap();
        assert_eq!(ui.mouse_position(None), Ok(point(9, 9)));
        assert_eq!(ui.update(None), Ok(()));
        assert_eq!(ui.mouse_query(Some("b"), MouseQuery::Down), Ok(false));
        assert_eq!(ui.mouse_query(Some("b"), MouseQuery::IsDown), Ok(true));
        assert_eq!(ui.handle_mouse("c", MouseEventKind::Move, 0, 0, EventFlags::NONE), Err(Error::UnwatchedWindow("c".into())));
    }

    #[test]
    fn frame_runs_update_even_on_error() {
        let (mut ui, handle) = ui();
        click(&handle, 1, 1);
        let res = ui.frame(None, |ui| {
            ui.begin_row(at(0, 0), -1, -1, 0)?;
            ui.end_column()
        });
        assert!(matches!(res, Err(Error::MismatchedEnd { .. })));
        assert!(ui.is_frame_valid());
        assert_eq!(ui.mouse_query(None, MouseQuery::Click), Ok(false));
    }

    #[test]
    fn image_widgets_use_image_size() {
        let (mut ui, handle) = ui();
        let idle = RgbaImage::filled(10, 10, color(1, 1, 1, 255));
        let over = RgbaImage::filled(10, 10, color(2, 2, 2, 255));
        ui.begin_row(at(0, 0), -1, -1, 0).unwrap();
        ui.image(Place::Flow, &idle).unwrap();
        click(&handle, 15, 5);
        assert_eq!(ui.image_button(Place::Flow, &idle, &over, &idle), Ok(true));
        ui.end_row().unwrap();
        let images: Vec<Rect> = ui
            .renderer()
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Image { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(images, vec![rect(0, 0, 10, 10), rect(10, 0, 10, 10)]);
    }
}
