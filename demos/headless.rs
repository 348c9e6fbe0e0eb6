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
//! Runs a few frames of a small panel against the recording canvas.
//!
//! The window source is scripted: every frame it replays a list of mouse
//! events and hands out a key, then the recorded draw commands are summarized.

use cvui_redux::*;
use rand::{Rng, rng};

const WINDOW: &str = "CVUI Headless";
const SCREEN: SurfaceId = SurfaceId(0);

enum Step {
    Mouse(MouseEventKind, i32, i32),
    Key(char),
}

struct ScriptedWindow {
    frames: Vec<Vec<Step>>,
    mouse: Option<ContextHandle>,
}

impl ScriptedWindow {
    fn new(mut frames: Vec<Vec<Step>>) -> Self {
        frames.reverse();
        Self { frames, mouse: None }
    }
}

impl WindowSource for ScriptedWindow {
    fn create_window(&mut self, name: &str) { println!("window '{name}' created"); }

    fn set_mouse_callback(&mut self, _name: &str, context: ContextHandle) { self.mouse = Some(context); }

    fn wait_key(&mut self, _delay: i32) -> Option<i32> {
        let mut key = None;
        for step in self.frames.pop().unwrap_or_default() {
            match step {
                Step::Mouse(kind, x, y) => {
                    if let Some(mouse) = &self.mouse {
                        mouse.handle_mouse(kind, x, y, EventFlags::NONE);
                    }
                }
                Step::Key(c) => key = Some(c as i32),
            }
        }
        key
    }
}

struct State {
    count: i32,
    checked: bool,
    threshold: f64,
    values: Vec<f64>,
    quit: bool,
}

fn panel(ui: &mut Ui<Canvas>, state: &mut State) -> Result<()> {
    ui.window(Place::at(SCREEN, 10, 10), 300, 330, "Headless")?;
    ui.begin_column(Place::at(SCREEN, 20, 40), -1, -1, 8)?;
    ui.print(Place::Flow, 0.4, 0xCECECE, format_args!("Button clicks: {}", state.count))?;

    ui.begin_row(Place::Flow, -1, -1, 10)?;
    if ui.button(Place::Flow, "&Count")? {
        state.count += 1;
    }
    if ui.button(Place::Flow, "&Quit")? {
        state.quit = true;
    }
    ui.end_row()?;

    ui.checkbox(Place::Flow, "Show sparkline", &mut state.checked)?;
    ui.counter(Place::Flow, &mut state.count, 1, "%d")?;
    let params = TrackbarParams::new(0.0, 50.0, 1.0, 5, "%.0Lf", TrackbarOptions::DISCRETE);
    ui.trackbar(Place::Flow, 260, &mut state.threshold, &params)?;
    if state.checked {
        let color = ui.style().sparkline_color;
        ui.sparkline(Place::Flow, &state.values, 260, 60, color)?;
    }
    ui.end_column()
}

fn main() -> Result<()> {
    let mut rand = rng();
    let values = (0..50).map(|_| rand.random_range(0.0..100.0)).collect();
    let mut state = State { count: 0, checked: false, threshold: 10.0, values, quit: false };

    // the "Count" button sits at (20, 58) and is 78x27, the checkbox starts at (20, 93)
    let mut window = ScriptedWindow::new(vec![
        vec![Step::Mouse(MouseEventKind::Move, 40, 65)],
        vec![Step::Mouse(MouseEventKind::ButtonDown(ButtonId::Left), 40, 65), Step::Mouse(MouseEventKind::ButtonUp(ButtonId::Left), 40, 65)],
        vec![Step::Mouse(MouseEventKind::ButtonDown(ButtonId::Left), 25, 95), Step::Mouse(MouseEventKind::ButtonUp(ButtonId::Left), 25, 95)],
        vec![Step::Key('c')],
        vec![Step::Key('q')],
    ]);

    let mut ui = Ui::new(Canvas::new());
    ui.init_with(&mut window, WINDOW, 20, true);

    let mut frame = 0;
    while !state.quit && frame < 10 {
        panel(&mut ui, &mut state)?;
        let commands = ui.renderer_mut().take_commands();
        let texts = commands.iter().filter(|c| matches!(c, Command::Text { .. })).count();
        println!("frame {frame}: {} commands, {texts} texts, count = {}, sparkline = {}", commands.len(), state.count, state.checked);
        ui.update_with(&mut window, None)?;
        frame += 1;
    }
    println!("done after {frame} frames");
    Ok(())
}
