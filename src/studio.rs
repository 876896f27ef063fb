//! Interactive fractal painting studio
//!
//! Click anywhere on the canvas to paint the current fractal. Keyboard
//! controls pick the pattern, recursion depth, base size, and paint color;
//! the bottom row shows the live settings.
//!
//! Controls:
//! - click: Paint at the pointer
//! - t/Tab: Cycle fractal kind
//! - +/- (or Up/Down): Depth
//! - [/] (or Left/Right): Size
//! - 1-6: Paint color
//! - c: Clear canvas
//! - ?: Help overlay
//! - q/Esc: Quit

use crate::canvas::{Canvas, DOTS_X, DOTS_Y};
use crate::colors::ColorState;
use crate::config::{FractalKind, PaintConfig, PrintConfig, DEPTH_MAX, DEPTH_MIN, SIZE_MAX, SIZE_MIN};
use crate::geometry::{self, GenerationRequest, Point};
use crate::help::show_help_modal;
use crate::terminal::{InputEvent, Terminal};
use crossterm::event::KeyCode;
use crossterm::style::Color;
use rand::prelude::*;
use std::io;

const HELP: &str = "\
FRACTAL PAINT
─────────────────
click  Paint at the pointer
t/Tab  Cycle fractal
+/-    Depth (1-9)
[/]    Size (40-220)
1-6    Paint color
c      Clear canvas
?      Close help
q/Esc  Quit";

/// Tree and fern fronds launch straight up from the click point
const LAUNCH_ANGLE: f64 = -90.0;
/// Size change per keypress
const SIZE_STEP: f64 = 10.0;
/// Poll interval when nothing is happening
const IDLE_POLL_MS: u64 = 250;

/// Current control values
struct StudioState {
    kind: FractalKind,
    depth: u32,
    size: f64,
    colors: ColorState,
}

impl StudioState {
    /// Handle a settings key. Returns true if anything changed.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('t') | KeyCode::Tab => self.kind = self.kind.next(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.depth = (self.depth + 1).min(DEPTH_MAX);
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.depth = self.depth.saturating_sub(1).max(DEPTH_MIN);
            }
            KeyCode::Char(']') | KeyCode::Right => {
                self.size = (self.size + SIZE_STEP).min(SIZE_MAX);
            }
            KeyCode::Char('[') | KeyCode::Left => {
                self.size = (self.size - SIZE_STEP).max(SIZE_MIN);
            }
            code => return self.colors.handle_key(code),
        }
        true
    }

    fn request(&self, origin: Point, color: Color) -> GenerationRequest {
        GenerationRequest::new(origin, self.size, LAUNCH_ANGLE, self.depth, color)
    }
}

/// Run the interactive studio
pub fn run(config: PaintConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    // the bottom row is the status bar
    let mut canvas = Canvas::new(width, height.saturating_sub(1));

    let mut state = StudioState {
        kind: config.kind,
        depth: config.depth,
        size: config.size,
        colors: match &config.palette {
            Some(palette) => ColorState::from_palette(palette),
            None => ColorState::new(),
        },
    };

    term.clear_screen()?;
    let mut dirty = true;

    loop {
        if dirty {
            present(&mut term, &canvas, &state)?;
            dirty = false;
        }

        let timeout = if config.demo {
            (config.time_wait * 1000.0).max(1.0) as u64
        } else {
            IDLE_POLL_MS
        };

        match term.poll_event(timeout)? {
            Some(InputEvent::Key(code, _)) => match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') => {
                    canvas.clear();
                    term.clear();
                    term.clear_screen()?;
                    dirty = true;
                }
                KeyCode::Char('?') => {
                    if show_help_modal(&mut term, HELP)? {
                        break;
                    }
                }
                code => dirty = state.handle_key(code) || dirty,
            },
            Some(InputEvent::Click(col, row)) => {
                if row + 1 < term.size().1 {
                    let color = state.colors.color();
                    paint(&mut term, &mut canvas, &state, col, row, color, &config)?;
                    dirty = true;
                }
            }
            Some(InputEvent::Resize(new_w, new_h)) => {
                term.resize(new_w, new_h);
                canvas.resize(new_w, new_h.saturating_sub(1));
                term.clear_screen()?;
                dirty = true;
            }
            None => {
                if config.demo {
                    let (w, h) = term.size();
                    if w > 0 && h > 1 {
                        let col = rng.gen_range(0..w);
                        let row = rng.gen_range(0..h - 1);
                        let color = state.colors.color_at(rng.gen_range(0..state.colors.len()));
                        paint(&mut term, &mut canvas, &state, col, row, color, &config)?;
                        dirty = true;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Generate one fractal at a cell position and rasterize it
fn paint(
    term: &mut Terminal,
    canvas: &mut Canvas,
    state: &StudioState,
    col: u16,
    row: u16,
    color: Color,
    config: &PaintConfig,
) -> io::Result<()> {
    let origin = Point::new(f64::from(col) * DOTS_X as f64, f64::from(row) * DOTS_Y as f64);
    let segments = geometry::generate(state.kind, &state.request(origin, color));

    for segment in &segments {
        canvas.draw_segment(segment);
        if config.live {
            present(term, canvas, state)?;
            term.sleep(config.time_step);
        }
    }
    Ok(())
}

fn present(term: &mut Terminal, canvas: &Canvas, state: &StudioState) -> io::Result<()> {
    canvas.flush(term);
    draw_status(term, state);
    term.render()
}

fn draw_status(term: &mut Terminal, state: &StudioState) {
    let (width, height) = term.size();
    if height == 0 {
        return;
    }
    let row = height as i32 - 1;
    for x in 0..width as i32 {
        term.set(x, row, ' ', None, false);
    }

    let label = format!(
        " {}  depth {}  size {}  color {}",
        state.kind.display_name(),
        state.depth,
        state.size as u32,
        state.colors.name(),
    );
    term.set_str(0, row, &label, Some(state.colors.color()), true);

    let hint = "t:type +/-:depth [/]:size 1-6:color c:clear ?:help q:quit ";
    let hint_x = width as i32 - hint.chars().count() as i32;
    if hint_x > label.chars().count() as i32 + 2 {
        term.set_str(hint_x, row, hint, Some(Color::DarkGrey), false);
    }
}

/// Render one fractal to stdout and exit
pub fn print(config: PrintConfig) -> io::Result<()> {
    let mut canvas = Canvas::new(config.width, config.height);
    let mut term = Terminal::with_size(config.width, config.height);

    let mut colors = match &config.palette {
        Some(palette) => ColorState::from_palette(palette),
        None => ColorState::new(),
    };
    colors.select(config.color.saturating_sub(1));

    let (dot_w, dot_h) = canvas.dot_size();
    let origin = Point::new(dot_w as f64 / 2.0, dot_h as f64 / 2.0);
    let request =
        GenerationRequest::new(origin, config.size, LAUNCH_ANGLE, config.depth, colors.color());

    for segment in &geometry::generate(config.kind, &request) {
        canvas.draw_segment(segment);
    }

    canvas.flush(&mut term);
    term.print_to_stdout();
    Ok(())
}
