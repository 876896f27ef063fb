use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Input the studio reacts to
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Key(KeyCode, KeyModifiers),
    /// Left button press at (column, row)
    Click(u16, u16),
    Resize(u16, u16),
}

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    interactive: bool,
}

/// A single cell in the back buffer
#[derive(Clone)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

impl Terminal {
    /// Take over the terminal: raw mode, alternate screen, mouse capture
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;

        Ok(Self {
            width,
            height,
            buffer: vec![vec![Cell::default(); width as usize]; height as usize],
            interactive: true,
        })
    }

    /// Fixed-size off-screen buffer. Touches nothing on the real terminal,
    /// so it works in pipes and tests.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            buffer: vec![vec![Cell::default(); width as usize]; height as usize],
            interactive: false,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    }

    /// Clear the back buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            for cell in row {
                *cell = Cell::default();
            }
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    /// Set a character at position with optional color
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bold };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    /// Render the entire back buffer to the screen
    pub fn render(&self) -> io::Result<()> {
        let mut out = stdout();

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;

            for cell in row {
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                match cell.fg {
                    Some(color) => {
                        queue!(out, SetForegroundColor(color), Print(cell.ch), ResetColor)?
                    }
                    None => queue!(out, Print(cell.ch))?,
                }
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Poll for input with a timeout. Returns at most one event; mouse
    /// events other than a left-button press are swallowed.
    pub fn poll_event(&self, timeout_ms: u64) -> io::Result<Option<InputEvent>> {
        if poll(Duration::from_millis(timeout_ms))? {
            match read()? {
                Event::Key(key) => return Ok(Some(InputEvent::Key(key.code, key.modifiers))),
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        return Ok(Some(InputEvent::Click(mouse.column, mouse.row)));
                    }
                }
                Event::Resize(w, h) => return Ok(Some(InputEvent::Resize(w, h))),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Wait for a keypress with timeout (used by overlays)
    pub fn wait_key(&self, timeout_ms: u64) -> io::Result<Option<KeyCode>> {
        if poll(Duration::from_millis(timeout_ms))? {
            if let Event::Key(key) = read()? {
                return Ok(Some(key.code));
            }
        }
        Ok(None)
    }

    pub fn sleep(&self, seconds: f32) {
        std::thread::sleep(Duration::from_secs_f32(seconds));
    }

    /// Dump the back buffer to stdout with ANSI colors (print mode).
    /// The studio only ever paints RGB palette colors, so the fallback
    /// arms stay plain.
    pub fn print_to_stdout(&self) {
        for row in &self.buffer {
            for cell in row {
                match cell.fg {
                    Some(Color::Rgb { r, g, b }) if cell.ch != ' ' => {
                        print!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, cell.ch);
                    }
                    Some(Color::AnsiValue(v)) if cell.ch != ' ' => {
                        print!("\x1b[38;5;{}m{}\x1b[0m", v, cell.ch);
                    }
                    _ => print!("{}", cell.ch),
                }
            }
            println!();
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.interactive {
            let _ = execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

/// Best-effort terminal size with a sane fallback for pipes
pub fn detect_size() -> (u16, u16) {
    size().unwrap_or((100, 40))
}
