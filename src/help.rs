use crate::terminal::Terminal;
use crossterm::cursor::MoveTo;
use crossterm::event::KeyCode;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, stdout, Write};

/// Draw a centered modal overlay, wait for a key, then restore the frame
/// from the back buffer. Returns true if the user asked to quit while the
/// overlay was open.
pub fn show_help_modal(term: &mut Terminal, help_text: &str) -> io::Result<bool> {
    if help_text.is_empty() {
        return Ok(false);
    }

    let (width, height) = term.size();
    draw_overlay(width, height, help_text)?;

    loop {
        if let Some(code) = term.wait_key(50)? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                _ => break,
            }
        }
    }

    term.render()?;
    Ok(false)
}

fn draw_overlay(width: u16, height: u16, text: &str) -> io::Result<()> {
    let lines: Vec<&str> = text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4;
    let box_height = lines.len() + 2;

    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;

    let mut out = stdout();

    queue!(
        out,
        MoveTo(start_x as u16, start_y as u16),
        SetForegroundColor(Color::White),
        Print(format!("┌{}┐", "─".repeat(box_width - 2)))
    )?;

    for (i, line) in lines.iter().enumerate() {
        let y = (start_y + 1 + i) as u16;
        let padding = max_width.saturating_sub(line.chars().count());
        queue!(
            out,
            MoveTo(start_x as u16, y),
            Print(format!("│ {}{} │", line, " ".repeat(padding)))
        )?;
    }

    let bottom_y = (start_y + box_height - 1) as u16;
    queue!(
        out,
        MoveTo(start_x as u16, bottom_y),
        Print(format!("└{}┘", "─".repeat(box_width - 2))),
        ResetColor
    )?;

    out.flush()?;
    Ok(())
}
