use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Default paint palette. The studio assumes a dark terminal background,
/// so these are the bright neon swatches.
pub const PALETTE: [(&str, Color); 6] = [
    ("aqua", Color::Rgb { r: 0x00, g: 0xff, b: 0xcc }),
    ("pink", Color::Rgb { r: 0xff, g: 0x00, b: 0x66 }),
    ("green", Color::Rgb { r: 0x00, g: 0xff, b: 0x00 }),
    ("amber", Color::Rgb { r: 0xff, g: 0xaa, b: 0x00 }),
    ("sky", Color::Rgb { r: 0x66, g: 0xaa, b: 0xff }),
    ("white", Color::Rgb { r: 0xff, g: 0xff, b: 0xff }),
];

/// Currently selected paint color
#[derive(Clone)]
pub struct ColorState {
    entries: Vec<(String, Color)>,
    selected: usize,
}

impl ColorState {
    pub fn new() -> Self {
        Self {
            entries: PALETTE.iter().map(|&(n, c)| (n.to_string(), c)).collect(),
            selected: 0,
        }
    }

    /// Build from user-supplied "#rrggbb" strings, keeping the default
    /// swatch for any slot that fails to parse.
    pub fn from_palette(hex: &[String]) -> Self {
        let mut state = Self::new();
        for (i, entry) in hex.iter().enumerate().take(state.entries.len()) {
            match parse_hex(entry) {
                Some(color) => {
                    state.entries[i] = (entry.trim_start_matches('#').to_string(), color);
                }
                None => eprintln!("Ignoring bad palette entry: {}", entry),
            }
        }
        state
    }

    /// Handle the palette selection keys (1-6). Returns true if handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if let KeyCode::Char(c) = code {
            if let Some(slot) = c.to_digit(10) {
                let slot = slot as usize;
                if (1..=self.entries.len()).contains(&slot) {
                    self.selected = slot - 1;
                    return true;
                }
            }
        }
        false
    }

    pub fn select(&mut self, slot: usize) {
        self.selected = slot.min(self.entries.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn color(&self) -> Color {
        self.entries[self.selected].1
    }

    pub fn color_at(&self, idx: usize) -> Color {
        self.entries[idx % self.entries.len()].1
    }

    pub fn name(&self) -> &str {
        &self.entries[self.selected].0
    }
}

/// Parse "#rrggbb" (leading '#' optional) into an RGB color
pub fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            parse_hex("#00ffcc"),
            Some(Color::Rgb { r: 0x00, g: 0xff, b: 0xcc })
        );
        assert_eq!(
            parse_hex("FFaa00"),
            Some(Color::Rgb { r: 0xff, g: 0xaa, b: 0x00 })
        );
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn digit_keys_select_slots() {
        let mut state = ColorState::new();
        assert!(state.handle_key(KeyCode::Char('3')));
        assert_eq!(state.name(), "green");
        assert!(!state.handle_key(KeyCode::Char('7')));
        assert!(!state.handle_key(KeyCode::Char('0')));
        assert_eq!(state.name(), "green");
    }

    #[test]
    fn custom_palette_overrides_leading_slots() {
        let state = ColorState::from_palette(&["#112233".to_string(), "junk".to_string()]);
        assert_eq!(state.color_at(0), Color::Rgb { r: 0x11, g: 0x22, b: 0x33 });
        // the bad entry keeps the default swatch
        assert_eq!(state.color_at(1), PALETTE[1].1);
    }
}
