/// Recursion depth range enforced by the studio controls
pub const DEPTH_MIN: u32 = 1;
pub const DEPTH_MAX: u32 = 9;

/// Base size range (in canvas dots) enforced by the studio controls
pub const SIZE_MIN: f64 = 40.0;
pub const SIZE_MAX: f64 = 220.0;

pub const DEFAULT_DEPTH: u32 = 6;
pub const DEFAULT_SIZE: f64 = 120.0;

/// The four fractal patterns the studio can paint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Tree,   // recursive binary tree
    Spiral, // nested quarter-circle arcs
    Koch,   // Koch snowflake outline
    Fern,   // three-way frond
}

impl FractalKind {
    pub const ALL: [FractalKind; 4] = [
        FractalKind::Tree,
        FractalKind::Spiral,
        FractalKind::Koch,
        FractalKind::Fern,
    ];

    /// Parse a user-supplied name, accepting a few aliases
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "tree" => Some(FractalKind::Tree),
            "spiral" => Some(FractalKind::Spiral),
            "koch" | "snowflake" | "koch-snowflake" => Some(FractalKind::Koch),
            "fern" => Some(FractalKind::Fern),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FractalKind::Tree => "Tree",
            FractalKind::Spiral => "Spiral",
            FractalKind::Koch => "Koch Snowflake",
            FractalKind::Fern => "Fern",
        }
    }

    /// Next kind in display order, wrapping (the type-cycling key)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Configuration for the interactive studio
#[derive(Clone)]
pub struct PaintConfig {
    pub kind: FractalKind,
    pub depth: u32,
    pub size: f64,
    pub live: bool,
    pub time_step: f32,
    pub demo: bool,
    pub time_wait: f64,
    pub seed: Option<u64>,
    pub palette: Option<Vec<String>>,
}

/// Configuration for one-shot stdout rendering
#[derive(Clone)]
pub struct PrintConfig {
    pub kind: FractalKind,
    pub depth: u32,
    pub size: f64,
    pub width: u16,
    pub height: u16,
    pub color: usize,
    pub palette: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(FractalKind::parse("Tree"), Some(FractalKind::Tree));
        assert_eq!(FractalKind::parse("KOCH"), Some(FractalKind::Koch));
        assert_eq!(FractalKind::parse("snowflake"), Some(FractalKind::Koch));
        assert_eq!(FractalKind::parse("fern"), Some(FractalKind::Fern));
        assert_eq!(FractalKind::parse("mandelbrot"), None);
    }

    #[test]
    fn next_cycles_through_all_kinds() {
        let mut kind = FractalKind::Tree;
        for _ in 0..FractalKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, FractalKind::Tree);
    }
}
