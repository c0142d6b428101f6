//! Clock rendering.

use horologe_domain::{ClockState, DisplayStyle};

const GLYPH_ROWS: usize = 5;

type Glyph = [&'static str; GLYPH_ROWS];

const DIGITS: [Glyph; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const COLON: Glyph = [" ", "█", " ", "█", " "];
const BLANK: Glyph = ["   ", "   ", "   ", "   ", "   "];

/// Turns a [`ClockState`] into text.
///
/// Output depends only on the state, and every frame for a given style has
/// the same shape, so a new frame exactly covers the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockDisplay {
    style: DisplayStyle,
}

impl ClockDisplay {
    /// Creates a display with the given style.
    #[must_use]
    pub const fn new(style: DisplayStyle) -> Self {
        Self { style }
    }

    /// The active style.
    #[must_use]
    pub const fn style(&self) -> DisplayStyle {
        self.style
    }

    /// Renders `state` as a frame.
    #[must_use]
    pub fn render(&self, state: &ClockState) -> String {
        match self.style {
            DisplayStyle::Plain => state.to_string(),
            DisplayStyle::Large => render_large(&state.to_string()),
        }
    }
}

fn render_large(text: &str) -> String {
    let glyphs: Vec<&Glyph> = text.chars().map(glyph).collect();

    (0..GLYPH_ROWS)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn glyph(c: char) -> &'static Glyph {
    match c {
        ':' => &COLON,
        _ => c
            .to_digit(10)
            .and_then(|d| DIGITS.get(d as usize))
            .unwrap_or(&BLANK),
    }
}
