//! Terminal colouring of rendered lines.
//!
//! Lines are wrapped in `<<style>>` tags which [`out`] turns into ANSI escape
//! sequences, e.g. `<<bold red>>text<<reset>>` becomes `ESC[1;31mtextESC[0m`.

use std::fmt;
use std::sync::OnceLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::{Captures, Regex};
use tracing::debug;

use crate::renderer::Renderer;

// ─── Styles ──────────────────────────────────────────────────────────────────

/// Style tag names and their SGR codes.
const STYLE_CODES: &[(&str, &str)] = &[
    ("reset", "0"),
    ("bold", "1"),
    ("dim", "2"),
    ("underscore", "4"),
    ("blink", "5"),
    ("reverse", "7"),
    ("hidden", "8"),
    ("black", "30"),
    ("red", "31"),
    ("green", "32"),
    ("yellow", "33"),
    ("blue", "34"),
    ("magenta", "35"),
    ("cyan", "36"),
    ("white", "37"),
    ("blackbg", "40"),
    ("redbg", "41"),
    ("greenbg", "42"),
    ("yellowbg", "43"),
    ("bluebg", "44"),
    ("magentabg", "45"),
    ("cyanbg", "46"),
    ("whitebg", "47"),
];

fn style_code(name: &str) -> Option<&'static str> {
    let name = name.to_ascii_lowercase();
    STYLE_CODES
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, code)| *code)
}

fn style_tags() -> &'static Regex {
    static STYLE_TAG_RE: OnceLock<Regex> = OnceLock::new();
    STYLE_TAG_RE.get_or_init(|| {
        let names: Vec<&str> = STYLE_CODES.iter().map(|(tag, _)| *tag).collect();
        let pattern = format!(r"(?i)<<\s*((?:(?:{})\s*)+)>>", names.join("|"));
        Regex::new(&pattern).expect("style tag pattern is valid")
    })
}

/// Replace every `<<tag ...>>` group in `text` and prefix a single space.
///
/// With `ansi` the groups become escape sequences; without it they are
/// stripped.
pub fn out(text: &str, ansi: bool) -> String {
    let formatted = style_tags().replace_all(text, |caps: &Captures| {
        if !ansi {
            return String::new();
        }
        let codes: Vec<&str> = caps[1].split_whitespace().filter_map(style_code).collect();
        format!("\x1b[{}m", codes.join(";"))
    });
    format!(" {}", formatted)
}

/// [`out`] followed by a line break.
pub fn outln(text: &str, ansi: bool) -> String {
    format!("{}\n", out(text, ansi))
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// Foreground colours a millipede can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Magenta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Colours cycled over the rendered lines, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    ansi: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![Color::White],
            ansi: true,
        }
    }
}

impl Palette {
    /// Palette from colour names. Unknown names are skipped; if none are
    /// left the palette is plain white.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let colors: Vec<Color> = names
            .into_iter()
            .filter_map(|n| Color::from_name(n.as_ref()))
            .collect();
        if colors.is_empty() {
            return Self::default();
        }
        debug!(?colors, "palette from names");
        Self { colors, ansi: true }
    }

    /// Every colour, in order.
    pub fn rainbow() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
            ansi: true,
        }
    }

    /// A single colour picked at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = Color::ALL.choose(rng).copied().unwrap_or(Color::White);
        debug!(%color, "picked random colour");
        Self {
            colors: vec![color],
            ansi: true,
        }
    }

    /// Strip style tags instead of emitting escape sequences.
    pub fn with_ansi(self, ansi: bool) -> Self {
        Self { ansi, ..self }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Colour used for line number `index`.
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Paint every line of `renderer`. Each item ends with a line break.
    pub fn paint<'a>(&'a self, renderer: &'a Renderer) -> impl Iterator<Item = String> + 'a {
        renderer.lines().enumerate().map(move |(index, line)| {
            let color = self.color_at(index);
            outln(&format!("<<{}>>{}<<reset>>", color, line), self.ansi)
        })
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_formatter.rs"]
mod tests;
