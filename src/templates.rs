//! Head and body glyph templates.
//!
//! A millipede crawling down the terminal is drawn with the `╚ ╝` forms; one
//! crawling up (reversed) uses the `╔ ╗` forms.

// ─── Orientation ─────────────────────────────────────────────────────────────

/// Which way the millipede is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Down,
    Up,
}

impl Orientation {
    pub fn from_reverse(is_reverse: bool) -> Self {
        if is_reverse { Self::Up } else { Self::Down }
    }
}

// ─── Templates ───────────────────────────────────────────────────────────────

/// Placeholder in the head template filled with `width - 2` head glyphs.
pub const HEAD_PLACEHOLDER: &str = " ";
/// Placeholder in the body template filled with `width` skin glyphs.
pub const BODY_PLACEHOLDER: &str = "███";

/// Fixed head/body strings for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Templates {
    pub head: &'static str,
    pub body: &'static str,
}

impl Templates {
    pub fn down() -> Self {
        Self {
            head: "╚⊙ ⊙╝",
            body: "╚═(███)═╝",
        }
    }

    pub fn up() -> Self {
        Self {
            head: "╔⊙ ⊙╗",
            body: "╔═(███)═╗",
        }
    }

    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Down => Self::down(),
            Orientation::Up => Self::up(),
        }
    }

    /// Head template with its interior filled by `width - 2` copies of `glyph`.
    pub fn head_line(&self, glyph: char, width: usize) -> String {
        let filler = glyph.to_string().repeat(width.saturating_sub(2));
        self.head.replace(HEAD_PLACEHOLDER, &filler)
    }

    /// Body template with its block filled by `width` copies of `skin`.
    pub fn body_line(&self, skin: char, width: usize) -> String {
        let filler = skin.to_string().repeat(width);
        self.body.replace(BODY_PLACEHOLDER, &filler)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_templates.rs"]
mod tests;
