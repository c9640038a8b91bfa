//! Millipede configuration.
//!
//! `Millipede` is an immutable value: every `with_*` method consumes the
//! current value and hands back one with a single field changed. Numeric
//! inputs below their minimum fall back to a default instead of failing.

use crate::error::Result;
use crate::glyph::single_char;

pub const DEFAULT_SIZE: usize = 20;
pub const MIN_WIDTH: usize = 3;
pub const DEFAULT_CURVE: usize = 4;
pub const DEFAULT_HEAD: char = ' ';
pub const DEFAULT_SKIN: char = '█';

/// Rendering parameters for a millipede.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Millipede {
    comment: String,
    size: usize,
    width: usize,
    curve: usize,
    is_reverse: bool,
    is_opposite: bool,
    head: char,
    skin: char,
}

impl Default for Millipede {
    fn default() -> Self {
        Self {
            comment: String::new(),
            size: DEFAULT_SIZE,
            width: MIN_WIDTH,
            curve: DEFAULT_CURVE,
            is_reverse: false,
            is_opposite: false,
            head: DEFAULT_HEAD,
            skin: DEFAULT_SKIN,
        }
    }
}

impl Millipede {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown once next to the head.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Number of body segments.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Body segment width in glyph columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Amplitude of the body wiggle; 0 draws a straight millipede.
    pub fn curve(&self) -> usize {
        self.curve
    }

    pub fn is_reverse(&self) -> bool {
        self.is_reverse
    }

    pub fn is_opposite(&self) -> bool {
        self.is_opposite
    }

    pub fn head(&self) -> char {
        self.head
    }

    pub fn skin(&self) -> char {
        self.skin
    }

    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        if comment == self.comment {
            return self;
        }
        Self { comment, ..self }
    }

    /// Sizes below 1 reset to the default of 20.
    pub fn with_size(self, size: i64) -> Self {
        let size = positive(size, 1).unwrap_or(DEFAULT_SIZE);
        if size == self.size {
            return self;
        }
        Self { size, ..self }
    }

    /// Widths below 3 clamp to 3.
    pub fn with_width(self, width: i64) -> Self {
        let width = positive(width, MIN_WIDTH as i64).unwrap_or(MIN_WIDTH);
        if width == self.width {
            return self;
        }
        Self { width, ..self }
    }

    /// Negative curves reset to the default of 4.
    pub fn with_curve(self, curve: i64) -> Self {
        let curve = positive(curve, 0).unwrap_or(DEFAULT_CURVE);
        if curve == self.curve {
            return self;
        }
        Self { curve, ..self }
    }

    pub fn with_reverse(self, is_reverse: bool) -> Self {
        if is_reverse == self.is_reverse {
            return self;
        }
        Self { is_reverse, ..self }
    }

    pub fn with_opposite(self, is_opposite: bool) -> Self {
        if is_opposite == self.is_opposite {
            return self;
        }
        Self {
            is_opposite,
            ..self
        }
    }

    /// Set the glyph filling the head. Accepts one character or a `\uXXXX`
    /// escape of one.
    pub fn with_head(self, head: &str) -> Result<Self> {
        let head = single_char(head, "head")?;
        if head == self.head {
            return Ok(self);
        }
        Ok(Self { head, ..self })
    }

    /// Set the glyph filling the body. Accepts one character or a `\uXXXX`
    /// escape of one.
    pub fn with_skin(self, skin: &str) -> Result<Self> {
        let skin = single_char(skin, "skin")?;
        if skin == self.skin {
            return Ok(self);
        }
        Ok(Self { skin, ..self })
    }
}

/// `value` as a usize when it is at least `min`.
fn positive(value: i64, min: i64) -> Option<usize> {
    if value < min {
        return None;
    }
    usize::try_from(value).ok()
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
