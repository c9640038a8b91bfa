//! Millipede renderer.
//!
//! A `Renderer` precomputes the head line, the body line and the padding
//! table once, then hands out the artwork line by line. The padding table is
//! a triangle wave: over `2 * curve` segments the indent climbs from 0 to
//! `curve` and back to 0, which is what makes the body wiggle.

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::config::Millipede;
use crate::templates::{Orientation, Templates};

/// Indent of the head when the body is straight, so the eyes sit above the body.
const STRAIGHT_HEAD_INDENT: usize = 2;

/// Renders a `Millipede` into display lines.
#[derive(Debug, Clone)]
pub struct Renderer {
    millipede: Millipede,
    head: String,
    body: String,
    max_curve: usize,
    padding_offsets: Vec<String>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Millipede::default())
    }
}

impl From<Millipede> for Renderer {
    fn from(millipede: Millipede) -> Self {
        Self::new(millipede)
    }
}

impl Renderer {
    pub fn new(millipede: Millipede) -> Self {
        let templates = Templates::for_orientation(Orientation::from_reverse(millipede.is_reverse()));

        let indent = match millipede.curve() {
            0 => STRAIGHT_HEAD_INDENT,
            curve => curve,
        };
        let head = format!(
            "{}{}",
            " ".repeat(indent),
            templates.head_line(millipede.head(), millipede.width())
        );
        let body = templates.body_line(millipede.skin(), millipede.width());

        let max_curve = millipede.curve() * 2;
        let mut padding_offsets = vec![String::new()];
        if millipede.curve() > 0 {
            for index in 1..=max_curve {
                let delta = index % max_curve;
                padding_offsets.push(" ".repeat(delta.min(max_curve - delta)));
            }
        }

        debug!(
            size = millipede.size(),
            width = millipede.width(),
            curve = millipede.curve(),
            reverse = millipede.is_reverse(),
            opposite = millipede.is_opposite(),
            "prepared millipede renderer"
        );

        Self {
            millipede,
            head,
            body,
            max_curve,
            padding_offsets,
        }
    }

    /// The configuration this renderer draws.
    pub fn millipede(&self) -> &Millipede {
        &self.millipede
    }

    /// Iterate over the rendered lines. Each call starts from the first line.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            renderer: self,
            front: 0,
            back: self.line_count(),
        }
    }

    /// Total number of lines produced by [`Renderer::lines`].
    pub fn line_count(&self) -> usize {
        // leading blank, size + 1 segments, trailing blank
        let base = self.millipede.size() + 3;
        if self.has_comment() { base + 2 } else { base }
    }

    fn has_comment(&self) -> bool {
        !self.millipede.comment().is_empty()
    }

    /// The line at `index`, with `index < line_count()`.
    fn line_at(&self, index: usize) -> String {
        let last = self.line_count() - 1;
        if index == 0 || index == last {
            return String::new();
        }

        let has_comment = self.has_comment();
        let reverse = self.millipede.is_reverse();
        let leading = if has_comment && !reverse { 2 } else { 0 };
        let segments = self.millipede.size() + 1;

        if index <= leading {
            return if index == 1 {
                self.comment_line()
            } else {
                String::new()
            };
        }

        let offset = index - 1 - leading;
        if offset < segments {
            return self.part(offset);
        }

        // trailing comment block of a reversed millipede
        if offset == segments {
            String::new()
        } else {
            self.comment_line()
        }
    }

    fn comment_line(&self) -> String {
        format!(" {}", self.millipede.comment())
    }

    /// One segment line. Reversed millipedes are walked tail to head.
    fn part(&self, offset: usize) -> String {
        // padding below is looked up with the remapped offset as well
        let offset = if self.millipede.is_reverse() {
            self.millipede.size() - offset
        } else {
            offset
        };

        let content = if offset == 0 { &self.head } else { &self.body };
        format!("{}{}", self.padding(offset), content)
    }

    fn padding(&self, offset: usize) -> &str {
        let curve = self.millipede.curve();
        if curve == 0 {
            return "";
        }

        let offset = if self.millipede.is_opposite() {
            offset + curve - 1
        } else {
            offset
        };

        &self.padding_offsets[offset % self.max_curve]
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Renderer {
    type Item = String;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

// ─── Lines ───────────────────────────────────────────────────────────────────

/// Lazy iterator over a renderer's lines.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    renderer: &'a Renderer,
    front: usize,
    back: usize,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.front >= self.back {
            return None;
        }
        let line = self.renderer.line_at(self.front);
        self.front += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Lines<'_> {
    fn next_back(&mut self) -> Option<String> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.renderer.line_at(self.back))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl FusedIterator for Lines<'_> {}

#[cfg(test)]
#[path = "../tests/rust/test_renderer.rs"]
mod tests;
