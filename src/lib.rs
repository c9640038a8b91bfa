//! millipede — curvy ASCII-art millipedes for the terminal.
//!
//! Public API: build a [`Millipede`], hand it to a [`Renderer`], then print
//! the renderer or walk its [`Renderer::lines`].
//!
//! ```
//! use millipede::{Millipede, Renderer};
//!
//! let millipede = Millipede::new().with_size(3).with_comment("hi");
//! let art = Renderer::new(millipede).to_string();
//! assert!(art.contains(" hi"));
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod glyph;
pub mod renderer;
pub mod templates;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::config::Millipede;
pub use crate::error::{MillipedeError, Result};
pub use crate::formatter::{Color, Palette};
pub use crate::renderer::{Lines, Renderer};

/// Render `millipede` to a string, one line per `\n`.
pub fn render(millipede: &Millipede) -> String {
    Renderer::new(millipede.clone()).to_string()
}
