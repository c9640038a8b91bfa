//! WASM bindings for millipede.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::Millipede;
use crate::error::Result;

/// Render the default millipede.
#[wasm_bindgen]
pub fn render() -> String {
    crate::render(&Millipede::default())
}

/// Render a millipede with full control over options.
///
/// - `head`, `skin`: one character or a `\uXXXX` escape; empty keeps the default
/// - `size`, `width`, `curve`: out-of-range values fall back to defaults
#[wasm_bindgen(js_name = "renderWithOptions")]
#[allow(clippy::too_many_arguments)]
pub fn render_with_options(
    comment: &str,
    size: i32,
    width: i32,
    curve: i32,
    reverse: bool,
    opposite: bool,
    head: &str,
    skin: &str,
) -> std::result::Result<String, JsError> {
    build(comment, size, width, curve, reverse, opposite, head, skin)
        .map(|m| crate::render(&m))
        .map_err(|e| JsError::new(&e.to_string()))
}

#[allow(clippy::too_many_arguments)]
fn build(
    comment: &str,
    size: i32,
    width: i32,
    curve: i32,
    reverse: bool,
    opposite: bool,
    head: &str,
    skin: &str,
) -> Result<Millipede> {
    let mut millipede = Millipede::new()
        .with_comment(comment)
        .with_size(size.into())
        .with_width(width.into())
        .with_curve(curve.into())
        .with_reverse(reverse)
        .with_opposite(opposite);
    if !head.is_empty() {
        millipede = millipede.with_head(head)?;
    }
    if !skin.is_empty() {
        millipede = millipede.with_skin(skin)?;
    }
    Ok(millipede)
}

#[cfg(test)]
#[path = "../tests/rust/test_wasm.rs"]
mod tests;
