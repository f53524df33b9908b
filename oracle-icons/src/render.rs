// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-side rendering of icons to standalone SVG markup.
//!
//! Goes through the same Yew components the browser mounts, so the markup is
//! identical to what `yew::Renderer` produces in the DOM. Hydration markers
//! are disabled; the output is a plain `<svg>` document fragment.

use yew::ServerRenderer;

use crate::components::icons::{MarkdownPen, MarkdownPenProps};
use crate::constants::DEFAULT_FILL;

/// Render the markdown pen glyph to an SVG string.
///
/// `fill` of `None` uses the component default (`"white"`). Attribute values
/// are escaped by the renderer but otherwise passed through unchanged.
pub async fn markdown_pen_svg(fill: Option<String>, size: f64) -> String {
    ServerRenderer::<MarkdownPen>::with_props(move || MarkdownPenProps {
        fill: fill.map_or(DEFAULT_FILL.into(), Into::into),
        size,
    })
    .hydratable(false)
    .render()
    .await
}
