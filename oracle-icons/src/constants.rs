// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// Fill used by icons when the caller does not pass one.
pub const DEFAULT_FILL: &str = "white";

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Internal coordinate system of the markdown pen glyph (20 x 21 units).
pub const MARKDOWN_PEN_VIEW_BOX: &str = "0 0 20 21";

/// Clip-path id referenced by the pen group.
///
/// Not unique per instance: every mounted `MarkdownPen` emits the same id.
pub const MARKDOWN_PEN_CLIP_ID: &str = "clip0_11802_82284";

/// `url(#...)` reference to [`MARKDOWN_PEN_CLIP_ID`].
pub const MARKDOWN_PEN_CLIP_URL: &str = "url(#clip0_11802_82284)";

/// Offset aligning the 20 x 20 clip rect with the artwork.
pub const MARKDOWN_PEN_CLIP_TRANSFORM: &str = "translate(0 0.00244141)";

/// Circle with a pen-nib cutout, filled with the even-odd rule.
pub const MARKDOWN_PEN_PATH: &str = "M10 20.0024C15.5228 20.0024 20 15.5253 20 10.0024C20 4.47959 15.5228 0.00244141 10 0.00244141C4.47715 0.00244141 0 4.47959 0 10.0024C0 15.5253 4.47715 20.0024 10 20.0024ZM10 18.5024C11.5782 18.5024 13.0559 18.0723 14.3224 17.323C14.3144 17.3061 14.307 17.2888 14.3002 17.2712L11.5045 10.0024H8.49587L5.70021 17.2712C5.69339 17.2889 5.68596 17.3062 5.67796 17.3231C6.94434 18.0724 8.42195 18.5024 10 18.5024ZM11.6336 6.15938L15.5784 16.416C17.3685 14.8577 18.5 12.5622 18.5 10.0024C18.5 5.30802 14.6944 1.50244 10 1.50244C5.30558 1.50244 1.5 5.30802 1.5 10.0024C1.5 12.5623 2.63162 14.8579 4.4219 16.4163L8.36685 6.15939C8.94212 4.66367 11.0583 4.66367 11.6336 6.15938Z";

const DEFAULT_GALLERY_SIZES: [f64; 4] = [16.0, 24.0, 32.0, 48.0];
const DEFAULT_GALLERY_FILLS: [&str; 3] = ["white", "#000", "currentColor"];
const DEFAULT_GALLERY_BACKGROUND: &str = "#1f2937";

/// Runtime configuration for the icon gallery, read from `window.__APP_CONFIG`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryConfig {
    #[serde(rename = "gallerySizes")]
    #[serde(default = "default_sizes")]
    pub sizes: Vec<f64>,
    #[serde(rename = "galleryFills")]
    #[serde(default = "default_fills")]
    pub fills: Vec<String>,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_sizes() -> Vec<f64> {
    DEFAULT_GALLERY_SIZES.to_vec()
}

fn default_fills() -> Vec<String> {
    DEFAULT_GALLERY_FILLS.iter().map(|s| s.to_string()).collect()
}

fn default_background() -> String {
    DEFAULT_GALLERY_BACKGROUND.to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            fills: default_fills(),
            background: default_background(),
        }
    }
}

/// Load the gallery configuration.
///
/// A missing `__APP_CONFIG` falls back to [`GalleryConfig::default`]; a
/// present but malformed one is an error.
#[cfg(target_arch = "wasm32")]
pub fn gallery_config() -> Result<GalleryConfig, String> {
    use serde_wasm_bindgen::from_value as from_js_value;
    use wasm_bindgen::JsValue;

    let win = gloo_utils::window();
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(GalleryConfig::default());
    }
    from_js_value::<GalleryConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn gallery_config() -> Result<GalleryConfig, String> {
    Ok(GalleryConfig::default())
}
