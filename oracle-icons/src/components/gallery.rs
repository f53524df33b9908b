/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Demo page that lays out every configured fill/size combination of the
//! icon set, one row per fill.

use yew::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::icons::MarkdownPen;
use crate::constants::{gallery_config, GalleryConfig};

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct GalleryProps {
    pub sizes: Vec<f64>,
    pub fills: Vec<AttrValue>,
    pub background: AttrValue,
}

impl From<GalleryConfig> for GalleryProps {
    fn from(config: GalleryConfig) -> Self {
        Self {
            sizes: config.sizes,
            fills: config.fills.into_iter().map(AttrValue::from).collect(),
            background: config.background.into(),
        }
    }
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    log::debug!(
        "Rendering icon gallery: {} fills x {} sizes",
        props.fills.len(),
        props.sizes.len()
    );

    let rows = props.fills.iter().map(|fill| {
        let cells = props.sizes.iter().map(|size| {
            html! {
                <figure class="icon-gallery-cell">
                    <MarkdownPen fill={fill.clone()} size={*size} />
                    <figcaption>{ format!("{fill} @ {size}px") }</figcaption>
                </figure>
            }
        });
        html! {
            <div class="icon-gallery-row">
                { for cells }
            </div>
        }
    });

    html! {
        <div class="icon-gallery" style={format!("background: {};", props.background)}>
            { for rows }
        </div>
    }
}

/// Gallery root: loads the runtime config and renders the gallery, or the
/// config error when `__APP_CONFIG` is malformed.
#[function_component(App)]
pub fn app() -> Html {
    match gallery_config() {
        Ok(config) => {
            log::info!(
                "Gallery config loaded: sizes={:?} fills={:?}",
                config.sizes,
                config.fills
            );
            let props = GalleryProps::from(config);
            html! { <Gallery ..props /> }
        }
        Err(e) => {
            log::warn!("{e}");
            html! { <ConfigError message={e} /> }
        }
    }
}
