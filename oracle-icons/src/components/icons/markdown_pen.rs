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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use yew::prelude::*;

use crate::constants::{
    DEFAULT_FILL, MARKDOWN_PEN_CLIP_ID, MARKDOWN_PEN_CLIP_TRANSFORM, MARKDOWN_PEN_CLIP_URL,
    MARKDOWN_PEN_PATH, MARKDOWN_PEN_VIEW_BOX, SVG_NAMESPACE,
};

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct MarkdownPenProps {
    /// Any CSS color. Passed through unchanged to the path and clip rect.
    #[prop_or(AttrValue::Static(DEFAULT_FILL))]
    pub fill: AttrValue,
    /// Width and height in device pixels.
    pub size: f64,
}

/// Pen-in-circle glyph used for markdown blocks.
#[function_component(MarkdownPen)]
pub fn markdown_pen(props: &MarkdownPenProps) -> Html {
    let size = AttrValue::from(props.size.to_string());
    html! {
        <svg
            fill="none"
            height={size.clone()}
            viewBox={MARKDOWN_PEN_VIEW_BOX}
            width={size}
            xmlns={SVG_NAMESPACE}
        >
            <g clip-path={MARKDOWN_PEN_CLIP_URL}>
                <path
                    clip-rule="evenodd"
                    d={MARKDOWN_PEN_PATH}
                    fill={props.fill.clone()}
                    fill-rule="evenodd"
                />
            </g>
            <defs>
                // Literal camelCase tags get lowercased by `html!`.
                <@{"clipPath"} id={MARKDOWN_PEN_CLIP_ID}>
                    <rect
                        fill={props.fill.clone()}
                        height="20"
                        transform={MARKDOWN_PEN_CLIP_TRANSFORM}
                        width="20"
                    />
                </@>
            </defs>
        </svg>
    }
}
