// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod markdown_pen;

pub use markdown_pen::{MarkdownPen, MarkdownPenProps};
