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

//! oracle-icons library root.
//!
//! Re-exports the icon components so that integration tests (under `tests/`)
//! and host applications can mount them. The gallery binary lives in
//! `main.rs`.

pub mod components;
pub mod constants;
pub mod logging;
#[cfg(feature = "ssr")]
pub mod render;
