// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Context;

/// Install the browser console logger; `Debug` under the `debugAssertions`
/// feature, `Info` otherwise.
pub fn init_logging() -> anyhow::Result<()> {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).context("failed to install console logger")
}
