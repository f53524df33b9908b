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

use oracle_icons::components::gallery::App;
use oracle_icons::logging::init_logging;

fn main() {
    if let Err(e) = init_logging() {
        web_sys::console::error_1(&format!("{e:#}").into());
    }
    console_error_panic_hook::set_once();

    log::info!("Starting oracle-icons gallery");
    yew::Renderer::<App>::new().render();
}
