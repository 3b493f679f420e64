use dioxus::prelude::*;
use waypoint::domain::config::ClientConfig;
use waypoint::ui::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // The browser has no config file; the mount point is the hardcoded default.
    let config = ClientConfig::default();

    LaunchBuilder::web().with_cfg(dioxus::web::Config::new().rootname(config.mount_id)).launch(App);
}
