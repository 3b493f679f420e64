use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use waypoint::domain::config::ClientConfig;

/// Native window hosting the same component tree as the web build.
#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    mount_id: String,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            title: String::new(),
            width: 0.0,
            height: 0.0,
            mount_id: config.mount_id.clone(),
        }
        .with_title(&config.title)
        .with_size(config.window.width, config.window.height)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Opens the window and renders `root`.
    pub fn launch(self, root: fn() -> Element) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default()
            .with_window(window)
            .with_root_name(self.mount_id)
            .with_custom_head(
                r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
            );

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}
