use anyhow::Context;
use tracing::info;
use waypoint::kernel::config::load_client_config;
use waypoint::ui::App;
use waypoint_desktop::DesktopApp;
use waypoint_logger::{Logger, parse_level};

fn main() -> anyhow::Result<()> {
    let config = load_client_config(None::<&str>).context("Loading client config")?;

    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .level(parse_level(&config.log.level)?);
    if let Some(filter) = &config.log.filter {
        logger = logger.env_filter(filter);
    }
    if let Some(path) = &config.log.path {
        logger = logger.file(path);
    }
    let _logger = logger.init()?;

    let app = DesktopApp::from_config(&config);
    let (width, height) = app.size();
    info!(title = app.title(), width, height, "Starting desktop shell");

    app.launch(App);

    Ok(())
}
