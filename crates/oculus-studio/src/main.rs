use anyhow::Context;

use oculus_engine::logging::{init_logging, LoggingConfig};
use oculus_ui::Application;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("oculus studio starting");

    Application::new()
        .title("Oculus")
        .size(800.0, 600.0)
        .run()
        .context("eye application failed")?;

    log::info!("oculus studio closed");
    Ok(())
}
