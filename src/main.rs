use anyhow::{Context, Result};

use taskdeck::{config::Config, logger, model::User, ui};

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging)?;

    let user = User::load().context("Failed to load user data")?;
    log::info!("loaded {} tasks", user.tasks.len());

    ui::run_app(config, user)?;

    Ok(())
}
