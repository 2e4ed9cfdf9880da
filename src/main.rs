use anyhow::Result;

use stickies::config::Config;
use stickies::notes::NoteService;
use stickies::storage::LocalStorage;
use stickies::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::init(config.logging.enabled)?;
    log::info!("Starting stickies");

    let storage = LocalStorage::open_at(&config.database_path()?).await?;
    let service = NoteService::new(storage);

    ui::run_app(service, config).await
}
