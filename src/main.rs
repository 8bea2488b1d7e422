use basic_repository::core::item::Item;
use basic_repository::core::ports::Repository;
use basic_repository::shell::config::ShellConfig;
use basic_repository::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ShellConfig::from_env()?;
    tracing::info!(?config, "starting in memory repository");
    let repository = config.build_repository::<Item>();

    let mut item = Item::new("black jean");
    let inserted = repository.save(&mut item).await?;
    let Some(id) = item.id() else {
        anyhow::bail!("saved item has no identity");
    };
    tracing::info!(%id, inserted, name = item.name(), "saved item");

    item.change_name("blue jean");
    let inserted = repository.save(&mut item).await?;
    tracing::info!(%id, inserted, name = item.name(), "saved renamed item");

    if let Some(found) = repository.find_by_id(&id).await? {
        tracing::info!(%id, name = found.name(), "found item");
    }
    let count = repository.count().await?;
    tracing::info!(count, "items stored");

    repository.delete_by_id(&id).await?;
    let count = repository.count().await?;
    tracing::info!(%id, count, "deleted item");
    Ok(())
}
