use icon_assets::IconSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> icon_assets::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = concat!(env!("CARGO_MANIFEST_DIR"), "/icons.toml");
    let set = IconSet::from_config(config)?;

    let icons = set.import_all()?;
    for (name, asset) in &icons {
        info!(name = %name, media = asset.media_type.mime(), digest = %asset.digest, "bundled");
    }

    let resolver = set.resolver();
    for condition in std::env::args().skip(1) {
        match resolver.resolve_or_fallback(&condition).await {
            Some(icon) => println!("{condition}: {} ({} bytes)", icon.path.display(), icon.len()),
            None => println!("{condition}: no icon"),
        }
    }

    Ok(())
}
