use anyhow::Context;
use remove_bg::application::background_service::BackgroundRemovalService;
use remove_bg::application::config::RemovalConfig;
use remove_bg::infrastructure::file_storage::LocalFileStorage;

fn main() -> anyhow::Result<()> {
    // 設定はすべて既定値 (入力パスも固定)
    let config = RemovalConfig::default();
    let service = BackgroundRemovalService::new(Box::new(LocalFileStorage::new()));

    let report = service
        .remove_background(&config)
        .with_context(|| format!("failed to remove background from {}", config.input_path.display()))?;
    println!("{}", report);

    Ok(())
}
