//! Offline trainer: fits the random forest on the reference dataset and
//! writes the artifact the web service loads at startup.

use career_compass::config::Settings;
use career_compass::services::{save_model, train_model, ReferenceDataset};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let dataset = ReferenceDataset::load(&settings.data.dataset_path, &settings.data.label_column)
        .unwrap_or_else(|e| {
            error!("Cannot read reference dataset: {}", e);
            std::process::exit(1);
        });

    let result = train_model(&settings.model, &dataset)
        .and_then(|model| save_model(&model, &settings.model.path));
    if let Err(e) = result {
        error!("Training failed: {}", e);
        std::process::exit(1);
    }

    info!(
        "Wrote {} ({} features, {} careers)",
        settings.model.path.display(),
        dataset.feature_names().len(),
        dataset.label_encoder().len()
    );
}
