// Service configuration
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub dataset: DatasetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub url: String,
}

pub fn load_dataset_config() -> anyhow::Result<DatasetConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dataset"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
