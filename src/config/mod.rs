mod settings;

use config::{Config, Environment, File};

use crate::utils::CompereError;

pub use settings::{FeedSettings, LogSettings, PartialSettings, Settings};

/// Loads the configuration from the default file and `COMPERE_`-prefixed
/// environment variables, merged over default values.
///
/// Sections are separated by `__` in variable names, e.g.
/// `COMPERE_FEED__DEFAULT_AVATAR`.
pub fn load_config() -> Result<Settings, CompereError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("COMPERE")
                .prefix_separator("_")
                .separator("__"),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(Settings::merge(partial))
}
