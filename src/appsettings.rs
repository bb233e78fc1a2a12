use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use cronoz_models::settings::{BirthdayMessages, ProfileSettings};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub profile: ProfileSettings,
    #[serde(default)]
    pub birthday_messages: BirthdayMessages,
}

impl AppSettings {
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("appsettings").required(true))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
