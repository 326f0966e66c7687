//! Loading [`Configuration`] from a settings file and the environment

use std::path::Path;

use config::{Config, Environment, File};
use tracing::debug;
use uipath_domain::Configuration;

use crate::errors::{Result, UiPathError};

/// Prefix of the environment variables read by [`load_configuration`]
pub const ENV_PREFIX: &str = "UIPATH";

/// Build a [`Configuration`] from an optional settings file (TOML, YAML or
/// JSON, picked by extension) overlaid with `UIPATH_*` environment
/// variables.
pub fn load_configuration(path: Option<&Path>) -> Result<Configuration> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(UiPathError::configuration_error(format!(
                "settings file {} does not exist",
                path.display()
            )));
        }
        debug!(path = %path.display(), "Reading settings file");
        builder = builder.add_source(File::from(path));
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(false))
        .build()?;

    let configuration: Configuration = settings.try_deserialize()?;
    validate(&configuration)?;
    Ok(configuration)
}

fn validate(configuration: &Configuration) -> Result<()> {
    for (field, value) in [
        ("url_base", &configuration.url_base),
        ("client_id", &configuration.client_id),
        ("client_secret", &configuration.client_secret),
        ("scope", &configuration.scope),
        ("auth_url", &configuration.auth_url),
    ] {
        if value.trim().is_empty() {
            return Err(UiPathError::validation_error(field, "must not be empty"));
        }
    }

    for (field, value) in [
        ("url_base", &configuration.url_base),
        ("auth_url", &configuration.auth_url),
    ] {
        reqwest::Url::parse(value).map_err(|e| {
            UiPathError::configuration_error_with_source(format!("{field} is not a valid URL"), e)
        })?;
    }

    Ok(())
}
