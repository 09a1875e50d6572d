use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};

use compio::fs;
use hashlink::LinkedHashMap;
use crate::application::AsyncTryFrom;
use listree::{Column, EmptyListingPolicy, Header};
use saphyr::{LoadableYamlNode, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

const SETTINGS_FILE_NAME: &str = "listree.yaml";

fn get_settings_file_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

/// Optional defaults read from `listree.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub root: Option<String>,
    pub empty_listing: EmptyListingPolicy,
    pub header: Header,
}

impl Settings {
    /// Reads the settings file in `dir`, falling back to defaults when there
    /// is none.
    pub async fn read(dir: &Path) -> Result<Self, SettingsError> {
        Self::async_try_from(get_settings_file_path(dir).as_path()).await
    }

    fn apply_top_level(&mut self, top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<(), SettingsError> {
        for (key, value) in top_level {
            match key.as_str() {
                Some("root") => {
                    self.root = Some(expect_str("root", value)?.to_string());
                }
                Some("empty_listing") => {
                    let policy = expect_str("empty_listing", value)?;
                    self.empty_listing =
                        EmptyListingPolicy::from_key(policy).context(InvalidValueSnafu {
                            key: "empty_listing",
                            value: policy,
                        })?;
                }
                Some("headers") => {
                    let headers = value.as_mapping().context(InvalidValueSnafu {
                        key: "headers",
                        value: format!("{value:?}"),
                    })?;
                    self.apply_headers(headers)?;
                }
                _ => debug!("Skipping unknown settings key: {:?}", key),
            }
        }
        Ok(())
    }

    fn apply_headers(&mut self, headers: &LinkedHashMap<Yaml, Yaml>) -> Result<(), SettingsError> {
        for (key, value) in headers {
            let Some(column) = key.as_str().and_then(Column::from_key) else {
                debug!("Skipping unknown header column: {:?}", key);
                continue;
            };
            let label = expect_str(&format!("headers.{column}"), value)?;
            self.header.set_label(column, label);
        }
        Ok(())
    }
}

fn expect_str<'a>(key: &str, value: &'a Yaml) -> Result<&'a str, SettingsError> {
    value.as_str().context(InvalidValueSnafu {
        key,
        value: format!("{value:?}"),
    })
}

impl AsyncTryFrom<&Path> for Settings {
    type Error = SettingsError;

    async fn async_try_from(path: &Path) -> Result<Self, Self::Error> {
        debug!("Opening settings file: {}", path.display());
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).context(ReadSnafu {
                    file_path: path.display().to_string(),
                });
            }
        };
        debug!("Successfully read settings file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let mut settings = Settings::default();

        let Some(document) = documents.first() else {
            return Ok(settings);
        };
        let top_level = document
            .as_mapping()
            .ok_or(SettingsError::TopLevelNotMap)?;
        settings.apply_top_level(top_level)?;

        Ok(settings)
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Settings file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Invalid value for '{}': {}", key, value))]
    InvalidValue { key: String, value: String },
}
