// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
#[cfg(feature = "log")]
use crate::log::LoggerConfig;
use serde::de::DeserializeOwned;
#[cfg(feature = "log")]
use serde::Deserialize;
#[allow(deprecated)]
use std::env::home_dir;
use std::fs::read_to_string;

/// Configuration parameters loaded from a toml document.
#[derive(Debug)]
pub struct Config {
    debug_enabled: bool,
    toml: String,
}

#[cfg(feature = "log")]
#[derive(Default, Deserialize)]
struct Sections {
    #[serde(default)]
    logger: LoggerConfig,
}

impl Config {
    /// Creates a configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            config: None,
            debug_enabled: false,
            error: None,
        }
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }

    /// Returns the `[logger]` table, with defaults for anything missing.
    ///
    /// Debug enabled on the configuration builder also enables it on the logger.
    #[cfg(feature = "log")]
    pub fn logger(&self) -> Result<LoggerConfig, Error> {
        let mut logger = self.get::<Sections>()?.logger;
        logger.debug |= self.debug_enabled;
        Ok(logger)
    }
}

/// Builds a [`Config`] from a file or a string.
pub struct ConfigBuilder {
    config: Option<Config>,
    debug_enabled: bool,
    error: Option<Error>,
}

impl ConfigBuilder {
    /// Returns the configuration, or the first error seen while loading it.
    pub fn build(self) -> Result<Config, Error> {
        if let Some(error) = self.error {
            Err(error)
        } else if let Some(config) = self.config {
            Ok(config)
        } else {
            Err(Error::String("config not set".to_string()))
        }
    }

    /// Enables debug output.
    pub fn debug(self, debug_enabled: bool) -> Self {
        Self {
            config: self.config.map(|config| Config {
                debug_enabled,
                toml: config.toml,
            }),
            debug_enabled,
            error: self.error,
        }
    }

    /// Reads `file_name` from the home directory, falling back to the
    /// current directory.
    pub fn toml_file(self, file_name: &str) -> Self {
        let debug_enabled = self.debug_enabled;
        #[allow(deprecated)]
        let home_path = home_dir()
            .and_then(|pathbuf| pathbuf.to_str().map(|path| format!("{path}/{file_name}")));
        let local_path = format!("./{file_name}");
        if let Some(toml) = home_path.and_then(|path| read_to_string(path).ok()) {
            if debug_enabled {
                println!("config: read ~/{file_name}");
            }
            self.toml_string(toml)
        } else {
            match read_to_string(&local_path) {
                Ok(toml) => {
                    if debug_enabled {
                        println!("config: read {local_path}");
                    }
                    self.toml_string(toml)
                }
                Err(_) => Self {
                    config: None,
                    debug_enabled,
                    error: Some(Error::String(format!("{local_path}: cannot read"))),
                },
            }
        }
    }

    /// Uses `toml` as the configuration text.
    pub fn toml_str(self, toml: &str) -> Self {
        self.toml_string(toml.to_string())
    }

    /// Uses `toml` as the configuration text.
    pub fn toml_string(self, toml: String) -> Self {
        Self {
            config: Some(Config {
                debug_enabled: self.debug_enabled,
                toml,
            }),
            debug_enabled: self.debug_enabled,
            error: None,
        }
    }
}
