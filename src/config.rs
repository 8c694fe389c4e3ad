// ABOUTME: Environment-driven application configuration
// ABOUTME: Resolves the storage URL and default user identity with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Application configuration.
//!
//! All settings come from environment variables with documented defaults,
//! so the crate runs out of the box against a local SQLite file.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Default storage connection string when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/sazon.db";
/// Default user identity when `DEFAULT_USER_ID` is unset
pub const DEFAULT_USER_ID: &str = "default_user";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage connection string (`memory` or `sqlite:...`)
    pub database_url: String,
    /// User identity applied when a caller does not supply one
    pub default_user_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            default_user_id: DEFAULT_USER_ID.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `DATABASE_URL` and `DEFAULT_USER_ID`, falling back to the
    /// crate defaults for any unset variable.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            default_user_id: env::var("DEFAULT_USER_ID")
                .unwrap_or_else(|_| DEFAULT_USER_ID.into()),
        };

        info!(
            database_url = %config.database_url,
            default_user_id = %config.default_user_id,
            "Configuration loaded"
        );

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite:./data/sazon.db");
        assert_eq!(config.default_user_id, "default_user");
    }
}
