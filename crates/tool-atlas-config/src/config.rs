// crates/tool-atlas-config/src/config.rs
// ============================================================================
// Module: Tool Atlas Configuration
// Description: Configuration loading and validation for Tool Atlas.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: tool-atlas-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path resolves from an explicit argument, then [`CONFIG_ENV_VAR`], then
//! `tool-atlas.toml` in the working directory. Only the implicit default file
//! may be absent; every section then takes its built-in defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tool_atlas_core::Locale;
use tool_atlas_core::ViewVariant;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "tool-atlas.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "TOOL_ATLAS_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default listen address.
pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Default maximum query string size in bytes.
pub(crate) const DEFAULT_MAX_QUERY_BYTES: usize = 4096;
/// Upper bound for `server.max_query_bytes`.
pub(crate) const MAX_QUERY_BYTES_LIMIT: usize = 65_536;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Tool Atlas configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolAtlasConfig {
    /// HTTP display server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Default presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Request audit logging settings.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Path the configuration was read from, when a file was found.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl ToolAtlasConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml(content)?;
        config.source_path = Some(resolved);
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.audit.validate()?;
        Ok(())
    }
}

/// HTTP display server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum accepted query string size in bytes.
    #[serde(default = "default_max_query_bytes")]
    pub max_query_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_query_bytes: default_max_query_bytes(),
        }
    }
}

impl ServerConfig {
    /// Returns the parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bind address is malformed.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let bind = self.bind.trim();
        if bind.is_empty() {
            return Err(ConfigError::Invalid("server.bind must be set".to_string()));
        }
        bind.parse().map_err(|_| ConfigError::Invalid("invalid bind address".to_string()))
    }

    /// Validates server configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.max_query_bytes == 0 {
            return Err(ConfigError::Invalid(
                "server.max_query_bytes must be greater than zero".to_string(),
            ));
        }
        if self.max_query_bytes > MAX_QUERY_BYTES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "server.max_query_bytes must be <= {MAX_QUERY_BYTES_LIMIT}"
            )));
        }
        Ok(())
    }
}

/// Presentation defaults applied when a request names none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Design rendered when the request has no valid `design` parameter.
    #[serde(default)]
    pub default_design: ViewVariant,
    /// Locale used when the request has no valid `lang` parameter.
    #[serde(default)]
    pub default_locale: Locale,
}

/// Request audit logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Enable structured audit logging.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Optional audit log path (JSON lines); stderr when absent.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: None,
        }
    }
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default listen address.
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Default query size limit.
const fn default_max_query_bytes() -> usize {
    DEFAULT_MAX_QUERY_BYTES
}

/// Audit logging is on unless disabled.
const fn default_audit_enabled() -> bool {
    true
}

/// Resolves the config path from CLI or environment defaults.
///
/// Returns the path and whether it was named explicitly.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR)
        && !env_path.trim().is_empty()
    {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = ToolAtlasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.default_design, ViewVariant::Linear);
        assert_eq!(config.display.default_locale, Locale::En);
        assert!(config.audit.enabled);
    }

    #[test]
    fn default_bind_is_loopback() {
        let addr = ServerConfig::default().bind_addr().unwrap();
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn max_query_bytes_bounds_are_enforced() {
        let mut server = ServerConfig::default();
        server.max_query_bytes = 0;
        assert!(server.validate().is_err());
        server.max_query_bytes = MAX_QUERY_BYTES_LIMIT;
        assert!(server.validate().is_ok());
        server.max_query_bytes = MAX_QUERY_BYTES_LIMIT + 1;
        assert!(server.validate().is_err());
    }

    #[test]
    fn audit_path_must_be_non_empty() {
        let audit = AuditConfig {
            enabled: true,
            path: Some("  ".to_string()),
        };
        assert!(audit.validate().is_err());
    }

    #[test]
    fn overlong_path_component_is_rejected() {
        let long = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        assert!(validate_path(Path::new(&long)).is_err());
    }
}
