//! Product catalog configuration, mapping each serial prefix to its product.
//!
//! The catalog is a YAML document:
//!
//! ```yaml
//! maxBatchSize: 5000
//! products:
//!   - code: PWR-12
//!     name: 12V power module
//!     serialPrefix: PM
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::serial::SUFFIX_WIDTH;
use crate::model::Product;

/// The catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Digits in a serial suffix. Only the standard width is accepted.
    #[serde(default = "default_suffix_width")]
    pub suffix_width: usize,

    /// Upper bound on items held in one assemble session.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Products that can be assembled.
    #[serde(default)]
    pub products: Vec<Product>,
}

fn default_suffix_width() -> usize {
    SUFFIX_WIDTH
}

fn default_max_batch_size() -> usize {
    10_000
}

impl CatalogConfig {
    /// Parse a catalog from YAML and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig =
            serde_yml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!(
            "catalog: loaded {} products from {:?}",
            config.products.len(),
            path
        );
        Ok(config)
    }

    /// Validate limits and product prefixes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix_width != SUFFIX_WIDTH {
            return Err(ConfigError::BadSuffixWidth(self.suffix_width));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }

        let mut codes = HashSet::new();
        let mut prefixes = HashSet::new();
        for product in &self.products {
            if product.serial_prefix.is_empty() {
                return Err(ConfigError::EmptyPrefix {
                    product: product.code.clone(),
                });
            }
            // A trailing digit would be read back as part of the suffix.
            if product.serial_prefix.ends_with(|c: char| c.is_ascii_digit()) {
                return Err(ConfigError::PrefixEndsWithDigit {
                    product: product.code.clone(),
                });
            }
            if !codes.insert(product.code.as_str()) {
                return Err(ConfigError::DuplicateProduct(product.code.clone()));
            }
            if !prefixes.insert(product.serial_prefix.as_str()) {
                return Err(ConfigError::DuplicatePrefix(product.serial_prefix.clone()));
            }
        }

        Ok(())
    }

    /// Look up a product by code.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        default_config()
    }
}

/// Catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("suffix width {0} is not supported (must be {width})", width = SUFFIX_WIDTH)]
    BadSuffixWidth(usize),

    #[error("max batch size must be greater than zero")]
    ZeroBatchSize,

    #[error("product '{product}' has an empty serial prefix")]
    EmptyPrefix { product: String },

    #[error("product '{product}' serial prefix must not end with a digit")]
    PrefixEndsWithDigit { product: String },

    #[error("duplicate product code '{0}'")]
    DuplicateProduct(String),

    #[error("serial prefix '{0}' is used by more than one product")]
    DuplicatePrefix(String),

    #[error("failed to read catalog {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// An empty catalog with the default limits.
pub fn default_config() -> CatalogConfig {
    CatalogConfig {
        suffix_width: SUFFIX_WIDTH,
        max_batch_size: default_max_batch_size(),
        products: Vec::new(),
    }
}
