//! Error types for the startup path.
//!
//! Nothing in the simulation itself can fail; every error here ends in either
//! `AppExit::error()` (assets) or a logged fallback to defaults (config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load asset `{path}`: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("image `{path}` reported loaded but is missing from Assets<Image>")]
    MissingImage { path: String },

    #[error("image `{path}` has no CPU-side pixel data to build a collision mask from")]
    NoPixelData { path: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tunables: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid tunable `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
