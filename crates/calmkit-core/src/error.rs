// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for calmkit.

use thiserror::Error;

/// Top-level error type for all calmkit operations.
#[derive(Debug, Error)]
pub enum CalmkitError {
    // -- Image errors --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    // -- Configuration --
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    // -- I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CalmkitError>;
