// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptation configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::SensitivityLevel;

/// Settings for a single adaptation call.
///
/// Passed by reference into every adaptation function; nothing reads
/// configuration from shared state. Profiles may be loaded from JSON but are
/// never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationConfig {
    /// Controls how far image brightness and contrast are reduced.
    pub sensitivity: SensitivityLevel,
    /// Collapse repeated punctuation, de-shout, and break long sentences.
    pub simplify_text: bool,
    /// Soften fine image detail with a light blur.
    pub reduce_colors: bool,
    /// Desaturate images and present text in a calm block.
    pub calm_palette: bool,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            sensitivity: SensitivityLevel::Medium,
            simplify_text: true,
            reduce_colors: true,
            calm_palette: true,
        }
    }
}

impl AdaptationConfig {
    /// Number of optional adaptations switched on.
    pub fn active_adaptations(&self) -> usize {
        [self.simplify_text, self.reduce_colors, self.calm_palette]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }

    /// Parse a profile from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON profile from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }
}
