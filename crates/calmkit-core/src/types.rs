// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the content adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalmkitError;

/// How strongly images are toned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SensitivityLevel {
    /// No brightness/contrast change.
    Low,
    #[default]
    Medium,
    High,
}

/// Brightness and contrast enhancement factors for one sensitivity tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneAdjustment {
    pub brightness: f32,
    pub contrast: f32,
}

impl SensitivityLevel {
    /// All levels, from least to most sensitive.
    pub const ALL: [SensitivityLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Tone factors for this tier, or `None` when the image is left as is.
    pub fn tone(&self) -> Option<ToneAdjustment> {
        match self {
            Self::Low => None,
            Self::Medium => Some(ToneAdjustment {
                brightness: 0.85,
                contrast: 0.8,
            }),
            Self::High => Some(ToneAdjustment {
                brightness: 0.7,
                contrast: 0.6,
            }),
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SensitivityLevel {
    type Err = CalmkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CalmkitError::InvalidSetting(format!(
                "unknown sensitivity level '{other}' (expected low, medium, or high)"
            ))),
        }
    }
}

/// Image container formats accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Default file name for a downloaded adapted image.
pub const ADAPTED_IMAGE_FILE_NAME: &str = "adapted_image.png";

/// Per-call overview of what adaptation is doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationSummary {
    pub sensitivity: SensitivityLevel,
    /// How many of the optional adaptations are switched on.
    pub active_adaptations: usize,
    pub processing_mode: String,
}

impl AdaptationSummary {
    pub fn from_config(config: &crate::AdaptationConfig) -> Self {
        Self {
            sensitivity: config.sensitivity,
            active_adaptations: config.active_adaptations(),
            processing_mode: "Real-time".into(),
        }
    }
}

impl fmt::Display for AdaptationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sensitivity Level:  {}", self.sensitivity)?;
        writeln!(f, "Active Adaptations: {}", self.active_adaptations)?;
        write!(f, "Processing Mode:    {}", self.processing_mode)
    }
}
