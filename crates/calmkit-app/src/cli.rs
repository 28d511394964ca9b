// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments and effective configuration.

use std::path::PathBuf;

use calmkit_core::error::Result;
use calmkit_core::{ADAPTED_IMAGE_FILE_NAME, AdaptationConfig, SensitivityLevel};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Adapt text and images to reduce sensory overload")]
pub struct Cli {
    /// Sensitivity level: low, medium, or high
    #[arg(short, long, global = true)]
    pub sensitivity: Option<SensitivityLevel>,

    /// Leave text exactly as written
    #[arg(long, global = true)]
    pub no_simplify: bool,

    /// Skip the softening blur on images
    #[arg(long, global = true)]
    pub no_reduce_colors: bool,

    /// Keep original colours and plain text output
    #[arg(long, global = true)]
    pub no_calm_palette: bool,

    /// Read settings from a JSON profile (flags still win)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Adapt text from an argument, a file, or stdin
    Text {
        /// Text to adapt (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read text from this file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Print an HTML fragment in the calm palette
        #[arg(long)]
        html: bool,
    },
    /// Adapt a PNG or JPEG image and write it as PNG
    Image {
        /// Image to adapt
        input: PathBuf,

        /// Where to write the adapted PNG
        #[arg(short, long, default_value = ADAPTED_IMAGE_FILE_NAME)]
        output: PathBuf,
    },
    /// Show the effective settings
    Summary,
}

impl Cli {
    /// Defaults, then the optional profile, then flags.
    pub fn effective_config(&self) -> Result<AdaptationConfig> {
        let base = match &self.config {
            Some(path) => AdaptationConfig::load(path)?,
            None => AdaptationConfig::default(),
        };
        Ok(self.apply_flags(base))
    }

    fn apply_flags(&self, mut config: AdaptationConfig) -> AdaptationConfig {
        if let Some(level) = self.sensitivity {
            config.sensitivity = level;
        }
        if self.no_simplify {
            config.simplify_text = false;
        }
        if self.no_reduce_colors {
            config.reduce_colors = false;
        }
        if self.no_calm_palette {
            config.calm_palette = false;
        }
        config
    }
}
