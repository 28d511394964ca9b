// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// calmkit — Sensory-friendly content adapter
//
// Entry point. Initialises logging, resolves the per-call configuration, and
// runs one adaptation.

mod cli;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use calmkit_adapt::{RasterImage, adapt_image, adapt_text, present_text};
use calmkit_core::error::Result;
use calmkit_core::human_errors::{Severity, humanize_error};
use calmkit_core::{AdaptationConfig, AdaptationSummary};
use clap::Parser;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?cli, "calmkit starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "adaptation failed");
            let human = humanize_error(&err);
            eprintln!("{}", human.message);
            eprintln!("{}", human.suggestion);
            match human.severity {
                Severity::Permanent => ExitCode::from(1),
                Severity::ActionRequired => ExitCode::from(2),
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.effective_config()?;
    tracing::info!(
        sensitivity = %config.sensitivity,
        simplify_text = config.simplify_text,
        reduce_colors = config.reduce_colors,
        calm_palette = config.calm_palette,
        "configuration resolved"
    );

    match &cli.command {
        Command::Text { text, input, html } => {
            let raw = read_text(text.as_deref(), input.as_deref())?;
            println!("{}", render_text(&raw, &config, *html));
        }
        Command::Image { input, output } => {
            let source = RasterImage::open(input)?;
            let adapted = adapt_image(&source, &config);
            adapted.save_png(output)?;
            println!("{}", output.display());
        }
        Command::Summary => {
            println!("{}", AdaptationSummary::from_config(&config));
        }
    }
    Ok(())
}

fn read_text(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    if let Some(path) = input {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    // Drop the newline the shell leaves on piped input.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn render_text(raw: &str, config: &AdaptationConfig, html: bool) -> String {
    let adapted = adapt_text(raw, config);
    if html {
        present_text(&adapted, config)
    } else {
        adapted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_text_prefers_argument() {
        assert_eq!(read_text(Some("hello"), None).unwrap(), "hello");
    }

    #[test]
    fn read_text_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "LOUD NOTE!!!").unwrap();
        assert_eq!(read_text(None, Some(&path)).unwrap(), "LOUD NOTE!!!");
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let err = read_text(None, Some(Path::new("/nonexistent/calmkit.txt"))).unwrap_err();
        assert!(matches!(err, calmkit_core::CalmkitError::Io(_)));
    }

    #[test]
    fn html_output_uses_calm_block() {
        let config = AdaptationConfig::default();
        let out = render_text("HELLO!!!", &config, true);
        assert!(out.starts_with("<div"));
        assert!(out.contains(">Hello!</div>"));
    }

    #[test]
    fn html_flag_ignored_without_calm_palette() {
        let config = AdaptationConfig {
            calm_palette: false,
            ..AdaptationConfig::default()
        };
        assert_eq!(render_text("HELLO!!!", &config, true), "Hello!");
    }

    #[test]
    fn image_command_writes_png() {
        use image::{DynamicImage, Rgb, RgbImage};

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        RasterImage::from_dynamic(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            8,
            8,
            Rgb([240, 40, 40]),
        )))
        .save_png(&input)
        .unwrap();

        let cli = Cli::try_parse_from([
            "calmkit",
            "image",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(&cli).unwrap();

        let adapted = RasterImage::open(&output).unwrap();
        assert_eq!((adapted.width(), adapted.height()), (8, 8));
        assert_ne!(adapted, RasterImage::open(&input).unwrap());
    }
}
