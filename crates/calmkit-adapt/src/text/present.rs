// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Calm text presentation — wraps adapted text in a soft green block.

use calmkit_core::AdaptationConfig;

/// Inline style of the calm block: pale green background, dark green text,
/// generous padding and line height.
pub const CALM_BLOCK_STYLE: &str =
    "background-color: #f0f8f0; padding: 15px; border-radius: 10px; color: #2d5a2d; line-height: 1.8;";

/// Render `text` as an HTML fragment in the calm palette. The text is escaped.
pub fn calm_html(text: &str) -> String {
    format!(r#"<div style="{CALM_BLOCK_STYLE}">{}</div>"#, escape_html(text))
}

/// Calm HTML when the calm palette is on, plain text otherwise.
pub fn present_text(text: &str, config: &AdaptationConfig) -> String {
    if config.calm_palette {
        calm_html(text)
    } else {
        text.to_owned()
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
