// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people who find technical output stressful.
//
// Every technical error is mapped to short, calm wording with one clear
// suggestion. Nothing here is retried: each failure ends the current request.

use crate::error::CalmkitError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it (pick another file, correct a setting).
    ActionRequired,
    /// The input itself cannot be used.
    Permanent,
}

/// A calm, plain-language error with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Short summary.
    pub message: String,
    /// What the user could try next.
    pub suggestion: String,
    /// Severity level (drives the exit code).
    pub severity: Severity,
}

/// Convert a `CalmkitError` into a `HumanError`.
pub fn humanize_error(err: &CalmkitError) -> HumanError {
    match err {
        // -- Image errors --
        CalmkitError::Decode(_) => HumanError {
            message: "This image couldn't be opened.".into(),
            suggestion: "The file may be damaged. Try saving it again as a PNG or JPEG.".into(),
            severity: Severity::Permanent,
        },

        CalmkitError::UnsupportedFormat(detail) => HumanError {
            message: "This kind of image isn't supported.".into(),
            suggestion: format!("Please use a PNG or JPEG image. (File type: {detail})"),
            severity: Severity::ActionRequired,
        },

        CalmkitError::Encode(_) => HumanError {
            message: "The adapted image couldn't be saved.".into(),
            suggestion: "Try again with a smaller image.".into(),
            severity: Severity::Permanent,
        },

        // -- Configuration --
        CalmkitError::InvalidSetting(detail) => HumanError {
            message: "One of the settings isn't quite right.".into(),
            suggestion: format!("Check the setting and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        // -- I/O --
        CalmkitError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or renamed. Check the path and try again.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "That file can't be read or written.".into(),
                suggestion: "Check the file permissions, or choose a different folder.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If it keeps happening, the disk may be full.".into(),
                severity: Severity::Permanent,
            },
        },

        CalmkitError::Serialization(_) => HumanError {
            message: "The settings profile couldn't be read.".into(),
            suggestion: "Make sure the profile is valid JSON, or leave it out to use the defaults.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_is_permanent() {
        let human = humanize_error(&CalmkitError::Decode("truncated PNG".into()));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.message.contains("PNG"));
    }

    #[test]
    fn unsupported_format_names_the_type() {
        let human = humanize_error(&CalmkitError::UnsupportedFormat("gif".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("gif"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = CalmkitError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert_eq!(human.message, "The file couldn't be found.");
    }

    #[test]
    fn bad_setting_is_action_required() {
        let human = humanize_error(&CalmkitError::InvalidSetting("sensitivity".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
