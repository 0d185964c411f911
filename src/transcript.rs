use std::path::PathBuf;

use serde::Serialize;

use crate::language::Language;

/// One timed span of recognized speech.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Segment {
    pub start_seconds: f32,
    pub end_seconds: f32,
    pub text: String,
}

/// Terminal outcome of one transcription attempt.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum Outcome {
    Succeeded,
    Failed(String),
}

impl Outcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

/// The result of transcribing one audio input.
///
/// Exactly one `Transcript` exists per attempted input, whether or not the capability
/// succeeded; failure is carried as data here, not as control flow.
///
/// Segments keep the capability's emission order (non-decreasing start). Overlapping or
/// zero-length segments are legitimate model output and are preserved verbatim, so
/// callers must not assume monotonic end timestamps.
#[derive(Debug, Serialize, Clone)]
pub struct Transcript {
    pub source_path: PathBuf,
    pub language: Language,
    pub full_text: String,
    pub segments: Vec<Segment>,
    pub outcome: Outcome,
}

impl Transcript {
    /// Build a successful transcript from raw capability output.
    ///
    /// The full text is trimmed of leading/trailing whitespace; segments are taken
    /// verbatim with order preserved.
    pub fn succeeded(
        source_path: PathBuf,
        language: Language,
        full_text: &str,
        segments: Vec<Segment>,
    ) -> Self {
        Self {
            source_path,
            language,
            full_text: full_text.trim().to_owned(),
            segments,
            outcome: Outcome::Succeeded,
        }
    }

    /// Build a failure transcript carrying a short human-readable reason.
    pub fn failed(source_path: PathBuf, language: Language, reason: impl Into<String>) -> Self {
        Self {
            source_path,
            language,
            full_text: String::new(),
            segments: Vec::new(),
            outcome: Outcome::Failed(reason.into()),
        }
    }

    /// The bare file name of the source artifact, for headers and display.
    pub fn source_file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }
}
