use serde::Serialize;

/// The languages the pipeline accepts for transcription.
///
/// Why this exists:
/// - We want a single, strongly-typed representation of language codes across the CLI
///   and library code.
/// - Using an enum makes an unsupported code unrepresentable, so there is no runtime
///   validation step to get wrong.
///
/// Integration notes:
/// - `ValueEnum` (behind the `cli` feature) allows this enum to be used directly as a
///   CLI flag with `clap`.
/// - The transcription capability receives `code()` verbatim; the pipeline has no
///   opinion on whether the underlying model supports it beyond passing it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,

    /// Cantonese.
    Yue,

    /// Chinese (Mandarin).
    Zh,
}

impl Language {
    /// The code passed through to the transcription capability.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Yue => "yue",
            Language::Zh => "zh",
        }
    }

    /// The human-readable label written into transcript artifact headers.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Yue => "Cantonese",
            Language::Zh => "Chinese",
        }
    }
}
