/// The supported artifact formats for persisted transcripts.
///
/// Why this exists:
/// - We want a single, strongly-typed representation of output formats
///   across the CLI and library code.
/// - Using an enum avoids stringly-typed conditionals and keeps format
///   selection explicit and discoverable.
///
/// Integration notes:
/// - `ValueEnum` (behind the `cli` feature) allows this enum to be used directly as a
///   CLI flag with `clap`.
/// - Each variant maps to a concrete `TranscriptEncoder` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputType {
    /// The fixed human-readable text layout downstream tooling parses.
    Text,

    /// The full transcript serialized as a single JSON document.
    Json,
}

impl OutputType {
    /// File extension used for artifacts in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputType::Text => "txt",
            OutputType::Json => "json",
        }
    }
}
