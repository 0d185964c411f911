use std::path::Path;

use anyhow::Result;

use crate::language::Language;
use crate::transcript::Segment;

/// Raw output of one capability invocation, before the pipeline shapes it into a
/// [`Transcript`](crate::transcript::Transcript).
#[derive(Debug, Clone, Default)]
pub struct RawTranscription {
    pub full_text: String,
    pub segments: Vec<Segment>,
}

/// Pluggable speech-to-text capability used by [`Pipeline`](crate::pipeline::Pipeline).
///
/// A transcriber is responsible for turning one audio artifact into text plus timed
/// segments. The pipeline has no opinion on its internals (model choice, acceleration,
/// remote vs local execution).
///
/// Contract notes:
/// - `transcribe` takes `&mut self` because speech backends typically hold mutable
///   inference state; the pipeline treats the capability as exclusively owned for the
///   duration of the call and never invokes it concurrently with itself.
/// - Errors are ordinary `anyhow` errors. The pipeline converts them into
///   `Outcome::Failed` data rather than propagating them, so backends should surface an
///   externally imposed timeout or abort as an error, never as a partial success.
/// - Retries, if desired, belong inside the implementation; the pipeline will call
///   exactly once per input.
pub trait Transcriber {
    /// Transcribe the audio artifact at `audio_path` in the given language.
    fn transcribe(&mut self, audio_path: &Path, language: Language) -> Result<RawTranscription>;
}
