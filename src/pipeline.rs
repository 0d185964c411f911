//! High-level API for running batch transcriptions.
//!
//! We expose a single, ergonomic entry point (`Pipeline`) that wires discovered inputs
//! through the injected transcription capability and the artifact writer.
//!
//! The intent is:
//! - The capability is constructed once (model loading is expensive) and reused for
//!   every input in the batch.
//! - One input's failure never aborts the batch; it is captured as data and the loop
//!   moves on to the next input.
//! - Callers choose language, destination, and artifact format via `Opts`.
//!
//! This module is deliberately "high level": it wires discovery output → capability →
//! persistence, while keeping the lower-level pieces testable in their own modules.

use crate::error::Result;
use crate::input::AudioInput;
use crate::language::Language;
use crate::opts::Opts;
use crate::persist::persist;
use crate::summary::RunSummary;
use crate::transcriber::Transcriber;
use crate::transcript::Transcript;

/// The main batch transcription entry point.
///
/// `Pipeline` owns the injected capability for the duration of a batch. Processing is
/// strictly sequential: the capability is modeled as a singleton resource (one loaded
/// model, one accelerator context) and is never asked to serve two inputs at once, so
/// no locking or queueing discipline is needed.
///
/// Typical usage:
/// - Construct once around a loaded capability.
/// - Call `run` with the inputs produced by [`crate::input::discover_inputs`].
pub struct Pipeline<T: Transcriber> {
    transcriber: T,
}

impl<T: Transcriber> Pipeline<T> {
    /// Create a pipeline around a transcription capability.
    pub fn new(transcriber: T) -> Self {
        Self { transcriber }
    }

    /// Transcribe a single input, converting any capability error into data.
    ///
    /// The returned transcript always exists: success carries the trimmed full text and
    /// the capability's segments verbatim, while a capability error becomes
    /// `Outcome::Failed` with a short human-readable reason instead of propagating.
    ///
    /// This step never touches the filesystem; persistence is a separate step
    /// ([`crate::persist::persist`]) so the two concerns stay independently testable.
    pub fn transcribe_one(&mut self, input: &AudioInput, language: Language) -> Transcript {
        tracing::info!(
            path = %input.path.display(),
            language = language.code(),
            "transcribing"
        );
        if let Some(seconds) = input.duration_hint {
            tracing::debug!(seconds, "expected duration");
        }

        match self.transcriber.transcribe(&input.path, language) {
            Ok(raw) => {
                Transcript::succeeded(input.path.clone(), language, &raw.full_text, raw.segments)
            }
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::warn!(path = %input.path.display(), %reason, "transcription failed");
                Transcript::failed(input.path.clone(), language, reason)
            }
        }
    }

    /// Run a whole batch: transcribe then persist each input, in order.
    ///
    /// Inputs are processed in the order given; artifacts are written in that same
    /// order, and the summary's failure list preserves it. Per-input transcription
    /// failures are recorded and the loop continues. Persistence errors abort the run,
    /// since an artifact that cannot be written means the run's output can no longer be
    /// trusted.
    ///
    /// An empty input sequence yields an all-zero summary without touching the
    /// filesystem.
    pub fn run(&mut self, inputs: &[AudioInput], opts: &Opts) -> Result<RunSummary> {
        let mut summary = RunSummary::new();

        for input in inputs {
            let transcript = self.transcribe_one(input, opts.language);
            let artifact = persist(&transcript, &opts.output_dir, opts.output_type)?;
            tracing::info!(artifact = %artifact.display(), "artifact written");
            summary.record(&transcript);
        }

        tracing::info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            failed = summary.failures.len(),
            "batch finished"
        );

        Ok(summary)
    }

    /// Access the injected capability.
    pub fn transcriber(&self) -> &T {
        &self.transcriber
    }

    /// Access the injected capability mutably.
    pub fn transcriber_mut(&mut self) -> &mut T {
        &mut self.transcriber
    }
}
