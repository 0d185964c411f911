use std::path::PathBuf;

use crate::language::Language;
use crate::output_type::OutputType;

/// Options that control how a batch run is performed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (APIs, tests, batch jobs) can construct options programmatically
#[derive(Debug, Clone)]
pub struct Opts {
    /// The language the transcription capability is asked to transcribe in.
    pub language: Language,

    /// Directory transcript artifacts are written under. Created on demand, including
    /// parents.
    pub output_dir: PathBuf,

    /// The artifact format for persisted transcripts.
    pub output_type: OutputType,
}
