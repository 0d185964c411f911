use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::json_encoder::JsonEncoder;
use crate::output_type::OutputType;
use crate::text_encoder::TextEncoder;
use crate::transcript::Transcript;
use crate::transcript_encoder::TranscriptEncoder;

/// Write one transcript artifact under `output_dir` and return the path written.
///
/// The artifact name is the source file name with its extension replaced by the
/// format's extension. `output_dir` and its parents are created on demand; an existing
/// artifact at the same path is overwritten (no merge, no versioning).
///
/// Failed transcripts are persisted too, recording the failure reason in place of body
/// text, so a batch leaves an audit trail per input. Only I/O problems are errors here,
/// and they are fatal: a transcript that cannot be written means the run's output can
/// no longer be trusted.
pub fn persist(
    transcript: &Transcript,
    output_dir: &Path,
    output_type: OutputType,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Persistence {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let artifact_path = output_dir.join(artifact_file_name(&transcript.source_path, output_type));

    let file = File::create(&artifact_path).map_err(|source| Error::Persistence {
        path: artifact_path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    // Select an encoder based on the requested output type.
    // We keep this explicit (no trait objects) to avoid lifetime surprises.
    let encoded = match output_type {
        OutputType::Text => TextEncoder.encode(transcript, &mut writer),
        OutputType::Json => JsonEncoder.encode(transcript, &mut writer),
    };

    encoded.map_err(|err| Error::Persistence {
        path: artifact_path.clone(),
        source: std::io::Error::other(err),
    })?;

    Ok(artifact_path)
}

/// Derive the artifact's bare file name from the source path.
fn artifact_file_name(source: &Path, output_type: OutputType) -> PathBuf {
    let renamed = source.with_extension(output_type.extension());
    match renamed.file_name() {
        Some(name) => PathBuf::from(name),
        // A source path with no usable file name (e.g. `..`) still gets an artifact.
        None => PathBuf::from(format!("transcript.{}", output_type.extension())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn transcript(text: &str) -> Transcript {
        Transcript::succeeded(
            PathBuf::from("voice/a.mp3"),
            Language::En,
            text,
            Vec::new(),
        )
    }

    #[test]
    fn replaces_the_source_extension() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let path = persist(&transcript("hello"), dir.path(), OutputType::Text)?;
        assert_eq!(path, dir.path().join("a.txt"));
        assert!(path.is_file());

        let path = persist(&transcript("hello"), dir.path(), OutputType::Json)?;
        assert_eq!(path, dir.path().join("a.json"));
        Ok(())
    }

    #[test]
    fn creates_missing_output_directories() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("out/transcripts");

        let path = persist(&transcript("hello"), &nested, OutputType::Text)?;
        assert!(path.starts_with(&nested));
        assert!(path.is_file());
        Ok(())
    }

    #[test]
    fn overwrites_an_existing_artifact() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let first = persist(&transcript("first pass"), dir.path(), OutputType::Text)?;
        let second = persist(&transcript("second pass"), dir.path(), OutputType::Text)?;
        assert_eq!(first, second);

        let content = std::fs::read_to_string(&second)?;
        assert!(content.contains("second pass"));
        assert!(!content.contains("first pass"));
        Ok(())
    }

    #[test]
    fn failed_transcripts_are_still_persisted() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let failed = Transcript::failed(PathBuf::from("bad.mp3"), Language::En, "model error");

        let path = persist(&failed, dir.path(), OutputType::Text)?;
        let content = std::fs::read_to_string(path)?;
        assert!(content.contains("Transcription failed: model error"));
        Ok(())
    }

    #[test]
    fn unwritable_output_directory_is_a_persistence_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"not a directory")?;

        let err = persist(&transcript("hello"), &blocked, OutputType::Text).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }));
        Ok(())
    }
}
