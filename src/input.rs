use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File extensions the directory scan recognizes as audio, matched case-insensitively.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac", "ogg"];

/// A reference to one source audio artifact.
///
/// Inputs are immutable once built; the path doubles as the input's identity within a
/// run.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioInput {
    pub path: PathBuf,

    /// Expected duration in seconds, when a prior stage happens to know it.
    pub duration_hint: Option<f32>,
}

impl AudioInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            duration_hint: None,
        }
    }

    pub fn with_duration_hint(mut self, seconds: f32) -> Self {
        self.duration_hint = Some(seconds);
        self
    }
}

/// Resolve the inputs for one batch.
///
/// When `explicit` is non-empty it wins: each entry that exists on disk becomes an
/// input, order preserved. Otherwise `scan_root` is scanned recursively for known audio
/// extensions. Either way an empty result is a valid batch, not an error.
pub fn discover_inputs(explicit: &[PathBuf], scan_root: &Path) -> Result<Vec<AudioInput>> {
    if !explicit.is_empty() {
        return Ok(resolve_explicit(explicit));
    }
    scan_directory(scan_root)
}

/// Filter an explicit path list down to the entries that exist on disk.
///
/// Nonexistent entries are dropped rather than treated as errors; we warn per dropped
/// entry so a typo'd path does not disappear without a trace.
pub fn resolve_explicit(paths: &[PathBuf]) -> Vec<AudioInput> {
    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_file() {
            inputs.push(AudioInput::new(path.clone()));
        } else {
            tracing::warn!(path = %path.display(), "dropping input that does not exist");
        }
    }
    inputs
}

/// Recursively scan `root` for files with a known audio extension.
///
/// Results come back in lexicographic path order so repeated runs process inputs in a
/// stable order. A missing or non-directory root is a fatal discovery error; a root
/// with no matches simply yields an empty batch.
pub fn scan_directory(root: &Path) -> Result<Vec<AudioInput>> {
    if !root.exists() {
        return Err(Error::Discovery(format!(
            "scan root '{}' does not exist",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(Error::Discovery(format!(
            "scan root '{}' is not a directory",
            root.display()
        )));
    }

    let mut found = Vec::new();
    collect_audio_files(root, &mut found)?;
    found.sort();

    Ok(found.into_iter().map(AudioInput::new).collect())
}

fn collect_audio_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_audio_files(&path, out)?;
        } else if has_audio_extension(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Read a discovery list file: one path per line, blank lines ignored.
///
/// A prior pipeline stage may hand us this file; we consume it read-only. An unreadable
/// list is a fatal discovery error since we cannot know what the batch was meant to be.
pub fn read_input_list(path: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        Error::Discovery(format!(
            "cannot read input list '{}': {err}",
            path.display()
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("failed to create fixture file");
    }

    #[test]
    fn resolve_explicit_drops_missing_entries_and_preserves_order() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let a = dir.path().join("a.mp3");
        let b = dir.path().join("b.mp3");
        touch(&a);
        touch(&b);

        let inputs = resolve_explicit(&[a.clone(), dir.path().join("missing.mp3"), b.clone()]);

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].path, a);
        assert_eq!(inputs[1].path, b);
        Ok(())
    }

    #[test]
    fn scan_directory_recurses_filters_and_sorts() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("nested");
        fs::create_dir(&nested)?;

        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("notes.txt"));
        touch(&nested.join("a.MP3"));

        let inputs = scan_directory(dir.path())?;
        let names: Vec<_> = inputs
            .iter()
            .map(|input| input.path.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![PathBuf::from("b.wav"), PathBuf::from("nested/a.MP3")]
        );
        Ok(())
    }

    #[test]
    fn scan_directory_with_no_matches_is_empty_not_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        touch(&dir.path().join("readme.md"));

        assert!(scan_directory(dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn scan_directory_rejects_missing_root() {
        let err = scan_directory(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::Discovery(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn scan_directory_rejects_file_root() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("a.mp3");
        touch(&file);

        let err = scan_directory(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        Ok(())
    }

    #[test]
    fn discover_inputs_prefers_a_non_empty_explicit_list() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let listed = dir.path().join("listed.mp3");
        touch(&listed);
        touch(&dir.path().join("scanned.mp3"));

        let inputs = discover_inputs(&[listed.clone()], dir.path())?;

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].path, listed);
        Ok(())
    }

    #[test]
    fn discover_inputs_falls_back_to_scanning() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        touch(&dir.path().join("scanned.mp3"));

        let inputs = discover_inputs(&[], dir.path())?;
        assert_eq!(inputs.len(), 1);
        Ok(())
    }

    #[test]
    fn read_input_list_skips_blank_lines() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let list = dir.path().join("changed_files.txt");
        fs::write(&list, "voice/a.mp3\n\n  \nvoice/b.wav\n")?;

        let paths = read_input_list(&list)?;
        assert_eq!(
            paths,
            vec![PathBuf::from("voice/a.mp3"), PathBuf::from("voice/b.wav")]
        );
        Ok(())
    }

    #[test]
    fn read_input_list_reports_unreadable_file_as_discovery_error() {
        let err = read_input_list(Path::new("/no/such/list.txt")).unwrap_err();
        assert!(matches!(err, Error::Discovery(_)));
    }
}
