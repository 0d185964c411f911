use std::io::Write;

use anyhow::Result;

use crate::transcript::Transcript;
use crate::transcript_encoder::TranscriptEncoder;

/// A `TranscriptEncoder` that writes the whole transcript as one JSON document.
///
/// Example output:
/// ```json
/// {
///   "source_path": "voice/a.mp3",
///   "language": "en",
///   "full_text": "hello world",
///   "segments": [ { "start_seconds": 0.0, "end_seconds": 1.5, "text": "hello" } ],
///   "outcome": { "status": "succeeded" }
/// }
/// ```
pub struct JsonEncoder;

impl TranscriptEncoder for JsonEncoder {
    fn encode(&self, transcript: &Transcript, w: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *w, transcript)?;

        // Trailing newline so artifacts end like ordinary text files.
        writeln!(w)?;
        w.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::transcript::Segment;
    use std::path::PathBuf;

    #[test]
    fn json_round_trips_through_serde() -> anyhow::Result<()> {
        let transcript = Transcript::succeeded(
            PathBuf::from("voice/a.mp3"),
            Language::En,
            "hello",
            vec![Segment {
                start_seconds: 0.0,
                end_seconds: 1.5,
                text: "hello".to_owned(),
            }],
        );

        let mut out = Vec::new();
        JsonEncoder.encode(&transcript, &mut out)?;

        let parsed: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(parsed["language"], "en");
        assert_eq!(parsed["full_text"], "hello");
        assert_eq!(parsed["segments"][0]["text"], "hello");
        assert_eq!(parsed["outcome"]["status"], "succeeded");
        Ok(())
    }

    #[test]
    fn json_failure_outcome_carries_the_reason() -> anyhow::Result<()> {
        let transcript =
            Transcript::failed(PathBuf::from("bad.mp3"), Language::Zh, "model error");

        let mut out = Vec::new();
        JsonEncoder.encode(&transcript, &mut out)?;

        let parsed: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(parsed["outcome"]["status"], "failed");
        assert_eq!(parsed["outcome"]["reason"], "model error");
        Ok(())
    }
}
