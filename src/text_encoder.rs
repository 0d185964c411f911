use anyhow::Result;
use std::io::Write;

use crate::transcript::{Outcome, Transcript};
use crate::transcript_encoder::TranscriptEncoder;

/// Width of the `=` ruler lines in the text layout.
const RULER_WIDTH: usize = 60;

/// A `TranscriptEncoder` that writes the fixed human-readable text layout.
///
/// Layout (fixed for compatibility with downstream tooling that parses it):
/// - a header block: source file name, language label, a ruler line
/// - the full trimmed transcript text
/// - a ruler, a `Detailed segments:` heading, then one
///   `[HH:MM:SS -> HH:MM:SS] text` line per segment, in emission order
///
/// Failed transcripts keep the same layout with the failure reason in place of the body
/// text and no segment lines, so operators get an artifact per input either way.
pub struct TextEncoder;

impl TranscriptEncoder for TextEncoder {
    fn encode(&self, transcript: &Transcript, w: &mut dyn Write) -> Result<()> {
        let ruler = "=".repeat(RULER_WIDTH);

        writeln!(w, "Transcript of: {}", transcript.source_file_name())?;
        writeln!(w, "Language: {}", transcript.language.label())?;
        writeln!(w, "{ruler}")?;
        writeln!(w)?;

        match &transcript.outcome {
            Outcome::Succeeded => writeln!(w, "{}", transcript.full_text)?,
            Outcome::Failed(reason) => writeln!(w, "Transcription failed: {reason}")?,
        }

        writeln!(w)?;
        writeln!(w, "{ruler}")?;
        writeln!(w, "Detailed segments:")?;
        writeln!(w)?;

        for segment in &transcript.segments {
            let start = format_timestamp(segment.start_seconds);
            let end = format_timestamp(segment.end_seconds);
            writeln!(w, "[{start} -> {end}] {}", segment.text.trim())?;
        }

        w.flush()?;
        Ok(())
    }
}

/// Format seconds into a zero-padded `HH:MM:SS` timestamp.
///
/// Sub-second precision is truncated, never rounded; the fixed layout promises whole
/// seconds only. (The cast also maps NaN and negatives to zero.)
fn format_timestamp(seconds: f32) -> String {
    let total_s = seconds as u64;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02}")
}
