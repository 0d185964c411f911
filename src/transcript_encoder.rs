use std::io::Write;

use anyhow::Result;

use crate::transcript::Transcript;

/// Serializes one finished [`Transcript`] into an output writer.
///
/// Encoders see whole transcripts, not streams: by the time anything is persisted the
/// transcription attempt is already terminal (succeeded or failed), and failed
/// transcripts are encoded too so every input leaves an artifact behind.
pub trait TranscriptEncoder {
    fn encode(&self, transcript: &Transcript, w: &mut dyn Write) -> Result<()>;
}
