//! Built-in implementations of the [`Transcriber`](crate::transcriber::Transcriber)
//! capability.

#[cfg(feature = "backend-whisper")]
pub mod whisper;
