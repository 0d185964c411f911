//! Built-in capability powered by `whisper-rs` / `whisper.cpp`.

use std::os::raw::{c_char, c_void};
use std::path::Path;
use std::sync::Once;

use anyhow::{Context, Result, ensure};
use hound::WavReader;
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

use crate::language::Language;
use crate::transcriber::{RawTranscription, Transcriber};
use crate::transcript::Segment;

/// The sample rate whisper.cpp expects.
const TARGET_SAMPLE_RATE: u32 = 16_000;

/// A [`Transcriber`] backed by a locally loaded whisper.cpp model.
///
/// The model is loaded once at construction (expensive) and reused for every input in
/// a batch. Inputs must be mono 16 kHz WAV; anything else surfaces as a per-input
/// failure when the pipeline calls `transcribe`, never as a batch abort.
pub struct WhisperTranscriber {
    ctx: WhisperContext,
}

impl WhisperTranscriber {
    /// Load a whisper.cpp model from disk and initialize the capability.
    pub fn new(model_path: &str) -> Result<Self> {
        // We keep whisper logs quiet so binaries fully control stdout/stderr.
        // This function is idempotent (safe to call multiple times).
        init_whisper_logging();

        ensure!(!model_path.trim().is_empty(), "model path must be provided");

        // We start with default Whisper context parameters.
        // If we need to tune performance or enable optional features later, we can do it here.
        let ctx_params = WhisperContextParameters::default();
        let ctx = WhisperContext::new_with_params(model_path, ctx_params)
            .with_context(|| format!("failed to load model from path: {model_path}"))?;

        Ok(Self { ctx })
    }

    /// Access the underlying Whisper context.
    ///
    /// This is primarily intended for advanced or experimental use-cases.
    pub fn context(&self) -> &WhisperContext {
        &self.ctx
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&mut self, audio_path: &Path, language: Language) -> Result<RawTranscription> {
        let samples = load_wav_samples(audio_path)?;
        let state = run_whisper_full(&self.ctx, language, &samples)?;

        let mut segments = Vec::new();
        for whisper_segment in state.as_iter() {
            let text = whisper_segment
                .to_str()
                .context("failed to get segment text")?
                .to_owned();

            segments.push(Segment {
                start_seconds: centiseconds_to_seconds(whisper_segment.start_timestamp()),
                end_seconds: centiseconds_to_seconds(whisper_segment.end_timestamp()),
                text,
            });
        }

        // Whisper segment texts carry their own leading spaces, so plain concatenation
        // reconstructs the full text.
        let full_text: String = segments.iter().map(|s| s.text.as_str()).collect();

        Ok(RawTranscription {
            full_text,
            segments,
        })
    }
}

/// Load WAV audio from disk and return mono samples normalized to `[-1.0, 1.0]`.
///
/// Format requirements:
/// - Mono (1 channel)
/// - 16 kHz, 16-bit integer PCM
///
/// Enforcing this here keeps the inference call simple and predictable.
fn load_wav_samples(path: &Path) -> Result<Vec<f32>> {
    let mut reader = WavReader::open(path)
        .with_context(|| format!("failed to read WAV data from '{}'", path.display()))?;
    let spec = reader.spec();

    ensure!(
        spec.channels == 1,
        "expected mono WAV (1 channel), got {} channels",
        spec.channels
    );
    ensure!(
        spec.sample_rate == TARGET_SAMPLE_RATE,
        "expected {TARGET_SAMPLE_RATE} Hz sample rate, got {} Hz",
        spec.sample_rate
    );

    let mut samples = Vec::new();
    for sample in reader.samples::<i16>() {
        let pcm = sample?;
        samples.push(pcm as f32 / i16::MAX as f32);
    }

    Ok(samples)
}

fn build_full_params(language: Language) -> FullParams<'static, 'static> {
    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size: 5,
        patience: 1.0,
    });

    params.set_n_threads(num_cpus::get() as i32);
    params.set_translate(false);
    params.set_language(Some(language.code()));
    params.set_no_context(true);
    params.set_single_segment(false);

    params.set_print_progress(false);
    params.set_print_special(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    params
}

fn run_whisper_full(
    ctx: &WhisperContext,
    language: Language,
    samples: &[f32],
) -> Result<WhisperState> {
    let params = build_full_params(language);

    let mut state = ctx
        .create_state()
        .context("failed to create whisper state")?;

    state
        .full(params, samples)
        .context("failed to run whisper full()")?;

    Ok(state)
}

fn centiseconds_to_seconds(cs: i64) -> f32 {
    cs as f32 / 100.0
}

/// A no-op log callback used to silence logs emitted by whisper.cpp.
unsafe extern "C" fn whisper_log_callback(
    _level: u32,
    _c_msg: *const c_char,
    _user_data: *mut c_void,
) {
    // Intentionally left empty.
}

/// Ensure whisper logging is configured exactly once for the lifetime of the process.
fn init_whisper_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| unsafe {
        whisper_rs::set_log_callback(Some(whisper_log_callback), std::ptr::null_mut());
    });
}
