use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use scrivener::backends::whisper::WhisperTranscriber;
use scrivener::input::{AudioInput, read_input_list, resolve_explicit, scan_directory};
use scrivener::language::Language;
use scrivener::opts::Opts;
use scrivener::output_type::OutputType;
use scrivener::pipeline::Pipeline;

fn main() -> Result<ExitCode> {
    scrivener::logging::init();
    let params = get_params()?;

    let inputs = gather_inputs(&params)?;
    if inputs.is_empty() {
        println!("No audio files found.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} audio file(s) to transcribe:", inputs.len());
    for input in &inputs {
        println!("  - {}", input.path.display());
    }

    let transcriber = WhisperTranscriber::new(&params.model_path)?;
    let mut pipeline = Pipeline::new(transcriber);

    let opts = Opts {
        language: params.language,
        output_dir: params.output_dir.clone(),
        output_type: params.output_type,
    };

    let summary = pipeline.run(&inputs, &opts)?;

    println!(
        "Successfully transcribed {}/{} files",
        summary.succeeded, summary.attempted
    );

    if summary.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        for (path, reason) in &summary.failures {
            eprintln!("failed: {}: {reason}", path.display());
        }
        Ok(ExitCode::FAILURE)
    }
}

/// Map the CLI surface onto discovery:
/// - `--list` reads paths from a list file, then resolves them like an explicit list
/// - a directory argument is scanned recursively
/// - a file argument is treated as a one-entry explicit list
fn gather_inputs(params: &Params) -> Result<Vec<AudioInput>> {
    if let Some(list_path) = &params.list {
        let explicit = read_input_list(list_path)?;
        return Ok(resolve_explicit(&explicit));
    }

    match &params.input {
        Some(path) if path.is_dir() => Ok(scan_directory(path)?),
        Some(path) => Ok(resolve_explicit(std::slice::from_ref(path))),
        None => bail!("provide an audio file, a directory, or --list"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "scrivener")]
#[command(about = "A batch transcription CLI")]
struct Params {
    /// Audio file or directory to transcribe.
    pub input: Option<PathBuf>,

    /// Read input paths from a list file (one per line) instead.
    #[arg(long = "list", conflicts_with = "input")]
    pub list: Option<PathBuf>,

    #[arg(short = 'm', long = "model")]
    pub model_path: String,

    /// Language to transcribe in.
    #[arg(short = 'l', long = "language", value_enum, default_value_t = Language::En)]
    pub language: Language,

    /// Directory transcript artifacts are written under.
    #[arg(short = 'o', long = "output-dir", default_value = "transcripts")]
    pub output_dir: PathBuf,

    #[arg(
        long = "output-type",
        value_enum,
        default_value_t = OutputType::Text
    )]
    pub output_type: OutputType,
}

fn get_params() -> Result<Params> {
    Ok(Params::parse())
}
