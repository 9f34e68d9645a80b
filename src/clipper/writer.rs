//! Clip file writing.
//!
//! Writes millisecond ranges of a decoded recording to individual files,
//! leaving existing files untouched.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter as HoundWriter};
use tracing::debug;

use crate::Error;
use crate::audio::{AudioBuffer, SampleSlice};
use crate::config::ExportFormat;

use super::identifier::sanitize_identifier;

/// What happened to a single clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The clip was written to this path.
    Written(PathBuf),
    /// A file already existed at this path and was left alone.
    Skipped(PathBuf),
}

impl ExportOutcome {
    /// Path of the clip, whether written or skipped.
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Build the target path `<out_dir>/<identifier>.<extension>`.
pub fn clip_path(out_dir: &Path, identifier: &str, format: ExportFormat) -> PathBuf {
    out_dir.join(format!(
        "{}.{}",
        sanitize_identifier(identifier),
        format.extension()
    ))
}

/// Write `[start_ms, end_ms)` of `audio` to `target`, unless `target` exists.
///
/// The existence check and the write are not atomic; concurrent runs over
/// the same output directory may both write a clip.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_slice(
    audio: &AudioBuffer,
    target: &Path,
    start_ms: u64,
    end_ms: u64,
    format: ExportFormat,
) -> Result<ExportOutcome, Error> {
    if target.is_file() {
        debug!("File {} exists", target.display());
        return Ok(ExportOutcome::Skipped(target.to_path_buf()));
    }

    let samples = audio.slice_ms(start_ms, end_ms);
    match format {
        ExportFormat::Wav => write_wav_file(target, samples, audio.channels, audio.sample_rate)?,
    }

    Ok(ExportOutcome::Written(target.to_path_buf()))
}

/// Write interleaved samples to a WAV file in the source's encoding.
fn write_wav_file(
    path: &Path,
    samples: SampleSlice<'_>,
    channels: u16,
    sample_rate: u32,
) -> Result<(), Error> {
    let wav_err = |e: hound::Error| Error::WavWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let (bits_per_sample, sample_format) = match samples {
        SampleSlice::Int { bits, .. } => (bits, SampleFormat::Int),
        SampleSlice::Float(_) => (32, SampleFormat::Float),
    };

    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format,
    };

    let mut writer = HoundWriter::create(path, spec).map_err(wav_err)?;

    match samples {
        SampleSlice::Float(data) => {
            for &sample in data {
                writer.write_sample(sample).map_err(wav_err)?;
            }
        }
        SampleSlice::Int { bits, data } => {
            for &sample in data {
                write_int_sample(&mut writer, sample, bits).map_err(wav_err)?;
            }
        }
    }

    writer.finalize().map_err(wav_err)?;

    Ok(())
}

/// Write one native-range integer sample at the given container depth.
#[allow(clippy::cast_possible_truncation)]
fn write_int_sample<W: std::io::Write + std::io::Seek>(
    writer: &mut HoundWriter<W>,
    sample: i32,
    bits: u16,
) -> hound::Result<()> {
    match bits {
        8 => writer.write_sample(sample as i8),
        16 => writer.write_sample(sample as i16),
        _ => writer.write_sample(sample),
    }
}
