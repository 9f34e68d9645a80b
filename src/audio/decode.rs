//! Audio decoding using symphonia.

use crate::constants::audio::{DEFAULT_BITS_PER_SAMPLE, MS_PER_SECOND, WAV_EXTENSIONS};
use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{
    CODEC_TYPE_NULL, CODEC_TYPE_PCM_F32BE, CODEC_TYPE_PCM_F32LE, CODEC_TYPE_PCM_F64BE,
    CODEC_TYPE_PCM_F64LE, CodecType, Decoder, DecoderOptions,
};
use symphonia::core::conv::ConvertibleSample;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use tracing::{debug, warn};

/// How samples were stored in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEncoding {
    /// Signed integer PCM with the given bit depth.
    Int(u16),
    /// IEEE float PCM.
    Float,
}

/// Interleaved sample data, kept in the source's numeric domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// Integer PCM values at their native bit depth (e.g. `-32768..=32767` for 16 bits).
    Int {
        /// Bit depth of the source container.
        bits: u16,
        /// Interleaved sample values.
        data: Vec<i32>,
    },
    /// Float PCM in range [-1.0, 1.0].
    Float(Vec<f32>),
}

impl Samples {
    /// Total number of interleaved samples.
    pub fn len(&self) -> usize {
        match self {
            Self::Int { data, .. } => data.len(),
            Self::Float(data) => data.len(),
        }
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encoding clips cut from these samples are written in.
    pub const fn encoding(&self) -> SampleEncoding {
        match self {
            Self::Int { bits, .. } => SampleEncoding::Int(*bits),
            Self::Float(_) => SampleEncoding::Float,
        }
    }
}

/// Borrowed range of [`Samples`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleSlice<'a> {
    /// Integer PCM values and their bit depth.
    Int {
        /// Bit depth of the source container.
        bits: u16,
        /// Interleaved sample values.
        data: &'a [i32],
    },
    /// Float PCM.
    Float(&'a [f32]),
}

impl SampleSlice<'_> {
    /// Number of interleaved samples in the slice.
    pub fn len(&self) -> usize {
        match self {
            Self::Int { data, .. } => data.len(),
            Self::Float(data) => data.len(),
        }
    }

    /// Whether the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decoded audio data for one recording.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// Interleaved samples.
    pub samples: Samples,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl AudioBuffer {
    /// Encoding of the source samples.
    pub const fn encoding(&self) -> SampleEncoding {
        self.samples.encoding()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels.max(1))
    }

    /// Duration in milliseconds, rounded down.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames() as u64 * MS_PER_SECOND / u64::from(self.sample_rate)
    }

    /// Frame index at the given offset, clamped to the end of the buffer.
    pub fn frame_at_ms(&self, ms: u64) -> usize {
        let frame = ms.saturating_mul(u64::from(self.sample_rate)) / MS_PER_SECOND;
        usize::try_from(frame).map_or(self.frames(), |f| f.min(self.frames()))
    }

    /// Interleaved samples for `[start_ms, end_ms)`.
    ///
    /// Offsets past the end are clamped; an inverted range yields an empty slice.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> SampleSlice<'_> {
        let channels = usize::from(self.channels.max(1));
        let start = self.frame_at_ms(start_ms);
        let end = self.frame_at_ms(end_ms).max(start);
        let range = start * channels..end * channels;
        match &self.samples {
            Samples::Int { bits, data } => SampleSlice::Int {
                bits: *bits,
                data: &data[range],
            },
            Samples::Float(data) => SampleSlice::Float(&data[range]),
        }
    }
}

/// Load a waveform audio file.
///
/// Only WAV input is supported; other extensions are rejected before the
/// file is opened.
pub fn load_audio(path: &Path) -> Result<AudioBuffer> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !WAV_EXTENSIONS.contains(&extension.as_str()) {
        let format = if extension.is_empty() {
            "extensionless".to_string()
        } else {
            extension
        };
        return Err(Error::UnsupportedAudioFormat { format });
    }

    decode_audio_file(path)
}

/// Decode an audio file, keeping integer PCM as integers.
pub fn decode_audio_file(path: &Path) -> Result<AudioBuffer> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    // Create hint from file extension
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;
    let channels = track
        .codec_params
        .channels
        .map_or(1, symphonia::core::audio::Channels::count);
    let channels = u16::try_from(channels).map_err(|_| Error::AudioDecode {
        path: path.to_path_buf(),
        source: format!("unsupported channel count {channels}").into(),
    })?;
    let codec = track.codec_params.codec;
    let encoding = sample_encoding(codec, track.codec_params.bits_per_sample);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let samples = match encoding {
        SampleEncoding::Float => {
            if [CODEC_TYPE_PCM_F64LE, CODEC_TYPE_PCM_F64BE].contains(&codec) {
                warn!(
                    "{} is 64-bit float; clips are written as 32-bit float",
                    path.display()
                );
            }
            Samples::Float(read_interleaved(
                format.as_mut(),
                decoder.as_mut(),
                track_id,
                path,
            )?)
        }
        SampleEncoding::Int(bits) => {
            // Symphonia scales integer PCM to the full i32 range; shift back
            // to the container's native range.
            let shift = 32 - u32::from(bits);
            let mut data: Vec<i32> =
                read_interleaved(format.as_mut(), decoder.as_mut(), track_id, path)?;
            for sample in &mut data {
                *sample >>= shift;
            }
            Samples::Int { bits, data }
        }
    };

    let audio = AudioBuffer {
        samples,
        sample_rate,
        channels,
    };

    debug!(
        "Decoded {}: {} Hz, {} channel(s), {:?}, {} ms",
        path.display(),
        sample_rate,
        channels,
        encoding,
        audio.duration_ms()
    );

    Ok(audio)
}

/// Decode every packet of `track_id` into interleaved samples of type `S`.
fn read_interleaved<S: Sample + ConvertibleSample>(
    format: &mut dyn FormatReader,
    decoder: &mut dyn Decoder,
    track_id: u32,
    path: &Path,
) -> Result<Vec<S>> {
    let mut samples = Vec::new();
    let mut sample_buf: Option<SampleBuffer<S>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let buf = sample_buf.get_or_insert_with(|| {
            SampleBuffer::new(decoded.capacity() as u64, *decoded.spec())
        });
        if buf.capacity() < decoded.capacity() * decoded.spec().channels.count() {
            *buf = SampleBuffer::new(decoded.capacity() as u64, *decoded.spec());
        }
        buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buf.samples());
    }

    Ok(samples)
}

/// Map codec parameters to the encoding clips are written back in.
///
/// Integer depths round up to the next whole byte, matching the container.
fn sample_encoding(codec: CodecType, bits_per_sample: Option<u32>) -> SampleEncoding {
    if [
        CODEC_TYPE_PCM_F32LE,
        CODEC_TYPE_PCM_F32BE,
        CODEC_TYPE_PCM_F64LE,
        CODEC_TYPE_PCM_F64BE,
    ]
    .contains(&codec)
    {
        return SampleEncoding::Float;
    }

    match bits_per_sample {
        Some(1..=8) => SampleEncoding::Int(8),
        Some(9..=16) => SampleEncoding::Int(16),
        Some(17..=24) => SampleEncoding::Int(24),
        Some(25..=32) => SampleEncoding::Int(32),
        _ => SampleEncoding::Int(DEFAULT_BITS_PER_SAMPLE),
    }
}
