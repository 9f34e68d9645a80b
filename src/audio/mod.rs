//! Audio loading.

mod decode;

pub use decode::{
    AudioBuffer, SampleEncoding, SampleSlice, Samples, decode_audio_file, load_audio,
};
