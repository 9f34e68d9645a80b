//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

/// Sample rate of generated recordings.
pub const SAMPLE_RATE: u32 = 8000;

/// Write a 16-bit recording of `frames` frames where each sample encodes its frame index.
pub fn write_wav(path: &Path, channels: u16, frames: u32) {
    let spec = WavSpec {
        channels,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for frame in 0..frames {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let value = (frame % 30_000) as i16;
        for _ in 0..channels {
            writer.write_sample(value).unwrap();
        }
    }
    writer.finalize().unwrap();
}

/// Write a mono 32-bit integer recording of the given samples.
pub fn write_wav_i32(path: &Path, samples: &[i32]) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &sample in samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
}

/// Write a flextext document to `dir/name`.
pub fn write_flextext(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// A single text "ABC" with two phrases, the second without a segnum.
pub const ABC_TWO_PHRASES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<document version="2">
  <interlinear-text guid="t-abc">
    <item type="title" lang="en">A Basic Conversation</item>
    <item type="title-abbreviation" lang="en">ABC</item>
    <paragraphs>
      <paragraph>
        <phrases>
          <phrase guid="p1" begin-time-offset="0" end-time-offset="1000">
            <item type="segnum" lang="en">1</item>
            <words><word><item type="txt" lang="x">hola</item></word></words>
          </phrase>
          <phrase guid="p2" begin-time-offset="1000" end-time-offset="2500">
            <words><word><item type="txt" lang="x">adios</item></word></words>
          </phrase>
        </phrases>
      </paragraph>
    </paragraphs>
  </interlinear-text>
</document>
"#;

/// Two texts; the second one matches "My Text" only when slugified.
pub const TWO_TEXTS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<document version="2">
  <interlinear-text guid="t-first">
    <item type="title-abbreviation" lang="en">FIRST</item>
    <paragraphs><paragraph><phrases>
      <phrase begin-time-offset="0" end-time-offset="500"><item type="segnum">1</item></phrase>
    </phrases></paragraph></paragraphs>
  </interlinear-text>
  <interlinear-text guid="t-second">
    <item type="title-abbreviation" lang="en">My Text</item>
    <paragraphs><paragraph><phrases>
      <phrase begin-time-offset="0" end-time-offset="500"><item type="segnum">1</item></phrase>
      <phrase begin-time-offset="500" end-time-offset="1000"><item type="segnum">2</item></phrase>
    </phrases></paragraph></paragraphs>
  </interlinear-text>
</document>
"#;

/// Text "BAD" whose second phrase lacks a begin offset.
pub const MISSING_BEGIN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<document version="2">
  <interlinear-text>
    <item type="title-abbreviation" lang="en">BAD</item>
    <paragraphs><paragraph><phrases>
      <phrase begin-time-offset="0" end-time-offset="500"><item type="segnum">1</item></phrase>
      <phrase end-time-offset="1000"><item type="segnum">2</item></phrase>
      <phrase begin-time-offset="1000" end-time-offset="1500"><item type="segnum">3</item></phrase>
    </phrases></paragraph></paragraphs>
  </interlinear-text>
</document>
"#;

/// Text "END" whose second phrase lacks an end offset.
pub const MISSING_END: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<document version="2">
  <interlinear-text>
    <item type="title-abbreviation" lang="en">END</item>
    <paragraphs><paragraph><phrases>
      <phrase begin-time-offset="0" end-time-offset="500"><item type="segnum">1</item></phrase>
      <phrase begin-time-offset="500"><item type="segnum">2</item></phrase>
    </phrases></paragraph></paragraphs>
  </interlinear-text>
</document>
"#;

/// A single text without a title abbreviation.
pub const NO_ABBREVIATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<document version="2">
  <interlinear-text>
    <item type="title" lang="en">Untitled</item>
    <paragraphs><paragraph><phrases>
      <phrase begin-time-offset="0" end-time-offset="500"><item type="segnum">1</item></phrase>
    </phrases></paragraph></paragraphs>
  </interlinear-text>
</document>
"#;

/// Sorted file names in a directory.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
