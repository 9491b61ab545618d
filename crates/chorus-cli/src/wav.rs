//! WAV file reading and writing, kept planar.

use anyhow::{Context, Result, bail};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info(path: &Path) -> Result<WavInfo> {
    let reader =
        WavReader::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.duration());
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Planar audio: one `Vec` per channel, all the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarAudio {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Per-channel samples.
    pub channels: Vec<Vec<f32>>,
}

impl PlanarAudio {
    /// Number of frames.
    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Iterate over every sample of every channel.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.channels.iter().flatten().copied()
    }
}

/// Read a WAV file of any channel count into planar `f32` buffers.
pub fn read_wav(path: &Path) -> Result<PlanarAudio> {
    let reader =
        WavReader::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels);
    if channels == 0 {
        bail!("{} has no channels", path.display());
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channels;
    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (channel, &sample) in planar.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok(PlanarAudio {
        sample_rate: spec.sample_rate,
        channels: planar,
    })
}

/// Write planar audio. 32-bit output is float, 16 and 24 are integer PCM.
pub fn write_wav(path: &Path, audio: &PlanarAudio, bits_per_sample: u16) -> Result<()> {
    if !matches!(bits_per_sample, 16 | 24 | 32) {
        bail!("unsupported bit depth {bits_per_sample} (expected 16, 24 or 32)");
    }
    let num_channels = u16::try_from(audio.channels.len()).context("too many channels")?;

    let spec = hound::WavSpec {
        channels: num_channels,
        sample_rate: audio.sample_rate,
        bits_per_sample,
        sample_format: if bits_per_sample == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };
    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let max_val = (1i64 << (bits_per_sample - 1)) as f32;
    for frame in 0..audio.num_frames() {
        for channel in &audio.channels {
            let sample = channel[frame];
            if bits_per_sample == 32 {
                writer.write_sample(sample)?;
            } else {
                let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(int_sample)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn stereo() -> PlanarAudio {
        PlanarAudio {
            sample_rate: 48000,
            channels: vec![
                (0..500).map(|i| (i as f32 / 50.0).sin() * 0.8).collect(),
                (0..500).map(|i| (i as f32 / 70.0).cos() * 0.4).collect(),
            ],
        }
    }

    #[test]
    fn float_round_trip_keeps_channels() {
        let audio = stereo();
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &audio, 32).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded, audio);
    }

    #[test]
    fn pcm16_round_trip() {
        let audio = stereo();
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &audio, 16).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.channels.len(), 2);
        assert_eq!(loaded.num_frames(), 500);
        for (a, b) in audio.samples().zip(loaded.samples()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn pcm24_clamps_overs() {
        let audio = PlanarAudio {
            sample_rate: 44100,
            channels: vec![vec![1.5, -1.5, 0.25]],
        };
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &audio, 24).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        let s = &loaded.channels[0];
        assert!(s[0] < 1.0 && s[0] > 0.999);
        assert_eq!(s[1], -1.0);
        assert!((s[2] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn info_reports_frames() {
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &stereo(), 16).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.num_frames, 500);
        assert_eq!(info.format, WavFormat::Pcm);
        assert_eq!(info.bits_per_sample, 16);
    }

    #[test]
    fn rejects_odd_bit_depth() {
        let file = NamedTempFile::new().unwrap();
        assert!(write_wav(file.path(), &stereo(), 8).is_err());
    }
}
