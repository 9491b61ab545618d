//! File-based chorus processing command.

use crate::commands::common::{linear_to_db, peak, rms};
use crate::wav::{read_wav, write_wav};
use anyhow::Context;
use chorus_config::{find_preset, save_state, validate_param};
use chorus_core::Interpolation;
use chorus_effect::{AudioBlock, BlockProcessor, ChorusParam, EngineConfig, ParameterSet};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Process a WAV file through the chorus.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Starting preset (factory name or TOML path)
    #[arg(short, long, value_name = "NAME|PATH")]
    preset: Option<String>,

    /// LFO rate in Hz (1-99)
    #[arg(long)]
    rate: Option<i32>,

    /// Modulation depth in percent (0-100)
    #[arg(long)]
    depth: Option<i32>,

    /// Center delay in ms (1-99)
    #[arg(long)]
    center_delay: Option<i32>,

    /// Feedback in percent (0-95)
    #[arg(long)]
    feedback: Option<i32>,

    /// Wet/dry mix in percent (0-100)
    #[arg(long)]
    mix: Option<i32>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
    bit_depth: u16,

    /// Delay-line interpolation (none, linear, cubic)
    #[arg(long, default_value = "linear", value_parser = parse_interpolation)]
    interpolation: Interpolation,

    /// Also write the parameter state blob to this path
    #[arg(long, value_name = "PATH")]
    save_state: Option<PathBuf>,
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    match s {
        "16" => Ok(16),
        "24" => Ok(24),
        "32" => Ok(32),
        _ => Err(format!("invalid bit depth '{s}' (expected 16, 24, or 32)")),
    }
}

fn parse_interpolation(s: &str) -> Result<Interpolation, String> {
    Interpolation::from_name(&s.to_ascii_lowercase())
        .ok_or_else(|| format!("invalid interpolation '{s}' (expected none, linear, or cubic)"))
}

impl ProcessArgs {
    fn overrides(&self) -> [(ChorusParam, Option<i32>); 5] {
        [
            (ChorusParam::Rate, self.rate),
            (ChorusParam::Depth, self.depth),
            (ChorusParam::CenterDelay, self.center_delay),
            (ChorusParam::Feedback, self.feedback),
            (ChorusParam::Mix, self.mix),
        ]
    }

    /// Preset values (or defaults) with command-line overrides applied.
    fn parameter_set(&self) -> anyhow::Result<ParameterSet> {
        let mut params = match &self.preset {
            Some(name) => {
                let preset = find_preset(name)?;
                println!("Loading preset: {}", preset.name);
                preset.parameter_set()?
            }
            None => ParameterSet::default(),
        };

        for (param, value) in self.overrides() {
            if let Some(value) = value {
                params.set(param, validate_param(param, value)?);
            }
        }
        Ok(params)
    }
}

/// Run the process command.
pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        anyhow::bail!("--block-size must be at least 1");
    }
    let params = args.parameter_set()?;

    println!("Reading {}...", args.input.display());
    let mut audio = read_wav(&args.input)?;
    let num_frames = audio.num_frames();
    let num_channels = audio.channels.len();

    println!(
        "  {} channel(s), {} frames, {} Hz, {:.2}s",
        num_channels,
        num_frames,
        audio.sample_rate,
        num_frames as f32 / audio.sample_rate as f32
    );

    let input_rms = rms(audio.samples());
    let input_peak = peak(audio.samples());

    let mut processor = BlockProcessor::new();
    processor.engine_mut().set_interpolation(args.interpolation);
    processor
        .prepare(EngineConfig::new(
            audio.sample_rate as f32,
            args.block_size,
            num_channels,
        ))
        .context("failed to prepare the chorus engine")?;

    tracing::info!(
        rate = params.rate,
        depth = params.depth,
        center_delay = params.center_delay,
        feedback = params.feedback,
        mix = params.mix,
        interpolation = args.interpolation.name(),
        "processing"
    );

    let pb = ProgressBar::new(num_frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut start = 0;
    while start < num_frames {
        let end = (start + args.block_size).min(num_frames);
        let mut slices: Vec<&mut [f32]> = audio
            .channels
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();
        let mut block = AudioBlock::new(&mut slices)?;
        processor.process_block(&params, &mut block)?;
        pb.set_position(end as u64);
        start = end;
    }

    pb.finish_with_message("done");

    let output_rms = rms(audio.samples());
    let output_peak = peak(audio.samples());

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_rms),
        linear_to_db(output_peak)
    );

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &audio, args.bit_depth)?;

    if let Some(path) = &args.save_state {
        let blob = save_state(&params)?;
        std::fs::write(path, blob)
            .with_context(|| format!("failed to write state to {}", path.display()))?;
        println!("Saved state to {}", path.display());
    }

    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ProcessArgs,
    }

    fn parse(extra: &[&str]) -> ProcessArgs {
        let mut argv = vec!["chorus", "in.wav", "out.wav"];
        argv.extend_from_slice(extra);
        Harness::parse_from(argv).args
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert_eq!(args.block_size, 512);
        assert_eq!(args.bit_depth, 32);
        assert_eq!(args.interpolation, Interpolation::Linear);
        assert_eq!(args.parameter_set().unwrap(), ParameterSet::default());
    }

    #[test]
    fn overrides_apply_over_preset() {
        let args = parse(&["--preset", "lush", "--mix", "90", "--center-delay", "7"]);
        let params = args.parameter_set().unwrap();
        assert_eq!(params.mix, 90);
        assert_eq!(params.center_delay, 7);
        assert_eq!(params.depth, 70);
    }

    #[test]
    fn unknown_preset_is_config_error() {
        let args = parse(&["--preset", "warble"]);
        let err = args.parameter_set().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<chorus_config::ConfigError>(),
            Some(chorus_config::ConfigError::PresetNotFound(name)) if name == "warble"
        ));
    }

    #[test]
    fn out_of_range_override_errors() {
        let args = parse(&["--feedback", "99"]);
        assert!(args.parameter_set().is_err());
    }

    #[test]
    fn rejects_bad_bit_depth_and_interpolation() {
        let argv = ["chorus", "in.wav", "out.wav", "--bit-depth", "8"];
        assert!(Harness::try_parse_from(argv).is_err());
        let argv = ["chorus", "in.wav", "out.wav", "--interpolation", "sinc"];
        assert!(Harness::try_parse_from(argv).is_err());
    }

    #[test]
    fn interpolation_names() {
        assert_eq!(parse_interpolation("Cubic"), Ok(Interpolation::Cubic));
        assert_eq!(parse_interpolation("none"), Ok(Interpolation::None));
    }
}
