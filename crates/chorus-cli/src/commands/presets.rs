//! List, show and export factory presets.

use chorus_config::{factory_presets, find_preset};
use chorus_effect::ChorusParam;
use clap::Args;
use std::path::PathBuf;

/// List factory presets, or show or export one.
#[derive(Args)]
pub struct PresetsArgs {
    /// Preset to show (factory name or TOML path)
    pub name: Option<String>,

    /// Write the preset as TOML to this path
    #[arg(long, value_name = "PATH", requires = "name")]
    pub export: Option<PathBuf>,
}

/// Run the presets command.
pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.name {
        None => {
            list_presets();
            Ok(())
        }
        Some(name) => {
            let preset = find_preset(&name)?;
            if let Some(path) = args.export {
                preset.save(&path)?;
                println!("Exported '{}' to {}", preset.name, path.display());
                Ok(())
            } else {
                show_preset(&preset)
            }
        }
    }
}

fn list_presets() {
    println!("Factory Presets:\n");
    for preset in factory_presets() {
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {:12} - {}", preset.name.to_lowercase(), desc);
    }
    println!();
}

fn show_preset(preset: &chorus_config::ChorusPreset) -> anyhow::Result<()> {
    let params = preset.parameter_set()?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
        println!();
    }

    for param in ChorusParam::ALL {
        println!(
            "  {:<14} {}{}",
            param.key(),
            params.get(param),
            param.descriptor().unit.suffix()
        );
    }

    Ok(())
}
