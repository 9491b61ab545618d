//! Integration tests for chorus-config.
//!
//! These tests exercise presets and state blobs end to end, including
//! driving the effect with the decoded parameters.

use chorus_config::{
    ChorusPreset, ConfigError, ValidationError, factory_presets, find_preset, get_factory_preset,
    load_state, restore_into, save_state, save_store_state,
};
use chorus_effect::{AudioBlock, BlockProcessor, ChorusParam, EngineConfig, ParameterStore};
use tempfile::TempDir;

fn run_preset(preset: &ChorusPreset) -> Vec<f32> {
    let params = preset
        .parameter_set()
        .unwrap_or_else(|e| panic!("preset '{}' invalid: {e}", preset.name));

    let mut processor = BlockProcessor::new();
    processor
        .prepare(EngineConfig::new(48000.0, 256, 1))
        .unwrap();

    let mut out = Vec::with_capacity(256 * 40);
    for block in 0..40 {
        let mut mono: Vec<f32> = (0..256)
            .map(|i| ((block * 256 + i) as f32 * 0.02).sin() * 0.5)
            .collect();
        let mut channels = [&mut mono[..]];
        processor
            .process_block(&params, &mut AudioBlock::new(&mut channels).unwrap())
            .unwrap();
        out.extend_from_slice(&mono);
    }
    out
}

#[test]
fn factory_presets_drive_processor() {
    for preset in factory_presets() {
        let out = run_preset(&preset);
        assert!(
            out.iter().all(|s| s.is_finite() && s.abs() <= 3.0),
            "preset '{}' produced out-of-bounds output",
            preset.name
        );
    }
}

#[test]
fn init_preset_is_bypass() {
    let preset = get_factory_preset("init").unwrap();
    let out = run_preset(&preset);
    let expected: Vec<f32> = (0..256 * 40)
        .map(|i| (i as f32 * 0.02).sin() * 0.5)
        .collect();
    assert_eq!(out, expected);
}

#[test]
fn preset_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("mine.toml");

    let preset = get_factory_preset("lush")
        .unwrap()
        .with_description("edited copy");
    preset.save(&path).unwrap();
    assert!(path.exists());

    let loaded = ChorusPreset::load(&path).unwrap();
    assert_eq!(loaded, preset);
}

#[test]
fn hand_written_preset_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hand.toml");
    std::fs::write(
        &path,
        "name = \"Hand\"\n\n[params]\n\"center delay\" = 8\nmix = 60\n",
    )
    .unwrap();

    let params = ChorusPreset::load(&path).unwrap().parameter_set().unwrap();
    assert_eq!(params.center_delay, 8);
    assert_eq!(params.mix, 60);
    assert_eq!(params.rate, 50);
}

#[test]
fn invalid_preset_file_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "name = \"Broken\"\n[params]\nwobble = 3\n").unwrap();

    assert!(matches!(
        ChorusPreset::load(&path),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn state_blob_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let store = ParameterStore::new();
    store.set(ChorusParam::Depth, 66);
    store.set(ChorusParam::Feedback, 40);
    std::fs::write(&path, save_store_state(&store).unwrap()).unwrap();

    let restored = ParameterStore::new();
    restore_into(&restored, &std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(restored.snapshot(), store.snapshot());
}

#[test]
fn preset_to_state_and_back() {
    let params = get_factory_preset("resonant")
        .unwrap()
        .parameter_set()
        .unwrap();
    let blob = save_state(&params).unwrap();
    assert_eq!(load_state(&blob).unwrap(), params);
}

#[test]
fn find_preset_by_path_reports_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hot.toml");
    std::fs::write(&path, "name = \"Hot\"\n[params]\nmix = 150\nrate = 0\n").unwrap();

    let preset = find_preset(path.to_str().unwrap()).unwrap();
    assert_eq!(preset.name, "Hot");
    match preset.parameter_set() {
        Err(ConfigError::Validation(ValidationError::Multiple(errors))) => {
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn find_preset_missing_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        find_preset(path.to_str().unwrap()),
        Err(ConfigError::PresetNotFound(_))
    ));
}
