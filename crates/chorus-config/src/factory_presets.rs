//! Factory presets bundled with the chorus.
//!
//! These are embedded at compile time and always available without
//! external files.

use crate::ChorusPreset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "subtle",
    "lush",
    "vibrato",
    "resonant",
    "slapback",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("subtle", SUBTLE_PRESET),
    ("lush", LUSH_PRESET),
    ("vibrato", VIBRATO_PRESET),
    ("resonant", RESONANT_PRESET),
    ("slapback", SLAPBACK_PRESET),
];

/// Initialization preset - parameter defaults, fully dry.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Parameter defaults - fully dry"

[params]
rate = 50
depth = 0
center_delay = 50
feedback = 0
mix = 0
"#;

/// Subtle thickening for clean guitar or vocals.
const SUBTLE_PRESET: &str = r#"
name = "Subtle"
description = "Gentle thickening - slow and shallow"

[params]
rate = 1
depth = 20
center_delay = 12
feedback = 0
mix = 30
"#;

/// Classic wide ensemble chorus.
const LUSH_PRESET: &str = r#"
name = "Lush"
description = "Wide, deep ensemble chorus"

[params]
rate = 2
depth = 70
center_delay = 25
feedback = 20
mix = 50
"#;

/// Fully wet pitch wobble.
const VIBRATO_PRESET: &str = r#"
name = "Vibrato"
description = "Fully wet pitch modulation"

[params]
rate = 6
depth = 40
center_delay = 5
feedback = 0
mix = 100
"#;

/// Short, heavily fed back delay for a metallic flanger-like tone.
const RESONANT_PRESET: &str = r#"
name = "Resonant"
description = "Metallic comb resonance from high feedback"

[params]
rate = 1
depth = 30
center_delay = 3
feedback = 85
mix = 50
"#;

/// Unmodulated single echo.
const SLAPBACK_PRESET: &str = r#"
name = "Slapback"
description = "Single unmodulated echo at the longest delay"

[params]
rate = 1
depth = 0
center_delay = 99
feedback = 0
mix = 40
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use chorus_config::factory_presets;
///
/// let presets = factory_presets();
/// assert_eq!(presets.len(), 6);
/// ```
pub fn factory_presets() -> Vec<ChorusPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| ChorusPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by name.
///
/// The match is case-insensitive against both the short name and the
/// preset's display name.
///
/// # Example
///
/// ```rust
/// use chorus_config::get_factory_preset;
///
/// let lush = get_factory_preset("Lush").unwrap();
/// assert_eq!(lush.params.depth, 70);
/// assert!(get_factory_preset("nonexistent").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<ChorusPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(short, toml)| ChorusPreset::from_toml(toml).ok().map(|p| (*short, p)))
        .find(|(short, preset)| {
            short.eq_ignore_ascii_case(name) || preset.name.eq_ignore_ascii_case(name)
        })
        .map(|(_, preset)| preset)
}

/// Short names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Returns `true` if `name` matches a factory preset (case-insensitive).
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
