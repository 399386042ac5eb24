use serde::Deserialize;
use std::fs;
use urania::layout::{ChartKind, RingConfig, SecondaryRing};

/// Ring presets for every chart kind, after `configs/wheel.toml` overrides
#[derive(Debug, Clone, PartialEq)]
pub struct WheelPresets {
    pub natal: RingConfig,
    pub composite: RingConfig,
    pub synastry: RingConfig,
    pub transit: RingConfig,
}

impl WheelPresets {
    pub fn get(&self, kind: ChartKind) -> &RingConfig {
        match kind {
            ChartKind::Natal => &self.natal,
            ChartKind::Composite => &self.composite,
            ChartKind::Synastry => &self.synastry,
            ChartKind::Transit => &self.transit,
        }
    }
}

impl Default for WheelPresets {
    fn default() -> Self {
        Self {
            natal: RingConfig::natal(),
            composite: RingConfig::composite(),
            synastry: RingConfig::synastry(),
            transit: RingConfig::transit(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RingOverrideToml {
    #[serde(default)]
    center_x: Option<f64>,
    #[serde(default)]
    center_y: Option<f64>,
    #[serde(default)]
    outer_radius: Option<f64>,
    #[serde(default)]
    house_ring_radius: Option<f64>,
    #[serde(default)]
    inner_radius: Option<f64>,
    #[serde(default)]
    glyph_radius: Option<f64>,
    #[serde(default)]
    glyph_size: Option<f64>,
    #[serde(default)]
    glyph_bg_radius: Option<f64>,
    #[serde(default)]
    padding: Option<f64>,
    #[serde(default)]
    max_attempts: Option<u32>,
    #[serde(default)]
    push_increment: Option<f64>,
    #[serde(default)]
    jitter_offsets: Option<Vec<f64>>,
    #[serde(default)]
    secondary_glyph_radius: Option<f64>,
    #[serde(default)]
    secondary_outer_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WheelToml {
    #[serde(default)]
    natal: Option<RingOverrideToml>,
    #[serde(default)]
    composite: Option<RingOverrideToml>,
    #[serde(default)]
    synastry: Option<RingOverrideToml>,
    #[serde(default)]
    transit: Option<RingOverrideToml>,
}

/// Try common relative paths for `configs/wheel.toml`.
pub fn read_wheel_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/wheel.toml", "../../configs/wheel.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load wheel.toml from {:?}", paths);
}

pub fn load_wheel_presets() -> anyhow::Result<WheelPresets> {
    let text = read_wheel_toml_text()?;
    parse_wheel_presets(&text)
}

/// Presets from `configs/wheel.toml`, or the built-in ones if it is missing
/// or invalid.
pub fn load_wheel_presets_or_default() -> WheelPresets {
    match load_wheel_presets() {
        Ok(presets) => presets,
        Err(e) => {
            log::warn!("using built-in wheel presets: {e:#}");
            WheelPresets::default()
        }
    }
}

/// Apply the overrides in `text` on top of the built-in presets.
pub fn parse_wheel_presets(text: &str) -> anyhow::Result<WheelPresets> {
    let root: WheelToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse wheel.toml: {e}"))?;
    let defaults = WheelPresets::default();
    Ok(WheelPresets {
        natal: apply("natal", defaults.natal, root.natal)?,
        composite: apply("composite", defaults.composite, root.composite)?,
        synastry: apply("synastry", defaults.synastry, root.synastry)?,
        transit: apply("transit", defaults.transit, root.transit)?,
    })
}

fn apply(section: &str, mut config: RingConfig, overrides: Option<RingOverrideToml>) -> anyhow::Result<RingConfig> {
    let Some(o) = overrides else {
        return Ok(config);
    };

    if let Some(x) = o.center_x {
        config.center.x = x;
    }
    if let Some(y) = o.center_y {
        config.center.y = y;
    }
    set(&mut config.outer_radius, o.outer_radius);
    set(&mut config.house_ring_radius, o.house_ring_radius);
    set(&mut config.inner_radius, o.inner_radius);
    set(&mut config.glyph_radius, o.glyph_radius);
    set(&mut config.glyph_size, o.glyph_size);
    set(&mut config.glyph_bg_radius, o.glyph_bg_radius);
    set(&mut config.padding, o.padding);
    set(&mut config.push_increment, o.push_increment);
    if let Some(attempts) = o.max_attempts {
        config.max_attempts = attempts;
    }
    if let Some(offsets) = o.jitter_offsets {
        config.jitter_offsets = offsets;
    }

    if o.secondary_glyph_radius.is_some() || o.secondary_outer_radius.is_some() {
        let mut ring = config.secondary.clone().unwrap_or(SecondaryRing {
            glyph_radius: config.outer_radius + config.box_size(),
            outer_radius: config.outer_radius + 2.0 * config.box_size(),
        });
        set(&mut ring.glyph_radius, o.secondary_glyph_radius);
        set(&mut ring.outer_radius, o.secondary_outer_radius);
        config.secondary = Some(ring);
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("[{section}] invalid ring config: {e}"))?;
    log::debug!("applied [{section}] overrides from wheel.toml");
    Ok(config)
}

fn set(field: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *field = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_keeps_builtins() {
        assert_eq!(parse_wheel_presets("").unwrap(), WheelPresets::default());
    }

    #[test]
    fn test_override_applies_to_one_kind() {
        let presets = parse_wheel_presets(
            r#"
            [natal]
            glyph_radius = 200.0
            jitter_offsets = [5.0, -5.0]
            "#,
        )
        .unwrap();
        assert_eq!(presets.natal.glyph_radius, 200.0);
        assert_eq!(presets.natal.jitter_offsets, vec![5.0, -5.0]);
        assert_eq!(presets.composite, RingConfig::composite());
    }

    #[test]
    fn test_secondary_override() {
        let presets = parse_wheel_presets(
            r#"
            [transit]
            secondary_glyph_radius = 310.0
            "#,
        )
        .unwrap();
        let ring = presets.get(ChartKind::Transit).secondary.clone().unwrap();
        assert_eq!(ring.glyph_radius, 310.0);
        assert_eq!(ring.outer_radius, 330.0);
    }

    #[test]
    fn test_rejects_invalid_radii() {
        let err = parse_wheel_presets(
            r#"
            [natal]
            inner_radius = 500.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("[natal]"));

        assert!(parse_wheel_presets("[natal]\nglyph_size = -1.0\n").is_err());
        assert!(parse_wheel_presets("[natal]\nglyph_bg_radius = -5.0\npadding = -40.0\n").is_err());
        assert!(parse_wheel_presets("[natal]\ncenter_x = nan\n").is_err());
        assert!(parse_wheel_presets("[natal]\njitter_offsets = [4.0, inf]\n").is_err());
        assert!(parse_wheel_presets(
            "[synastry]\nsecondary_glyph_radius = 400.0\nsecondary_outer_radius = 300.0\n"
        )
        .is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(parse_wheel_presets("[natal]\nradius = 1.0\n").is_err());
    }
}
