//! Startup configuration
//!
//! Fixed for the lifetime of a simulation core. Read from camelCase JSON:
//!
//! ```json
//! { "width": 1024, "height": 1024, "emptyMatter": 0,
//!   "workgroupX": 16, "workgroupY": 16, "brushSeed": 1 }
//! ```
//!
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};
use crate::domain::matter::Matter;
use crate::spatial::grid::checked_size;

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
pub const DEFAULT_WORKGROUP: u32 = 16;
pub const DEFAULT_BRUSH_SEED: u32 = 0x5eed_cafe;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Packed value of an empty cell; its kind byte must be the empty kind
    pub empty_matter: u32,
    /// Cells per worker group along x; must divide `width`
    pub workgroup_x: u32,
    /// Rows per worker group; must divide `height`. Also the row band size
    /// each parallel task processes.
    pub workgroup_y: u32,
    /// Seed of the per-cell brush color jitter
    pub brush_seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            empty_matter: Matter::EMPTY.0,
            workgroup_x: DEFAULT_WORKGROUP,
            workgroup_y: DEFAULT_WORKGROUP,
            brush_seed: DEFAULT_BRUSH_SEED,
        }
    }
}

impl SimConfig {
    /// Defaults for a `width x height` canvas, worker groups shrunk until they divide it
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            workgroup_x: fit_workgroup(width, DEFAULT_WORKGROUP),
            workgroup_y: fit_workgroup(height, DEFAULT_WORKGROUP),
            ..Self::default()
        }
    }

    /// Parse and validate
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn empty(&self) -> Matter {
        Matter(self.empty_matter)
    }

    pub fn validate(&self) -> EngineResult<()> {
        checked_size(self.width, self.height)?;

        let (gx, gy) = (self.workgroup_x, self.workgroup_y);
        if gx == 0 || gy == 0 || self.width % gx != 0 || self.height % gy != 0 {
            return Err(EngineError::WorkgroupMismatch {
                width: self.width,
                height: self.height,
                group_x: gx,
                group_y: gy,
            });
        }

        if !self.empty().is_empty() {
            return Err(EngineError::EmptyMatterNotEmpty(self.empty_matter));
        }
        Ok(())
    }
}

/// Largest power of two <= `preferred` that divides `extent` (1 at worst)
pub fn fit_workgroup(extent: u32, preferred: u32) -> u32 {
    let mut group = preferred.max(1).next_power_of_two();
    if group > preferred.max(1) {
        group >>= 1;
    }
    while group > 1 && extent % group != 0 {
        group >>= 1;
    }
    group.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (1024, 1024));
        assert_eq!((config.workgroup_x, config.workgroup_y), (16, 16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_uses_camel_case_and_fills_defaults() {
        let json = r#"{"width": 64, "height": 32, "workgroupY": 8}"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.workgroup_x, 16);
        assert_eq!(config.workgroup_y, 8);
        assert_eq!(config.empty_matter, 0);
    }

    #[test]
    fn non_dividing_workgroup_is_rejected() {
        let err = SimConfig::from_json(r#"{"width": 100, "height": 64}"#).unwrap_err();
        assert!(matches!(err, EngineError::WorkgroupMismatch { width: 100, .. }));
    }

    #[test]
    fn zero_workgroup_is_rejected() {
        let config = SimConfig { workgroup_x: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_value_must_have_empty_kind() {
        let config = SimConfig { empty_matter: 0x0000_0101, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(EngineError::EmptyMatterNotEmpty(0x101))));

        // Color bits are allowed on the empty value
        let config = SimConfig { empty_matter: 0x1122_3300, ..SimConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(SimConfig::from_json("{width:"), Err(EngineError::ConfigParse(_))));
        assert!(matches!(
            SimConfig::from_json(r#"{"canvasWidth": 10}"#),
            Err(EngineError::ConfigParse(_))
        ));
    }

    #[test]
    fn fit_workgroup_picks_a_divisor() {
        assert_eq!(fit_workgroup(1024, 16), 16);
        assert_eq!(fit_workgroup(100, 16), 4);
        assert_eq!(fit_workgroup(7, 16), 1);
        assert_eq!(fit_workgroup(24, 12), 8);
    }

    #[test]
    fn for_canvas_is_always_valid() {
        for (w, h) in [(3, 3), (100, 60), (1024, 768), (1, 1)] {
            assert!(SimConfig::for_canvas(w, h).validate().is_ok(), "{w}x{h}");
        }
    }

    #[test]
    fn json_round_trip() {
        let config = SimConfig::for_canvas(48, 40);
        let back = SimConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, back);
    }
}
