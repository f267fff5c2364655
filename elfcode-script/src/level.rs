//! # Level configuration
//!
//! Describes a room for the simulator: lever values, the record set the
//! host feeds the munch callback, room bounds and the starting position.
//!
//! ```json
//! {
//!   "levers": [1, 2, 3, 4, 5, 6],
//!   "munch_records": [{"wrapper": "foil"}, {"stick": "lollipop"}],
//!   "bounds": {"width": 12, "height": 13},
//!   "start": {"x": 6, "y": 0},
//!   "expected_key": "stick"
//! }
//! ```

use crate::error::{self, Result};
use crate::levers::LEVER_COUNT;
use crate::lookup::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid cell; `y` grows upward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Walkable area: `0 <= x < width`, `0 <= y < height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Value served for each lever index
    pub levers: [i64; LEVER_COUNT],

    /// Records the host passes to the munch callback
    #[serde(default)]
    pub munch_records: Vec<Record>,

    /// Room size; unbounded when absent
    #[serde(default)]
    pub bounds: Option<Bounds>,

    #[serde(default)]
    pub start: Position,

    /// Key the munch must answer with for the level to count as solved
    #[serde(default)]
    pub expected_key: Option<String>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        let mut wrapper = Record::new();
        wrapper.insert("wrapper".to_string(), "foil".to_string());
        let mut stick = Record::new();
        stick.insert("stick".to_string(), "lollipop".to_string());

        Self {
            levers: [1, 2, 3, 4, 5, 6],
            munch_records: vec![wrapper, stick],
            bounds: Some(Bounds { width: 12, height: 13 }),
            start: Position::new(6, 0),
            expected_key: Some("stick".to_string()),
        }
    }
}

impl LevelConfig {
    /// Parse and validate a level from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let level: LevelConfig = serde_json::from_str(text)
            .map_err(|e| error::Error::from(e).with_operation("level::from_json"))?;
        level.validate()?;
        Ok(level)
    }

    /// Read, parse and validate a level file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            error::Error::from(e)
                .with_operation("level::from_file")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_json(&text).map_err(|e| e.with_context("path", path.display().to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(bounds) = self.bounds {
            if bounds.width <= 0 || bounds.height <= 0 {
                return Err(error::config_invalid(format!(
                    "bounds must be positive, got {}x{}",
                    bounds.width, bounds.height
                ))
                .with_operation("level::validate"));
            }
            if !bounds.contains(self.start) {
                return Err(error::config_invalid(format!(
                    "start ({}, {}) lies outside {}x{} room",
                    self.start.x, self.start.y, bounds.width, bounds.height
                ))
                .with_operation("level::validate"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let level = LevelConfig::default();
        assert!(level.validate().is_ok());
        assert_eq!(level.munch_records.len(), 2);
    }

    #[test]
    fn test_from_json_minimal() {
        let level = LevelConfig::from_json(r#"{"levers": [1, 1, 1, 1, 1, 1]}"#).unwrap();
        assert_eq!(level.levers, [1; LEVER_COUNT]);
        assert!(level.munch_records.is_empty());
        assert_eq!(level.bounds, None);
        assert_eq!(level.start, Position::default());
        assert_eq!(level.expected_key, None);
    }

    #[test]
    fn test_from_json_wrong_lever_count() {
        let err = LevelConfig::from_json(r#"{"levers": [1, 2, 3]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SerializationFailed);
        assert_eq!(err.operation(), "level::from_json");
    }

    #[test]
    fn test_start_outside_bounds() {
        let text = r#"{
            "levers": [0, 0, 0, 0, 0, 0],
            "bounds": {"width": 4, "height": 4},
            "start": {"x": 4, "y": 0}
        }"#;
        let err = LevelConfig::from_json(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_non_positive_bounds() {
        let mut level = LevelConfig::default();
        level.bounds = Some(Bounds { width: 0, height: 3 });
        assert_eq!(level.validate().unwrap_err().kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"levers": [2, 2, 2, 2, 2, 2], "munch_records": [{{"b": "x", "a": "lollipop"}}]}}"#
        )
        .unwrap();

        let level = LevelConfig::from_file(file.path()).unwrap();
        assert_eq!(level.levers, [2; LEVER_COUNT]);
        let keys: Vec<&str> = level.munch_records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LevelConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "level::from_file");
    }
}
