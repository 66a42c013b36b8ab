//! # Layout Files
//!
//! JSON description of what the driver builds: a list of arcade rows that is
//! repeated on every floor.
//!
//! ```json
//! {
//!   "floors": 2,
//!   "floor_height": 4.0,
//!   "rows": [
//!     { "axis": "x", "span": { "min": 0, "max": 1 },
//!       "arcade": { "num_arches": 3, "radius": 1, "height_bottom": 2,
//!                   "height_top": 1, "width_pillar": 1 } }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use arcade_mesh::{make_arch_sequence, Arcade, Axis, BuildError, Interval, SceneSink};
use config::constants::DEFAULT_FLOOR_HEIGHT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One row of arches, repeated on every floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub axis: Axis,
    /// Wall thickness on the horizontal axis the row does not run along.
    pub span: Interval,
    pub arcade: Arcade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default = "default_floor_height")]
    pub floor_height: f64,
    pub rows: Vec<Row>,
}

fn default_floors() -> u32 {
    1
}

fn default_floor_height() -> f64 {
    DEFAULT_FLOOR_HEIGHT
}

impl LayoutFile {
    /// A 10×10 courtyard enclosed by four rows of three arches.
    pub fn courtyard() -> Self {
        let arcade = Arcade::new(3, 1.0, 2.0, 1.0, 1.0);
        let row = |axis, min, max| Row {
            axis,
            span: Interval::new(min, max),
            arcade,
        };
        Self {
            floors: default_floors(),
            floor_height: DEFAULT_FLOOR_HEIGHT,
            rows: vec![
                row(Axis::X, 0.0, 1.0),
                row(Axis::X, 9.0, 10.0),
                row(Axis::Y, 0.0, 1.0),
                row(Axis::Y, 9.0, 10.0),
            ],
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Reads and parses a layout file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid layout {}", path.display()))
    }

    /// Overrides the arch resolution of every row.
    pub fn set_arch_steps(&mut self, steps: u32) {
        for row in &mut self.rows {
            row.arcade.arch_steps = steps;
        }
    }

    /// Emits every row on every floor; floor `n` stands at `n · floor_height`.
    pub fn build<S: SceneSink + ?Sized>(&self, sink: &mut S) -> Result<(), BuildError> {
        for floor in 0..self.floors {
            let base = f64::from(floor) * self.floor_height;
            tracing::debug!(floor, base, rows = self.rows.len(), "building floor");
            for row in &self.rows {
                make_arch_sequence(sink, row.axis, &row.arcade, row.span, base, None)?;
            }
        }
        Ok(())
    }
}
