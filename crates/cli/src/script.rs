//! Scripted replay of transforms and queries against one shape.
//!
//! A script is a JSON array of steps tagged by `op`, for example
//! `[{"op": "scale_to", "center": [50, 40], "size": [190, null]},
//!   {"op": "inside", "point": [15, 25]}]`.

use anyhow::{ensure, Context, Result};
use enclosed::{BBox2, EnclosedShape, TargetSize, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    ScaleTo {
        center: [f64; 2],
        size: [Option<f64>; 2],
    },
    ScaleBy {
        center: [f64; 2],
        multiplier: [f64; 2],
    },
    Rotate {
        center: [f64; 2],
        angle: f64,
    },
    MoveTo {
        center: [f64; 2],
        to: [f64; 2],
    },
    Reset,
    Inside {
        point: [f64; 2],
    },
    CloserThan {
        point: [f64; 2],
        distance: f64,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::ScaleTo { .. } => "scale_to",
            Step::ScaleBy { .. } => "scale_by",
            Step::Rotate { .. } => "rotate",
            Step::MoveTo { .. } => "move_to",
            Step::Reset => "reset",
            Step::Inside { .. } => "inside",
            Step::CloserThan { .. } => "closer_than",
        }
    }
}

/// Bounding box as `{"x": [min, max], "y": [min, max]}`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct BoxRecord {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl From<BBox2> for BoxRecord {
    fn from(b: BBox2) -> Self {
        Self {
            x: [b.x.min, b.x.max],
            y: [b.y.min, b.y.max],
        }
    }
}

/// Result of one step; `answer` is set for queries only.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StepOutcome {
    pub index: usize,
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<bool>,
    pub bounding_box: BoxRecord,
}

/// Final state after a replay.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub path: Vec<[f64; 2]>,
    pub bounding_box: BoxRecord,
    pub steps: Vec<StepOutcome>,
}

impl Report {
    pub fn snapshot(shape: &EnclosedShape, steps: Vec<StepOutcome>) -> Self {
        Self {
            path: shape.path().iter().map(|p| [p.x, p.y]).collect(),
            bounding_box: shape.bounding_box().into(),
            steps,
        }
    }
}

pub fn parse_script(json: &[u8]) -> Result<Vec<Step>> {
    serde_json::from_slice(json).context("script must be a JSON array of {\"op\": ...} steps")
}

#[inline]
fn v(a: [f64; 2]) -> Vec2<f64> {
    Vec2::new(a[0], a[1])
}

/// Apply `steps` in order; stops at the first failing step.
pub fn replay(shape: &mut EnclosedShape, steps: &[Step]) -> Result<Vec<StepOutcome>> {
    let mut out = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let answer = match *step {
            Step::ScaleTo { center, size } => {
                shape
                    .scale_to(v(center), TargetSize::new(size[0], size[1]))
                    .with_context(|| format!("step {index} (scale_to)"))?;
                None
            }
            Step::ScaleBy { center, multiplier } => {
                shape
                    .scale_by(v(center), v(multiplier))
                    .with_context(|| format!("step {index} (scale_by)"))?;
                None
            }
            Step::Rotate { center, angle } => {
                shape.rotate(v(center), angle);
                None
            }
            Step::MoveTo { center, to } => {
                shape.move_to(v(center), v(to));
                None
            }
            Step::Reset => {
                shape.reset();
                None
            }
            Step::Inside { point } => Some(shape.is_inside(v(point))),
            Step::CloserThan { point, distance } => {
                ensure!(
                    distance >= 0.0,
                    "step {index} (closer_than): distance must be non-negative, got {distance}"
                );
                Some(shape.is_closer_than(v(point), distance))
            }
        };
        tracing::debug!(index, op = step.name(), ?answer, "step");
        out.push(StepOutcome {
            index,
            op: step.name(),
            answer,
            bounding_box: shape.bounding_box().into(),
        });
    }
    Ok(out)
}
