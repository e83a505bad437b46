use std::collections::BTreeSet;

use crate::foundation::core::{Fps, FrameIndex, Point, Rect, Rgba8Premul, Vec2};
use crate::foundation::error::{DenseGridError, DenseGridResult};
use crate::grid::{CellCoord, CellGroup, Dimensions, Mode};
use crate::palette::{ColorDef, ColorScheme};

/// Default run time of a play step, in seconds.
pub(crate) const DEFAULT_RUN_TIME_SECS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector, `y` pointing up.
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Where a renderer should put an object before any step runs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    Center,
    NextTo { target: String, direction: Direction },
    ToEdge { direction: Direction },
}

/// A phrase rendered in its own color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    pub phrase: String,
    pub color: ColorDef,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextObject {
    pub id: String,
    pub content: String,
    pub color: ColorDef,
    pub scale: f64,
    pub placement: Placement,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Square {
    pub coord: CellCoord,
    pub center: Point,
    pub side: f64,
    pub fill: Rgba8Premul,
    pub is_zero: bool,
}

/// A generated cell layout, one square per materialized cell.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellsObject {
    pub id: String,
    pub dims: Dimensions,
    pub mode: Mode,
    pub squares: Vec<Square>,
    pub placement: Placement,
}

impl CellsObject {
    pub fn from_group(
        id: impl Into<String>,
        group: &CellGroup,
        side: f64,
        scheme: &ColorScheme,
    ) -> Self {
        let squares = group
            .cells
            .iter()
            .map(|cell| Square {
                coord: cell.coord,
                center: cell.position,
                side,
                fill: scheme.cell_color(cell),
                is_zero: cell.is_zero,
            })
            .collect();
        Self {
            id: id.into(),
            dims: group.dims,
            mode: group.mode,
            squares,
            placement: Placement::Center,
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.squares
            .iter()
            .map(|s| Rect::from_center_size(s.center, (s.side, s.side)))
            .reduce(|acc, r| acc.union(r))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneObject {
    Text(TextObject),
    Cells(CellsObject),
}

impl SceneObject {
    pub fn id(&self) -> &str {
        match self {
            Self::Text(t) => &t.id,
            Self::Cells(c) => &c.id,
        }
    }

    pub fn placement(&self) -> &Placement {
        match self {
            Self::Text(t) => &t.placement,
            Self::Cells(c) => &c.placement,
        }
    }
}

impl From<TextObject> for SceneObject {
    fn from(t: TextObject) -> Self {
        Self::Text(t)
    }
}

impl From<CellsObject> for SceneObject {
    fn from(c: CellsObject) -> Self {
        Self::Cells(c)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    Write { target: String },
    Create { target: String },
    FadeIn { target: String },
    FadeOut { target: String },
    Shift { target: String, by: Vec2 },
}

impl Animation {
    pub fn target(&self) -> &str {
        match self {
            Self::Write { target }
            | Self::Create { target }
            | Self::FadeIn { target }
            | Self::FadeOut { target }
            | Self::Shift { target, .. } => target,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Runs all animations together.
    Play {
        animations: Vec<Animation>,
        run_time_secs: f64,
    },
    Wait { secs: f64 },
    /// Instant translation, no visible transition.
    Place { target: String, by: Vec2 },
}

impl Step {
    pub fn duration_secs(&self) -> f64 {
        match self {
            Self::Play { run_time_secs, .. } => *run_time_secs,
            Self::Wait { secs } => *secs,
            Self::Place { .. } => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    pub background: ColorDef,
    pub objects: Vec<SceneObject>,
    pub steps: Vec<Step>,
}

impl Storyboard {
    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn duration_secs(&self) -> f64 {
        self.steps.iter().map(Step::duration_secs).sum()
    }

    pub fn duration_frames(&self, fps: Fps) -> FrameIndex {
        fps.secs_to_frames_floor(self.duration_secs())
    }

    pub fn validate(&self) -> DenseGridResult<()> {
        let mut ids = BTreeSet::new();
        for obj in &self.objects {
            let id = obj.id();
            if id.trim().is_empty() {
                return Err(DenseGridError::validation("object id must be non-empty"));
            }
            if !ids.insert(id) {
                return Err(DenseGridError::validation(format!(
                    "duplicate object id '{id}'"
                )));
            }
        }

        let known = |id: &str, ctx: &str| -> DenseGridResult<()> {
            if ids.contains(id) {
                Ok(())
            } else {
                Err(DenseGridError::validation(format!(
                    "{ctx} references missing object '{id}'"
                )))
            }
        };

        for obj in &self.objects {
            if let Placement::NextTo { target, .. } = obj.placement() {
                if target == obj.id() {
                    return Err(DenseGridError::validation(format!(
                        "object '{target}' is placed next to itself"
                    )));
                }
                known(target, &format!("placement of '{}'", obj.id()))?;
            }
        }

        for (i, step) in self.steps.iter().enumerate() {
            let secs = step.duration_secs();
            if !secs.is_finite() || secs < 0.0 {
                return Err(DenseGridError::validation(format!(
                    "step {i} has invalid duration {secs}"
                )));
            }
            match step {
                Step::Play { animations, .. } => {
                    if animations.is_empty() {
                        return Err(DenseGridError::validation(format!(
                            "step {i} plays no animations"
                        )));
                    }
                    for a in animations {
                        known(a.target(), &format!("step {i}"))?;
                    }
                }
                Step::Place { target, .. } => known(target, &format!("step {i}"))?,
                Step::Wait { .. } => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: &str, placement: Placement) -> SceneObject {
        SceneObject::Text(TextObject {
            id: id.to_string(),
            content: "hello".to_string(),
            color: ColorScheme::daylight().text,
            scale: 1.0,
            placement,
            highlights: vec![],
        })
    }

    fn basic_board() -> Storyboard {
        Storyboard {
            background: ColorScheme::daylight().background,
            objects: vec![
                text("title", Placement::Center),
                text(
                    "sub",
                    Placement::NextTo {
                        target: "title".to_string(),
                        direction: Direction::Up,
                    },
                ),
            ],
            steps: vec![
                Step::Play {
                    animations: vec![Animation::Write {
                        target: "title".to_string(),
                    }],
                    run_time_secs: 1.5,
                },
                Step::Place {
                    target: "sub".to_string(),
                    by: Direction::Left.unit() * 3.0,
                },
                Step::Wait { secs: 0.5 },
            ],
        }
    }

    #[test]
    fn validate_accepts_basic_board() {
        basic_board().validate().unwrap();
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut b = basic_board();
        b.objects.push(text("title", Placement::Center));
        assert!(b.validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_targets() {
        let mut b = basic_board();
        b.steps.push(Step::Play {
            animations: vec![Animation::FadeOut {
                target: "nope".to_string(),
            }],
            run_time_secs: 1.0,
        });
        let err = b.validate().unwrap_err();
        assert!(err.to_string().contains("missing object 'nope'"));

        let mut b = basic_board();
        b.objects.push(text(
            "orphan",
            Placement::NextTo {
                target: "ghost".to_string(),
                direction: Direction::Down,
            },
        ));
        assert!(b.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_durations_and_empty_plays() {
        let mut b = basic_board();
        b.steps.push(Step::Wait { secs: f64::NAN });
        assert!(b.validate().is_err());

        let mut b = basic_board();
        b.steps.push(Step::Play {
            animations: vec![],
            run_time_secs: 1.0,
        });
        assert!(b.validate().is_err());
    }

    #[test]
    fn duration_sums_steps() {
        let b = basic_board();
        assert_eq!(b.duration_secs(), 2.0);
        assert_eq!(b.duration_frames(Fps::new(30, 1).unwrap()), FrameIndex(60));
    }

    #[test]
    fn json_shape_is_tagged() {
        let v = serde_json::to_value(&basic_board()).unwrap();
        assert_eq!(v["objects"][0]["kind"], "text");
        assert_eq!(v["steps"][0]["kind"], "play");
        assert_eq!(v["steps"][0]["animations"][0]["kind"], "write");
        assert_eq!(v["objects"][1]["placement"]["kind"], "next_to");
    }

    #[test]
    fn place_steps_are_instant_and_checked() {
        let b = basic_board();
        assert_eq!(b.steps[1].duration_secs(), 0.0);
        let v = serde_json::to_value(&b.steps[1]).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"kind": "place", "target": "sub", "by": {"x": -3.0, "y": 0.0}})
        );

        let mut b = basic_board();
        b.steps.push(Step::Place {
            target: "ghost".to_string(),
            by: Direction::Up.unit(),
        });
        let err = b.validate().unwrap_err();
        assert!(err.to_string().contains("missing object 'ghost'"));
    }

    #[test]
    fn placement_accepts_only_documented_kinds() {
        let p: Placement = serde_json::from_value(serde_json::json!({"kind": "center"})).unwrap();
        assert_eq!(p, Placement::Center);
        let at = serde_json::json!({"kind": "at", "offset": {"x": 1.0, "y": 2.0}});
        assert!(serde_json::from_value::<Placement>(at).is_err());
    }
}
