use std::collections::BTreeSet;

use crate::foundation::core::Vec2;
use crate::foundation::error::{DenseGridError, DenseGridResult};
use crate::palette::ColorDef;
use crate::scene::model::{Animation, DEFAULT_RUN_TIME_SECS, SceneObject, Step, Storyboard};

pub struct StoryboardBuilder {
    background: ColorDef,
    ids: BTreeSet<String>,
    objects: Vec<SceneObject>,
    steps: Vec<Step>,
}

impl StoryboardBuilder {
    pub fn new(background: ColorDef) -> Self {
        Self {
            background,
            ids: BTreeSet::new(),
            objects: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn object(mut self, object: impl Into<SceneObject>) -> DenseGridResult<Self> {
        let object = object.into();
        if !self.ids.insert(object.id().to_owned()) {
            return Err(DenseGridError::validation(format!(
                "duplicate object id '{}'",
                object.id()
            )));
        }
        self.objects.push(object);
        Ok(self)
    }

    /// Plays `animations` together for the default run time.
    pub fn play(self, animations: impl IntoIterator<Item = Animation>) -> Self {
        self.play_for(animations, DEFAULT_RUN_TIME_SECS)
    }

    pub fn play_for(
        mut self,
        animations: impl IntoIterator<Item = Animation>,
        run_time_secs: f64,
    ) -> Self {
        self.steps.push(Step::Play {
            animations: animations.into_iter().collect(),
            run_time_secs,
        });
        self
    }

    pub fn wait(mut self, secs: f64) -> Self {
        self.steps.push(Step::Wait { secs });
        self
    }

    pub fn place(mut self, target: impl Into<String>, by: Vec2) -> Self {
        self.steps.push(Step::Place {
            target: target.into(),
            by,
        });
        self
    }

    pub fn build(self) -> DenseGridResult<Storyboard> {
        let board = Storyboard {
            background: self.background,
            objects: self.objects,
            steps: self.steps,
        };
        board.validate()?;
        Ok(board)
    }
}

pub(crate) fn write(target: &str) -> Animation {
    Animation::Write {
        target: target.to_owned(),
    }
}

pub(crate) fn create(target: &str) -> Animation {
    Animation::Create {
        target: target.to_owned(),
    }
}

pub(crate) fn fade_in(target: &str) -> Animation {
    Animation::FadeIn {
        target: target.to_owned(),
    }
}

pub(crate) fn fade_out(target: &str) -> Animation {
    Animation::FadeOut {
        target: target.to_owned(),
    }
}

pub(crate) fn shift(target: &str, by: Vec2) -> Animation {
    Animation::Shift {
        target: target.to_owned(),
        by,
    }
}
