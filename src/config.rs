//! JSON run configuration.

use crate::foundation::core::Fps;
use crate::foundation::error::{DenseGridError, DenseGridResult};
use crate::grid::{DensityRule, Dimensions, Parity, UniformDraw, ZeroInjection};
use crate::palette::{ColorScheme, SchemePreset};
use crate::scene::StoryboardOpts;

/// Serializable choice of density rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum RuleSpec {
    #[default]
    Parity,
    Uniform {
        #[serde(default)]
        seed: u64,
        #[serde(default)]
        lo: u32,
        #[serde(default = "default_uniform_hi")]
        hi: u32,
    },
    ZeroInjection {
        #[serde(default)]
        seed: u64,
        zero_probability: f64,
        #[serde(default = "default_max_magnitude")]
        max: u32,
    },
}

fn default_uniform_hi() -> u32 {
    10
}

fn default_max_magnitude() -> u32 {
    9
}

impl RuleSpec {
    /// Builds a fresh rule. Each call restarts any random stream from its seed.
    pub fn build(&self) -> DenseGridResult<Box<dyn DensityRule>> {
        Ok(match *self {
            Self::Parity => Box::new(Parity),
            Self::Uniform { seed, lo, hi } => Box::new(UniformDraw::new(seed, lo..hi)?),
            Self::ZeroInjection {
                seed,
                zero_probability,
                max,
            } => Box::new(ZeroInjection::new(seed, zero_probability, max)?),
        })
    }
}

/// A preset name (`"daylight"`, `"default"`) or a full custom scheme.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SchemeConfig {
    Preset(SchemePreset),
    Custom(ColorScheme),
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self::Preset(SchemePreset::default())
    }
}

impl SchemeConfig {
    pub fn resolve(&self) -> ColorScheme {
        match self {
            Self::Preset(p) => ColorScheme::preset(*p),
            Self::Custom(s) => *s,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub scheme: SchemeConfig,
    pub rows: usize,
    pub cols: usize,
    pub rule: RuleSpec,
    pub fps: Fps,
    /// Side length of each square, in layout units.
    pub side: f64,
    pub title: String,
    pub subtitle: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        let opts = StoryboardOpts::default();
        Self {
            scheme: SchemeConfig::default(),
            rows: 5,
            cols: 5,
            rule: RuleSpec::default(),
            fps: Fps::default(),
            side: opts.side,
            title: opts.title,
            subtitle: opts.subtitle,
        }
    }
}

impl RunConfig {
    pub fn from_json(s: &str) -> DenseGridResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn dims(&self) -> Dimensions {
        Dimensions::grid(self.rows, self.cols)
    }

    pub fn validate(&self) -> DenseGridResult<()> {
        self.dims().validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.side.is_finite() || self.side <= 0.0 {
            return Err(DenseGridError::validation(format!(
                "side must be a positive finite number, got {}",
                self.side
            )));
        }
        self.rule.build()?;
        Ok(())
    }

    pub fn storyboard_opts(&self) -> StoryboardOpts {
        StoryboardOpts {
            scheme: self.scheme.resolve(),
            dims: self.dims(),
            rule: self.rule.clone(),
            side: self.side,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
        }
    }
}
