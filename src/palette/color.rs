use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{DenseGridError, DenseGridResult};

/// Straight (non-premultiplied) RGBA, each channel in `0..=1`.
///
/// Deserializes from `"#RRGGBB"`, `"#RRGGBBAA"`, `{r,g,b[,a]}` or `[r,g,b(,a)]`. Channels
/// outside `0..=1` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorInput")]
pub struct ColorDef {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Accepted JSON spellings of a [`ColorDef`].
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorInput {
    Hex(String),
    Channels {
        r: f64,
        g: f64,
        b: f64,
        a: Option<f64>,
    },
    List(Vec<f64>),
}

impl TryFrom<ColorInput> for ColorDef {
    type Error = DenseGridError;

    fn try_from(input: ColorInput) -> DenseGridResult<Self> {
        let color = match input {
            ColorInput::Hex(s) => return Self::hex(&s),
            ColorInput::Channels { r, g, b, a } => Self::rgba(r, g, b, a.unwrap_or(1.0)),
            ColorInput::List(v) => match *v.as_slice() {
                [r, g, b] => Self::rgba(r, g, b, 1.0),
                [r, g, b, a] => Self::rgba(r, g, b, a),
                _ => {
                    return Err(DenseGridError::validation(format!(
                        "color list needs 3 or 4 channels, got {}",
                        v.len()
                    )));
                }
            },
        };
        color.checked()
    }
}

impl ColorDef {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, digits are case-insensitive).
    pub fn hex(s: &str) -> DenseGridResult<Self> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let invalid = || DenseGridError::validation(format!("invalid hex color '{s}'"));

        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let packed = if digits.len() == 6 {
            (packed << 8) | 0xff
        } else {
            packed
        };

        let [r, g, b, a] = packed.to_be_bytes().map(|c| f64::from(c) / 255.0);
        Ok(Self::rgba(r, g, b, a))
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        let a = self.a.clamp(0.0, 1.0);
        let premul = |c: f64| to_u8(c.clamp(0.0, 1.0) * a);
        Rgba8Premul {
            r: premul(self.r),
            g: premul(self.g),
            b: premul(self.b),
            a: to_u8(a),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(to_u8);
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    fn checked(self) -> DenseGridResult<Self> {
        for (name, v) in [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(DenseGridError::validation(format!(
                    "color channel {name} must be in 0..=1, got {v}"
                )));
            }
        }
        Ok(self)
    }
}

fn to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}
