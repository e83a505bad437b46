use crate::foundation::core::Rgba8Premul;
use crate::grid::{Cell, FillClass};
use crate::palette::ColorDef;

/// Built-in palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemePreset {
    /// Solarized light.
    #[default]
    Daylight,
    /// Light-on-black.
    Default,
}

/// Colors for every role a scene needs. Chosen once per run and passed explicitly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    pub background: ColorDef,
    pub text: ColorDef,
    pub dense_fill: ColorDef,
    pub sparse_fill: ColorDef,
    pub zero_fill: ColorDef,
}

impl ColorScheme {
    pub fn daylight() -> Self {
        Self {
            background: rgb8(0xfd, 0xf6, 0xe3),
            text: rgb8(0x65, 0x7b, 0x83),
            dense_fill: rgb8(0x26, 0x8b, 0xd2),
            sparse_fill: rgb8(0x2a, 0xa1, 0x98),
            zero_fill: rgb8(0xee, 0xe8, 0xd5),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: rgb8(0x00, 0x00, 0x00),
            text: rgb8(0xff, 0xff, 0xff),
            dense_fill: rgb8(0x58, 0xc4, 0xdd),
            sparse_fill: rgb8(0x83, 0xc1, 0x67),
            zero_fill: rgb8(0x88, 0x88, 0x88),
        }
    }

    pub fn preset(preset: SchemePreset) -> Self {
        match preset {
            SchemePreset::Daylight => Self::daylight(),
            SchemePreset::Default => Self::default_dark(),
        }
    }

    pub fn fill_color(&self, fill: FillClass) -> ColorDef {
        match fill {
            FillClass::DenseFill => self.dense_fill,
            FillClass::SparseFill => self.sparse_fill,
            FillClass::ZeroFill => self.zero_fill,
        }
    }

    /// Fill color of `cell` with its fill intensity applied as alpha.
    pub fn cell_color(&self, cell: &Cell) -> Rgba8Premul {
        self.fill_color(cell.fill)
            .with_alpha(cell.fill_intensity)
            .to_rgba8_premul()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::preset(SchemePreset::default())
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> ColorDef {
    ColorDef::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        1.0,
    )
}
