use crate::config::RuleSpec;
use crate::foundation::error::{DenseGridError, DenseGridResult};
use crate::grid::{CellGroup, Dimensions, Mode};
use crate::palette::ColorScheme;
use crate::scene::builder::{create, fade_in, fade_out, shift, write};
use crate::scene::StoryboardBuilder;
use crate::scene::model::{CellsObject, Direction, Highlight, Placement, Storyboard, TextObject};

const DENSE_PHRASE: &str = "Dense matrices";
const SPARSE_PHRASE: &str = "Sparse matrices";

/// Inputs of the sparse-vs-dense scene.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryboardOpts {
    pub scheme: ColorScheme,
    pub dims: Dimensions,
    /// Rebuilt for each matrix, so both see the same values.
    pub rule: RuleSpec,
    pub side: f64,
    pub title: String,
    pub subtitle: Option<String>,
}

impl Default for StoryboardOpts {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::default(),
            dims: Dimensions::grid(5, 5),
            rule: RuleSpec::Parity,
            side: 0.5,
            title: "Sparse vs Dense Data Sets".to_string(),
            subtitle: None,
        }
    }
}

fn text(
    id: &str,
    content: &str,
    scheme: &ColorScheme,
    scale: f64,
    placement: Placement,
) -> TextObject {
    TextObject {
        id: id.to_string(),
        content: content.to_string(),
        color: scheme.text,
        scale,
        placement,
        highlights: Vec::new(),
    }
}

fn above(target: &str) -> Placement {
    Placement::NextTo {
        target: target.to_string(),
        direction: Direction::Up,
    }
}

/// Title card, each matrix on its own, both side by side, then the caption.
#[tracing::instrument(skip(opts), fields(dims = ?opts.dims))]
pub fn sparse_vs_dense(opts: &StoryboardOpts) -> DenseGridResult<Storyboard> {
    if !opts.side.is_finite() || opts.side <= 0.0 {
        return Err(DenseGridError::validation(format!(
            "side must be a positive finite number, got {}",
            opts.side
        )));
    }

    let scheme = &opts.scheme;
    let dense = CellGroup::generate(opts.dims, Mode::Dense, opts.rule.build()?.as_mut())?;
    let sparse = CellGroup::generate(opts.dims, Mode::Sparse, opts.rule.build()?.as_mut())?;
    tracing::debug!(
        dense = dense.len(),
        sparse = sparse.len(),
        "generated explainer matrices"
    );

    let mut b = StoryboardBuilder::new(scheme.background)
        .object(text("title", &opts.title, scheme, 0.8, Placement::Center))?;
    if let Some(subtitle) = &opts.subtitle {
        b = b.object(text("subtitle", subtitle, scheme, 0.3, above("title")))?;
    }

    let mut explanation = text(
        "explanation",
        "Dense matrices store all elements, including zeros.\n\
         Sparse matrices store only non-zero elements.",
        scheme,
        0.5,
        Placement::ToEdge {
            direction: Direction::Down,
        },
    );
    explanation.highlights = vec![
        Highlight {
            phrase: DENSE_PHRASE.to_string(),
            color: scheme.dense_fill,
        },
        Highlight {
            phrase: SPARSE_PHRASE.to_string(),
            color: scheme.sparse_fill,
        },
    ];

    b = b
        .object(CellsObject::from_group("dense", &dense, opts.side, scheme))?
        .object(text("dense_label", "Dense Matrix", scheme, 0.5, above("dense")))?
        .object(CellsObject::from_group("sparse", &sparse, opts.side, scheme))?
        .object(text("sparse_label", "Sparse Matrix", scheme, 0.5, above("sparse")))?
        .object(explanation)?;

    // Title card.
    b = b.play([write("title")]).wait(0.8);
    if opts.subtitle.is_some() {
        b = b.play([write("subtitle")]);
    }
    b = b.wait(2.0).play([fade_out("title")]);
    if opts.subtitle.is_some() {
        b = b.play([fade_out("subtitle")]);
    }

    // Each layout on its own.
    for (matrix, label) in [("dense", "dense_label"), ("sparse", "sparse_label")] {
        b = b
            .play([create(matrix), write(label)])
            .wait(1.0)
            .play([fade_out(matrix), fade_out(label)]);
    }

    // Side by side, then pushed apart.
    let left = Direction::Left.unit();
    let right = Direction::Right.unit();
    b = b
        .place("dense", left * 3.0)
        .place("dense_label", left * 3.0)
        .place("sparse", right * 3.0)
        .place("sparse_label", right * 3.0)
        .play([fade_in("dense"), fade_in("dense_label")])
        .play([fade_in("sparse"), fade_in("sparse_label")])
        .play([
            shift("dense", left * 2.0),
            shift("dense_label", left * 2.0),
            shift("sparse", right * 2.0),
            shift("sparse_label", right * 2.0),
        ])
        .wait(1.0);

    b.play([write("explanation")]).wait(2.0).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Fps;
    use crate::scene::{Animation, SceneObject, Step};

    fn cells<'a>(board: &'a Storyboard, id: &str) -> &'a CellsObject {
        match board.object(id) {
            Some(SceneObject::Cells(c)) => c,
            other => panic!("expected cells object '{id}', got {other:?}"),
        }
    }

    #[test]
    fn default_board_contrasts_dense_and_sparse() {
        let board = sparse_vs_dense(&StoryboardOpts::default()).unwrap();
        let dense = cells(&board, "dense");
        let sparse = cells(&board, "sparse");

        assert_eq!(dense.squares.len(), 25);
        assert_eq!(sparse.squares.len(), 13);
        assert_eq!(dense.squares.iter().filter(|s| s.is_zero).count(), 12);
        assert!(sparse.squares.iter().all(|s| !s.is_zero));
        assert_eq!(board.background, ColorScheme::daylight().background);
    }

    #[test]
    fn default_board_timeline() {
        let board = sparse_vs_dense(&StoryboardOpts::default()).unwrap();
        assert!((board.duration_secs() - 17.8).abs() < 1e-9);

        let fps = Fps::new(10, 1).unwrap();
        let frames = board.duration_frames(fps).0;
        assert!((177..=178).contains(&frames));

        let Some(Step::Play { animations, .. }) = board.steps.first() else {
            panic!("board must open with a play step");
        };
        assert_eq!(
            animations,
            &vec![Animation::Write {
                target: "title".to_string()
            }]
        );
    }

    #[test]
    fn subtitle_adds_write_and_fade() {
        let opts = StoryboardOpts {
            subtitle: Some("(hello)".to_string()),
            ..StoryboardOpts::default()
        };
        let board = sparse_vs_dense(&opts).unwrap();
        assert!(board.object("subtitle").is_some());
        assert!((board.duration_secs() - 19.8).abs() < 1e-9);
    }

    #[test]
    fn explanation_highlights_use_fill_colors() {
        let scheme = ColorScheme::default_dark();
        let opts = StoryboardOpts {
            scheme,
            ..StoryboardOpts::default()
        };
        let board = sparse_vs_dense(&opts).unwrap();
        let Some(SceneObject::Text(t)) = board.object("explanation") else {
            panic!("missing explanation");
        };
        assert_eq!(t.highlights[0].color, scheme.dense_fill);
        assert_eq!(t.highlights[1].color, scheme.sparse_fill);
        assert!(t.content.contains(&t.highlights[1].phrase));
    }

    #[test]
    fn random_rule_keeps_sparse_a_subset_of_dense() {
        let opts = StoryboardOpts {
            dims: Dimensions::grid(8, 8),
            rule: RuleSpec::Uniform {
                seed: 11,
                lo: 0,
                hi: 3,
            },
            ..StoryboardOpts::default()
        };
        let board = sparse_vs_dense(&opts).unwrap();
        let dense = cells(&board, "dense");
        let sparse = cells(&board, "sparse");
        for s in &sparse.squares {
            let d = dense
                .squares
                .iter()
                .find(|d| d.coord == s.coord)
                .expect("sparse square must exist in dense layout");
            assert!(!d.is_zero);
            assert_eq!(d.center, s.center);
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        let opts = StoryboardOpts {
            side: 0.0,
            ..StoryboardOpts::default()
        };
        assert!(sparse_vs_dense(&opts).is_err());

        let opts = StoryboardOpts {
            dims: Dimensions::grid(0, 4),
            ..StoryboardOpts::default()
        };
        assert!(matches!(
            sparse_vs_dense(&opts),
            Err(DenseGridError::InvalidDimension(_))
        ));
    }
}
