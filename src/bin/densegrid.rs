use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use densegrid::{CellGroup, Dimensions, Mode, RuleSpec, RunConfig, SchemeConfig, SchemePreset};

#[derive(Parser, Debug)]
#[command(name = "densegrid", version)]
struct Cli {
    /// Log generation details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a 2-D grid of cells as JSON.
    Cells(CellsArgs),
    /// Generate a 1-D array of cells as JSON.
    Array(ArrayArgs),
    /// Emit the sparse-vs-dense storyboard as JSON.
    Storyboard(StoryboardArgs),
}

#[derive(Args, Debug)]
struct RuleArgs {
    /// Layout mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Dense)]
    mode: ModeChoice,

    /// Density rule deciding which cells are zero.
    #[arg(long, value_enum, default_value_t = RuleChoice::Parity)]
    rule: RuleChoice,

    /// Seed for randomized rules.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Exclusive upper bound of uniform draws.
    #[arg(long, default_value_t = 10)]
    range: u32,

    /// Probability of a zero for the zero-injection rule.
    #[arg(long, default_value_t = 0.6)]
    zero_probability: f64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CellsArgs {
    #[arg(long)]
    rows: usize,

    #[arg(long)]
    cols: usize,

    #[command(flatten)]
    rule: RuleArgs,
}

#[derive(Args, Debug)]
struct ArrayArgs {
    #[arg(long)]
    size: usize,

    /// Cells per visual row (defaults to min(size, 10)).
    #[arg(long)]
    row_width: Option<usize>,

    #[command(flatten)]
    rule: RuleArgs,
}

#[derive(Args, Debug)]
struct StoryboardArgs {
    /// Run configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color scheme preset, overriding the config file.
    #[arg(long, value_enum)]
    scheme: Option<SchemeChoice>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Dense,
    Sparse,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RuleChoice {
    Parity,
    Uniform,
    ZeroInjection,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemeChoice {
    Daylight,
    Default,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Cells(args) => cmd_cells(args),
        Command::Array(args) => cmd_array(args),
        Command::Storyboard(args) => cmd_storyboard(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

impl RuleArgs {
    fn mode(&self) -> Mode {
        match self.mode {
            ModeChoice::Dense => Mode::Dense,
            ModeChoice::Sparse => Mode::Sparse,
        }
    }

    fn spec(&self) -> RuleSpec {
        match self.rule {
            RuleChoice::Parity => RuleSpec::Parity,
            RuleChoice::Uniform => RuleSpec::Uniform {
                seed: self.seed,
                lo: 0,
                hi: self.range,
            },
            RuleChoice::ZeroInjection => RuleSpec::ZeroInjection {
                seed: self.seed,
                zero_probability: self.zero_probability,
                max: self.range.saturating_sub(1).max(1),
            },
        }
    }
}

fn cmd_cells(args: CellsArgs) -> anyhow::Result<()> {
    emit_cells(Dimensions::grid(args.rows, args.cols), &args.rule)
}

fn cmd_array(args: ArrayArgs) -> anyhow::Result<()> {
    let dims = match args.row_width {
        Some(w) => Dimensions::array_with_width(args.size, w),
        None => Dimensions::array(args.size),
    };
    emit_cells(dims, &args.rule)
}

fn emit_cells(dims: Dimensions, args: &RuleArgs) -> anyhow::Result<()> {
    let mut rule = args.spec().build()?;
    let group = CellGroup::generate(dims, args.mode(), rule.as_mut())?;
    tracing::info!(cells = group.len(), "generated layout");
    write_json(args.out.as_deref(), &group)
}

fn cmd_storyboard(args: StoryboardArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => read_config(path)?,
        None => RunConfig::default(),
    };
    if let Some(choice) = args.scheme {
        cfg.scheme = SchemeConfig::Preset(match choice {
            SchemeChoice::Daylight => SchemePreset::Daylight,
            SchemeChoice::Default => SchemePreset::Default,
        });
    }

    let board = densegrid::scene::sparse_vs_dense(&cfg.storyboard_opts())?;
    tracing::info!(
        objects = board.objects.len(),
        steps = board.steps.len(),
        frames = board.duration_frames(cfg.fps).0,
        "built storyboard"
    );
    write_json(args.out.as_deref(), &board)
}

fn read_config(path: &Path) -> anyhow::Result<RunConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = RunConfig::from_json(&s)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "serialize JSON")?;
            w.flush()
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "serialize JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}
