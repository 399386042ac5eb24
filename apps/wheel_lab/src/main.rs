use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use urania::chart::{load_chart_from_json, ChartData};
use urania::layout::ChartKind;
use urania::notation::scan;
use urania::rendering::{to_svg, RenderOptions, RingRenderer};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    /// Scene graph as JSON
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Natal,
    Composite,
    Synastry,
    Transit,
}

impl From<Kind> for ChartKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Natal => ChartKind::Natal,
            Kind::Composite => ChartKind::Composite,
            Kind::Synastry => ChartKind::Synastry,
            Kind::Transit => ChartKind::Transit,
        }
    }
}

/// Render a chart payload to SVG or scene JSON on stdout.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart payload JSON (bodies, cusps, aspects)
    chart: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Ring preset; synastry and transit need --secondary
    #[arg(long, value_enum, default_value_t = Kind::Natal)]
    kind: Kind,

    /// Second chart for the outer ring. Its `aspects` are taken as cross aspects.
    #[arg(long)]
    secondary: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    no_aspects: bool,

    #[arg(long, default_value_t = false)]
    no_houses: bool,

    /// Narrative text file; decoded notation tokens are listed on stderr
    #[arg(long)]
    narrative: Option<PathBuf>,
}

fn load_chart(path: &Path) -> anyhow::Result<ChartData> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    load_chart_from_json(&text).with_context(|| format!("Failed to load chart {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let kind = ChartKind::from(args.kind);
    let presets = urania_config::load_wheel_presets_or_default();
    let mut renderer = RingRenderer::new(kind, presets.get(kind).clone());
    let options = RenderOptions {
        show_aspects: !args.no_aspects,
        show_houses: !args.no_houses,
    };

    let base = load_chart(&args.chart)?;
    let scene = match (&args.secondary, kind) {
        (Some(path), _) => {
            let secondary = load_chart(path)?;
            renderer.render_biwheel(&base, &secondary, &secondary.aspects, options)
        }
        (None, ChartKind::Synastry | ChartKind::Transit) => {
            anyhow::bail!("--kind {:?} needs --secondary <chart.json>", args.kind);
        }
        (None, _) => renderer.render_wheel(&base.bodies, &base.cusps, &base.aspects, options),
    };

    if scene.unresolved_overlaps > 0 {
        log::warn!("{} glyphs still overlap after placement", scene.unresolved_overlaps);
    }
    log::info!(
        "{} nodes, {} icon assets cached",
        scene.nodes.len(),
        renderer.icons().len()
    );

    if let Some(path) = &args.narrative {
        let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        for found in scan(&text) {
            eprintln!("[wheel_lab] {:>5}..{:<5} {} => {}", found.span.start, found.span.end, found.text, found.token);
        }
    }

    match args.format {
        Format::Svg => println!("{}", to_svg(&scene)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&scene)?),
    }

    renderer.teardown();
    Ok(())
}
