use anyhow::{Context, Result};
use clap::Parser;
use lineage_render::config::RenderConfig;
use lineage_render::model::{LineageNodeData, LineageTree, Species, SpeciesId};
use lineage_render::raster::RasterRenderer;
use lineage_render::text::TextRenderer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Renders a sample lineage as text and, optionally, as an image.
#[derive(Debug, Parser)]
#[command(name = "lineage-demo", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory to write the image to (overrides the configuration)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Character budget of the text diagram (overrides the configuration)
    #[arg(long)]
    max_length: Option<usize>,
    /// Draw the text diagram without connector lines
    #[arg(long)]
    no_lines: bool,
    /// Also render the image
    #[arg(long)]
    image: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.raster.output_dir = dir;
    }
    if let Some(max_length) = cli.max_length {
        config.text.max_length = max_length;
    }
    if cli.no_lines {
        config.text.draw_lines = false;
    }

    let (tree, focal) = sample_lineage();
    println!("{}", TextRenderer::new().with_config(&config.text).render(Some(&tree)));

    if cli.image {
        let path = RasterRenderer::new(config.raster)
            .render(&tree, focal)
            .context("rendering lineage image")?;
        println!("{}", path.display());
    }
    Ok(())
}

/// Lineage of a small genus of cave fish, focused on `T. caeca`.
fn sample_lineage() -> (LineageTree, SpeciesId) {
    const DAY: i64 = 86_400;
    let start = 1_577_836_800; // 2020-01-01
    let species = |id: u64, name: &str, days: i64| Species::new(SpeciesId(id), name, start + days * DAY);

    let mut tree = LineageTree::with_root(LineageNodeData::ancestor(
        species(1, "T. primus", 0).with_extinct(true),
    ));
    let fluvia = tree.add_child(0, LineageNodeData::ancestor(species(2, "T. fluvia", 12)));
    tree.add_child(0, LineageNodeData::descendant(species(3, "T. montana", 40).with_extinct(true)));
    let caeca = tree.add_child(fluvia, LineageNodeData::ancestor(species(4, "T. caeca", 95)));
    tree.add_child(fluvia, LineageNodeData::descendant(species(5, "T. lucida", 130)));
    tree.add_child(caeca, LineageNodeData::descendant(species(6, "T. abyssa", 201)));
    tree.add_child(caeca, LineageNodeData::descendant(species(7, "T. pallida", 260)));

    (tree, SpeciesId(4))
}
