use criterion::{Criterion, criterion_group, criterion_main};
use lineage_render::layout::LayoutEngine;
use lineage_render::model::{LineageNodeData, LineageTree, Species, SpeciesId};
use lineage_render::raster::FontMetrics;
use lineage_render::text::TextRenderer;
use std::hint::black_box;

const REGRESSION_TREES: &[(&str, usize, usize)] = &[
    ("Bushy-n1k", 1_000, 8),
    ("Binary-n1k", 1_000, 2),
    ("Chain-n1k", 1_000, 1),
];

const REPORTING_TREES: &[(&str, usize, usize)] = &[("Bushy-n20k", 20_000, 8), ("Binary-n20k", 20_000, 2)];

/// Tree of `size` species where node `i` hangs below node `(i - 1) / arity`.
fn generated_lineage(size: usize, arity: usize) -> LineageTree {
    let species = |i: usize| Species::new(SpeciesId(i as u64), format!("G. species{i}"), i as i64 * 3_600);
    let mut tree = LineageTree::with_root(LineageNodeData::ancestor(species(0)));
    for i in 1..size {
        let data = LineageNodeData::descendant(species(i).with_extinct(i % 5 == 0));
        tree.add_child((i - 1) / arity, data);
    }
    tree
}

fn text_rendering(c: &mut Criterion) {
    for &(name, size, arity) in REGRESSION_TREES {
        let tree = generated_lineage(size, arity);
        let renderer = TextRenderer::new().with_max_length(usize::MAX);
        c.bench_function(&format!("text/{name}"), |b| {
            b.iter(|| renderer.render(black_box(Some(&tree))));
        });
    }
}

fn layout(c: &mut Criterion) {
    let metrics = FontMetrics::new("DejaVu Sans", 16.0);
    for &(name, size, arity) in REGRESSION_TREES {
        let tree = generated_lineage(size, arity);
        c.bench_function(&format!("layout/{name}"), |b| {
            b.iter(|| LayoutEngine::default().layout(black_box(&tree), &metrics));
        });
    }
}

fn layout_reporting(c: &mut Criterion) {
    let metrics = FontMetrics::new("DejaVu Sans", 16.0);
    for &(name, size, arity) in REPORTING_TREES {
        let tree = generated_lineage(size, arity);
        c.bench_function(&format!("layout/{name}"), |b| {
            b.iter(|| LayoutEngine::default().layout(black_box(&tree), &metrics));
        });
    }
}

criterion_group!(regression, text_rendering, layout);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = layout_reporting
}
criterion_main!(regression, reporting);
