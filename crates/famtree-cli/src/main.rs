mod config;

use anyhow::Result;
use config::{parse_args, pick_index, CliConfig};
use famtree_core::{
    lineage_label, ChoiceOutcome, NodeId, SearchOutcome, TreeView, ViewSettings,
};
use std::io::Write;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_writer(std::io::stderr).try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let config = parse_args()?;
    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}

fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let record = famtree_core::load_dataset(&config.data)?;
    let mut view = TreeView::new(&record, ViewSettings::default(), config.width, config.height);

    tracing::info!(
        data = %config.data.display(),
        people = view.tree().len(),
        names = view.index().len(),
        "dataset loaded"
    );

    let Some(query) = config.query.as_deref() else {
        writeln!(out, "{} people, {} distinct names", view.tree().len(), view.index().len())?;
        return Ok(());
    };

    let target = match view.search(query) {
        SearchOutcome::Ignored => return Ok(()),
        SearchOutcome::NotFound { query } => {
            writeln!(out, "No exact match found for \"{query}\".")?;
            return Ok(());
        }
        SearchOutcome::Highlighted(id) => id,
        SearchOutcome::NeedsChoice(candidates) => {
            writeln!(out, "Found {} people with that name:", candidates.len())?;
            for (i, c) in candidates.iter().enumerate() {
                writeln!(out, "{}) {}", i + 1, c.lineage)?;
            }
            match view.choose(pick_index(config.pick)) {
                ChoiceOutcome::Highlighted(id) => id,
                ChoiceOutcome::Dismissed => {
                    writeln!(out, "Pick one with --pick <n>.")?;
                    return Ok(());
                }
            }
        }
    };

    report(&mut view, target, out)
}

fn report(view: &mut TreeView, target: NodeId, out: &mut impl Write) -> Result<()> {
    // Let the centring animation run to completion.
    view.tick(Duration::ZERO);
    view.tick(view.settings().center_duration());

    let tree = view.tree();
    writeln!(out, "Lineage: {}", lineage_label(tree, target))?;

    let mut links: Vec<_> = view.highlight().on_path_links().iter().copied().collect();
    links.sort_by_key(|l| tree.depth(l.child));
    for link in links {
        let parent = tree.node(link.parent).map(|n| n.display_name()).unwrap_or("?");
        let child = tree.node(link.child).map(|n| n.display_name()).unwrap_or("?");
        writeln!(out, "  {parent} -> {child}")?;
    }

    let t = view.transform();
    writeln!(out, "Viewport: translate({:.1}, {:.1}) scale({:.2})", t.x, t.y, t.k)?;
    Ok(())
}
