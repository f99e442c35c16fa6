use std::{
    io::Write as _,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rendered block tree as JSON.
    Outline(PageArgs),
    /// Replay a scroll script and print frame snapshots as JSON lines.
    Simulate(SimulateArgs),
    /// Validate content and config, then print diagnostics.
    Check(PageArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Site content JSON. Defaults to the built-in content.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Page config JSON. Defaults to the built-in config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll script JSON: `{ "steps": [{ "at_ms", "scroll_y" }], "until_ms" }`.
    #[arg(long)]
    script: PathBuf,

    /// Print a snapshot every N frames (frames with a trigger are always printed).
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(serde::Deserialize, Debug)]
struct ScrollScript {
    steps: Vec<ScrollStep>,
    #[serde(default)]
    until_ms: Option<f64>,
}

#[derive(serde::Deserialize, Debug, Clone, Copy)]
struct ScrollStep {
    at_ms: f64,
    scroll_y: f64,
}

/// Time simulated after the last step when the script has no `until_ms`.
const DEFAULT_TAIL_MS: f64 = 3000.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Outline(args) => cmd_outline(&args),
        Command::Simulate(args) => cmd_simulate(&args),
        Command::Check(args) => cmd_check(&args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_content(path: Option<&Path>) -> anyhow::Result<folio::SiteContent> {
    match path {
        None => Ok(folio::SiteContent::builtin()),
        Some(p) => folio::SiteContent::from_path(p)
            .with_context(|| format!("load content '{}'", p.display())),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<folio::PageConfig> {
    match path {
        None => Ok(folio::PageConfig::default()),
        Some(p) => folio::PageConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
    }
}

fn mount(args: &PageArgs) -> anyhow::Result<folio::Page> {
    let content = read_content(args.content.as_deref())?;
    let config = read_config(args.config.as_deref())?;
    let page = folio::Page::mount(Arc::new(content), config).context("mount page")?;
    Ok(page)
}

fn cmd_outline(args: &PageArgs) -> anyhow::Result<()> {
    let page = mount(args)?;
    let collections: Vec<serde_json::Value> = page
        .collections()
        .iter()
        .map(|c| {
            let blocks: Vec<serde_json::Value> = c
                .blocks
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "id": b.id,
                        "index": b.index,
                        "delay_ms": b.animator.spec().delay_ms,
                        "rect": folio::ElementGeometry::element_rect(page.layout(), b.element),
                        "outline": b.block.outline(),
                        "tree": b.block,
                    })
                })
                .collect();
            serde_json::json!({
                "collection": c.id,
                "label": c.label,
                "columns": c.columns,
                "blocks": blocks,
            })
        })
        .collect();
    let doc = serde_json::json!({
        "page_height": page.layout().page_height(),
        "collections": collections,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&doc).context("serialize outline")?
    );
    Ok(())
}

fn cmd_simulate(args: &SimulateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script '{}'", args.script.display()))?;
    let mut script: ScrollScript = serde_json::from_str(&text)
        .with_context(|| format!("parse script '{}'", args.script.display()))?;
    script.steps.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
    let until = script.until_ms.unwrap_or_else(|| {
        script.steps.last().map_or(0.0, |s| s.at_ms) + DEFAULT_TAIL_MS
    });
    let every = args.every.max(1);

    let mut page = mount(&args.page)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut next_step = 0;

    while page.now().as_f64() < until {
        while let Some(step) = script.steps.get(next_step)
            && step.at_ms <= page.now().as_f64()
        {
            let applied = page.scroll_to(step.scroll_y);
            tracing::info!(at_ms = step.at_ms, scroll_y = applied, "scroll");
            next_step += 1;
        }
        let report = page.frame()?;
        if report.frame % every == 0 || !report.triggered.is_empty() {
            let line = serde_json::to_string(&page.snapshot()).context("serialize snapshot")?;
            writeln!(out, "{line}").context("write snapshot")?;
        }
    }

    let settled = page.is_settled();
    tracing::info!(frames = page.snapshot().frame, settled, "simulation finished");
    Ok(())
}

fn cmd_check(args: &PageArgs) -> anyhow::Result<()> {
    let page = mount(args)?;
    let diagnostics = page.diagnostics();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for d in &diagnostics {
        let line = serde_json::to_string(d).context("serialize diagnostic")?;
        writeln!(out, "{line}").context("write diagnostic")?;
    }
    eprintln!(
        "ok: {} collections, {} blocks, {} diagnostics",
        page.collections().len(),
        page.block_count(),
        diagnostics.len()
    );
    Ok(())
}
