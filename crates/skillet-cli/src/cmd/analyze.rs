//! `skillet analyze` — full corpus analysis.
//!
//! Loads the recipe table, runs the engine, writes the JSON report to disk,
//! and prints a summary (or the report itself under `--json`).

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use skillet_core::config::AnalysisConfig;
use skillet_core::error::ErrorCode;
use skillet_core::loader;
use skillet_graph::pairing::{self, NormalizeConfig, PairingScores};
use skillet_graph::report::{self, AnalysisReport};

use crate::output::{self, OutputMode, render};

/// Arguments for `skillet analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Recipe table (CSV with id, title, and ingredients columns).
    pub input: PathBuf,

    /// Where to write the JSON report.
    #[arg(long, default_value = "graph_analysis.json")]
    pub output: PathBuf,

    /// Read at most this many recipe rows.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Analysis config file (TOML). Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ingredient-pairing table (CSV) for recipe compatibility scores.
    #[arg(long)]
    pub pairing: Option<PathBuf>,
}

/// Execute `skillet analyze`.
pub fn run_analyze(args: &AnalyzeArgs, mode: OutputMode) -> Result<()> {
    let config = AnalysisConfig::load_or_default(args.config.as_deref())?;
    let records = loader::load_recipes(&args.input, args.limit)?;
    info!(recipes = records.len(), "corpus loaded");

    let mut analysis = report::run_analysis(&records, &config);

    if let Some(pairing_path) = &args.pairing {
        let normalize = NormalizeConfig::new(&config.ingredients.stopwords);
        let scores = PairingScores::from_csv_path(pairing_path, &normalize)?;
        let stats = pairing::pairing_statistics(
            &records,
            &scores,
            &normalize,
            config.ingredients.top_ingredients,
        );
        analysis = analysis.with_pairing(stats);
    }

    let json = serde_json::to_string_pretty(&analysis).context("serialize report")?;
    std::fs::write(&args.output, &json).with_context(|| {
        format!(
            "{}: write {}",
            ErrorCode::ReportWriteFailed,
            args.output.display()
        )
    })?;
    info!(path = %args.output.display(), "report written");

    render(mode, &analysis, |analysis, w| {
        render_report_human(analysis, w)
    })
}

fn render_report_human(analysis: &AnalysisReport, w: &mut dyn Write) -> std::io::Result<()> {
    let g = &analysis.graph_statistics;

    output::pretty_section(w, "Graph statistics")?;
    output::pretty_kv(w, "Node count", g.node_count.to_string())?;
    output::pretty_kv(w, "Edge count", g.edge_count.to_string())?;
    output::pretty_kv(w, "Average node degree", format!("{:.2}", g.average_node_degree))?;
    output::pretty_kv(w, "Density", format!("{:.6}", g.density))?;
    output::pretty_kv(
        w,
        "Connected components",
        g.connected_components_count.to_string(),
    )?;
    output::pretty_kv(
        w,
        "Largest component size",
        g.largest_component_size.to_string(),
    )?;
    output::pretty_kv(
        w,
        "Average clustering coefficient",
        format!("{:.4}", g.average_clustering_coefficient),
    )?;
    output::pretty_kv(w, "Diameter", g.diameter.to_string())?;
    output::pretty_kv(w, "Radius", g.radius.to_string())?;
    writeln!(w)?;

    output::pretty_section(w, "Centrality")?;
    output::pretty_kv(
        w,
        "Max degree centrality",
        format!("{:.4}", g.max_degree_centrality),
    )?;
    output::pretty_kv(
        w,
        "Avg degree centrality",
        format!("{:.4}", g.avg_degree_centrality),
    )?;
    output::pretty_kv(
        w,
        "Max betweenness centrality",
        format!("{:.4}", g.max_betweenness_centrality),
    )?;
    output::pretty_kv(
        w,
        "Avg betweenness centrality",
        format!("{:.4}", g.avg_betweenness_centrality),
    )?;
    writeln!(w)?;

    let ing = &analysis.ingredient_statistics;
    output::pretty_section(w, "Ingredient statistics")?;
    output::pretty_kv(
        w,
        "Unique ingredients",
        ing.total_unique_ingredients.to_string(),
    )?;
    output::pretty_kv(w, "Total occurrences", ing.total_ingredients.to_string())?;
    for (ingredient, count) in ing.most_common_ingredients.iter().take(10) {
        output::pretty_kv(w, &format!("  {ingredient}"), count.to_string())?;
    }

    if let Some(pairing) = &analysis.pairing_statistics {
        writeln!(w)?;
        output::pretty_section(w, "Pairing scores")?;
        output::pretty_kv(w, "Scored recipes", pairing.scored_recipe_count.to_string())?;
        output::pretty_kv(w, "Mean score", format!("{:.3}", pairing.mean_score))?;
        output::pretty_kv(w, "Max score", format!("{:.3}", pairing.max_score))?;
        for (recipe, score) in pairing.top_recipes.iter().take(10) {
            output::pretty_kv(w, &format!("  {recipe}"), format!("{score:.3}"))?;
        }
    }

    Ok(())
}
