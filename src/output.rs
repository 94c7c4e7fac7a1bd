use crate::aggregate::QualityTier;
use crate::catalog::ModelCatalog;
use crate::models::{CatalogEntry, MarketAnalysis, QScoreResult};
use crate::runner::{Action, RunReport};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format options
#[derive(Debug, Clone, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Print a run report in the specified format
pub fn print_report(report: &RunReport, catalog: &ModelCatalog, format: OutputFormat) {
    match format {
        OutputFormat::Plain => print!("{}", render_plain(report, catalog)),
        OutputFormat::Json => print_json(report),
    }
}

/// Render a report as plain text, naming models from the catalog
pub fn render_plain(report: &RunReport, catalog: &ModelCatalog) -> String {
    let mut out = String::new();

    if let Some(market) = &report.market {
        out.push_str("📈 MARKET ANALYSIS\n");
        out.push_str("------------------\n");
        out.push_str(&render_market(market));
        out.push('\n');
    }

    if report.results.is_empty() {
        out.push_str("No models scored.\n");
        return out;
    }

    let heading = match report.action {
        Action::Calculate => "📊 Q-SCORES",
        Action::Compare | Action::Market => "🏆 RANKINGS",
    };
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
    out.push_str(&render_table(&report.results));
    out.push('\n');

    out.push_str("📝 DETAILED RESULTS\n");
    out.push_str("-------------------\n");
    for result in &report.results {
        out.push_str(&render_detail(result, catalog.get(&result.model_id)));
        out.push('\n');
    }

    out
}

fn render_table(results: &[QScoreResult]) -> String {
    let mut out = format!(
        "{:<5} {:<28} {:<8} {:<16} {:<5}\n",
        "Rank", "Model", "Q-Score", "Tier", "Mint"
    );
    out.push_str(&"-".repeat(66));
    out.push('\n');

    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "{:<5} {:<28} {:<8.2} {:<16} {:<5}\n",
            i + 1,
            result.model_id,
            result.q_score,
            QualityTier::from_score(result.q_score).to_string(),
            if result.mint_eligible { "yes" } else { "no" }
        ));
    }
    out
}

fn render_detail(result: &QScoreResult, entry: Option<&CatalogEntry>) -> String {
    let mut out = match entry {
        Some(entry) => format!(
            "{} [{}] by {} ({}) Q-Score {:.2}\n",
            entry.display_name, result.model_id, entry.provider, result.category, result.q_score
        ),
        None => format!(
            "{} ({}) Q-Score {:.2}\n",
            result.model_id, result.category, result.q_score
        ),
    };
    out.push_str(&format!("  • latency:     {:>6.2} / 25\n", result.latency_score));
    out.push_str(&format!("  • throughput:  {:>6.2} / 25\n", result.throughput_score));
    out.push_str(&format!("  • quality:     {:>6.2} / 25\n", result.quality_score));
    out.push_str(&format!("  • reliability: {:>6.2} / 25\n", result.reliability_score));
    out.push_str("Recommendations:\n");
    for recommendation in &result.recommendations {
        out.push_str(&format!("  - {}\n", recommendation));
    }
    out
}

fn render_market(market: &MarketAnalysis) -> String {
    let top = if market.top_performers.is_empty() {
        "none".to_string()
    } else {
        market.top_performers.join(", ")
    };
    format!(
        "Total models:     {}\nAverage Q-Score:  {:.2}\nTop performers:   {}\nMint-eligible:    {:.1}%\nTrend:            {}\n",
        market.total_models,
        market.avg_q_score,
        top,
        market.market_liquidity * 100.0,
        market.price_trend
    )
}

/// Render a report as pretty JSON
pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print a report in JSON format
fn print_json(report: &RunReport) {
    match render_json(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results to JSON: {}", e),
    }
}
