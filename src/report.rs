//! Report aggregation and rendering.
//!
//! Turns the unordered per-domain results into a [`Report`] sorted by
//! average latency and renders it as a table, JSON, CSV or TSV.

use crate::cli::OutputFormat;
use crate::dns::types::{DomainResult, QuerySettings};
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;
use std::net::SocketAddr;

/// Width of the domain column in table output.
const DOMAIN_WIDTH: usize = 35;

/// Aggregated results of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Per-domain results, ascending by average latency
    pub per_domain: Vec<DomainResult>,
    /// Number of domains with at least one successful query
    pub total_domains: usize,
    /// Mean of the per-domain averages
    pub overall_average_ms: f64,
    /// Domain with the lowest average
    pub fastest: DomainResult,
    /// Domain with the highest average
    pub slowest: DomainResult,
    /// Failed queries across all reported domains
    pub total_errors: usize,
}

impl Report {
    /// Sort the results and compute the summary.
    ///
    /// The overall average is the mean of per-domain averages, not the
    /// mean over every individual sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuccessfulResponses`] if `results` is empty.
    pub fn build(mut results: Vec<DomainResult>) -> Result<Self> {
        // Stable, so equal averages keep their incoming order
        results.sort_by(|a, b| a.avg_ms.partial_cmp(&b.avg_ms).unwrap_or(Ordering::Equal));

        let (fastest, slowest) = match (results.first(), results.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => return Err(Error::NoSuccessfulResponses),
        };

        let total_domains = results.len();
        let overall_average_ms =
            results.iter().map(|r| r.avg_ms).sum::<f64>() / total_domains as f64;
        let total_errors = results.iter().map(|r| r.error_count).sum();

        Ok(Self {
            per_domain: results,
            total_domains,
            overall_average_ms,
            fastest,
            slowest,
            total_errors,
        })
    }
}

/// Parameters of a run, shown alongside the report.
#[derive(Debug, Clone, Serialize)]
pub struct RunInfo {
    /// Nameserver under test
    pub nameserver: SocketAddr,
    /// Record type requested, e.g. "A"
    pub record_type: String,
    /// Sequential queries per domain
    pub queries_per_domain: usize,
    /// Domains sampled concurrently
    pub workers: usize,
    /// Domains submitted, including ones that later failed entirely
    pub domains_tested: usize,
    /// When the run info was created
    pub generated_at: DateTime<Local>,
}

impl RunInfo {
    /// Describe a run over `domains_tested` domains.
    #[must_use]
    pub fn new(settings: &QuerySettings, workers: usize, domains_tested: usize) -> Self {
        Self {
            nameserver: settings.nameserver,
            record_type: settings.record_type.to_string(),
            queries_per_domain: settings.query_count,
            workers,
            domains_tested,
            generated_at: Local::now(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    run: &'a RunInfo,
    #[serde(flatten)]
    report: &'a Report,
}

/// Header printed before the queries start.
#[must_use]
pub fn render_header(info: &RunInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nTesting DNS response times for {} ({} records)\n",
        info.nameserver, info.record_type
    ));
    out.push_str(&format!(
        "Testing {} domains with {} queries each ({} workers)\n",
        info.domains_tested, info.queries_per_domain, info.workers
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');
    out
}

/// Render a report in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &Report, info: &RunInfo, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonReport { run: info, report })?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => render_delimited(report, ','),
        OutputFormat::Tsv => render_delimited(report, '\t'),
    })
}

/// Table plus summary block, latencies with two decimals.
#[must_use]
pub fn render_table(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<DOMAIN_WIDTH$} {:<10} {:<10} {:<10} {:<12} {:<8}\n",
        "Domain", "Avg (ms)", "Min (ms)", "Max (ms)", "Median (ms)", "Errors"
    ));
    out.push_str(&"-".repeat(88));
    out.push('\n');

    for r in &report.per_domain {
        out.push_str(&format!(
            "{:<DOMAIN_WIDTH$} {:<10.2} {:<10.2} {:<10.2} {:<12.2} {:<8}\n",
            r.domain, r.avg_ms, r.min_ms, r.max_ms, r.median_ms, r.error_count
        ));
    }

    out.push_str("\nSummary:\n");
    out.push_str(&"-".repeat(88));
    out.push('\n');
    out.push_str(&format!("Total domains tested: {}\n", report.total_domains));
    out.push_str(&format!(
        "Overall average response time: {:.2} ms\n",
        report.overall_average_ms
    ));
    out.push_str(&format!(
        "Fastest domain: {} ({:.2} ms)\n",
        report.fastest.domain, report.fastest.avg_ms
    ));
    out.push_str(&format!(
        "Slowest domain: {} ({:.2} ms)\n",
        report.slowest.domain, report.slowest.avg_ms
    ));
    out.push_str(&format!("Failed queries: {}\n", report.total_errors));
    out
}

fn render_delimited(report: &Report, sep: char) -> String {
    let mut out = format!(
        "domain{sep}avg_ms{sep}min_ms{sep}max_ms{sep}median_ms{sep}errors\n"
    );
    for r in &report.per_domain {
        out.push_str(&format!(
            "{}{sep}{:.2}{sep}{:.2}{sep}{:.2}{sep}{:.2}{sep}{}\n",
            quote_field(&r.domain, sep),
            r.avg_ms,
            r.min_ms,
            r.max_ms,
            r.median_ms,
            r.error_count
        ));
    }
    out
}

/// Quote a field containing the separator, a quote or a line break.
fn quote_field(field: &str, sep: char) -> String {
    if field.contains([sep, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
