//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads and enriches the sales table
//! - runs statistics + aggregation
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::chart::SvgChart;
use crate::cli::{Command, GenArgs, RankArgs, ReportArgs};
use crate::domain::{GenConfig, GroupKey, ReportConfig, ReportFile};
use crate::error::AppError;

pub mod pipeline;

/// Size of exported SVG charts.
const SVG_SIZE: (u32, u32) = (800, 600);

/// Entry point for the `sales` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `sales` (and `sales --no-plot`, etc.) to behave like
    // `sales report ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Stats(args) => handle_stats(args),
        Command::Rank(args) => handle_rank(args),
        Command::Gen(args) => handle_gen(args),
    }
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let run = pipeline::run_report(&config)?;

    print!("{}", crate::report::format_run_summary(&run.ingest, &config));
    print!("{}", crate::report::format_describe(&run.stats));

    println!();
    print!("{}", crate::report::format_aggregate(GroupKey::Region, &run.by_region));
    if config.plot && !run.by_region.is_empty() {
        println!();
        print!("{}", crate::plot::render_bar_chart(&run.by_region, config.plot_width));
    }

    println!();
    print!("{}", crate::report::format_aggregate(GroupKey::Product, &run.by_product));

    if config.plot {
        if let Some(hist) = &run.units_hist {
            println!();
            println!("Units sold distribution:");
            print!("{}", crate::plot::render_histogram(hist, config.plot_width));
        }
    }

    if let Some(dir) = &config.chart_dir {
        write_svg_charts(dir, &run)?;
    }

    if let Some(path) = &config.export_rows {
        crate::io::export::write_enriched_csv(path, &run.enriched)?;
    }
    if let Some(path) = &config.export_report {
        let report = ReportFile {
            tool: "sales".to_string(),
            source: config.csv_path.clone(),
            stats: run.stats.clone(),
            by_region: run.by_region.clone(),
            by_product: run.by_product.clone(),
        };
        crate::io::export::write_report_json(path, &report)?;
    }

    Ok(())
}

fn handle_stats(args: ReportArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let run = pipeline::run_report(&config)?;

    print!("{}", crate::report::format_run_summary(&run.ingest, &config));
    print!("{}", crate::report::format_describe(&run.stats));
    Ok(())
}

fn handle_rank(args: RankArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args.report);
    let run = pipeline::run_report(&config)?;

    let groups = match args.by {
        GroupKey::Region => &run.by_region,
        GroupKey::Product => &run.by_product,
    };
    print!("{}", crate::report::format_aggregate(args.by, groups));
    Ok(())
}

fn handle_gen(args: GenArgs) -> Result<(), AppError> {
    let config = GenConfig {
        out_path: args.out,
        rows: args.rows,
        seed: args.seed,
        start_date: args.start_date,
        days: args.days,
    };
    let rows = crate::data::generate_sample(&config)?;
    crate::data::write_sample_csv(&config.out_path, &rows)?;
    println!("Wrote {} rows to '{}'", rows.len(), config.out_path.display());
    Ok(())
}

fn write_svg_charts(dir: &std::path::Path, run: &pipeline::RunOutput) -> Result<(), AppError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::render(format!(
            "Failed to create chart directory '{}': {e}",
            dir.display()
        ))
    })?;

    let bar = SvgChart::new(dir.join("revenue_by_region.svg"), SVG_SIZE.0, SVG_SIZE.1);
    bar.render_bar(&run.by_region, "Total Revenue by Region", "Region", "Revenue")?;
    println!("Chart written to '{}'", bar.path().display());

    if let Some(hist) = &run.units_hist {
        let chart = SvgChart::new(dir.join("units_sold_hist.svg"), SVG_SIZE.0, SVG_SIZE.1);
        chart.render_histogram(hist, "Distribution of Units Sold", "Units Sold", "Frequency")?;
        println!("Chart written to '{}'", chart.path().display());
    }

    Ok(())
}

pub fn report_config_from_args(args: &ReportArgs) -> ReportConfig {
    ReportConfig {
        csv_path: args.csv.clone(),
        bins: args.bins,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        chart_dir: args.charts.clone(),
        export_rows: args.export.clone(),
        export_report: args.export_report.clone(),
    }
}

/// Rewrite argv so `sales` defaults to `sales report`.
///
/// Rules:
/// - `sales`                    -> `sales report`
/// - `sales --no-plot ...`      -> `sales report --no-plot ...`
/// - `sales --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "stats" | "rank" | "gen");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_report() {
        assert_eq!(rewrite_args(argv(&["sales"])), argv(&["sales", "report"]));
    }

    #[test]
    fn leading_flag_is_treated_as_report_flag() {
        assert_eq!(
            rewrite_args(argv(&["sales", "--no-plot"])),
            argv(&["sales", "report", "--no-plot"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite_args(argv(&["sales", "gen"])), argv(&["sales", "gen"]));
        assert_eq!(rewrite_args(argv(&["sales", "--help"])), argv(&["sales", "--help"]));
    }
}
