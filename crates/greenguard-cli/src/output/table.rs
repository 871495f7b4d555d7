use greenguard_core::classify::outcome::{DashboardResult, EstimateResult};
use greenguard_core::estimators::schema::EstimatorDef;
use greenguard_core::trace::TraceBundle;

use super::chart;

pub fn print_dashboard(result: &DashboardResult, show_trace: bool) {
    println!("=== Total Emission Dashboard ===\n");

    if result.no_match {
        println!("  ❌ No relevant emission data found.\n");
        if show_trace {
            print_trace(&result.trace);
        }
        return;
    }

    let outcomes = result.outcomes();
    let max_name = outcomes.iter().map(|o| o.name.len()).max().unwrap_or(10);

    for outcome in &outcomes {
        if outcome.has_data() {
            println!(
                "  {:<width$}  {} {}  -> {} {}",
                outcome.name,
                outcome.usage,
                outcome.unit_label,
                outcome.emission,
                outcome.gas_label,
                width = max_name
            );
        } else {
            println!("  {:<width$}  No data matched", outcome.name, width = max_name);
        }
    }
    println!();
    println!(
        "  Total: {} units  -> {} kg CO2\n",
        result.total_usage(),
        result.total_emission()
    );

    let rendered = chart::render(&result.chart_series());
    if !rendered.is_empty() {
        println!("Usage vs emission:\n");
        println!("{rendered}");
    }

    if show_trace {
        print_trace(&result.trace);
    }
}

fn print_trace(trace: &TraceBundle) {
    if trace.lines.is_empty() && trace.warnings.is_empty() {
        println!("  No lines matched any category keyword.\n");
        return;
    }

    println!("Line trace:\n");
    for line in &trace.lines {
        println!(
            "  line {}: \"{}\" -> {}",
            line.line_index + 1,
            line.text.trim(),
            line.category
        );
        for step in &line.steps {
            println!("    {}", step.message);
        }
    }
    println!();

    if !trace.warnings.is_empty() {
        println!("  Warnings:");
        for w in &trace.warnings {
            println!("    - {}", w.message);
        }
        println!();
    }
}

pub fn print_estimate(result: &EstimateResult, estimator: &EstimatorDef) {
    println!("=== {} ===\n", result.title);

    match result.estimate {
        Some(estimate) => {
            println!(
                "  Total Units Detected: {} {}",
                estimate.total_units, result.unit_label
            );
            println!(
                "  Estimated Emissions: {} {}\n",
                estimate.emission, result.gas_label
            );
        }
        None => {
            println!("  ❌ {}\n", estimator.not_applicable_message());
        }
    }
}
