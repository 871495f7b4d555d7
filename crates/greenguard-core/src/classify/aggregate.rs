use crate::classify::line::match_line;
use crate::classify::locate::locate;
use crate::classify::outcome::{DashboardResult, EmissionResult, UsageTally};
use crate::parsing::{round_to, split_lines};
use crate::registry::{self, EmissionCategory};
use crate::trace::{build_line_trace, missing_numbers_warning, TraceBundle};
use tracing::{debug, info};

/// Decimal places kept on dashboard emissions.
pub const EMISSION_PRECISION: u32 = 2;

/// Negative emissions closer to zero than this are float noise.
pub const NOISE_EPSILON: f64 = 1e-6;

/// Attribute every numeric line of `document_text` to its best-matching
/// category and derive per-category emissions.
pub fn aggregate(document_text: &str) -> DashboardResult {
    let lines = split_lines(document_text);
    let mut usage = UsageTally::new();
    let mut trace = TraceBundle::default();

    for (idx, line) in lines.iter().enumerate() {
        let Some(matched) = match_line(line) else {
            continue;
        };

        let located = locate(lines.as_slice(), idx);
        if located.numbers.is_empty() {
            trace
                .warnings
                .push(missing_numbers_warning(idx, line, matched.category));
        } else {
            usage.add(matched.category, located.sum());
        }

        debug!(
            line = idx + 1,
            category = %matched.category,
            source = ?located.source,
            added = located.sum(),
            "classified line"
        );
        trace
            .lines
            .push(build_line_trace(idx, line, &matched, &located));
    }

    let emissions = compute_emissions(&usage);
    let no_match = usage.is_empty();

    info!(
        lines = lines.len(),
        classified = trace.lines.len(),
        total_usage = usage.total(),
        total_emission = emissions.total(),
        no_match,
        "aggregated document"
    );

    DashboardResult {
        usage,
        emissions,
        no_match,
        trace,
    }
}

pub fn compute_emissions(usage: &UsageTally) -> EmissionResult {
    EmissionResult::from_entries(
        registry::categories()
            .iter()
            .map(|entry| (entry.category, emission_for(entry, usage.get(entry.category)))),
    )
}

/// `round(usage * factor, 2)` with the noise clamp applied.
pub fn emission_for(entry: &EmissionCategory, usage: f64) -> f64 {
    clamp_noise(entry, round_to(usage * entry.factor, EMISSION_PRECISION))
}

/// Zero out tiny negative emissions for non-absorbing categories.
///
/// Absorption categories are left untouched. Negative zero is normalized
/// to zero everywhere.
pub fn clamp_noise(entry: &EmissionCategory, emission: f64) -> f64 {
    if emission == 0.0 {
        return 0.0;
    }
    if !entry.absorbs && emission < 0.0 && emission.abs() < NOISE_EPSILON {
        return 0.0;
    }
    emission
}
