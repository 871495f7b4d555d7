use greenguard_core::classify::outcome::ChartSeries;

const BAR_WIDTH: usize = 30;

/// Horizontal usage/emission bars per category, scaled to the largest
/// magnitude across both series. Negative values draw with a different
/// glyph and a leading minus.
pub fn render(series: &ChartSeries) -> String {
    let max = series
        .usage
        .iter()
        .chain(series.emission.iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max == 0.0 {
        return String::new();
    }

    let name_width = series
        .categories
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(10);

    let mut out = String::new();
    for (i, name) in series.categories.iter().enumerate() {
        let usage = series.usage.get(i).copied().unwrap_or(0.0);
        let emission = series.emission.get(i).copied().unwrap_or(0.0);
        out.push_str(&format!(
            "  {:<width$}  usage     {}\n",
            name,
            bar(usage, max),
            width = name_width
        ));
        out.push_str(&format!(
            "  {:<width$}  emission  {}\n",
            "",
            bar(emission, max),
            width = name_width
        ));
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    let len = ((value.abs() / max) * BAR_WIDTH as f64).round() as usize;
    if value < 0.0 {
        format!("-{} {}", "▒".repeat(len.max(1)), value)
    } else if value > 0.0 {
        format!("{} {}", "█".repeat(len.max(1)), value)
    } else {
        "0".to_string()
    }
}
