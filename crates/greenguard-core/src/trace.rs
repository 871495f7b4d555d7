use crate::classify::line::LineMatch;
use crate::classify::locate::{LocatedNumbers, NumberSource};
use crate::model::Category;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    KeywordCount,
    TieBreak,
    NumberLookup,
    Accumulate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryHits {
    pub category: Category,
    pub hits: usize,
}

/// How one classified line contributed to the tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineTrace {
    pub line_index: usize,
    pub text: String,
    pub category: Category,
    /// Non-zero hit counts only, in registry order.
    pub hits: Vec<CategoryHits>,
    pub source: NumberSource,
    pub numbers: Vec<f64>,
    pub added: f64,
    pub steps: Vec<TraceStep>,
}

impl LineTrace {
    pub fn contributed(&self) -> bool {
        !self.numbers.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_index: Option<usize>,
    pub message: String,
    pub severity: TraceSeverity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBundle {
    pub trace_schema_version: String,
    pub lines: Vec<LineTrace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

impl Default for TraceBundle {
    fn default() -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            lines: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

pub fn build_line_trace(
    line_index: usize,
    text: &str,
    matched: &LineMatch,
    located: &LocatedNumbers,
) -> LineTrace {
    let hits: Vec<CategoryHits> = Category::ALL
        .into_iter()
        .filter(|c| matched.hit_count(*c) > 0)
        .map(|c| CategoryHits {
            category: c,
            hits: matched.hit_count(c),
        })
        .collect();

    let mut steps = vec![TraceStep {
        step_type: TraceStepType::KeywordCount,
        message: format!(
            "Keyword hits: {}",
            hits.iter()
                .map(|h| format!("{}={}", h.category, h.hits))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }];

    let tied = matched.tied_with();
    if tied.len() > 1 {
        steps.push(TraceStep {
            step_type: TraceStepType::TieBreak,
            message: format!(
                "Tie at {} hits between {}; {} comes first in the registry",
                matched.hit_count(matched.category),
                tied.iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", "),
                matched.category
            ),
        });
    }

    steps.push(TraceStep {
        step_type: TraceStepType::NumberLookup,
        message: match located.source {
            NumberSource::SameLine => {
                format!("Found {} number(s) on the line", located.numbers.len())
            }
            NumberSource::Neighbor { offset } => format!(
                "No numbers on the line; took {} number(s) from line {:+}",
                located.numbers.len(),
                offset
            ),
            NumberSource::NotFound => "No numbers on the line or within 2 lines".to_string(),
        },
    });

    let added = located.sum();
    if !located.numbers.is_empty() {
        steps.push(TraceStep {
            step_type: TraceStepType::Accumulate,
            message: format!("Added {} to {}", added, matched.category),
        });
    }

    LineTrace {
        line_index,
        text: text.to_string(),
        category: matched.category,
        hits,
        source: located.source,
        numbers: located.numbers.clone(),
        added,
        steps,
    }
}

pub fn missing_numbers_warning(line_index: usize, text: &str, category: Category) -> TraceWarning {
    TraceWarning {
        line_index: Some(line_index),
        message: format!(
            "Line {} matched {} but no numbers were found nearby: '{}'",
            line_index + 1,
            category,
            text.trim()
        ),
        severity: TraceSeverity::Info,
    }
}
