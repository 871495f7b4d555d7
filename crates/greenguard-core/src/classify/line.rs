use crate::model::Category;
use crate::parsing::count_keyword_hits;
use crate::registry;

/// Winning category for one line plus the hit count of every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub category: Category,
    pub hits: [usize; Category::COUNT],
}

impl LineMatch {
    pub fn hit_count(&self, category: Category) -> usize {
        self.hits[category.index()]
    }

    /// Categories that share the winning count, in registry order.
    pub fn tied_with(&self) -> Vec<Category> {
        let best = self.hit_count(self.category);
        Category::ALL
            .into_iter()
            .filter(|c| self.hits[c.index()] == best)
            .collect()
    }
}

/// Keyword hit counts per category, indexed by registry ordinal.
pub fn score_line(line: &str) -> [usize; Category::COUNT] {
    let lowered = line.to_lowercase();
    let mut hits = [0usize; Category::COUNT];

    for entry in registry::categories() {
        hits[entry.category.index()] = entry
            .keywords
            .iter()
            .map(|kw| count_keyword_hits(&lowered, kw))
            .sum();
    }

    hits
}

/// Classify a line, keeping the per-category scores.
///
/// The highest count wins; on a tie the category declared first in the
/// registry wins. Returns `None` when no keyword occurs at all.
pub fn match_line(line: &str) -> Option<LineMatch> {
    let hits = score_line(line);

    let mut best: Option<(Category, usize)> = None;
    for category in Category::ALL {
        let count = hits[category.index()];
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((category, count)),
        }
    }

    best.map(|(category, _)| LineMatch { category, hits })
}

pub fn classify_line(line: &str) -> Option<Category> {
    match_line(line).map(|m| m.category)
}
