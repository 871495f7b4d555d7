use crate::parsing::parse_numbers;
use serde::{Deserialize, Serialize};

/// Neighbor lookup order when a classified line has no numbers of its own.
pub const NEIGHBOR_OFFSETS: [isize; 4] = [1, -1, 2, -2];

/// Where the numbers attributed to a line were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NumberSource {
    SameLine,
    Neighbor { offset: isize },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedNumbers {
    pub source: NumberSource,
    pub numbers: Vec<f64>,
}

impl LocatedNumbers {
    fn not_found() -> Self {
        LocatedNumbers {
            source: NumberSource::NotFound,
            numbers: Vec::new(),
        }
    }

    pub fn sum(&self) -> f64 {
        self.numbers.iter().sum()
    }
}

/// Find the numbers for `lines[index]`, falling back to neighbor lines.
pub fn locate<S: AsRef<str>>(lines: &[S], index: usize) -> LocatedNumbers {
    let Some(line) = lines.get(index) else {
        return LocatedNumbers::not_found();
    };

    let numbers = parse_numbers(line.as_ref());
    if !numbers.is_empty() {
        return LocatedNumbers {
            source: NumberSource::SameLine,
            numbers,
        };
    }

    for offset in NEIGHBOR_OFFSETS {
        let Some(neighbor) = index
            .checked_add_signed(offset)
            .and_then(|i| lines.get(i))
        else {
            continue;
        };
        let numbers = parse_numbers(neighbor.as_ref());
        if !numbers.is_empty() {
            return LocatedNumbers {
                source: NumberSource::Neighbor { offset },
                numbers,
            };
        }
    }

    LocatedNumbers::not_found()
}

pub fn locate_numbers<S: AsRef<str>>(lines: &[S], index: usize) -> Vec<f64> {
    locate(lines, index).numbers
}
