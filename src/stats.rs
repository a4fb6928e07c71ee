use serde::Serialize;

use crate::analyzers::utility::{mean, min_max, sample_stddev};

/// Summary of one numeric column.
///
/// `count` is the number of values that parsed; when it is zero every other
/// field is zero as well.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stdev: f64,
}

impl ColumnStats {
    pub fn from_values(values: &[f64]) -> Self {
        let Some((min, max)) = min_max(values) else {
            return Self::default();
        };
        let avg = mean(values);

        ColumnStats {
            count: values.len(),
            min,
            max,
            mean: avg,
            stdev: sample_stddev(values, avg),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Occurrences of each category, in the order categories were first seen.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CategoryTally {
    entries: Vec<(String, usize)>,
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `category`.
    pub fn increment(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, v)| v).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_empty() {
        let stats = ColumnStats::from_values(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats, ColumnStats::default());
    }

    #[test]
    fn test_from_values_single() {
        let stats = ColumnStats::from_values(&[42.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.stdev, 0.0);
    }

    #[test]
    fn test_from_values_speed_column() {
        let stats = ColumnStats::from_values(&[10.0, 20.0]);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 20.0);
        assert_eq!(stats.mean, 15.0);
        assert_eq!(format!("{:.2}", stats.stdev), "7.07");
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally = CategoryTally::new();
        tally.increment("male");
        tally.increment("female");
        tally.increment("male");

        let entries: Vec<_> = tally.iter().collect();
        assert_eq!(entries, vec![("male", 2), ("female", 1)]);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.get("female"), Some(1));
        assert_eq!(tally.get("other"), None);
    }
}
