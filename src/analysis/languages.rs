use std::collections::HashMap;

use crate::models::{LanguageStat, Repository};

/// Counts repositories per primary language. Sorted by count, descending;
/// languages with equal counts keep the order in which they were first seen.
pub fn calculate_language_stats(repos: &[Repository]) -> Vec<LanguageStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for language in repos.iter().filter_map(|r| r.primary_language()) {
        match index.get(language) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(language, counts.len());
                counts.push((language, 1));
            }
        }
    }

    let total: u32 = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<LanguageStat> = counts
        .into_iter()
        .map(|(name, count)| LanguageStat {
            name: name.to_string(),
            count,
            percentage: (count as f64 / total as f64 * 100.0).round() as u32,
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
