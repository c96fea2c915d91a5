use crate::extraction::island::Island;

/// An island with its ranking statistics.
///
/// `score = entry_count × uniqueness²` rewards volume and name diversity, so a
/// summary table (one row per employee) outranks a detail log that repeats a few
/// names many times.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
    pub island: Island,
    pub entry_count: usize,
    pub distinct_names: usize,
    /// distinct_names / entry_count
    pub uniqueness: f64,
    pub score: f64,
}

impl ScoredCandidate {
    /// Scores an island, or returns None if it has fewer than `min_entries` rows.
    pub fn score(island: Island, min_entries: usize) -> Option<Self> {
        let entry_count = island.len();
        if entry_count == 0 || entry_count < min_entries {
            return None;
        }
        let distinct_names = island.distinct_names();
        let uniqueness = distinct_names as f64 / entry_count as f64;
        Some(Self {
            island,
            entry_count,
            distinct_names,
            uniqueness,
            score: entry_count as f64 * uniqueness * uniqueness,
        })
    }
}

/// Picks the first candidate with the maximum score. Later candidates must score
/// strictly higher to win, so ties go to the earliest in scan order.
pub fn select_best(candidates: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    let mut best: Option<&ScoredCandidate> = None;
    for candidate in candidates {
        if best.map(|best| candidate.score > best.score).unwrap_or(true) {
            best = Some(candidate);
        }
    }
    best
}

/// Orders candidates by descending score; equal scores keep scan order.
pub fn rank(candidates: &[ScoredCandidate]) -> Vec<&ScoredCandidate> {
    let mut ranked: Vec<&ScoredCandidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::island::IslandEntry;

    fn island(column: &str, names: &[&str]) -> Island {
        Island {
            name_column: column.to_owned(),
            hours_column: "Hours".to_owned(),
            name_column_index: 0,
            hours_column_index: 1,
            entries: names
                .iter()
                .enumerate()
                .map(|(row, name)| IslandEntry { row, name: name.to_string(), hours: 8.0 })
                .collect(),
        }
    }

    #[test]
    fn score_rewards_uniqueness() {
        let summary = ScoredCandidate::score(island("A", &["Ann", "Bob", "Cid", "Dee"]), 2).unwrap();
        let log = ScoredCandidate::score(island("B", &["Ann", "Ann", "Bob", "Bob"]), 2).unwrap();
        assert_eq!(summary.score, 4.0);
        assert_eq!(log.uniqueness, 0.5);
        assert_eq!(log.score, 1.0);
        assert!(summary.score > log.score);
    }

    #[test]
    fn equal_counts_order_by_uniqueness() {
        let names = [["Ann", "Bob", "Cid"], ["Ann", "Bob", "Bob"], ["Ann", "Ann", "Ann"]];
        let scores: Vec<f64> = names
            .iter()
            .map(|names| ScoredCandidate::score(island("A", names), 2).unwrap().score)
            .collect();
        assert!(scores[0] > scores[1]);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn small_islands_are_not_scored() {
        assert!(ScoredCandidate::score(island("A", &["Ann"]), 2).is_none());
        assert!(ScoredCandidate::score(island("A", &[]), 0).is_none());
    }

    #[test]
    fn ties_go_to_first_in_scan_order() {
        let candidates = vec![
            ScoredCandidate::score(island("First", &["Ann", "Bob"]), 2).unwrap(),
            ScoredCandidate::score(island("Second", &["Cid", "Dee"]), 2).unwrap(),
        ];
        assert_eq!(select_best(&candidates).unwrap().island.name_column, "First");
        assert_eq!(rank(&candidates)[0].island.name_column, "First");
    }

    #[test]
    fn rank_orders_descending() {
        let candidates = vec![
            ScoredCandidate::score(island("Small", &["Ann", "Bob"]), 2).unwrap(),
            ScoredCandidate::score(island("Large", &["Ann", "Bob", "Cid"]), 2).unwrap(),
        ];
        let ranked = rank(&candidates);
        assert_eq!(ranked[0].island.name_column, "Large");
        assert_eq!(select_best(&candidates).unwrap().island.name_column, "Large");
        assert!(select_best(&[]).is_none());
    }
}
