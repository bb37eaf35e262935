use serde::{Deserialize, Serialize};

/// How letter case is treated when scoring similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    /// Compare raw bytes; `"mkv"` and `"MKV"` are fully dissimilar.
    #[default]
    Sensitive,
    /// Uppercase both inputs before comparing.
    Insensitive,
}

/// Unit-cost Levenshtein distance between the byte strings of `a` and `b`, computed over a
/// full `(len(a) + 1) x (len(b) + 1)` matrix.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (len1, len2) = (a.len(), b.len());

    let mut matrix = vec![vec![0usize; len2 + 1]; len1 + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = matrix[i - 1][j] + 1;
            let insertion = matrix[i][j - 1] + 1;
            let substitution = matrix[i - 1][j - 1] + cost;
            matrix[i][j] = deletion.min(insertion).min(substitution);
        }
    }

    matrix[len1][len2]
}

/// Normalized Levenshtein similarity in `[0, 1]`, case-sensitive.
///
/// Returns `0.0` if either input is empty and `1.0` for identical inputs without running
/// the O(n*m) recurrence.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.len().max(b.len());
    1.0 - distance as f64 / max_len as f64
}

pub fn similarity_with(a: &str, b: &str, mode: CaseMode) -> f64 {
    match mode {
        CaseMode::Sensitive => similarity(a, b),
        CaseMode::Insensitive => similarity(&a.to_ascii_uppercase(), &b.to_ascii_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn distance_of_classic_pairs() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "MKV"), 3);
        assert_eq!(levenshtein_distance("MKV", ""), 3);
        assert_eq!(levenshtein_distance("MKV", "MKV"), 0);
        assert_eq!(levenshtein_distance("MKV", "KV"), 1);
    }

    #[test]
    fn identical_sequences_score_one() {
        assert_eq!(similarity("MKVLLI", "MKVLLI"), 1.0);
        assert_eq!(similarity("A", "A"), 1.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(similarity("", "MKV"), 0.0);
        assert_eq!(similarity("MKV", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn single_substitution_in_three_residues() {
        assert!((similarity("MKV", "MKI") - (1.0 - 1.0 / 3.0)).abs() < EPS);
    }

    #[test]
    fn similarity_is_symmetric() {
        let pairs = [("MKVLLI", "MKLI"), ("ACDE", "WY"), ("GGGG", "GAGA"), ("M", "MM")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn similarity_stays_within_unit_interval() {
        let pairs = [("A", "W"), ("ACDEFG", "Y"), ("MKV", "VKM"), ("AAAA", "AAAAAAAA")];
        for (a, b) in pairs {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a} vs {b} gave {s}");
        }
        assert_eq!(similarity("AAA", "WWW"), 0.0);
    }

    #[test]
    fn default_mode_is_case_sensitive() {
        assert_eq!(similarity("mkv", "MKV"), 0.0);
        assert_eq!(similarity_with("mkv", "MKV", CaseMode::default()), 0.0);
    }

    #[test]
    fn insensitive_mode_uppercases_before_comparing() {
        assert_eq!(similarity_with("mkv", "MKV", CaseMode::Insensitive), 1.0);
        assert!(
            (similarity_with("mkv", "MKI", CaseMode::Insensitive) - (2.0 / 3.0)).abs() < EPS
        );
    }
}
