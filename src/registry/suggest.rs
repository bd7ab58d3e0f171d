//! "Did you mean" suggestions for mistyped handles and sections.

/// Levenshtein edit distance between two strings, by characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Candidates closest to `input`, all tied at the minimum distance.
///
/// Returns nothing when even the closest candidate is further than
/// `max(2, input_len / 3)` edits away. Comparison ignores case; the result
/// keeps the iteration order of `candidates`.
pub fn most_similar<'a, I>(input: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.to_lowercase();
    let threshold = (input.chars().count() / 3).max(2);

    let mut best = usize::MAX;
    let mut matches: Vec<String> = Vec::new();

    for candidate in candidates {
        let distance = edit_distance(&input, &candidate.to_lowercase());
        if distance < best {
            best = distance;
            matches.clear();
            matches.push(candidate.to_string());
        } else if distance == best && !matches.iter().any(|m| m == candidate) {
            matches.push(candidate.to_string());
        }
    }

    if best <= threshold {
        matches
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("cli-python", "cli-python"), 0);
    }

    #[test]
    fn suggests_single_close_match() {
        let candidates = ["cli-python", "cli-java", "gui-java"];
        assert_eq!(most_similar("cli-pyton", candidates), vec!["cli-python"]);
    }

    #[test]
    fn suggests_all_ties() {
        let candidates = ["cli-java", "gui-java", "lib-cpp"];
        assert_eq!(
            most_similar("xli-java", candidates),
            vec!["cli-java".to_string()]
        );
        assert_eq!(
            most_similar("gli-java", candidates),
            vec!["cli-java".to_string(), "gui-java".to_string()]
        );
    }

    #[test]
    fn nothing_when_too_far() {
        let candidates = ["cli-python", "web-website-python"];
        assert!(most_similar("Aw3s0m3", candidates).is_empty());
    }

    #[test]
    fn comparison_ignores_case() {
        let candidates = ["general", "show"];
        assert_eq!(most_similar("GENERL", candidates), vec!["general"]);
    }

    #[test]
    fn empty_candidates_give_nothing() {
        assert!(most_similar("cli", std::iter::empty()).is_empty());
    }
}
