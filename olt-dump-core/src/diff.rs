//! Line-level set comparison helpers for before/after block diffs.
//!
//! Matching is by exact text after trimming; blank lines are ignored.

/// Lines of `left` with no exact-text counterpart in `right`, in `left`
/// order.
pub fn lines_missing_from(left: &[String], right: &[String]) -> Vec<String> {
    let right: Vec<&str> = right.iter().map(|line| line.trim()).collect();
    left.iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !right.contains(line))
        .map(ToOwned::to_owned)
        .collect()
}

/// Lines of `after` that are neither present in `before` nor accepted by the
/// `allowed` predicate, in `after` order.
pub fn unexpected_lines<F>(after: &[String], before: &[String], allowed: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let before: Vec<&str> = before.iter().map(|line| line.trim()).collect();
    after
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !before.contains(line) && !allowed(line))
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_lines_match_on_trimmed_text() {
        let left = lines(&["iphost 1 vlan 100", "  iphost 1 mode pppoe", ""]);
        let right = lines(&["iphost 1 mode pppoe"]);
        assert_eq!(lines_missing_from(&left, &right), vec!["iphost 1 vlan 100"]);
    }

    #[test]
    fn unexpected_lines_respect_the_allow_list() {
        let after = lines(&["iphost 1 vlan 100", "iphost 2 vlan 2989", "rogue line"]);
        let before = lines(&["iphost 1 vlan 100"]);
        let out = unexpected_lines(&after, &before, |line| line.starts_with("iphost 2"));
        assert_eq!(out, vec!["rogue line"]);
    }

    #[test]
    fn identical_sides_produce_empty_diffs() {
        let side = lines(&["a", "b"]);
        assert!(lines_missing_from(&side, &side).is_empty());
        assert!(unexpected_lines(&side, &side, |_| false).is_empty());
    }
}
