use regex::Regex;
use std::sync::LazyLock;

/// Free text followed by one trailing `[a, b, c]` group.
///
/// The lazy title and bracket-free group mean only the last group on the
/// line is taken as labels.
static LABELLED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)(?P<title>.*?)\s*\[(?P<labels>[^\[\]]*)\]$")
        .expect("label pattern is valid")
});

/// Splits raw line content into a title and its labels.
///
/// Label items are trimmed and empty items are discarded. Content without a
/// trailing bracket group is returned whole as the title.
pub fn split_labels(content: &str) -> (String, Vec<String>) {
    match LABELLED_LINE.captures(content) {
        Some(caps) => {
            let title = caps["title"].trim().to_string();
            let labels = caps["labels"]
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            (title, labels)
        }
        None => (content.to_string(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Child1 [L1, L2]", "Child1", &["L1", "L2"])]
    #[case("Child1 [L1,L2]", "Child1", &["L1", "L2"])]
    #[case("Child1[ L1 ]", "Child1", &["L1"])]
    #[case("Plain title", "Plain title", &[])]
    #[case("Empty group []", "Empty group", &[])]
    #[case("Gaps [a, , b]", "Gaps", &["a", "b"])]
    #[case("Dupes [a, a]", "Dupes", &["a", "a"])]
    #[case("See [note] then [x, y]", "See [note] then", &["x", "y"])]
    #[case("Trailing text [x] after", "Trailing text [x] after", &[])]
    #[case("Unclosed [x", "Unclosed [x", &[])]
    #[case("[only, labels]", "", &["only", "labels"])]
    fn test_split_labels(#[case] input: &str, #[case] title: &str, #[case] labels: &[&str]) {
        let (t, l) = split_labels(input);
        assert_eq!(t, title);
        assert_eq!(l, labels.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_label_order_preserved() {
        let (_, labels) = split_labels("Topic [zeta, alpha, mid]");
        assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
    }
}
