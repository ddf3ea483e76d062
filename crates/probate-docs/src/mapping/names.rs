use crate::estate::PersonName;

/// Best-effort split of a free-text full name into first / middle / last.
///
/// This is lossy: one token is treated as a first name, two as first and
/// last, and anything longer keeps the first and final tokens and folds the
/// rest into the middle name. Multi-word surnames ("van der Berg") and
/// suffixes ("Jr.") are not recognised; no structure beyond the source tokens
/// is ever invented, and `display()` of the result reproduces the input with
/// whitespace collapsed.
pub fn split_full_name(full_name: &str) -> PersonName {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.as_slice() {
        [] => PersonName::default(),
        [first] => PersonName::new(*first, "", ""),
        [first, last] => PersonName::new(*first, "", *last),
        [first, middle @ .., last] => PersonName::new(*first, middle.join(" "), *last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_by_token_count() {
        assert_eq!(split_full_name(""), PersonName::default());
        assert_eq!(split_full_name("Cher"), PersonName::new("Cher", "", ""));
        assert_eq!(
            split_full_name("Jane Doe"),
            PersonName::new("Jane", "", "Doe")
        );
        assert_eq!(
            split_full_name("  John  Ronald Reuel   Tolkien "),
            PersonName::new("John", "Ronald Reuel", "Tolkien")
        );
    }

    #[test]
    fn display_round_trips_collapsed_input() {
        let source = "Maria  de la Cruz";
        assert_eq!(split_full_name(source).display(), "Maria de la Cruz");
    }
}
