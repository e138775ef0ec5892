/// Normalizes a headword or property: surrounding whitespace is trimmed and
/// the text is case-folded.
///
/// Normalizing an already normalized string returns it unchanged.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Uppercases the first character, the way headwords are printed.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_cyrillic_and_empty() {
        assert_eq!(capitalize("кот"), "Кот");
        assert_eq!(capitalize("cat"), "Cat");
        assert_eq!(capitalize(""), "");
    }
}
