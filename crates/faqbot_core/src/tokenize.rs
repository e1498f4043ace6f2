/// Splits free text into lower-cased word tokens.
///
/// Anything that is not an ASCII word character (`[A-Za-z0-9_]`) or whitespace
/// becomes a separator, and tokens shorter than two chars are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}
