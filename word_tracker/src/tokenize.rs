/// Splits a line of text into lowercase words
///
/// Every character that is neither an ASCII letter nor a space is dropped
/// before splitting, so `"Don't stop!"` becomes `["dont", "stop"]`. Runs of
/// spaces never produce empty words.
pub fn words(line: &str) -> Vec<String> {
    let cleaned: String = line.chars()
        .filter(|&c| c.is_ascii_alphabetic() || c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    cleaned.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
