//! Input tokenizer

/// Lowercases a line of input and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
