//! Text cleaning for vectorization.
//!
//! # Examples
//!
//! ```
//! use newsline::analysis::clean_text;
//!
//! assert_eq!(clean_text("Stocks RALLY, on earnings!"), "stocks rally on earnings");
//! assert_eq!(clean_text("   \t  "), "");
//! ```

/// Normalize raw article text before tokenization.
///
/// Lowercases, replaces every non-alphanumeric character with a space, and
/// collapses runs of whitespace into single spaces. The result is trimmed,
/// so whitespace-only input becomes the empty string.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }

    while out.ends_with(' ') {
        out.pop();
    }

    out
}
