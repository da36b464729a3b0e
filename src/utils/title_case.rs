//! Title Case Utilities
use unicode_segmentation::UnicodeSegmentation;

/// Words kept lower case inside a title (articles, conjunctions and prepositions).
pub const LOWERCASE_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "of", "on", "or",
    "the", "to", "with", "via", "vs", "per",
];

/// Splits `text` into alternating whitespace and non-whitespace chunks.
fn chunks(text: &str) -> Vec<(&str, bool)> {
    let mut result: Vec<(usize, usize, bool)> = Vec::new();
    for (start, token) in text.split_word_bound_indices() {
        let is_space = token.chars().all(char::is_whitespace);
        let end = start + token.len();
        match result.last_mut() {
            Some(last) if last.2 == is_space => last.1 = end,
            _ => result.push((start, end, is_space)),
        }
    }
    result
        .into_iter()
        .map(|(start, end, is_space)| (&text[start..end], is_space))
        .collect()
}

/// Upper-cases the first letter or digit of `word`, keeping the rest as written.
pub fn capitalize(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut done = false;
    for c in word.chars() {
        if !done && c.is_alphanumeric() {
            result.extend(c.to_uppercase());
            done = true;
        } else {
            result.push(c);
        }
    }
    result
}

fn is_lowercase_word(word: &str) -> bool {
    let bare: String = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    LOWERCASE_WORDS.contains(&bare.as_str())
}

/// Converts `text` to title case.
///
/// The first and last words are always capitalized, interior words from
/// [LOWERCASE_WORDS] are lower-cased and every other word is capitalized.
/// Whitespace is kept as is.
pub fn to_title_case(text: &str) -> String {
    let chunks = chunks(text);
    let words: Vec<usize> = chunks
        .iter()
        .enumerate()
        .filter(|(_, (_, is_space))| !is_space)
        .map(|(i, _)| i)
        .collect();
    let (first, last) = match (words.first(), words.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return text.to_string(),
    };
    let mut result = String::with_capacity(text.len());
    for (i, (chunk, is_space)) in chunks.into_iter().enumerate() {
        if is_space {
            result.push_str(chunk);
        } else if i == first || i == last {
            result.push_str(&capitalize(chunk));
        } else if is_lowercase_word(chunk) {
            result.push_str(&chunk.to_lowercase());
        } else {
            result.push_str(&capitalize(chunk));
        }
    }
    result
}

#[test]
fn test_to_title_case() {
    assert_eq!(to_title_case("good morning"), "Good Morning");
    assert_eq!(to_title_case("top albums OF THE year"), "Top Albums of the Year");
    assert_eq!(to_title_case("the end of the"), "The End of The");
    assert_eq!(to_title_case("help & feedback"), "Help & Feedback");
    assert_eq!(to_title_case("open the URL"), "Open the URL");
    assert_eq!(to_title_case("  padded   words "), "  Padded   Words ");
    assert_eq!(to_title_case("today's tasks"), "Today's Tasks");
    assert_eq!(to_title_case("in"), "In");
    assert_eq!(to_title_case(""), "");
    assert_eq!(to_title_case("   "), "   ");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("(hello)"), "(Hello)");
    assert_eq!(capitalize("éclair"), "Éclair");
    assert_eq!(capitalize("iPhone"), "IPhone");
    assert_eq!(capitalize("..."), "...");
}
