//! Blank marker handling for prompt text.

use super::definition::PlayedCard;

/// Count non-overlapping occurrences of `marker` in `text`.
#[must_use]
pub fn count_blanks(text: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    text.matches(marker).count()
}

/// Render a played set into its prompt.
///
/// Each answer replaces the next unfilled marker as `[answer]`, in blank
/// order. Markers left over stay as they are; surplus answers are ignored.
/// Inserted answer text is never rescanned for markers.
///
/// ```
/// use blank_party::cards::{fill_blanks, Card, PlayedCard};
///
/// let answers = vec![
///     PlayedCard::new(Card::private("a", "Cats"), 0),
///     PlayedCard::new(Card::private("b", "soup"), 1),
/// ];
/// let text = fill_blanks("_____ love _____.", "_____", &answers);
/// assert_eq!(text, "[Cats] love [soup].");
/// ```
#[must_use]
pub fn fill_blanks(prompt: &str, marker: &str, answers: &[PlayedCard]) -> String {
    if marker.is_empty() {
        return prompt.to_string();
    }

    let mut ordered: Vec<&PlayedCard> = answers.iter().collect();
    ordered.sort_by_key(|played| played.blank_index);

    let mut out = String::with_capacity(prompt.len());
    let mut rest = prompt;
    for played in ordered {
        let Some(pos) = rest.find(marker) else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push('[');
        out.push_str(&played.card.text);
        out.push(']');
        rest = &rest[pos + marker.len()..];
    }
    out.push_str(rest);
    out
}
