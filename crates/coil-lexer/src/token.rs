/// A recognized element name.
///
/// Carries the validated begin+body text of the name rule. The `:`
/// delimiter (and any whitespace before it) was consumed from the stream
/// but is not part of the text. Non-empty by construction: the lead-in
/// character is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameToken {
    pub text: String,
}

impl NameToken {
    pub fn new(text: String) -> Self {
        debug_assert!(!text.is_empty(), "name token is never empty");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
