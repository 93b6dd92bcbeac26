use unicode_segmentation::UnicodeSegmentation;

/// The sender's full name, as entered in the contact form.
#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Accepts any non-empty name of at most 256 graphemes that carries no
    /// markup characters. Anything else never leaves the view layer.
    pub fn parse(s: String) -> Result<ContactName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters =
            s.chars().any(|c| forbidden_characters.contains(&c));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid contact name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
