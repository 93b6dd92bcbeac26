use unicode_segmentation::UnicodeSegmentation;

/// The free-form body of a contact submission.
#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    // Generous, but bounded. The form backend applies its own limits too.
    const MAX_GRAPHEMES: usize = 5000;

    pub fn parse(s: String) -> Result<ContactMessage, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > Self::MAX_GRAPHEMES;

        if is_empty_or_whitespace {
            Err("A message is required.".to_string())
        } else if is_too_long {
            Err(format!(
                "Messages are limited to {} characters.",
                Self::MAX_GRAPHEMES
            ))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
