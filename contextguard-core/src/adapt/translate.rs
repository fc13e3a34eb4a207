//! Offline translation placeholder
//!
//! Nothing is translated locally. The placeholder names the target language
//! and carries the original text, so a caller can show an honest
//! "unavailable" state instead of a wrong translation.

use crate::types::LanguageCode;

/// Build the translation-unavailable placeholder
pub fn translate(text: &str, target: &LanguageCode) -> String {
    format!(
        "[Translation to {} ({}) is not available offline. Original text: {}]",
        target.name(),
        target.as_str(),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_mentions_code_and_text() {
        let fr = LanguageCode::new("fr").unwrap();
        let out = translate("Hello", &fr);
        assert!(out.contains("fr"));
        assert!(out.contains("Hello"));
        assert!(out.contains("French"));
    }

    #[test]
    fn test_unknown_language_uses_code() {
        let nl = LanguageCode::new("NL").unwrap();
        assert_eq!(
            translate("Goedendag", &nl),
            "[Translation to nl (nl) is not available offline. Original text: Goedendag]"
        );
    }
}
