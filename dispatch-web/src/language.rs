use std::collections::HashMap;

/// Language the provider starts with.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        "en",
        LanguageInfo {
            code: "en",
            translation: include_str!("../translations/en.json"),
        },
    )])
}

/// Translation tables keyed by language code, as the i18n provider wants them.
pub fn translations() -> HashMap<&'static str, &'static str> {
    supported_languages()
        .into_values()
        .map(|info| (info.code, info.translation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_supported() {
        assert!(supported_languages().contains_key(DEFAULT_LANGUAGE));
        assert_eq!(translations().len(), supported_languages().len());
    }

    #[test]
    fn test_translations_are_valid_json() {
        for (code, info) in supported_languages() {
            assert!(
                serde_json::from_str::<serde_json::Value>(info.translation).is_ok(),
                "{code} translation is not valid JSON"
            );
        }
    }
}
