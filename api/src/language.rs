use serde::{Deserialize, Serialize};

/// The two languages the product page ships in. `En` is the default and the
/// fallback for any unrecognized query value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    /// Query-parameter value sent to the content service (`?lang=...`).
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    /// Parse the inbound `?lang` value. Anything other than the two known
    /// codes falls back to English rather than erroring.
    pub fn from_query(value: &str) -> Self {
        match value {
            "bn" => Language::Bn,
            "en" => Language::En,
            _ => Language::En,
        }
    }

    /// Open Graph locale tag.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Bn => "bn_BD",
        }
    }

    /// BCP 47 tag used to select the embedded fluent catalog.
    pub fn bcp47(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Bn => "bn-BD",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parsing_accepts_known_codes() {
        assert_eq!(Language::from_query("en"), Language::En);
        assert_eq!(Language::from_query("bn"), Language::Bn);
    }

    #[test]
    fn query_parsing_falls_back_to_english() {
        assert_eq!(Language::from_query(""), Language::En);
        assert_eq!(Language::from_query("fr"), Language::En);
        assert_eq!(Language::from_query("EN"), Language::En);
    }

    #[test]
    fn locale_tags_match_language() {
        assert_eq!(Language::En.locale_tag(), "en_US");
        assert_eq!(Language::Bn.locale_tag(), "bn_BD");
        assert_eq!(Language::Bn.bcp47(), "bn-BD");
    }
}
