//! Language tags understood by the site.
//!
//! Every page exists twice, once under `/en/` and once under `/zh/`. The
//! rest of the crate only ever deals in these two tags; anything free-form
//! (the `<html lang>` attribute, a value found in local storage) is folded
//! into one of them here.
//!
//! Folding rules:
//! - a *path segment* is a language only if it is exactly `en` or `zh`
//!   (ASCII case-insensitive), see [`Lang::from_segment`];
//! - a *preference* (stored or declared) is Chinese if it starts with `zh`
//!   (`zh`, `zh-CN`, `zh-Hant-TW`, ...) and English otherwise, see
//!   [`Lang::from_preference`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Lowercase code, also used as the path segment and the stored value.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// The other language.
    pub fn counterpart(self) -> Self {
        match self {
            Lang::En => Lang::Zh,
            Lang::Zh => Lang::En,
        }
    }

    /// Exact segment match, ignoring ASCII case.
    pub fn from_segment(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("en") {
            Some(Lang::En)
        } else if segment.eq_ignore_ascii_case("zh") {
            Some(Lang::Zh)
        } else {
            None
        }
    }

    /// Folds a free-form language tag. Never fails: unknown tags are English.
    pub fn from_preference(raw: &str) -> Self {
        let head = raw.get(..2).unwrap_or_default();
        if head.eq_ignore_ascii_case("zh") {
            Lang::Zh
        } else {
            Lang::En
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_swaps() {
        assert_eq!(Lang::En.counterpart(), Lang::Zh);
        assert_eq!(Lang::Zh.counterpart(), Lang::En);
    }

    #[test]
    fn segments_match_exactly() {
        assert_eq!(Lang::from_segment("EN"), Some(Lang::En));
        assert_eq!(Lang::from_segment("Zh"), Some(Lang::Zh));
        assert_eq!(Lang::from_segment("zh-cn"), None);
        assert_eq!(Lang::from_segment("english"), None);
        assert_eq!(Lang::from_segment(""), None);
    }

    #[test]
    fn preferences_fold_by_prefix() {
        assert_eq!(Lang::from_preference("zh"), Lang::Zh);
        assert_eq!(Lang::from_preference("zh-Hant-TW"), Lang::Zh);
        assert_eq!(Lang::from_preference("ZH"), Lang::Zh);
        assert_eq!(Lang::from_preference("en-GB"), Lang::En);
        assert_eq!(Lang::from_preference("fr"), Lang::En);
        assert_eq!(Lang::from_preference("z"), Lang::En);
        // multi-byte input must not split a char boundary
        assert_eq!(Lang::from_preference("中文"), Lang::En);
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Lang::Zh).unwrap(), "\"zh\"");
        let parsed: Lang = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Lang::En);
    }
}
