//! Counterpart-path resolution for the language toggle.
//!
//! Every page of the site lives twice: `/en/<page>` and `/zh/<page>`. The
//! toggle in the header must point at "this page, other language". This module
//! answers that question with plain functions; reading `location`, storage and
//! `<html lang>` happens in [`crate::toggle`], which passes the values in.
//!
//! Rules
//! -----
//! 1. The path is normalised to start with `/` and split into non-empty
//!    segments (so `//en//about.html` and `en/about.html` both become
//!    `["en", "about.html"]`).
//! 2. The first segment equal to `en` (any case) is swapped for `zh`.
//! 3. Failing that, the first segment equal to `zh` (any case) is swapped for
//!    `en`.
//! 4. Unprefixed pages fall back to a guessed current language:
//!    stored preference, then declared document language, then `en`. The
//!    counterpart of that guess is prepended as a new first segment, or for
//!    the site root the result is `/<counterpart>/index.html`.
//!
//! Rules 2–3 are what production pages exercise (every real page is
//! prefixed). Rule 4 only fires on unprefixed deployments; its precedence
//! order has not been confirmed by the site owners.
//!
//! Output is always lowercase for the language segment and never carries a
//! trailing slash.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang::Lang;

/// `/zh` as a whole trailing segment or followed by another segment.
static ZH_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/zh(?:$|/)").expect("valid zh target pattern"));

/// Path of the same page in the other language.
///
/// `stored` and `declared` only matter for unprefixed paths; empty strings
/// count as absent.
pub fn resolve_counterpart_path(
    current_path: &str,
    stored: Option<&str>,
    declared: Option<&str>,
) -> String {
    let mut segments = split_segments(current_path);

    if let Some((index, lang)) = find_language_segment(&segments) {
        segments[index] = lang.counterpart().code();
        return join_segments(&segments);
    }

    let counterpart = fallback_language(stored, declared).counterpart();
    if segments.is_empty() {
        return format!("/{}/index.html", counterpart.code());
    }

    segments.insert(0, counterpart.code());
    join_segments(&segments)
}

/// The language the visitor is looking at right now.
///
/// An explicit path segment wins (`en` before `zh`, mirroring
/// [`resolve_counterpart_path`]); otherwise stored → declared → `en`.
pub fn current_language(current_path: &str, stored: Option<&str>, declared: Option<&str>) -> Lang {
    let segments = split_segments(current_path);
    match find_language_segment(&segments) {
        Some((_, lang)) => lang,
        None => fallback_language(stored, declared),
    }
}

/// Language a toggle navigates to, judged from its href alone.
pub fn classify_target(href: &str) -> Lang {
    if href.contains("/zh/") || ZH_TARGET.is_match(href) {
        Lang::Zh
    } else {
        Lang::En
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn join_segments(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

fn find_language_segment(segments: &[&str]) -> Option<(usize, Lang)> {
    let position = |wanted: Lang| {
        segments
            .iter()
            .position(|seg| Lang::from_segment(seg) == Some(wanted))
            .map(|index| (index, wanted))
    };
    position(Lang::En).or_else(|| position(Lang::Zh))
}

fn fallback_language(stored: Option<&str>, declared: Option<&str>) -> Lang {
    stored
        .filter(|s| !s.is_empty())
        .or(declared.filter(|s| !s.is_empty()))
        .map(Lang::from_preference)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_en_prefix() {
        assert_eq!(
            resolve_counterpart_path("/en/about.html", None, None),
            "/zh/about.html"
        );
    }

    #[test]
    fn swaps_zh_prefix() {
        assert_eq!(
            resolve_counterpart_path("/zh/services/web.html", None, None),
            "/en/services/web.html"
        );
    }

    #[test]
    fn prefix_wins_over_preferences() {
        assert_eq!(
            resolve_counterpart_path("/zh/about.html", Some("zh"), Some("zh")),
            "/en/about.html"
        );
    }

    #[test]
    fn nested_language_segment() {
        assert_eq!(
            resolve_counterpart_path("/project/en/about.html", None, None),
            "/project/zh/about.html"
        );
    }

    #[test]
    fn en_segment_is_found_before_zh() {
        assert_eq!(
            resolve_counterpart_path("/zh/en/x.html", None, None),
            "/zh/zh/x.html"
        );
    }

    #[test]
    fn normalises_slashes() {
        assert_eq!(
            resolve_counterpart_path("en//about.html/", None, None),
            "/zh/about.html"
        );
        assert_eq!(resolve_counterpart_path("/en/", None, None), "/zh");
    }

    #[test]
    fn language_like_segments_are_not_languages() {
        assert_eq!(
            resolve_counterpart_path("/english/zh-cn.html", None, None),
            "/zh/english/zh-cn.html"
        );
    }

    #[test]
    fn root_uses_default_when_nothing_known() {
        assert_eq!(resolve_counterpart_path("/", None, None), "/zh/index.html");
        assert_eq!(resolve_counterpart_path("", None, None), "/zh/index.html");
    }

    #[test]
    fn stored_beats_declared() {
        assert_eq!(
            resolve_counterpart_path("/", Some("zh"), Some("en")),
            "/en/index.html"
        );
        assert_eq!(
            resolve_counterpart_path("/", Some("en"), Some("zh-cn")),
            "/zh/index.html"
        );
    }

    #[test]
    fn empty_stored_falls_through_to_declared() {
        assert_eq!(
            resolve_counterpart_path("/about.html", Some(""), Some("zh-cn")),
            "/en/about.html"
        );
    }

    #[test]
    fn current_language_follows_same_precedence() {
        assert_eq!(current_language("/EN/a.html", Some("zh"), None), Lang::En);
        assert_eq!(current_language("/zh/a.html", None, None), Lang::Zh);
        assert_eq!(current_language("/a.html", None, Some("zh-tw")), Lang::Zh);
        assert_eq!(current_language("/", None, None), Lang::En);
    }

    #[test]
    fn classifies_targets() {
        assert_eq!(classify_target("/zh/about.html"), Lang::Zh);
        assert_eq!(classify_target("https://example.com/zh"), Lang::Zh);
        assert_eq!(classify_target("/site/ZH/index.html"), Lang::Zh);
        assert_eq!(classify_target("/en/about.html"), Lang::En);
        assert_eq!(classify_target("/zhongwen/about.html"), Lang::En);
        assert_eq!(classify_target(""), Lang::En);
    }
}
