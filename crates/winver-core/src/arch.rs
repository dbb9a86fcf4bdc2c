//! Architecture classification from the registry's build-metadata label.
//!
//! The label (`BuildLabEx`) looks like `19041.1.amd64fre.vb_release.191206-1406`.
//! Classification is an ordered rule table evaluated first-match-wins, so
//! the policy can be read and tested as data.

/// Tag assigned when the label carries no recognizable architecture.
pub const UNKNOWN_ARCH: &str = "unknown";

/// Predicate half of a classification rule.
enum Match {
    /// The label contains the given substring.
    Contains(&'static str),
    /// The label is the empty string.
    Empty,
    /// Always matches.
    Any,
}

impl Match {
    fn matches(&self, label: &str) -> bool {
        match self {
            Match::Contains(needle) => label.contains(needle),
            Match::Empty => label.is_empty(),
            Match::Any => true,
        }
    }
}

/// Outcome half of a classification rule.
enum Outcome {
    /// A fixed tag.
    Tag(&'static str),
    /// The label's third dot-separated segment, verbatim.
    ThirdSegment,
}

impl Outcome {
    fn apply(&self, label: &str) -> String {
        match self {
            Outcome::Tag(tag) => (*tag).to_string(),
            Outcome::ThirdSegment => third_segment(label),
        }
    }
}

/// Ordered classification rules, first match wins. The `amd64` check
/// precedes the `x86` check, so a label containing both classifies as
/// `amd64`.
const RULES: &[(Match, Outcome)] = &[
    (Match::Contains("amd64"), Outcome::Tag("amd64")),
    (Match::Contains("x86"), Outcome::Tag("x86")),
    (Match::Empty, Outcome::Tag(UNKNOWN_ARCH)),
    (Match::Any, Outcome::ThirdSegment),
];

/// Derives a normalized architecture tag from a build-metadata label.
///
/// Returns `amd64`, `x86`, `unknown`, or the label's third dot-separated
/// segment verbatim. The result is never empty.
pub fn classify_architecture(label: &str) -> String {
    for (matcher, outcome) in RULES {
        if matcher.matches(label) {
            return outcome.apply(label);
        }
    }
    // The Any rule always matches; this is never reached.
    UNKNOWN_ARCH.to_string()
}

/// Labels with fewer than three segments, or an empty third segment,
/// classify as unknown instead of faulting or producing an empty tag.
fn third_segment(label: &str) -> String {
    match label.split('.').nth(2) {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => UNKNOWN_ARCH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amd64_substring_wins() {
        assert_eq!(
            classify_architecture("19041.1.amd64fre.vb_release.191206-1406"),
            "amd64"
        );
    }

    #[test]
    fn amd64_check_precedes_x86_check() {
        // Both substrings present: the amd64 rule is ordered first.
        assert_eq!(classify_architecture("amd64fre.x86compat.extra"), "amd64");
    }

    #[test]
    fn x86_substring_matches_when_no_amd64() {
        assert_eq!(
            classify_architecture("x86fre.winmain.160101-0600"),
            "x86"
        );
    }

    #[test]
    fn empty_label_is_unknown() {
        assert_eq!(classify_architecture(""), UNKNOWN_ARCH);
    }

    #[test]
    fn fallback_takes_third_segment_verbatim() {
        assert_eq!(
            classify_architecture("22000.1.arm64fre.co_release.210604-1628"),
            "arm64fre"
        );
    }

    #[test]
    fn fallback_with_two_segments_is_unknown() {
        assert_eq!(classify_architecture("vb_release.190318-1202"), UNKNOWN_ARCH);
    }

    #[test]
    fn fallback_with_one_segment_is_unknown() {
        assert_eq!(classify_architecture("oddball"), UNKNOWN_ARCH);
    }

    #[test]
    fn result_is_never_empty() {
        for label in ["", "a", "a.b", "a.b.c", "amd64", "x86", "1.2..4"] {
            assert!(
                !classify_architecture(label).is_empty(),
                "empty tag for label: {:?}",
                label
            );
        }
    }

    #[test]
    fn empty_third_segment_is_unknown() {
        assert_eq!(classify_architecture("a.b..d"), UNKNOWN_ARCH);
    }
}
