//! Compiled line patterns for the recognized diagram constructs.
//!
//! Every pattern is anchored at both ends and is matched against an
//! already-trimmed line.

use regex::Regex;
use std::sync::OnceLock;

use super::types::{GROUP_KEYWORDS, PARTICIPANT_KINDS};

static ACTIVATE_REGEX: OnceLock<Regex> = OnceLock::new();
static DEACTIVATE_REGEX: OnceLock<Regex> = OnceLock::new();
static DIVIDER_REGEX: OnceLock<Regex> = OnceLock::new();
static GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
static GROUP_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
static BOX_START_REGEX: OnceLock<Regex> = OnceLock::new();
static PARTICIPANT_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
static PARTICIPANT_REGEX: OnceLock<Regex> = OnceLock::new();
static ARROW_REGEX: OnceLock<Regex> = OnceLock::new();

/// `activate <ref>`, with an optional trailing color that is ignored.
pub fn activate_regex() -> &'static Regex {
    ACTIVATE_REGEX.get_or_init(|| {
        Regex::new(r"^activate\s+(\S+?)(?:\s+#\w+)?$").expect("Failed to compile activate regex")
    })
}

/// `deactivate <ref>`
pub fn deactivate_regex() -> &'static Regex {
    DEACTIVATE_REGEX.get_or_init(|| {
        Regex::new(r"^deactivate\s+(\S+)$").expect("Failed to compile deactivate regex")
    })
}

/// `== label ==`
pub fn divider_regex() -> &'static Regex {
    DIVIDER_REGEX.get_or_init(|| {
        Regex::new(r"^==\s*(.+?)\s*==$").expect("Failed to compile divider regex")
    })
}

/// `<keyword> <rest>` where keyword is one of [`GROUP_KEYWORDS`].
pub fn group_regex() -> &'static Regex {
    GROUP_REGEX.get_or_init(|| {
        let pattern = format!(r"^({})\s+(.+)$", GROUP_KEYWORDS.join("|"));
        Regex::new(&pattern).expect("Failed to compile group regex")
    })
}

/// Leading color of a group label: hex (`#abc`, `#aabbcc`) or named (`#Gold`).
pub fn group_color_regex() -> &'static Regex {
    GROUP_COLOR_REGEX.get_or_init(|| {
        Regex::new(
            r"(?x)
            ^(?:
                \#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b   # hex form
                |
                \#([A-Za-z]\w*)                         # named form
            )",
        )
        .expect("Failed to compile group color regex")
    })
}

/// `box`, `box Name`, `box "Quoted name"`, each with an optional `#color`.
pub fn box_start_regex() -> &'static Regex {
    BOX_START_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?x)
            ^box
            (?:\s+(?:"([^"]*)"|([^"\#\s][^"\#]*?)))?   # quoted or bare name
            (?:\s*(\#\w+))?                             # color
            \s*$"#,
        )
        .expect("Failed to compile box regex")
    })
}

/// Inline ` #color` annotation on a participant declaration.
pub fn participant_color_regex() -> &'static Regex {
    PARTICIPANT_COLOR_REGEX.get_or_init(|| {
        Regex::new(r"\s+#\w+").expect("Failed to compile participant color regex")
    })
}

/// `<kind> <name> [as <alias>] [order <n>]`
pub fn participant_regex() -> &'static Regex {
    PARTICIPANT_REGEX.get_or_init(|| {
        let pattern = format!(
            r#"^({})\s+("[^"]+"|[^\s"]+)(?:\s+as\s+([^\s"]+))?(?:\s+order\s+(-?\d+))?$"#,
            PARTICIPANT_KINDS.join("|")
        );
        Regex::new(&pattern).expect("Failed to compile participant regex")
    })
}

/// `<left> <arrow> <right> [operators] [: text]`
pub fn arrow_regex() -> &'static Regex {
    ARROW_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?x)
            ^("[^"]+"|[\w.]+)                     # left endpoint
            \s*
            (<{1,2}-{1,2}>{0,2}|-{1,2}>{1,2})     # arrow glyphs
            \s*
            ("[^"]+"|[\w.]+)                      # right endpoint
            \s*
            ((?:\+\+|--|\*\*|!!)*)                # lifecycle operators
            \s*
            (?::\s*(.*))?                         # message text
            $"#,
        )
        .expect("Failed to compile arrow regex")
    })
}
