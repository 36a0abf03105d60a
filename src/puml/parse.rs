//! Single-line entity parsers.
//!
//! Each parser takes one trimmed line and returns the structured value it
//! describes, or `None` when the line is something else. Parsers hold no
//! state; block constructs are tracked by the transformer.

use std::borrow::Cow;

use super::patterns;
use super::types::{ArrowEvent, DiagramBox, GroupEvent, Participant};

/// Remove one pair of surrounding double quotes, if present.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Reference named by `activate <ref>`.
pub fn parse_activate(line: &str) -> Option<&str> {
    patterns::activate_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Reference named by `deactivate <ref>`.
pub fn parse_deactivate(line: &str) -> Option<&str> {
    patterns::deactivate_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Label of a `== label ==` divider.
pub fn parse_divider(line: &str) -> Option<&str> {
    patterns::divider_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a group opener such as `alt #red some condition`.
///
/// A leading color token is split off the label (with its `#` removed);
/// double quotes in the remaining label are escaped.
pub fn parse_group(line: &str) -> Option<GroupEvent> {
    let caps = patterns::group_regex().captures(line)?;
    let keyword = caps[1].to_uppercase();
    let rest = caps[2].trim();

    let (color, text) = match patterns::group_color_regex().captures(rest) {
        Some(color_caps) => {
            let color = color_caps
                .get(1)
                .or_else(|| color_caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let end = color_caps.get(0).map_or(0, |m| m.end());
            (color, rest[end..].trim())
        }
        None => ("", rest),
    };

    Some(GroupEvent {
        keyword,
        color: color.to_string(),
        text: text.replace('"', "\\\""),
    })
}

/// Parse a `box` opener into an empty [`DiagramBox`].
pub fn parse_box_start(line: &str) -> Option<DiagramBox> {
    let caps = patterns::box_start_regex().captures(line)?;
    let name = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str().trim());
    let color = caps
        .get(3)
        .map_or("", |m| m.as_str().trim_start_matches('#'));
    Some(DiagramBox::new(name, color))
}

/// Drop inline ` #color` annotations so the declaration grammar can match.
///
/// Text inside the quoted name is left alone: `"Issue #42"` is a label, not
/// a color.
pub fn strip_participant_color(line: &str) -> Cow<'_, str> {
    let tail_start = line
        .find('"')
        .and_then(|open| line[open + 1..].find('"').map(|close| open + close + 2))
        .unwrap_or(0);
    let (head, tail) = line.split_at(tail_start);
    match patterns::participant_color_regex().replace_all(tail, "") {
        Cow::Borrowed(_) => Cow::Borrowed(line),
        Cow::Owned(stripped) => Cow::Owned(format!("{}{}", head, stripped)),
    }
}

/// Parse a participant declaration. The line must already be free of
/// color annotations (see [`strip_participant_color`]).
pub fn parse_participant(line: &str) -> Option<Participant> {
    let caps = patterns::participant_regex().captures(line)?;
    let name = unquote(&caps[2]);
    if name.is_empty() {
        return None;
    }
    Some(Participant {
        kind: caps[1].to_string(),
        name: name.to_string(),
        alias: caps.get(3).map(|m| m.as_str().to_string()),
        order: caps.get(4).map(|m| m.as_str().to_string()),
    })
}

/// Parse a message line such as `A -> B ++ : "hello"`.
///
/// Quote characters are deleted from the message text.
pub fn parse_arrow(line: &str) -> Option<ArrowEvent> {
    let caps = patterns::arrow_regex().captures(line)?;
    Some(ArrowEvent {
        left: caps[1].to_string(),
        arrow: caps[2].to_string(),
        right: caps[3].to_string(),
        operators: caps.get(4).map_or("", |m| m.as_str()).to_string(),
        text: caps
            .get(5)
            .map_or("", |m| m.as_str().trim())
            .replace('"', ""),
    })
}
