//! Structured values extracted from single diagram lines.
//!
//! These are transient: the transformer builds one per recognized line and
//! serializes it immediately (or, for participants inside a box, when the
//! box closes). The `Display` impls produce the macro-library dialect.

use std::fmt;

/// Actor category tokens accepted in a participant declaration.
pub const PARTICIPANT_KINDS: &[&str] = &[
    "participant",
    "actor",
    "boundary",
    "control",
    "entity",
    "database",
    "collections",
    "queue",
];

/// Grouping keywords that open a structural block.
pub const GROUP_KEYWORDS: &[&str] = &[
    "alt", "else", "opt", "loop", "par", "break", "critical", "group",
];

/// A diagram actor declaration, e.g. `participant "Web API" as api order 10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub kind: String,
    pub name: String,
    pub alias: Option<String>,
    pub order: Option<String>,
}

impl Participant {
    /// The identifier other lines use to refer to this participant.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parties({},\"{}\",{},{})",
            self.kind,
            self.name,
            self.alias.as_deref().unwrap_or(""),
            self.order.as_deref().unwrap_or("")
        )
    }
}

/// A `box ... end box` container and the participants collected inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramBox {
    pub name: String,
    pub color: String,
    pub participants: Vec<Participant>,
}

impl DiagramBox {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            participants: Vec::new(),
        }
    }

    /// Comma-joined participant references, in declaration order.
    pub fn member_list(&self) -> String {
        self.participants
            .iter()
            .map(Participant::reference)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Serialize the box as its flush block: one `parties(...)` line per
    /// member followed by the `BOX(...)` line.
    pub fn flush_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.participants.iter().map(|p| p.to_string()).collect();
        lines.push(format!(
            "BOX(\"{}\", {}, {})",
            self.name,
            self.color,
            self.member_list()
        ));
        lines
    }
}

/// One message line between two participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowEvent {
    pub left: String,
    pub arrow: String,
    pub right: String,
    pub operators: String,
    pub text: String,
}

impl ArrowEvent {
    /// A leading `<` points the message from right to left.
    pub fn is_reversed(&self) -> bool {
        self.arrow.starts_with('<')
    }

    /// Dashed arrows are responses, solid ones are requests.
    pub fn proc_type(&self) -> &'static str {
        if self.arrow.contains("--") {
            "rs"
        } else {
            "rq"
        }
    }

    pub fn from(&self) -> &str {
        if self.is_reversed() {
            &self.right
        } else {
            &self.left
        }
    }

    pub fn to(&self) -> &str {
        if self.is_reversed() {
            &self.left
        } else {
            &self.right
        }
    }
}

impl fmt::Display for ArrowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, \"{}\", \"{}\", \"\")",
            self.proc_type(),
            self.from(),
            self.to(),
            self.operators,
            self.text
        )
    }
}

/// A structural block opener such as `alt`, `loop` or `group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEvent {
    /// Uppercased keyword.
    pub keyword: String,
    pub color: String,
    /// Label with embedded quotes already escaped.
    pub text: String,
}

impl fmt::Display for GroupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, \"{}\")", self.keyword, self.color, self.text)
    }
}
