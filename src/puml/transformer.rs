//! The line-rewriting engine.
//!
//! [`LineTransformer`] consumes a diagram source one line at a time. Each
//! trimmed line is classified into exactly one [`LineKind`] (first match in
//! priority order wins) and the kind is then applied to the scan state,
//! producing zero or more output lines.
//!
//! # Example
//!
//! ```
//! use puml2lib::puml::LineTransformer;
//!
//! let mut transformer = LineTransformer::new("login");
//! assert_eq!(transformer.process_line("activate Foo").unwrap(), vec!["ACTIVATE(Foo)"]);
//! assert_eq!(transformer.process_line("A -> B: hi").unwrap(), vec![r#"rq(A, B, "", "hi", "")"#]);
//! assert!(transformer.process_line("skinparam monochrome true").unwrap().is_empty());
//! transformer.finish().unwrap();
//! ```

use tracing::{trace, warn};

use super::error::TransformError;
use super::parse;
use super::types::{ArrowEvent, DiagramBox, GroupEvent, Participant};

/// Opening tag of a diagram source.
pub const DIAGRAM_OPEN: &str = "@startuml";

/// Location of the macro library every generated file includes.
pub const LIBRARY_PATH: &str =
    "C:/Users/Vpatrushev/IdeaProjects/pafp-wiki/UML_LIB/umlLib/seqLib4/SequenceLibIncludeFile_v4.puml";

/// Rendering mode passed to `diagramInit`.
pub const DIAGRAM_MODE: &str = "draft";

const SKINPARAM_KEYWORD: &str = "skinparam";
const AUTONUMBER_KEYWORD: &str = "autonumber";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Behavior switches for a transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Fail on nested boxes, stray `end box`, and blocks left open at end
    /// of input instead of logging a warning and carrying on.
    pub strict: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Classification of one trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A line inside an open skinparam block; `closes` is set on the lone `}`.
    SkinparamBody { closes: bool },
    /// A `skinparam` line; `opens_block` when it carries `{`.
    Skinparam { opens_block: bool },
    Autonumber,
    Activate(&'a str),
    Deactivate(&'a str),
    Divider(&'a str),
    Group(GroupEvent),
    End,
    BoxStart(DiagramBox),
    BoxEnd,
    Participant(Participant),
    Arrow(ArrowEvent),
    DiagramOpen,
    Passthrough(&'a str),
}

#[derive(Debug)]
struct OpenBox {
    diagram_box: DiagramBox,
    opened_at: usize,
}

/// Per-file scan state. Never shared between files.
#[derive(Debug, Default)]
struct ScanState {
    uml_section_started: bool,
    /// Line that opened the current skinparam block.
    skinparam_opened_at: Option<usize>,
    current_box: Option<OpenBox>,
}

/// Stateful single-pass rewriter for one diagram source.
#[derive(Debug)]
pub struct LineTransformer {
    title: String,
    options: TransformOptions,
    state: ScanState,
    line_number: usize,
}

impl LineTransformer {
    /// Create a transformer for a diagram titled `title` with default options.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_options(title, TransformOptions::default())
    }

    pub fn with_options(title: impl Into<String>, options: TransformOptions) -> Self {
        Self {
            title: title.into(),
            options,
            state: ScanState::default(),
            line_number: 0,
        }
    }

    /// Title written into `diagramInit`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of lines processed so far.
    pub fn lines_processed(&self) -> usize {
        self.line_number
    }

    pub fn in_skinparam_block(&self) -> bool {
        self.state.skinparam_opened_at.is_some()
    }

    pub fn in_box(&self) -> bool {
        self.state.current_box.is_some()
    }

    pub fn uml_section_started(&self) -> bool {
        self.state.uml_section_started
    }

    /// Classify a trimmed line against the current state without changing it.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if self.in_skinparam_block() {
            return LineKind::SkinparamBody {
                closes: line == "}",
            };
        }
        if line.starts_with(SKINPARAM_KEYWORD) {
            return LineKind::Skinparam {
                opens_block: line.contains('{'),
            };
        }
        if line.starts_with(AUTONUMBER_KEYWORD) {
            return LineKind::Autonumber;
        }
        if let Some(reference) = parse::parse_activate(line) {
            return LineKind::Activate(reference);
        }
        if let Some(reference) = parse::parse_deactivate(line) {
            return LineKind::Deactivate(reference);
        }
        if let Some(label) = parse::parse_divider(line) {
            return LineKind::Divider(label);
        }
        if let Some(group) = parse::parse_group(line) {
            return LineKind::Group(group);
        }
        if line == "end" {
            return LineKind::End;
        }
        if let Some(diagram_box) = parse::parse_box_start(line) {
            return LineKind::BoxStart(diagram_box);
        }
        if line == "end box" {
            return LineKind::BoxEnd;
        }
        if let Some(participant) = parse::parse_participant(&parse::strip_participant_color(line))
        {
            return LineKind::Participant(participant);
        }
        if let Some(arrow) = parse::parse_arrow(line) {
            return LineKind::Arrow(arrow);
        }
        if !self.state.uml_section_started && line == DIAGRAM_OPEN {
            return LineKind::DiagramOpen;
        }
        LineKind::Passthrough(line)
    }

    /// Process one input line and return the lines to write for it.
    pub fn process_line(&mut self, raw: &str) -> Result<Vec<String>, TransformError> {
        self.line_number += 1;
        let mut line = raw.trim();
        if self.line_number == 1 {
            line = line.trim_start_matches(BYTE_ORDER_MARK).trim_start();
        }
        let kind = self.classify(line);
        trace!(line = self.line_number, ?kind, "classified");
        self.apply(kind)
    }

    fn apply(&mut self, kind: LineKind<'_>) -> Result<Vec<String>, TransformError> {
        let output = match kind {
            LineKind::SkinparamBody { closes } => {
                if closes {
                    self.state.skinparam_opened_at = None;
                }
                Vec::new()
            }
            LineKind::Skinparam { opens_block } => {
                if opens_block {
                    self.state.skinparam_opened_at = Some(self.line_number);
                }
                Vec::new()
            }
            LineKind::Autonumber => Vec::new(),
            LineKind::Activate(reference) => vec![format!("ACTIVATE({})", reference)],
            LineKind::Deactivate(reference) => vec![format!("DEACTIVATE({})", reference)],
            LineKind::Divider(label) => vec![format!("DEVIDER(\"{}\")", label)],
            LineKind::Group(group) => vec![group.to_string()],
            LineKind::End => vec!["END()".to_string()],
            LineKind::BoxStart(diagram_box) => {
                self.open_box(diagram_box)?;
                Vec::new()
            }
            LineKind::BoxEnd => self.close_box()?,
            LineKind::Participant(participant) => match self.state.current_box.as_mut() {
                Some(open) => {
                    open.diagram_box.participants.push(participant);
                    Vec::new()
                }
                None => vec![participant.to_string()],
            },
            LineKind::Arrow(arrow) => vec![arrow.to_string()],
            LineKind::DiagramOpen => {
                self.state.uml_section_started = true;
                vec![
                    DIAGRAM_OPEN.to_string(),
                    format!("!include {}", LIBRARY_PATH),
                    format!("diagramInit({}, \"{}\")", DIAGRAM_MODE, self.title),
                ]
            }
            LineKind::Passthrough(line) => vec![line.to_string()],
        };
        Ok(output)
    }

    fn open_box(&mut self, diagram_box: DiagramBox) -> Result<(), TransformError> {
        let line = self.line_number;
        match self.state.current_box.as_mut() {
            Some(open) if self.options.strict => Err(TransformError::NestedBox {
                line,
                open_line: open.opened_at,
            }),
            Some(open) => {
                warn!(
                    line,
                    open_line = open.opened_at,
                    "nested box; relabelling the open box"
                );
                open.diagram_box.name = diagram_box.name;
                open.diagram_box.color = diagram_box.color;
                Ok(())
            }
            None => {
                self.state.current_box = Some(OpenBox {
                    diagram_box,
                    opened_at: line,
                });
                Ok(())
            }
        }
    }

    fn close_box(&mut self) -> Result<Vec<String>, TransformError> {
        match self.state.current_box.take() {
            Some(open) => Ok(open.diagram_box.flush_lines()),
            None if self.options.strict => Err(TransformError::EndBoxWithoutBox {
                line: self.line_number,
            }),
            None => {
                warn!(line = self.line_number, "'end box' without open box; passing through");
                Ok(vec!["end box".to_string()])
            }
        }
    }

    /// Check the state left at end of input.
    pub fn finish(self) -> Result<(), TransformError> {
        if let Some(line) = self.state.skinparam_opened_at {
            if self.options.strict {
                return Err(TransformError::UnclosedSkinparam { line });
            }
            warn!(line, "skinparam block never closed; rest of input was dropped");
        }
        if let Some(open) = self.state.current_box {
            if self.options.strict {
                return Err(TransformError::UnclosedBox {
                    line: open.opened_at,
                });
            }
            warn!(
                line = open.opened_at,
                participants = open.diagram_box.participants.len(),
                "box never closed; its participants were dropped"
            );
        }
        Ok(())
    }
}

/// Transform a whole in-memory source, returning the generated text with a
/// newline after every line.
pub fn transform_str(
    title: &str,
    input: &str,
    options: TransformOptions,
) -> Result<String, TransformError> {
    let mut transformer = LineTransformer::with_options(title, options);
    let mut output = String::with_capacity(input.len());
    for line in input.lines() {
        for out in transformer.process_line(line)? {
            output.push_str(&out);
            output.push('\n');
        }
    }
    transformer.finish()?;
    Ok(output)
}
