//! Behavioral tests for the line transformer through its public API

use puml2lib::puml::{transform_str, LineKind, LineTransformer, TransformOptions, LIBRARY_PATH};

fn run(input: &str) -> String {
    transform_str("diagram", input, TransformOptions::default()).unwrap()
}

// ============================================================================
// Pass-through
// ============================================================================

#[test]
fn unrecognized_lines_pass_through_unchanged() {
    let lines = [
        "title Checkout",
        "note over A, B: shared",
        "return done",
        "hide footbox",
        "ref over A : init",
        "|||",
        "...5 minutes later...",
        "@enduml",
        "A - B",
    ];
    for line in lines {
        assert_eq!(run(line), format!("{}\n", line), "{line} was rewritten");
    }
}

#[test]
fn colors_on_non_participant_lines_are_kept() {
    assert_eq!(run("note over A #yellow: hi"), "note over A #yellow: hi\n");
}

// ============================================================================
// Box buffering
// ============================================================================

#[test]
fn box_member_list_commas() {
    for count in 0..5 {
        let mut input = String::from("box Group\n");
        for i in 0..count {
            input.push_str(&format!("participant P{}\n", i));
        }
        input.push_str("end box\n");

        let output = run(&input);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), count + 1);
        for (i, line) in lines[..count].iter().enumerate() {
            assert_eq!(*line, format!("parties(participant,\"P{}\",,)", i));
        }

        let box_line = lines[count];
        let members = box_line
            .strip_prefix("BOX(\"Group\", , ")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap();
        if count == 0 {
            assert_eq!(members, "");
        } else {
            assert_eq!(members.matches(',').count(), count - 1);
        }
    }
}

#[test]
fn box_participants_do_not_appear_at_declaration_position() {
    let mut transformer = LineTransformer::new("d");
    transformer.process_line("box Backend").unwrap();
    for line in ["participant API", "actor Admin as adm", "queue Jobs #red"] {
        assert!(transformer.process_line(line).unwrap().is_empty());
    }
    let flushed = transformer.process_line("end box").unwrap();
    assert_eq!(
        flushed,
        vec![
            "parties(participant,\"API\",,)",
            "parties(actor,\"Admin\",adm,)",
            "parties(queue,\"Jobs\",,)",
            "BOX(\"Backend\", , API,adm,Jobs)",
        ]
    );
    assert!(!transformer.in_box());
}

// ============================================================================
// Skinparam suppression
// ============================================================================

#[test]
fn everything_inside_skinparam_block_is_dropped() {
    let body = [
        "activate Foo",
        "A -> B : hi",
        "participant X",
        "box Y",
        "end box",
        "end",
        "@startuml",
        "{",
        "",
    ];
    let mut transformer = LineTransformer::new("d");
    assert!(transformer.process_line("skinparam note {").unwrap().is_empty());
    assert!(transformer.in_skinparam_block());
    for line in body {
        assert!(
            transformer.process_line(line).unwrap().is_empty(),
            "{line} leaked out of the skinparam block"
        );
    }
    assert!(transformer.process_line("}").unwrap().is_empty());
    assert!(!transformer.in_skinparam_block());
    assert_eq!(transformer.process_line("end").unwrap(), vec!["END()"]);
    transformer.finish().unwrap();
}

// ============================================================================
// Diagram open
// ============================================================================

#[test]
fn header_is_emitted_once_per_transformer() {
    let out = run("@startuml\nA -> B\n@startuml\n@enduml");
    assert_eq!(out.matches("!include").count(), 1);
    assert_eq!(out.matches("diagramInit").count(), 1);
    assert_eq!(out.matches("@startuml").count(), 2);
}

#[test]
fn each_transformer_starts_fresh() {
    for title in ["first", "second"] {
        let out = transform_str(title, "@startuml", TransformOptions::default()).unwrap();
        assert_eq!(
            out,
            format!(
                "@startuml\n!include {}\ndiagramInit(draft, \"{}\")\n",
                LIBRARY_PATH, title
            )
        );
    }
}

// ============================================================================
// Output dialect
// ============================================================================

#[test]
fn converted_output_converts_to_itself() {
    let source = "actor User\nUser -> Api : go\nactivate Api\n== Phase ==\nopt #red check\nend\ndeactivate Api";
    let once = run(source);
    let twice = run(&once);
    assert_eq!(once, twice);
}

#[test]
fn classification_priority() {
    let transformer = LineTransformer::new("d");
    // A group keyword wins over an arrow on the same line
    assert!(matches!(
        transformer.classify("alt A -> B"),
        LineKind::Group(_)
    ));
    // Participant declarations win over arrows
    assert!(matches!(
        transformer.classify("participant A"),
        LineKind::Participant(_)
    ));
    assert_eq!(
        transformer.classify("skinparam maxMessageSize 100"),
        LineKind::Skinparam { opens_block: false }
    );
}

#[test]
fn small_diagram_snapshot() {
    let output = transform_str(
        "login",
        "actor User\nUser -> Auth : login \"bob\"\nAuth --> User : token\ngroup #Gold session\nend",
        TransformOptions::default(),
    )
    .unwrap();
    insta::assert_snapshot!(output, @r###"
    parties(actor,"User",,)
    rq(User, Auth, "", "login bob", "")
    rs(Auth, User, "", "token", "")
    GROUP(Gold, "session")
    END()
    "###);
}
