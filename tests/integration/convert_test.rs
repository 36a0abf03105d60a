//! End-to-end conversion of fixture diagrams through the library API.

use std::fs;

use tempfile::TempDir;

use puml2lib::files::collect_candidates;
use puml2lib::{convert_file, ConvertError, ConvertOutcome, TransformOptions};

use crate::helpers::{load_fixture, temp_fixture, write_file};

#[test]
fn checkout_fixture_matches_expected_output() {
    let (temp, input) = temp_fixture("checkout.puml");

    let outcome = convert_file(&input, TransformOptions::default()).unwrap();
    let output = temp.path().join("checkout_byLib.puml");
    match outcome {
        ConvertOutcome::Converted {
            output: written,
            stats,
            ..
        } => {
            assert_eq!(written, output);
            assert_eq!(stats.lines_read, 34);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        load_fixture("checkout_byLib.expected")
    );
}

#[test]
fn converting_twice_gives_the_same_output() {
    let (temp, input) = temp_fixture("checkout.puml");
    let output = temp.path().join("checkout_byLib.puml");

    convert_file(&input, TransformOptions::default()).unwrap();
    let first = fs::read_to_string(&output).unwrap();
    convert_file(&input, TransformOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), first);
}

#[test]
fn generated_output_is_never_a_candidate() {
    let (temp, input) = temp_fixture("checkout.puml");
    convert_file(&input, TransformOptions::default()).unwrap();

    let candidates = collect_candidates(temp.path(), false).unwrap();
    assert_eq!(candidates, vec![input]);
}

#[test]
fn batch_over_directory_converts_each_file_independently() {
    let temp = TempDir::new().unwrap();
    // An unclosed box in the first file must not leak into the second
    write_file(temp.path(), "a.puml", "@startuml\nbox Open\nparticipant X\n");
    write_file(temp.path(), "b.puml", "@startuml\nparticipant Y\n@enduml\n");

    let lenient = TransformOptions { strict: false };
    for file in collect_candidates(temp.path(), false).unwrap() {
        convert_file(&file, lenient).unwrap();
    }

    let b = fs::read_to_string(temp.path().join("b_byLib.puml")).unwrap();
    assert!(b.contains("diagramInit(draft, \"b\")"));
    assert!(b.contains("parties(participant,\"Y\",,)"));
    let a = fs::read_to_string(temp.path().join("a_byLib.puml")).unwrap();
    assert!(!a.contains("parties"));
}

#[test]
fn strict_mode_reports_the_offending_file() {
    let temp = TempDir::new().unwrap();
    let input = write_file(
        temp.path(),
        "styles.puml",
        "@startuml\nskinparam sequence {\nArrowColor red\n",
    );

    let err = convert_file(&input, TransformOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Transform { .. }));
    let message = err.to_string();
    assert!(message.contains("styles.puml"));
    assert!(message.contains("line 2"));
}

#[cfg(unix)]
#[test]
fn unwritable_directory_is_an_output_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("locked");
    let input = write_file(&dir, "a.puml", "end\n");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

    let result = convert_file(&input, TransformOptions::default());

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
    // Root ignores directory permissions
    if let Err(err) = result {
        assert!(matches!(err, ConvertError::WriteOutput { .. }));
    }
}
