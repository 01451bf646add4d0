/*!
 * Tests for the merge engine
 */

use assmerge::document::{Event, EventFields, Style};
use assmerge::merge::{merge, style_digest, MergeOptions};

use crate::common::{self, dialogue, document};

const RENAME: MergeOptions = MergeOptions { rename_styles: true };
const KEEP_NAMES: MergeOptions = MergeOptions { rename_styles: false };

/// Two documents, renaming on: distinct digest styles, each event on its own
#[test]
fn test_merge_twoDocumentsWithRename_shouldUseDistinctDigestStyles() {
    let a = common::scenario_doc_a();
    let b = common::scenario_doc_b();

    let merged = merge(&[a, b], RENAME).unwrap();

    assert_eq!(merged.styles.len(), 2);
    assert_eq!(merged.events.len(), 2);
    assert_ne!(merged.styles[0].name, merged.styles[1].name);
    assert_eq!(merged.styles[0].name, style_digest("Default", 0));
    assert_eq!(merged.styles[1].name, style_digest("Default", 1));

    assert_eq!(merged.events[0].text(), "Hi");
    assert_eq!(merged.events[0].style(), merged.styles[0].name);
    assert_eq!(merged.events[1].text(), "Yo");
    assert_eq!(merged.events[1].style(), merged.styles[1].name);

    // each renamed style keeps its own definition
    assert_eq!(merged.styles[0].fontsize, 40.0);
    assert!(merged.styles[1].italic);
    common::assert_styles_resolve(&merged);
}

/// Two documents, renaming off: the name collision is kept verbatim
#[test]
fn test_merge_twoDocumentsWithoutRename_shouldKeepCollidingNames() {
    let merged = merge(&[common::scenario_doc_a(), common::scenario_doc_b()], KEEP_NAMES).unwrap();

    let style_names: Vec<&str> = merged.styles.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(style_names, vec!["Default", "Default"]);
    assert!(!merged.styles[0].italic);
    assert!(merged.styles[1].italic);

    let event_styles: Vec<&str> = merged.events.iter().map(|e| e.style()).collect();
    assert_eq!(event_styles, vec!["Default", "Default"]);
}

#[test]
fn test_merge_withUnreferencedStyle_shouldDropIt() {
    let doc = document(
        vec![Style::named("Default"), Style::named("Unused")],
        vec![dialogue("Default", "line", 0, 1_000)],
    );

    for options in [RENAME, KEEP_NAMES] {
        let merged = merge(std::slice::from_ref(&doc), options).unwrap();
        assert_eq!(merged.styles.len(), 1);
        assert!(merged.styles.iter().all(|s| s.name != "Unused"));
    }
}

#[test]
fn test_merge_withEmptyTextEvents_shouldDropThem() {
    let doc = document(
        vec![Style::named("Default")],
        vec![
            dialogue("Default", "", 0, 1_000),
            dialogue("Default", "kept", 1_000, 2_000),
            dialogue("Default", "", 2_000, 3_000),
        ],
    );

    let merged = merge(&[doc], KEEP_NAMES).unwrap();
    assert_eq!(merged.events.len(), 1);
    assert_eq!(merged.events[0].text(), "kept");
    assert!(merged.events.iter().all(|e| !e.text().is_empty()));
}

#[test]
fn test_merge_whitespaceText_shouldNotCountAsEmpty() {
    let doc = document(vec![Style::named("Default")], vec![dialogue("Default", " ", 0, 1)]);
    let merged = merge(&[doc], KEEP_NAMES).unwrap();
    assert_eq!(merged.events.len(), 1);
}

#[test]
fn test_merge_withRename_shouldBeDeterministic() {
    let first = merge(&[common::scenario_doc_a(), common::scenario_doc_b()], RENAME).unwrap();
    let second = merge(&[common::scenario_doc_a(), common::scenario_doc_b()], RENAME).unwrap();

    let names = |doc: &assmerge::Document| -> Vec<String> {
        doc.styles.iter().map(|s| s.name.clone()).collect()
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(first, second);
}

#[test]
fn test_merge_events_shouldFollowDocumentThenEventOrder() {
    let a = document(
        vec![Style::named("A")],
        vec![dialogue("A", "a1", 5_000, 6_000), dialogue("A", "a2", 0, 1_000)],
    );
    let b = document(
        vec![Style::named("B")],
        vec![dialogue("B", "b1", 0, 500), dialogue("B", "b2", 100, 200)],
    );

    let merged = merge(&[a, b], KEEP_NAMES).unwrap();
    let texts: Vec<&str> = merged.events.iter().map(|e| e.text()).collect();
    assert_eq!(texts, vec!["a1", "a2", "b1", "b2"]);
}

#[test]
fn test_merge_withComments_shouldKeepVariantAndRenameTheirStyles() {
    let comment = Event::comment(EventFields {
        style: "Notes".to_string(),
        text: "remember this".to_string(),
        ..EventFields::default()
    });
    let doc = document(vec![Style::named("Notes")], vec![comment]);

    let merged = merge(&[doc], RENAME).unwrap();
    assert!(matches!(merged.events[0], Event::Comment(_)));
    assert_eq!(merged.events[0].style(), style_digest("Notes", 0));
    common::assert_styles_resolve(&merged);
}

/// Referential integrity over a mix of shared, unused and duplicate styles
#[test]
fn test_merge_withRename_everyEventShouldResolveToOneStyle() {
    let docs = vec![
        document(
            vec![Style::named("Default"), Style::named("Sign"), Style::named("Unused")],
            vec![
                dialogue("Default", "one", 0, 1_000),
                dialogue("Sign", "two", 0, 1_000),
                dialogue("Default", "three", 1_000, 2_000),
            ],
        ),
        document(
            vec![Style::named("Sign"), Style::named("Default")],
            vec![dialogue("Sign", "four", 0, 1_000), dialogue("Default", "five", 0, 1_000)],
        ),
        document(vec![Style::named("Default")], vec![dialogue("Default", "six", 0, 1_000)]),
    ];

    let merged = merge(&docs, RENAME).unwrap();
    assert_eq!(merged.events.len(), 6);
    assert_eq!(merged.styles.len(), 5);
    common::assert_styles_resolve(&merged);
}

#[test]
fn test_merge_shouldLeaveInputsUntouched() {
    let a = common::scenario_doc_a();
    let merged = merge(std::slice::from_ref(&a), RENAME).unwrap();

    assert_ne!(merged.styles[0].name, "Default");
    assert_eq!(a.styles[0].name, "Default");
    assert_eq!(a.events[0].style(), "Default");
}
