//! Crate-level parser properties.

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn parse_uses_default_options() {
    assert_eq!(parse("IO"), Ok(MatchPattern::TypeTag("IO".into())));
    let parser = PatternParser::new(ParseOptions::new().with_known_types(["Maybe"]));
    assert!(parser.parse("IO").is_err());
    assert!(parser.options().is_type_name("Maybe"));
}

#[test]
fn malformed_pattern_message() {
    let err = parse("(x)").err().map(|e| e.to_string());
    assert_eq!(
        err,
        Some("malformed pattern `(x)`: cons pattern needs a tail after `:` (at 1..3)".to_string())
    );
}

/// One list slot, rendered with a unique binder name by position.
#[derive(Clone, Debug)]
enum SlotText {
    Str(String),
    Int(i64),
    Wildcard,
    Binder,
    Cons { heads: usize, tail_binder: bool },
}

fn slot_strategy() -> impl Strategy<Value = SlotText> {
    prop_oneof![
        "[a-z ]{0,6}".prop_map(SlotText::Str),
        any::<i32>().prop_map(|n| SlotText::Int(i64::from(n))),
        Just(SlotText::Wildcard),
        Just(SlotText::Binder),
        (1usize..4, any::<bool>())
            .prop_map(|(heads, tail_binder)| SlotText::Cons { heads, tail_binder }),
    ]
}

fn render(slots: &[SlotText]) -> String {
    let mut fresh = 0usize;
    let mut next = || {
        fresh += 1;
        format!("v{fresh}")
    };
    let parts: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            SlotText::Str(s) => format!("\"{s}\""),
            SlotText::Int(n) => n.to_string(),
            SlotText::Wildcard => "_".to_string(),
            SlotText::Binder => next(),
            SlotText::Cons { heads, tail_binder } => {
                let mut segments: Vec<String> = (0..*heads).map(|_| next()).collect();
                segments.push(if *tail_binder { next() } else { "_".to_string() });
                format!("({})", segments.join(":"))
            }
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

proptest! {
    #[test]
    fn parse_and_arity_are_stable(slots in prop::collection::vec(slot_strategy(), 0..6)) {
        let text = render(&slots);
        let first = parse(&text);
        let second = parse(&text);
        prop_assert_eq!(&first, &second);
        let pattern = first.map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(pattern.arity(), pattern.binders().len());
        prop_assert_eq!(pattern.arity(), second.map(|p| p.arity()).unwrap_or(usize::MAX));
    }

    #[test]
    fn canonical_text_round_trips(slots in prop::collection::vec(slot_strategy(), 0..6)) {
        let text = render(&slots);
        let pattern = parse(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let reparsed = parse(&pattern.to_string());
        prop_assert_eq!(reparsed, Ok(pattern));
    }

    #[test]
    fn parse_never_panics(text in "\\PC{0,32}") {
        let _ = parse(&text);
    }
}
