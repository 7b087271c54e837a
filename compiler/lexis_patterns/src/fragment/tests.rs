use super::*;
use pretty_assertions::assert_eq;

fn fragments(defs: &[(&str, &str)]) -> Fragments {
    let mut f = Fragments::new();
    for (name, pattern) in defs {
        f.insert(*name, *pattern);
    }
    f
}

#[test]
fn pattern_without_references_is_unchanged() {
    let f = Fragments::new();
    assert_eq!(f.expand(r"[a-z]{2,3}\{x\}").as_deref(), Ok(r"[a-z]{2,3}\{x\}"));
}

#[test]
fn reference_is_wrapped_in_group() {
    let f = fragments(&[("ident", r"[a-z]\w*|\$")]);
    assert_eq!(f.expand(r"{:ident}\(").as_deref(), Ok(r"(?:[a-z]\w*|\$)\("));
}

#[test]
fn nested_references_expand() {
    let f = fragments(&[("digit", "[0-9]"), ("number", "{:digit}+")]);
    assert_eq!(f.expand("-{:number}").as_deref(), Ok("-(?:(?:[0-9])+)"));
}

#[test]
fn escaped_brace_is_not_a_reference() {
    let f = Fragments::new();
    assert_eq!(f.expand(r"\{:x").as_deref(), Ok(r"\{:x"));
}

#[test]
fn multibyte_text_around_reference() {
    let f = fragments(&[("q", "«")]);
    assert_eq!(f.expand(r"\«é{:q}ü").as_deref(), Ok(r"\«é(?:«)ü"));
}

#[test]
fn undefined_reference_fails() {
    let f = Fragments::new();
    assert_eq!(
        f.expand("{:missing}"),
        Err(PatternError::UndefinedFragment("missing".to_owned()))
    );
}

#[test]
fn cycle_is_reported_with_chain() {
    let f = fragments(&[("a", "x{:b}"), ("b", "{:a}")]);
    assert_eq!(
        f.expand("{:a}"),
        Err(PatternError::FragmentCycle(vec![
            "a".to_owned(),
            "b".to_owned(),
            "a".to_owned()
        ]))
    );
}

#[test]
fn unterminated_reference_fails() {
    let f = fragments(&[("a", "x")]);
    assert!(matches!(
        f.expand("{:a"),
        Err(PatternError::UnterminatedFragment(_))
    ));
}

#[test]
fn invalid_name_fails() {
    let f = Fragments::new();
    assert_eq!(
        f.expand("{:a b}"),
        Err(PatternError::InvalidFragmentName("a b".to_owned()))
    );
}

#[test]
fn same_fragment_used_twice_is_not_a_cycle() {
    let f = fragments(&[("ws", r"\s+")]);
    assert_eq!(f.expand("{:ws}x{:ws}").as_deref(), Ok(r"(?:\s+)x(?:\s+)"));
}
