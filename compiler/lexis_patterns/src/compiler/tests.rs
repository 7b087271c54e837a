use super::*;

#[test]
fn identical_patterns_share_one_matcher() {
    let fragments = Fragments::new();
    let mut compiler = PatternCompiler::new(RegexFlags::default(), &fragments);
    let a = compiler.compile(r"\s+").unwrap();
    let b = compiler.compile(r"\s+").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(compiler.compiled_count(), 1);
}

#[test]
fn fragment_expansion_is_the_cache_key() {
    let mut fragments = Fragments::new();
    fragments.insert("ws", r"\s+");
    let mut compiler = PatternCompiler::new(RegexFlags::default(), &fragments);
    let a = compiler.compile("{:ws}").unwrap();
    let b = compiler.compile(r"(?:\s+)").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.pattern(), r"(?:\s+)");
}

#[test]
fn flags_are_applied() {
    let fragments = Fragments::new();
    let mut compiler = PatternCompiler::new(RegexFlags::CASE_INSENSITIVE, &fragments);
    let m = compiler.compile("abc").unwrap();
    assert_eq!(m.flags(), RegexFlags::CASE_INSENSITIVE);
    assert_eq!(m.match_at("ABC", 0), Some(0..3));
}

#[test]
fn errors_propagate() {
    let fragments = Fragments::new();
    let mut compiler = PatternCompiler::new(RegexFlags::default(), &fragments);
    assert_eq!(
        compiler.compile("{:nope}").unwrap_err(),
        PatternError::UndefinedFragment("nope".to_owned())
    );
    assert!(compiler.compile("[").is_err());
    assert_eq!(compiler.compiled_count(), 0);
}
