use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_table_builds() {
    let lexers = all_lexers().unwrap();
    assert_eq!(lexers.len(), names().count());
    for lexer in &lexers {
        assert!(lexer.table().state_count() > 0, "{}", lexer.name());
    }
}

#[test]
fn lookup_ignores_case_and_accepts_names() {
    assert_eq!(lexer_by_alias("KOTLIN").unwrap().name(), "Kotlin");
    assert_eq!(lexer_by_alias("gst").unwrap().name(), "Gosu Template");
    assert_eq!(lexer_by_alias("Gosu Template").unwrap().name(), "Gosu Template");
}

#[test]
fn unknown_alias_is_an_error() {
    assert_eq!(
        lexer_by_alias("cobol").unwrap_err(),
        LookupError::UnknownAlias("cobol".to_owned())
    );
}

#[test]
fn aspectj_shares_java_rules() {
    let java = java::table().unwrap();
    let aspectj = java::aspectj_table().unwrap();
    assert_eq!(aspectj.name(), "aspectj");
    assert_eq!(java.resolve("root").unwrap(), aspectj.resolve("root").unwrap());
}

#[test]
fn template_lexer_reuses_the_gosu_table() {
    let gosu = gosu::lexer().unwrap();
    let template = gosu::template_lexer().unwrap();
    assert!(std::sync::Arc::ptr_eq(gosu.table(), template.table()));
    assert_eq!(template.initial_stack(), ["templateText"]);
}
