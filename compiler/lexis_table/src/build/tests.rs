use super::*;
use crate::{default_rule, groups, include, token, using, words_token, RegexFlags};
use lexis_ir::TokenKind;
use lexis_patterns::PatternError;
use pretty_assertions::assert_eq;

fn patterns(table: &RuleTable, state: &str) -> Vec<String> {
    table
        .resolve(state)
        .unwrap()
        .iter()
        .map(|r| r.matcher().map_or_else(|| "<default>".to_owned(), |m| m.pattern().to_owned()))
        .collect()
}

#[test]
fn include_splices_in_place() {
    let table = TableDef::new("t")
        .state(
            "root",
            [token("a", TokenKind::Name), include("ws"), token("b", TokenKind::Name)],
        )
        .state("ws", [token(r"\s+", TokenKind::Whitespace), token("//.*", TokenKind::Comment)])
        .build()
        .unwrap();
    assert_eq!(patterns(&table, "root"), ["a", r"\s+", "//.*", "b"]);
}

#[test]
fn nested_includes_flatten() {
    let table = TableDef::new("t")
        .state("root", [include("a")])
        .state("a", [include("b"), token("x", TokenKind::Name)])
        .state("b", [token("y", TokenKind::Name)])
        .build()
        .unwrap();
    assert_eq!(patterns(&table, "root"), ["y", "x"]);
}

#[test]
fn included_rules_share_matchers() {
    let table = TableDef::new("t")
        .state("root", [include("ws")])
        .state("other", [include("ws")])
        .state("ws", [token(r"\s+", TokenKind::Whitespace)])
        .build()
        .unwrap();
    let root = &table.resolve("root").unwrap()[0];
    let other = &table.resolve("other").unwrap()[0];
    assert!(root.shares_matcher(other));
}

#[test]
fn self_include_is_a_cycle() {
    let err = TableDef::new("t")
        .state("root", [include("root")])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::IncludeCycle {
            chain: vec!["root".to_owned(), "root".to_owned()],
        }
    );
}

#[test]
fn indirect_include_cycle_names_chain() {
    let err = TableDef::new("t")
        .state("root", [include("a")])
        .state("a", [include("b")])
        .state("b", [include("a")])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::IncludeCycle {
            chain: vec!["a".to_owned(), "b".to_owned(), "a".to_owned()],
        }
    );
    assert_eq!(err.to_string(), "include cycle: a -> b -> a");
}

#[test]
fn undefined_include() {
    let err = TableDef::new("t")
        .state("root", [include("nowhere")])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::UndefinedInclude {
            state: "root".to_owned(),
            include: "nowhere".to_owned(),
        }
    );
}

#[test]
fn undefined_fragment_names_state() {
    let err = TableDef::new("t")
        .state("root", [token("{:ident}", TokenKind::Name)])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::Pattern {
            state: "root".to_owned(),
            source: PatternError::UndefinedFragment("ident".to_owned()),
        }
    );
}

#[test]
fn fragments_expand() {
    let table = TableDef::new("t")
        .fragment("ident", "[a-z]+")
        .state("root", [token(r"{:ident}\(", TokenKind::NameFunction)])
        .build()
        .unwrap();
    assert_eq!(patterns(&table, "root"), [r"(?:[a-z]+)\("]);
}

#[test]
fn malformed_pattern_fails() {
    let err = TableDef::new("t")
        .state("root", [token("(a", TokenKind::Name)])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        BuildError::Pattern {
            source: PatternError::Syntax { .. },
            ..
        }
    ));
}

#[test]
fn undefined_transition_target() {
    let err = TableDef::new("t")
        .state("root", [token("a", TokenKind::Name).push("string")])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::UndefinedState {
            state: "root".to_owned(),
            target: "string".to_owned(),
        }
    );
}

#[test]
fn empty_transition_target() {
    let err = TableDef::new("t")
        .state("root", [token("a", TokenKind::Name).goto("")])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::EmptyStateName {
            state: "root".to_owned(),
        }
    );
}

#[test]
fn group_count_must_match() {
    let err = TableDef::new("t")
        .state(
            "root",
            [groups(r"(a)(b)", [TokenKind::Name.into()])],
        )
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::GroupCountMismatch {
            state: "root".to_owned(),
            pattern: "(a)(b)".to_owned(),
            expected: 1,
            found: 2,
        }
    );
}

#[test]
fn groups_resolve_actions() {
    let table = TableDef::new("t")
        .state(
            "root",
            [groups(
                r"(a)(\s*)(b)",
                [
                    TokenKind::Keyword.into(),
                    GroupDef::Skip,
                    DelegateDef::this().state("inner").into(),
                ],
            )],
        )
        .state("inner", [token("b", TokenKind::Name)])
        .build()
        .unwrap();
    let root = table.state_id("root").unwrap();
    let inner = table.state_id("inner").unwrap();
    let Action::Groups(actions) = table.rules(root)[0].action() else {
        panic!("expected group actions");
    };
    assert_eq!(
        actions.as_ref(),
        [
            GroupAction::Kind(TokenKind::Keyword),
            GroupAction::Skip,
            GroupAction::Using(Delegate::new(
                DelegateTarget::This,
                SmallVec::from_slice(&[root, inner])
            )),
        ]
    );
}

#[test]
fn delegate_to_other_table_checks_its_states() {
    let other = Arc::new(
        TableDef::new("other")
            .state("root", [token(".", TokenKind::Text)])
            .build()
            .unwrap(),
    );
    let ok = TableDef::new("t")
        .state("root", [using(".+", DelegateDef::table(Arc::clone(&other)))])
        .build();
    assert!(ok.is_ok());

    let err = TableDef::new("t")
        .state(
            "root",
            [using(".+", DelegateDef::table(other).state("string"))],
        )
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::UndefinedState {
            state: "root".to_owned(),
            target: "other:string".to_owned(),
        }
    );
}

#[test]
fn combined_state_concatenates_rules() {
    let table = TableDef::new("t")
        .state("root", [token("\"", TokenKind::String).push_combined(&["escape", "string"])])
        .state("escape", [token(r"\\.", TokenKind::StringEscape)])
        .state("string", [token("\"", TokenKind::String).pop(), token(r#"[^"\\]+"#, TokenKind::String)])
        .build()
        .unwrap();

    let [StackOp::Push(id)] = table.resolve("root").unwrap()[0].transition() else {
        panic!("expected a single push");
    };
    assert_eq!(table.state_name(*id), Some("escape+string"));
    let combined: Vec<_> = table
        .rules(*id)
        .iter()
        .map(|r| r.matcher().map(|m| m.pattern().to_owned()))
        .collect();
    assert_eq!(
        combined,
        [
            Some(r"\\.".to_owned()),
            Some("\"".to_owned()),
            Some(r#"[^"\\]+"#.to_owned()),
        ]
    );
    // Synthetic states are not addressable by name.
    assert!(table.state_id("escape+string").is_err());
}

#[test]
fn identical_combinations_share_one_state() {
    let table = TableDef::new("t")
        .state(
            "root",
            [
                token("a", TokenKind::Name).push_combined(&["x", "y"]),
                token("b", TokenKind::Name).push_combined(&["x", "y"]),
            ],
        )
        .state("x", [])
        .state("y", [])
        .build()
        .unwrap();
    assert_eq!(table.state_count(), 4);
}

#[test]
fn combination_may_include_the_pushing_state() {
    let table = TableDef::new("t")
        .state("root", [token("a", TokenKind::Name).push_combined(&["root", "x"])])
        .state("x", [token("b", TokenKind::Name)])
        .build()
        .unwrap();
    let [StackOp::Push(id)] = table.resolve("root").unwrap()[0].transition() else {
        panic!("expected a single push");
    };
    assert_eq!(table.rules(*id).len(), 2);
}

#[test]
fn push_current_and_default_rules() {
    let table = TableDef::new("t")
        .state(
            "root",
            [
                token(r"/\*", TokenKind::Comment).push_current(),
                default_rule().pop_n(2),
            ],
        )
        .build()
        .unwrap();
    let rules = table.resolve("root").unwrap();
    assert_eq!(rules[0].transition(), [StackOp::PushCurrent]);
    assert!(rules[1].is_default());
    assert_eq!(rules[1].transition(), [StackOp::Pop(2)]);
}

#[test]
fn word_lists_compile() {
    let table = TableDef::new("t")
        .state("root", [words_token(&["in", "int"], r"\b", r"\b", TokenKind::Keyword)])
        .build()
        .unwrap();
    assert_eq!(patterns(&table, "root"), [r"\b(?:int|in)\b"]);
}

#[test]
fn empty_word_list_fails() {
    let err = TableDef::new("t")
        .state("root", [words_token::<&str>(&[], "", "", TokenKind::Keyword)])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::Pattern {
            state: "root".to_owned(),
            source: PatternError::EmptyWordList,
        }
    );
}

#[test]
fn table_options_carry_over() {
    let table = TableDef::new("t")
        .flags(RegexFlags::MULTI_LINE | RegexFlags::DOT_ALL)
        .reset_on_newline(true)
        .state("root", [token(".", TokenKind::Text)])
        .build()
        .unwrap();
    assert_eq!(table.name(), "t");
    assert_eq!(table.flags(), RegexFlags::MULTI_LINE | RegexFlags::DOT_ALL);
    assert!(table.resets_on_newline());
}
