//! End-to-end checks of whole constraint trees.

use std::cell::Cell;
use std::fmt;

use nebula_constraint::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_-+=[]{},;:.?/~\"'"#;

// ============================================================================
// PASSWORD
// ============================================================================

fn password_rules() -> Sequence<'static, str> {
    first![
        not_blank(),
        str_len(8, 24),
        contains_number(),
        contains_lower(),
        contains_upper(),
        contains_any(SPECIAL_CHARACTERS),
        contains("???"),
    ]
}

#[rstest]
#[case("test1#Password???", None)]
#[case("t", Some("must have 8 characters at least"))]
#[case("", Some("cannot be blank"))]
#[case("password1???", Some("must contain one upper case character at least"))]
#[case("Password1!", Some("must contain the string \"???\""))]
fn password_reports_first_failure(#[case] input: &str, #[case] expected: Option<&str>) {
    let outcome = value(input, password_rules()).evaluate();
    assert_eq!(outcome.err().map(|v| v.render()).as_deref(), expected);
}

#[test]
fn password_first_failure_is_a_single_rule() {
    let err = password_rules().check("t").unwrap_err();
    let rule = err.as_rule().expect("first-failure returns the leaf itself");
    assert_eq!(rule.code, "min_length");
    assert_eq!(rule.param("min"), Some("8"));
}

// ============================================================================
// TAGS
// ============================================================================

fn tag_rules() -> Sequence<'static, [String]> {
    all![len(2, 12), each_all(all![not_blank(), str_len(2, 8)])]
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn tags_within_bounds_pass() {
    // "loooong" has seven characters, inside 2..=8.
    let result = Schema::all()
        .field("tags", tags(&["tag1", "dd", "loooong"]), tag_rules())
        .validate();
    assert!(result.is_ok());
}

#[test]
fn tags_overlong_element_is_tagged_by_index() {
    let err = Schema::all()
        .field("tags", tags(&["tag1", "dd", "looooooong"]), tag_rules())
        .validate()
        .unwrap_err();

    insta::assert_snapshot!(err.render(), @"tags: #2: must have 8 characters at most");

    let members = err.as_list().expect("schema under all-failures yields a list");
    assert_eq!(members.len(), 1);
    assert_eq!(members.as_slice()[0].field_name(), Some("tags"));

    let leaves = err.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].path_string(), "tags.#2");
    assert_eq!(leaves[0].error.code, "max_length");
}

#[test]
fn tags_collects_every_failing_element() {
    let err = value(tags(&["", "ok", "x"]), tag_rules()).evaluate().unwrap_err();
    let paths: Vec<String> = err.leaves().iter().map(|leaf| leaf.path_string()).collect();
    assert_eq!(paths, vec!["#0", "#0", "#2"]);
    insta::assert_snapshot!(
        err.render(),
        @"[#0: [cannot be blank, must have 2 characters at least], #2: must have 2 characters at least]"
    );
}

// ============================================================================
// USER SCHEMA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct LoginType(u8);

impl fmt::Display for LoginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Validatable for LoginType {
    fn validate(&self) -> Outcome {
        if self.0 == 25 {
            Ok(())
        } else {
            Err(Violation::rule("login_type", "recursive validation"))
        }
    }
}

struct User {
    email: String,
    name: String,
    password: String,
    language: String,
    tags: Vec<String>,
    status: Option<i32>,
    login_type: LoginType,
}

fn user_schema(user: &User) -> Schema<'_> {
    Schema::all()
        .field("email", user.email.as_str(), first![not_blank(), email()])
        .field(
            "name",
            user.name.as_str(),
            when(|| user.name != "~", all![not_blank(), str_len(2, 50)]),
        )
        .field(
            "password",
            user.password.as_str(),
            first![
                not_blank(),
                str_len(8, 25),
                contains_upper(),
                contains_lower(),
                contains_number(),
                contains_any(SPECIAL_CHARACTERS),
            ],
        )
        .field(
            "language",
            user.language.as_str(),
            all![not_blank(), str_len(2, 2), one_of::<str, _>(["en", "de", "fr"])],
        )
        .field(
            "tags",
            user.tags.as_slice(),
            all![len(0, 6), each_all(all![not_blank(), str_len(1, 12)])],
        )
        .field("status", user.status, optional(first![min(0), max(20)]))
        .field(
            "LoginType",
            user.login_type,
            Sequence::all()
                .rule(range(LoginType(20), LoginType(30)))
                .self_validated(),
        )
        .func(|| {
            if user.tags.len() > 3 {
                Err(Violation::rule("custom", "test error"))
            } else {
                Ok(())
            }
        })
}

#[test]
fn valid_user_passes() {
    let user = User {
        email: "test@test.com".into(),
        name: "~".into(),
        password: "GG@Test123".into(),
        language: "en".into(),
        tags: vec!["A1".into()],
        status: Some(20),
        login_type: LoginType(25),
    };
    assert!(user_schema(&user).validate().is_ok());
}

#[test]
fn missing_status_is_valid() {
    let user = User {
        email: "test@test.com".into(),
        name: "Bob".into(),
        password: "GG@Test123".into(),
        language: "de".into(),
        tags: Vec::new(),
        status: None,
        login_type: LoginType(25),
    };
    assert!(user_schema(&user).validate().is_ok());
}

#[test]
fn invalid_user_flattens_in_declaration_order() {
    let user = User {
        email: "bad".into(),
        name: String::new(),
        password: "short".into(),
        language: "xx".into(),
        tags: vec!["a".into(), String::new(), "b".into(), "c".into()],
        status: Some(21),
        login_type: LoginType(21),
    };

    let err = user_schema(&user).validate().unwrap_err();
    assert_eq!(err.len(), 8);
    assert_eq!(
        err.to_json_value(),
        json!([
            { "email": "invalid email" },
            { "name": "[cannot be blank, must have 2 characters at least]" },
            { "password": "must have 8 characters at least" },
            { "language": "is not in valid values" },
            { "tags": "#1: [cannot be blank, must have 1 characters at least]" },
            { "status": "is greater than maximum 20" },
            { "LoginType": "recursive validation" },
            { "": "test error" },
        ])
    );

    let flat = err.flatten();
    assert_eq!(flat[7].field, None);
    assert_eq!(flat[7].message, "test error");
}

#[test]
fn first_failure_schema_stops_at_first_field() {
    let user = User {
        email: "bad".into(),
        name: String::new(),
        password: "short".into(),
        language: "xx".into(),
        tags: Vec::new(),
        status: None,
        login_type: LoginType(25),
    };

    let config = CheckConfig::fail_fast();
    let err = config
        .schema()
        .field("email", user.email.as_str(), email())
        .field("name", user.name.as_str(), not_blank())
        .validate()
        .unwrap_err();
    assert_eq!(err.render(), "email: invalid email");
}

// ============================================================================
// GUARDS AND OPTIONALS
// ============================================================================

#[test]
fn guard_is_read_at_check_time_and_child_is_skipped() {
    let enabled = Cell::new(false);
    let calls = Cell::new(0);
    let rule = when(
        || enabled.get(),
        custom(|_: &str| {
            calls.set(calls.get() + 1);
            Err(Violation::rule("test", "fail"))
        }),
    );

    assert!(rule.check("x").is_ok());
    assert_eq!(calls.get(), 0);

    enabled.set(true);
    assert!(rule.check("x").is_err());
    assert_eq!(calls.get(), 1);
}

#[test]
fn optional_absent_value_is_valid_regardless_of_rule() {
    let never = optional(custom(|_: &String| Err(Violation::rule("test", "never"))));
    assert!(value(None::<String>, never).evaluate().is_ok());
}

#[rstest]
#[case("", true)]
#[case("t", false)]
fn if_not_blank_only_checks_content(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(value(input, if_not_blank(str_min_len(2))).evaluate().is_ok(), valid);
}

#[rstest]
#[case(Some("test"), true)]
#[case(None, false)]
fn required_rejects_absence(#[case] input: Option<&str>, #[case] valid: bool) {
    assert_eq!(value(input, required::<&str>()).evaluate().is_ok(), valid);
}

// ============================================================================
// REUSE
// ============================================================================

#[test]
fn bound_field_can_be_rebound() {
    let mut name = field("name", String::new(), first![not_blank(), str_len(2, 50)]);
    assert_eq!(name.evaluate().unwrap_err().render(), "name: cannot be blank");

    name.accept("Al".into());
    assert!(name.evaluate().is_ok());

    name.accept("A".into());
    assert_eq!(
        name.evaluate().unwrap_err().render(),
        "name: must have 2 characters at least"
    );
}

#[test]
fn one_tree_checks_records_in_parallel() {
    let element: Each<StrLen, String> = each_all(str_len(2, 8));
    let element = &element;
    let batches = [tags(&["ok", "fine"]), tags(&["x", "ok", "waytoolongtag"])];

    std::thread::scope(|scope| {
        let handles: Vec<_> = batches
            .iter()
            .map(|batch| scope.spawn(move || element.check(batch.as_slice()).is_ok()))
            .collect();
        let results: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(results, vec![true, false]);
    });
}

#[derive(Debug)]
struct Address {
    city: String,
    zip: String,
}

#[test]
fn record_rules_apply_to_every_record() {
    let address = Sequence::all()
        .rule(field_of("city", not_blank(), |a: &Address| a.city.as_str()))
        .rule(field_of("zip", str_len(5, 5), |a: &Address| a.zip.as_str()));
    let addresses = each_all(address);

    let list = vec![
        Address {
            city: "Berlin".into(),
            zip: "10115".into(),
        },
        Address {
            city: String::new(),
            zip: "123".into(),
        },
    ];

    let err = addresses.check(list.as_slice()).unwrap_err();
    insta::assert_snapshot!(
        err.render(),
        @"#1: [city: cannot be blank, zip: must have 5 characters]"
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn config_threads_semantic_into_builders() {
    let config = CheckConfig::from_lookup(|_| Some("all".into())).unwrap();
    assert_eq!(config.semantic, CheckSemantic::All);

    let rules = config
        .sequence::<str>()
        .rule(not_blank())
        .rule(str_min_len(2));
    assert_eq!(rules.check("").unwrap_err().len(), 2);

    let elements: Each<_, i32> = config.each(range(0, 9));
    assert_eq!(elements.check(&[10, 1, -1]).unwrap_err().len(), 2);

    let sequence = rules![config.semantic; not_blank(), str_min_len(2)];
    assert_eq!(sequence.semantic(), CheckSemantic::All);
}

#[test]
fn config_rejects_unknown_semantic() {
    let err = CheckConfig::from_lookup(|_| Some("most".into())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown check semantic `most`, expected `first` or `all`"
    );
}
