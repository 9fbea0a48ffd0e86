use super::*;
use chrono::NaiveDate;

fn rendered(query: &FilterQuery) -> String {
    expect_predicate(query).to_string()
}

#[test]
fn tree_mirrors_input_order() {
    assert_eq!(
        rendered(&query(&[
            ("age", &["not(30)"]),
            ("name", &["startsWith(A)", "startsWith(B)"]),
        ])),
        "(NOT age = 30 AND (lower(name).startsWith(lower(\"A\")) \
         OR lower(name).startsWith(lower(\"B\"))))"
    );
}

#[test]
fn paths_render_with_declared_names() {
    assert_eq!(
        rendered(&query(&[("ADDRESS.CITY", &["Os"])])),
        "address.city.contains(\"Os\")"
    );
}

#[test]
fn nullable_fields_get_a_null_guard() {
    let predicate = expect_predicate(&query(&[("nickname", &["Ann"])]));
    assert_eq!(
        predicate.to_string(),
        "(nickname != null AND nickname.contains(\"Ann\"))"
    );

    let mut anna = person("Anna", 30);
    assert!(!predicate.eval(&anna));

    anna.nickname = Some("Annie".to_string());
    assert!(predicate.eval(&anna));
}

#[test]
fn nullable_ranges_are_guarded_too() {
    let predicate = expect_predicate(&query(&[("score", &["&10"])]));
    assert_eq!(
        predicate.to_string(),
        "(score != null AND score <= 10)"
    );

    let mut anna = person("Anna", 30);
    assert!(!predicate.eval(&anna));

    anna.score = Some(4);
    assert!(predicate.eval(&anna));
}

#[test]
fn date_time_equality_compares_calendar_dates() {
    // sample() creates at 1990-05-17 08:30
    let predicate = expect_predicate(&query(&[("created", &["1990-05-17"])]));
    assert_eq!(
        predicate.to_string(),
        "date(created) = date(1990-05-17T00:00:00)"
    );

    let mut anna = person("Anna", 30);
    assert!(predicate.eval(&anna));

    anna.created = NaiveDate::from_ymd_opt(1990, 5, 18)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap();
    assert!(!predicate.eval(&anna));
}

#[test]
fn date_time_ranges_truncate_both_bounds() {
    let predicate = expect_predicate(&query(&[("created", &["1990-05-17T23:00:00&1990-05-17"])]));

    assert!(predicate.eval(&person("Anna", 30)));
}

#[test]
fn date_only_fields_compare_directly() {
    let predicate = expect_predicate(&query(&[("birthday", &["1990-01-01&1990-12-31"])]));
    assert!(predicate.eval(&person("Anna", 30)));

    let predicate = expect_predicate(&query(&[("birthday", &["equals(1990-05-17)"])]));
    assert!(predicate.eval(&person("Anna", 30)));
}

#[test]
fn enumerations_and_closed_enumerations_use_equality() {
    let mut anna = person("Anna", 30);

    let status = expect_predicate(&query(&[("status", &["Archived", "Pending"])]));
    assert!(!status.eval(&anna));
    anna.status = Status::Pending;
    assert!(status.eval(&anna));

    let color = expect_predicate(&query(&[("color", &["2"])]));
    assert!(!color.eval(&anna));
    anna.color = Color("Green");
    assert!(color.eval(&anna));
}

#[test]
fn scalar_kinds_accept_their_canonical_forms() {
    let anna = person("Anna", 30);

    for (path, token) in [
        ("active", "yes"),
        ("active", "TRUE"),
        ("balance", "10.50"),
        ("balance", "10&11"),
        ("id", "00000000-0000-0000-0000-000000000000"),
        ("address.zip", "150"),
    ] {
        let predicate = expect_predicate(&query(&[(path, &[token])]));
        assert!(predicate.eval(&anna), "{path}={token} should match");
    }
}

#[test]
fn text_fields_never_parse_ranges() {
    let predicate = expect_predicate(&query(&[("name", &["a&b"])]));

    assert_eq!(predicate.to_string(), "name.contains(\"a&b\")");
    assert!(predicate.eval(&person("xa&by", 1)));
}

#[test]
fn quotes_are_stripped_from_plain_literals() {
    assert_eq!(
        rendered(&query(&[("name", &["\"Ann\""])])),
        "name.contains(\"Ann\")"
    );
}

#[test]
fn query_string_feeds_the_compiler() {
    let query = FilterQuery::from_query_string(
        "age=18%26&name=startsWith(A)&name=startsWith(B)&unknown=1",
    )
    .unwrap();

    assert_eq!(query.len(), 3);
    assert_eq!(query[1].tokens, vec!["startsWith(A)", "startsWith(B)"]);

    let predicate = expect_predicate(&query);
    assert!(predicate.eval(&person("Anna", 18)));
    assert!(!predicate.eval(&person("Anna", 17)));
    assert!(!predicate.eval(&person("Carl", 18)));
}

#[test]
fn compiler_reads_combine_type_from_options() {
    let options: FilterOptions = serde_json::from_str(r#"{ "combine": "Or" }"#).unwrap();
    assert_eq!(options.combine, CombineType::Or);

    let defaults: FilterOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, FilterOptions::default());

    assert!(serde_json::from_str::<FilterOptions>(r#"{ "combine": "xor" }"#).is_err());

    let compiler = FilterCompiler::<Person>::new(options);
    let predicate = compiler
        .compile(&query(&[("age", &["30"]), ("name", &["Anna"])]))
        .unwrap()
        .unwrap();

    assert!(predicate.eval(&person("Carl", 30)));
    assert!(matches!(predicate, Predicate::Or(_)));
}

#[test]
fn fields_lists_every_filtered_path() {
    let predicate = expect_predicate(&query(&[
        ("tags", &["a"]),
        ("address.city", &["Oslo"]),
        ("Tags", &["b"]),
    ]));

    let paths = predicate
        .fields()
        .into_iter()
        .map(|field| field.path.as_str())
        .collect::<Vec<_>>();

    assert_eq!(paths, vec!["tags", "address.city"]);
}

#[test]
fn one_sided_ranges_compile_to_single_inequalities() {
    let lower = expect_predicate(&query(&[("age", &["18&"])]));
    let upper = expect_predicate(&query(&[("created", &["&1990-05-17"])]));
    let both = expect_predicate(&query(&[("age", &["18&65"])]));

    assert_eq!(lower.to_string(), "age >= 18");
    assert_eq!(upper.to_string(), "date(created) <= date(1990-05-17T00:00:00)");
    assert_eq!(both.to_string(), "(age >= 18 AND age <= 65)");

    assert!(upper.eval(&person("Anna", 30)));
    assert!(!both.eval(&person("Anna", 66)));
}

#[test]
fn f32_fields_match_their_decimal_literal() {
    // sample() stores ratio = 0.1_f32
    let anna = person("Anna", 30);

    for token in ["0.1", "0.1&0.1", "0.05&", "&0.1", "not(0.2)"] {
        let predicate = expect_predicate(&query(&[("ratio", &[token])]));
        assert!(predicate.eval(&anna), "ratio={token} should match");
    }

    let predicate = expect_predicate(&query(&[("ratio", &["0.2"])]));
    assert!(!predicate.eval(&anna));
}

#[test]
fn date_time_offset_fields_compare_instants() {
    // sample() sees at 2024-03-01T12:00:00+02:00
    let anna = person("Anna", 30);

    let same_instant = expect_predicate(&query(&[("seen", &["2024-03-01T10:00:00Z"])]));
    assert!(same_instant.eval(&anna));

    let other_instant = expect_predicate(&query(&[("seen", &["2024-03-01T12:00:00Z"])]));
    assert!(!other_instant.eval(&anna));

    let window = expect_predicate(&query(&[(
        "seen",
        &["2024-03-01T09:00:00+00:00&2024-03-01 11:00:00"],
    )]));
    assert!(window.eval(&anna));

    let after = expect_predicate(&query(&[("seen", &["2024-03-02T00:00:00+00:00&"])]));
    assert!(!after.eval(&anna));
}

#[test]
fn nullable_temporal_ranges_are_guarded() {
    let predicate = expect_predicate(&query(&[("expires", &["2025-01-01&2025-12-31"])]));
    assert_eq!(
        predicate.to_string(),
        "(expires != null AND (expires >= 2025-01-01 AND expires <= 2025-12-31))"
    );

    let mut anna = person("Anna", 30);
    assert!(!predicate.eval(&anna));
    assert!(predicate.clone().negate().eval(&anna));

    anna.expires = NaiveDate::from_ymd_opt(2025, 6, 1);
    assert!(predicate.eval(&anna));

    anna.expires = NaiveDate::from_ymd_opt(2026, 1, 1);
    assert!(!predicate.eval(&anna));

    let open = expect_predicate(&query(&[("expires", &["&2025-12-31"])]));
    assert_eq!(open.to_string(), "(expires != null AND expires <= 2025-12-31)");
}

#[test]
fn text_keyed_closed_enumerations_resolve_by_key() {
    let mut anna = person("Anna", 30);

    let gold = expect_predicate(&query(&[("tier", &["g"])]));
    assert!(!gold.eval(&anna));
    anna.tier = Tier("Gold");
    assert!(gold.eval(&anna));

    let quoted = expect_predicate(&query(&[("tier", &["\"g\"", "s"])]));
    assert!(quoted.eval(&anna));

    // member names are not keys
    assert_eq!(compile(&query(&[("tier", &["Gold"])])), None);
}

#[test]
fn concurrent_first_use_compiles_equivalent_predicates() {
    let query = query(&[
        ("COLOR", &["2", "3"]),
        ("Tier", &["g"]),
        ("Address.Zip", &["100&200"]),
    ]);
    let compiled = std::thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| scope.spawn(|| compile_or(&query)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect::<Vec<_>>()
    });

    let mut people = vec![
        person("Anna", 30),
        person("Bert", 40),
        person("Carl", 50),
        person("Dana", 20),
    ];
    people[1].color = Color("Blue");
    people[2].tier = Tier("Gold");
    people[2].address.zip = None;
    people[3].address.zip = None;

    let first = &compiled[0];
    for predicate in &compiled {
        assert_eq!(predicate, first);
        for entity in &people {
            assert_eq!(predicate.eval(entity), first.eval(entity));
        }
    }
    assert_eq!(
        people.iter().map(|p| first.eval(p)).collect::<Vec<_>>(),
        vec![true, true, true, false]
    );
}
