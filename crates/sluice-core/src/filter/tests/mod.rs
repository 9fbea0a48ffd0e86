use super::{CombineType, FilterCompiler, FilterOptions, FilterQuery, build_filter};
use crate::{
    error::FilterError,
    predicate::Predicate,
    test_support::{Color, Person, Status, Tier},
};

mod shapes;

// ---- helpers -----------------------------------------------------------

fn query(entries: &[(&str, &[&str])]) -> FilterQuery {
    entries
        .iter()
        .map(|(path, tokens)| (*path, tokens.iter().copied()))
        .collect()
}

fn compile(query: &FilterQuery) -> Option<Predicate> {
    build_filter::<Person>(query, CombineType::And).expect("query should compile")
}

fn compile_or(query: &FilterQuery) -> Option<Predicate> {
    build_filter::<Person>(query, CombineType::Or).expect("query should compile")
}

fn expect_predicate(query: &FilterQuery) -> Predicate {
    compile(query).expect("query should produce a predicate")
}

fn person(name: &str, age: i64) -> Person {
    Person::sample(name, age)
}
