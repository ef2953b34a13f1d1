//! Property-based tests for partitioning and token parsing

use proptest::prelude::*;
use ssf::ssf::ast::IdGenerator;
use ssf::ssf::parsing::{parse_token, partition};
use std::collections::BTreeMap;

/// A top-level unit as its lines: a token line or a balanced chunk
fn unit_lines() -> impl Strategy<Value = Vec<String>> {
    let token = "[a-z]{1,8}".prop_map(|word| vec![format!("1\t{}\tNN", word)]);
    token.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(|children| {
            let mut lines = vec!["1\t((\tNP".to_string()];
            lines.extend(children.into_iter().flatten());
            lines.push("\t))".to_string());
            lines
        })
    })
}

fn token_line() -> impl Strategy<Value = (String, String, String, BTreeMap<String, String>)> {
    (
        "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}",
        "[A-Za-z]{1,10}",
        "[A-Z]{2,4}",
        // keys drawn without 'a' never hit the list marker
        prop::collection::btree_map("[b-z]{1,4}", "[a-z0-9]{1,6}", 0..4),
    )
}

proptest! {
    #[test]
    fn partition_reproduces_balanced_units(units in prop::collection::vec(unit_lines(), 0..6)) {
        let flat: Vec<&str> = units.iter().flatten().map(String::as_str).collect();
        let parts = partition(&flat);

        prop_assert_eq!(parts.len(), units.len());
        for (part, expected) in parts.iter().zip(&units) {
            prop_assert!(part.is_balanced());
            prop_assert_eq!(part.lines(), expected.as_slice());
        }

        let rejoined: Vec<&str> = parts.iter().flat_map(|p| p.lines().iter().copied()).collect();
        prop_assert_eq!(rejoined, flat);
    }

    #[test]
    fn partition_never_loses_lines(lines in prop::collection::vec("(\t\\)\\)|[0-9]\t\\(\\(\tNP|[0-9]\t[a-z]{1,4}\tNN|)", 0..20)) {
        let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
        let total: usize = partition(&borrowed).iter().map(|p| p.lines().len()).sum();
        prop_assert_eq!(total, borrowed.len());
    }

    #[test]
    fn token_reserialization_is_stable((number, value, tag, features) in token_line()) {
        let ids = IdGenerator::new();
        let fs = features
            .iter()
            .map(|(k, v)| format!("{}='{}'", k, v))
            .collect::<Vec<_>>()
            .join(" ");
        let line = format!("{}\t{}\t{}\t<fs {}>", number, value, tag, fs);

        let first = parse_token(&line, &ids).unwrap();
        prop_assert_eq!(first.number(), number.as_str());
        prop_assert_eq!(first.value(), value.as_str());
        prop_assert_eq!(first.tag(), tag.as_str());
        prop_assert_eq!(first.features().len(), features.len());

        let second = parse_token(&first.to_ssf_line(), &ids).unwrap();
        prop_assert!(first.same_content(&second));
        prop_assert_ne!(first.uid(), second.uid());
    }
}
