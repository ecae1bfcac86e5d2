//! Outcome workflow E2E tests: validation pipelines over the facade.

use reasoned::helpers::{get_or_fail, single_or_fail, try_parse};
use reasoned::prelude::*;
use reasoned::{OutcomeError, reduce, reduce_lazy, transform};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Account {
    name: String,
    age: u8,
}

fn parse_account(fields: &HashMap<&str, &str>) -> Outcome<Account> {
    get_or_fail(fields, "name")
        .map(|name| (*name).to_string())
        .filter(|name| !name.trim().is_empty(), |_| Error::new("name is blank"))
        .flat_map(|name| {
            get_or_fail(fields, "age")
                .flat_map(|age| try_parse::<u8>(age))
                .map(|age| Account { name, age })
        })
        .flat_map_wrap(
            |account| {
                Outcome::succeed_when(account.age >= 18, "adult", "account holder is a minor")
                    .map(|()| account)
            },
            "account rejected",
        )
}

#[test]
fn validation_pipeline_end_to_end() {
    let valid = HashMap::from([("name", "Ada"), ("age", "36")]);
    let account = parse_account(&valid);
    assert_eq!(
        account.value(),
        Some(&Account {
            name: "Ada".to_string(),
            age: 36
        })
    );

    let minor = HashMap::from([("name", "Tim"), ("age", "12")]);
    assert_eq!(
        parse_account(&minor).error().map(Error::print),
        Some("account rejected → account holder is a minor".to_string())
    );

    let garbled = HashMap::from([("name", "Bo"), ("age", "abc")]);
    let failure = parse_account(&garbled);
    assert!(
        failure
            .error()
            .is_some_and(|error| error.has_cause(Error::is_exceptional))
    );

    let blank = HashMap::from([("name", "  "), ("age", "40")]);
    assert_eq!(
        parse_account(&blank).error().map(Error::print),
        Some("account rejected → name is blank".to_string())
    );
}

#[test]
fn extraction_and_recovery() {
    let missing: Outcome<u32> = Outcome::fail("config not loaded");

    assert_eq!(missing.clone().value_or(8080), 8080);
    assert_eq!(missing.clone().or(9090).value(), Some(&9090));
    assert!(matches!(
        missing.clone().value_or_failure_msg("port"),
        Err(OutcomeError::MissingValue { .. })
    ));

    let recovered = missing.clone().otherwise_with(|error| {
        Outcome::succeed_with(80, Success::new("defaulted").anteceded_by(error.message()))
    });
    assert_eq!(
        recovered.success().map(ToString::to_string),
        Some("Success(Message='defaulted', Anteceded by='Success(Message='config not loaded')')".to_string())
    );

    let described = missing.match_with(|port, _| format!("port {port}"), |error| error.print());
    assert_eq!(described, "config not loaded");
}

#[test]
fn chaining_from_other_outcomes() -> Result<(), Box<dyn StdError>> {
    let lookup: Outcome<String> = Outcome::fail("user 7 not found");
    let error = Error::new("cannot send invoice").caused_by_outcome(&lookup)?;
    assert_eq!(error.print(), "cannot send invoice → user 7 not found");

    let sent = Outcome::unit_with("invoice sent");
    let success = Success::new("billing cycle closed").anteceded_by_outcome(&sent)?;
    assert_eq!(success.antecedents().len(), 1);

    assert_eq!(
        Error::new("x").caused_by_outcome(&sent),
        Err(OutcomeError::OutcomeSucceeded)
    );
    Ok(())
}

#[test]
fn sequences_short_circuit() {
    let evaluated = Arc::new(AtomicUsize::new(0));
    let check = |holds: bool, name: &str| {
        let evaluated = Arc::clone(&evaluated);
        LazyOutcome::new(
            move || {
                evaluated.fetch_add(1, Ordering::SeqCst);
                holds
            },
            format!("{name} passed"),
            format!("{name} failed"),
        )
    };
    let checks = [check(true, "disk"), check(false, "network"), check(true, "clock")];

    let reduced = reduce_lazy(&checks);
    assert_eq!(reduced.error().map(Reason::message), Some("network failed"));
    assert_eq!(evaluated.load(Ordering::SeqCst), 2);

    let eager = reduce([Outcome::unit(), Outcome::unit_with("done")]);
    assert_eq!(eager.success().map(Reason::message), Some("done"));

    let mut parsed = 0;
    let ports = transform(["80", "443", "x", "8080"], |text| {
        parsed += 1;
        try_parse::<u16>(text)
    });
    assert!(ports.is_failure());
    assert_eq!(parsed, 3);

    let only = single_or_fail(["primary"]).map(str::to_uppercase);
    assert!(only.contains(&"PRIMARY".to_string()));
    assert!(only.exists(|name| name.starts_with('P')));
}
