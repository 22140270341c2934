use courier_contracts::{Factory, FactoryError};
use courier_domain::input::RawInput;
use courier_factory::{FactoryTable, RawInputExt};
use proptest::prelude::*;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

trait Notice: Debug + Send + Sync {
    fn headline(&self) -> String;
}

#[derive(Debug)]
struct Intrusion {
    zone: String,
}

impl Notice for Intrusion {
    fn headline(&self) -> String {
        format!("intrusion in {}", self.zone)
    }
}

#[derive(Debug)]
struct Fire {
    floor: u8,
}

impl Notice for Fire {
    fn headline(&self) -> String {
        format!("fire on floor {}", self.floor)
    }
}

fn notices(built: &Arc<AtomicUsize>) -> FactoryTable<dyn Notice> {
    let intrusions = Arc::clone(built);
    let fires = Arc::clone(built);
    FactoryTable::<dyn Notice>::builder("notices")
        .kind("intrusion", move |input| {
            intrusions.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Intrusion { zone: input.required("zone")?.to_owned() }))
        })
        .kind("fire", move |input| {
            fires.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Fire { floor: input.parsed("floor")? }))
        })
        .build()
        .unwrap()
}

#[test]
fn builds_the_product_named_by_the_discriminator() {
    let built = Arc::new(AtomicUsize::new(0));
    let factory = notices(&built);

    let notice = factory.create_from(&RawInput::new("fire").with_field("floor", "3")).unwrap();

    assert_eq!(notice.headline(), "fire on floor 3");
    assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_discriminator_runs_no_constructor() {
    let built = Arc::new(AtomicUsize::new(0));
    let factory = notices(&built);

    let err = factory.create_from(&RawInput::new("flood")).unwrap_err();

    assert!(matches!(err, FactoryError::UnrecognizedInputKind { ref kind, .. } if kind == "flood"));
    assert_eq!(built.load(Ordering::SeqCst), 0);
}

#[test]
fn input_without_discriminator_is_rejected() {
    let built = Arc::new(AtomicUsize::new(0));
    let factory = notices(&built);

    let err = factory.create_from(&RawInput::untagged().with_field("zone", "lobby")).unwrap_err();

    assert_eq!(err.kind(), "MissingDiscriminator");
    assert_eq!(built.load(Ordering::SeqCst), 0);
}

#[test]
fn constructor_errors_pass_through() {
    let factory = notices(&Arc::new(AtomicUsize::new(0)));
    let err = factory.create_from(&RawInput::new("fire").with_field("floor", "roof")).unwrap_err();
    assert_eq!(err.kind(), "InvalidField");
}

#[test]
fn duplicate_kind_fails_at_build_time() {
    let err = FactoryTable::<dyn Notice>::builder("notices")
        .kind("fire", |_| Ok(Box::new(Fire { floor: 0 })))
        .kind("fire", |_| Ok(Box::new(Fire { floor: 1 })))
        .build()
        .unwrap_err();

    assert!(matches!(err, FactoryError::DuplicateKind { ref kind, .. } if kind == "fire"));
}

#[test]
fn kinds_keep_registration_order_and_exhaustiveness_is_checked() {
    let factory = notices(&Arc::new(AtomicUsize::new(0)));

    assert_eq!(factory.kinds(), vec!["intrusion", "fire"]);
    assert!(factory.knows("fire"));
    assert!(factory.ensure_kinds(&["fire", "intrusion"]).is_ok());

    let err = factory.ensure_kinds(&["fire", "flood", "quake"]).unwrap_err();
    let FactoryError::MissingKinds { kinds, .. } = err else {
        panic!("expected missing kinds");
    };
    assert_eq!(kinds, vec!["flood", "quake"]);
}

proptest! {
    #[test]
    fn anything_but_known_kinds_is_unrecognized(kind in "[a-z]{1,12}") {
        prop_assume!(kind != "fire" && kind != "intrusion");
        let built = Arc::new(AtomicUsize::new(0));
        let factory = notices(&built);

        let err = factory.create_from(&RawInput::new(kind.clone())).unwrap_err();
        prop_assert_eq!(err.kind(), "UnrecognizedInputKind");
        prop_assert_eq!(built.load(Ordering::SeqCst), 0);
    }
}
