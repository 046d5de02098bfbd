//! Enumerations built from sequence data

use sundry_seq::Seq;
use sundry_types::{EnumError, Enumeration};

#[test]
fn enumeration_from_sequence_pairs() {
    let levels = Seq::new(&["low", "mid", "high"]).enumerate();
    let levels = Enumeration::new("Level", levels.into_iter().map(|(rank, name)| (name, rank)))
        .expect("valid enumeration");

    assert_eq!(levels.len(), 3);
    assert_eq!(levels.variant_names(), vec!["high", "low", "mid"]);

    let mid = levels.instance("mid").expect("known variant");
    assert_eq!(*mid.value(), 1);
    assert!(mid.is_instance_of(&levels));
}

#[test]
fn unknown_variant_names_the_enumeration() {
    let colors = Enumeration::new("Color", [("red", 0xff0000), ("green", 0x00ff00)]).unwrap();
    let err = colors.instance("blue").unwrap_err();
    assert_eq!(
        err,
        EnumError::UnknownVariant {
            enumeration: "Color".to_string(),
            variant: "blue".to_string(),
        }
    );
}
