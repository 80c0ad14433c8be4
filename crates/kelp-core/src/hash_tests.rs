use crate::{NameHash, name_hash};

#[test]
fn empty_name_is_seed() {
    assert_eq!(name_hash("").as_u32(), 5381);
}

#[test]
fn single_byte() {
    // 5381 * 33 + 'a'
    assert_eq!(name_hash("a").as_u32(), 5381 * 33 + 97);
}

#[test]
fn equal_names_equal_hashes() {
    assert_eq!(name_hash("next"), name_hash("next"));
    assert_eq!(NameHash::of("next"), name_hash("next"));
}

#[test]
fn different_names_usually_differ() {
    assert_ne!(name_hash("x"), name_hash("y"));
    assert_ne!(name_hash("ab"), name_hash("ba"));
}

#[test]
fn long_names_wrap_instead_of_overflowing() {
    let name = "a".repeat(1000);
    let _ = name_hash(&name);
}

#[test]
fn raw_roundtrip() {
    let hash = NameHash::from_raw(42);
    assert_eq!(hash.as_u32(), 42);
}
