use rservicelog::store::catalog::{
    Catalog, add_custom_service, base_catalog, custom_services, merge, merged_catalog,
};
use rservicelog::store::roster::{Roster, is_known_master, roster_masters, save_roster};
use rservicelog::store::{CUSTOM_SERVICES_KEY, MemoryStorage, USERS_KEY};

fn catalog(pairs: &[(&str, Vec<&str>)]) -> Catalog {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
        .collect()
}

#[test]
fn test_bundled_catalog_is_valid() {
    let base = base_catalog().expect("bundled catalog parses");
    assert!(!base.is_empty());
    assert!(base.values().all(|names| !names.is_empty()));
}

#[test]
fn test_merge_is_union_with_dedup() {
    let base = catalog(&[("Engine", vec!["Oil change", "Spark plugs"])]);
    let custom = catalog(&[
        ("Engine", vec!["Spark plugs", "Timing belt", "Timing belt"]),
        ("Body", vec!["Polish"]),
    ]);

    let merged = merge(&base, &custom);

    assert_eq!(
        merged["Engine"],
        vec!["Oil change", "Spark plugs", "Timing belt"]
    );
    assert_eq!(merged["Body"], vec!["Polish"]);
}

#[test]
fn test_add_custom_service_skips_known_names() {
    let mut storage = MemoryStorage::new();
    let base = base_catalog().unwrap();
    let (category, names) = base.iter().next().unwrap();

    assert!(!add_custom_service(&mut storage, category, &names[0]).unwrap());
    assert!(storage.raw(CUSTOM_SERVICES_KEY).is_none());

    assert!(add_custom_service(&mut storage, "Тюнинг", "Тонировка").unwrap());
    assert!(!add_custom_service(&mut storage, "Тюнинг", " Тонировка ").unwrap());

    assert_eq!(custom_services(&storage)["Тюнинг"], vec!["Тонировка"]);
    assert!(merged_catalog(&storage).unwrap().contains_key("Тюнинг"));
}

#[test]
fn test_add_custom_service_rejects_blank_input() {
    let mut storage = MemoryStorage::new();
    assert!(add_custom_service(&mut storage, " ", "x").is_err());
    assert!(add_custom_service(&mut storage, "x", "").is_err());
}

#[test]
fn test_corrupt_custom_services_are_ignored() {
    let storage = MemoryStorage::new().with(CUSTOM_SERVICES_KEY, "[1,2");
    assert!(custom_services(&storage).is_empty());
    assert_eq!(merged_catalog(&storage).unwrap(), base_catalog().unwrap());
}

#[test]
fn test_roster_is_read_from_users_key() {
    let storage = MemoryStorage::new().with(USERS_KEY, r#"{"Petr":"123","Ivan":"abc"}"#);

    assert_eq!(roster_masters(&storage), vec!["Ivan", "Petr"]);
    assert!(is_known_master(&storage, "Ivan"));
    assert!(!is_known_master(&storage, "ivan"));
}

#[test]
fn test_roster_missing_or_corrupt_is_empty() {
    assert!(roster_masters(&MemoryStorage::new()).is_empty());
    assert!(roster_masters(&MemoryStorage::new().with(USERS_KEY, "oops")).is_empty());
}

#[test]
fn test_save_roster_round_trip() {
    let mut storage = MemoryStorage::new();
    let mut roster = Roster::new();
    roster.insert("Anna".into(), String::new());

    save_roster(&mut storage, &roster).unwrap();
    assert_eq!(roster_masters(&storage), vec!["Anna"]);
}
