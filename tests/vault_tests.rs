//! Integration tests for the CredVault vault module.

use std::fs;

use credvault::crypto::{generate_key_if_absent, generate_password, VaultKey};
use credvault::errors::CredVaultError;
use credvault::vault::VaultStore;
use tempfile::TempDir;

/// Helper: fresh temp dir with a generated key and a store over it.
fn new_store() -> (TempDir, VaultStore) {
    let dir = TempDir::new().expect("create temp dir");
    let key_path = dir.path().join("vault.key");
    generate_key_if_absent(&key_path).expect("generate key");
    let key = VaultKey::load(&key_path).expect("load key");
    let store = VaultStore::open(dir.path().join("vault.json"), key);
    (dir, store)
}

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[test]
fn ensure_initialized_creates_empty_vault() {
    let (_dir, store) = new_store();

    store.ensure_initialized().unwrap();
    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents.trim(), "{}");
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn ensure_initialized_is_idempotent() {
    let (_dir, store) = new_store();

    store.ensure_initialized().unwrap();
    store
        .save_credential("mail.example.com", "hunter2", None)
        .unwrap();
    let before = fs::read(store.path()).unwrap();

    // A second call must not touch a populated vault.
    store.ensure_initialized().unwrap();
    let after = fs::read(store.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn empty_vault_file_initializes_to_empty_map() {
    let (_dir, store) = new_store();
    fs::write(store.path(), b"").unwrap();

    store.ensure_initialized().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Save and get round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_and_get_roundtrip() {
    let (_dir, store) = new_store();

    let identity = store
        .save_credential("https://mail.example.com/login", "s3cret!", Some("me@example.com"))
        .unwrap();
    assert_eq!(identity.display_name, "mail.example");
    assert_eq!(identity.canonical_url, "https://www.mail.example.com");

    let credential = store.get_credential("mail.example.com").unwrap();
    assert_eq!(credential.password, "s3cret!");
    assert_eq!(credential.email.as_deref(), Some("me@example.com"));
    assert_eq!(credential.canonical_url, "https://www.mail.example.com");
}

#[test]
fn stored_password_is_never_plaintext_on_disk() {
    let (_dir, store) = new_store();

    store
        .save_credential("example.com", "do-not-leak-me", None)
        .unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("do-not-leak-me"));

    let record = store.get("https://www.example.com").unwrap();
    assert_ne!(record.encrypted_password, "do-not-leak-me");
}

#[test]
fn get_missing_credential_is_not_found() {
    let (_dir, store) = new_store();
    store.ensure_initialized().unwrap();

    let result = store.get_credential("nowhere.example.com");
    assert!(matches!(result, Err(CredVaultError::CredentialNotFound(_))));
}

#[test]
fn save_rejects_empty_password_and_bad_identity() {
    let (_dir, store) = new_store();

    assert!(matches!(
        store.save_credential("example.com", "", None),
        Err(CredVaultError::InvalidInput(_))
    ));
    assert!(matches!(
        store.save_credential("https://", "pw", None),
        Err(CredVaultError::InvalidIdentity(_))
    ));
}

// ---------------------------------------------------------------------------
// Overwrite semantics
// ---------------------------------------------------------------------------

#[test]
fn saving_same_service_twice_keeps_one_record_with_latest_password() {
    let (_dir, store) = new_store();

    store
        .save_credential("accounts.example.com", "first", Some("old@example.com"))
        .unwrap();
    let created_before = store.get("https://www.accounts.example.com").unwrap().created_at;

    // Different spelling of the same service — must hit the same key.
    store
        .save_credential("https://www.accounts.example.com/login", "second", None)
        .unwrap();

    assert_eq!(store.count().unwrap(), 1);
    let credential = store.get_credential("accounts.example.com").unwrap();
    assert_eq!(credential.password, "second");
    // Full overwrite: the old email does not survive.
    assert_eq!(credential.email, None);
    // created_at does survive.
    let created_after = store.get("https://www.accounts.example.com").unwrap().created_at;
    assert_eq!(created_before, created_after);
}

// ---------------------------------------------------------------------------
// Password update
// ---------------------------------------------------------------------------

#[test]
fn update_password_changes_only_the_password() {
    let (_dir, store) = new_store();

    store
        .save_credential("shop.example.com", "old-pw", Some("buyer@example.com"))
        .unwrap();
    store
        .update_password("shop.example.com", "new-pw")
        .unwrap();

    let credential = store.get_credential("shop.example.com").unwrap();
    assert_eq!(credential.password, "new-pw");
    assert_eq!(credential.email.as_deref(), Some("buyer@example.com"));
    assert_eq!(credential.display_name, "shop.example");
}

#[test]
fn update_password_on_missing_service_is_not_found() {
    let (_dir, store) = new_store();
    store.ensure_initialized().unwrap();

    let result = store.update_password("missing.example.com", "pw");
    assert!(matches!(result, Err(CredVaultError::CredentialNotFound(_))));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn list_credentials_decrypts_all_records() {
    let (_dir, store) = new_store();

    store.save_credential("a.example.com", "pw-a", None).unwrap();
    store.save_credential("b.example.com", "pw-b", None).unwrap();

    let listings = store.list_credentials().unwrap();
    assert_eq!(listings.len(), 2);
    assert!(listings
        .iter()
        .all(|l| matches!(l.password.as_deref(), Some("pw-a") | Some("pw-b"))));
}

#[test]
fn listing_survives_one_undecryptable_record() {
    let (_dir, store) = new_store();

    store.save_credential("good.example.com", "pw", None).unwrap();
    store.save_credential("bad.example.com", "pw", None).unwrap();

    // Corrupt one record's token directly in the vault file.
    let raw = fs::read_to_string(store.path()).unwrap();
    let mut map: serde_json::Value = serde_json::from_str(&raw).unwrap();
    map["https://www.bad.example.com"]["encrypted_password"] =
        serde_json::Value::String("AAAAAAAAAAAAAAAAAAAAAAAAAAAA".into());
    fs::write(store.path(), serde_json::to_vec(&map).unwrap()).unwrap();

    let listings = store.list_credentials().unwrap();
    assert_eq!(listings.len(), 2);

    let good = listings
        .iter()
        .find(|l| l.display_name == "good.example")
        .unwrap();
    assert_eq!(good.password.as_deref(), Some("pw"));

    let bad = listings
        .iter()
        .find(|l| l.display_name == "bad.example")
        .unwrap();
    assert_eq!(bad.password, None);
}

// ---------------------------------------------------------------------------
// Registration lookup by canonical URL
// ---------------------------------------------------------------------------

#[test]
fn is_registered_matches_any_spelling_of_the_service() {
    let (_dir, store) = new_store();

    store
        .save_credential("https://mail.example.com/inbox", "pw", None)
        .unwrap();

    for raw in [
        "mail.example.com",
        "http://mail.example.com",
        "https://www.mail.example.com/somewhere/else",
    ] {
        let hit = store.is_registered(raw).unwrap();
        let credential = hit.unwrap_or_else(|| panic!("'{raw}' should be registered"));
        assert_eq!(credential.password, "pw");
        assert_eq!(credential.canonical_url, "https://www.mail.example.com");
    }

    assert!(store.is_registered("other.example.com").unwrap().is_none());
}

#[test]
fn find_by_canonical_url_scans_record_fields() {
    let (_dir, store) = new_store();

    store.save_credential("one.example.com", "pw1", None).unwrap();
    store.save_credential("two.example.com", "pw2", None).unwrap();

    let hit = store
        .find_by_canonical_url("https://www.two.example.com")
        .unwrap();
    let (service_key, record) = hit.expect("should find the record");
    assert_eq!(service_key, "https://www.two.example.com");
    assert_eq!(record.display_name, "two.example");

    assert!(store
        .find_by_canonical_url("https://www.three.example.com")
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Atomic writes
// ---------------------------------------------------------------------------

#[test]
fn writes_leave_no_temp_file_behind() {
    let (dir, store) = new_store();

    store.save_credential("example.com", "pw", None).unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_generate_save_retrieve() {
    let (_dir, store) = new_store();

    let password = generate_password(12).unwrap();
    assert_eq!(password.len(), 12);

    let identity = store
        .save_credential("https://accounts.google.com/signin", &password, None)
        .unwrap();
    assert_eq!(identity.display_name, "accounts.google");
    assert_eq!(identity.canonical_url, "https://www.accounts.google.com");

    let credential = store
        .get_credential("https://accounts.google.com/signin")
        .unwrap();
    assert_eq!(credential.password, password);
    assert_eq!(credential.display_name, "accounts.google");
    assert_eq!(credential.canonical_url, "https://www.accounts.google.com");
}
