use crate::{FileSessionStore, SessionStore};

use tempfile::TempDir;

fn store_in(temp: &TempDir) -> FileSessionStore {
    FileSessionStore::new(temp.path().join("session").join("token"))
}

#[test]
fn given_missing_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn given_token_set_when_get_then_returns_token() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.set("abc.def.ghi").unwrap();

    assert_eq!(store.get().unwrap(), Some("abc.def.ghi".to_string()));
    assert!(store.path().exists());
}

#[test]
fn given_token_set_twice_when_get_then_returns_latest() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.set("first").unwrap();
    store.set("second").unwrap();

    assert_eq!(store.get().unwrap(), Some("second".to_string()));
}

#[test]
fn given_token_written_by_other_handle_when_get_then_visible() {
    let temp = TempDir::new().unwrap();
    let reader = store_in(&temp);
    let writer = store_in(&temp);

    assert_eq!(reader.get().unwrap(), None);
    writer.set("from-elsewhere").unwrap();

    assert_eq!(reader.get().unwrap(), Some("from-elsewhere".to_string()));
}

#[test]
fn given_whitespace_only_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "  \n").unwrap();

    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn given_stored_token_when_cleared_twice_then_idempotent() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set("token").unwrap();

    store.clear().unwrap();
    store.clear().unwrap();

    assert_eq!(store.get().unwrap(), None);
    assert!(!store.path().exists());
}

#[cfg(unix)]
#[test]
fn given_token_set_when_inspecting_permissions_then_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set("secret").unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
