#![cfg(not(feature = "csr"))]

use super::*;
use access::storage::{TOKEN_KEY, USER_KEY};
use access::{PersistedCredentials, UserProfile};

#[test]
fn native_storage_reads_nothing() {
    assert_eq!(LocalStorage.get(TOKEN_KEY), None);
}

#[test]
fn native_storage_writes_are_noops() {
    LocalStorage.set(USER_KEY, "{}");
    LocalStorage.remove(USER_KEY);
    assert_eq!(LocalStorage.get(USER_KEY), None);
}

#[test]
fn native_storage_never_restores_a_record() {
    PersistedCredentials { token: "T".to_owned(), user: UserProfile::new("HR", None), refresh_token: None }
        .write(&LocalStorage);
    assert_eq!(PersistedCredentials::read(&LocalStorage), Ok(None));
}

#[test]
fn failed_storage_calls_are_reported() {
    assert!(warn_on_failure("remove", TOKEN_KEY, Err::<(), _>("quota")));
    assert!(!warn_on_failure::<&str>("write", TOKEN_KEY, Ok(())));
}
