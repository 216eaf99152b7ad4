//! Contract checks shared by every backend's tests.
//!
//! Usernames are unique per process and per run, so the checks can run
//! against a persistent database next to other data. Each check removes
//! the accounts it created.
use super::*;
use crate::error::DirectoryError;
use crate::policy::NonEmpty;
use crate::policy::Permissive;
use crate::policy::PolicyFailure;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

pub fn username(tag: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    format!(
        "{}-{}-{}-{}",
        tag,
        std::process::id(),
        nanos,
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

/// Every check in sequence against one directory.
pub fn run(dir: &mut impl Directory) {
    absent_user_is_not_present(dir);
    added_user_is_present(dir);
    duplicate_add_changes_nothing(dir);
    remove_reports_presence(dir);
    list_returns_every_username(dir);
    default_policy_is_permissive(dir);
    policy_rejection_names_the_field(dir);
    empty_password_is_refused(dir);
    authentication_distinguishes_outcomes(dir);
    end_to_end(dir);
    updates_of_absent_users_are_noops(dir);
    rename_moves_the_whole_account(dir);
    profile_updates_keep_the_credential(dir);
    password_update_replaces_the_credential(dir);
}

pub fn absent_user_is_not_present(dir: &mut impl Directory) {
    let ref name = username("absent");
    assert!(!dir.has_user(name).unwrap());
    assert_eq!(dir.user_data(name).unwrap(), None);
}

pub fn added_user_is_present(dir: &mut impl Directory) {
    let ref name = username("added");
    assert!(!dir.has_user(name).unwrap());
    dir.add_user(name, "foo", "bar", "baz").unwrap();
    assert!(dir.has_user(name).unwrap());
    assert!(dir.remove_user(name).unwrap());
}

pub fn duplicate_add_changes_nothing(dir: &mut impl Directory) {
    let ref name = username("duplicate");
    dir.add_user(name, "foo", "bar", "baz").unwrap();
    let err = dir.add_user(name, "other", "other", "other").unwrap_err();
    assert!(matches!(err, DirectoryError::AlreadyExists(ref u) if u == name));
    assert_eq!(
        dir.user_data(name).unwrap(),
        Some(UserRecord::from((name.as_str(), "foo", "bar")))
    );
    assert!(dir.authenticate(name, "baz").unwrap());
    assert!(!dir.authenticate(name, "other").unwrap());
    assert!(dir.remove_user(name).unwrap());
}

pub fn remove_reports_presence(dir: &mut impl Directory) {
    let ref name = username("remove");
    assert!(!dir.remove_user(name).unwrap());
    dir.add_user(name, "foo", "bar", "baz").unwrap();
    assert!(dir.remove_user(name).unwrap());
    assert!(!dir.has_user(name).unwrap());
    assert_eq!(
        dir.authenticate_detailed(name, "baz").unwrap(),
        Authentication::UnknownUser
    );
    assert!(!dir.remove_user(name).unwrap());
}

pub fn list_returns_every_username(dir: &mut impl Directory) {
    let names = (1..=5)
        .map(|i| username(&format!("list{}", i)))
        .collect::<Vec<_>>();
    for name in names.iter() {
        dir.add_user(name, "foo", "bar", "baz").unwrap();
    }
    let listed = dir.list_users().unwrap();
    for name in names.iter() {
        assert_eq!(listed.iter().filter(|u| *u == name).count(), 1);
    }
    for name in names.iter() {
        assert!(dir.remove_user(name).unwrap());
    }
    let listed = dir.list_users().unwrap();
    assert!(names.iter().all(|name| !listed.contains(name)));
}

pub fn default_policy_is_permissive(dir: &mut impl Directory) {
    let policy = dir.policy();
    assert!(policy.check_username(""));
    assert!(policy.check_email(""));
    assert!(policy.check_screen_name(""));
    assert!(policy.check_password(""));
}

pub fn policy_rejection_names_the_field(dir: &mut impl Directory) {
    let ref name = username("policy");
    dir.set_policy(Arc::new(NonEmpty));
    let err = dir.add_user(name, "", "B", "pw").unwrap_err();
    assert!(matches!(err, DirectoryError::Policy(PolicyFailure::Email)));
    assert!(!dir.has_user(name).unwrap());
    let err = dir.add_user(name, "b@x.com", "B", "").unwrap_err();
    assert!(matches!(err, DirectoryError::Policy(PolicyFailure::Password)));
    assert!(!dir.has_user(name).unwrap());
    dir.set_policy(Arc::new(Permissive));
    dir.add_user(name, "", "B", "pw").unwrap();
    assert!(dir.has_user(name).unwrap());
    assert!(dir.remove_user(name).unwrap());
}

pub fn empty_password_is_refused(dir: &mut impl Directory) {
    let ref name = username("empty");
    let err = dir.add_user(name, "foo", "bar", "").unwrap_err();
    assert!(matches!(err, DirectoryError::Credential(_)));
    assert!(!dir.has_user(name).unwrap());
}

pub fn authentication_distinguishes_outcomes(dir: &mut impl Directory) {
    let ref name = username("auth");
    let ref pass = username("password");
    dir.add_user(name, "foo", "bar", pass).unwrap();
    assert_eq!(
        dir.authenticate_detailed(name, pass).unwrap(),
        Authentication::Authenticated
    );
    assert_eq!(
        dir.authenticate_detailed(name, "wrong pass").unwrap(),
        Authentication::WrongCredential
    );
    assert_eq!(
        dir.authenticate_detailed(name, "").unwrap(),
        Authentication::WrongCredential
    );
    let ref ghost = username("ghost");
    assert_eq!(
        dir.authenticate_detailed(ghost, pass).unwrap(),
        Authentication::UnknownUser
    );
    assert!(!dir.authenticate(ghost, pass).unwrap());
    assert!(dir.remove_user(name).unwrap());
}

pub fn end_to_end(dir: &mut impl Directory) {
    let ref alice = username("alice");
    dir.add_user(alice, "a@x.com", "Al", "secret").unwrap();
    assert!(dir.authenticate(alice, "secret").unwrap());
    assert!(!dir.authenticate(alice, "wrong").unwrap());
    assert_eq!(
        dir.user_data(alice).unwrap(),
        Some(UserRecord::from((alice.as_str(), "a@x.com", "Al")))
    );
    assert!(dir.remove_user(alice).unwrap());
}

pub fn updates_of_absent_users_are_noops(dir: &mut impl Directory) {
    let ref ghost = username("ghost");
    let ref other = username("elsewhere");
    dir.update_username(ghost, other).unwrap();
    dir.update_email(ghost, "qux").unwrap();
    dir.update_screen_name(ghost, "qux").unwrap();
    dir.update_password(ghost, "qux").unwrap();
    assert!(!dir.has_user(ghost).unwrap());
    assert!(!dir.has_user(other).unwrap());
}

pub fn rename_moves_the_whole_account(dir: &mut impl Directory) {
    let ref old = username("old");
    let ref new = username("new");
    dir.add_user(old, "foo", "bar", "baz").unwrap();
    dir.update_username(old, new).unwrap();
    assert!(!dir.has_user(old).unwrap());
    assert!(dir.has_user(new).unwrap());
    assert_eq!(
        dir.user_data(new).unwrap(),
        Some(UserRecord::from((new.as_str(), "foo", "bar")))
    );
    assert!(dir.authenticate(new, "baz").unwrap());
    assert_eq!(
        dir.authenticate_detailed(old, "baz").unwrap(),
        Authentication::UnknownUser
    );
    assert!(dir.remove_user(new).unwrap());
}

pub fn profile_updates_keep_the_credential(dir: &mut impl Directory) {
    let ref name = username("profile");
    dir.add_user(name, "foo", "bar", "baz").unwrap();
    dir.update_email(name, "qux").unwrap();
    assert_eq!(
        dir.user_data(name).unwrap(),
        Some(UserRecord::from((name.as_str(), "qux", "bar")))
    );
    dir.update_screen_name(name, "quux").unwrap();
    assert_eq!(
        dir.user_data(name).unwrap(),
        Some(UserRecord::from((name.as_str(), "qux", "quux")))
    );
    assert!(dir.authenticate(name, "baz").unwrap());
    assert!(dir.remove_user(name).unwrap());
}

pub fn password_update_replaces_the_credential(dir: &mut impl Directory) {
    let ref name = username("password");
    dir.add_user(name, "foo", "bar", "baz").unwrap();
    dir.update_password(name, "qux").unwrap();
    assert!(dir.authenticate(name, "qux").unwrap());
    assert!(!dir.authenticate(name, "baz").unwrap());
    assert_eq!(
        dir.user_data(name).unwrap(),
        Some(UserRecord::from((name.as_str(), "foo", "bar")))
    );
    let err = dir.update_password(name, "").unwrap_err();
    assert!(matches!(err, DirectoryError::Credential(_)));
    assert!(dir.authenticate(name, "qux").unwrap());
    assert!(dir.remove_user(name).unwrap());
}
