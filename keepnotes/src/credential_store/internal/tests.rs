use std::str::FromStr;
use std::sync::{mpsc, Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use argon2::{Params, PasswordHash};
use argon2::password_hash::PasswordHashString;
use time::Duration;
use crate::clock::testing::{ManualClock, TEST_EPOCH};
use crate::hasher::ProductionHasherConfig;
use super::*;

type TestCredentialStore = CredentialStoreImpl<ProductionHasher, ManualClock>;

fn make_store() -> TestCredentialStore {
    make_store_with_clock(ManualClock::default())
}

fn make_store_with_clock(clock: ManualClock) -> TestCredentialStore {
    CredentialStoreImpl::new_impl(make_hasher(), clock)
}

fn make_hasher() -> ProductionHasher {
    ProductionHasher::new(
        ProductionHasherConfig::new(
            Params::new(
                Params::MIN_M_COST,
                Params::MIN_T_COST,
                Params::MIN_P_COST,
                None,
            ).unwrap()
        )
    )
}

/// Refuses to hash until something else on the runtime opens the gate.
struct GatedHasher {
    inner: ProductionHasher,
    gate: Mutex<mpsc::Receiver<()>>,
}

impl Hasher for GatedHasher {
    fn generate_hash(
        &self,
        password: &str,
    ) -> Result<PasswordHashString, HasherError> {
        self.gate
            .lock()
            .unwrap()
            .recv_timeout(std::time::Duration::from_secs(10))
            .map_err(|e| HasherError::Hash(Box::new(e)))?;
        self.inner.generate_hash(password)
    }

    fn check_hash(
        &self,
        hash: PasswordHash<'_>,
        password: &str,
    ) -> Result<bool, HasherError> {
        self.inner.check_hash(hash, password)
    }
}

struct CountingHasher {
    inner: ProductionHasher,
    calls: Arc<AtomicUsize>,
}

impl Hasher for CountingHasher {
    fn generate_hash(
        &self,
        password: &str,
    ) -> Result<PasswordHashString, HasherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.generate_hash(password)
    }

    fn check_hash(
        &self,
        hash: PasswordHash<'_>,
        password: &str,
    ) -> Result<bool, HasherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.check_hash(hash, password)
    }
}

fn username(name: &str) -> UsernameString {
    UsernameString::from_str(name).unwrap()
}

#[tokio::test]
async fn register_then_login() {
    let store = make_store();
    let registered = store.register(&username("alice"), "secret123").await.unwrap();
    assert_eq!(registered.username, username("alice"));

    let logged_in = store.login(&username("alice"), "secret123").await.unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(logged_in, registered);
}

#[tokio::test]
async fn stored_hash_is_not_the_password() {
    let store = make_store();
    let identity = store.register(&username("alice"), "secret123").await.unwrap();
    assert!(!identity.password_hash.as_str().contains("secret123"));
}

#[tokio::test]
async fn created_at_comes_from_the_clock() {
    let clock = ManualClock::default();
    let store = make_store_with_clock(clock.clone());
    clock.advance(Duration::minutes(5));
    let identity = store.register(&username("alice"), "secret123").await.unwrap();
    assert_eq!(identity.created_at, TEST_EPOCH + Duration::minutes(5));
}

#[tokio::test]
async fn register_twice_fails_and_keeps_first() {
    let store = make_store();
    let first = store.register(&username("alice"), "secret123").await.unwrap();

    let err = store.register(&username("alice"), "other").await
        .expect_err("second registration should fail");
    assert!(matches!(err, CredentialStoreError::AlreadyExists), "wrong error type: {err:#?}");

    let logged_in = store.login(&username("alice"), "secret123").await.unwrap();
    assert_eq!(logged_in.id, first.id);
    let err = store.login(&username("alice"), "other").await
        .expect_err("password of the failed registration should not work");
    assert!(matches!(err, CredentialStoreError::WrongCredential), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn login_wrong_password() {
    let store = make_store();
    store.register(&username("alice"), "secret123").await.unwrap();
    for password in ["wrong", "", "secret1234", "Secret123"] {
        let err = store.login(&username("alice"), password).await
            .expect_err("should fail");
        assert!(matches!(err, CredentialStoreError::WrongCredential), "wrong error type: {err:#?}");
    }
}

#[tokio::test]
async fn login_unknown_user() {
    let store = make_store();
    store.register(&username("alice"), "secret123").await.unwrap();
    let err = store.login(&username("bob"), "secret123").await
        .expect_err("should fail");
    assert!(matches!(err, CredentialStoreError::NotFound), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let store = make_store();
    let lower = store.register(&username("alice"), "secret123").await.unwrap();
    let upper = store.register(&username("Alice"), "secret123").await.unwrap();
    assert_ne!(lower.id, upper.id);

    let err = store.login(&username("ALICE"), "secret123").await
        .expect_err("should fail");
    assert!(matches!(err, CredentialStoreError::NotFound), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn identities_get_distinct_ids() {
    let store = make_store();
    let alice = store.register(&username("alice"), "pass").await.unwrap();
    let bob = store.register(&username("bob"), "pass").await.unwrap();
    assert_ne!(alice.id, bob.id);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_of_one_name() {
    let store = Arc::new(make_store());
    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store.register(&username("carol"), &format!("password{i}")).await
            })
        })
        .collect();

    let mut winners = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(identity) => winners.push(identity),
            Err(CredentialStoreError::AlreadyExists) => {},
            Err(e) => panic!("unexpected error: {e:#?}"),
        }
    }
    assert_eq!(winners.len(), 1);

    let winner = winners.pop().unwrap();
    let mut logged_in = Vec::new();
    for i in 0..16 {
        if let Ok(identity) = store.login(&username("carol"), &format!("password{i}")).await {
            logged_in.push(identity);
        }
    }
    assert_eq!(logged_in, vec![winner]);
}

// single-threaded runtime: the gate can only open if hashing runs elsewhere
#[tokio::test(flavor = "current_thread")]
async fn hashing_leaves_the_runtime_free() {
    let (open_gate, gate) = mpsc::channel();
    let store = CredentialStoreImpl::new_impl(
        GatedHasher {
            inner: make_hasher(),
            gate: Mutex::new(gate),
        },
        ManualClock::default(),
    );
    let opener = tokio::spawn(async move {
        open_gate.send(()).unwrap();
    });

    let identity = store.register(&username("alice"), "secret123").await.unwrap();
    opener.await.unwrap();
    assert_eq!(store.login("alice", "secret123").await.unwrap(), identity);
}

#[tokio::test]
async fn malformed_usernames_are_hashed_like_unknown_ones() {
    let calls = Arc::new(AtomicUsize::new(0));
    let store = CredentialStoreImpl::new_impl(
        CountingHasher {
            inner: make_hasher(),
            calls: calls.clone(),
        },
        ManualClock::default(),
    );
    store.register(&username("alice"), "secret123").await.unwrap();
    calls.store(0, Ordering::SeqCst);

    let too_long = "a".repeat(65);
    let names = ["", "  ", "ali\u{7}ce", too_long.as_str(), "bob"];
    for name in names {
        let err = store.login(name, "secret123").await
            .expect_err("should fail");
        assert!(matches!(err, CredentialStoreError::NotFound), "wrong error type: {err:#?}");
    }
    assert_eq!(calls.load(Ordering::SeqCst), names.len());

    store.login("alice", "wrong").await.expect_err("should fail");
    assert_eq!(calls.load(Ordering::SeqCst), names.len() + 1);
}
