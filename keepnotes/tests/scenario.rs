use std::str::FromStr;
use argon2::Params;
use keepnotes::access_token::{AccessTokenValidationError, ProductionAccessTokenService, TokenSecret};
use keepnotes::credential_store::{CredentialStore, CredentialStoreError, ProductionCredentialStore};
use keepnotes::hasher::{ProductionHasher, ProductionHasherConfig};
use keepnotes::note_store::{NewNote, NoteLimits, NoteStore, NoteStoreError, Priority, ProductionNoteStore};
use keepnotes::username_string::UsernameString;
use time::Duration;

fn credential_store() -> ProductionCredentialStore {
    ProductionCredentialStore::new(
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
    )
}

fn note_store() -> ProductionNoteStore {
    ProductionNoteStore::new(
        NoteLimits {
            max_title_len: 256,
            max_body_len: 1024,
        }
    )
}

#[tokio::test]
async fn register_login_and_manage_notes() {
    let credentials = credential_store();
    let tokens = ProductionAccessTokenService::new(&TokenSecret::generate()).unwrap();
    let notes = note_store();
    let alice = UsernameString::from_str("alice").unwrap();

    let registered = credentials.register(&alice, "secret123").await.unwrap();
    let identity = credentials.login(&alice, "secret123").await.unwrap();
    assert_eq!(identity.id, registered.id);

    let token = tokens.issue(&identity, Duration::hours(24)).unwrap();
    let claims = tokens.validate(&token).unwrap();
    assert_eq!(claims.owner_id, identity.id);
    assert_eq!(claims.username, alice);

    let note = notes.create(
        claims.owner_id,
        NewNote {
            title: "Buy milk".to_owned(),
            priority: Some(Priority::High),
            ..NewNote::default()
        },
    ).await.unwrap();

    let listed = notes.list(claims.owner_id).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Buy milk");
    assert!(!listed[0].done);

    notes.delete(claims.owner_id, note.id).await.unwrap();
    assert_eq!(
        notes.get(claims.owner_id, note.id).await,
        Err(NoteStoreError::NotFound),
    );
}

#[tokio::test]
async fn tokens_do_not_cross_secrets() {
    let credentials = credential_store();
    let ours = ProductionAccessTokenService::new(&TokenSecret::generate()).unwrap();
    let theirs = ProductionAccessTokenService::new(&TokenSecret::generate()).unwrap();
    let identity = credentials
        .register(&UsernameString::from_str("alice").unwrap(), "secret123")
        .await
        .unwrap();

    let token = theirs.issue(&identity, Duration::hours(1)).unwrap();
    assert_eq!(ours.validate(&token), Err(AccessTokenValidationError::Forged));
}

#[tokio::test]
async fn failed_logins() {
    let credentials = credential_store();
    let alice = UsernameString::from_str("alice").unwrap();
    credentials.register(&alice, "secret123").await.unwrap();

    assert!(matches!(
        credentials.login(&alice, "secret124").await,
        Err(CredentialStoreError::WrongCredential),
    ));
    assert!(matches!(
        credentials.login(&UsernameString::from_str("Alice").unwrap(), "secret123").await,
        Err(CredentialStoreError::NotFound),
    ));
}
