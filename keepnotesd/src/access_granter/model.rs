use keepnotes::credential_store::Identity;

#[derive(Debug)]
pub struct LoginResult {
    pub identity: Identity,
    pub access_token: String,
}
