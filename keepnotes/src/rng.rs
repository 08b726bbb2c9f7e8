use rand::Rng;
use uuid::{Uuid, Variant, Version};

pub fn make_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random())
        .with_variant(Variant::RFC4122)
        .with_version(Version::Random)
        .into_uuid()
}

pub fn make_secret<R: Rng>(rng: &mut R, len: usize) -> Box<[u8]> {
    let mut secret = vec![0u8; len];
    rng.fill(&mut secret[..]);
    secret.into()
}
