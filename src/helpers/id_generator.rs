use rand::distributions::Alphanumeric;
use rand::Rng;
use crate::config::constants::MESSAGE_ID_LENGTH;
use crate::traits::id_generator::IdGenerator;

/// Draws `len` symbols uniformly from `A-Z`, `a-z` and `0-9`.
pub fn alphanumeric_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Message ids for the blackbox endpoint. No uniqueness guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        alphanumeric_id(&mut rand::thread_rng(), MESSAGE_ID_LENGTH)
    }
}
