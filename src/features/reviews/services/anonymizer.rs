//! Anonymous review identifiers.
//!
//! A token is `anon_` followed by 128 bits from the operating system CSPRNG,
//! hex encoded. Nothing about the request (address, time, sequence) goes in,
//! so a token cannot be linked back to whoever submitted the review.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::shared::constants::{ANONYMOUS_ID_BYTES, ANONYMOUS_ID_PREFIX};

pub fn generate_anonymous_id() -> String {
    let mut bytes = [0u8; ANONYMOUS_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    format!("{}{}", ANONYMOUS_ID_PREFIX, hex::encode(bytes))
}
