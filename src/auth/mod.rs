pub mod jwt;

pub use jwt::{decode_signing_key, sign_assertion, AssertionClaims};
