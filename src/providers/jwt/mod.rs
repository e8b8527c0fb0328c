mod claims;
mod sign;
mod verify;

pub use claims::AccessTokenClaims;
pub use sign::{sign_access_token, sign_jwt};
pub use verify::{verify_access_token, verify_jwt};

#[cfg(test)]
mod tests;
