//! Opaque bearer token minting.

use uuid::Uuid;

/// Mints a session token of the form `<userId>-<uuid>`. The random uuid
/// suffix carries 122 bits of entropy from the OS RNG, which makes tokens
/// unguessable and collision-free in practice; the user id prefix only
/// helps when eyeballing logs. A replacement is minted on every login, so
/// an invalidated token value never comes back.
pub fn mint(user_id: &str) -> String {
    format!("{}-{}", user_id, Uuid::new_v4().simple())
}
