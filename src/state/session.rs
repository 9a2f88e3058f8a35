/// Once-per-session cart reset
///
/// A session is the lifetime of the process. The first page load of a
/// session wipes the persisted cart and leaves a flag in the session
/// store so later page loads keep whatever the cart holds.

use super::store::{Persistence, StoreError};

/// Profile store key holding the serialized cart
pub const CART_KEY: &str = "cart";

/// Session store key marking that the reset already ran
pub const RESET_FLAG_KEY: &str = "cartResetDone";

/// Run the reset if this session has not done it yet.
///
/// Returns true when the persisted cart was wiped.
pub fn reset_once(
    session: &mut impl Persistence,
    profile: &mut impl Persistence,
) -> Result<bool, StoreError> {
    if session.get(RESET_FLAG_KEY)?.is_some() {
        return Ok(false);
    }

    profile.delete(CART_KEY)?;
    session.set(RESET_FLAG_KEY, "true")?;

    tracing::info!("🧹 Fresh session, persisted cart cleared");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::MemoryStore;

    #[test]
    fn test_first_load_resets() {
        let mut session = MemoryStore::new();
        let mut profile = MemoryStore::new();
        profile.set(CART_KEY, "[]").unwrap();

        assert!(reset_once(&mut session, &mut profile).unwrap());
        assert_eq!(profile.get(CART_KEY).unwrap(), None);
        assert_eq!(session.get(RESET_FLAG_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_second_load_keeps_cart() {
        let mut session = MemoryStore::new();
        let mut profile = MemoryStore::new();
        reset_once(&mut session, &mut profile).unwrap();

        profile.set(CART_KEY, "[1]").unwrap();
        assert!(!reset_once(&mut session, &mut profile).unwrap());
        assert_eq!(profile.get(CART_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_new_session_resets_again() {
        let mut profile = MemoryStore::new();
        reset_once(&mut MemoryStore::new(), &mut profile).unwrap();
        profile.set(CART_KEY, "[1]").unwrap();

        assert!(reset_once(&mut MemoryStore::new(), &mut profile).unwrap());
        assert_eq!(profile.get(CART_KEY).unwrap(), None);
    }
}
