//! Whitelist of addresses calls may be relayed for.

use alloc::collections::BTreeSet;

use alloy_primitives::Address;

use crate::errors::RegistryError;

/// Read side of the whitelist. Implemented by contract storage and by [`MemoryWhitelist`].
pub trait WhitelistRegistry {
    fn owner(&self) -> Address;

    /// Explicit membership only. Absent addresses are `false`.
    fn is_whitelisted(&self, account: Address) -> bool;

    /// The owner is always authorized, whitelisted or not.
    fn is_authorized(&self, account: Address) -> bool {
        account == self.owner() || self.is_whitelisted(account)
    }
}

/// Owned, in-memory whitelist. Membership is append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryWhitelist {
    owner: Address,
    members: BTreeSet<Address>,
}

impl MemoryWhitelist {
    /// Empty whitelist administered by `owner` (the deployer).
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            members: BTreeSet::new(),
        }
    }

    /// Add `account`, on behalf of `requested_by`. Idempotent for the owner.
    pub fn add_whitelist(
        &mut self,
        account: Address,
        requested_by: Address,
    ) -> Result<(), RegistryError> {
        if requested_by != self.owner {
            return Err(RegistryError::Unauthorized {
                caller: requested_by,
            });
        }
        self.members.insert(account);
        Ok(())
    }
}

impl WhitelistRegistry for MemoryWhitelist {
    fn owner(&self) -> Address {
        self.owner
    }

    fn is_whitelisted(&self, account: Address) -> bool {
        self.members.contains(&account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: Address = Address::repeat_byte(0xAA);
    const USER: Address = Address::repeat_byte(0x11);

    #[test]
    fn fresh_registry_has_no_members() {
        let registry = MemoryWhitelist::new(OWNER);
        assert!(!registry.is_whitelisted(USER));
        assert!(!registry.is_whitelisted(Address::ZERO));
        // Owner is authorized but not a member.
        assert!(!registry.is_whitelisted(OWNER));
        assert!(registry.is_authorized(OWNER));
    }

    #[test]
    fn owner_add_is_idempotent() {
        let mut registry = MemoryWhitelist::new(OWNER);
        assert_eq!(registry.add_whitelist(USER, OWNER), Ok(()));
        assert_eq!(registry.add_whitelist(USER, OWNER), Ok(()));
        assert!(registry.is_whitelisted(USER));
        assert!(registry.is_authorized(USER));

        let mut once = MemoryWhitelist::new(OWNER);
        once.add_whitelist(USER, OWNER).unwrap();
        assert_eq!(registry, once);
    }

    #[test]
    fn non_owner_add_is_rejected() {
        let mut registry = MemoryWhitelist::new(OWNER);
        let err = registry.add_whitelist(USER, USER).unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized { caller: USER });
        assert!(!registry.is_whitelisted(USER));
        assert_eq!(registry, MemoryWhitelist::new(OWNER));
    }

    #[test]
    fn members_cannot_add_others() {
        let mut registry = MemoryWhitelist::new(OWNER);
        registry.add_whitelist(USER, OWNER).unwrap();
        let other = Address::repeat_byte(0x22);
        assert!(registry.add_whitelist(other, USER).is_err());
        assert!(!registry.is_whitelisted(other));
    }
}
