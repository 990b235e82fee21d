use std::collections::BTreeSet;

use super::fields::{Address, Email, Name, Phone, Tag};
use super::ids::Id;
use super::membership::Membership;
use super::Profile;

/// A club on the roster. Mirrors Person: same field set, its own handle type,
/// and a membership handle set maintained by the roster.
#[derive(Debug, Clone)]
pub struct Club {
    pub id: Id<Club>,
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
    pub membership_ids: BTreeSet<Id<Membership>>,
}

impl Club {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Self {
            id: Id::generate(),
            name,
            phone,
            email,
            address,
            tags,
            membership_ids: BTreeSet::new(),
        }
    }

    /// Same real-world club: normalized name match.
    pub fn same_identity(&self, other: &Club) -> bool {
        self.name.key() == other.name.key()
    }
}

impl PartialEq for Club {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.tags == other.tags
    }
}

impl Profile for Club {
    fn name(&self) -> &Name {
        &self.name
    }
    fn phone(&self) -> &Phone {
        &self.phone
    }
    fn email(&self) -> &Email {
        &self.email
    }
    fn address(&self) -> &Address {
        &self.address
    }
    fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
    fn membership_ids(&self) -> &BTreeSet<Id<Membership>> {
        &self.membership_ids
    }
}
