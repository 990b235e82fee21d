use std::collections::BTreeSet;

use super::fields::{Address, Email, Name, Phone, Tag};
use super::ids::Id;
use super::membership::Membership;
use super::Profile;

/// A person on the roster. Data fields do not change after construction
/// (editing replaces the whole record); the membership handle set is
/// maintained exclusively by the roster's link/unlink operations.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: Id<Person>,
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
    pub membership_ids: BTreeSet<Id<Membership>>,
}

impl Person {
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

    /// Same real-world person: normalized name match.
    pub fn same_identity(&self, other: &Person) -> bool {
        self.name.key() == other.name.key()
    }
}

/// Full equality covers every data field. The id and the membership handles
/// are runtime bookkeeping, left out so a detached copy of a listed person
/// still matches for removal and replacement.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.tags == other.tags
    }
}

impl Profile for Person {
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
