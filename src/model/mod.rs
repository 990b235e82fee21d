pub mod club;
pub mod fields;
pub mod ids;
pub mod membership;
pub mod person;

// Re-exports for convenience
pub use club::Club;
pub use fields::{Address, Email, Name, Phone, Tag};
pub use ids::Id;
pub use membership::{
    Membership, MembershipEvent, MembershipEventKind, MembershipStatus, MAX_JOIN_MONTHS,
    MAX_RENEW_MONTHS,
};
pub use person::Person;

use std::collections::BTreeSet;

/// Capability surface shared by the two entity kinds. The search and
/// presentation layers filter against this instead of naming Person or Club.
pub trait Profile {
    fn name(&self) -> &Name;
    fn phone(&self) -> &Phone;
    fn email(&self) -> &Email;
    fn address(&self) -> &Address;
    fn tags(&self) -> &BTreeSet<Tag>;
    fn membership_ids(&self) -> &BTreeSet<Id<Membership>>;
}
