use chrono::NaiveDate;

use crate::model::{Club, Membership, Person};
use crate::roster::Roster;

pub fn all(roster: &Roster) -> &[Membership] {
    roster.memberships()
}

/// Memberships whose effective status is Active today. Cancelled and pending
/// ones are excluded, as are stored-Active memberships past their expiry.
pub fn active(roster: &Roster, today: NaiveDate) -> Vec<&Membership> {
    roster
        .memberships()
        .iter()
        .filter(|m| m.is_active(today))
        .collect()
}

pub fn for_person<'a>(roster: &'a Roster, person: &Person) -> Vec<&'a Membership> {
    person
        .membership_ids
        .iter()
        .filter_map(|id| roster.membership(*id))
        .collect()
}

pub fn for_club<'a>(roster: &'a Roster, club: &Club) -> Vec<&'a Membership> {
    club.membership_ids
        .iter()
        .filter_map(|id| roster.membership(*id))
        .collect()
}

pub fn between<'a>(roster: &'a Roster, person: &Person, club: &Club) -> Option<&'a Membership> {
    roster.membership_between(person.id, club.id)
}
