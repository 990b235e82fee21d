use chrono::NaiveDate;

use crate::error::RosterResult;
use crate::model::{Club, Id, Membership, Person};
use crate::roster::Roster;

/// Joins a person to a club for `months`, starting today. The duration is
/// bounds-checked first; a second membership for the same pair is rejected
/// by the roster before anything links.
pub fn join(
    roster: &mut Roster,
    person: &Person,
    club: &Club,
    months: u32,
    today: NaiveDate,
) -> RosterResult<Id<Membership>> {
    let membership = Membership::join(person.id, club.id, months, today)?;
    roster.link_membership(membership)
}

pub fn renew(
    roster: &mut Roster,
    id: Id<Membership>,
    months: u32,
    today: NaiveDate,
) -> RosterResult<Membership> {
    roster.with_membership_mut(id, |m| {
        m.renew(months, today)?;
        Ok(m.clone())
    })
}

pub fn cancel(roster: &mut Roster, id: Id<Membership>, today: NaiveDate) -> RosterResult<Membership> {
    roster.with_membership_mut(id, |m| {
        m.cancel(today)?;
        Ok(m.clone())
    })
}

pub fn reactivate(
    roster: &mut Roster,
    id: Id<Membership>,
    months: u32,
    today: NaiveDate,
) -> RosterResult<Membership> {
    roster.with_membership_mut(id, |m| {
        m.reactivate(months, today)?;
        Ok(m.clone())
    })
}

pub fn finalize_cancellation(
    roster: &mut Roster,
    id: Id<Membership>,
    today: NaiveDate,
) -> RosterResult<Membership> {
    roster.with_membership_mut(id, |m| {
        m.finalize_cancellation(today)?;
        Ok(m.clone())
    })
}

/// Physical removal from the roster and both endpoints, as opposed to a
/// status transition.
pub fn unlink(roster: &mut Roster, id: Id<Membership>) -> RosterResult<Membership> {
    roster.unlink_membership(id)
}
