use std::collections::BTreeSet;

use crate::error::RosterResult;
use crate::model::{Address, Club, Email, Name, Phone, Tag};
use crate::roster::Roster;

/// Validates the raw fields and adds the club.
pub fn add_club(
    roster: &mut Roster,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    tags: &[&str],
) -> RosterResult<Club> {
    let club = build_club(name, phone, email, address, tags)?;
    let created = club.clone();
    roster.add_club(club)?;
    Ok(created)
}

/// Rebuilds the club from the given fields, keeping `target`'s value for
/// every `None`. The edited club keeps the target's membership links.
pub fn edit_club(
    roster: &mut Roster,
    target: &Club,
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    address: Option<&str>,
    tags: Option<&[&str]>,
) -> RosterResult<Club> {
    let name = match name {
        Some(raw) => Name::parse(raw)?,
        None => target.name.clone(),
    };
    let phone = match phone {
        Some(raw) => Phone::parse(raw)?,
        None => target.phone.clone(),
    };
    let email = match email {
        Some(raw) => Email::parse(raw)?,
        None => target.email.clone(),
    };
    let address = match address {
        Some(raw) => Address::parse(raw)?,
        None => target.address.clone(),
    };
    let tags = match tags {
        Some(raw) => parse_tags(raw)?,
        None => target.tags.clone(),
    };

    let edited = Club::new(name, phone, email, address, tags);
    let updated = edited.clone();
    roster.set_club(target, edited)?;
    Ok(updated)
}

/// Fails while the club still has memberships; unlink them first.
pub fn remove_club(roster: &mut Roster, target: &Club) -> RosterResult<Club> {
    roster.remove_club(target)
}

fn build_club(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    tags: &[&str],
) -> RosterResult<Club> {
    Ok(Club::new(
        Name::parse(name)?,
        Phone::parse(phone)?,
        Email::parse(email)?,
        Address::parse(address)?,
        parse_tags(tags)?,
    ))
}

fn parse_tags(raw: &[&str]) -> RosterResult<BTreeSet<Tag>> {
    raw.iter().map(|t| Tag::parse(t)).collect()
}
