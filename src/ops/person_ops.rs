use std::collections::BTreeSet;

use crate::error::RosterResult;
use crate::model::{Address, Email, Name, Person, Phone, Tag};
use crate::roster::Roster;

/// Validates the raw fields and adds the person. A normalized-name collision
/// with an existing person is rejected without touching the roster.
pub fn add_person(
    roster: &mut Roster,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    tags: &[&str],
) -> RosterResult<Person> {
    let person = build_person(name, phone, email, address, tags)?;
    let created = person.clone();
    roster.add_person(person)?;
    Ok(created)
}

/// Rebuilds the person from the given fields, keeping `target`'s value for
/// every `None`. Blank phone/address input clears the field. The edited
/// person keeps the target's membership links.
pub fn edit_person(
    roster: &mut Roster,
    target: &Person,
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    address: Option<&str>,
    tags: Option<&[&str]>,
) -> RosterResult<Person> {
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

    let edited = Person::new(name, phone, email, address, tags);
    let updated = edited.clone();
    roster.set_person(target, edited)?;
    Ok(updated)
}

/// Fails while the person still has memberships; unlink them first.
pub fn remove_person(roster: &mut Roster, target: &Person) -> RosterResult<Person> {
    roster.remove_person(target)
}

fn build_person(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    tags: &[&str],
) -> RosterResult<Person> {
    Ok(Person::new(
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
