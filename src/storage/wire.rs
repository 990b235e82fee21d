use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::model::{
    Address, Club, Email, Id, Membership, MembershipEvent, MembershipStatus, Name, Person, Phone,
    Tag,
};
use crate::roster::Roster;

/// The persisted document: three flat sequences. A membership references its
/// endpoints by natural key only; embedding either side would put a cycle in
/// the tree, since persons and clubs hold handles back into their
/// memberships.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterFile {
    pub persons: Vec<PersonRecord>,
    pub clubs: Vec<ClubRecord>,
    pub memberships: Vec<MembershipRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClubRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub person_email: String,
    pub club_name: String,
    pub join_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: MembershipStatus,
    #[serde(default)]
    pub history: Vec<MembershipEvent>,
}

/// Flattens the roster into the wire document. Membership records come from
/// the membership list alone; it is the single owner of each relationship, so
/// no dedup pass is needed. A dangling endpoint is fatal here, never papered
/// over.
pub fn encode(roster: &Roster) -> RosterResult<RosterFile> {
    let persons = roster.persons().iter().map(person_record).collect();
    let clubs = roster.clubs().iter().map(club_record).collect();
    let memberships = roster
        .memberships()
        .iter()
        .map(|m| membership_record(roster, m))
        .collect::<RosterResult<Vec<_>>>()?;
    Ok(RosterFile {
        persons,
        clubs,
        memberships,
    })
}

/// Rebuilds a roster from the wire document, in strict order: persons, then
/// clubs, then memberships resolved against the populated collections. Any
/// failure rejects the whole file; the caller's roster is never touched
/// because decoding builds a fresh one.
pub fn decode(file: RosterFile) -> RosterResult<Roster> {
    let mut roster = Roster::new();

    for record in &file.persons {
        roster.add_person(parse_person(record)?)?;
    }
    for record in &file.clubs {
        roster.add_club(parse_club(record)?)?;
    }
    for record in file.memberships {
        let person_id = roster
            .find_person_by_email(&record.person_email)
            .map(|p| p.id)
            .ok_or_else(|| RosterError::InvalidMembershipLink {
                entity: "person",
                key: record.person_email.clone(),
            })?;
        let club_id = roster
            .find_club_by_name(&record.club_name)
            .map(|c| c.id)
            .ok_or_else(|| RosterError::InvalidMembershipLink {
                entity: "club",
                key: record.club_name.clone(),
            })?;

        // The persisted status and history are authoritative; nothing is
        // recomputed from dates, so a CANCELLED membership survives a reload.
        let membership = Membership {
            id: Id::generate(),
            person_id,
            club_id,
            join_date: record.join_date,
            expiry_date: record.expiry_date,
            status: record.status,
            history: record.history,
        };
        roster.link_membership(membership)?;
    }

    // Reconstruction is not a user-visible mutation.
    roster.take_events();
    Ok(roster)
}

fn person_record(person: &Person) -> PersonRecord {
    PersonRecord {
        name: person.name.as_str().to_string(),
        phone: person
            .phone
            .is_present()
            .then(|| person.phone.as_str().to_string()),
        email: person.email.as_str().to_string(),
        address: person
            .address
            .is_present()
            .then(|| person.address.as_str().to_string()),
        tags: person.tags.iter().map(|t| t.as_str().to_string()).collect(),
    }
}

fn club_record(club: &Club) -> ClubRecord {
    ClubRecord {
        name: club.name.as_str().to_string(),
        phone: club
            .phone
            .is_present()
            .then(|| club.phone.as_str().to_string()),
        email: club.email.as_str().to_string(),
        address: club
            .address
            .is_present()
            .then(|| club.address.as_str().to_string()),
        tags: club.tags.iter().map(|t| t.as_str().to_string()).collect(),
    }
}

fn membership_record(roster: &Roster, membership: &Membership) -> RosterResult<MembershipRecord> {
    let person = roster
        .person(membership.person_id)
        .ok_or_else(|| RosterError::InvalidMembershipLink {
            entity: "person",
            key: membership.person_id.to_string(),
        })?;
    let club = roster
        .club(membership.club_id)
        .ok_or_else(|| RosterError::InvalidMembershipLink {
            entity: "club",
            key: membership.club_id.to_string(),
        })?;
    Ok(MembershipRecord {
        person_email: person.email.as_str().to_string(),
        club_name: club.name.as_str().to_string(),
        join_date: membership.join_date,
        expiry_date: membership.expiry_date,
        status: membership.status,
        history: membership.history.clone(),
    })
}

fn parse_person(record: &PersonRecord) -> RosterResult<Person> {
    let name = Name::parse(&record.name)?;
    let phone = match &record.phone {
        Some(raw) => Phone::parse(raw)?,
        None => Phone::none(),
    };
    let email = Email::parse(&record.email)?;
    let address = match &record.address {
        Some(raw) => Address::parse(raw)?,
        None => Address::none(),
    };
    let tags = parse_tags(&record.tags)?;
    Ok(Person::new(name, phone, email, address, tags))
}

fn parse_club(record: &ClubRecord) -> RosterResult<Club> {
    let name = Name::parse(&record.name)?;
    let phone = match &record.phone {
        Some(raw) => Phone::parse(raw)?,
        None => Phone::none(),
    };
    let email = Email::parse(&record.email)?;
    let address = match &record.address {
        Some(raw) => Address::parse(raw)?,
        None => Address::none(),
    };
    let tags = parse_tags(&record.tags)?;
    Ok(Club::new(name, phone, email, address, tags))
}

fn parse_tags(raw: &[String]) -> RosterResult<BTreeSet<Tag>> {
    raw.iter().map(|t| Tag::parse(t)).collect()
}
