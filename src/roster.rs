use crate::error::{RosterError, RosterResult};
use crate::list::{UniqueClubList, UniqueMembershipList, UniquePersonList};
use crate::model::{Club, Id, Membership, MembershipStatus, Person};
use crate::validation::identity_key;

/// Change notification emitted after each successful roster mutation.
/// Pushed only once an operation has fully committed, so an observer never
/// sees a membership linked to just one of its endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    PersonAdded { name: String },
    PersonEdited { name: String },
    PersonRemoved { name: String },
    ClubAdded { name: String },
    ClubEdited { name: String },
    ClubRemoved { name: String },
    MembershipLinked { person: String, club: String },
    MembershipUnlinked { person: String, club: String },
    /// A lifecycle mutation that left the status alone (e.g. renewing an
    /// already-active membership moves only the expiry date).
    MembershipUpdated { person: String, club: String },
    MembershipStatusChanged {
        person: String,
        club: String,
        from: MembershipStatus,
        to: MembershipStatus,
    },
}

/// The aggregate owning all three collections. Every cross-collection
/// operation goes through here so that person, club and membership state can
/// only change together: a membership is either linked into the list and both
/// endpoints' handle sets, or not present anywhere.
#[derive(Debug, Default)]
pub struct Roster {
    persons: UniquePersonList,
    clubs: UniqueClubList,
    memberships: UniqueMembershipList,
    events: Vec<RosterEvent>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- ordered read-only views ----

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn clubs(&self) -> &[Club] {
        self.clubs.as_slice()
    }

    pub fn memberships(&self) -> &[Membership] {
        self.memberships.as_slice()
    }

    // ---- lookups ----

    pub fn person(&self, id: Id<Person>) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    pub fn club(&self, id: Id<Club>) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn membership(&self, id: Id<Membership>) -> Option<&Membership> {
        self.memberships.iter().find(|m| m.id == id)
    }

    /// Case-insensitive email lookup; the deserializer resolves person
    /// foreign keys through this.
    pub fn find_person_by_email(&self, email: &str) -> Option<&Person> {
        let key = email.trim().to_lowercase();
        self.persons.iter().find(|p| p.email.key() == key)
    }

    /// Normalized-name lookup; the deserializer resolves club foreign keys
    /// through this.
    pub fn find_club_by_name(&self, name: &str) -> Option<&Club> {
        let key = identity_key(name);
        self.clubs.iter().find(|c| c.name.key() == key)
    }

    pub fn membership_between(
        &self,
        person_id: Id<Person>,
        club_id: Id<Club>,
    ) -> Option<&Membership> {
        self.memberships
            .iter()
            .find(|m| m.person_id == person_id && m.club_id == club_id)
    }

    pub fn has_person(&self, candidate: &Person) -> bool {
        self.persons.contains(candidate)
    }

    pub fn has_club(&self, candidate: &Club) -> bool {
        self.clubs.contains(candidate)
    }

    // ---- entity mutations ----

    pub fn add_person(&mut self, person: Person) -> RosterResult<()> {
        let name = person.name.as_str().to_string();
        self.persons.add(person)?;
        self.emit(RosterEvent::PersonAdded { name });
        Ok(())
    }

    /// Replaces `target` with `edited` in place. The replacement inherits the
    /// target's handle and membership links: editing changes what a person
    /// looks like, not who they are connected to.
    pub fn set_person(&mut self, target: &Person, mut edited: Person) -> RosterResult<()> {
        let existing = self
            .persons
            .iter()
            .find(|p| *p == target)
            .ok_or_else(|| RosterError::NotFound {
                entity: "person",
                identity: target.name.as_str().to_string(),
            })?;
        edited.id = existing.id;
        edited.membership_ids = existing.membership_ids.clone();

        let name = edited.name.as_str().to_string();
        self.persons.set_item(target, edited)?;
        self.emit(RosterEvent::PersonEdited { name });
        Ok(())
    }

    /// Refuses while any membership still references the person; callers
    /// unlink explicitly first. Keeps membership audit history from being
    /// destroyed as a side effect of an entity removal.
    pub fn remove_person(&mut self, target: &Person) -> RosterResult<Person> {
        if let Some(existing) = self.persons.iter().find(|p| *p == target) {
            let count = existing.membership_ids.len();
            if count > 0 {
                return Err(RosterError::StillLinked {
                    entity: "person",
                    identity: existing.name.as_str().to_string(),
                    count,
                });
            }
        }
        let removed = self.persons.remove(target)?;
        self.emit(RosterEvent::PersonRemoved {
            name: removed.name.as_str().to_string(),
        });
        Ok(removed)
    }

    pub fn add_club(&mut self, club: Club) -> RosterResult<()> {
        let name = club.name.as_str().to_string();
        self.clubs.add(club)?;
        self.emit(RosterEvent::ClubAdded { name });
        Ok(())
    }

    pub fn set_club(&mut self, target: &Club, mut edited: Club) -> RosterResult<()> {
        let existing = self
            .clubs
            .iter()
            .find(|c| *c == target)
            .ok_or_else(|| RosterError::NotFound {
                entity: "club",
                identity: target.name.as_str().to_string(),
            })?;
        edited.id = existing.id;
        edited.membership_ids = existing.membership_ids.clone();

        let name = edited.name.as_str().to_string();
        self.clubs.set_item(target, edited)?;
        self.emit(RosterEvent::ClubEdited { name });
        Ok(())
    }

    pub fn remove_club(&mut self, target: &Club) -> RosterResult<Club> {
        if let Some(existing) = self.clubs.iter().find(|c| *c == target) {
            let count = existing.membership_ids.len();
            if count > 0 {
                return Err(RosterError::StillLinked {
                    entity: "club",
                    identity: existing.name.as_str().to_string(),
                    count,
                });
            }
        }
        let removed = self.clubs.remove(target)?;
        self.emit(RosterEvent::ClubRemoved {
            name: removed.name.as_str().to_string(),
        });
        Ok(removed)
    }

    // ---- membership link / unlink ----

    /// Inserts the membership into the membership list and both endpoints'
    /// handle sets. Every check runs before the first mutation, so a failure
    /// leaves the roster untouched.
    pub fn link_membership(&mut self, membership: Membership) -> RosterResult<Id<Membership>> {
        let person_name = self
            .person(membership.person_id)
            .ok_or_else(|| RosterError::NotFound {
                entity: "person",
                identity: membership.person_id.to_string(),
            })?
            .name
            .as_str()
            .to_string();
        let club_name = self
            .club(membership.club_id)
            .ok_or_else(|| RosterError::NotFound {
                entity: "club",
                identity: membership.club_id.to_string(),
            })?
            .name
            .as_str()
            .to_string();

        if self.memberships.contains(&membership) {
            return Err(RosterError::Duplicate {
                entity: "membership",
                identity: format!("{} / {}", person_name, club_name),
            });
        }

        let id = membership.id;
        let person_id = membership.person_id;
        let club_id = membership.club_id;

        self.memberships.add(membership)?;
        if let Some(person) = self.persons.find_mut(|p| p.id == person_id) {
            person.membership_ids.insert(id);
        }
        if let Some(club) = self.clubs.find_mut(|c| c.id == club_id) {
            club.membership_ids.insert(id);
        }

        self.emit(RosterEvent::MembershipLinked {
            person: person_name,
            club: club_name,
        });
        Ok(id)
    }

    /// Removes the membership from the list and from both endpoints' handle
    /// sets. Unlinking is physical removal, distinct from any status
    /// transition.
    pub fn unlink_membership(&mut self, id: Id<Membership>) -> RosterResult<Membership> {
        let membership = self
            .membership(id)
            .cloned()
            .ok_or_else(|| RosterError::NotFound {
                entity: "membership",
                identity: id.to_string(),
            })?;

        let person_name = self
            .person(membership.person_id)
            .map(|p| p.name.as_str().to_string())
            .unwrap_or_else(|| membership.person_id.to_string());
        let club_name = self
            .club(membership.club_id)
            .map(|c| c.name.as_str().to_string())
            .unwrap_or_else(|| membership.club_id.to_string());

        let removed = self.memberships.remove(&membership)?;
        if let Some(person) = self.persons.find_mut(|p| p.id == removed.person_id) {
            person.membership_ids.remove(&id);
        }
        if let Some(club) = self.clubs.find_mut(|c| c.id == removed.club_id) {
            club.membership_ids.remove(&id);
        }

        self.emit(RosterEvent::MembershipUnlinked {
            person: person_name,
            club: club_name,
        });
        Ok(removed)
    }

    /// The single mutation path for lifecycle transitions. Emits a status
    /// change event when the stored status moved, which is how observers of
    /// the outer collections learn about mutations nested inside an entity.
    pub fn with_membership_mut<R>(
        &mut self,
        id: Id<Membership>,
        f: impl FnOnce(&mut Membership) -> RosterResult<R>,
    ) -> RosterResult<R> {
        let current = self.membership(id).ok_or_else(|| RosterError::NotFound {
            entity: "membership",
            identity: id.to_string(),
        })?;
        let person_name = self
            .person(current.person_id)
            .map(|p| p.name.as_str().to_string())
            .unwrap_or_else(|| current.person_id.to_string());
        let club_name = self
            .club(current.club_id)
            .map(|c| c.name.as_str().to_string())
            .unwrap_or_else(|| current.club_id.to_string());

        let membership = self
            .memberships
            .find_mut(|m| m.id == id)
            .ok_or_else(|| RosterError::NotFound {
                entity: "membership",
                identity: id.to_string(),
            })?;

        let before = membership.clone();
        let result = f(membership)?;
        let after = membership.clone();

        if before.status != after.status {
            self.emit(RosterEvent::MembershipStatusChanged {
                person: person_name,
                club: club_name,
                from: before.status,
                to: after.status,
            });
        } else if after != before {
            self.emit(RosterEvent::MembershipUpdated {
                person: person_name,
                club: club_name,
            });
        }
        Ok(result)
    }

    // ---- change notification ----

    pub fn take_events(&mut self) -> Vec<RosterEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn emit(&mut self, event: RosterEvent) {
        self.events.push(event);
    }
}
