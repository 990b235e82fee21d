use crate::error::{RosterError, RosterResult};
use crate::model::{Club, Membership, Person};

/// Identity equality: whether two values describe the same real-world entity.
/// Used for duplicate detection and lookups. Full equality (`PartialEq`) is a
/// separate notion covering every field, used for exact-match removal and
/// replacement; the two must not be conflated.
pub trait Identity {
    /// Entity noun used in error messages.
    const ENTITY: &'static str;

    fn same_identity(&self, other: &Self) -> bool;

    /// Human-readable natural key for error messages.
    fn identity_label(&self) -> String;
}

impl Identity for Person {
    const ENTITY: &'static str = "person";

    fn same_identity(&self, other: &Self) -> bool {
        Person::same_identity(self, other)
    }

    fn identity_label(&self) -> String {
        self.name.as_str().to_string()
    }
}

impl Identity for Club {
    const ENTITY: &'static str = "club";

    fn same_identity(&self, other: &Self) -> bool {
        Club::same_identity(self, other)
    }

    fn identity_label(&self) -> String {
        self.name.as_str().to_string()
    }
}

impl Identity for Membership {
    const ENTITY: &'static str = "membership";

    fn same_identity(&self, other: &Self) -> bool {
        Membership::same_identity(self, other)
    }

    fn identity_label(&self) -> String {
        format!("{} / {}", self.person_id, self.club_id)
    }
}

/// An ordered collection that never holds two identity-equal elements.
/// Insertion order is preserved; it matters for display, not correctness.
/// Identity checks are linear scans, which is fine at roster scale.
#[derive(Debug, Clone)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

pub type UniquePersonList = UniqueList<Person>;
pub type UniqueClubList = UniqueList<Club>;
pub type UniqueMembershipList = UniqueList<Membership>;

impl<T: Identity + PartialEq + Clone> UniqueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Identity-equality membership test.
    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.same_identity(candidate))
    }

    /// Appends `item`, rejecting it if an identity-equal element exists.
    pub fn add(&mut self, item: T) -> RosterResult<()> {
        if self.contains(&item) {
            return Err(RosterError::Duplicate {
                entity: T::ENTITY,
                identity: item.identity_label(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` (matched by full equality) with `replacement`,
    /// keeping its position. The replacement may keep the target's identity
    /// but must not collide with any other element.
    pub fn set_item(&mut self, target: &T, replacement: T) -> RosterResult<()> {
        let index = self
            .position_of(target)
            .ok_or_else(|| RosterError::NotFound {
                entity: T::ENTITY,
                identity: target.identity_label(),
            })?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && item.same_identity(&replacement));
        if collides {
            return Err(RosterError::Duplicate {
                entity: T::ENTITY,
                identity: replacement.identity_label(),
            });
        }

        self.items[index] = replacement;
        Ok(())
    }

    /// Removes the element fully equal to `item` and returns it.
    pub fn remove(&mut self, item: &T) -> RosterResult<T> {
        let index = self
            .position_of(item)
            .ok_or_else(|| RosterError::NotFound {
                entity: T::ENTITY,
                identity: item.identity_label(),
            })?;
        Ok(self.items.remove(index))
    }

    /// Replaces the entire content. All-or-nothing: the pairwise identity
    /// check runs before anything is touched.
    pub fn replace_all(&mut self, items: Vec<T>) -> RosterResult<()> {
        for (i, a) in items.iter().enumerate() {
            for b in items.iter().skip(i + 1) {
                if a.same_identity(b) {
                    return Err(RosterError::Duplicate {
                        entity: T::ENTITY,
                        identity: b.identity_label(),
                    });
                }
            }
        }
        self.items = items;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mutable access for the roster's own bookkeeping. Callers must not
    /// change the element's identity through this.
    pub(crate) fn find_mut(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| pred(&**item))
    }

    fn position_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }
}

impl<T: Identity + PartialEq + Clone> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
