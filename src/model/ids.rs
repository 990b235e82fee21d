use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use uuid::Uuid;

/// Typed handle to an entity owned by the roster's collections. The phantom
/// type parameter `T` prevents mixing handles from different entity types
/// (e.g., a Person handle where a Club handle is expected).
///
/// Handles are runtime-only: the wire format links entities by natural key,
/// so fresh handles are generated on every load.
pub struct Id<T> {
    value: Uuid,
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn generate_creates_unique_ids() {
        let id1 = Id::<Foo>::generate();
        let id2 = Id::<Foo>::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn copies_compare_equal() {
        let id = Id::<Foo>::generate();
        let copy = id;
        assert_eq!(id, copy);
    }

    #[test]
    fn ordering_is_total() {
        let mut ids = vec![Id::<Foo>::generate(), Id::<Foo>::generate()];
        ids.sort();
        assert!(ids[0] <= ids[1]);
    }
}
