use uuid::Uuid;

/// A record that belongs to exactly one user.
///
/// Mutations on an `Owned` record are only allowed for its owner.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}
