//! Entity and record traits shared by every collection.

use crate::id::{DepartmentId, RecordId};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: RecordId;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// A record kept in an entity collection.
///
/// A record is minted from a *draft* (every field except the id) and mutated
/// only by merging a *patch* (every field optional) over it. The identifier is
/// assigned at creation and never changes afterwards.
pub trait Record: Entity + Clone + Send + Sync + 'static {
    /// Field set without the identifier, used by `create`.
    type Draft: Clone + Send + Sync + 'static;

    /// Partial field set merged by `update`.
    type Patch: Clone + Send + Sync + 'static;

    /// Singular, lowercase kind name ("department", "student", ...).
    const KIND: &'static str;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Overwrite the fields present in `patch`; absent fields are preserved.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Records that point at an owning department.
///
/// The reference is never validated: it may dangle once the department is
/// deleted.
pub trait DepartmentScoped {
    fn department_id(&self) -> &DepartmentId;
}
