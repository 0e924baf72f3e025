//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The id is a caller-assigned attribute, not the entity's identity: two
/// entities may share an id and still be distinct (see [`crate::Shared`]).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Returns the display name.
    fn name(&self) -> &str;
}
