//! Entity trait: records that keep their identity across catalog reloads.

/// A catalog record identified by an id issued by the catalog API.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the record identifier.
    fn id(&self) -> &Self::Id;
}
