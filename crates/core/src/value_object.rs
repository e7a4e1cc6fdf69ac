//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Two
/// `Handle`s with the same text are the same handle; there is no identity
/// beyond the value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
