use crate::recovery::{AccessLevel, Entity, EntityKind};

/// Whether an entity of this shape must carry documentation.
///
/// Classes and member variables always do. Methods do when public and seen
/// at a declaration; protected and private methods are never required.
#[must_use]
pub const fn needs_doc(kind: EntityKind, access: AccessLevel, is_definition: bool) -> bool {
    match kind {
        EntityKind::Class | EntityKind::MemberVariable => true,
        EntityKind::Method => matches!(access, AccessLevel::Public) && !is_definition,
    }
}

#[must_use]
pub fn entity_needs_doc(entity: &Entity) -> bool {
    needs_doc(entity.kind, entity.access, entity.is_definition())
}
