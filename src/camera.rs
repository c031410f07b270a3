//! Viewpoint (camera node) lookup.
//!
//! The controller pitches a single node, usually the camera, as a child of
//! the body. The node is found once when the controller is activated.

use bevy::prelude::*;

/// Marker for nodes that can receive the controller's pitch rotation.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct ViewpointNode;

/// Explicit viewpoint assignment for a controller entity.
///
/// Takes precedence over the descendant and world-wide lookups.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ViewpointLink(pub Entity);

/// Pick the viewpoint for a controller.
///
/// Order: explicit link, then the first descendant marked with
/// [`ViewpointNode`], then the first `ViewpointNode` anywhere.
pub fn resolve_viewpoint(
    link: Option<Entity>,
    descendants: impl IntoIterator<Item = Entity>,
    is_viewpoint: impl Fn(Entity) -> bool,
    fallback: Option<Entity>,
) -> Option<Entity> {
    link.or_else(|| descendants.into_iter().find(|&e| is_viewpoint(e)))
        .or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(n: u32) -> Entity {
        Entity::from_raw(n)
    }

    #[test]
    fn explicit_link_wins() {
        let found = resolve_viewpoint(
            Some(entity(1)),
            [entity(2), entity(3)],
            |_| true,
            Some(entity(4)),
        );
        assert_eq!(found, Some(entity(1)));
    }

    #[test]
    fn first_marked_descendant() {
        let found = resolve_viewpoint(
            None,
            [entity(2), entity(3), entity(5)],
            |e| e == entity(3) || e == entity(5),
            Some(entity(4)),
        );
        assert_eq!(found, Some(entity(3)));
    }

    #[test]
    fn falls_back_to_world_viewpoint() {
        let found = resolve_viewpoint(None, [entity(2)], |_| false, Some(entity(4)));
        assert_eq!(found, Some(entity(4)));
    }

    #[test]
    fn none_when_nothing_found() {
        let found = resolve_viewpoint(None, std::iter::empty(), |_| false, None);
        assert_eq!(found, None);
    }
}
