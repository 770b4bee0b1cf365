//! Axis-aligned collision detection
//!
//! The single source of truth for every directional collision response in
//! the game: rectangle overlap, side classification, and the point/containment
//! predicates. Everything here is pure geometry; responses (snapping,
//! bouncing, stomping) live with the entities that need them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A world-space rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Capability for anything that occupies a rectangle this frame.
///
/// Implemented by every entity (and by `Rect` itself), so collision queries
/// accept platforms, enemies, coins, the goal, or raw geometry uniformly.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Which side of `b` the first object `a` hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `a` is above `b` (landing)
    Top,
    /// `a` is below `b` (head bump)
    Bottom,
    /// `a` is to the left of `b`
    Left,
    /// `a` is to the right of `b`
    Right,
}

/// Result of an overlap check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub side: Side,
    pub overlap_x: f32,
    pub overlap_y: f32,
}

/// Check two bounded objects for overlap.
///
/// Returns `None` when the rectangles do not intersect. On overlap, the
/// side is classified by the smaller-overlap axis; an exact tie goes to
/// the horizontal axis (the comparison is strict).
pub fn check(a: &impl Bounded, b: &impl Bounded) -> Option<Contact> {
    let a = a.bounds();
    let b = b.bounds();

    let overlapping = a.left() < b.right()
        && a.right() > b.left()
        && a.top() < b.bottom()
        && a.bottom() > b.top();
    if !overlapping {
        return None;
    }

    let overlap_x = (a.right() - b.left()).min(b.right() - a.left());
    let overlap_y = (a.bottom() - b.top()).min(b.bottom() - a.top());

    let side = if overlap_y < overlap_x {
        if a.top() < b.top() { Side::Top } else { Side::Bottom }
    } else if a.left() < b.left() {
        Side::Left
    } else {
        Side::Right
    };

    Some(Contact {
        side,
        overlap_x,
        overlap_y,
    })
}

/// Check whether a point lies within a rectangle (edges inclusive)
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    point.x >= rect.left()
        && point.x <= rect.right()
        && point.y >= rect.top()
        && point.y <= rect.bottom()
}

/// Check whether `inner` lies entirely within `outer`
pub fn is_inside(inner: &impl Bounded, outer: &impl Bounded) -> bool {
    let inner = inner.bounds();
    let outer = outer.bounds();
    inner.left() >= outer.left()
        && inner.top() >= outer.top()
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_overlap_is_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(check(&a, &b).is_none());

        // Touching edges do not count as overlap (strict comparison)
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(check(&a, &c).is_none());
    }

    #[test]
    fn test_falling_onto_platform_is_top() {
        // Player bottom slightly into the platform, well inside horizontally
        let player = Rect::new(50.0, 90.0, 20.0, 20.0);
        let platform = Rect::new(0.0, 105.0, 200.0, 40.0);

        let contact = check(&player, &platform).unwrap();
        assert_eq!(contact.side, Side::Top);
        assert!((contact.overlap_y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_head_bump_is_bottom() {
        let player = Rect::new(50.0, 100.0, 20.0, 20.0);
        let platform = Rect::new(0.0, 60.0, 200.0, 45.0);

        let contact = check(&player, &platform).unwrap();
        assert_eq!(contact.side, Side::Bottom);
    }

    #[test]
    fn test_side_contacts() {
        // Thin horizontal overlap, deep vertical overlap: horizontal axis wins
        let player = Rect::new(95.0, 10.0, 20.0, 20.0);
        let wall = Rect::new(110.0, 0.0, 40.0, 100.0);
        assert_eq!(check(&player, &wall).unwrap().side, Side::Left);

        let player = Rect::new(145.0, 10.0, 20.0, 20.0);
        assert_eq!(check(&player, &wall).unwrap().side, Side::Right);
    }

    #[test]
    fn test_equal_overlap_favors_horizontal() {
        // Two unit-offset squares: overlap_x == overlap_y == 5
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);

        let contact = check(&a, &b).unwrap();
        assert_eq!(contact.overlap_x, contact.overlap_y);
        assert_eq!(contact.side, Side::Left);
    }

    #[test]
    fn test_point_in_rect_inclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(point_in_rect(Vec2::new(10.0, 10.0), &rect));
        assert!(point_in_rect(Vec2::new(30.0, 30.0), &rect));
        assert!(point_in_rect(Vec2::new(20.0, 20.0), &rect));
        assert!(!point_in_rect(Vec2::new(9.9, 20.0), &rect));
        assert!(!point_in_rect(Vec2::new(20.0, 30.1), &rect));
    }

    #[test]
    fn test_is_inside() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(is_inside(&Rect::new(10.0, 10.0, 20.0, 20.0), &outer));
        assert!(is_inside(&outer, &outer));
        assert!(!is_inside(&Rect::new(90.0, 10.0, 20.0, 20.0), &outer));
    }

    proptest! {
        #[test]
        fn prop_separated_rects_never_collide(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
            gap in 0.0f32..50.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            // Placed fully to the right of `a` with a non-negative gap
            let b = Rect::new(ax + aw + gap, ay, bw, bh);
            prop_assert!(check(&a, &b).is_none());
        }

        #[test]
        fn prop_contact_side_matches_overlap_axis(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            if let Some(contact) = check(&a, &b) {
                prop_assert!(contact.overlap_x > 0.0);
                prop_assert!(contact.overlap_y > 0.0);
                match contact.side {
                    Side::Top | Side::Bottom => {
                        prop_assert!(contact.overlap_y < contact.overlap_x)
                    }
                    Side::Left | Side::Right => {
                        prop_assert!(contact.overlap_x <= contact.overlap_y)
                    }
                }
            }
        }
    }
}
