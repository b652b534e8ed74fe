//! Collision primitives
//!
//! All predicates use strict inequalities: shapes that only touch on their
//! boundary do not collide, and a zero-radius circle never collides with
//! anything, itself included.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space collision shape
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Shape {
    /// No collision geometry; never collides
    #[default]
    Empty,
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned box, `min <= max` on both axes
    Rect { min: Vec2, max: Vec2 },
}

impl Shape {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    /// Box spanned by two opposite corners, in any order
    pub fn rect(a: Vec2, b: Vec2) -> Self {
        Shape::Rect {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn translated(self, delta: Vec2) -> Self {
        match self {
            Shape::Empty => Shape::Empty,
            Shape::Circle { center, radius } => Shape::Circle {
                center: center + delta,
                radius,
            },
            Shape::Rect { min, max } => Shape::Rect {
                min: min + delta,
                max: max + delta,
            },
        }
    }

    /// Strict containment: points on the boundary are outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        match *self {
            Shape::Empty => false,
            Shape::Circle { center, radius } => circle_contains_point(center, radius, point),
            Shape::Rect { min, max } => rect_contains_point(min, max, point),
        }
    }
}

/// Pairwise overlap test, dispatching on both shapes
pub fn overlap(a: &Shape, b: &Shape) -> bool {
    match (*a, *b) {
        (Shape::Empty, _) | (_, Shape::Empty) => false,
        (Shape::Circle { center: c1, radius: r1 }, Shape::Circle { center: c2, radius: r2 }) => {
            circles_overlap(c1, r1, c2, r2)
        }
        (Shape::Rect { min: min1, max: max1 }, Shape::Rect { min: min2, max: max2 }) => {
            rects_overlap(min1, max1, min2, max2)
        }
        (Shape::Circle { center, radius }, Shape::Rect { min, max })
        | (Shape::Rect { min, max }, Shape::Circle { center, radius }) => {
            circle_rect_overlap(center, radius, min, max)
        }
    }
}

/// Open-disk point test: `|point - center| < radius`
#[inline]
pub fn circle_contains_point(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}

/// Two open disks overlap iff `|c1 - c2|² < (r1 + r2)²`
#[inline]
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let reach = r1 + r2;
    c1.distance_squared(c2) < reach * reach
}

#[inline]
pub fn rect_contains_point(min: Vec2, max: Vec2, point: Vec2) -> bool {
    point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
}

#[inline]
pub fn rects_overlap(min1: Vec2, max1: Vec2, min2: Vec2, max2: Vec2) -> bool {
    min1.x < max2.x && max1.x > min2.x && min1.y < max2.y && max1.y > min2.y
}

/// Circle against box via the closest point on the box
pub fn circle_rect_overlap(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    if rect_contains_point(min, max, center) {
        return true;
    }
    let closest = center.clamp(min, max);
    center.distance_squared(closest) < radius * radius
}
