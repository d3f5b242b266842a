//! Orthographic view axes and element projection
//!
//! Each view maps world space (x across the wall, y up, z from the LED
//! face toward the legs) onto a 2D drawing plane with v pointing up:
//!
//! | view  | u   | v | collapsed axis | far side        |
//! |-------|-----|---|----------------|-----------------|
//! | front | x   | y | z              | legs            |
//! | rear  | -x  | y | z              | LED face        |
//! | side  | z   | y | x              | far end of wall |
//! | plan  | x   | z | y              | ground          |

use glam::{Vec2, Vec3};
use standkit_core::DraftingError;
use standkit_scene::{Axis, Bounds, Element, Shape};
use std::fmt;
use std::str::FromStr;

/// The four sheets of a drawing package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Front,
    Rear,
    Side,
    Plan,
}

/// A scene element flattened onto the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projected {
    /// Box, or cylinder seen from the side.
    Rect { center: Vec2, half_w: f32, half_h: f32 },
    /// Cylinder seen end-on.
    Disc { center: Vec2, radius: f32 },
    /// Lattice line.
    Segment { a: Vec2, b: Vec2 },
}

impl ViewKind {
    /// Every sheet of the package, in drawing order.
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Front,
        ViewKind::Rear,
        ViewKind::Side,
        ViewKind::Plan,
    ];

    /// Sheet caption, matching the labels used on site paperwork.
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Front => "VISTA FRONTALE",
            ViewKind::Rear => "VISTA POSTERIORE",
            ViewKind::Side => "VISTA LATERALE",
            ViewKind::Plan => "VISTA PIANTA",
        }
    }

    /// Suffix used in exported file names.
    pub fn file_tag(&self) -> &'static str {
        match self {
            ViewKind::Front => "FRONTALE",
            ViewKind::Rear => "POSTERIORE",
            ViewKind::Side => "LATERALE",
            ViewKind::Plan => "PIANTA",
        }
    }

    /// World point onto the drawing plane, in metres.
    pub fn project(&self, p: Vec3) -> Vec2 {
        match self {
            ViewKind::Front => Vec2::new(p.x, p.y),
            ViewKind::Rear => Vec2::new(-p.x, p.y),
            ViewKind::Side => Vec2::new(p.z, p.y),
            ViewKind::Plan => Vec2::new(p.x, p.z),
        }
    }

    /// Distance away from the camera. Elements are painted farthest first,
    /// so sorting descending on this value gives the draw order: the front
    /// sheet ends on the LED face, the rear sheet on the rigging.
    pub fn depth_of(&self, p: Vec3) -> f32 {
        match self {
            ViewKind::Front => p.z,
            ViewKind::Rear => -p.z,
            ViewKind::Side => p.x,
            ViewKind::Plan => -p.y,
        }
    }

    /// The world axis the projection collapses.
    fn collapsed_axis(&self) -> Axis {
        match self {
            ViewKind::Front | ViewKind::Rear => Axis::Z,
            ViewKind::Side => Axis::X,
            ViewKind::Plan => Axis::Y,
        }
    }

    /// Scene bounds onto the drawing plane.
    pub fn view_bounds(&self, bounds: &Bounds) -> (Vec2, Vec2) {
        let a = self.project(bounds.min);
        let b = self.project(bounds.max);
        (a.min(b), a.max(b))
    }

    /// Flatten one element for drawing.
    pub fn project_element(&self, element: &Element) -> Projected {
        match element.shape {
            Shape::Cylinder { radius, axis, .. } if axis == self.collapsed_axis() => {
                Projected::Disc {
                    center: self.project(element.position),
                    radius,
                }
            }
            Shape::Line { end } => Projected::Segment {
                a: self.project(element.position),
                b: self.project(end),
            },
            Shape::Box { .. } | Shape::Cylinder { .. } => {
                let (min, max) = element.bounds();
                let a = self.project(min);
                let b = self.project(max);
                let lo = a.min(b);
                let hi = a.max(b);
                Projected::Rect {
                    center: (lo + hi) * 0.5,
                    half_w: (hi.x - lo.x) / 2.0,
                    half_h: (hi.y - lo.y) / 2.0,
                }
            }
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::Front => "front",
            ViewKind::Rear => "rear",
            ViewKind::Side => "side",
            ViewKind::Plan => "plan",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ViewKind {
    type Err = DraftingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(ViewKind::Front),
            "rear" => Ok(ViewKind::Rear),
            "side" => Ok(ViewKind::Side),
            "plan" => Ok(ViewKind::Plan),
            other => Err(DraftingError::Other {
                message: format!("unknown view '{other}' (expected front, rear, side or plan)"),
            }),
        }
    }
}
