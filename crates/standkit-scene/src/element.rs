//! Scene element model
//!
//! The stand is described as a flat list of primitives in world metres:
//! boxes, cylinders and line segments, each tagged with the material that
//! decides its paint. Views project this list; nothing here knows about
//! sheets or pixels.

use glam::Vec3;

/// Paint category of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Truss chord tube.
    Chord,
    /// Truss lattice diagonal, drawn as a line.
    DiagLine,
    /// Driven cabinet face.
    LedOn,
    /// Dead cabinet face.
    LedOff,
    /// Cabinet edge outline.
    Frame,
    /// Bottom bar and direct-mount spacers.
    Bar,
    /// Horizontal scaffolding tube.
    Tube,
    /// Tube and spacer clamps.
    Clamp,
    /// Ballast base plate under a deep leg.
    Base,
    /// Steel plate under a flat leg.
    PlateBlack,
}

/// Axis a cylinder's length runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Geometric primitive. Dimensions in metres, centred on the element
/// position except for lines, which run from the position to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { w: f32, h: f32, d: f32 },
    Cylinder { radius: f32, length: f32, axis: Axis },
    Line { end: Vec3 },
}

/// One drawable element of the stand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
}

impl Element {
    /// Axis-aligned bounds of the element.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        match self.shape {
            Shape::Box { w, h, d } => {
                let half = Vec3::new(w / 2.0, h / 2.0, d / 2.0);
                (self.position - half, self.position + half)
            }
            Shape::Cylinder {
                radius,
                length,
                axis,
            } => {
                let half = match axis {
                    Axis::X => Vec3::new(length / 2.0, radius, radius),
                    Axis::Y => Vec3::new(radius, length / 2.0, radius),
                    Axis::Z => Vec3::new(radius, radius, length / 2.0),
                };
                (self.position - half, self.position + half)
            }
            Shape::Line { end } => (self.position.min(end), self.position.max(end)),
        }
    }
}

/// Axis-aligned bounding box of a scene, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Sentinel that unions cleanly with any element.
    pub const EMPTY: Bounds = Bounds {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Grow to cover the given box.
    pub fn include(&mut self, min: Vec3, max: Vec3) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// The assembled stand: element list plus overall bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub elements: Vec<Element>,
    pub bounds: Bounds,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            elements: Vec::new(),
            bounds: Bounds::EMPTY,
        }
    }

    /// Append an element and fold it into the bounds.
    pub fn push(&mut self, element: Element) {
        let (min, max) = element.bounds();
        self.bounds.include(min, max);
        self.elements.push(element);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_bounds() {
        let element = Element {
            shape: Shape::Box {
                w: 2.0,
                h: 4.0,
                d: 6.0,
            },
            material: Material::LedOn,
            position: Vec3::new(1.0, 2.0, 3.0),
        };
        let (min, max) = element.bounds();
        assert_eq!(min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_cylinder_bounds_follow_axis() {
        let element = Element {
            shape: Shape::Cylinder {
                radius: 0.5,
                length: 10.0,
                axis: Axis::X,
            },
            material: Material::Tube,
            position: Vec3::ZERO,
        };
        let (min, max) = element.bounds();
        assert_eq!(min, Vec3::new(-5.0, -0.5, -0.5));
        assert_eq!(max, Vec3::new(5.0, 0.5, 0.5));
    }

    #[test]
    fn test_line_bounds_are_order_free() {
        let element = Element {
            shape: Shape::Line {
                end: Vec3::new(-1.0, 5.0, 0.0),
            },
            material: Material::DiagLine,
            position: Vec3::new(1.0, 0.0, 2.0),
        };
        let (min, max) = element.bounds();
        assert_eq!(min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 5.0, 2.0));
    }

    #[test]
    fn test_scene_accumulates_bounds() {
        let mut scene = Scene::new();
        assert!(scene.bounds.is_empty());

        scene.push(Element {
            shape: Shape::Box {
                w: 1.0,
                h: 1.0,
                d: 1.0,
            },
            material: Material::Base,
            position: Vec3::ZERO,
        });
        scene.push(Element {
            shape: Shape::Box {
                w: 1.0,
                h: 1.0,
                d: 1.0,
            },
            material: Material::Base,
            position: Vec3::new(4.0, 0.0, 0.0),
        });

        assert!(!scene.bounds.is_empty());
        assert_eq!(scene.bounds.min, Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(scene.bounds.max, Vec3::new(4.5, 0.5, 0.5));
        assert_eq!(scene.bounds.center(), Vec3::new(2.0, 0.0, 0.0));
    }
}
