use std::f64::consts::PI;
use std::fmt::Write;

// Shape
//------------------------------------------------------------------------------

/// Decorative outline a QR can be masked into.
///
/// `Polygon` accepts any side count; anything below 3 is treated as a triangle.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Polygon { sides: i32 },
}

impl Shape {
    pub fn polygon(sides: i32) -> Self {
        Self::Polygon { sides }
    }

    /// True for shapes that actually hide modules.
    pub fn is_masking(&self) -> bool {
        !matches!(self, Self::Square)
    }
}

pub fn effective_sides(sides: i32) -> i32 {
    sides.max(3)
}

// Point
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Containment
//------------------------------------------------------------------------------

/// Checks whether `(x, y)` lies inside `shape` inscribed in the square
/// `[0, size) x [0, size)`. Boundary points count as inside.
///
/// A non-positive `size` leaves no room for a circle or polygon, so those
/// always return false. A square never constrains anything.
pub fn is_point_inside_shape(shape: Shape, x: f64, y: f64, size: f64) -> bool {
    let sides = match shape {
        Shape::Square => return true,
        _ if size.is_nan() || size <= 0.0 => return false,
        Shape::Circle => {
            let (px, py) = (x - size / 2.0, y - size / 2.0);
            let r = size / 2.0;
            return px * px + py * py <= r * r;
        }
        Shape::Polygon { sides } => sides,
    };

    let (px, py) = (x - size / 2.0, y - size / 2.0);
    let r_max = polygon_radius(sides, size / 2.0, py.atan2(px));
    px.hypot(py) <= r_max
}

/// Distance from the center to the boundary of a regular polygon with
/// circumradius `radius`, along the ray at angle `theta`.
///
/// A vertex sits at angle 0, so the result is `radius` at every multiple of
/// the sector angle `2π / n` and `radius * cos(π / n)` halfway between.
pub fn polygon_radius(sides: i32, radius: f64, theta: f64) -> f64 {
    let n = effective_sides(sides) as f64;
    let sector = 2.0 * PI / n;
    let theta = theta.rem_euclid(sector);
    radius * (PI / n).cos() / (theta - sector / 2.0).cos()
}


// Polygon path
//------------------------------------------------------------------------------

/// Closed outline of a regular polygon. The last vertex connects back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPath {
    vertices: Vec<Point>,
}

impl PolygonPath {
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// SVG path data, e.g. `M 50.00 6.00 L ... Z`.
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd} {:.2} {:.2} ", p.x, p.y);
        }
        d.push('Z');
        d
    }
}

/// Vertices of a regular polygon centered in a square of side `size`, with the
/// first vertex pointing up. A padding that swallows the whole radius collapses
/// the polygon onto the center.
pub fn polygon_path(size: f64, sides: i32, padding: f64) -> PolygonPath {
    let n = effective_sides(sides);
    let c = size / 2.0;
    let r = (size / 2.0 - padding).max(0.0);
    let step = 2.0 * PI / n as f64;
    let vertices = (0..n)
        .map(|i| {
            let a = -PI / 2.0 + step * i as f64;
            Point::new(c + r * a.cos(), c + r * a.sin())
        })
        .collect();
    PolygonPath { vertices }
}
