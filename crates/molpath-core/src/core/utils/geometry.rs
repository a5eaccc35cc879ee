use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Width variant of the triangle descriptor attached to bond-angle edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TriangleMode {
    /// Centroid distances, side lengths, turn angle at B with its square,
    /// Heron area. 9 values.
    #[default]
    #[serde(rename = "dim_8")]
    Dim8,
    /// Centroid distances, side lengths, three turn angles, Heron area.
    /// 10 values.
    #[serde(rename = "dim_10")]
    Dim10,
}

impl TriangleMode {
    pub fn feature_width(self) -> usize {
        match self {
            Self::Dim8 => 9,
            Self::Dim10 => 10,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown triangle feature mode '{0}'")]
pub struct ParseTriangleModeError(pub String);

impl FromStr for TriangleMode {
    type Err = ParseTriangleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dim_8" => Ok(Self::Dim8),
            "dim_10" => Ok(Self::Dim10),
            other => Err(ParseTriangleModeError(other.to_string())),
        }
    }
}

/// Width variant of the torsion descriptor attached to dihedral edges.
///
/// Only the two-face-normal variant is defined; unknown keys are rejected
/// when the configuration is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DihedralMode {
    /// Tetrahedron volume, one face-normal cos/sin pair, end-to-end
    /// distance, quadrilateral area, two path-length sums. 7 values.
    #[default]
    #[serde(rename = "dim_6")]
    Dim6,
}

impl DihedralMode {
    pub fn feature_width(self) -> usize {
        match self {
            Self::Dim6 => 7,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dihedral feature mode '{0}'")]
pub struct ParseDihedralModeError(pub String);

impl FromStr for DihedralMode {
    type Err = ParseDihedralModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dim_6" => Ok(Self::Dim6),
            other => Err(ParseDihedralModeError(other.to_string())),
        }
    }
}

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Turn angle at `b`: the angle between the vectors a->b and b->c.
///
/// This is NOT the interior vertex angle at `b` (which would use b->a and
/// b->c); a collinear forward chain measures 0, not pi. Degenerate inputs
/// (a zero-length segment, or a cosine outside [-1, 1] from floating-point
/// drift) yield 0 rather than NaN; the cosine is tested as-is, without
/// prior clamping.
pub fn turn_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = b - a;
    let bc = c - b;
    let norm_product = ab.norm() * bc.norm();
    if norm_product == 0.0 {
        return 0.0;
    }
    let cos_theta = ab.dot(&bc) / norm_product;
    if (-1.0..=1.0).contains(&cos_theta) {
        cos_theta.acos()
    } else {
        0.0
    }
}

/// Triangle descriptor over three points: distances from each vertex to the
/// centroid, the side lengths |b-a|, |c-b|, |a-c|, the mode-dependent angle
/// block, and the Heron area (0 for degenerate triples).
pub fn triangle_properties(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    mode: TriangleMode,
) -> Vec<f64> {
    let mut features = Vec::with_capacity(mode.feature_width());

    let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
    features.extend([
        distance(a, &centroid),
        distance(b, &centroid),
        distance(c, &centroid),
    ]);

    let side_a = distance(a, b);
    let side_b = distance(b, c);
    let side_c = distance(c, a);
    features.extend([side_a, side_b, side_c]);

    match mode {
        TriangleMode::Dim8 => {
            let angle = turn_angle(a, b, c);
            features.extend([angle, angle * angle]);
        }
        TriangleMode::Dim10 => {
            features.extend([turn_angle(a, b, c), turn_angle(b, a, c), turn_angle(b, c, a)]);
        }
    }

    features.push(heron_area(side_a, side_b, side_c));
    features
}

/// Heron's formula under the strict triangle inequality; any degenerate
/// (zero-length or collinear) triple yields 0.
fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let valid = a > 0.0 && b > 0.0 && c > 0.0 && a + b > c && a + c > b && b + c > a;
    if !valid {
        return 0.0;
    }
    let s = 0.5 * (a + b + c);
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

/// Area of the quadrilateral spanned by four points, from its diagonals:
/// 0.5 * |(p2 - p4) x (p3 - p1)|.
pub fn quadrilateral_area(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    let d1: Vector3<f64> = p2 - p4;
    let d2: Vector3<f64> = p3 - p1;
    0.5 * d1.cross(&d2).norm()
}

/// Torsion descriptor over an ordered 4-atom path a-b-c-d.
///
/// The sine of the inter-face angle is the unsigned root of 1 - cos^2, so
/// +theta and -theta torsions produce identical descriptors; the sign of
/// the dihedral is deliberately not recovered.
pub fn dihedral_properties(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
    mode: DihedralMode,
) -> Vec<f64> {
    let mut features = Vec::with_capacity(mode.feature_width());

    let volume = (b - a).cross(&(c - a)).dot(&(d - a)).abs() / 6.0;
    features.push(volume);

    match mode {
        DihedralMode::Dim6 => {
            let normals = [(b - a).cross(&(c - a)), (c - b).cross(&(d - b))];
            for i in 0..normals.len() {
                for j in (i + 1)..normals.len() {
                    let norm_i = normals[i].norm();
                    let norm_j = normals[j].norm();
                    let cos_angle = if norm_i != 0.0 && norm_j != 0.0 {
                        (normals[i].dot(&normals[j]) / (norm_i * norm_j)).clamp(-1.0, 1.0)
                    } else {
                        0.0
                    };
                    let sin_angle = (1.0 - cos_angle * cos_angle).max(0.0).sqrt();
                    features.extend([cos_angle, sin_angle]);
                }
            }
        }
    }

    features.push(distance(a, d));
    features.push(quadrilateral_area(a, b, c, d));
    features.push(distance(a, b) + distance(b, c));
    features.push(distance(b, c) + distance(c, d));
    features
}
