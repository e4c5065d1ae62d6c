//! CIE XYZ and CIE L*a*b* intermediates
//!
//! These sit between [`LinearRgb`] and [`Hct`](super::Hct). Both use the D65
//! reference white. The Lab piecewise function uses the classic rounded
//! constants (`epsilon = 0.008856`, `kappa = 903.3`) rather than the exact
//! CIE fractions.

use super::linear_rgb::LinearRgb;

/// D65 reference white in XYZ (Y normalized to 1).
pub const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Lab linear/cube-root branch point.
pub const LAB_EPSILON: f64 = 0.008856;

/// Lab slope of the linear segment.
pub const LAB_KAPPA: f64 = 903.3;

/// Linear sRGB → XYZ (D65).
pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) → linear sRGB.
pub(crate) const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A color in CIE XYZ, D65 white, Y in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul(&SRGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
        Self { x, y, z }
    }
}

impl From<Xyz> for LinearRgb {
    fn from(xyz: Xyz) -> Self {
        let [r, g, b] = mul(&XYZ_TO_SRGB, [xyz.x, xyz.y, xyz.z]);
        LinearRgb::new(r, g, b)
    }
}

/// A color in CIE L*a*b* (D65).
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis
/// - `b`: Blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(ft: f64) -> f64 {
    let cubed = ft * ft * ft;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (116.0 * ft - 16.0) / LAB_KAPPA
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_WHITE[0]);
        let fy = lab_f(xyz.y / D65_WHITE[1]);
        let fz = lab_f(xyz.z / D65_WHITE[2]);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        // Y uses L directly so dark tones stay on the linear segment
        let yr = if lab.l > LAB_KAPPA * LAB_EPSILON {
            fy * fy * fy
        } else {
            lab.l / LAB_KAPPA
        };

        Self {
            x: lab_f_inv(fx) * D65_WHITE[0],
            y: yr * D65_WHITE[1],
            z: lab_f_inv(fz) * D65_WHITE[2],
        }
    }
}
