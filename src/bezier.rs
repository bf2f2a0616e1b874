//! Cubic Bezier evaluation, subdivision, and curve/horizontal-line
//! intersection.
//!
//! This is the pure numeric half of the inertial engine: fling trajectories
//! are carved out of one canonical ease-out curve by finding where it crosses
//! a horizontal "distance ratio" line (a cubic root problem) and splitting it
//! there with de Casteljau subdivision.

/// Near-zero tolerance for degenerate polynomial coefficients.
const EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(a: Point, b: Point, t: f64) -> Point {
        Point {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }
}

/// Cubic-bezier easing parameters normalized to the unit square, i.e. the two
/// inner control points of a curve running from `(0,0)` to `(1,1)`: the CSS
/// `cubic-bezier(x1, y1, x2, y2)` shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Easing {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Easing {
    pub const LINEAR: Easing = Easing {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    /// The full unit curve described by these parameters.
    pub fn curve(&self) -> CubicBezier {
        CubicBezier {
            p0: Point::new(0.0, 0.0),
            p1: Point::new(self.x1, self.y1),
            p2: Point::new(self.x2, self.y2),
            p3: Point::new(1.0, 1.0),
        }
    }
}

/// A cubic Bezier curve through four control points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

/// The canonical "distance traveled over time" shape of a friction fling,
/// normalized to the unit square: fast start, long ease-out tail.
pub const DECELERATION_CURVE: CubicBezier = CubicBezier {
    p0: Point::new(0.0, 0.0),
    p1: Point::new(0.0, 0.0),
    p2: Point::new(0.4, 1.0),
    p3: Point::new(1.0, 1.0),
};

impl CubicBezier {
    /// Evaluates the curve at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;
        let a = uu * u;
        let b = 3.0 * uu * t;
        let c = 3.0 * u * tt;
        let d = tt * t;
        Point {
            x: a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            y: a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        }
    }

    /// Splits the curve at parameter `t` via de Casteljau subdivision.
    ///
    /// The returned halves share the split point: `left.p3 == right.p0`.
    pub fn split(&self, t: f64) -> (CubicBezier, CubicBezier) {
        let a = Point::lerp(self.p0, self.p1, t);
        let b = Point::lerp(self.p1, self.p2, t);
        let c = Point::lerp(self.p2, self.p3, t);
        let m = Point::lerp(a, b, t);
        let n = Point::lerp(b, c, t);
        let at = Point::lerp(m, n, t);
        (
            CubicBezier {
                p0: self.p0,
                p1: a,
                p2: m,
                p3: at,
            },
            CubicBezier {
                p0: at,
                p1: n,
                p2: c,
                p3: self.p3,
            },
        )
    }

    /// Curve parameters `t` where the curve crosses the horizontal line
    /// `y = line_y`, restricted to `t ∈ [0, 1]` and curve-x within `[0, 1]`,
    /// sorted ascending.
    pub fn intersect_horizontal(&self, line_y: f64) -> Vec<f64> {
        let (ax, bx, cx, dx) = coefficients(self.p0.x, self.p1.x, self.p2.x, self.p3.x);
        let (ay, by, cy, dy) = coefficients(self.p0.y, self.p1.y, self.p2.y, self.p3.y);

        let mut out = cubic_roots(ay, by, cy, dy - line_y);
        out.retain(|&t| {
            let x = ((ax * t + bx) * t + cx) * t + dx;
            (-EPS..=1.0 + EPS).contains(&x)
        });
        out
    }

    /// Rescales the curve into the unit square and extracts the inner control
    /// points as an easing description.
    ///
    /// A degenerate curve (zero width or height) has no meaningful easing and
    /// falls back to linear.
    pub fn normalized(&self) -> Easing {
        let dx = self.p3.x - self.p0.x;
        let dy = self.p3.y - self.p0.y;
        if dx.abs() < EPS || dy.abs() < EPS {
            return Easing::LINEAR;
        }
        Easing {
            x1: (self.p1.x - self.p0.x) / dx,
            y1: (self.p1.y - self.p0.y) / dy,
            x2: (self.p2.x - self.p0.x) / dx,
            y2: (self.p2.y - self.p0.y) / dy,
        }
    }
}

/// Power-basis coefficients of one Bezier component:
/// `value(t) = a·t³ + b·t² + c·t + d`.
fn coefficients(p0: f64, p1: f64, p2: f64, p3: f64) -> (f64, f64, f64, f64) {
    (
        -p0 + 3.0 * p1 - 3.0 * p2 + p3,
        3.0 * p0 - 6.0 * p1 + 3.0 * p2,
        -3.0 * p0 + 3.0 * p1,
        p0,
    )
}

/// Real roots of `a·t³ + b·t² + c·t + d = 0` within `[0, 1]`, sorted
/// ascending.
///
/// Uses Cardano's formula for the single-real-root case and the trigonometric
/// method for three real roots. Degenerate leading coefficients fall through
/// to the quadratic/linear formulas.
pub fn cubic_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let mut roots = if a.abs() < EPS {
        quadratic_roots(b, c, d)
    } else {
        let wa = b / a;
        let wb = c / a;
        let wc = d / a;
        let q = (3.0 * wb - wa * wa) / 9.0;
        let r = (9.0 * wa * wb - 27.0 * wc - 2.0 * wa.powi(3)) / 54.0;
        let disc = q.powi(3) + r * r;

        if disc >= 0.0 {
            let sq = disc.sqrt();
            let s = (r + sq).cbrt();
            let t = (r - sq).cbrt();
            let mut v = vec![-wa / 3.0 + (s + t)];
            // s == t collapses the conjugate pair onto a real double root.
            if (s - t).abs() < EPS {
                v.push(-wa / 3.0 - (s + t) / 2.0);
            }
            v
        } else {
            let th = (r / (-q.powi(3)).sqrt()).acos();
            let m = 2.0 * (-q).sqrt();
            vec![
                m * (th / 3.0).cos() - wa / 3.0,
                m * ((th + 2.0 * core::f64::consts::PI) / 3.0).cos() - wa / 3.0,
                m * ((th + 4.0 * core::f64::consts::PI) / 3.0).cos() - wa / 3.0,
            ]
        }
    };

    roots.retain(|&t| (-EPS..=1.0 + EPS).contains(&t));
    for t in &mut roots {
        *t = t.clamp(0.0, 1.0);
    }
    roots.sort_by(|a, b| a.total_cmp(b));
    roots.dedup_by(|a, b| (*a - *b).abs() < EPS);
    roots
}

fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < EPS {
        if b.abs() < EPS {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    let sq = disc.sqrt();
    vec![(-b + sq) / (2.0 * a), (-b - sq) / (2.0 * a)]
}
