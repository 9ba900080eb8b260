//! Extrinsic decompositions for Tait-Bryan sequences (three distinct axes).
//!
//! Same layout as the proper Euler solvers: `R = R3(k3) * R2(k2) * R1(k1)`.
//! The middle angle is `±asin` of the element linking the first and third
//! axes; the outer angles come from `c2`-scaled pairs. At `c2 = 0` the row of
//! the middle axis gives the combined rotation with `k3 = 0`.

use nalgebra::Matrix3;

use super::{solve, unit, Solution};

/// `Rz(k3) Ry(k2) Rx(k1)`
///
/// ```text
/// [[ c2c3,  s1s2c3 - c1s3,  c1s2c3 + s1s3 ],
///  [ c2s3,  s1s2s3 + c1c3,  c1s2s3 - s1c3 ],
///  [-s2,    s1c2,           c1c2          ]]
/// ```
pub(crate) fn xyz(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(-r[(2, 0)]).asin(),
        (r[(2, 1)], r[(2, 2)]),
        (r[(1, 0)], r[(0, 0)]),
        (-r[(1, 2)], r[(1, 1)]),
        tolerance,
    )
}

/// `Ry(k3) Rz(k2) Rx(k1)`
///
/// ```text
/// [[ c2c3,   s1s3 - c1s2c3,  c1s3 + s1s2c3 ],
///  [ s2,     c1c2,          -s1c2          ],
///  [-c2s3,   c1s2s3 + s1c3,  c1c3 - s1s2s3 ]]
/// ```
pub(crate) fn xzy(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(1, 0)]).asin(),
        (-r[(1, 2)], r[(1, 1)]),
        (-r[(2, 0)], r[(0, 0)]),
        (r[(2, 1)], r[(2, 2)]),
        tolerance,
    )
}

/// `Rz(k3) Rx(k2) Ry(k1)`
///
/// ```text
/// [[ c1c3 - s1s2s3,  -c2s3,  s1c3 + c1s2s3 ],
///  [ c1s3 + s1s2c3,   c2c3,  s1s3 - c1s2c3 ],
///  [-s1c2,            s2,    c1c2          ]]
/// ```
pub(crate) fn yxz(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(2, 1)]).asin(),
        (-r[(2, 0)], r[(2, 2)]),
        (-r[(0, 1)], r[(1, 1)]),
        (r[(0, 2)], r[(0, 0)]),
        tolerance,
    )
}

/// `Rx(k3) Rz(k2) Ry(k1)`
///
/// ```text
/// [[ c1c2,           -s2,    s1c2          ],
///  [ c1s2c3 + s1s3,   c2c3,  s1s2c3 - c1s3 ],
///  [ c1s2s3 - s1c3,   c2s3,  c1c3 + s1s2s3 ]]
/// ```
pub(crate) fn yzx(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(-r[(0, 1)]).asin(),
        (r[(0, 2)], r[(0, 0)]),
        (r[(2, 1)], r[(1, 1)]),
        (-r[(2, 0)], r[(2, 2)]),
        tolerance,
    )
}

/// `Ry(k3) Rx(k2) Rz(k1)`
///
/// ```text
/// [[ c1c3 + s1s2s3,  c1s2s3 - s1c3,  c2s3 ],
///  [ s1c2,           c1c2,          -s2   ],
///  [ s1s2c3 - c1s3,  c1s2c3 + s1s3,  c2c3 ]]
/// ```
pub(crate) fn zxy(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(-r[(1, 2)]).asin(),
        (r[(1, 0)], r[(1, 1)]),
        (r[(0, 2)], r[(2, 2)]),
        (-r[(0, 1)], r[(0, 0)]),
        tolerance,
    )
}

/// `Rx(k3) Ry(k2) Rz(k1)`
///
/// ```text
/// [[ c1c2,           -s1c2,           s2   ],
///  [ c1s2s3 + s1c3,   c1c3 - s1s2s3, -c2s3 ],
///  [ s1s3 - c1s2c3,   c1s3 + s1s2c3,  c2c3 ]]
/// ```
pub(crate) fn zyx(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(0, 2)]).asin(),
        (-r[(0, 1)], r[(0, 0)]),
        (-r[(1, 2)], r[(2, 2)]),
        (r[(1, 0)], r[(1, 1)]),
        tolerance,
    )
}
