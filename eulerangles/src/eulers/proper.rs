//! Extrinsic decompositions for proper Euler sequences (first axis == third axis).
//!
//! Each matrix below is the expansion of `R = R3(k3) * R2(k2) * R1(k1)` with
//! `ci = cos(ki)`, `si = sin(ki)`. The middle angle comes from the diagonal
//! element of the repeated axis (`c2`), the outer angles from the `s2`-scaled
//! elements of that axis' row and column. When `s2` vanishes only `k1 ± k3`
//! survives, and it is read from the row of the middle axis with `k3 = 0`.

use nalgebra::Matrix3;

use super::{solve, unit, Solution};

/// `Rx(k3) Ry(k2) Rx(k1)`
///
/// ```text
/// [[ c2,    s1s2,            c1s2          ],
///  [ s2s3,  c1c3 - s1c2s3,  -s1c3 - c1c2s3 ],
///  [-s2c3,  c1s3 + s1c2c3,   c1c2c3 - s1s3 ]]
/// ```
pub(crate) fn xyx(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(0, 0)]).acos(),
        (r[(0, 1)], r[(0, 2)]),
        (r[(1, 0)], -r[(2, 0)]),
        (-r[(1, 2)], r[(1, 1)]),
        tolerance,
    )
}

/// `Rx(k3) Rz(k2) Rx(k1)`
///
/// ```text
/// [[ c2,   -c1s2,            s1s2          ],
///  [ s2c3,  c1c2c3 - s1s3,  -c1s3 - s1c2c3 ],
///  [ s2s3,  c1c2s3 + s1c3,   c1c3 - s1c2s3 ]]
/// ```
pub(crate) fn xzx(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(0, 0)]).acos(),
        (r[(0, 2)], -r[(0, 1)]),
        (r[(2, 0)], r[(1, 0)]),
        (r[(2, 1)], r[(2, 2)]),
        tolerance,
    )
}

/// `Ry(k3) Rx(k2) Ry(k1)`
///
/// ```text
/// [[ c1c3 - s1c2s3,   s2s3,  c1c2s3 + s1c3 ],
///  [ s1s2,            c2,   -c1s2          ],
///  [-c1s3 - s1c2c3,   s2c3,  c1c2c3 - s1s3 ]]
/// ```
pub(crate) fn yxy(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(1, 1)]).acos(),
        (r[(1, 0)], -r[(1, 2)]),
        (r[(0, 1)], r[(2, 1)]),
        (r[(0, 2)], r[(0, 0)]),
        tolerance,
    )
}

/// `Ry(k3) Rz(k2) Ry(k1)`
///
/// ```text
/// [[ c1c2c3 - s1s3,  -s2c3,  c1s3 + s1c2c3 ],
///  [ c1s2,            c2,    s1s2          ],
///  [-c1c2s3 - s1c3,   s2s3,  c1c3 - s1c2s3 ]]
/// ```
pub(crate) fn yzy(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(1, 1)]).acos(),
        (r[(1, 2)], r[(1, 0)]),
        (r[(2, 1)], -r[(0, 1)]),
        (-r[(2, 0)], r[(2, 2)]),
        tolerance,
    )
}

/// `Rz(k3) Rx(k2) Rz(k1)`
///
/// ```text
/// [[ c1c3 - s1c2s3,  -c1c2s3 - s1c3,   s2s3 ],
///  [ c1s3 + s1c2c3,   c1c2c3 - s1s3,  -s2c3 ],
///  [ s1s2,            c1s2,            c2   ]]
/// ```
pub(crate) fn zxz(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(2, 2)]).acos(),
        (r[(2, 0)], r[(2, 1)]),
        (r[(0, 2)], -r[(1, 2)]),
        (-r[(0, 1)], r[(0, 0)]),
        tolerance,
    )
}

/// `Rz(k3) Ry(k2) Rz(k1)`
///
/// ```text
/// [[ c1c2c3 - s1s3,  -c1s3 - s1c2c3,  s2c3 ],
///  [ c1c2s3 + s1c3,   c1c3 - s1c2s3,  s2s3 ],
///  [-c1s2,            s1s2,           c2   ]]
/// ```
pub(crate) fn zyz(r: &Matrix3<f64>, tolerance: f64) -> Solution {
    solve(
        unit(r[(2, 2)]).acos(),
        (r[(2, 1)], -r[(2, 0)]),
        (r[(1, 2)], r[(0, 2)]),
        (r[(1, 0)], r[(1, 1)]),
        tolerance,
    )
}
