use std::ops::{Mul, Neg};

use itertools::Itertools;

/// A column-major integer matrix with `O` rows and `I` columns.
///
/// Every matrix on a 3x3x3 cube is a lattice coordinate or a member of the
/// 24-element cube rotation group, so all entries stay small integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<const O: usize, const I: usize>([[i32; O]; I]);

pub type Vector<const N: usize> = Matrix<N, 1>;

impl<const N: usize> Vector<N> {
    #[must_use]
    pub fn into_inner(self) -> [i32; N] {
        let [v] = self.0;
        v
    }

    #[must_use]
    pub fn inner(&self) -> &[i32; N] {
        let [v] = &self.0;
        v
    }

    #[must_use]
    pub fn dot(self, other: Vector<N>) -> i32 {
        let [v1] = self.0;
        let [v2] = other.0;

        v1.into_iter().zip(v2).map(|(a, b)| a * b).sum()
    }
}

impl<const O: usize, const I: usize> Matrix<O, I> {
    /// Build a matrix from its columns.
    #[must_use]
    pub const fn new(data: [[i32; O]; I]) -> Matrix<O, I> {
        Matrix(data)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Matrix([[0; O]; I])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().flatten().all(|v| *v == 0)
    }

    #[must_use]
    pub fn columns(&self) -> &[[i32; O]; I] {
        &self.0
    }

    #[must_use]
    pub fn transpose(self) -> Matrix<I, O> {
        let mut new_data = [[0; I]; O];

        self.0.into_iter().enumerate().for_each(|(i, v)| {
            v.into_iter().enumerate().for_each(|(j, v)| {
                new_data[j][i] = v;
            });
        });

        Matrix(new_data)
    }
}

impl<const N: usize> Matrix<N, N> {
    #[must_use]
    pub fn identity() -> Self {
        let mut data = [[0; N]; N];
        for (i, col) in data.iter_mut().enumerate() {
            col[i] = 1;
        }
        Matrix(data)
    }

    /// Whether `selfᵀ · self` is the identity, i.e. the matrix is a rotation
    /// or reflection.
    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        &self.transpose() * self == Matrix::identity()
    }
}

impl<const O: usize, const M: usize, const I: usize> Mul<&Matrix<M, I>> for &Matrix<O, M> {
    type Output = Matrix<O, I>;

    fn mul(self, rhs: &Matrix<M, I>) -> Self::Output {
        Matrix(
            (0..I)
                .map(|i| {
                    (0..O)
                        .map(|j| (0..M).map(|m| self.0[m][j] * rhs.0[i][m]).sum::<i32>())
                        .collect_array()
                        .unwrap()
                })
                .collect_array()
                .unwrap(),
        )
    }
}

impl<const O: usize, const I: usize> Neg for Matrix<O, I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Matrix(self.0.map(|col| col.map(|v| -v)))
    }
}

/// A rotation by `angle` radians about `axis`, counterclockwise when looking
/// down the axis towards the origin.
///
/// The result is rounded entrywise, so this is only exact for multiples of a
/// quarter turn about a coordinate axis.
///
/// # Panics
///
/// `axis` must not be zero
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn rotation_about(axis: &Vector<3>, angle: f64) -> Matrix<3, 3> {
    assert!(!axis.is_zero());

    let (sin, cos) = angle.sin_cos();
    let cosinv = 1. - cos;

    let [x, y, z] = axis.inner().map(f64::from);
    let norm = (x * x + y * y + z * z).sqrt();
    let [x, y, z] = [x / norm, y / norm, z / norm];

    // https://en.wikipedia.org/wiki/Rotation_matrix#Rotation_matrix_from_axis_and_angle

    let columns = [
        [
            x * x * cosinv + cos,
            x * y * cosinv + z * sin,
            x * z * cosinv - y * sin,
        ],
        [
            y * x * cosinv - z * sin,
            y * y * cosinv + cos,
            y * z * cosinv + x * sin,
        ],
        [
            z * x * cosinv + y * sin,
            z * y * cosinv - x * sin,
            z * z * cosinv + cos,
        ],
    ];

    Matrix(columns.map(|col| col.map(|v| v.round() as i32)))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::{Matrix, Vector, rotation_about};

    #[test]
    fn vector_ops() {
        assert_eq!(Vector::new([[1, 2, 3]]).into_inner(), [1, 2, 3]);
        assert_eq!(Vector::new([[1, 1, 0]]).dot(Vector::new([[0, 2, 1]])), 2);
        assert_eq!(-Vector::new([[1, -2, 0]]), Vector::new([[-1, 2, 0]]));

        assert!(!Vector::new([[0, 3, 0]]).is_zero());
        assert!(Vector::new([[0, 0, 0]]).is_zero());
        assert_eq!(Vector::zero(), Vector::new([[0, 0, 0]]));
    }

    #[test]
    fn matrix_ops() {
        assert_eq!(
            &Matrix::new([[1, 0, 0], [0, 0, 1], [0, 1, 0]]) * &Vector::new([[1, 2, 3]]),
            Vector::new([[1, 3, 2]])
        );

        assert_eq!(
            &Matrix::new([[5, 2, 9], [3, 9, 0], [2, 4, 3]])
                * &Matrix::new([[9, 3, 4], [2, 5, 1], [6, 2, 1]]),
            Matrix::new([[62, 61, 93], [27, 53, 21], [38, 34, 57]])
        );

        assert_eq!(
            Matrix::new([[1, 2, 3], [4, 5, 6]]).transpose(),
            Matrix::new([[1, 4], [2, 5], [3, 6]])
        );

        assert_eq!(
            Matrix::<3, 3>::identity(),
            Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]])
        );
        assert!(Matrix::<3, 3>::identity().is_orthogonal());
        assert!(!Matrix::new([[2, 0, 0], [0, 1, 0], [0, 0, 1]]).is_orthogonal());
    }

    #[test]
    fn test_rotation_about() {
        assert_eq!(
            rotation_about(&Vector::new([[0, 1, 0]]), FRAC_PI_2),
            Matrix::new([[0, 0, -1], [0, 1, 0], [1, 0, 0]])
        );

        assert_eq!(
            rotation_about(&Vector::new([[0, 0, 1]]), PI),
            Matrix::new([[-1, 0, 0], [0, -1, 0], [0, 0, 1]])
        );

        // A clockwise quarter turn about +z sends +x to -y
        let quarter = rotation_about(&Vector::new([[0, 0, 1]]), -FRAC_PI_2);
        assert_eq!(
            &quarter * &Vector::new([[1, 0, 0]]),
            Vector::new([[0, -1, 0]])
        );
        assert!(quarter.is_orthogonal());

        // Axis length does not matter
        assert_eq!(
            rotation_about(&Vector::new([[0, 0, 5]]), -FRAC_PI_2),
            quarter
        );
    }
}
