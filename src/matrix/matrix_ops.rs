use std::ops;

use crate::error::AlgebraError;
use crate::matrix::matrix::Matrix;
use crate::rings::element::{Element, Field};

impl<T: Element> Matrix<T> {
    fn zip_with<F>(&self, rhs: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>, AlgebraError>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != rhs.shape() {
            return Err(AlgebraError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix::from_parts(
            self.rows(),
            self.cols(),
            self.cells()
                .iter()
                .zip(rhs.cells().iter())
                .map(|(a, b)| f(a.to_owned(), b.to_owned()))
                .collect(),
        ))
    }

    /// Adds `value` to every element.
    pub fn add_scalar(&self, value: &T) -> Matrix<T> {
        self.map(|a| a.clone() + value.clone())
    }

    pub fn sub_scalar(&self, value: &T) -> Matrix<T> {
        self.map(|a| a.clone() - value.clone())
    }

    pub fn mul_scalar(&self, value: &T) -> Matrix<T> {
        self.map(|a| a.clone() * value.clone())
    }
}

impl<T: Field> Matrix<T> {
    /// Multiplies every element by the reciprocal of `value`.
    /// Division by zero gives `InvalidArgument`.
    pub fn div_scalar(&self, value: &T) -> Result<Matrix<T>, AlgebraError> {
        if value.is_zero() {
            return Err(AlgebraError::InvalidArgument("division by zero".into()));
        }
        let inv = T::one() / value.clone();
        Ok(self.mul_scalar(&inv))
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, AlgebraError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, AlgebraError> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, AlgebraError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, AlgebraError> {
        self.zip_with(rhs, "sub", |a, b| a - b)
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, AlgebraError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, AlgebraError> {
        if self.cols() != rhs.rows() {
            return Err(AlgebraError::ShapeMismatch {
                op: "mul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix::from_parts(
            self.rows(),
            rhs.cols(),
            (0..self.rows())
                .flat_map(|i| {
                    (0..rhs.cols())
                        .map(move |j| (0..self.cols()).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        ))
    }
}

impl<T: Element> ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|a| -a.clone())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix::eye;
    use crate::rings::fraction::Fraction;
    use num_bigint::BigInt;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
        Matrix::with_shape(
            (rows, cols),
            (0..rows * cols).map(|_| rng.gen_range(-5.0..5.0)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_matrix_add_mul() {
        let a = eye::<i64>(2).unwrap();
        let b = Matrix::from_list(vec![vec![2, 3], vec![4, 5]]).unwrap();

        let c = (&a + &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![3, 3], vec![4, 6]]);

        let c = (&b - &a).unwrap();
        assert_eq!(c.to_list(), vec![vec![1, 3], vec![4, 4]]);

        let c = (&b * &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![16, 21], vec![28, 37]]);

        let d = Matrix::from_list(vec![vec![1], vec![-1]]).unwrap();
        assert_eq!((&b * &d).unwrap().to_list(), vec![vec![-1], vec![-1]]);
        assert_eq!((-&b).to_list(), vec![vec![-2, -3], vec![-4, -5]]);
    }

    #[test]
    fn test_matrix_bigint_fraction() {
        let bi = |s: &str| {
            Fraction::new(
                BigInt::parse_bytes(s.as_bytes(), 10).unwrap(),
                BigInt::from(1),
            )
        };

        let a = Matrix::from_list(vec![
            vec![
                bi("100000000000000000000000000000000000000000000000000000000000006"),
                bi("-101"),
            ],
            vec![bi("1"), bi("-1")],
        ])
        .unwrap();
        let b = Matrix::from_list(vec![vec![bi("2"), bi("3")], vec![bi("4"), bi("5")]]).unwrap();

        assert_eq!(
            (&a * &b).unwrap().to_list(),
            vec![
                vec![
                    bi("199999999999999999999999999999999999999999999999999999999999608"),
                    bi("299999999999999999999999999999999999999999999999999999999999513")
                ],
                vec![bi("-2"), bi("-2")]
            ]
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::from_list(vec![vec![1., 2., 3.]]).unwrap();
        let b = Matrix::from_list(vec![vec![1., 2.]]).unwrap();

        assert_eq!(
            &a + &b,
            Err(AlgebraError::ShapeMismatch {
                op: "add",
                lhs: (1, 3),
                rhs: (1, 2)
            })
        );
        assert!((&a - &b).is_err());
        assert!(matches!(
            &a * &b,
            Err(AlgebraError::ShapeMismatch { op: "mul", .. })
        ));
        assert!((&a * &a.transpose()).is_ok());
    }

    #[test]
    fn test_scalar_broadcast() {
        let a = Matrix::from_list(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
        assert_eq!(a.add_scalar(&1.).to_list(), vec![vec![2., 3.], vec![4., 5.]]);
        assert_eq!(a.mul_scalar(&2.).to_list(), vec![vec![2., 4.], vec![6., 8.]]);
        assert_eq!(
            a.div_scalar(&2.).unwrap().to_list(),
            vec![vec![0.5, 1.], vec![1.5, 2.]]
        );
        assert!(matches!(
            a.div_scalar(&0.),
            Err(AlgebraError::InvalidArgument(_))
        ));

        let f = Matrix::from_list(vec![vec![Fraction::from(3)]]).unwrap();
        assert!(f.div_scalar(&Fraction::from(0)).is_err());
        assert_eq!(f.div_scalar(&Fraction::from(6)).unwrap().at(0, 0), Fraction::new(1.into(), 2.into()));
        assert_eq!(a.sub_scalar(&1.).to_list(), vec![vec![0., 1.], vec![2., 3.]]);
    }

    #[test]
    fn test_scalar_round_trip_and_associativity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 3, 4);
            let b = random_matrix(&mut rng, 4, 2);
            let c = random_matrix(&mut rng, 2, 5);
            let s: f64 = rng.gen_range(-10.0..10.0);

            assert!(a.add_scalar(&s).sub_scalar(&s).approx_eq(&a, &1e-9));

            let left = (&(&a * &b).unwrap() * &c).unwrap();
            let right = (&a * &(&b * &c).unwrap()).unwrap();
            assert!(left.approx_eq(&right, &1e-9));
        }
    }
}
