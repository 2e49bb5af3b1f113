use itertools::Itertools;
use std::fmt;
use std::ops;

use crate::error::AlgebraError;
use crate::rings::element::{Element, Field};
use crate::utils::power_by;

/// Dense univariate polynomial, `factors[i]` being the coefficient of `x^i`.
///
/// Trailing zero coefficients are dropped on construction, so the last factor
/// is non-zero unless the polynomial is zero, which is stored as `[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    factors: Vec<T>,
}

impl<T: Element> Polynomial<T> {
    pub fn new(mut factors: Vec<T>) -> Self {
        while factors.last().map_or(false, |f| f.is_zero()) {
            factors.pop();
        }
        if factors.is_empty() {
            factors.push(T::zero());
        }
        Polynomial { factors }
    }

    pub fn zero() -> Self {
        Polynomial {
            factors: vec![T::zero()],
        }
    }

    pub fn one() -> Self {
        Polynomial {
            factors: vec![T::one()],
        }
    }

    pub fn degree(&self) -> usize {
        self.factors.len() - 1
    }

    pub fn factors(&self) -> &[T] {
        &self.factors
    }

    pub fn is_zero(&self) -> bool {
        self.factors.len() == 1 && self.factors[0].is_zero()
    }

    /// Horner evaluation.
    pub fn eval(&self, x: &T) -> T {
        self.factors
            .iter()
            .rev()
            .fold(T::zero(), |acc, f| acc * x.clone() + f.clone())
    }

    pub fn add_scalar(&self, value: &T) -> Polynomial<T> {
        let mut factors = self.factors.clone();
        factors[0] = factors[0].clone() + value.clone();
        Polynomial::new(factors)
    }

    pub fn mul_scalar(&self, value: &T) -> Polynomial<T> {
        Polynomial::new(self.factors.iter().map(|f| f.clone() * value.clone()).collect())
    }

    /// Non-negative integer powers. A negative exponent is reported as
    /// [`AlgebraError::Unsupported`] so the caller can fall back to another path.
    pub fn pow(&self, p: i64) -> Result<Polynomial<T>, AlgebraError> {
        if p < 0 {
            return Err(AlgebraError::Unsupported(format!(
                "negative power {} of a polynomial",
                p
            )));
        }
        Ok(self.pow_unsigned(p as u64))
    }

    pub(crate) fn pow_unsigned(&self, p: u64) -> Polynomial<T> {
        power_by(self, p, Polynomial::one(), |a, b| a * b)
    }

    /// `n`-th derivative.
    pub fn diff(&self, n: usize) -> Polynomial<T> {
        if n > self.degree() {
            return Polynomial::zero();
        }

        Polynomial::new(
            self.factors
                .iter()
                .enumerate()
                .skip(n)
                .map(|(i, f)| {
                    // i * (i - 1) * ... * (i - n + 1)
                    let falling = (i - n + 1..=i).fold(T::one(), |acc, k| acc * T::from_count(k));
                    f.clone() * falling
                })
                .collect(),
        )
    }
}

impl<T: Field> Polynomial<T> {
    /// Multiplies by the reciprocal of `value`. Division by zero gives
    /// `InvalidArgument`.
    pub fn div_scalar(&self, value: &T) -> Result<Polynomial<T>, AlgebraError> {
        if value.is_zero() {
            return Err(AlgebraError::InvalidArgument("division by zero".into()));
        }
        Ok(self.mul_scalar(&(T::one() / value.clone())))
    }
}

impl<T: Element> ops::Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        Polynomial::new(
            self.factors
                .iter()
                .zip_longest(rhs.factors.iter())
                .map(|pair| match pair {
                    itertools::EitherOrBoth::Both(a, b) => a.clone() + b.clone(),
                    itertools::EitherOrBoth::Left(a) | itertools::EitherOrBoth::Right(a) => {
                        a.clone()
                    }
                })
                .collect(),
        )
    }
}

impl<T: Element> ops::Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::new(self.factors.iter().map(|f| -f.clone()).collect())
    }
}

impl<T: Element> ops::Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self + &(-rhs)
    }
}

impl<T: Element> ops::Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let (d1, d2) = (self.degree(), rhs.degree());
        Polynomial::new(
            (0..=d1 + d2)
                .map(|i| {
                    (i.saturating_sub(d2)..=i.min(d1))
                        .map(|j| self.factors[j].clone() * rhs.factors[i - j].clone())
                        .sum()
                })
                .collect(),
        )
    }
}

impl<T: Element> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self
            .factors
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| {
                let sign = if *c < T::zero() { "-" } else { "+" };
                match i {
                    1 => format!(" {} {} X", sign, c.magnitude()),
                    _ => format!(" {} {} X^{}", sign, c.magnitude(), i),
                }
            })
            .join("");
        write!(
            f,
            "Polynomial of degree {} \n{}{}",
            self.degree(),
            self.factors[0],
            terms
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use std::str::FromStr;

    #[test]
    fn test_trim() {
        let p = Polynomial::new(vec![1., 2., 0., 0.]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.factors(), &[1., 2.]);

        let z = Polynomial::new(vec![0, 0, 0]);
        assert_eq!(z.degree(), 0);
        assert_eq!(z.factors(), &[0]);
        assert!(z.is_zero());
        assert_eq!(Polynomial::<i64>::new(vec![]), Polynomial::zero());
    }

    #[test]
    fn test_eval_and_diff() {
        let p = Polynomial::new(vec![1., 0., 1.]);
        assert_eq!(p.eval(&2.), 5.);
        assert_eq!(p.diff(1), Polynomial::new(vec![0., 2.]));
        assert_eq!(p.diff(2), Polynomial::new(vec![2.]));
        assert_eq!(p.diff(3), Polynomial::zero());
        assert_eq!(p.diff(0), p);

        let q = Polynomial::new(vec![1, 1, 1, 1, 1]);
        assert_eq!(q.diff(2), Polynomial::new(vec![2, 6, 12]));
        assert_eq!(q.eval(&-2), 11);
    }

    #[test]
    fn test_add_sub() {
        let p = Polynomial::new(vec![1, 2, 3]);
        let q = Polynomial::new(vec![4, 5]);
        assert_eq!(&p + &q, Polynomial::new(vec![5, 7, 3]));
        assert_eq!(&q + &p, Polynomial::new(vec![5, 7, 3]));
        assert_eq!(&p - &p, Polynomial::zero());
        assert_eq!((&p - &q).degree(), 2);
        assert_eq!(p.add_scalar(&10), Polynomial::new(vec![11, 2, 3]));

        // leading terms cancel
        let r = Polynomial::new(vec![0, 0, -3]);
        assert_eq!((&p + &r).degree(), 1);
    }

    #[test]
    fn test_mul_div() {
        let p = Polynomial::new(vec![1, 1]);
        let q = Polynomial::new(vec![-1, 1]);
        assert_eq!(&p * &q, Polynomial::new(vec![-1, 0, 1]));
        assert_eq!(&p * &Polynomial::zero(), Polynomial::zero());
        assert_eq!(p.mul_scalar(&3), Polynomial::new(vec![3, 3]));

        let f = Polynomial::new(vec![Fraction::from(3), Fraction::from(6)]);
        assert_eq!(
            f.div_scalar(&Fraction::from(4)).unwrap(),
            Polynomial::new(vec![
                Fraction::from_str("3/4").unwrap(),
                Fraction::from_str("3/2").unwrap()
            ])
        );
        assert!(matches!(
            f.div_scalar(&Fraction::from(0)),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pow() {
        let p = Polynomial::new(vec![1i64, 1]);
        assert_eq!(p.pow(0).unwrap(), Polynomial::one());
        assert_eq!(p.pow(3).unwrap(), Polynomial::new(vec![1, 3, 3, 1]));

        let big = p.pow(20).unwrap();
        assert_eq!(big.degree(), 20);
        assert_eq!(big.factors()[10], 184756);
        assert_eq!(big, (&p.pow(10).unwrap() * &p.pow(10).unwrap()));

        assert!(matches!(p.pow(-1), Err(AlgebraError::Unsupported(_))));
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(vec![1, -2, 0, 3]);
        assert_eq!(format!("{}", p), "Polynomial of degree 3 \n1 - 2 X + 3 X^3");
        assert_eq!(
            format!("{}", Polynomial::<i64>::zero()),
            "Polynomial of degree 0 \n0"
        );
    }
}
