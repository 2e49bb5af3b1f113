use crate::polynomial::polynomial::Polynomial;
use crate::rings::element::{Element, Field};

/// Zero polynomial of the given element type.
pub fn zero_poly<T: Element>() -> Polynomial<T> {
    Polynomial::zero()
}

/// Antiderivative with a zero constant term.
pub fn polynomial_integrate<T: Field>(p: &Polynomial<T>) -> Polynomial<T> {
    let mut factors = vec![T::zero()];
    factors.extend(
        p.factors()
            .iter()
            .enumerate()
            .map(|(i, f)| f.clone() / T::from_count(i + 1)),
    );
    Polynomial::new(factors)
}

/// Legendre polynomial of degree `n` by the Rodrigues formula,
/// `P_n = d^n/dx^n (x^2 - 1)^n / (2^n n!)`.
pub fn legendre<T: Field>(n: usize) -> Polynomial<T> {
    let base = Polynomial::new(vec![-T::one(), T::zero(), T::one()]);
    let scale = (1..=n).fold(T::one(), |acc, k| acc * T::from_count(2 * k));
    base.pow_unsigned(n as u64)
        .diff(n)
        .mul_scalar(&(T::one() / scale))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use std::str::FromStr;

    fn fr(s: &str) -> Fraction {
        Fraction::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_poly() {
        assert_eq!(zero_poly::<f64>().factors(), &[0.]);
        assert!(zero_poly::<Fraction>().is_zero());
    }

    #[test]
    fn test_integrate() {
        let p = Polynomial::new(vec![fr("1"), fr("2"), fr("3")]);
        let q = polynomial_integrate(&p);
        assert_eq!(
            q,
            Polynomial::new(vec![fr("0"), fr("1"), fr("1"), fr("1")])
        );
        assert_eq!(q.diff(1), p);
        assert_eq!(polynomial_integrate(&zero_poly::<Fraction>()), zero_poly());
    }

    #[test]
    fn test_legendre() {
        assert_eq!(legendre::<Fraction>(0), Polynomial::new(vec![fr("1")]));
        assert_eq!(
            legendre::<Fraction>(1),
            Polynomial::new(vec![fr("0"), fr("1")])
        );
        assert_eq!(
            legendre::<Fraction>(2),
            Polynomial::new(vec![fr("-1/2"), fr("0"), fr("3/2")])
        );
        assert_eq!(
            legendre::<Fraction>(3),
            Polynomial::new(vec![fr("0"), fr("-3/2"), fr("0"), fr("5/2")])
        );
    }

    #[test]
    fn test_legendre_float() {
        let p = legendre::<f64>(2);
        for x in [-1., -0.3, 0., 0.5, 1.] {
            assert!((p.eval(&x) - (3. * x * x - 1.) / 2.).abs() < 1e-12);
        }

        // P_n(1) = 1 and orthogonality of P_2 and P_4 on [-1, 1]
        let p4 = legendre::<f64>(4);
        assert!((p4.eval(&1.) - 1.).abs() < 1e-9);
        let prod = polynomial_integrate(&(&p * &p4));
        assert!((prod.eval(&1.) - prod.eval(&-1.)).abs() < 1e-9);
    }
}
