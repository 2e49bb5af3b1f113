use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::AlgebraError;
use crate::rings::element::{Field, Tolerance};

/// Exact rational number, kept reduced with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    /// # Panics
    /// On a zero denominator, like integer division by zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        match Self::try_new(num, den) {
            Ok(f) => f,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_new(num: BigInt, den: BigInt) -> Result<Self, AlgebraError> {
        if den.is_zero() {
            return Err(AlgebraError::InvalidArgument(
                "Denominator cannot be zero".into(),
            ));
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Ok(Self {
                num: -num,
                den: -den,
            });
        }
        Ok(Self { num, den })
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

impl FromStr for Fraction {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, AlgebraError> {
        let mut nums = s.split('/');
        let num = nums
            .next()
            .ok_or_else(|| AlgebraError::Parse("No number".into()))?;
        let den = nums.next().unwrap_or("1");
        if nums.next().is_some() {
            return Err(AlgebraError::Parse(format!("Invalid fraction {:?}", s)));
        }

        let parse = |part: &str| {
            BigInt::parse_bytes(part.trim().as_bytes(), 10)
                .ok_or_else(|| AlgebraError::Parse(format!("Invalid number {:?}", part)))
        };
        Fraction::try_new(parse(num)?, parse(den)?)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    /// # Panics
    /// If `rhs` is zero.
    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Tolerance for Fraction {
    fn magnitude(&self) -> Fraction {
        Fraction {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    fn epsilon() -> Fraction {
        Fraction::zero()
    }

    fn from_count(n: usize) -> Fraction {
        Fraction {
            num: BigInt::from(n),
            den: BigInt::one(),
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{} / {}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the order.
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl Field for Fraction {}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::element::Element;

    fn fr(s: &str) -> Fraction {
        Fraction::from_str(s).unwrap()
    }

    #[test]
    fn test_fraction_reduce() {
        let f = fr("6/-8");
        assert_eq!(f.num, BigInt::from(-3));
        assert_eq!(f.den, BigInt::from(4));
        assert!(fr("10/5").is_integer());
        assert_eq!(fr("10/5"), 2);
    }

    #[test]
    fn test_fraction_ops() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("1/3"), fr("1/6"));
        assert_eq!(fr("2/3") * fr("9/4"), fr("3/2"));
        assert_eq!(fr("2/3") / fr("4/9"), fr("3/2"));
        assert_eq!(-fr("2/3"), fr("-2/3"));
        assert!(fr("-1/2") < fr("1/3"));
        assert_eq!(
            vec![fr("1/2"), fr("1/4"), fr("1/4")]
                .into_iter()
                .sum::<Fraction>(),
            1
        );
    }

    #[test]
    fn test_fraction_tolerance() {
        assert_eq!(fr("-3/7").magnitude(), fr("3/7"));
        assert!(Fraction::zero().is_negligible());
        assert!(!fr("1/1000000000000").is_negligible());
        assert_eq!(format!("{}", fr("-3/7")), "-3 / 7");
    }

    #[test]
    fn test_fraction_parse_errors() {
        assert!(matches!(
            Fraction::from_str("1/0"),
            Err(AlgebraError::InvalidArgument(_))
        ));
        assert!(matches!(
            Fraction::from_str("abc"),
            Err(AlgebraError::Parse(_))
        ));
        assert!(matches!(
            Fraction::from_str("1/2/3"),
            Err(AlgebraError::Parse(_))
        ));
    }

    #[test]
    #[should_panic]
    fn test_fraction_div_by_zero() {
        let _ = fr("1/2") / Fraction::zero();
    }
}
