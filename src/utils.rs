/// Bits of `value` from the most significant set bit down to bit 0.
/// Zero yields no bits.
pub fn bits_msb_first(value: u64) -> impl Iterator<Item = bool> {
    let width = u64::BITS - value.leading_zeros();
    (0..width).rev().map(move |i| (value >> i) & 1 != 0)
}

/// Raises `base` to `exponent` with `mul`, starting from `one`.
/// Small exponents use repeated multiplication, the others square-and-multiply
/// over the bits of the exponent, most significant first.
pub fn power_by<T, F>(base: &T, exponent: u64, one: T, mut mul: F) -> T
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    if exponent < 16 {
        return (0..exponent).fold(one, |acc, _| mul(&acc, base));
    }

    // the leading bit is always set and seeds the accumulator
    bits_msb_first(exponent).skip(1).fold(base.clone(), |acc, bit| {
        let squared = mul(&acc, &acc);
        if bit {
            mul(&squared, base)
        } else {
            squared
        }
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::utils::{bits_msb_first, power_by};

    #[test]
    fn test_bits_msb_first() {
        assert_eq!(
            bits_msb_first(0b10110).collect::<Vec<_>>(),
            vec![true, false, true, true, false]
        );
        assert_eq!(bits_msb_first(1).collect::<Vec<_>>(), vec![true]);
        assert_eq!(bits_msb_first(0).count(), 0);
        assert_eq!(bits_msb_first(u64::MAX).count(), 64);
    }

    #[test]
    fn test_power_by() {
        let mut calls = 0;
        let r = power_by(&3u128, 5, 1, |a, b| {
            calls += 1;
            a * b
        });
        assert_eq!(r, 243);
        assert_eq!(calls, 5);

        let mut calls = 0;
        let r = power_by(&3u128, 40, 1, |a, b| {
            calls += 1;
            a * b
        });
        assert_eq!(r, 3u128.pow(40));
        // 0b101000: a squaring for each of the 5 bits after the leading one,
        // plus a multiply for the one set bit among them
        assert_eq!(calls, 5 + 1);

        let mut calls = 0;
        let r = power_by(&2u128, 16, 1, |a, b| {
            calls += 1;
            a * b
        });
        assert_eq!(r, 65536);
        assert_eq!(calls, 4);

        assert_eq!(power_by(&7u64, 0, 1, |a, b| a * b), 1);
    }
}
