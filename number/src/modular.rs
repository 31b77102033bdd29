use crate::{Integer, Modulus};

/// Running sum of integers, kept reduced modulo a fixed divisor.
///
/// Every addend is reduced before it is accumulated and the accumulator is
/// twice as wide as [`Integer`], so the result is exact for any number of
/// addends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModularSum {
    modulus: Modulus,
    acc: u128,
}

impl ModularSum {
    pub fn new(modulus: Modulus) -> Self {
        Self { modulus, acc: 0 }
    }

    pub fn add(&mut self, value: Integer) {
        let m = u128::from(self.modulus.get());
        self.acc = (self.acc + u128::from(value) % m) % m;
    }

    /// The sum of all added values, modulo the divisor.
    pub fn value(&self) -> Integer {
        // acc < modulus <= Integer::MAX
        self.acc as Integer
    }
}

impl Extend<Integer> for ModularSum {
    fn extend<I: IntoIterator<Item = Integer>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Returns `(Σ values) mod modulus`.
pub fn sum_mod(values: impl IntoIterator<Item = Integer>, modulus: Modulus) -> Integer {
    let mut sum = ModularSum::new(modulus);
    sum.extend(values);
    sum.value()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn modulus(m: u64) -> Modulus {
        Modulus::new(m).unwrap()
    }

    #[test]
    fn small_sums() {
        assert_eq!(sum_mod([1, 2, 3], modulus(5)), 1);
        assert_eq!(sum_mod([10, 20, 30, 40], modulus(10)), 0);
        assert_eq!(sum_mod([3, 4], modulus(7)), 0);
        assert_eq!(sum_mod([99], modulus(100)), 99);
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(sum_mod(std::iter::empty(), modulus(3)), 0);
    }

    #[test]
    fn modulus_one() {
        assert_eq!(sum_mod([5, 8, 13], modulus(1)), 0);
    }

    #[test]
    fn no_overflow_near_max() {
        let m = u64::MAX;
        // (MAX - 1) * 3 = 3 * MAX - 3 = -3 mod MAX
        assert_eq!(sum_mod([m - 1, m - 1, m - 1], modulus(m)), m - 3);
        assert_eq!(sum_mod([u64::MAX; 4], modulus(1_000_000_007)), {
            let x = u128::from(u64::MAX) * 4 % 1_000_000_007;
            x as u64
        });
    }

    #[test]
    fn incremental() {
        let mut sum = ModularSum::new(modulus(10));
        sum.add(7);
        assert_eq!(sum.value(), 7);
        sum.add(5);
        assert_eq!(sum.value(), 2);
        sum.extend([8, 1]);
        assert_eq!(sum.value(), 1);
    }
}
