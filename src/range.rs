use crate::{error::FeistelError, word::Word};

/// Check that `total_bits` fits into a word of type `W`.
pub fn check_total_bits<W: Word>(total_bits: u32) -> Result<(), FeistelError> {
    match W::WIDTH {
        Some(width) if total_bits > width => Err(FeistelError::TotalBitsExceedsWidth { total_bits, width }),
        _ => Ok(()),
    }
}

/// Check that a `source_bits`/`target_bits` split fits into `total_bits`.
pub fn check_split(total_bits: u32, source_bits: u32, target_bits: u32) -> Result<(), FeistelError> {
    match source_bits.checked_add(target_bits) {
        Some(sum) if sum <= total_bits => Ok(()),
        _ => Err(FeistelError::SplitExceedsTotal {
            source_bits,
            target_bits,
            total_bits,
        }),
    }
}

/// Inclusive upper bound of a domain `[0, max]`. A domain of size zero has no bound at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bound<W> {
    max: Option<W>,
}

impl<W: Word> Bound<W> {
    /// Domain of all values fitting in `total_bits` bits.
    pub fn bits(total_bits: u32) -> Self {
        Self {
            max: Some(W::low_mask(total_bits)),
        }
    }

    /// Domain `[0, a * b - 1]`, rejecting products that overflow `W`.
    pub fn product(a: &W, b: &W) -> Result<Self, FeistelError> {
        let size = a.checked_product(b).ok_or_else(|| FeistelError::DomainOverflow {
            a: a.to_string(),
            b: b.to_string(),
            width: W::WIDTH.unwrap_or(0),
        })?;
        let max = if size.is_zero() {
            None
        } else {
            Some(size.minus(&W::one()))
        };
        Ok(Self { max })
    }

    pub fn max(&self) -> Option<&W> {
        self.max.as_ref()
    }

    /// Check that `value` lies in `[0, max]`.
    pub fn check(&self, value: &W) -> Result<(), FeistelError> {
        match &self.max {
            Some(max) if value <= max => Ok(()),
            Some(max) => Err(FeistelError::OutOfRange {
                value: value.to_string(),
                max: max.to_string(),
            }),
            None => Err(FeistelError::EmptyDomain {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::{check_split, check_total_bits, Bound};
    use crate::FeistelError;

    #[test]
    fn total_bits_limited_by_word_width() {
        assert!(check_total_bits::<u64>(64).is_ok());
        assert_eq!(
            check_total_bits::<u64>(65),
            Err(FeistelError::TotalBitsExceedsWidth {
                total_bits: 65,
                width: 64
            })
        );
        assert!(check_total_bits::<BigUint>(100_000).is_ok());
    }

    #[test]
    fn split_must_fit() {
        assert!(check_split(16, 8, 8).is_ok());
        assert!(check_split(17, 0, 17).is_ok());
        assert!(check_split(0, 0, 0).is_ok());
        assert!(check_split(16, 9, 8).is_err());
        assert!(check_split(16, u32::MAX, 2).is_err(), "sum overflows u32");
    }

    #[test]
    fn bit_bound_is_inclusive() {
        let bound = Bound::<u64>::bits(8);
        assert!(bound.check(&255).is_ok());
        assert_eq!(
            bound.check(&256),
            Err(FeistelError::OutOfRange {
                value: "256".into(),
                max: "255".into()
            })
        );
        assert!(Bound::<u64>::bits(0).check(&0).is_ok());
        assert!(Bound::<u64>::bits(64).check(&u64::MAX).is_ok());
    }

    #[test]
    fn product_bound() {
        let bound = Bound::<u64>::product(&320, &200).unwrap();
        assert_eq!(bound.max(), Some(&63_999));
        assert!(bound.check(&64_000).is_err());
        assert!(Bound::<u64>::product(&(1 << 32), &(1 << 32)).is_err());
        assert!(Bound::<u64>::product(&u64::MAX, &1).is_ok());
    }

    #[test]
    fn empty_product_rejects_everything() {
        for (a, b) in [(0u64, 0u64), (0, 200), (320, 0)] {
            let bound = Bound::product(&a, &b).unwrap();
            assert_eq!(bound.max(), None);
            assert_eq!(bound.check(&0), Err(FeistelError::EmptyDomain { value: "0".into() }));
        }
    }
}
