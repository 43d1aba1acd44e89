//! Ordering and equality.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::magnitude;
use crate::repr::BigInt;

impl BigInt {
    /// Compares the magnitudes of `self` and `other`, ignoring sign.
    #[must_use]
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        magnitude::cmp(&self.digits, &other.digits)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.digits == other.digits
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.digits.hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let (sa, sb) = (self.signum(), other.signum());
        match sa.cmp(&sb) {
            Ordering::Equal => {
                let mag_order = self.cmp_abs(other);
                if sa < 0 {
                    mag_order.reverse()
                } else {
                    mag_order
                }
            }
            other => other,
        }
    }
}
