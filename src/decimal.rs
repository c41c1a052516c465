/// Decimal is an arbitrary precision decimal number parsed from
/// a plain "[+-]digits[.digits]" string.
///
/// The representation is normalized: leading zeroes of the integral
/// part and trailing zeroes of the fractional part are not stored,
/// and zero is never negative. So "007.50" and "7.5" are equal and
/// hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    // Integral digits as ASCII, most significant first.
    // Empty if integral part is zero.
    pub(crate) intg: Vec<u8>,
    // Fractional digits as ASCII, trailing zeroes stripped.
    pub(crate) frac: Vec<u8>,
    pub(crate) neg: bool,
}

impl Decimal {
    #[inline]
    pub fn zero() -> Decimal {
        Decimal {
            intg: Vec::new(),
            frac: Vec::new(),
            neg: false,
        }
    }

    #[inline]
    pub fn is_neg(&self) -> bool {
        self.neg
    }

    #[inline]
    pub(crate) fn set_neg_and_check_zero(&mut self) {
        self.neg = !self.is_zero();
    }

    #[inline]
    pub fn set_pos(&mut self) {
        self.neg = false;
    }

    /// resets value to zero, keeping allocated digit buffers.
    #[inline]
    pub fn set_zero(&mut self) {
        self.intg.clear();
        self.frac.clear();
        self.neg = false;
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.intg.is_empty() && self.frac.is_empty()
    }

    /// Number of significant integral digits.
    /// Zero if integral part is zero.
    #[inline]
    pub fn intg(&self) -> usize {
        self.intg.len()
    }

    /// Number of fractional digits, trailing zeroes excluded.
    #[inline]
    pub fn frac(&self) -> usize {
        self.frac.len()
    }

    /// Total number of digits of this decimal.
    ///
    /// Trailing zeroes of the integral part count ("100" has 3),
    /// leading zeroes of a pure fraction do not ("0.012" has 2).
    /// Zero has precision 1.
    pub fn precision(&self) -> usize {
        if !self.intg.is_empty() {
            return self.intg.len() + self.frac.len();
        }
        match self.frac.iter().position(|c| *c != b'0') {
            Some(p) => self.frac.len() - p,
            None => 1,
        }
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn decimal_places(&self) -> usize {
        self.frac()
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Decimal::zero()
    }
}
