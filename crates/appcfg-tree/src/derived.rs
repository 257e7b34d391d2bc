//! Fields computed from other fields
//!
//! A [`DerivedField`] is a unit conversion `base * factor`. Sections call
//! [`DerivedField::compute`] every time the derived key is read, so there is
//! no stored copy that could drift from its base.

/// Milliseconds per minute
pub const MILLIS_PER_MINUTE: u64 = 60 * 1000;

/// Millisecond timeout derived from `timeoutMinutes`
pub const TIMEOUT_MS: DerivedField = DerivedField::new("timeoutMs", "timeoutMinutes", MILLIS_PER_MINUTE);

/// A named field whose value is its base field times a fixed factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedField {
    name: &'static str,
    base: &'static str,
    factor: u64,
}

impl DerivedField {
    /// Declare a derived field
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, base: &'static str, factor: u64) -> Self {
        Self { name, base, factor }
    }

    /// Key the derived value is read under
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key of the base value
    #[inline]
    #[must_use]
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// Unit factor applied to the base
    #[inline]
    #[must_use]
    pub const fn factor(&self) -> u64 {
        self.factor
    }

    /// Compute the derived value from the current base
    ///
    /// Saturates at `u64::MAX`.
    #[inline]
    #[must_use]
    pub const fn compute(&self, base: u64) -> u64 {
        base.saturating_mul(self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_ms_from_minutes() {
        assert_eq!(TIMEOUT_MS.compute(15), 900_000);
        assert_eq!(TIMEOUT_MS.compute(30), 1_800_000);
        assert_eq!(TIMEOUT_MS.name(), "timeoutMs");
        assert_eq!(TIMEOUT_MS.base(), "timeoutMinutes");
    }

    #[test]
    fn compute_saturates() {
        assert_eq!(TIMEOUT_MS.compute(u64::MAX), u64::MAX);
    }

    #[test]
    fn compute_zero_factor() {
        let field = DerivedField::new("zero", "base", 0);
        assert_eq!(field.compute(42), 0);
        assert_eq!(field.factor(), 0);
    }
}
