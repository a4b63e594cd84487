//! Time abstraction traits for platform-agnostic timing.
//!
//! The button engine never reads a clock itself. Callers pass the current
//! instant into [`Button::update`](crate::Button::update), which keeps the
//! engine independent of any hardware timer.
//!
//! Fixed-width counters wrap. All instant arithmetic in this module is modular,
//! so an elapsed time computed across a wraparound is still correct as long as
//! the real elapsed time fits in the counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Modular addition.
    fn wrapping_add(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy + PartialEq {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Origin of the counter, the value a freshly started timer reads.
    const ZERO: Self;

    /// Calculates duration since an earlier instant, wrapping on counter overflow.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, wrapping on counter overflow.
    fn wrapping_add(self, duration: Self::Duration) -> Self;

    /// Subtracts duration from instant, wrapping on counter underflow.
    fn wrapping_sub(self, duration: Self::Duration) -> Self;
}

macro_rules! impl_millis_counter {
    ($($t:ty),*) => {$(
        impl TimeDuration for $t {
            const ZERO: Self = 0;

            #[inline]
            fn as_millis(&self) -> u64 {
                *self as u64
            }

            #[inline]
            fn from_millis(millis: u64) -> Self {
                millis as $t
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$t>::wrapping_add(self, other)
            }
        }

        impl TimeInstant for $t {
            type Duration = $t;

            const ZERO: Self = 0;

            #[inline]
            fn duration_since(&self, earlier: Self) -> Self::Duration {
                <$t>::wrapping_sub(*self, earlier)
            }

            #[inline]
            fn wrapping_add(self, duration: Self::Duration) -> Self {
                <$t>::wrapping_add(self, duration)
            }

            #[inline]
            fn wrapping_sub(self, duration: Self::Duration) -> Self {
                <$t>::wrapping_sub(self, duration)
            }
        }
    )*};
}

// Plain millisecond tick counters, e.g. a SysTick-driven `u32`.
impl_millis_counter!(u32, u64);
