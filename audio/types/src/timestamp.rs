/*!
    Time bases and presentation timestamps.
*/

use std::fmt;
use std::time::Duration;

/**
    A time base, represented as a numerator and denominator.

    Audio timestamps in this crate use one tick per sample,
    i.e. a time base of `1/sample_rate`.
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    /**
        Create a new rational number.

        # Panics

        Panics if `den` is zero.
    */
    #[inline]
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self { num, den }
    }

    /**
        Time base with one tick per sample at the given rate.

        Rates above `i32::MAX` saturate.
    */
    #[inline]
    pub const fn per_sample(sample_rate: u32) -> Self {
        let den = if sample_rate > i32::MAX as u32 {
            i32::MAX
        } else {
            sample_rate as i32
        };
        Self::new(1, den)
    }

    /**
        Convert to f64.
    */
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/**
    Presentation timestamp in time_base units.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pts(pub i64);

impl Pts {
    /**
        Convert this PTS to a Duration using the given time base.

        Negative PTS values are clamped to zero.
    */
    #[inline]
    pub fn to_duration(self, time_base: Rational) -> Duration {
        if self.0 <= 0 {
            return Duration::ZERO;
        }
        let seconds = self.0 as f64 * time_base.to_f64();
        Duration::from_secs_f64(seconds.max(0.0))
    }

    /**
        Rescale a per-sample timestamp from one sample rate to another,
        rounding to the nearest tick.
    */
    #[inline]
    pub fn rescale(self, from_rate: u32, to_rate: u32) -> Self {
        if from_rate == to_rate || from_rate == 0 {
            return self;
        }
        let scaled = self.0 as i128 * to_rate as i128;
        let from = from_rate as i128;
        let rounded = if scaled >= 0 {
            (scaled + from / 2) / from
        } else {
            (scaled - from / 2) / from
        };
        Self(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /**
        Returns this timestamp advanced by a number of ticks.
    */
    #[inline]
    pub fn advance(self, ticks: usize) -> Self {
        Self(self.0.saturating_add(ticks as i64))
    }
}

impl From<i64> for Pts {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Pts> for i64 {
    fn from(pts: Pts) -> Self {
        pts.0
    }
}
