//! ROS built-in `time` and `duration` values.
//!
//! Both are serialized as two consecutive 32-bit integers, seconds followed by
//! nanoseconds. `time` halves are unsigned on the wire, `duration` halves are
//! signed.

use std::fmt;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Point in time as seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub sec: u32,
    pub nsec: u32,
}

impl Time {
    pub fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }

    /// Build a time from two halves that were read as signed 32-bit integers.
    ///
    /// A negative half is the unsigned value minus 2^32, so adding 2^32 back
    /// recovers the magnitude that was written.
    pub fn from_signed_pair(raw_sec: i32, raw_nsec: i32) -> Self {
        Self {
            sec: unsigned_half(raw_sec),
            nsec: unsigned_half(raw_nsec),
        }
    }

    /// Nanoseconds since the epoch. `nsec` values of a second or more carry.
    pub fn as_nanos(&self) -> u64 {
        u64::from(self.sec) * u64::from(NANOS_PER_SEC) + u64::from(self.nsec)
    }

    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.sec) + f64::from(self.nsec) / f64::from(NANOS_PER_SEC)
    }

    /// Convert to a UTC timestamp with the nanosecond remainder preserved.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let secs = i64::from(self.sec) + i64::from(self.nsec / NANOS_PER_SEC);
        chrono::DateTime::from_timestamp(secs, self.nsec % NANOS_PER_SEC)
    }
}

fn unsigned_half(raw: i32) -> u32 {
    if raw >= 0 {
        raw as u32
    } else {
        (0x1_0000_0000_i64 + i64::from(raw)) as u32
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nsec)
    }
}

/// Signed time span as seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    pub sec: i32,
    pub nsec: i32,
}

impl Duration {
    pub fn new(sec: i32, nsec: i32) -> Self {
        Self { sec, nsec }
    }

    /// `sec + nsec / 1e9`.
    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.sec) + f64::from(self.nsec) / f64::from(NANOS_PER_SEC)
    }

    #[cfg(feature = "chrono")]
    pub fn to_chrono(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::seconds(i64::from(self.sec))
            + chrono::TimeDelta::nanoseconds(i64::from(self.nsec))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs_f64())
    }
}
