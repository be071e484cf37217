use chrono::NaiveDateTime;

/// A port that provides the **current time** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The timezone concept is intentionally delegated to the implementation.
/// - This trait represents an **external capability**, similar to a Repository.
///
/// # Typical Implementations
/// - `SystemClock`: Uses the OS / runtime clock with a configured timezone
/// - `FixedClock`: Returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock time as a [`NaiveDateTime`].
    ///
    /// Implementations decide how "now" is determined
    /// (e.g. system time, fixed value, mocked time source).
    fn now(&self) -> NaiveDateTime;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Test implementation of `Clock` that always returns a fixed instant.
    struct FixedClock {
        at: NaiveDateTime,
    }

    impl FixedClock {
        fn new(at: NaiveDateTime) -> Self {
            Self { at }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.at
        }
    }

    #[test]
    fn fixed_clock_returns_given_instant() {
        let at = NaiveDate::from_ymd_opt(2025, 10, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let clock = FixedClock::new(at);

        assert_eq!(clock.now(), at);
    }

    #[test]
    fn clock_trait_object_works() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(at));

        assert_eq!(clock.now(), at);
    }
}
