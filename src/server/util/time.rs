#[cfg(not(test))]
use chrono::{DateTime, Utc};

pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::now_utc;
    #[cfg(test)]
    pub use super::mock_clock::now_utc;
}

#[cfg(not(test))]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
pub(crate) mod mock_clock {
    use chrono::{DateTime, Utc};
    use std::cell::Cell;

    thread_local! {
        static MOCK_NOW: Cell<i64> = const { Cell::new(0) };
    }

    pub fn now_utc() -> DateTime<Utc> {
        MOCK_NOW
            .with(|now| DateTime::<Utc>::from_timestamp(now.get(), 0))
            .expect("invalid timestamp")
    }

    #[allow(unused)]
    pub fn freeze_at(timestamp: i64) {
        MOCK_NOW.with(|now| now.set(timestamp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_is_settable() {
        mock_clock::freeze_at(1_700_000_000);
        assert_eq!(helper::now_utc().timestamp(), 1_700_000_000);
    }
}
