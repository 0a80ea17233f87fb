//! Call log: an ordered list of call records with direction filtering and
//! redial.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dial::{place_call_reported, DialOutcome, Dialer};
use crate::error::DialerError;

/// Direction/status tag of a call record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Incoming,
    Outgoing,
    Missed,
}

impl CallStatus {
    /// Status after the user re-dials a record with this status.
    pub fn after_redial(self) -> Self {
        match self {
            Self::Incoming | Self::Missed => Self::Outgoing,
            Self::Outgoing => Self::Outgoing,
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
            Self::Missed => "missed",
        };
        f.write_str(s)
    }
}

impl FromStr for CallStatus {
    type Err = DialerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "incoming" => Ok(Self::Incoming),
            "outgoing" => Ok(Self::Outgoing),
            "missed" => Ok(Self::Missed),
            other => Err(DialerError::ValidationFailed(format!(
                "invalid call status: {other}"
            ))),
        }
    }
}

/// Which records the call screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallFilter {
    #[default]
    All,
    Incoming,
    Outgoing,
    Missed,
}

impl CallFilter {
    pub const CYCLE: [CallFilter; 4] = [Self::All, Self::Incoming, Self::Outgoing, Self::Missed];

    /// Next filter in the cycle `all -> incoming -> outgoing -> missed -> all`.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Incoming,
            Self::Incoming => Self::Outgoing,
            Self::Outgoing => Self::Missed,
            Self::Missed => Self::All,
        }
    }

    pub fn matches(self, status: CallStatus) -> bool {
        match self {
            Self::All => true,
            Self::Incoming => status == CallStatus::Incoming,
            Self::Outgoing => status == CallStatus::Outgoing,
            Self::Missed => status == CallStatus::Missed,
        }
    }
}

impl fmt::Display for CallFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
            Self::Missed => "missed",
        };
        f.write_str(s)
    }
}

impl FromStr for CallFilter {
    type Err = DialerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "incoming" => Ok(Self::Incoming),
            "outgoing" => Ok(Self::Outgoing),
            "missed" => Ok(Self::Missed),
            other => Err(DialerError::ValidationFailed(format!(
                "invalid call filter: {other}"
            ))),
        }
    }
}

/// One entry in the call history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    pub number: String,
    pub status: CallStatus,
}

impl CallRecord {
    pub fn new(id: impl Into<String>, number: impl Into<String>, status: CallStatus) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            status,
        }
    }
}

/// Result of redialing a known record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redial {
    pub previous: CallStatus,
    pub record: CallRecord,
    pub dial: DialOutcome,
}

/// Owns the call history and the current screen filter.
pub struct CallLog {
    records: Vec<CallRecord>,
    filter: CallFilter,
    dialer: Arc<dyn Dialer>,
}

impl fmt::Debug for CallLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLog")
            .field("records", &self.records)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl CallLog {
    pub fn new(records: Vec<CallRecord>, dialer: Arc<dyn Dialer>) -> Self {
        Self {
            records,
            filter: CallFilter::All,
            dialer,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CallRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records matching `filter`, in insertion order.
    pub fn list(&self, filter: CallFilter) -> Vec<&CallRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r.status))
            .collect()
    }

    pub fn filter(&self) -> CallFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CallFilter) {
        self.filter = filter;
    }

    /// Advance the screen filter and return the new value.
    pub fn cycle_filter(&mut self) -> CallFilter {
        self.filter = self.filter.next();
        tracing::debug!(filter = %self.filter, "call filter changed");
        self.filter
    }

    /// Records visible under the current screen filter.
    pub fn visible(&self) -> Vec<&CallRecord> {
        self.list(self.filter)
    }

    /// Re-dial a record. Unknown ids are ignored and nothing is dialed.
    ///
    /// The status transition is applied before the dialer runs and is kept
    /// even if dialing fails.
    pub fn redial(&mut self, id: &str) -> Option<Redial> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::debug!(id, "redial ignored: no such call");
            return None;
        };
        let previous = record.status;
        record.status = previous.after_redial();
        if previous != record.status {
            tracing::debug!(id, from = %previous, to = %record.status, "call status changed");
        }
        let snapshot = record.clone();
        let dial = place_call_reported(self.dialer.as_ref(), &snapshot.number);
        Some(Redial {
            previous,
            record: snapshot,
            dial,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::sync::Mutex;

    use proptest::prelude::*;

    use super::*;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Dialer for Recording {
        fn place_call(&self, number: &str) -> Result<(), DialerError> {
            self.calls.lock().unwrap().push(number.to_string());
            if self.fail {
                return Err(DialerError::ExternalActionFailed("no dialer".into()));
            }
            Ok(())
        }
    }

    fn sample(dialer: Arc<Recording>) -> CallLog {
        CallLog::new(
            vec![
                CallRecord::new("1", "0987654321", CallStatus::Incoming),
                CallRecord::new("2", "0123456789", CallStatus::Outgoing),
                CallRecord::new("3", "0345678901", CallStatus::Missed),
                CallRecord::new("4", "0567890123", CallStatus::Incoming),
            ],
            dialer,
        )
    }

    fn ids(records: &[&CallRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let log = sample(Arc::default());
        assert_eq!(ids(&log.list(CallFilter::All)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn list_by_status() {
        let log = sample(Arc::default());
        assert_eq!(ids(&log.list(CallFilter::Incoming)), ["1", "4"]);
        assert_eq!(ids(&log.list(CallFilter::Outgoing)), ["2"]);
        assert_eq!(ids(&log.list(CallFilter::Missed)), ["3"]);
    }

    #[test]
    fn redial_missed_becomes_outgoing_and_dials() {
        let dialer = Arc::new(Recording::default());
        let mut log = sample(dialer.clone());
        let r = log.redial("3").expect("known id");
        assert_eq!(r.previous, CallStatus::Missed);
        assert_eq!(r.record.status, CallStatus::Outgoing);
        assert_eq!(log.get("3").unwrap().status, CallStatus::Outgoing);
        assert!(r.dial.is_placed());
        assert_eq!(*dialer.calls.lock().unwrap(), ["0345678901"]);
    }

    #[test]
    fn redial_outgoing_is_idempotent() {
        let mut log = sample(Arc::default());
        log.redial("2");
        let r = log.redial("2").unwrap();
        assert_eq!(r.previous, CallStatus::Outgoing);
        assert_eq!(r.record.status, CallStatus::Outgoing);
    }

    #[test]
    fn redial_unknown_is_noop() {
        let dialer = Arc::new(Recording::default());
        let mut log = sample(dialer.clone());
        let before: Vec<CallRecord> = log.list(CallFilter::All).into_iter().cloned().collect();
        assert!(log.redial("missing").is_none());
        let after: Vec<CallRecord> = log.list(CallFilter::All).into_iter().cloned().collect();
        assert_eq!(before, after);
        assert!(dialer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn dial_failure_keeps_transition() {
        let dialer = Arc::new(Recording {
            fail: true,
            ..Recording::default()
        });
        let mut log = sample(dialer);
        let r = log.redial("1").unwrap();
        assert!(!r.dial.is_placed());
        assert_eq!(log.get("1").unwrap().status, CallStatus::Outgoing);
    }

    #[test]
    fn cycle_filter_order() {
        let mut log = sample(Arc::default());
        assert_eq!(log.filter(), CallFilter::All);
        assert_eq!(log.cycle_filter(), CallFilter::Incoming);
        assert_eq!(ids(&log.visible()), ["1", "4"]);
        assert_eq!(log.cycle_filter(), CallFilter::Outgoing);
        assert_eq!(log.cycle_filter(), CallFilter::Missed);
        assert_eq!(log.cycle_filter(), CallFilter::All);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Missed".parse::<CallFilter>(), Ok(CallFilter::Missed));
        assert_eq!(" all ".parse::<CallFilter>(), Ok(CallFilter::All));
        assert!("rejected".parse::<CallFilter>().is_err());
        assert_eq!("incoming".parse::<CallStatus>(), Ok(CallStatus::Incoming));
        assert!("all".parse::<CallStatus>().is_err());
        assert_eq!(CallStatus::Outgoing.to_string(), "outgoing");
        assert_eq!(CallFilter::All.to_string(), "all");
    }

    fn any_filter() -> impl Strategy<Value = CallFilter> {
        prop::sample::select(CallFilter::CYCLE.to_vec())
    }

    proptest! {
        #[test]
        fn cycling_four_times_is_identity(start in any_filter()) {
            let mut f = start;
            for _ in 0..4 {
                f = f.next();
            }
            prop_assert_eq!(f, start);
        }

        #[test]
        fn filtered_lists_partition_all(start in any_filter()) {
            let log = sample(Arc::default());
            let total: usize = [CallFilter::Incoming, CallFilter::Outgoing, CallFilter::Missed]
                .iter()
                .map(|f| log.list(*f).len())
                .sum();
            prop_assert_eq!(total, log.list(CallFilter::All).len());
            for r in log.list(start) {
                prop_assert!(start.matches(r.status));
            }
        }
    }
}
