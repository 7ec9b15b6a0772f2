//! In-memory entity store for the karyakarta dashboard.
//!
//! One [`Collection`] per entity type, owned by a single [`Store`] that is
//! built once at start-up and shared by reference. Nothing here performs I/O;
//! the relational shape the data is meant to move to lives in [`schema`].

pub mod clock;
pub mod collection;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod fixtures;
pub mod members;
pub mod notices;
pub mod photos;
pub mod reports;
pub mod schema;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use karyakarta_types::models::{Event, EventPhoto, Feedback, Member, Notice, Report};
use tracing::info;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::{Collection, Record, Searchable};
pub use events::{EventUpdateError, RegistrationError};

pub struct Store {
    members: Collection<Member>,
    events: Collection<Event>,
    notices: Collection<Notice>,
    feedback: Collection<Feedback>,
    photos: Collection<EventPhoto>,
    reports: Collection<Report>,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// A store with no records.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self {
            members: Collection::new(Vec::new()),
            events: Collection::new(Vec::new()),
            notices: Collection::new(Vec::new()),
            feedback: Collection::new(Vec::new()),
            photos: Collection::new(Vec::new()),
            reports: Collection::new(Vec::new()),
            clock,
        }
    }

    /// A store populated with the deterministic fixture records.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let store = Self {
            members: Collection::new(fixtures::members()),
            events: Collection::new(fixtures::events()),
            notices: Collection::new(fixtures::notices()),
            feedback: Collection::new(fixtures::feedback()),
            photos: Collection::new(fixtures::photos()),
            reports: Collection::new(fixtures::reports()),
            clock,
        };

        info!(
            members = store.members.len(),
            events = store.events.len(),
            notices = store.notices.len(),
            feedback = store.feedback.len(),
            photos = store.photos.len(),
            reports = store.reports.len(),
            "Store seeded with fixtures"
        );
        store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::{FixedClock, Store};

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    /// An empty store whose clock reads 2025-01-15 09:00 UTC until moved.
    pub fn empty_store() -> (Store, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(at(2025, 1, 15, 9)));
        (Store::empty(clock.clone()), clock)
    }
}
