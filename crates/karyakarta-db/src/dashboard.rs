use karyakarta_types::models::{DashboardSummary, FeedbackStatus};

use crate::Store;
use crate::events::is_upcoming;

impl Store {
    /// Headline counts as of the store clock.
    pub fn dashboard(&self) -> DashboardSummary {
        let now = self.now();
        DashboardSummary {
            total_members: self.members.len(),
            verified_members: self.members.count(|m| m.verified),
            upcoming_events: self.events.count(|e| is_upcoming(e, now)),
            active_notices: self.notices.count(|n| n.is_active(now)),
            pinned_notices: self.notices.count(|n| n.pinned),
            pending_feedback: self.feedback.count(|f| f.status == FeedbackStatus::Pending),
            total_reports: self.reports.len(),
            total_downloads: self.reports.all().iter().map(|r| r.download_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use karyakarta_types::models::DashboardSummary;

    use crate::test_support::at;
    use crate::{FixedClock, Store};

    #[test]
    fn empty_store_has_zero_summary() {
        let store = Store::empty(Arc::new(FixedClock::new(at(2025, 1, 1, 0))));
        assert_eq!(store.dashboard(), DashboardSummary::default());
    }

    #[test]
    fn seeded_summary_reflects_fixtures() {
        let store = Store::seeded(Arc::new(FixedClock::new(at(2025, 1, 15, 9))));
        let summary = store.dashboard();

        assert_eq!(summary.total_members, store.list_members().len());
        assert_eq!(summary.verified_members, store.filter_members_by_verified(true).len());
        assert_eq!(summary.upcoming_events, store.upcoming_events(store.now()).len());
        assert_eq!(summary.active_notices, store.active_notices(store.now()).len());
        assert_eq!(summary.total_reports, store.list_reports().len());
        assert_eq!(
            summary.total_downloads,
            store.list_reports().iter().map(|r| r.download_count).sum::<u64>()
        );
        assert!(summary.upcoming_events > 0);
        assert!(summary.pending_feedback > 0);
    }
}
