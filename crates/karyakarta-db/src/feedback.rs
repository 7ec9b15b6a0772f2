use karyakarta_types::api::{FeedbackPatch, NewFeedback};
use karyakarta_types::models::{Feedback, FeedbackCategory, FeedbackStatus};
use tracing::{debug, info};
use uuid::Uuid;

use crate::Store;
use crate::collection::{Record, Searchable};

impl Record for Feedback {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Feedback {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.subject, &self.message, &self.member_name]
            .into_iter()
            .map(String::as_str)
            .collect()
    }
}

fn apply_patch(feedback: &mut Feedback, patch: FeedbackPatch) {
    if let Some(subject) = patch.subject {
        feedback.subject = subject;
    }
    if let Some(message) = patch.message {
        feedback.message = message;
    }
    if let Some(category) = patch.category {
        feedback.category = category;
    }
    if let Some(status) = patch.status {
        feedback.status = status;
    }
    if patch.priority.is_some() {
        feedback.priority = patch.priority;
    }
    if patch.submitter_type.is_some() {
        feedback.submitter_type = patch.submitter_type;
    }
    if patch.phone.is_some() {
        feedback.phone = patch.phone;
    }
    if patch.email.is_some() {
        feedback.email = patch.email;
    }
    if patch.constituency.is_some() {
        feedback.constituency = patch.constituency;
    }
    if patch.district.is_some() {
        feedback.district = patch.district;
    }
    if patch.event_id.is_some() {
        feedback.event_id = patch.event_id;
    }
    if patch.attachments.is_some() {
        feedback.attachments = patch.attachments;
    }
}

impl Store {
    // -- Feedback --

    pub fn create_feedback(&self, new: NewFeedback) -> Feedback {
        let feedback = Feedback {
            id: Uuid::new_v4(),
            member_id: new.member_id,
            member_name: new.member_name,
            subject: new.subject,
            message: new.message,
            category: new.category,
            status: FeedbackStatus::default(),
            priority: new.priority,
            submitter_type: new.submitter_type,
            phone: new.phone,
            email: new.email,
            constituency: new.constituency,
            district: new.district,
            event_id: new.event_id,
            attachments: new.attachments,
            created_at: self.now(),
            response: None,
            responded_at: None,
        };
        debug!(feedback_id = %feedback.id, category = %feedback.category, "Feedback created");
        self.feedback.insert(feedback)
    }

    pub fn list_feedback(&self) -> Vec<Feedback> {
        self.feedback.all()
    }

    pub fn get_feedback(&self, id: Uuid) -> Option<Feedback> {
        self.feedback.get(id)
    }

    pub fn update_feedback(&self, id: Uuid, patch: FeedbackPatch) -> Option<Feedback> {
        let updated = self.feedback.update(id, |feedback| apply_patch(feedback, patch));
        if updated.is_some() {
            debug!(feedback_id = %id, "Feedback updated");
        }
        updated
    }

    pub fn delete_feedback(&self, id: Uuid) -> bool {
        let removed = self.feedback.remove(id);
        if removed {
            debug!(feedback_id = %id, "Feedback deleted");
        }
        removed
    }

    pub fn search_feedback(&self, query: &str) -> Vec<Feedback> {
        self.feedback.search(query)
    }

    pub fn filter_feedback_by_status(&self, status: FeedbackStatus) -> Vec<Feedback> {
        self.feedback.filter(|f| f.status == status)
    }

    pub fn filter_feedback_by_category(&self, category: FeedbackCategory) -> Vec<Feedback> {
        self.feedback.filter(|f| f.category == category)
    }

    pub fn update_feedback_status(&self, id: Uuid, status: FeedbackStatus) -> Option<Feedback> {
        let updated = self.feedback.update(id, |feedback| feedback.status = status);
        if updated.is_some() {
            info!(feedback_id = %id, status = %status, "Feedback status changed");
        }
        updated
    }

    /// Records a reply; the response timestamp comes from the store clock.
    pub fn respond_to_feedback(&self, id: Uuid, response: String) -> Option<Feedback> {
        let responded_at = self.now();
        self.feedback.update(id, |feedback| {
            feedback.response = Some(response);
            feedback.responded_at = Some(responded_at);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Clock;
    use crate::test_support::empty_store;

    fn new_feedback(subject: &str, category: FeedbackCategory) -> NewFeedback {
        NewFeedback {
            member_id: Uuid::new_v4(),
            member_name: "Rajesh Patil".to_string(),
            subject: subject.to_string(),
            message: "ॲप उघडत नाही".to_string(),
            category,
            priority: None,
            submitter_type: None,
            phone: Some("9822012345".to_string()),
            email: None,
            constituency: None,
            district: Some("पुणे".to_string()),
            event_id: None,
            attachments: None,
        }
    }

    #[test]
    fn status_update_leaves_other_fields_alone() {
        let (store, _) = empty_store();
        let created = store.create_feedback(new_feedback("लॉगिन समस्या", FeedbackCategory::TechnicalIssue));
        assert_eq!(created.status, FeedbackStatus::Pending);

        let resolved = store
            .update_feedback_status(created.id, FeedbackStatus::Resolved)
            .unwrap();
        let stored = store.get_feedback(created.id).unwrap();
        assert_eq!(stored, resolved);
        assert_eq!(stored.status, FeedbackStatus::Resolved);
        assert_eq!(
            Feedback {
                status: FeedbackStatus::Pending,
                ..stored
            },
            created
        );
    }

    #[test]
    fn respond_stamps_time_without_changing_status() {
        let (store, clock) = empty_store();
        let created = store.create_feedback(new_feedback("सूचना", FeedbackCategory::Suggestion));
        clock.advance(chrono::Duration::hours(3));

        let answered = store
            .respond_to_feedback(created.id, "धन्यवाद, विचार करू".to_string())
            .unwrap();
        assert_eq!(answered.response.as_deref(), Some("धन्यवाद, विचार करू"));
        assert_eq!(answered.responded_at, Some(clock.now()));
        assert_eq!(answered.status, FeedbackStatus::Pending);
        assert_eq!(answered.created_at, created.created_at);
    }

    #[test]
    fn filters_and_search() {
        let (store, _) = empty_store();
        store.create_feedback(new_feedback("लॉगिन समस्या", FeedbackCategory::TechnicalIssue));
        let praise = store.create_feedback(new_feedback("उत्तम मेळावा", FeedbackCategory::Appreciation));
        store.update_feedback_status(praise.id, FeedbackStatus::InProgress);

        assert_eq!(store.filter_feedback_by_status(FeedbackStatus::Pending).len(), 1);
        assert_eq!(store.filter_feedback_by_status(FeedbackStatus::InProgress).len(), 1);
        assert_eq!(store.filter_feedback_by_category(FeedbackCategory::Complaint).len(), 0);
        assert_eq!(store.search_feedback("RAJESH").len(), 2);
        assert_eq!(store.search_feedback("मेळावा").len(), 1);
    }

    #[test]
    fn missing_feedback_is_not_found() {
        let (store, _) = empty_store();
        let id = Uuid::new_v4();
        assert!(store.update_feedback_status(id, FeedbackStatus::Resolved).is_none());
        assert!(store.respond_to_feedback(id, "ok".to_string()).is_none());
        assert!(store.update_feedback(id, FeedbackPatch::default()).is_none());
        assert!(!store.delete_feedback(id));
    }
}
