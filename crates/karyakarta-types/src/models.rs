use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- Labels --

labeled_enum! {
    pub enum EventType {
        Online => "online",
        Offline => "offline",
        Hybrid => "hybrid",
    }
}

impl EventType {
    /// Online and hybrid events are expected to carry a meeting link.
    pub fn needs_meeting_link(self) -> bool {
        matches!(self, Self::Online | Self::Hybrid)
    }
}

labeled_enum! {
    #[derive(Default)]
    pub enum EventStatus {
        #[default]
        Draft => "draft",
        Published => "published",
        Cancelled => "cancelled",
        Completed => "completed",
    }
}

labeled_enum! {
    pub enum AttendeeStatus {
        Invited => "invited",
        Confirmed => "confirmed",
        Attended => "attended",
        Absent => "absent",
    }
}

labeled_enum! {
    pub enum NoticePriority {
        Urgent => "urgent",
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

labeled_enum! {
    pub enum TargetAudience {
        All => "all",
        Leadership => "leadership",
        Constituency => "constituency",
    }
}

labeled_enum! {
    pub enum FeedbackCategory {
        Suggestion => "suggestion",
        Complaint => "complaint",
        Appreciation => "appreciation",
        MeetingRequest => "meeting_request",
        EventFeedback => "event_feedback",
        TechnicalIssue => "technical_issue",
    }
}

labeled_enum! {
    #[derive(Default)]
    pub enum FeedbackStatus {
        #[default]
        Pending => "pending",
        InProgress => "in_progress",
        Resolved => "resolved",
    }
}

labeled_enum! {
    pub enum FeedbackPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

labeled_enum! {
    pub enum SubmitterType {
        Member => "member",
        Leader => "leader",
    }
}

labeled_enum! {
    pub enum ReportCategory {
        Monthly => "monthly",
        Quarterly => "quarterly",
        Annual => "annual",
        Event => "event",
        Financial => "financial",
        Performance => "performance",
    }
}

labeled_enum! {
    pub enum ReportFileType {
        Pdf => "pdf",
        Excel => "excel",
        Word => "word",
    }
}

// -- Members --

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, validator::Validate)]
pub struct SocialHandles {
    #[validate(length(min = 1, max = 100))]
    pub facebook: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub twitter: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub instagram: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub whatsapp: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, validator::Validate)]
pub struct ContactInfo {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address: Option<String>,
    #[validate(custom(function = "crate::api::validate_phone"))]
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub constituency: String,
    pub district: String,
    pub division: String,
    pub designation: String,
    pub achievements: String,
    pub social_media: SocialHandles,
    pub verified: bool,
    pub membership_date: NaiveDate,
    pub profile_image: Option<String>,
    pub contact: ContactInfo,
}

// -- Events --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttendee {
    pub id: Uuid,
    pub member_id: Uuid,
    pub status: AttendeeStatus,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub venue: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub capacity: u32,
    pub current_attendees: u32,
    pub meeting_link: Option<String>,
    pub organizer: String,
    pub constituency: String,
    pub district: String,
    pub category: String,
    pub status: EventStatus,
    pub attendees: Vec<EventAttendee>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.current_attendees >= self.capacity
    }

    /// Cancelled and completed events no longer take registrations.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self.status, EventStatus::Draft | EventStatus::Published)
    }
}

// -- Notices --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: NoticePriority,
    pub category: String,
    pub author: String,
    pub target_audience: TargetAudience,
    pub constituency: String,
    pub district: String,
    pub expires_at: DateTime<Utc>,
    pub attachments: Vec<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub read_by: BTreeSet<String>,
    pub view_count: u64,
}

impl Notice {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

// -- Feedback --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub member_id: Uuid,
    pub member_name: String,
    pub subject: String,
    pub message: String,
    pub category: FeedbackCategory,
    pub status: FeedbackStatus,
    pub priority: Option<FeedbackPriority>,
    pub submitter_type: Option<SubmitterType>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub constituency: Option<String>,
    pub district: Option<String>,
    pub event_id: Option<Uuid>,
    pub attachments: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
}

// -- Photos --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPhoto {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_name: String,
    pub photo_url: String,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    pub description: String,
    pub tags: Vec<String>,
}

// -- Reports --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub file_type: ReportFileType,
    pub author: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub file_size: String,
    pub download_count: u64,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub file_name: String,
}

// -- Dashboard --

/// Headline counts shown on the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_members: usize,
    pub verified_members: usize,
    pub upcoming_events: usize,
    pub active_notices: usize,
    pub pinned_notices: usize,
    pub pending_feedback: usize,
    pub total_reports: usize,
    pub total_downloads: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip_through_str() {
        for category in FeedbackCategory::ALL {
            assert_eq!(category.as_str().parse::<FeedbackCategory>(), Ok(*category));
        }
        assert_eq!(FeedbackCategory::MeetingRequest.to_string(), "meeting_request");
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "weekly".parse::<ReportCategory>().unwrap_err();
        assert_eq!(err.kind, "ReportCategory");
        assert_eq!(err.to_string(), "unknown ReportCategory 'weekly'");
    }

    #[test]
    fn labels_match_wire_format() {
        let json = serde_json::to_string(&FeedbackStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: EventType = serde_json::from_str("\"hybrid\"").unwrap();
        assert_eq!(parsed, EventType::Hybrid);
    }

    #[test]
    fn defaults_for_new_records() {
        assert_eq!(EventStatus::default(), EventStatus::Draft);
        assert_eq!(FeedbackStatus::default(), FeedbackStatus::Pending);
    }
}
