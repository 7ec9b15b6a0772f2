use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::models::{
    AttendeeStatus, ContactInfo, EventStatus, EventType, FeedbackCategory, FeedbackPriority,
    FeedbackStatus, NoticePriority, ReportCategory, ReportFileType, SocialHandles, SubmitterType,
    TargetAudience,
};

// Payloads accepted from the UI layer. `New*` types carry every caller-owned
// field of a record; identities, creation timestamps, counters and defaults
// are filled in by the store. `*Patch` types carry only mutable fields, so a
// generic update can never reach an identity, timestamp or counter.

// -- Field rules --

pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(ValidationError::new("phone")
        .with_message(Cow::from("phone must be 10-15 digits, optionally prefixed with +")))
}

fn validate_urls(urls: &[String]) -> Result<(), ValidationError> {
    if urls.iter().all(|url| url.validate_url()) {
        return Ok(());
    }
    Err(ValidationError::new("url").with_message(Cow::from("every attachment must be a URL")))
}

fn validate_schedule(
    start_at: Option<DateTime<Utc>>,
    end_at: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (start_at, end_at) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::new("schedule")
            .with_message(Cow::from("event cannot end before it starts"))),
        _ => Ok(()),
    }
}

fn validate_new_event(event: &NewEvent) -> Result<(), ValidationError> {
    validate_schedule(Some(event.start_at), Some(event.end_at))?;
    if event.event_type.needs_meeting_link() && event.meeting_link.is_none() {
        return Err(ValidationError::new("meeting_link")
            .with_message(Cow::from("online and hybrid events need a meeting link")));
    }
    Ok(())
}

fn validate_event_patch(patch: &EventPatch) -> Result<(), ValidationError> {
    validate_schedule(patch.start_at, patch.end_at)
}

// -- Members --

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(length(min = 1, max = 200))]
    pub constituency: String,
    #[validate(length(min = 1, max = 200))]
    pub district: String,
    #[validate(length(min = 1, max = 200))]
    pub division: String,
    #[validate(length(min = 1, max = 200))]
    pub designation: String,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub achievements: String,
    #[serde(default)]
    #[validate(nested)]
    pub social_media: SocialHandles,
    pub membership_date: NaiveDate,
    #[validate(length(min = 1, max = 500))]
    pub profile_image: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MemberPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub constituency: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub district: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub division: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub designation: Option<String>,
    #[validate(length(max = 5000))]
    pub achievements: Option<String>,
    #[validate(nested)]
    pub social_media: Option<SocialHandles>,
    pub membership_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 500))]
    pub profile_image: Option<String>,
    #[validate(nested)]
    pub contact: Option<ContactInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerificationRequest {
    pub verified: bool,
}

// -- Events --

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_new_event"))]
pub struct NewEvent {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[validate(length(min = 1, max = 300))]
    pub venue: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub capacity: u32,
    #[validate(url)]
    pub meeting_link: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub organizer: String,
    #[validate(length(min = 1, max = 200))]
    pub constituency: String,
    #[validate(length(min = 1, max = 200))]
    pub district: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_event_patch"))]
pub struct EventPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    #[validate(length(min = 1, max = 300))]
    pub venue: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    #[validate(range(min = 1))]
    pub capacity: Option<u32>,
    #[validate(url)]
    pub meeting_link: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub organizer: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub constituency: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub district: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    pub status: Option<EventStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventStatusRequest {
    pub status: EventStatus,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterAttendeeRequest {
    pub member_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttendeeStatusRequest {
    pub status: AttendeeStatus,
}

// -- Notices --

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewNotice {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    pub priority: NoticePriority,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(min = 1, max = 200))]
    pub author: String,
    pub target_audience: TargetAudience,
    #[validate(length(max = 200))]
    pub constituency: String,
    #[validate(length(max = 200))]
    pub district: String,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    #[validate(custom(function = "validate_urls"))]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NoticePatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub content: Option<String>,
    pub priority: Option<NoticePriority>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub author: Option<String>,
    pub target_audience: Option<TargetAudience>,
    #[validate(length(max = 200))]
    pub constituency: Option<String>,
    #[validate(length(max = 200))]
    pub district: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    #[validate(custom(function = "validate_urls"))]
    pub attachments: Option<Vec<String>>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MarkReadRequest {
    #[validate(length(min = 1, max = 200))]
    pub reader: String,
}

// -- Feedback --

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFeedback {
    pub member_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub member_name: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    pub category: FeedbackCategory,
    pub priority: Option<FeedbackPriority>,
    pub submitter_type: Option<SubmitterType>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub constituency: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub district: Option<String>,
    pub event_id: Option<Uuid>,
    #[validate(custom(function = "validate_urls"))]
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FeedbackPatch {
    #[validate(length(min = 1, max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub message: Option<String>,
    pub category: Option<FeedbackCategory>,
    pub status: Option<FeedbackStatus>,
    pub priority: Option<FeedbackPriority>,
    pub submitter_type: Option<SubmitterType>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub constituency: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub district: Option<String>,
    pub event_id: Option<Uuid>,
    #[validate(custom(function = "validate_urls"))]
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedbackStatusRequest {
    pub status: FeedbackStatus,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct FeedbackResponseRequest {
    #[validate(length(min = 1, max = 5000))]
    pub response: String,
}

// -- Photos --

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEventPhoto {
    pub event_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub event_name: String,
    #[validate(url)]
    pub photo_url: String,
    #[validate(length(min = 1, max = 200))]
    pub uploaded_by: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventPhotoPatch {
    #[validate(length(min = 1, max = 200))]
    pub event_name: Option<String>,
    #[validate(url)]
    pub photo_url: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

// -- Reports --

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewReport {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: String,
    pub category: ReportCategory,
    pub file_type: ReportFileType,
    #[validate(length(min = 1, max = 200))]
    pub author: String,
    #[validate(length(min = 1, max = 200))]
    pub department: String,
    #[validate(length(min = 1, max = 32))]
    pub file_size: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReportPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub category: Option<ReportCategory>,
    pub file_type: Option<ReportFileType>,
    #[validate(length(min = 1, max = 200))]
    pub author: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub department: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub file_size: Option<String>,
    pub is_public: Option<bool>,
    pub tags: Option<Vec<String>>,
    #[validate(length(min = 1, max = 255))]
    pub file_name: Option<String>,
}

// -- Responses --

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
