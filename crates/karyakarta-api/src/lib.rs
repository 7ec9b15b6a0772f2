//! HTTP surface of the karyakarta dashboard. Handlers validate input, call
//! the store, and hand back the created or updated record.

pub mod dashboard;
pub mod error;
pub mod events;
pub mod feedback;
pub mod filters;
pub mod members;
pub mod notices;
pub mod photos;
pub mod reports;
pub mod state;
pub mod validation;

use axum::{
    Router,
    routing::{get, post, put},
};

pub use state::{AppState, AppStateInner};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(dashboard::health))
        .route("/dashboard", get(dashboard::summary))
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route(
            "/members/{id}",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        .route("/members/{id}/verification", put(members::set_verification))
        // Events
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/{id}",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/events/{id}/status", put(events::update_status))
        .route("/events/{id}/attendees", post(events::register_attendee))
        .route(
            "/events/{id}/attendees/{attendee_id}",
            put(events::update_attendee).delete(events::remove_attendee),
        )
        // Notices
        .route("/notices", get(notices::list_notices).post(notices::create_notice))
        .route(
            "/notices/{id}",
            get(notices::get_notice)
                .patch(notices::update_notice)
                .delete(notices::delete_notice),
        )
        .route("/notices/{id}/pin", post(notices::toggle_pin))
        .route("/notices/{id}/read", post(notices::mark_read))
        .route("/notices/{id}/views", post(notices::record_view))
        // Feedback
        .route("/feedback", get(feedback::list_feedback).post(feedback::create_feedback))
        .route(
            "/feedback/{id}",
            get(feedback::get_feedback)
                .patch(feedback::update_feedback)
                .delete(feedback::delete_feedback),
        )
        .route("/feedback/{id}/status", put(feedback::update_status))
        .route("/feedback/{id}/response", put(feedback::respond))
        // Photos
        .route("/photos", get(photos::list_photos).post(photos::create_photo))
        .route(
            "/photos/{id}",
            get(photos::get_photo)
                .patch(photos::update_photo)
                .delete(photos::delete_photo),
        )
        // Reports
        .route("/reports", get(reports::list_reports).post(reports::create_report))
        .route(
            "/reports/{id}",
            get(reports::get_report)
                .patch(reports::update_report)
                .delete(reports::delete_report),
        )
        .route("/reports/{id}/downloads", post(reports::record_download))
        .with_state(state)
}
