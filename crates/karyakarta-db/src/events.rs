use chrono::{DateTime, Utc};
use karyakarta_types::api::{EventPatch, NewEvent};
use karyakarta_types::models::{AttendeeStatus, Event, EventAttendee, EventStatus, EventType};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::Store;
use crate::collection::{Record, Searchable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("event {0} not found")]
    EventNotFound(Uuid),
    #[error("event {0} is not open for registration")]
    EventClosed(Uuid),
    #[error("event {0} is at capacity")]
    EventFull(Uuid),
    #[error("member {member_id} is already registered for event {event_id}")]
    AlreadyRegistered { event_id: Uuid, member_id: Uuid },
}

/// Why a generic event update was refused. Nothing is written on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventUpdateError {
    #[error("event {0} not found")]
    NotFound(Uuid),
    #[error("event cannot end before it starts")]
    EndsBeforeStart,
    #[error("online and hybrid events need a meeting link")]
    MissingMeetingLink,
    #[error("capacity {capacity} is below the {registered} registered attendees")]
    CapacityBelowAttendance { capacity: u32, registered: u32 },
}

impl Record for Event {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.description,
            &self.venue,
            &self.category,
            &self.organizer,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }
}

fn apply_patch(event: &mut Event, patch: EventPatch) {
    if let Some(title) = patch.title {
        event.title = title;
    }
    if let Some(description) = patch.description {
        event.description = description;
    }
    if let Some(event_type) = patch.event_type {
        event.event_type = event_type;
    }
    if let Some(venue) = patch.venue {
        event.venue = venue;
    }
    if let Some(start_at) = patch.start_at {
        event.start_at = start_at;
    }
    if let Some(end_at) = patch.end_at {
        event.end_at = end_at;
    }
    if let Some(capacity) = patch.capacity {
        event.capacity = capacity;
    }
    if patch.meeting_link.is_some() {
        event.meeting_link = patch.meeting_link;
    }
    if let Some(organizer) = patch.organizer {
        event.organizer = organizer;
    }
    if let Some(constituency) = patch.constituency {
        event.constituency = constituency;
    }
    if let Some(district) = patch.district {
        event.district = district;
    }
    if let Some(category) = patch.category {
        event.category = category;
    }
    if let Some(status) = patch.status {
        event.status = status;
    }
}

/// Rules that must hold for the merged record, whatever fields a patch touched.
fn check_event(event: &Event) -> Result<(), EventUpdateError> {
    if event.end_at < event.start_at {
        return Err(EventUpdateError::EndsBeforeStart);
    }
    if event.event_type.needs_meeting_link() && event.meeting_link.is_none() {
        return Err(EventUpdateError::MissingMeetingLink);
    }
    if event.capacity < event.current_attendees {
        return Err(EventUpdateError::CapacityBelowAttendance {
            capacity: event.capacity,
            registered: event.current_attendees,
        });
    }
    Ok(())
}

impl Store {
    // -- Events --

    pub fn create_event(&self, new: NewEvent) -> Event {
        let event = Event {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            event_type: new.event_type,
            venue: new.venue,
            start_at: new.start_at,
            end_at: new.end_at,
            capacity: new.capacity,
            current_attendees: 0,
            meeting_link: new.meeting_link,
            organizer: new.organizer,
            constituency: new.constituency,
            district: new.district,
            category: new.category,
            status: EventStatus::default(),
            attendees: Vec::new(),
        };
        debug!(event_id = %event.id, "Event created");
        self.events.insert(event)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.events.all()
    }

    pub fn get_event(&self, id: Uuid) -> Option<Event> {
        self.events.get(id)
    }

    /// Applies `patch` and re-checks the merged event under the same lock.
    /// A patch that would leave the event inconsistent is refused whole.
    pub fn update_event(&self, id: Uuid, patch: EventPatch) -> Result<Event, EventUpdateError> {
        self.events
            .modify(id, |event| -> Result<Event, EventUpdateError> {
                let mut merged = event.clone();
                apply_patch(&mut merged, patch);
                check_event(&merged)?;
                *event = merged.clone();
                Ok(merged)
            })
            .unwrap_or(Err(EventUpdateError::NotFound(id)))
            .inspect(|_| debug!(event_id = %id, "Event updated"))
    }

    pub fn delete_event(&self, id: Uuid) -> bool {
        let removed = self.events.remove(id);
        if removed {
            debug!(event_id = %id, "Event deleted");
        }
        removed
    }

    pub fn search_events(&self, query: &str) -> Vec<Event> {
        self.events.search(query)
    }

    pub fn filter_events_by_status(&self, status: EventStatus) -> Vec<Event> {
        self.events.filter(|e| e.status == status)
    }

    pub fn filter_events_by_type(&self, event_type: EventType) -> Vec<Event> {
        self.events.filter(|e| e.event_type == event_type)
    }

    pub fn filter_events_by_category(&self, category: &str) -> Vec<Event> {
        self.events.filter(|e| e.category == category)
    }

    /// Events starting after `now` that have not been cancelled.
    pub fn upcoming_events(&self, now: DateTime<Utc>) -> Vec<Event> {
        self.events.filter(|e| is_upcoming(e, now))
    }

    pub fn update_event_status(&self, id: Uuid, status: EventStatus) -> Option<Event> {
        let updated = self.events.update(id, |event| event.status = status);
        if updated.is_some() {
            info!(event_id = %id, status = %status, "Event status changed");
        }
        updated
    }

    // -- Attendees --

    /// Registers `member_id` for the event as `invited` and bumps the
    /// attendee count. The capacity check and the increment happen under
    /// one lock, so concurrent registrations cannot overbook.
    pub fn register_attendee(
        &self,
        event_id: Uuid,
        member_id: Uuid,
    ) -> Result<EventAttendee, RegistrationError> {
        let registered_at = self.now();
        self.events
            .modify(event_id, |event| {
                if !event.accepts_registrations() {
                    return Err(RegistrationError::EventClosed(event_id));
                }
                if event.attendees.iter().any(|a| a.member_id == member_id) {
                    return Err(RegistrationError::AlreadyRegistered {
                        event_id,
                        member_id,
                    });
                }
                if event.is_full() {
                    return Err(RegistrationError::EventFull(event_id));
                }

                let attendee = EventAttendee {
                    id: Uuid::new_v4(),
                    member_id,
                    status: AttendeeStatus::Invited,
                    registered_at,
                };
                event.attendees.push(attendee.clone());
                event.current_attendees += 1;
                Ok(attendee)
            })
            .unwrap_or(Err(RegistrationError::EventNotFound(event_id)))
            .inspect(|attendee| {
                debug!(event_id = %event_id, attendee_id = %attendee.id, "Attendee registered");
            })
    }

    pub fn update_attendee_status(
        &self,
        event_id: Uuid,
        attendee_id: Uuid,
        status: AttendeeStatus,
    ) -> Option<EventAttendee> {
        self.events
            .modify(event_id, |event| {
                let attendee = event.attendees.iter_mut().find(|a| a.id == attendee_id)?;
                attendee.status = status;
                Some(attendee.clone())
            })
            .flatten()
    }

    /// Drops an attendee and releases their seat.
    pub fn remove_attendee(&self, event_id: Uuid, attendee_id: Uuid) -> bool {
        self.events
            .modify(event_id, |event| {
                let index = event.attendees.iter().position(|a| a.id == attendee_id)?;
                event.attendees.remove(index);
                event.current_attendees = event.current_attendees.saturating_sub(1);
                Some(())
            })
            .flatten()
            .is_some()
    }
}

pub(crate) fn is_upcoming(event: &Event, now: DateTime<Utc>) -> bool {
    event.start_at > now && event.status != EventStatus::Cancelled
}
