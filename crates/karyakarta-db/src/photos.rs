use karyakarta_types::api::{EventPhotoPatch, NewEventPhoto};
use karyakarta_types::models::EventPhoto;
use tracing::debug;
use uuid::Uuid;

use crate::Store;
use crate::collection::{Record, Searchable};

impl Record for EventPhoto {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for EventPhoto {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.event_name.as_str(),
            self.description.as_str(),
            self.uploaded_by.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

fn apply_patch(photo: &mut EventPhoto, patch: EventPhotoPatch) {
    if let Some(event_name) = patch.event_name {
        photo.event_name = event_name;
    }
    if let Some(photo_url) = patch.photo_url {
        photo.photo_url = photo_url;
    }
    if let Some(description) = patch.description {
        photo.description = description;
    }
    if let Some(tags) = patch.tags {
        photo.tags = tags;
    }
}

impl Store {
    // -- Photos --

    pub fn create_photo(&self, new: NewEventPhoto) -> EventPhoto {
        let photo = EventPhoto {
            id: Uuid::new_v4(),
            event_id: new.event_id,
            event_name: new.event_name,
            photo_url: new.photo_url,
            uploaded_by: new.uploaded_by,
            uploaded_at: self.now(),
            description: new.description,
            tags: new.tags,
        };
        debug!(photo_id = %photo.id, event_id = %photo.event_id, "Photo added");
        self.photos.insert(photo)
    }

    pub fn list_photos(&self) -> Vec<EventPhoto> {
        self.photos.all()
    }

    pub fn get_photo(&self, id: Uuid) -> Option<EventPhoto> {
        self.photos.get(id)
    }

    pub fn update_photo(&self, id: Uuid, patch: EventPhotoPatch) -> Option<EventPhoto> {
        let updated = self.photos.update(id, |photo| apply_patch(photo, patch));
        if updated.is_some() {
            debug!(photo_id = %id, "Photo updated");
        }
        updated
    }

    pub fn delete_photo(&self, id: Uuid) -> bool {
        let removed = self.photos.remove(id);
        if removed {
            debug!(photo_id = %id, "Photo deleted");
        }
        removed
    }

    pub fn search_photos(&self, query: &str) -> Vec<EventPhoto> {
        self.photos.search(query)
    }

    pub fn filter_photos_by_event(&self, event_id: Uuid) -> Vec<EventPhoto> {
        self.photos.filter(|p| p.event_id == event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Clock;
    use crate::test_support::empty_store;

    fn new_photo(event_id: Uuid, tags: &[&str]) -> NewEventPhoto {
        NewEventPhoto {
            event_id,
            event_name: "जिल्हा मेळावा".to_string(),
            photo_url: "https://cdn.example.org/photos/1.jpg".to_string(),
            uploaded_by: "मीडिया सेल".to_string(),
            description: "मंचावरील मान्यवर".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn upload_time_comes_from_clock() {
        let (store, clock) = empty_store();
        let photo = store.create_photo(new_photo(Uuid::new_v4(), &[]));
        assert_eq!(photo.uploaded_at, clock.now());
        assert_eq!(store.get_photo(photo.id), Some(photo));
    }

    #[test]
    fn tags_are_searchable() {
        let (store, _) = empty_store();
        store.create_photo(new_photo(Uuid::new_v4(), &["Stage", "गर्दी"]));
        store.create_photo(new_photo(Uuid::new_v4(), &["volunteers"]));

        assert_eq!(store.search_photos("stage").len(), 1);
        assert_eq!(store.search_photos("गर्दी").len(), 1);
        assert_eq!(store.search_photos("मेळावा").len(), 2);
    }

    #[test]
    fn filter_by_event_and_update() {
        let (store, _) = empty_store();
        let event_id = Uuid::new_v4();
        let photo = store.create_photo(new_photo(event_id, &[]));
        store.create_photo(new_photo(Uuid::new_v4(), &[]));

        assert_eq!(store.filter_photos_by_event(event_id), vec![photo.clone()]);
        assert!(store.filter_photos_by_event(Uuid::new_v4()).is_empty());

        let updated = store
            .update_photo(photo.id, EventPhotoPatch {
                tags: Some(vec!["मंच".to_string()]),
                ..EventPhotoPatch::default()
            })
            .unwrap();
        assert_eq!(updated.tags, vec!["मंच".to_string()]);
        assert_eq!(updated.uploaded_at, photo.uploaded_at);
        assert!(store.delete_photo(photo.id));
        assert!(!store.delete_photo(photo.id));
    }
}
