use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use karyakarta_types::api::{NewNotice, NoticePatch};
use karyakarta_types::models::{Notice, NoticePriority, TargetAudience};
use tracing::debug;
use uuid::Uuid;

use crate::Store;
use crate::collection::{Record, Searchable};

impl Record for Notice {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Notice {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.content, &self.category, &self.author]
            .into_iter()
            .map(String::as_str)
            .collect()
    }
}

fn apply_patch(notice: &mut Notice, patch: NoticePatch) {
    if let Some(title) = patch.title {
        notice.title = title;
    }
    if let Some(content) = patch.content {
        notice.content = content;
    }
    if let Some(priority) = patch.priority {
        notice.priority = priority;
    }
    if let Some(category) = patch.category {
        notice.category = category;
    }
    if let Some(author) = patch.author {
        notice.author = author;
    }
    if let Some(target_audience) = patch.target_audience {
        notice.target_audience = target_audience;
    }
    if let Some(constituency) = patch.constituency {
        notice.constituency = constituency;
    }
    if let Some(district) = patch.district {
        notice.district = district;
    }
    if let Some(expires_at) = patch.expires_at {
        notice.expires_at = expires_at;
    }
    if let Some(attachments) = patch.attachments {
        notice.attachments = attachments;
    }
    if let Some(pinned) = patch.pinned {
        notice.pinned = pinned;
    }
}

impl Store {
    // -- Notices --

    pub fn create_notice(&self, new: NewNotice) -> Notice {
        let notice = Notice {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            priority: new.priority,
            category: new.category,
            author: new.author,
            target_audience: new.target_audience,
            constituency: new.constituency,
            district: new.district,
            expires_at: new.expires_at,
            attachments: new.attachments,
            pinned: false,
            created_at: self.now(),
            read_by: BTreeSet::new(),
            view_count: 0,
        };
        debug!(notice_id = %notice.id, "Notice created");
        self.notices.insert(notice)
    }

    pub fn list_notices(&self) -> Vec<Notice> {
        self.notices.all()
    }

    pub fn get_notice(&self, id: Uuid) -> Option<Notice> {
        self.notices.get(id)
    }

    pub fn update_notice(&self, id: Uuid, patch: NoticePatch) -> Option<Notice> {
        let updated = self.notices.update(id, |notice| apply_patch(notice, patch));
        if updated.is_some() {
            debug!(notice_id = %id, "Notice updated");
        }
        updated
    }

    pub fn delete_notice(&self, id: Uuid) -> bool {
        let removed = self.notices.remove(id);
        if removed {
            debug!(notice_id = %id, "Notice deleted");
        }
        removed
    }

    pub fn search_notices(&self, query: &str) -> Vec<Notice> {
        self.notices.search(query)
    }

    pub fn filter_notices_by_priority(&self, priority: NoticePriority) -> Vec<Notice> {
        self.notices.filter(|n| n.priority == priority)
    }

    pub fn filter_notices_by_category(&self, category: &str) -> Vec<Notice> {
        self.notices.filter(|n| n.category == category)
    }

    pub fn filter_notices_by_audience(&self, audience: TargetAudience) -> Vec<Notice> {
        self.notices.filter(|n| n.target_audience == audience)
    }

    /// Notices that have not expired at `now`.
    pub fn active_notices(&self, now: DateTime<Utc>) -> Vec<Notice> {
        self.notices.filter(|n| n.is_active(now))
    }

    pub fn toggle_notice_pin(&self, id: Uuid) -> Option<Notice> {
        let updated = self.notices.update(id, |notice| notice.pinned = !notice.pinned);
        if let Some(notice) = &updated {
            debug!(notice_id = %id, pinned = notice.pinned, "Notice pin toggled");
        }
        updated
    }

    /// Adds `reader` to the notice's read set. Reading twice is a no-op.
    pub fn mark_notice_read(&self, id: Uuid, reader: &str) -> Option<Notice> {
        self.notices.update(id, |notice| {
            notice.read_by.insert(reader.to_string());
        })
    }

    pub fn record_notice_view(&self, id: Uuid) -> Option<Notice> {
        self.notices.update(id, |notice| notice.view_count += 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Clock;
    use crate::test_support::{at, empty_store};

    fn new_notice(title: &str, priority: NoticePriority, expires_at: DateTime<Utc>) -> NewNotice {
        NewNotice {
            title: title.to_string(),
            content: "सर्व पदाधिकाऱ्यांनी उपस्थित राहावे".to_string(),
            priority,
            category: "बैठक".to_string(),
            author: "प्रदेश कार्यालय".to_string(),
            target_audience: TargetAudience::Leadership,
            constituency: String::new(),
            district: "पुणे".to_string(),
            expires_at,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn created_notice_gets_store_defaults() {
        let (store, clock) = empty_store();
        let notice = store.create_notice(new_notice("तातडीची बैठक", NoticePriority::Urgent, at(2025, 2, 1, 0)));
        assert!(!notice.pinned);
        assert_eq!(notice.created_at, clock.now());
        assert!(notice.read_by.is_empty());
        assert_eq!(notice.view_count, 0);
        assert_eq!(store.get_notice(notice.id), Some(notice));
    }

    #[test]
    fn toggling_twice_restores_pin() {
        let (store, _) = empty_store();
        let notice = store.create_notice(new_notice("सूचना", NoticePriority::Low, at(2025, 2, 1, 0)));

        assert!(store.toggle_notice_pin(notice.id).unwrap().pinned);
        assert!(!store.toggle_notice_pin(notice.id).unwrap().pinned);
        assert_eq!(store.get_notice(notice.id), Some(notice));
        assert!(store.toggle_notice_pin(Uuid::new_v4()).is_none());
    }

    #[test]
    fn created_at_survives_updates() {
        let (store, clock) = empty_store();
        let notice = store.create_notice(new_notice("सूचना", NoticePriority::Low, at(2025, 2, 1, 0)));
        clock.advance(chrono::Duration::days(1));

        let updated = store
            .update_notice(notice.id, NoticePatch {
                content: Some("सुधारित मजकूर".to_string()),
                ..NoticePatch::default()
            })
            .unwrap();
        assert_eq!(updated.created_at, notice.created_at);
        assert_eq!(updated.id, notice.id);
    }

    #[test]
    fn reads_and_views() {
        let (store, _) = empty_store();
        let notice = store.create_notice(new_notice("सूचना", NoticePriority::Medium, at(2025, 2, 1, 0)));

        store.mark_notice_read(notice.id, "member-1");
        let read = store.mark_notice_read(notice.id, "member-1").unwrap();
        assert_eq!(read.read_by.len(), 1);

        store.record_notice_view(notice.id);
        let viewed = store.record_notice_view(notice.id).unwrap();
        assert_eq!(viewed.view_count, 2);
        assert!(store.mark_notice_read(Uuid::new_v4(), "member-1").is_none());
    }

    #[test]
    fn filters_and_expiry() {
        let (store, clock) = empty_store();
        store.create_notice(new_notice("जुनी सूचना", NoticePriority::High, at(2025, 1, 10, 0)));
        let live = store.create_notice(new_notice("नवी सूचना", NoticePriority::Urgent, at(2025, 3, 1, 0)));

        assert_eq!(store.active_notices(clock.now()), vec![live.clone()]);
        assert_eq!(store.filter_notices_by_priority(NoticePriority::Urgent), vec![live]);
        assert_eq!(store.filter_notices_by_category("बैठक").len(), 2);
        assert_eq!(store.filter_notices_by_audience(TargetAudience::All).len(), 0);
        assert_eq!(store.search_notices("नवी").len(), 1);
    }
}
