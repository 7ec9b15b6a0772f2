use karyakarta_types::api::{MemberPatch, NewMember};
use karyakarta_types::models::Member;
use tracing::debug;
use uuid::Uuid;

use crate::Store;
use crate::collection::{Record, Searchable};

impl Record for Member {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Member {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.phone,
            &self.constituency,
            &self.district,
            &self.division,
            &self.designation,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }
}

fn apply_patch(member: &mut Member, patch: MemberPatch) {
    if let Some(name) = patch.name {
        member.name = name;
    }
    if let Some(phone) = patch.phone {
        member.phone = phone;
    }
    if let Some(constituency) = patch.constituency {
        member.constituency = constituency;
    }
    if let Some(district) = patch.district {
        member.district = district;
    }
    if let Some(division) = patch.division {
        member.division = division;
    }
    if let Some(designation) = patch.designation {
        member.designation = designation;
    }
    if let Some(achievements) = patch.achievements {
        member.achievements = achievements;
    }
    if let Some(social_media) = patch.social_media {
        member.social_media = social_media;
    }
    if let Some(membership_date) = patch.membership_date {
        member.membership_date = membership_date;
    }
    if patch.profile_image.is_some() {
        member.profile_image = patch.profile_image;
    }
    if let Some(contact) = patch.contact {
        member.contact = contact;
    }
}

impl Store {
    // -- Members --

    pub fn create_member(&self, new: NewMember) -> Member {
        let member = Member {
            id: Uuid::new_v4(),
            name: new.name,
            phone: new.phone,
            constituency: new.constituency,
            district: new.district,
            division: new.division,
            designation: new.designation,
            achievements: new.achievements,
            social_media: new.social_media,
            verified: false,
            membership_date: new.membership_date,
            profile_image: new.profile_image,
            contact: new.contact,
        };
        debug!(member_id = %member.id, "Member created");
        self.members.insert(member)
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.members.all()
    }

    pub fn get_member(&self, id: Uuid) -> Option<Member> {
        self.members.get(id)
    }

    pub fn update_member(&self, id: Uuid, patch: MemberPatch) -> Option<Member> {
        let updated = self.members.update(id, |member| apply_patch(member, patch));
        if updated.is_some() {
            debug!(member_id = %id, "Member updated");
        }
        updated
    }

    pub fn delete_member(&self, id: Uuid) -> bool {
        let removed = self.members.remove(id);
        if removed {
            debug!(member_id = %id, "Member deleted");
        }
        removed
    }

    pub fn search_members(&self, query: &str) -> Vec<Member> {
        self.members.search(query)
    }

    pub fn filter_members_by_district(&self, district: &str) -> Vec<Member> {
        self.members.filter(|m| m.district == district)
    }

    pub fn filter_members_by_constituency(&self, constituency: &str) -> Vec<Member> {
        self.members.filter(|m| m.constituency == constituency)
    }

    pub fn filter_members_by_verified(&self, verified: bool) -> Vec<Member> {
        self.members.filter(|m| m.verified == verified)
    }

    pub fn set_member_verified(&self, id: Uuid, verified: bool) -> Option<Member> {
        self.members.update(id, |member| member.verified = verified)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use karyakarta_types::models::{ContactInfo, SocialHandles};

    use super::*;
    use crate::test_support::empty_store;

    fn new_member(name: &str, district: &str) -> NewMember {
        NewMember {
            name: name.to_string(),
            phone: "9822012345".to_string(),
            constituency: "कोथरूड".to_string(),
            district: district.to_string(),
            division: "पुणे विभाग".to_string(),
            designation: "बूथ प्रमुख".to_string(),
            achievements: String::new(),
            social_media: SocialHandles {
                twitter: Some("@karyakarta".to_string()),
                ..SocialHandles::default()
            },
            membership_date: NaiveDate::from_ymd_opt(2020, 1, 26).unwrap(),
            profile_image: None,
            contact: ContactInfo::default(),
        }
    }

    #[test]
    fn created_member_is_unverified_and_readable() {
        let (store, _) = empty_store();
        let created = store.create_member(new_member("Rajesh Patil", "पुणे"));
        assert!(!created.verified);
        assert_eq!(store.get_member(created.id), Some(created));
    }

    #[test]
    fn identities_are_unique() {
        let (store, _) = empty_store();
        let a = store.create_member(new_member("A", "पुणे"));
        let b = store.create_member(new_member("A", "पुणे"));
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_members().len(), 2);
    }

    #[test]
    fn update_changes_only_the_patched_field() {
        let (store, _) = empty_store();
        let created = store.create_member(new_member("Rajesh Patil", "पुणे"));
        let patch = MemberPatch {
            designation: Some("शहर अध्यक्ष".to_string()),
            ..MemberPatch::default()
        };

        let updated = store.update_member(created.id, patch).unwrap();
        assert_eq!(updated.designation, "शहर अध्यक्ष");
        assert_eq!(
            Member {
                designation: created.designation.clone(),
                ..updated
            },
            created
        );
    }

    #[test]
    fn missing_member_reports_not_found() {
        let (store, _) = empty_store();
        let id = Uuid::new_v4();
        assert_eq!(store.get_member(id), None);
        assert_eq!(store.update_member(id, MemberPatch::default()), None);
        assert!(!store.delete_member(id));
        assert_eq!(store.set_member_verified(id, true), None);
    }

    #[test]
    fn delete_then_read_is_not_found() {
        let (store, _) = empty_store();
        let created = store.create_member(new_member("Rajesh Patil", "पुणे"));
        assert!(store.delete_member(created.id));
        assert_eq!(store.get_member(created.id), None);
        assert!(!store.delete_member(created.id));
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let (store, _) = empty_store();
        store.create_member(new_member("Rajesh Patil", "पुणे"));
        store.create_member(new_member("Sunita Jadhav", "सातारा"));

        let upper = store.search_members("RAJESH");
        assert_eq!(upper, store.search_members("rajesh"));
        assert_eq!(upper.len(), 1);
        assert_eq!(store.search_members("सातारा").len(), 1);
        assert_eq!(store.search_members("").len(), 2);
    }

    #[test]
    fn filters_and_verification() {
        let (store, _) = empty_store();
        let pune = store.create_member(new_member("Rajesh Patil", "पुणे"));
        store.create_member(new_member("Sunita Jadhav", "सातारा"));

        assert_eq!(store.filter_members_by_district("पुणे").len(), 1);
        assert!(store.filter_members_by_district("नाशिक").is_empty());
        assert_eq!(store.filter_members_by_constituency("कोथरूड").len(), 2);

        let verified = store.set_member_verified(pune.id, true).unwrap();
        assert!(verified.verified);
        assert_eq!(store.filter_members_by_verified(true), vec![verified]);
        assert_eq!(store.filter_members_by_verified(false).len(), 1);
    }
}
