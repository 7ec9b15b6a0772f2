use karyakarta_types::api::{NewReport, ReportPatch};
use karyakarta_types::models::{Report, ReportCategory};
use tracing::debug;
use uuid::Uuid;

use crate::Store;
use crate::collection::{Record, Searchable};

impl Record for Report {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.author.as_str(),
            self.department.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

fn apply_patch(report: &mut Report, patch: ReportPatch) {
    if let Some(title) = patch.title {
        report.title = title;
    }
    if let Some(description) = patch.description {
        report.description = description;
    }
    if let Some(category) = patch.category {
        report.category = category;
    }
    if let Some(file_type) = patch.file_type {
        report.file_type = file_type;
    }
    if let Some(author) = patch.author {
        report.author = author;
    }
    if let Some(department) = patch.department {
        report.department = department;
    }
    if let Some(file_size) = patch.file_size {
        report.file_size = file_size;
    }
    if let Some(is_public) = patch.is_public {
        report.is_public = is_public;
    }
    if let Some(tags) = patch.tags {
        report.tags = tags;
    }
    if let Some(file_name) = patch.file_name {
        report.file_name = file_name;
    }
}

impl Store {
    // -- Reports --

    pub fn create_report(&self, new: NewReport) -> Report {
        let report = Report {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            category: new.category,
            file_type: new.file_type,
            author: new.author,
            department: new.department,
            created_at: self.now(),
            file_size: new.file_size,
            download_count: 0,
            is_public: new.is_public,
            tags: new.tags,
            file_name: new.file_name,
        };
        debug!(report_id = %report.id, "Report created");
        self.reports.insert(report)
    }

    pub fn list_reports(&self) -> Vec<Report> {
        self.reports.all()
    }

    pub fn get_report(&self, id: Uuid) -> Option<Report> {
        self.reports.get(id)
    }

    pub fn update_report(&self, id: Uuid, patch: ReportPatch) -> Option<Report> {
        let updated = self.reports.update(id, |report| apply_patch(report, patch));
        if updated.is_some() {
            debug!(report_id = %id, "Report updated");
        }
        updated
    }

    pub fn delete_report(&self, id: Uuid) -> bool {
        let removed = self.reports.remove(id);
        if removed {
            debug!(report_id = %id, "Report deleted");
        }
        removed
    }

    pub fn search_reports(&self, query: &str) -> Vec<Report> {
        self.reports.search(query)
    }

    pub fn filter_reports_by_category(&self, category: ReportCategory) -> Vec<Report> {
        self.reports.filter(|r| r.category == category)
    }

    pub fn filter_reports_by_department(&self, department: &str) -> Vec<Report> {
        self.reports.filter(|r| r.department == department)
    }

    pub fn public_reports(&self) -> Vec<Report> {
        self.reports.filter(|r| r.is_public)
    }

    pub fn increment_report_downloads(&self, id: Uuid) -> Option<Report> {
        self.reports.update(id, |report| report.download_count += 1)
    }
}

#[cfg(test)]
mod tests {
    use karyakarta_types::models::ReportFileType;

    use super::*;
    use crate::test_support::empty_store;

    fn new_report(title: &str, category: ReportCategory, department: &str) -> NewReport {
        NewReport {
            title: title.to_string(),
            description: "सदस्य नोंदणी आढावा".to_string(),
            category,
            file_type: ReportFileType::Pdf,
            author: "Sunita Jadhav".to_string(),
            department: department.to_string(),
            file_size: "2.4 MB".to_string(),
            is_public: false,
            tags: vec!["सदस्यता".to_string()],
            file_name: format!("{title}.pdf"),
        }
    }

    #[test]
    fn category_filter_counts_exactly() {
        let (store, _) = empty_store();
        for month in ["जानेवारी", "फेब्रुवारी", "मार्च"] {
            store.create_report(new_report(month, ReportCategory::Monthly, "संघटन"));
        }
        for quarter in ["Q1", "Q2"] {
            store.create_report(new_report(quarter, ReportCategory::Quarterly, "वित्त"));
        }

        assert_eq!(store.filter_reports_by_category(ReportCategory::Monthly).len(), 3);
        assert_eq!(store.filter_reports_by_category(ReportCategory::Quarterly).len(), 2);
        assert!(store.filter_reports_by_category(ReportCategory::Annual).is_empty());
        assert_eq!(store.filter_reports_by_department("वित्त").len(), 2);
        assert!(store.filter_reports_by_department("अज्ञात").is_empty());
    }

    #[test]
    fn downloads_increase_by_exactly_n() {
        let (store, _) = empty_store();
        let report = store.create_report(new_report("जानेवारी", ReportCategory::Monthly, "संघटन"));
        assert_eq!(report.download_count, 0);

        for _ in 0..7 {
            assert!(store.increment_report_downloads(report.id).is_some());
        }
        assert_eq!(store.get_report(report.id).unwrap().download_count, 7);
        assert!(store.increment_report_downloads(Uuid::new_v4()).is_none());
    }

    #[test]
    fn concurrent_downloads_are_not_lost() {
        let (store, _) = empty_store();
        let store = std::sync::Arc::new(store);
        let report = store.create_report(new_report("जानेवारी", ReportCategory::Monthly, "संघटन"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.increment_report_downloads(report.id);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.get_report(report.id).unwrap().download_count, 400);
    }

    #[test]
    fn public_visibility_and_search() {
        let (store, _) = empty_store();
        let report = store.create_report(new_report("वार्षिक अहवाल", ReportCategory::Annual, "संघटन"));
        store.create_report(new_report("Q1", ReportCategory::Quarterly, "वित्त"));
        assert!(store.public_reports().is_empty());

        let published = store
            .update_report(report.id, ReportPatch {
                is_public: Some(true),
                ..ReportPatch::default()
            })
            .unwrap();
        assert_eq!(store.public_reports(), vec![published]);
        assert_eq!(store.search_reports("SUNITA").len(), 2);
        assert_eq!(store.search_reports("वार्षिक").len(), 1);
    }
}
