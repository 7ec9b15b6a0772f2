//! Seed records loaded at start-up. Identities and timestamps are fixed so
//! every fresh process starts from the same state.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use karyakarta_types::models::{
    AttendeeStatus, ContactInfo, Event, EventAttendee, EventPhoto, EventStatus, EventType,
    Feedback, FeedbackCategory, FeedbackPriority, FeedbackStatus, Member, Notice, NoticePriority,
    Report, ReportCategory, ReportFileType, SocialHandles, SubmitterType, TargetAudience,
};
use uuid::Uuid;

const MEMBER: u128 = 1;
const EVENT: u128 = 2;
const NOTICE: u128 = 3;
const FEEDBACK: u128 = 4;
const PHOTO: u128 = 5;
const REPORT: u128 = 6;
const ATTENDEE: u128 = 7;

/// `00000000-0000-000K-0000-00000000000N` for entity kind K, record N.
pub fn fixture_id(kind: u128, n: u128) -> Uuid {
    Uuid::from_u128((kind << 64) | n)
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("fixture timestamp is a valid UTC instant")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is a valid calendar date")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn members() -> Vec<Member> {
    vec![
        Member {
            id: fixture_id(MEMBER, 1),
            name: "राजेश पाटील".to_string(),
            phone: "9822011111".to_string(),
            constituency: "कसबा पेठ".to_string(),
            district: "पुणे".to_string(),
            division: "पुणे विभाग".to_string(),
            designation: "शहर अध्यक्ष".to_string(),
            achievements: "२०१९ पासून शहर संघटनेचे नेतृत्व; ४०० बूथ समित्यांची स्थापना".to_string(),
            social_media: SocialHandles {
                facebook: Some("rajesh.patil.pune".to_string()),
                twitter: Some("@RajeshPatilPune".to_string()),
                ..SocialHandles::default()
            },
            verified: true,
            membership_date: date(2012, 8, 15),
            profile_image: Some("/uploads/members/rajesh-patil.jpg".to_string()),
            contact: ContactInfo {
                email: Some("rajesh.patil@example.org".to_string()),
                address: Some("शनिवार पेठ, पुणे ४११०३०".to_string()),
                emergency_contact: Some("9822011112".to_string()),
            },
        },
        Member {
            id: fixture_id(MEMBER, 2),
            name: "सुनीता जाधव".to_string(),
            phone: "9890022222".to_string(),
            constituency: "सातारा".to_string(),
            district: "सातारा".to_string(),
            division: "पुणे विभाग".to_string(),
            designation: "महिला आघाडी प्रमुख".to_string(),
            achievements: "बचत गट अभियानाचे जिल्हास्तरीय समन्वय".to_string(),
            social_media: SocialHandles {
                instagram: Some("sunita.jadhav".to_string()),
                whatsapp: Some("9890022222".to_string()),
                ..SocialHandles::default()
            },
            verified: true,
            membership_date: date(2015, 1, 26),
            profile_image: None,
            contact: ContactInfo {
                email: Some("sunita.jadhav@example.org".to_string()),
                address: Some("राजवाडा, सातारा".to_string()),
                emergency_contact: None,
            },
        },
        Member {
            id: fixture_id(MEMBER, 3),
            name: "अमोल देशमुख".to_string(),
            phone: "9767033333".to_string(),
            constituency: "नाशिक पश्चिम".to_string(),
            district: "नाशिक".to_string(),
            division: "नाशिक विभाग".to_string(),
            designation: "युवा आघाडी सचिव".to_string(),
            achievements: String::new(),
            social_media: SocialHandles::default(),
            verified: false,
            membership_date: date(2021, 10, 2),
            profile_image: None,
            contact: ContactInfo::default(),
        },
        Member {
            id: fixture_id(MEMBER, 4),
            name: "प्रिया कुलकर्णी".to_string(),
            phone: "9011044444".to_string(),
            constituency: "कोथरूड".to_string(),
            district: "पुणे".to_string(),
            division: "पुणे विभाग".to_string(),
            designation: "IT सेल समन्वयक".to_string(),
            achievements: "सदस्य नोंदणी ॲपचे प्रशिक्षण ३० प्रभागांत".to_string(),
            social_media: SocialHandles {
                twitter: Some("@PriyaK_IT".to_string()),
                youtube: Some("PriyaKulkarniTalks".to_string()),
                ..SocialHandles::default()
            },
            verified: false,
            membership_date: date(2023, 4, 14),
            profile_image: None,
            contact: ContactInfo {
                email: Some("priya.k@example.org".to_string()),
                address: None,
                emergency_contact: None,
            },
        },
    ]
}

pub fn events() -> Vec<Event> {
    let convention_attendees = vec![
        EventAttendee {
            id: fixture_id(ATTENDEE, 1),
            member_id: fixture_id(MEMBER, 1),
            status: AttendeeStatus::Confirmed,
            registered_at: at(2025, 1, 5, 11),
        },
        EventAttendee {
            id: fixture_id(ATTENDEE, 2),
            member_id: fixture_id(MEMBER, 4),
            status: AttendeeStatus::Invited,
            registered_at: at(2025, 1, 6, 16),
        },
    ];
    let camp_attendees = vec![EventAttendee {
        id: fixture_id(ATTENDEE, 3),
        member_id: fixture_id(MEMBER, 2),
        status: AttendeeStatus::Attended,
        registered_at: at(2024, 11, 20, 10),
    }];

    vec![
        Event {
            id: fixture_id(EVENT, 1),
            title: "जिल्हा कार्यकर्ता सम्मेलन".to_string(),
            description: "आगामी निवडणुकांसाठी संघटनात्मक तयारीचा आढावा".to_string(),
            event_type: EventType::Offline,
            venue: "बालगंधर्व रंगमंदिर, पुणे".to_string(),
            start_at: at(2025, 2, 9, 10),
            end_at: at(2025, 2, 9, 17),
            capacity: 800,
            current_attendees: convention_attendees.len() as u32,
            meeting_link: None,
            organizer: "राजेश पाटील".to_string(),
            constituency: "कसबा पेठ".to_string(),
            district: "पुणे".to_string(),
            category: "सम्मेलन".to_string(),
            status: EventStatus::Published,
            attendees: convention_attendees,
        },
        Event {
            id: fixture_id(EVENT, 2),
            title: "डिजिटल प्रचार प्रशिक्षण".to_string(),
            description: "सोशल मीडिया व्यवस्थापनावर ऑनलाइन कार्यशाळा".to_string(),
            event_type: EventType::Online,
            venue: "ऑनलाइन".to_string(),
            start_at: at(2025, 1, 25, 14),
            end_at: at(2025, 1, 25, 16),
            capacity: 300,
            current_attendees: 0,
            meeting_link: Some("https://meet.example.org/digital-prachar".to_string()),
            organizer: "प्रिया कुलकर्णी".to_string(),
            constituency: "कोथरूड".to_string(),
            district: "पुणे".to_string(),
            category: "प्रशिक्षण".to_string(),
            status: EventStatus::Draft,
            attendees: Vec::new(),
        },
        Event {
            id: fixture_id(EVENT, 3),
            title: "आरोग्य तपासणी शिबिर".to_string(),
            description: "ग्रामीण भागात मोफत आरोग्य तपासणी".to_string(),
            event_type: EventType::Offline,
            venue: "जिल्हा परिषद शाळा, कोरेगाव".to_string(),
            start_at: at(2024, 12, 1, 9),
            end_at: at(2024, 12, 1, 15),
            capacity: 150,
            current_attendees: camp_attendees.len() as u32,
            meeting_link: None,
            organizer: "सुनीता जाधव".to_string(),
            constituency: "सातारा".to_string(),
            district: "सातारा".to_string(),
            category: "शिबिर".to_string(),
            status: EventStatus::Completed,
            attendees: camp_attendees,
        },
        Event {
            id: fixture_id(EVENT, 4),
            title: "युवा संवाद".to_string(),
            description: "महाविद्यालयीन विद्यार्थ्यांसोबत संवाद, थेट प्रक्षेपणासह".to_string(),
            event_type: EventType::Hybrid,
            venue: "केटीएचएम महाविद्यालय, नाशिक".to_string(),
            start_at: at(2025, 3, 2, 11),
            end_at: at(2025, 3, 2, 13),
            capacity: 400,
            current_attendees: 0,
            meeting_link: Some("https://live.example.org/yuva-samvad".to_string()),
            organizer: "अमोल देशमुख".to_string(),
            constituency: "नाशिक पश्चिम".to_string(),
            district: "नाशिक".to_string(),
            category: "संवाद".to_string(),
            status: EventStatus::Published,
            attendees: Vec::new(),
        },
    ]
}

pub fn notices() -> Vec<Notice> {
    vec![
        Notice {
            id: fixture_id(NOTICE, 1),
            title: "प्रदेश कार्यकारिणी बैठक".to_string(),
            content: "सर्व जिल्हाध्यक्षांनी २० जानेवारी रोजी मुंबई कार्यालयात उपस्थित राहावे."
                .to_string(),
            priority: NoticePriority::Urgent,
            category: "बैठक".to_string(),
            author: "प्रदेश कार्यालय".to_string(),
            target_audience: TargetAudience::Leadership,
            constituency: String::new(),
            district: String::new(),
            expires_at: at(2025, 1, 21, 0),
            attachments: strings(&["https://files.example.org/notices/karyakarini-agenda.pdf"]),
            pinned: true,
            created_at: at(2025, 1, 10, 9),
            read_by: BTreeSet::from([fixture_id(MEMBER, 1).to_string()]),
            view_count: 14,
        },
        Notice {
            id: fixture_id(NOTICE, 2),
            title: "सदस्य नोंदणी अभियान".to_string(),
            content: "प्रत्येक बूथवर किमान ५० नवीन सदस्यांची नोंदणी करावी.".to_string(),
            priority: NoticePriority::High,
            category: "अभियान".to_string(),
            author: "संघटन सरचिटणीस".to_string(),
            target_audience: TargetAudience::All,
            constituency: String::new(),
            district: String::new(),
            expires_at: at(2025, 3, 31, 0),
            attachments: Vec::new(),
            pinned: false,
            created_at: at(2025, 1, 2, 10),
            read_by: BTreeSet::new(),
            view_count: 52,
        },
        Notice {
            id: fixture_id(NOTICE, 3),
            title: "दिवाळी स्नेहमेळावा".to_string(),
            content: "कसबा पेठ मतदारसंघातील कार्यकर्त्यांसाठी स्नेहमेळावा.".to_string(),
            priority: NoticePriority::Low,
            category: "कार्यक्रम".to_string(),
            author: "राजेश पाटील".to_string(),
            target_audience: TargetAudience::Constituency,
            constituency: "कसबा पेठ".to_string(),
            district: "पुणे".to_string(),
            expires_at: at(2024, 11, 5, 0),
            attachments: Vec::new(),
            pinned: false,
            created_at: at(2024, 10, 25, 18),
            read_by: BTreeSet::new(),
            view_count: 31,
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: fixture_id(FEEDBACK, 1),
            member_id: fixture_id(MEMBER, 3),
            member_name: "अमोल देशमुख".to_string(),
            subject: "ॲपमध्ये लॉगिन होत नाही".to_string(),
            message: "OTP येत नाही, तीन दिवसांपासून प्रयत्न करत आहे.".to_string(),
            category: FeedbackCategory::TechnicalIssue,
            status: FeedbackStatus::Pending,
            priority: Some(FeedbackPriority::High),
            submitter_type: Some(SubmitterType::Member),
            phone: Some("9767033333".to_string()),
            email: None,
            constituency: Some("नाशिक पश्चिम".to_string()),
            district: Some("नाशिक".to_string()),
            event_id: None,
            attachments: None,
            created_at: at(2025, 1, 12, 20),
            response: None,
            responded_at: None,
        },
        Feedback {
            id: fixture_id(FEEDBACK, 2),
            member_id: fixture_id(MEMBER, 2),
            member_name: "सुनीता जाधव".to_string(),
            subject: "आरोग्य शिबिराचे उत्तम नियोजन".to_string(),
            message: "गावकऱ्यांनी शिबिराचे कौतुक केले.".to_string(),
            category: FeedbackCategory::EventFeedback,
            status: FeedbackStatus::Resolved,
            priority: None,
            submitter_type: Some(SubmitterType::Leader),
            phone: None,
            email: Some("sunita.jadhav@example.org".to_string()),
            constituency: Some("सातारा".to_string()),
            district: Some("सातारा".to_string()),
            event_id: Some(fixture_id(EVENT, 3)),
            attachments: Some(strings(&["https://cdn.example.org/feedback/shibir-letter.jpg"])),
            created_at: at(2024, 12, 3, 9),
            response: Some("आपल्या टीमचे अभिनंदन!".to_string()),
            responded_at: Some(at(2024, 12, 4, 10)),
        },
        Feedback {
            id: fixture_id(FEEDBACK, 3),
            member_id: fixture_id(MEMBER, 4),
            member_name: "प्रिया कुलकर्णी".to_string(),
            subject: "प्रदेशाध्यक्षांसोबत भेट".to_string(),
            message: "IT सेलच्या पुढील योजनांवर चर्चा करण्यासाठी वेळ मिळावी.".to_string(),
            category: FeedbackCategory::MeetingRequest,
            status: FeedbackStatus::InProgress,
            priority: Some(FeedbackPriority::Medium),
            submitter_type: Some(SubmitterType::Member),
            phone: Some("9011044444".to_string()),
            email: Some("priya.k@example.org".to_string()),
            constituency: None,
            district: None,
            event_id: None,
            attachments: None,
            created_at: at(2025, 1, 8, 13),
            response: None,
            responded_at: None,
        },
    ]
}

pub fn photos() -> Vec<EventPhoto> {
    vec![
        EventPhoto {
            id: fixture_id(PHOTO, 1),
            event_id: fixture_id(EVENT, 3),
            event_name: "आरोग्य तपासणी शिबिर".to_string(),
            photo_url: "https://cdn.example.org/events/shibir/1.jpg".to_string(),
            uploaded_by: "सुनीता जाधव".to_string(),
            uploaded_at: at(2024, 12, 1, 18),
            description: "नोंदणी कक्षातील गर्दी".to_string(),
            tags: strings(&["शिबिर", "आरोग्य"]),
        },
        EventPhoto {
            id: fixture_id(PHOTO, 2),
            event_id: fixture_id(EVENT, 3),
            event_name: "आरोग्य तपासणी शिबिर".to_string(),
            photo_url: "https://cdn.example.org/events/shibir/2.jpg".to_string(),
            uploaded_by: "मीडिया सेल".to_string(),
            uploaded_at: at(2024, 12, 1, 19),
            description: "डॉक्टरांचे पथक".to_string(),
            tags: strings(&["volunteers"]),
        },
    ]
}

pub fn reports() -> Vec<Report> {
    vec![
        Report {
            id: fixture_id(REPORT, 1),
            title: "डिसेंबर सदस्यता अहवाल".to_string(),
            description: "जिल्हानिहाय नवीन सदस्य नोंदणी".to_string(),
            category: ReportCategory::Monthly,
            file_type: ReportFileType::Excel,
            author: "प्रिया कुलकर्णी".to_string(),
            department: "IT सेल".to_string(),
            created_at: at(2025, 1, 3, 12),
            file_size: "1.2 MB".to_string(),
            download_count: 18,
            is_public: false,
            tags: strings(&["सदस्यता", "डिसेंबर"]),
            file_name: "membership-2024-12.xlsx".to_string(),
        },
        Report {
            id: fixture_id(REPORT, 2),
            title: "तिसरी तिमाही आर्थिक विवरण".to_string(),
            description: "देणग्या व खर्च यांचा तपशील".to_string(),
            category: ReportCategory::Financial,
            file_type: ReportFileType::Pdf,
            author: "कोषाध्यक्ष".to_string(),
            department: "वित्त".to_string(),
            created_at: at(2024, 10, 15, 10),
            file_size: "860 KB".to_string(),
            download_count: 42,
            is_public: true,
            tags: strings(&["वित्त"]),
            file_name: "finance-2024-q3.pdf".to_string(),
        },
        Report {
            id: fixture_id(REPORT, 3),
            title: "आरोग्य शिबिर अहवाल".to_string(),
            description: "कोरेगाव शिबिरातील लाभार्थी आणि निष्कर्ष".to_string(),
            category: ReportCategory::Event,
            file_type: ReportFileType::Word,
            author: "सुनीता जाधव".to_string(),
            department: "महिला आघाडी".to_string(),
            created_at: at(2024, 12, 5, 16),
            file_size: "2.4 MB".to_string(),
            download_count: 7,
            is_public: true,
            tags: strings(&["शिबिर", "आरोग्य"]),
            file_name: "shibir-koregaon.docx".to_string(),
        },
    ]
}
