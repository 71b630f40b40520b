//! Demo dataset the clinic starts with

use chrono::{NaiveDate, Utc};

use super::memory::ClinicData;
use super::models::{
    Booking, BookingStatus, Feedback, Notification, NotificationChannel, NotificationPriority,
    NotificationType, PaymentStatus, Practitioner, SessionProgress, Therapy, TherapyEffectiveness,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // 常量日期，构造不会失败
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Build the full demo dataset
pub fn demo_data() -> ClinicData {
    ClinicData {
        therapies: therapies(),
        practitioners: practitioners(),
        bookings: bookings(),
        notifications: notifications(),
        feedback: feedback(),
    }
}

pub fn therapies() -> Vec<Therapy> {
    vec![
        Therapy {
            id: 1,
            name: "Abhyanga".into(),
            description: "Full body oil massage with warm herbal oils to improve circulation and reduce stress".into(),
            duration: "60 minutes".into(),
            price: 120,
            benefits: strings(&[
                "Improves circulation",
                "Reduces stress",
                "Nourishes skin",
                "Detoxifies body",
                "Improves sleep",
            ]),
            category: "Massage Therapy".into(),
            difficulty: "Easy".into(),
            contraindications: strings(&["Open wounds", "Fever", "Pregnancy (first trimester)"]),
            preparation: "Avoid heavy meals 2 hours before".into(),
            aftercare: "Rest for 30 minutes, avoid cold water".into(),
        },
        Therapy {
            id: 2,
            name: "Shirodhara".into(),
            description: "Continuous stream of warm oil over the forehead to calm the mind and nervous system".into(),
            duration: "45 minutes".into(),
            price: 150,
            benefits: strings(&[
                "Calms mind",
                "Improves sleep",
                "Reduces anxiety",
                "Enhances concentration",
                "Balances doshas",
            ]),
            category: "Head Therapy".into(),
            difficulty: "Easy".into(),
            contraindications: strings(&["Head injuries", "Severe migraines", "High blood pressure"]),
            preparation: "Empty stomach preferred".into(),
            aftercare: "Avoid cold water on head for 24 hours".into(),
        },
        Therapy {
            id: 3,
            name: "Panchakarma Detox".into(),
            description: "5-day comprehensive detoxification program for complete body purification".into(),
            duration: "5 days".into(),
            price: 800,
            benefits: strings(&[
                "Complete detox",
                "Balances doshas",
                "Rejuvenates body",
                "Boosts immunity",
                "Mental clarity",
            ]),
            category: "Detox Program".into(),
            difficulty: "Moderate".into(),
            contraindications: strings(&["Chronic diseases", "Pregnancy", "Elderly patients"]),
            preparation: "Special diet 3 days before".into(),
            aftercare: "Gradual return to normal diet".into(),
        },
        Therapy {
            id: 4,
            name: "Udvartana".into(),
            description: "Herbal powder massage for weight management and skin improvement".into(),
            duration: "45 minutes".into(),
            price: 100,
            benefits: strings(&[
                "Weight loss",
                "Improves skin texture",
                "Reduces cellulite",
                "Tones muscles",
                "Improves circulation",
            ]),
            category: "Massage Therapy".into(),
            difficulty: "Easy".into(),
            contraindications: strings(&["Skin allergies", "Open wounds", "Sensitive skin"]),
            preparation: "Clean skin, avoid lotions".into(),
            aftercare: "Warm shower after 2 hours".into(),
        },
        Therapy {
            id: 5,
            name: "Basti".into(),
            description: "Medicated enema therapy for colon cleansing and dosha balancing".into(),
            duration: "30 minutes".into(),
            price: 200,
            benefits: strings(&[
                "Colon cleansing",
                "Balances Vata dosha",
                "Improves digestion",
                "Detoxifies colon",
            ]),
            category: "Detox Program".into(),
            difficulty: "Moderate".into(),
            contraindications: strings(&["Severe constipation", "Colon diseases", "Pregnancy"]),
            preparation: "Empty stomach, special diet".into(),
            aftercare: "Rest, light diet for 24 hours".into(),
        },
        Therapy {
            id: 6,
            name: "Nasya".into(),
            description: "Nasal administration of medicated oils for head and neck disorders".into(),
            duration: "20 minutes".into(),
            price: 80,
            benefits: strings(&[
                "Clears sinuses",
                "Improves voice",
                "Enhances memory",
                "Relieves headaches",
            ]),
            category: "Head Therapy".into(),
            difficulty: "Easy".into(),
            contraindications: strings(&["Nasal bleeding", "Severe cold", "Sinusitis"]),
            preparation: "Clean nasal passages".into(),
            aftercare: "Avoid cold exposure".into(),
        },
    ]
}

pub fn practitioners() -> Vec<Practitioner> {
    vec![
        Practitioner {
            id: 1,
            name: "Dr. Priya Sharma".into(),
            specialization: "Panchakarma Expert".into(),
            experience: "15 years".into(),
            qualifications: strings(&["BAMS", "MD Ayurveda", "Panchakarma Specialist"]),
            rating: 4.9,
            patients_treated: 1200,
            availability: "Mon-Fri 9AM-6PM".into(),
            languages: strings(&["Hindi", "English", "Sanskrit"]),
            bio: "Expert in traditional Panchakarma therapies with 15 years of experience".into(),
        },
        Practitioner {
            id: 2,
            name: "Dr. Raj Kumar".into(),
            specialization: "Ayurvedic Physician".into(),
            experience: "10 years".into(),
            qualifications: strings(&["BAMS", "MD Ayurveda", "Herbal Medicine"]),
            rating: 4.7,
            patients_treated: 800,
            availability: "Mon-Sat 8AM-7PM".into(),
            languages: strings(&["Hindi", "English", "Tamil"]),
            bio: "Specialized in herbal medicine and constitutional analysis".into(),
        },
        Practitioner {
            id: 3,
            name: "Dr. Meera Patel".into(),
            specialization: "Massage Therapist".into(),
            experience: "8 years".into(),
            qualifications: strings(&["Diploma in Ayurvedic Massage", "Certified Therapist"]),
            rating: 4.8,
            patients_treated: 600,
            availability: "Tue-Sun 10AM-8PM".into(),
            languages: strings(&["Hindi", "English", "Gujarati"]),
            bio: "Expert in therapeutic massage and bodywork techniques".into(),
        },
        Practitioner {
            id: 4,
            name: "Dr. Anil Gupta".into(),
            specialization: "Detox Specialist".into(),
            experience: "12 years".into(),
            qualifications: strings(&["BAMS", "Detox Therapy Certification"]),
            rating: 4.6,
            patients_treated: 900,
            availability: "Mon-Fri 7AM-5PM".into(),
            languages: strings(&["Hindi", "English", "Punjabi"]),
            bio: "Specialized in detoxification and cleansing therapies".into(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: u32,
    patient: &str,
    therapy_id: u32,
    practitioner_id: u32,
    day_of_month: u32,
    time: &str,
    progress: SessionProgress,
    (day, total_days): (u32, u32),
    age: u32,
    notes: &str,
    cost: u32,
    payment_status: PaymentStatus,
) -> Booking {
    let email = format!("{}@email.com", patient.to_lowercase().replace(' ', "."));
    Booking {
        id,
        patient_name: patient.into(),
        therapy_id,
        practitioner_id,
        date: date(2025, 1, day_of_month),
        time: time.into(),
        status: BookingStatus::Confirmed,
        progress,
        day,
        total_days,
        patient_age: Some(age),
        patient_phone: Some(format!("+91-98765432{:02}", 9 + id)),
        patient_email: Some(email),
        notes: Some(notes.into()),
        cost,
        payment_status,
    }
}

pub fn bookings() -> Vec<Booking> {
    vec![
        booking(
            1,
            "John Doe",
            1,
            1,
            15,
            "10:00",
            SessionProgress::Completed,
            (3, 5),
            45,
            "Patient responded well to treatment",
            600,
            PaymentStatus::Paid,
        ),
        booking(
            2,
            "Jane Smith",
            2,
            2,
            16,
            "14:00",
            SessionProgress::InProgress,
            (1, 1),
            32,
            "First session, patient comfortable",
            150,
            PaymentStatus::Pending,
        ),
        booking(
            3,
            "Robert Johnson",
            3,
            1,
            17,
            "09:00",
            SessionProgress::Scheduled,
            (0, 5),
            55,
            "Comprehensive detox program",
            800,
            PaymentStatus::Paid,
        ),
        booking(
            4,
            "Sarah Wilson",
            4,
            3,
            18,
            "11:00",
            SessionProgress::InProgress,
            (2, 3),
            28,
            "Weight management therapy",
            300,
            PaymentStatus::Paid,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    use NotificationChannel::{Email, InApp, Sms};

    let now = Utc::now();
    let entry = |id: u32,
                 booking_id: u32,
                 kind: NotificationType,
                 title: &str,
                 message: &str,
                 read: bool,
                 priority: NotificationPriority,
                 channels: Vec<NotificationChannel>| {
        let (patient_name, therapy_name) = match booking_id {
            1 => ("John Doe", "Abhyanga"),
            _ => ("Jane Smith", "Shirodhara"),
        };
        Notification {
            id,
            booking_id,
            kind,
            title: title.into(),
            message: message.into(),
            read,
            timestamp: now,
            priority,
            channels,
            patient_name: patient_name.into(),
            therapy_name: therapy_name.into(),
        }
    };

    vec![
        entry(
            1,
            1,
            NotificationType::PreProcedure,
            "Abhyanga Session Tomorrow",
            "Please avoid heavy meals 2 hours before your session. Wear comfortable clothing.",
            false,
            NotificationPriority::High,
            vec![InApp, Email],
        ),
        entry(
            2,
            2,
            NotificationType::PostProcedure,
            "Post-Shirodhara Care",
            "Avoid cold water on head for 24 hours. Rest for at least 30 minutes.",
            false,
            NotificationPriority::Medium,
            vec![InApp, Email],
        ),
        entry(
            3,
            1,
            NotificationType::Reminder,
            "Session Reminder - 1 Hour",
            "Your Abhyanga session starts in 1 hour. Please arrive 15 minutes early.",
            false,
            NotificationPriority::Urgent,
            vec![InApp, Email, Sms],
        ),
        entry(
            4,
            2,
            NotificationType::Milestone,
            "Therapy Progress Milestone",
            "Congratulations! You have completed 50% of your Shirodhara treatment.",
            true,
            NotificationPriority::Low,
            vec![InApp],
        ),
        entry(
            5,
            1,
            NotificationType::Alert,
            "Important: Dietary Restrictions",
            "Please follow the prescribed diet strictly for the next 3 days to maximize treatment benefits.",
            false,
            NotificationPriority::High,
            vec![InApp, Email],
        ),
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: 1,
            booking_id: 1,
            patient_name: "John Doe".into(),
            rating: 5,
            symptoms: "Joint pain reduced significantly, stiffness improved".into(),
            side_effects: "None".into(),
            improvements: "Better sleep, increased energy, reduced stress levels".into(),
            date: date(2025, 1, 10),
            therapy_effectiveness: Some(TherapyEffectiveness::Excellent),
            would_recommend: true,
            follow_up_needed: false,
        },
        Feedback {
            id: 2,
            booking_id: 2,
            patient_name: "Jane Smith".into(),
            rating: 4,
            symptoms: "Mild headache after session".into(),
            side_effects: "Slight dizziness for 30 minutes".into(),
            improvements: "Better focus, reduced anxiety".into(),
            date: date(2025, 1, 11),
            therapy_effectiveness: Some(TherapyEffectiveness::Good),
            would_recommend: true,
            follow_up_needed: true,
        },
        Feedback {
            id: 3,
            booking_id: 4,
            patient_name: "Sarah Wilson".into(),
            rating: 5,
            symptoms: "Weight loss of 2kg in 2 weeks".into(),
            side_effects: "None".into(),
            improvements: "Improved skin texture, better circulation".into(),
            date: date(2025, 1, 12),
            therapy_effectiveness: Some(TherapyEffectiveness::Excellent),
            would_recommend: true,
            follow_up_needed: false,
        },
    ]
}
