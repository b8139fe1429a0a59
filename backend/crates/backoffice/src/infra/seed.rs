//! Sample records shown in the admin panel of a fresh deployment

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use kernel::id::{BookingId, JobId};

use crate::domain::entities::{Booking, JobPosting, Message, NewMessage};
use crate::domain::value_objects::{BookingStatus, EmploymentType, MessageStatus};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub fn mock_bookings(today: NaiveDate) -> Vec<Booking> {
    let now = Utc::now();
    let booking = |name: &str,
                   email: &str,
                   company: Option<&str>,
                   service: &str,
                   days_from_today: i64,
                   time: NaiveTime,
                   status: BookingStatus,
                   age_hours: i64| Booking {
        id: BookingId::new(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        company: company.map(str::to_string),
        service: service.to_string(),
        preferred_date: today + Duration::days(days_from_today),
        preferred_time: time,
        notes: None,
        status,
        created_at: now - Duration::hours(age_hours),
        updated_at: now - Duration::hours(age_hours),
    };

    vec![
        booking(
            "Sarah Johnson",
            "sarah@brightleaf.example",
            Some("Brightleaf Studio"),
            "Brand Strategy",
            3,
            at(10, 0),
            BookingStatus::Pending,
            2,
        ),
        booking(
            "Marcus Chen",
            "marcus.chen@northwind.example",
            Some("Northwind Traders"),
            "Web Development",
            5,
            at(14, 30),
            BookingStatus::Confirmed,
            26,
        ),
        booking(
            "Priya Patel",
            "priya@patelconsulting.example",
            None,
            "SEO Audit",
            -7,
            at(11, 0),
            BookingStatus::Completed,
            24 * 10,
        ),
    ]
}

pub fn mock_jobs() -> Vec<JobPosting> {
    let now = Utc::now();
    let job = |title: &str,
               slug: &str,
               department: &str,
               location: &str,
               employment_type: EmploymentType,
               description: &str,
               requirements: &[&str],
               is_active: bool,
               age_days: i64| JobPosting {
        id: JobId::new(),
        title: title.to_string(),
        slug: slug.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        employment_type,
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        is_active,
        posted_at: now - Duration::days(age_days),
        updated_at: now - Duration::days(age_days),
    };

    vec![
        job(
            "Senior Frontend Developer",
            "senior-frontend-developer",
            "Engineering",
            "Remote",
            EmploymentType::FullTime,
            "Build fast, accessible marketing sites and landing pages for our clients.",
            &[
                "5+ years building production web applications",
                "Strong TypeScript and CSS skills",
                "Eye for detail and performance",
            ],
            true,
            3,
        ),
        job(
            "Content Strategist",
            "content-strategist",
            "Marketing",
            "Hybrid",
            EmploymentType::FullTime,
            "Plan and write content that ranks and converts.",
            &["3+ years in content marketing", "Portfolio of published work"],
            true,
            12,
        ),
        job(
            "Design Intern",
            "design-intern",
            "Design",
            "On-site",
            EmploymentType::Internship,
            "Support the design team on client brand projects.",
            &["Currently studying visual or UX design"],
            false,
            60,
        ),
    ]
}

pub fn mock_messages() -> Vec<Message> {
    let now = Utc::now();

    let mut welcome = Message::new(NewMessage {
        reference_id: "CT-SEED0001-A1B2".to_string(),
        name: "Tom Becker".to_string(),
        email: "tom@beckerbikes.example".to_string(),
        company: Some("Becker Bikes".to_string()),
        budget: Some("$5,000 - $10,000".to_string()),
        service: Some("Web Development".to_string()),
        body: "We need a new e-commerce site before the spring season.".to_string(),
        ..Default::default()
    });
    welcome.created_at = now - Duration::hours(5);
    welcome.updated_at = welcome.created_at;

    let mut replied = Message::new(NewMessage {
        reference_id: "CT-SEED0002-C3D4".to_string(),
        name: "Lena Ortiz".to_string(),
        email: "lena@ortizlaw.example".to_string(),
        website: Some("ortizlaw.example".to_string()),
        budget: Some("flexible".to_string()),
        service: Some("SEO Audit".to_string()),
        body: "Could you review our local search rankings?".to_string(),
        ..Default::default()
    });
    replied.status = MessageStatus::Replied;
    replied.created_at = now - Duration::days(4);
    replied.updated_at = now - Duration::days(3);

    vec![welcome, replied]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_bookings_do_not_share_active_slots() {
        let bookings = mock_bookings(Utc::now().date_naive());
        let slots: HashSet<_> = bookings
            .iter()
            .filter(|b| b.status.holds_slot())
            .map(|b| (b.preferred_date, b.preferred_time))
            .collect();
        assert_eq!(
            slots.len(),
            bookings.iter().filter(|b| b.status.holds_slot()).count()
        );
    }

    #[test]
    fn test_mock_job_slugs_are_unique() {
        let jobs = mock_jobs();
        let slugs: HashSet<_> = jobs.iter().map(|j| j.slug.as_str()).collect();
        assert_eq!(slugs.len(), jobs.len());
        for job in &jobs {
            assert_eq!(job.slug, platform::text::slugify(&job.title));
        }
    }
}
