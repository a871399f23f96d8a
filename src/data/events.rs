use crate::state::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Career,
    Workshop,
    Social,
    Competition,
    Seminar,
}

impl EventCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Career => "Career",
            EventCategory::Workshop => "Workshop",
            EventCategory::Social => "Social",
            EventCategory::Competition => "Competition",
            EventCategory::Seminar => "Seminar",
        }
    }
}

/// Extra fields shown on the event details screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub time_range: &'static str,
    pub max_attendees: u32,
    pub language: &'static str,
    pub organizer: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub attendees: u32,
    pub category: EventCategory,
    pub joined: bool,
    pub details: EventDetails,
}

impl Event {
    /// Attendance as a ratio for gauges, clamped to 0..=1.
    pub fn fill_ratio(&self) -> f64 {
        if self.details.max_attendees == 0 {
            return 0.0;
        }
        (f64::from(self.attendees) / f64::from(self.details.max_attendees)).clamp(0.0, 1.0)
    }
}

const WORKSHOP_DESCRIPTION: &str = "Join us for an exciting hands-on workshop where you'll learn how to build AI-powered applications using React and modern AI APIs.

What you'll learn:
• Integrating AI APIs into React applications
• Building conversational interfaces
• Best practices for AI-powered UX
• Real-world project examples

What to bring:
• Your laptop with Node.js installed
• Basic knowledge of React
• Enthusiasm to learn!

This workshop is perfect for students looking to combine web development with artificial intelligence. Limited seats available - register now!";

pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Career Fair 2025",
            date: "Oct 24, 2025",
            time: "5:00 PM",
            location: "Main Hall",
            attendees: 145,
            category: EventCategory::Career,
            joined: false,
            details: EventDetails {
                time_range: "5:00 PM - 8:00 PM",
                max_attendees: 300,
                language: "German / English",
                organizer: "Career Service",
                description: "Meet companies from the region, bring your CV and talk to recruiters about internships, theses and first jobs.",
            },
        },
        Event {
            id: 2,
            title: "React & AI Workshop",
            date: "Oct 25, 2025",
            time: "2:00 PM",
            location: "Lab Building, Room 301",
            attendees: 67,
            category: EventCategory::Workshop,
            joined: true,
            details: EventDetails {
                time_range: "2:00 PM - 5:00 PM",
                max_attendees: 100,
                language: "English",
                organizer: "Computer Science Department",
                description: WORKSHOP_DESCRIPTION,
            },
        },
        Event {
            id: 3,
            title: "Campus Music Festival",
            date: "Oct 28, 2025",
            time: "6:00 PM",
            location: "Outdoor Stadium",
            attendees: 523,
            category: EventCategory::Social,
            joined: false,
            details: EventDetails {
                time_range: "6:00 PM - 11:00 PM",
                max_attendees: 800,
                language: "German / English",
                organizer: "Student Council",
                description: "Student bands, food trucks and an open stage. Bring your friends!",
            },
        },
        Event {
            id: 4,
            title: "Startup Pitch Competition",
            date: "Oct 30, 2025",
            time: "10:00 AM",
            location: "Innovation Hub",
            attendees: 89,
            category: EventCategory::Competition,
            joined: false,
            details: EventDetails {
                time_range: "10:00 AM - 4:00 PM",
                max_attendees: 120,
                language: "English",
                organizer: "Founders Club",
                description: "Teams pitch their ideas to a jury of local founders and investors. Prizes for the top three teams.",
            },
        },
        Event {
            id: 5,
            title: "Sustainability Seminar",
            date: "Nov 2, 2025",
            time: "3:00 PM",
            location: "Conference Room A",
            attendees: 42,
            category: EventCategory::Seminar,
            joined: true,
            details: EventDetails {
                time_range: "3:00 PM - 5:00 PM",
                max_attendees: 60,
                language: "German",
                organizer: "Green Campus Initiative",
                description: "How the university plans to cut its energy use, and how students can get involved.",
            },
        },
    ]
}

pub fn find_event(events: &[Event], id: EventId) -> Option<&Event> {
    events.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_events() {
        let events = sample_events();
        assert_eq!(events.len(), 5);
        assert_eq!(events.iter().filter(|e| e.joined).count(), 2);
        assert_eq!(find_event(&events, 2).unwrap().title, "React & AI Workshop");
        assert!(find_event(&events, 99).is_none());
    }

    #[test]
    fn test_fill_ratio() {
        let events = sample_events();
        let workshop = find_event(&events, 2).unwrap();
        assert!((workshop.fill_ratio() - 0.67).abs() < f64::EPSILON);
    }
}
