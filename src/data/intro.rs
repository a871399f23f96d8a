//! Splash, onboarding and login copy.

pub const SPLASH_TAGLINE: &str = "Simplify Campus Life. Amplify Engagement.";
pub const MOTTO: [&str; 2] = [
    "Von Studierenden. Für Studierende. Für alle.",
    "Denn die beste Technologie bleibt menschlich.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "One app for your campus life",
        description: "Access your timetable, events, mensa menu, and campus news all in one place.",
    },
    Slide {
        title: "Ask Pixi anything",
        description: "Your AI-powered campus assistant is here to help with schedules, locations, and more.",
    },
    Slide {
        title: "Stay connected. Stay updated.",
        description: "Join the social wall, discover events, and connect with your campus community.",
    },
];
