//! Mensa menu and timetable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    Vegetarian,
    Vegan,
    Meat,
    Fish,
}

impl Diet {
    pub fn label(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::Meat => "Meat",
            Diet::Fish => "Fish",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u32,
    pub dish: &'static str,
    pub price: &'static str,
    pub allergens: &'static [&'static str],
    pub diet: Diet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Lecture,
    Lab,
    Workshop,
}

impl ClassKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClassKind::Lecture => "Lecture",
            ClassKind::Lab => "Lab",
            ClassKind::Workshop => "Workshop",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSession {
    pub id: u32,
    pub subject: &'static str,
    pub time: &'static str,
    pub room: &'static str,
    pub professor: &'static str,
    pub kind: ClassKind,
}

pub const SPECIAL_OFFER: &str = "Free desserts today! 🍰";
pub const OPENING_HOURS: &str = "11:30 AM - 3:00 PM";
pub const MENSA_LOCATION: &str = "Main Building, Ground Floor";
pub const TIMETABLE_DAY: &str = "Friday, October 24, 2025";

pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            dish: "Pasta Zwickau",
            price: "S: 2,30 € / M: 5,30 € / G: 6,60 €",
            allergens: &["Wheat", "Celery"],
            diet: Diet::Vegetarian,
        },
        MenuItem {
            id: 2,
            dish: "Campusteller Zwickau",
            price: "S: 4,40 € / M: 6,90 € / G: 8,50 €",
            allergens: &["Wheat", "Eggs"],
            diet: Diet::Meat,
        },
        MenuItem {
            id: 3,
            dish: "Heiße Theke Zwickau",
            price: "S: 3,90 € / M: 6,30 € / G: 7,60 €",
            allergens: &["Fish"],
            diet: Diet::Fish,
        },
        MenuItem {
            id: 4,
            dish: "Vegan Buddha Bowl",
            price: "€5.20",
            allergens: &["Sesame", "Soy"],
            diet: Diet::Vegan,
        },
    ]
}

pub fn sample_timetable() -> Vec<ClassSession> {
    vec![
        ClassSession {
            id: 1,
            subject: "Computer Networks",
            time: "9:15 - 10:45 AM",
            room: "305 (Main Building)",
            professor: "Prof. Fischer, T.",
            kind: ClassKind::Lecture,
        },
        ClassSession {
            id: 2,
            subject: "Database Systems",
            time: "11:00 AM - 12:30 PM",
            room: "201 (Main Building)",
            professor: "Prof. Weber, A.",
            kind: ClassKind::Lab,
        },
        ClassSession {
            id: 3,
            subject: "PTI90220 Advanced Computer Graphics",
            time: "11:20 - 12:50 PM",
            room: "GAB216",
            professor: "Prof. Hellbach, Dr. Baum",
            kind: ClassKind::Lecture,
        },
        ClassSession {
            id: 4,
            subject: "WIW64000 Business Information Systems Gr 2",
            time: "7:30 - 10:50 AM",
            room: "S6103",
            professor: "Prof. Schumann, C.-A.",
            kind: ClassKind::Lab,
        },
    ]
}

/// "4 classes scheduled", "1 class scheduled"
pub fn classes_scheduled_label(count: usize) -> String {
    if count == 1 {
        "1 class scheduled".to_string()
    } else {
        format!("{} classes scheduled", count)
    }
}
