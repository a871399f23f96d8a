//! Pixi, the canned campus assistant.
//!
//! [`resolve`] maps free text to a fixed reply by case-insensitive keyword
//! matching. [`Assistant`] holds a chat transcript and simulates thinking
//! time: every sent message schedules its own reply after a random delay,
//! and replies land when [`Assistant::tick`] sees their deadline pass.

use crate::config::{AssistantConfig, ReplyOrder};
use crate::scheduler::Scheduler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

pub const GREETING: &str = "Hi! I'm Pixi, your campus buddy! 🤖 Ask me about your schedule, events, or where to find things on campus.";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "What's my schedule today?",
    "How far is Zentrum?",
    "What's for lunch?",
    "Any events today?",
];

pub const FALLBACK_REPLY: &str = "I'm here to help! You can ask me about your schedule, campus locations, events, or the mensa menu. What would you like to know? 😊";

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Checked top to bottom; the first rule with a matching keyword wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["zentrum", "center", "far"],
        reply: "Zentrum ist 1.2 km entfernt – etwa 15 Minuten zu Fuß. 🚶‍♂️",
    },
    Rule {
        keywords: &["schedule", "timetable", "class"],
        reply: "You have 3 classes today: Data Structures at 9 AM, Web Development at 11 AM, and AI Fundamentals at 2 PM. 📚",
    },
    Rule {
        keywords: &["mensa", "food", "lunch"],
        reply: "Today's Mensa menu includes Vegetable Curry, Schnitzel with fries, and a special dessert! Open until 3 PM. 🍽️",
    },
    Rule {
        keywords: &["event", "happening"],
        reply: "There's a Career Fair today at 5 PM in the Main Hall, and a Tech Workshop tomorrow at 2 PM! 🎉",
    },
    Rule {
        keywords: &["library", "study"],
        reply: "The library is located in Building A, 2nd floor. Open until 10 PM today. Study rooms can be booked via the app! 📖",
    },
    Rule {
        keywords: &["help", "what can you"],
        reply: "I can help you with:\n• Your class schedule\n• Campus locations & directions\n• Mensa menu\n• Upcoming events\n• Study room bookings\n\nJust ask me anything! 💡",
    },
];

/// Canned reply for `message`.
pub fn resolve(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map_or(FALLBACK_REPLY, |rule| rule.reply)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Pixi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug)]
struct PendingReply {
    seq: u64,
    reply: &'static str,
}

/// Chat transcript with simulated reply latency.
pub struct Assistant {
    transcript: Vec<ChatMessage>,
    timers: Scheduler<PendingReply>,
    rng: StdRng,
    delay_ms: std::ops::Range<u64>,
    order: ReplyOrder,
    typing: bool,
    next_id: u64,
    next_seq: u64,
    /// Request order only: fired replies waiting for earlier ones.
    parked: BTreeMap<u64, &'static str>,
    next_to_deliver: u64,
}

impl Assistant {
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic delays, for tests.
    pub fn with_rng(config: &AssistantConfig, rng: StdRng) -> Self {
        let mut assistant = Self {
            transcript: Vec::new(),
            timers: Scheduler::new(),
            rng,
            delay_ms: config.delay_range_ms(),
            order: config.reply_order,
            typing: false,
            next_id: 0,
            next_seq: 0,
            parked: BTreeMap::new(),
            next_to_deliver: 0,
        };
        assistant.push(Sender::Pixi, GREETING.to_string());
        assistant
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Replies scheduled or parked but not yet in the transcript.
    pub fn pending_replies(&self) -> usize {
        self.timers.len() + self.parked.len()
    }

    /// Quick questions are offered until the first exchange.
    pub fn shows_quick_questions(&self) -> bool {
        self.transcript.len() == 1
    }

    /// Append a user message and schedule Pixi's answer.
    ///
    /// Blank input is ignored and returns false.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(Sender::User, text.to_string());

        let delay = Duration::from_millis(self.rng.gen_range(self.delay_ms.clone()));
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.schedule_in(
            now,
            delay,
            PendingReply {
                seq,
                reply: resolve(text),
            },
        );
        self.typing = true;
        debug!(seq, delay_ms = delay.as_millis() as u64, "Pixi reply scheduled");
        true
    }

    /// Deliver replies whose delay has elapsed. Returns how many landed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.timers.due(now);
        if fired.is_empty() {
            return 0;
        }

        let mut landed = 0;
        for (_, pending) in fired {
            match self.order {
                ReplyOrder::Fire => {
                    self.push(Sender::Pixi, pending.reply.to_string());
                    landed += 1;
                }
                ReplyOrder::Request => {
                    self.parked.insert(pending.seq, pending.reply);
                }
            }
        }
        while let Some(reply) = self.parked.remove(&self.next_to_deliver) {
            self.push(Sender::Pixi, reply.to_string());
            self.next_to_deliver += 1;
            landed += 1;
        }

        if landed > 0 {
            // Any landed reply clears the indicator, even with more in flight
            self.typing = false;
        }
        landed
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.transcript.push(ChatMessage {
            id: self.next_id,
            sender,
            text,
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(order: ReplyOrder) -> Assistant {
        let config = AssistantConfig {
            reply_order: order,
            ..AssistantConfig::default()
        };
        Assistant::with_rng(&config, StdRng::seed_from_u64(7))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn pixi_replies(assistant: &Assistant) -> Vec<&str> {
        assistant
            .transcript()
            .iter()
            .skip(1)
            .filter(|m| m.sender == Sender::Pixi)
            .map(|m| m.text.as_str())
            .collect()
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let mensa = resolve("mensa");
        assert!(mensa.starts_with("Today's Mensa menu"));
        assert_eq!(resolve("MENSA"), mensa);
        assert_eq!(resolve("What's at the Mensa?"), mensa);
    }

    #[test]
    fn test_resolve_fallback() {
        assert_eq!(resolve("hello there"), FALLBACK_REPLY);
        assert_eq!(resolve(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_first_rule_wins() {
        // "class" (schedule) and "food" (mensa) both match; schedule is earlier
        assert!(resolve("food after class?").starts_with("You have 3 classes"));
        // "far" sits inside "how far"; location outranks events
        assert!(resolve("How far is the event?").starts_with("Zentrum"));
    }

    #[test]
    fn test_quick_questions_resolve_to_rules() {
        for question in QUICK_QUESTIONS {
            assert_ne!(resolve(question), FALLBACK_REPLY, "{question}");
        }
    }

    #[test]
    fn test_starts_with_greeting() {
        let assistant = seeded(ReplyOrder::Fire);
        assert_eq!(assistant.transcript().len(), 1);
        assert_eq!(assistant.transcript()[0].text, GREETING);
        assert!(assistant.shows_quick_questions());
        assert!(!assistant.is_typing());
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut assistant = seeded(ReplyOrder::Fire);
        assert!(!assistant.send("   ", Instant::now()));
        assert_eq!(assistant.transcript().len(), 1);
        assert_eq!(assistant.pending_replies(), 0);
    }

    #[test]
    fn test_reply_lands_within_delay_window() {
        let now = Instant::now();
        let mut assistant = seeded(ReplyOrder::Fire);
        assert!(assistant.send("library hours?", now));
        assert!(assistant.is_typing());
        assert!(!assistant.shows_quick_questions());

        assert_eq!(assistant.tick(now + ms(999)), 0);
        assert_eq!(assistant.tick(now + ms(2000)), 1);
        assert!(!assistant.is_typing());
        assert_eq!(pixi_replies(&assistant), vec![resolve("library")]);
    }

    #[test]
    fn test_two_sends_two_replies_fire_order() {
        let now = Instant::now();
        let mut assistant = seeded(ReplyOrder::Fire);
        assistant.send("mensa", now);
        assistant.send("library", now + ms(10));
        assert_eq!(assistant.pending_replies(), 2);

        assistant.tick(now + ms(2100));
        let mut replies = pixi_replies(&assistant);
        replies.sort_unstable();
        let mut expected = vec![resolve("mensa"), resolve("library")];
        expected.sort_unstable();
        assert_eq!(replies, expected);
    }

    #[test]
    fn test_request_order_holds_back_later_replies() {
        let now = Instant::now();
        let mut assistant = seeded(ReplyOrder::Request);
        for (i, text) in ["mensa", "library", "events?"].iter().enumerate() {
            assistant.send(text, now + ms(i as u64));
        }

        // Tick every 10 ms; whatever fires early must wait for its turn
        let mut t = now;
        while assistant.pending_replies() > 0 {
            t += ms(10);
            assistant.tick(t);
            let replies = pixi_replies(&assistant);
            let expected = [resolve("mensa"), resolve("library"), resolve("events?")];
            assert_eq!(replies, expected[..replies.len()].to_vec());
        }
        assert_eq!(pixi_replies(&assistant).len(), 3);
        assert!(t <= now + ms(2100));
    }

    #[test]
    fn test_typing_clears_on_first_reply() {
        let now = Instant::now();
        let config = AssistantConfig {
            min_delay_ms: 1000,
            max_delay_ms: 1001,
            reply_order: ReplyOrder::Fire,
        };
        let mut assistant = Assistant::with_rng(&config, StdRng::seed_from_u64(1));
        assistant.send("help", now);
        assistant.send("mensa", now + ms(500));

        assert_eq!(assistant.tick(now + ms(1000)), 1);
        assert!(!assistant.is_typing());
        assert_eq!(assistant.pending_replies(), 1);
        assert_eq!(assistant.tick(now + ms(1500)), 1);
        assert_eq!(assistant.transcript().len(), 5);
    }
}
