//! Display data handed to the view fragments by the hosting app.

use serde::{Deserialize, Serialize};
use studydeck_tokens::ColorValue;
use studydeck_tokens::colors::MODULES;

/// Dashboard module a timeline entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Courses, grades and assignments.
    Academics,
    /// Health and wellbeing check-ins.
    Wellness,
    /// Research sessions.
    Research,
    /// Internships and applications.
    Career,
    /// Clubs and events.
    Social,
}

impl ModuleKind {
    /// Accent color from the module palette.
    #[must_use]
    pub const fn color(self) -> ColorValue {
        match self {
            Self::Academics => MODULES.academics,
            Self::Wellness => MODULES.wellness,
            Self::Research => MODULES.research,
            Self::Career => MODULES.career,
            Self::Social => MODULES.social,
        }
    }

    /// Utility class for the timeline marker dot.
    #[must_use]
    pub const fn marker_class(self) -> &'static str {
        match self {
            Self::Academics => "bg-[color:var(--color-module-academics)]",
            Self::Wellness => "bg-[color:var(--color-module-wellness)]",
            Self::Research => "bg-[color:var(--color-module-research)]",
            Self::Career => "bg-[color:var(--color-module-career)]",
            Self::Social => "bg-[color:var(--color-module-social)]",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Academics => "Academics",
            Self::Wellness => "Wellness",
            Self::Research => "Research",
            Self::Career => "Career",
            Self::Social => "Social",
        }
    }
}

/// One entry on the activity timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Stable identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Optional supporting line.
    pub detail: Option<String>,
    /// Display time (already formatted by the host).
    pub time: String,
    /// Module the entry belongs to.
    pub module: ModuleKind,
}

/// Id of the entry the timeline highlights: the most recent one.
///
/// Entries arrive in chronological order, so that is the last entry.
#[must_use]
pub fn current_entry_id(entries: &[TimelineEntry]) -> Option<&str> {
    entries.last().map(|entry| entry.id.as_str())
}

/// A saved research session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSession {
    /// Stable identifier.
    pub id: String,
    /// Session title.
    pub title: String,
    /// One-line summary.
    pub summary: String,
    /// Display timestamp of the last update.
    pub updated: String,
    /// Number of messages in the conversation.
    pub message_count: u32,
}

/// Who wrote a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The student.
    User,
    /// The research assistant.
    Assistant,
}

impl MessageRole {
    /// Author label shown above the bubble.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// One message in a research conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Author.
    pub role: MessageRole,
    /// Message text.
    pub body: String,
}

/// A note pinned to a research session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionNote {
    /// Stable identifier.
    pub id: String,
    /// Note text.
    pub text: String,
}

/// Demo timeline used before the host wires real data.
#[must_use]
pub fn demo_timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            id: "t1".to_string(),
            title: "Submitted Linear Algebra problem set 4".to_string(),
            detail: Some("Graded within 3 days".to_string()),
            time: "09:12".to_string(),
            module: ModuleKind::Academics,
        },
        TimelineEntry {
            id: "t2".to_string(),
            title: "Logged a 30 minute run".to_string(),
            detail: None,
            time: "11:40".to_string(),
            module: ModuleKind::Wellness,
        },
        TimelineEntry {
            id: "t3".to_string(),
            title: "Research session: protein folding sources".to_string(),
            detail: Some("12 messages, 3 notes".to_string()),
            time: "14:05".to_string(),
            module: ModuleKind::Research,
        },
        TimelineEntry {
            id: "t4".to_string(),
            title: "Applied to summer lab internship".to_string(),
            detail: Some("Deadline Friday".to_string()),
            time: "16:30".to_string(),
            module: ModuleKind::Career,
        },
    ]
}

/// Demo research sessions.
#[must_use]
pub fn demo_sessions() -> Vec<ResearchSession> {
    vec![
        ResearchSession {
            id: "s1".to_string(),
            title: "Protein folding sources".to_string(),
            summary: "Comparing AlphaFold papers for the lit review".to_string(),
            updated: "Today".to_string(),
            message_count: 12,
        },
        ResearchSession {
            id: "s2".to_string(),
            title: "Thesis outline".to_string(),
            summary: "Chapter structure and methods section".to_string(),
            updated: "Yesterday".to_string(),
            message_count: 27,
        },
        ResearchSession {
            id: "s3".to_string(),
            title: "Stats refresher".to_string(),
            summary: "Mixed models for repeated measures".to_string(),
            updated: "Mon".to_string(),
            message_count: 8,
        },
    ]
}

/// Demo conversation and notes for a session.
#[must_use]
pub fn demo_conversation(session_id: &str) -> (Vec<ConversationMessage>, Vec<SessionNote>) {
    let topic = demo_sessions()
        .into_iter()
        .find(|session| session.id == session_id)
        .map_or_else(|| "this topic".to_string(), |session| session.title);
    let messages = vec![
        ConversationMessage {
            role: MessageRole::User,
            body: format!("Where should I start reading on {topic}?"),
        },
        ConversationMessage {
            role: MessageRole::Assistant,
            body: "Start with the two most-cited review articles, then follow their methods sections.".to_string(),
        },
        ConversationMessage {
            role: MessageRole::User,
            body: "Can you list the key terms I should know first?".to_string(),
        },
    ];
    let notes = vec![
        SessionNote {
            id: format!("{session_id}-n1"),
            text: "Check the library proxy for paywalled reviews".to_string(),
        },
        SessionNote {
            id: format!("{session_id}-n2"),
            text: "Ask advisor about scope on Thursday".to_string(),
        },
    ];
    (messages, notes)
}
