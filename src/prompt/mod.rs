// src/prompt/mod.rs
// Prompt construction for the two proxy endpoints. Everything here is pure:
// fixed instruction templates, mood style phrases, and the concatenation
// rules the handlers apply before calling upstream.

use serde::{Deserialize, Serialize};

/// Which instruction template the text proxy should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptKind {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "rant-response")]
    RantResponse,
}

/// Mood labels a journal entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Angry,
    Anxious,
}

/// Returned in place of upstream text when the response shape is unusable.
pub const APOLOGY: &str =
    "I couldn't generate a response at the moment. Please try again later.";

/// Shown by clients when the proxy call itself fails and there is no reply.
pub const FALLBACK_RANT_REPLY: &str = "I'm having trouble responding right now, \
     but I'm here to listen. Feel free to continue sharing your thoughts.";

const DAILY_INSTRUCTION: &str = "Generate a thoughtful, reflective journal prompt \
     that encourages self-reflection and mindfulness. Keep it concise and inspiring.";

const RANT_INSTRUCTION: &str = "The user has shared a rant or frustration. Provide \
     a compassionate, understanding response that acknowledges their feelings and \
     offers gentle perspective or encouragement. Be supportive without being dismissive.";

/// Content shorter than this is not reflected in the artwork prompt.
const ARTWORK_CONTENT_MIN_CHARS: usize = 10;

/// At most this many characters of entry content make it into the artwork prompt.
const ARTWORK_EXCERPT_CHARS: usize = 100;

pub fn instruction(kind: PromptKind) -> &'static str {
    match kind {
        PromptKind::Daily => DAILY_INSTRUCTION,
        PromptKind::RantResponse => RANT_INSTRUCTION,
    }
}

/// Instruction template plus the user's content when present.
pub fn build_text_prompt(kind: PromptKind, content: Option<&str>) -> String {
    match content {
        Some(content) if !content.is_empty() => {
            format!("{}\n\nUser content: {}", instruction(kind), content)
        }
        _ => instruction(kind).to_string(),
    }
}

/// Base style phrase when no recognized mood accompanies the request.
pub const DEFAULT_BASE_PHRASE: &str = "Create a calming digital artwork";

/// Base style phrase for each mood.
pub fn base_phrase(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "Create a bright, joyful digital artwork with warm colors",
        Mood::Calm => "Create a serene, peaceful digital artwork with soft blues and greens",
        Mood::Neutral => "Create a balanced, harmonious digital artwork with neutral tones",
        Mood::Sad => "Create a gentle, comforting digital artwork with soft purples and blues",
        Mood::Angry => {
            "Create a transformative digital artwork that channels intense emotions into beauty"
        }
        Mood::Anxious => {
            "Create a grounding, reassuring digital artwork with stabilizing patterns"
        }
    }
}

/// Mood base phrase (calming default when the mood is absent), with an
/// excerpt of the entry appended when the entry is long enough to carry a
/// theme.
pub fn build_artwork_prompt(content: &str, mood: Option<Mood>) -> String {
    let base = mood.map_or(DEFAULT_BASE_PHRASE, base_phrase);
    if content.chars().count() > ARTWORK_CONTENT_MIN_CHARS {
        let excerpt: String = content.chars().take(ARTWORK_EXCERPT_CHARS).collect();
        format!("{} that reflects: {}", base, excerpt)
    } else {
        base.to_string()
    }
}
