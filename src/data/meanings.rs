//! Meanings template: the empty topic/orientation structure filled into cards
//! whose `meanings` field carries nothing yet.

use std::fmt;

use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Love,
    Career,
    Relationship,
    Health,
    SelfExploration,
}

impl Topic {
    /// Canonical order of topics in a written `meanings` object.
    pub const ALL: [Topic; 5] = [
        Topic::Love,
        Topic::Career,
        Topic::Relationship,
        Topic::Health,
        Topic::SelfExploration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::SelfExploration => "self-exploration",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Upright, Orientation::Reversed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upright => "upright",
            Self::Reversed => "reversed",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build a fresh empty meanings structure. Every call returns an independent value.
pub fn default_meanings() -> Value {
    let mut topics = Map::new();
    for topic in Topic::ALL {
        let mut orientations = Map::new();
        for orientation in Orientation::ALL {
            orientations.insert(
                orientation.as_str().to_string(),
                json!({ "summary": "", "details": [] }),
            );
        }
        topics.insert(topic.as_str().to_string(), Value::Object(orientations));
    }
    Value::Object(topics)
}

/// Top-level emptiness test for a card's `meanings` field.
/// Missing, null, false, zero, "", [] and {} count as empty; any object with a key does not,
/// whatever its contents.
pub fn is_empty_meanings(meanings: Option<&Value>) -> bool {
    match meanings {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |v| v == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}
