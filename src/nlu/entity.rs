use std::collections::HashMap;

/// How a trigger phrase is located in the utterance and what is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Utterance must start with the trigger; the tail is the entity.
    Prefix,
    /// Trigger may appear anywhere; it is cut out and both sides are kept.
    Contains,
    /// Trigger may appear anywhere; only the text after it is kept.
    After,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityRule {
    pub trigger: String,
    pub mode: MatchMode,
}

impl EntityRule {
    pub fn new(trigger: &str, mode: MatchMode) -> Self {
        Self {
            trigger: trigger.to_string(),
            mode,
        }
    }

    /// Remainder left once the trigger is removed, or `None` if the trigger
    /// does not match or nothing is left.
    pub fn apply(&self, text: &str) -> Option<String> {
        let remainder = match self.mode {
            MatchMode::Prefix => text.strip_prefix(self.trigger.as_str())?.to_string(),
            MatchMode::Contains => {
                let at = text.find(self.trigger.as_str())?;
                format!("{} {}", &text[..at], &text[at + self.trigger.len()..])
            }
            MatchMode::After => {
                let at = text.find(self.trigger.as_str())?;
                text[at + self.trigger.len()..].to_string()
            }
        };

        let entity = remainder.split_whitespace().collect::<Vec<_>>().join(" ");
        if entity.is_empty() {
            None
        } else {
            Some(entity)
        }
    }
}

/// Ordered trigger-phrase rules per intent.
///
/// Rules for an intent are tried in declaration order and the first one
/// leaving a non-empty remainder wins. This is string surgery on the
/// normalized utterance, not parsing.
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor {
    rules: HashMap<String, Vec<EntityRule>>,
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, intent: &str, triggers: &[&str], mode: MatchMode) -> Self {
        self.rules
            .entry(intent.to_string())
            .or_default()
            .extend(triggers.iter().map(|t| EntityRule::new(t, mode)));
        self
    }

    /// `text` is expected to be normalized already (see [`super::Utterance`]).
    pub fn extract(&self, intent: &str, text: &str) -> Option<String> {
        self.rules
            .get(intent)?
            .iter()
            .find_map(|rule| rule.apply(text))
    }

    pub fn rules_for(&self, intent: &str) -> &[EntityRule] {
        self.rules.get(intent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Trigger table for the in-car intents, English and Hindi.
    ///
    /// Prefix rules for destinations and places. Everything else is
    /// matched anywhere in the utterance; bare triggers like "call" come
    /// after the longer ones so "make a call to ravi" yields "ravi".
    pub fn builtin() -> Self {
        use MatchMode::*;

        Self::new()
            .with_rules(
                "navigate",
                &[
                    "navigate to", "take me to", "mujhe le jao", "get directions to",
                    "mujhe jana hai", "chalo", "go to", "drive to", "mujhe ghar le chalo",
                    "mujhe hospital le jaao", "navigasyon shuru karo", "rasta batao",
                    "navigated to", "मुझे ले जाओ", "मुझे जाना है", "चलो", "मुझे घर ले चलो",
                    "मुझे अस्पताल ले जाओ", "नेविगेशन शुरू करो", "रास्ता बताओ", "नेविगेट करो",
                ],
                Prefix,
            )
            .with_rules(
                "introduce_self",
                &["my name is", "i am", "मेरा नाम है", "मैं हूँ"],
                After,
            )
            .with_rules(
                "make_call",
                &["make a call to", "call someone", "फ़ोन लगा दो", "किसी को कॉल करो", "call"],
                Contains,
            )
            .with_rules(
                "send_message",
                &["send a message to", "send message to", "मैसेज भेजो", "send message", "text"],
                Contains,
            )
            .with_rules(
                "set_reminder",
                &["remind me to", "मुझे याद दिलाओ", "set a reminder for", "set a reminder to"],
                Contains,
            )
            .with_rules("open_app", &["open", "ऐप खोलो", "launch"], Contains)
            .with_rules("what_is", &["what is", "क्या है", "define"], Contains)
            .with_rules(
                "find_nearest",
                &[
                    "find nearest", "where is the nearest", "locate nearest",
                    "सबसे नज़दीकी कहाँ है", "नज़दीकी ढूंढो",
                ],
                Prefix,
            )
    }
}
