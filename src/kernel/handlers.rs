use std::collections::HashMap;

use super::content;
use crate::corpus::{Language, PhraseCorpus};
use crate::error::ConfigError;

/// A response template in every supported language.
///
/// Templates may carry `{entity}`, `{name}`, `{name_part}`, `{time}`,
/// `{riddle}` and `{assistant}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub hi: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Hindi => self.hi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    Say(Bilingual),
    /// One line picked at random from the active language's list.
    OneOf {
        en: &'static [&'static str],
        hi: &'static [&'static str],
    },
}

impl Reply {
    pub fn choices(&self, language: Language) -> &'static [&'static str] {
        match self {
            Reply::Say(_) => &[],
            Reply::OneOf { en, hi } => match language {
                Language::English => *en,
                Language::Hindi => *hi,
            },
        }
    }
}

/// Session side effect attached to an intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    /// `already` is said instead of the reply when `target` is active.
    SwitchLanguage { target: Language, already: Bilingual },
    RememberName,
    PoseRiddle,
    BeginTranslation,
    EndSession,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntentHandler {
    pub reply: Reply,
    /// Follow-up question when a required entity is missing.
    /// `None` means the intent takes no entity.
    pub clarify: Option<Bilingual>,
    pub action: Action,
}

impl IntentHandler {
    pub fn say(en: &'static str, hi: &'static str) -> Self {
        Self {
            reply: Reply::Say(Bilingual::new(en, hi)),
            clarify: None,
            action: Action::None,
        }
    }

    pub fn one_of(en: &'static [&'static str], hi: &'static [&'static str]) -> Self {
        Self {
            reply: Reply::OneOf { en, hi },
            clarify: None,
            action: Action::None,
        }
    }

    pub fn requires_entity(mut self, en: &'static str, hi: &'static str) -> Self {
        self.clarify = Some(Bilingual::new(en, hi));
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

/// Intent id -> handler record. The dispatcher is a thin loop over this.
#[derive(Debug, Clone, Default)]
pub struct HandlerTable {
    handlers: HashMap<String, IntentHandler>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, intent: &str, handler: IntentHandler) {
        self.handlers.insert(intent.to_string(), handler);
    }

    pub fn get(&self, intent: &str) -> Option<&IntentHandler> {
        self.handlers.get(intent)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Every corpus intent must be answerable.
    pub fn validate(&self, corpus: &PhraseCorpus) -> Result<(), ConfigError> {
        match corpus.intent_ids().find(|id| !self.handlers.contains_key(id.as_str())) {
            Some(missing) => Err(ConfigError::UnhandledIntent(missing.clone())),
            None => Ok(()),
        }
    }

    pub fn builtin() -> Self {
        let mut t = Self::new();

        // Conversational
        t.insert("greeting", IntentHandler::say(
            "Hello{name_part}! How can I help you today?",
            "नमस्ते{name_part}! मैं आपकी क्या सहायता कर सकती हूँ?",
        ));
        t.insert("small_talk_how_are_you", IntentHandler::say(
            "I'm doing great, thanks for asking! Ready for the road.",
            "मैं ठीक हूँ, पूछने के लिए शुक्रिया! सफ़र के लिए तैयार।",
        ));
        t.insert("introduce_self", IntentHandler::say(
            "Got it! Nice to meet you, {name}.",
            "समझ गई! आपसे मिलकर खुशी हुई, {name}.",
        )
        .requires_entity(
            "Sorry, I didn't catch your name. What should I call you?",
            "माफ़ कीजिए, मैं आपका नाम सुन नहीं पाई। मैं आपको क्या बुलाऊं?",
        )
        .with_action(Action::RememberName));
        t.insert("thank_you", IntentHandler::one_of(content::THANKS_EN, content::THANKS_HI));
        t.insert("goodbye", IntentHandler::say(
            "Goodbye{name_part}! Drive safe.",
            "अलविदा{name_part}! सुरक्षित चलाइए।",
        )
        .with_action(Action::EndSession));

        // Language switching
        t.insert("change_language_hi", IntentHandler::say(
            "Alright, I'll speak in Hindi now.",
            "ठीक है, अब मैं हिंदी में बात करूंगी।",
        )
        .with_action(Action::SwitchLanguage {
            target: Language::Hindi,
            already: Bilingual::new(
                "I'm already speaking in Hindi.",
                "मैं पहले से ही हिंदी में बात कर रही हूँ।",
            ),
        }));
        t.insert("change_language_en", IntentHandler::say(
            "Alright, switching back to English.",
            "ठीक है, अब मैं अंग्रेज़ी में बात करूंगी।",
        )
        .with_action(Action::SwitchLanguage {
            target: Language::English,
            already: Bilingual::new(
                "I'm already speaking in English.",
                "मैं पहले से ही अंग्रेज़ी में बात कर रही हूँ।",
            ),
        }));

        // Core features
        t.insert("ask_name", IntentHandler::say(
            "You can call me {assistant}. I'm your friendly co-pilot.",
            "आप मुझे {assistant} बुला सकते हैं। मैं सफ़र में आपकी दोस्त हूँ।",
        ));
        t.insert("ask_creator", IntentHandler::say(
            "I was brought to life by a team of clever developers for the OkDriver project. It's nice to be here!",
            "मुझे OkDriver प्रोजेक्ट के लिए होशियार डेवलपर्स की एक टीम ने बनाया है। यहाँ होकर अच्छा लग रहा है!",
        ));
        t.insert("ask_time", IntentHandler::say(
            "It's {time}.",
            "अभी समय है {time} बजे।",
        ));
        t.insert("ask_weather", IntentHandler::say(
            "Simulated weather for Faridabad is currently pleasant, around 28 degrees Celsius with clear skies.",
            "फ़रीदाबाद में मौसम सुहाना है, लगभग 28 डिग्री सेल्सियस, और आसमान साफ़ है।",
        ));
        t.insert("ask_location", IntentHandler::say(
            "Based on my simulated GPS, we are currently in Faridabad, Haryana, India.",
            "मेरे सिमुलेटेड GPS के अनुसार, हम अभी फ़रीदाबाद, हरियाणा, भारत में हैं।",
        ));
        t.insert("vehicle_status", IntentHandler::say(
            "Simulated status: Everything looks good! Fuel is at 80%, tire pressure is normal, and we're cruising at a safe speed.",
            "सिमुलेटेड स्टेटस: सब ठीक लग रहा है! फ़्यूल 80 प्रतिशत है, टायर प्रेशर सामान्य है, और हम एक सुरक्षित गति पर चल रहे हैं।",
        ));

        // Driver features
        t.insert("ask_fuel_level", IntentHandler::say(
            "Simulated: Your fuel level is at 75%. Plenty for your journey.",
            "सिमुलेटेड: आपका फ़्यूल लेवल 75% है। आपकी यात्रा के लिए काफ़ी है।",
        ));
        t.insert("ask_tire_pressure", IntentHandler::say(
            "Simulated: All tire pressures are normal, around 32 PSI.",
            "सिमुलेटेड: सभी टायरों का प्रेशर सामान्य है, लगभग 32 PSI।",
        ));
        t.insert("increase_temperature", IntentHandler::say(
            "Simulated: Increasing cabin temperature slightly. It's now 22 degrees Celsius.",
            "सिमुलेटेड: केबिन का तापमान थोड़ा बढ़ा रही हूँ। अब यह 22 डिग्री सेल्सियस है।",
        ));
        t.insert("decrease_temperature", IntentHandler::say(
            "Simulated: Decreasing cabin temperature. It's now 19 degrees Celsius.",
            "सिमुलेटेड: केबिन का तापमान घटा रही हूँ। अब यह 19 डिग्री सेल्सियस है।",
        ));
        t.insert("turn_ac_on", IntentHandler::say(
            "Simulated: Turning on the air conditioning.",
            "सिमुलेटेड: एयर कंडीशनिंग चालू कर रही हूँ।",
        ));
        t.insert("turn_ac_off", IntentHandler::say(
            "Simulated: Turning off the air conditioning.",
            "सिमुलेटेड: एयर कंडीशनिंग बंद कर रही हूँ।",
        ));
        t.insert("find_nearest", IntentHandler::say(
            "Simulated: Searching for the nearest {entity}. I found one 2 kilometers away.",
            "सिमुलेटेड: सबसे नज़दीकी {entity} ढूंढ रही हूँ। मुझे 2 किलोमीटर दूर एक मिला।",
        )
        .requires_entity(
            "What are you looking for? (e.g., gas station, restaurant, hospital, parking)",
            "आप क्या ढूंढ रहे हैं? (उदाहरण के लिए, पेट्रोल पंप, रेस्टोरेंट, अस्पताल, पार्किंग)",
        ));
        t.insert("traffic_update", IntentHandler::say(
            "Simulated: Current traffic is light on your route. No major delays reported.",
            "सिमुलेटेड: आपके मार्ग पर वर्तमान यातायात हल्का है। कोई बड़ी देरी नहीं बताई गई है।",
        ));
        t.insert("ask_eta", IntentHandler::say(
            "Simulated: Your estimated time of arrival is 3:30 PM.",
            "सिमुलेटेड: आपके पहुंचने का अनुमानित समय दोपहर 3:30 बजे है।",
        ));
        t.insert("headlights_on", IntentHandler::say(
            "Simulated: Headlights are now on.",
            "सिमुलेटेड: हेडलाइट्स अब चालू हैं।",
        ));
        t.insert("headlights_off", IntentHandler::say(
            "Simulated: Headlights are now off.",
            "सिमुलेटेड: हेडलाइट्स अब बंद हैं।",
        ));

        // Navigation
        t.insert("navigate", IntentHandler::say(
            "Okay, starting simulated navigation to {entity}. Let's go!",
            "ठीक है, {entity} के लिए सिमुलेटेड नेविगेशन शुरू कर रही हूँ। चलिए!",
        )
        .requires_entity(
            "Where would you like to go?",
            "आप कहाँ जाना चाहते हैं?",
        ));
        t.insert("cancel_navigation", IntentHandler::say(
            "Okay, canceling the current navigation.",
            "ठीक है, नेविगेशन रद्द कर रही हूँ।",
        ));

        // Entertainment
        t.insert("tell_joke", IntentHandler::one_of(content::JOKES_EN, content::JOKES_HI));
        t.insert("joke_feedback", IntentHandler::say(
            "Tough crowd! I'll find a better one for next time.",
            "अरे! अगली बार इससे अच्छा जोक सुनाऊंगी।",
        ));
        t.insert("tell_riddle", IntentHandler::say(
            "Here's a riddle for you: {riddle}",
            "ये रही एक पहेली: {riddle}",
        )
        .with_action(Action::PoseRiddle));
        // Only reached when no riddle is pending.
        t.insert("answer_riddle", IntentHandler::say(
            "I haven't asked you a riddle yet. Say 'tell me a riddle' to get one!",
            "मैंने अभी कोई पहेली नहीं पूछी है। 'पहेली सुनाओ' कहिए!",
        ));
        t.insert("tell_fact", IntentHandler::one_of(content::FACTS_EN, content::FACTS_HI));

        // Music
        t.insert("play_music", IntentHandler::say(
            "Simulated: Playing some relaxing tunes for your drive.",
            "सिमुलेटेड: आपकी ड्राइव के लिए थोड़ा आरामदायक संगीत बजा रही हूँ।",
        ));
        t.insert("pause_music", IntentHandler::say(
            "Simulated: Music paused.",
            "सिमुलेटेड: संगीत रोक दिया गया है।",
        ));
        t.insert("next_song", IntentHandler::say(
            "Simulated: Skipping to the next song.",
            "सिमुलेटेड: अगले गाने पर जा रही हूँ।",
        ));
        t.insert("previous_song", IntentHandler::say(
            "Simulated: Going back to the previous song.",
            "सिमुलेटेड: पिछले गाने पर जा रही हूँ।",
        ));
        t.insert("volume_up", IntentHandler::say(
            "Simulated: Turning volume up.",
            "सिमुलेटेड: आवाज़ बढ़ा रही हूँ।",
        ));
        t.insert("volume_down", IntentHandler::say(
            "Simulated: Turning volume down.",
            "सिमुलेटेड: आवाज़ कम कर रही हूँ।",
        ));

        // Calls and messages
        t.insert("make_call", IntentHandler::say(
            "Simulated: Calling {entity}. This is a demo feature.",
            "सिमुलेटेड: {entity} को कॉल कर रही हूँ। यह एक डेमो फ़ीचर है।",
        )
        .requires_entity("Whom would you like to call?", "किसको कॉल करना चाहते हैं?"));
        t.insert("send_message", IntentHandler::say(
            "Simulated: Sending a message to {entity}. What's the message?",
            "सिमुलेटेड: {entity} को मैसेज भेज रही हूँ। क्या मैसेज है?",
        )
        .requires_entity("Whom should I send the message to?", "किसको मैसेज भेजना है?"));

        // Utility
        t.insert("translate", IntentHandler::say(
            "Sure. What would you like me to translate?",
            "ज़रूर। क्या अनुवाद करना है?",
        )
        .with_action(Action::BeginTranslation));
        t.insert("help", IntentHandler::say(
            "I can tell you the time, weather, share jokes or facts, and simulate navigation, music control, calls, or messages. I can also help with car status, temperature, and finding nearby places. You can switch my language to Hindi. Just ask!",
            "मैं आपको समय, मौसम, जोक्स या तथ्य बता सकती हूँ, और नेविगेशन, संगीत, कॉल, या मैसेज को सिमुलेट कर सकती हूँ। मैं गाड़ी की स्थिति, तापमान और आस-पास की जगहें ढूंढने में भी मदद कर सकती हूँ। आप मेरी भाषा हिंदी में भी बदल सकते हैं। बस पूछिए!",
        ));
        t.insert("emergency", IntentHandler::say(
            "This is a serious situation. Please contact emergency services directly. I cannot make real calls.",
            "यह गंभीर स्थिति है। कृपया सीधे आपातकालीन सेवाओं से संपर्क करें। मैं असली कॉल नहीं कर सकती।",
        ));
        t.insert("set_reminder", IntentHandler::say(
            "Simulated: Okay, I'll remind you to {entity}.",
            "सिमुलेटेड: ठीक है, मैं आपको {entity} के लिए याद दिलाऊंगी।",
        )
        .requires_entity("What should I remind you about?", "किस बारे में याद दिलाऊं?"));
        t.insert("open_app", IntentHandler::say(
            "Simulated: Opening {entity}. This is a demo feature.",
            "सिमुलेटेड: {entity} खोल रही हूँ। यह एक डेमो फ़ीचर है।",
        )
        .requires_entity("Which app would you like to open?", "कौन सा ऐप खोलना चाहते हैं?"));
        t.insert("what_is", IntentHandler::say(
            "Simulated: Searching for '{entity}'. For the demo, I'll say it's an important concept!",
            "सिमुलेटेड: '{entity}' की जानकारी ढूंढ रही हूँ। डेमो के लिए, मैं कहूंगी यह एक महत्वपूर्ण अवधारणा है!",
        )
        .requires_entity("What would you like to know about?", "किस बारे में जानना चाहते हैं?"));

        t
    }
}
