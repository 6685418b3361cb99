//! Canned entertainment content: jokes, facts, riddles, thank-you lines.

use crate::corpus::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const THANKS_EN: &[&str] = &["You're welcome!", "Anytime!", "Glad I could help!"];
pub const THANKS_HI: &[&str] = &["कोई बात नहीं!", "आपका स्वागत है।", "खुशी हुई मदद करके!"];

pub const JOKES_EN: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "I told my wife she should embrace her mistakes. She gave me a hug.",
    "What do you call a fake noodle? An Impasta!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "What do you call a pile of cats? A meowtain!",
    "I'm reading a book about anti-gravity. It's impossible to put down!",
];

pub const JOKES_HI: &[&str] = &[
    "टीचर: 'बच्चों, मुश्किल का सामना हिम्मत से करना चाहिए।' पप्पू: 'सर, कल रात मैंने मुश्किल का सामना हिम्मत से किया, पर मुश्किल के पापा ने मुझे बहुत मारा!'",
    "सांता: 'यार, मैं अपनी कार की चाबी ढूंढ रहा हूं।' बंता: 'अरे, कार में ही चेक कर लो।' सांता: 'नहीं कर सकता, कार तो लॉक है!'",
    "टीचर: 'तुम्हारा सबसे अच्छा दोस्त कौन है?' छात्र: 'मेरी किताब।' टीचर: 'अच्छा, यह बताओ कि अगर मैं तुम्हारी किताब छीन लूं, तो?' छात्र: 'तो आप मेरे सबसे अच्छे दोस्त बन जाएंगे!'",
    "मरीज: 'डॉक्टर साहब, मुझे नींद नहीं आती।' डॉक्टर: 'तो सोने की कोशिश क्यों नहीं करते?' मरीज: 'वही तो कर रहा हूं, लेकिन फिर नींद नहीं आती!'",
];

pub const FACTS_EN: &[&str] = &[
    "A single cloud can weigh more than a million pounds.",
    "The unicorn is the national animal of Scotland.",
    "Bananas are berries, but strawberries aren't.",
    "Honey never spoils.",
    "A group of owls is called a parliament.",
    "The average person walks the equivalent of three times around the world in their lifetime.",
    "Bees can fly higher than Mount Everest.",
];

pub const FACTS_HI: &[&str] = &[
    "ऊंट (camel) के दूध का दही नहीं जमता।",
    "अंटार्कटिका में चींटियां (ants) नहीं पाई जाती हैं।",
    "इंसान के शरीर की सबसे छोटी हड्डी कान में होती है।",
    "बिल्लियां (cats) 1000 से ज्यादा अलग-अलग आवाजें निकाल सकती हैं।",
    "इंसान का दिल एक दिन में लगभग 100,000 बार धड़कता है।",
    "नीली व्हेल (blue whale) पृथ्वी पर सबसे बड़ा जानवर है।",
];

pub const RIDDLES_EN: &[Riddle] = &[
    Riddle {
        question: "I have cities, but no houses. I have mountains, but no trees. I have water, but no fish. What am I?",
        answer: "A map",
    },
    Riddle {
        question: "I speak without a mouth and hear without ears. I have no body, but I come alive with wind. What am I?",
        answer: "An echo",
    },
    Riddle {
        question: "What has to be broken before you can use it?",
        answer: "An egg",
    },
    Riddle {
        question: "What is full of holes but still holds water?",
        answer: "A sponge",
    },
];

pub const RIDDLES_HI: &[Riddle] = &[
    Riddle {
        question: "ऐसी कौन सी चीज है जो पानी पीते ही मर जाती है?",
        answer: "प्यास (Thirst)",
    },
    Riddle {
        question: "वह कौन सी चीज़ है जो जितनी ज्यादा बढ़ती है, उतनी ही कम होती जाती है?",
        answer: "उम्र (Age)",
    },
    Riddle {
        question: "जितनी ज्यादा तुम मुझे निकालोगे, उतनी ही मैं बड़ी होती जाऊंगी। मैं क्या हूँ?",
        answer: "एक गड्ढा (A hole)",
    },
    Riddle {
        question: "कटने पर तुम रोते हो, मुझे बिना खाए कोई नहीं रह सकता। मैं क्या हूँ?",
        answer: "प्याज (Onion)",
    },
];

pub fn riddles(language: Language) -> &'static [Riddle] {
    match language {
        Language::English => RIDDLES_EN,
        Language::Hindi => RIDDLES_HI,
    }
}
