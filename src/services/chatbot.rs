use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;

pub const GREETING_REPLY: &str = "سلام! چطور می‌تونم کمکت کنم؟";
pub const QUESTION_REPLY: &str = "سوال جالبی پرسیدی! می‌تونی بیشتر توضیح بدی؟";
pub const GRATITUDE_REPLY: &str = "خواهش می‌کنم! 😊";
pub const APOLOGY_REPLY: &str = "متأسفانه خطایی رخ داد. لطفاً دوباره تلاش کنید.";

pub const FILLER_REPLIES: [&str; 5] = [
    "جالب! بیشتر بگو...",
    "میشه بیشتر توضیح بدی؟",
    "من در حال یادگیری هستم!",
    "چیز جالبی گفتی!",
    "میشه این رو بیشتر توضیح بدی؟",
];

const GREETING_TOKENS: [&str; 4] = ["سلام", "salam", "hi", "hello"];
const GRATITUDE_TOKENS: [&str; 3] = ["ممنون", "تشکر", "thanks"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Question,
    Gratitude,
    Unknown,
}

/// Classify a message. Plain substring containment, first rule wins.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if GREETING_TOKENS.iter().any(|t| msg_lower.contains(t)) {
        Intent::Greeting
    } else if msg_lower.contains("چی") || msg.contains('؟') || msg.contains('?') {
        Intent::Question
    } else if GRATITUDE_TOKENS.iter().any(|t| msg_lower.contains(t)) {
        Intent::Gratitude
    } else {
        Intent::Unknown
    }
}

/// Reply to `user_msg`, drawing filler replies from `rng`.
pub fn generate_reply_with<R: Rng + ?Sized>(user_msg: &str, rng: &mut R) -> String {
    use Intent::*;

    let reply = match detect_intent(user_msg) {
        Greeting => GREETING_REPLY,
        Question => QUESTION_REPLY,
        Gratitude => GRATITUDE_REPLY,
        Unknown => FILLER_REPLIES.choose(rng).copied().unwrap_or(FILLER_REPLIES[0]),
    };

    reply.to_string()
}

/// Reply to `user_msg` using the thread-local generator.
pub fn generate_reply(user_msg: &str) -> String {
    generate_reply_with(user_msg, &mut rand::thread_rng())
}

/// Reply to a decoded `message` field.
///
/// Never fails: a message that is not a string is logged and answered
/// with [`APOLOGY_REPLY`].
pub fn respond(message: &Value) -> String {
    match message.as_str() {
        Some(text) => generate_reply(text),
        None => {
            tracing::error!("Error generating response: message is not a string: {}", message);
            APOLOGY_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_message_is_unknown() {
        assert_eq!(detect_intent(""), Intent::Unknown);
        let mut rng = StdRng::seed_from_u64(7);
        let reply = generate_reply_with("", &mut rng);
        assert!(FILLER_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn non_string_message_gets_apology() {
        assert_eq!(respond(&Value::Null), APOLOGY_REPLY);
        assert_eq!(respond(&serde_json::json!(123)), APOLOGY_REPLY);
        assert_eq!(respond(&serde_json::json!(["hello"])), APOLOGY_REPLY);
        assert_eq!(respond(&serde_json::json!("thanks")), GRATITUDE_REPLY);
    }

    #[test]
    fn persian_question_word() {
        assert_eq!(detect_intent("این چیه"), Intent::Question);
        assert_eq!(detect_intent("خوبی؟"), Intent::Question);
    }
}
