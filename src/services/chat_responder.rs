//! Asistente conversacional por palabras clave
//!
//! Clasifica el mensaje en un tema fijo y devuelve la narrativa asociada.
//! No tiene memoria: el historial y el contexto son solo informativos.

use chrono::Utc;

use crate::models::chat::{ChatReply, ChatRequest};

/// Temas reconocidos, en orden de prioridad de evaluación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    FailureRate,
    Region,
    Forecast,
    Component,
    ServiceCenter,
    Trend,
}

impl Topic {
    pub const PRIORITY: [Topic; 6] = [
        Topic::FailureRate,
        Topic::Region,
        Topic::Forecast,
        Topic::Component,
        Topic::ServiceCenter,
        Topic::Trend,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::FailureRate => &["failure rate", "highest"],
            Topic::Region => &["region", "area"],
            Topic::Forecast => &["forecast", "demand"],
            Topic::Component => &["component", "part"],
            Topic::ServiceCenter => &["service center", "utilization"],
            Topic::Trend => &["trend", "increasing"],
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Topic::FailureRate => "Based on current data, the Model X has the highest failure rate at 8.3%, primarily due to brake system issues concentrated in the South region. The Model 3 follows at 6.2%, with battery management alerts being the most common issue.",
            Topic::Region => "The South region currently shows the highest incident rate with 1,184 active issues across 12,450 vehicles. This is largely attributed to brake system failures in Model X vehicles. The North region has the lowest incident rate at 4.8%.",
            Topic::Forecast => "For the next 7 days, we're forecasting approximately 1,050 service appointments. Peak demand is expected on Tuesday and Wednesday. I recommend ensuring the South Bay and Central Service Point centers are fully staffed during this period.",
            Topic::Component => "The top three components requiring attention are: 1) Brake Systems (18% of all issues), 2) Battery Management Systems (15%), and 3) Suspension components (12%). Brake system issues have increased by 3% over the past 30 days.",
            Topic::ServiceCenter => "Currently, 3 service centers are at high utilization (>85%). The West End Station is at 92% capacity. Consider routing non-urgent cases to the North Plaza Center, which is at 68% utilization.",
            Topic::Trend => "Model X issues are trending up (+12% over 30 days), primarily in brake systems. Model S and Model Y are stable, while Model 3 shows a slight decrease (-4%). The Cybertruck has limited data but shows promising reliability so far.",
        }
    }
}

pub const FALLBACK_REPLY: &str = "I can help you analyze fleet performance, regional trends, component failure rates, service center utilization, and forecasted demand. What specific metrics would you like to explore?";

/// Primer tema cuyo conjunto de palabras clave aparece en el mensaje
pub fn classify(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    Topic::PRIORITY
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|kw| lower.contains(kw)))
}

/// Texto de respuesta para un mensaje
pub fn reply_text(message: &str) -> &'static str {
    classify(message).map(|t| t.reply()).unwrap_or(FALLBACK_REPLY)
}

/// Construir la respuesta completa del asistente
pub fn respond(request: &ChatRequest) -> ChatReply {
    let topic = classify(&request.message);
    log::debug!(
        "💬 Mensaje clasificado como {:?} ({} turnos previos)",
        topic,
        request.conversation_history.len()
    );

    let text = topic.map(|t| t.reply()).unwrap_or(FALLBACK_REPLY);
    ChatReply::new(text, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::{ChatRole, ChatTurn};

    #[test]
    fn test_highest_failure_rate_question() {
        let reply = reply_text("What's our highest failure rate?");
        assert!(reply.contains("Model X"));
        assert!(reply.contains("8.3%"));
    }

    #[test]
    fn test_unmatched_message_gets_fallback() {
        assert_eq!(classify("hello"), None);
        assert_eq!(reply_text("hello"), FALLBACK_REPLY);
        assert_eq!(reply_text(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_priority_order_wins() {
        assert_eq!(classify("forecast by region please"), Some(Topic::Region));
        assert_eq!(classify("demand per component"), Some(Topic::Forecast));
        assert_eq!(classify("highest trend"), Some(Topic::FailureRate));
        assert_eq!(classify("service center utilization trend"), Some(Topic::ServiceCenter));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("SHOW ME THE TREND"), Some(Topic::Trend));
        assert_eq!(classify("Which Area is worst?"), Some(Topic::Region));
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        // "department" contiene "part"
        assert_eq!(classify("ask the department"), Some(Topic::Component));
        assert_eq!(classify("issues are increasing"), Some(Topic::Trend));
    }

    #[test]
    fn test_every_topic_has_a_distinct_reply() {
        for topic in Topic::PRIORITY {
            assert!(!topic.keywords().is_empty());
            for keyword in topic.keywords() {
                assert_eq!(classify(keyword), Some(topic), "keyword '{}'", keyword);
            }
            assert_ne!(topic.reply(), FALLBACK_REPLY);
        }
    }

    #[test]
    fn test_respond_ignores_history_and_stamps_time() {
        let mut request = ChatRequest::new("what is the forecast?");
        request.conversation_history = vec![ChatTurn {
            role: ChatRole::User,
            text: "tell me about components".to_string(),
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        }];
        let reply = respond(&request);

        assert_eq!(reply.message, Topic::Forecast.reply());
        assert!(reply.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&reply.timestamp).is_ok());
    }
}
