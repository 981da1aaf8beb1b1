//! Modelos del asistente conversacional

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::filters::{RegionFilter, TimeRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Turno previo de la conversación (solo informativo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: String,
}

/// Contexto opcional de la vista desde la que se pregunta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub time_range: Option<TimeRange>,
    pub region: Option<RegionFilter>,
    pub model_id: Option<String>,
}

/// Request del chat
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[validate(length(max = 4000))]
    pub message: String,

    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,

    #[serde(default)]
    pub context: Option<ChatContext>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_history: Vec::new(),
            context: None,
        }
    }
}

/// Respuesta del asistente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    pub timestamp: String,
}

impl ChatReply {
    pub fn new(message: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            timestamp: iso_timestamp(at),
        }
    }
}

/// ISO-8601 en UTC con milisegundos, p.ej. `2025-01-01T10:00:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
