//! Birthday sonnet generation.
//!
//! The generator is a trait so the runner can be exercised with a scripted
//! poet; [`ClaudePoet`] is the production implementation.

use std::sync::Arc;

use async_trait::async_trait;
use claude::{Claude, Message, Request};

use crate::config::CelebrationConfig;
use crate::error::GenerationError;
use crate::event::TargetEvent;

/// The user turn sent alongside the system prompt.
pub const INSTRUCTION: &str = "Hoy es mi cumpleaños";

/// Stands in for newlines in a prepared poem.
///
/// Unicode LINE SEPARATOR: displays split on it, and it never appears in
/// model output on its own.
pub const LINE_BREAK: char = '\u{2028}';

const TEMPERATURE: f32 = 1.0;
const MAX_TOKENS: usize = 1024;

/// Everything the poet needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemRequest {
    pub name: String,
    pub age: u32,
    pub theme: String,
    pub instruction: String,
}

impl PoemRequest {
    pub fn new(name: impl Into<String>, age: u32, theme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            theme: theme.into(),
            instruction: INSTRUCTION.to_string(),
        }
    }

    /// Request for `event`, with the age it turns this cycle.
    pub fn for_event(event: &TargetEvent, age: u32) -> Self {
        Self::new(event.full_name.clone(), age, event.theme.clone())
    }

    /// Reject arguments no prompt can be built from.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.name.trim().is_empty() {
            return Err(GenerationError::InvalidValue("honoree name is empty".into()));
        }
        if self.theme.trim().is_empty() {
            return Err(GenerationError::InvalidValue("poem theme is empty".into()));
        }
        if self.instruction.trim().is_empty() {
            return Err(GenerationError::InvalidValue("instruction is empty".into()));
        }
        Ok(())
    }

    pub fn system_prompt(&self) -> String {
        let PoemRequest {
            name, age, theme, ..
        } = self;
        format!(
            "Eres un poeta experto en escribir sonetos. Tu dominio de la lengua castellana es total.\n\
             Tu misión es dedicar un soneto a {name} por su cumpleaños.\n\
             El soneto debe seguir el siguiente esquema de rima: ABBA ABBA CDC DCD\n\
             La rima del soneto debe de ser consonante.\n\
             La temática del soneto debe girar en torno a: {theme}.\n\
             {name} cumple hoy {age} años.\n"
        )
    }
}

/// Source of birthday poems.
#[async_trait]
pub trait PoemGenerator: Send + Sync {
    /// Produce the raw poem text.
    async fn generate(&self, request: &PoemRequest) -> Result<String, GenerationError>;
}

#[async_trait]
impl<G: PoemGenerator + ?Sized> PoemGenerator for Arc<G> {
    async fn generate(&self, request: &PoemRequest) -> Result<String, GenerationError> {
        (**self).generate(request).await
    }
}

/// Replace every newline with [`LINE_BREAK`] and trim surrounding space.
pub fn prepare_response(raw: &str) -> String {
    raw.trim()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', &LINE_BREAK.to_string())
}

/// Validate, generate and prepare a poem.
///
/// This is the single call site for the generator: every failure comes
/// back as a tagged [`GenerationError`], and an empty poem counts as a
/// provider failure.
pub async fn request_poem<G: PoemGenerator + ?Sized>(
    generator: &G,
    request: &PoemRequest,
) -> Result<String, GenerationError> {
    request.validate()?;

    tracing::info!(name = %request.name, age = request.age, "requesting birthday poem");
    let raw = generator.generate(request).await?;

    let poem = prepare_response(&raw);
    if poem.is_empty() {
        return Err(GenerationError::Provider("the model returned no text".into()));
    }
    tracing::info!(chars = poem.chars().count(), "poem received");
    Ok(poem)
}

/// Poem generator backed by the Claude Messages API.
///
/// A missing API key is not an error until a poem is actually requested.
pub struct ClaudePoet {
    client: Option<Claude>,
}

impl ClaudePoet {
    pub fn new(client: Claude) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn from_config(config: &CelebrationConfig) -> Self {
        let client = config.api_key.as_deref().map(|key| {
            let client = Claude::new(key);
            match &config.model {
                Some(model) => client.with_model(model.clone()),
                None => client,
            }
        });
        Self { client }
    }

    fn build_request(request: &PoemRequest) -> Request {
        Request::new(vec![Message::user(request.instruction.clone())])
            .with_system(request.system_prompt())
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_TOKENS)
    }
}

#[async_trait]
impl PoemGenerator for ClaudePoet {
    async fn generate(&self, request: &PoemRequest) -> Result<String, GenerationError> {
        let client = self.client.as_ref().ok_or(claude::Error::NoApiKey)?;
        let response = client.complete(Self::build_request(request)).await?;
        tracing::debug!(
            id = %response.id,
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion finished"
        );
        if response.is_truncated() {
            tracing::warn!(
                output_tokens = response.usage.output_tokens,
                "sonnet hit the token limit and may be cut short"
            );
        }
        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_mentions_everything() {
        let request = PoemRequest::new("Siro Bayón", 39, "Metallica en Zaragoza");
        let prompt = request.system_prompt();
        assert!(prompt.contains("soneto a Siro Bayón"));
        assert!(prompt.contains("ABBA ABBA CDC DCD"));
        assert!(prompt.contains("Metallica en Zaragoza"));
        assert!(prompt.contains("cumple hoy 39 años"));
        assert_eq!(request.instruction, INSTRUCTION);
    }

    #[test]
    fn test_for_event_uses_cycle_age() {
        let event = TargetEvent::default();
        let request = PoemRequest::for_event(&event, 41);
        assert_eq!(request.age, 41);
        assert_eq!(request.name, event.full_name);
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(PoemRequest::new("Siro", 39, "tema").validate().is_ok());
        assert!(matches!(
            PoemRequest::new("  ", 39, "tema").validate(),
            Err(GenerationError::InvalidValue(_))
        ));
        assert!(matches!(
            PoemRequest::new("Siro", 39, "").validate(),
            Err(GenerationError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_prepare_response_replaces_newlines() {
        let prepared = prepare_response("\nVerso uno\r\nVerso dos\nVerso tres\n");
        assert!(!prepared.contains('\n'));
        assert!(!prepared.contains('\r'));
        let lines: Vec<&str> = prepared.split(LINE_BREAK).collect();
        assert_eq!(lines, vec!["Verso uno", "Verso dos", "Verso tres"]);
    }

    #[test]
    fn test_build_request() {
        let request = ClaudePoet::build_request(&PoemRequest::new("Siro", 39, "tema"));
        assert_eq!(request.temperature, Some(1.0));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].text, INSTRUCTION);
        assert!(request.system.unwrap().contains("Siro"));
    }

    #[tokio::test]
    async fn test_missing_key_is_invalid_value() {
        let poet = ClaudePoet { client: None };
        let result = poet.generate(&PoemRequest::new("Siro", 39, "tema")).await;
        assert!(matches!(result, Err(GenerationError::InvalidValue(_))));
    }
}
