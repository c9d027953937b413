//! Prompt construction for title generation.
//!
//! Wording, language, count and style all vary between deployments, so the
//! templates are plain strings with `{count}`, `{language}`, `{style}` and
//! `{topic}` placeholders rather than hard-coded text.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_TEMPLATE: &str = "Generate {count} short catchy {style} titles in {language}. \
Return one title per line without any extra commentary.";
pub const DEFAULT_USER_TEMPLATE: &str = "Topic: {topic}";
pub const DEFAULT_STYLE: &str = "Snapchat video";

/// A rendered prompt: system instructions plus the user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: String,
}

impl Prompt {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            system: None,
            user: text.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Values substituted into a [`PromptTemplate`].
#[derive(Debug, Clone)]
pub struct TitleParams {
    pub topic: String,
    pub language: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub system: String,
    pub user: String,
    pub style: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM_TEMPLATE.to_string(),
            user: DEFAULT_USER_TEMPLATE.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn render(&self, params: &TitleParams) -> Prompt {
        let system = self.fill(&self.system, params);
        let system = system.trim();

        Prompt {
            system: (!system.is_empty()).then(|| system.to_string()),
            user: self.fill(&self.user, params),
        }
    }

    fn fill(&self, template: &str, params: &TitleParams) -> String {
        // topic last so a topic containing a placeholder is never expanded
        template
            .replace("{count}", &params.count.to_string())
            .replace("{language}", &params.language)
            .replace("{style}", &self.style)
            .replace("{topic}", &params.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TitleParams {
        TitleParams {
            topic: "home workouts".to_string(),
            language: "English".to_string(),
            count: 10,
        }
    }

    #[test]
    fn default_template_renders_system_and_user() {
        let prompt = PromptTemplate::default().render(&params());

        assert_eq!(
            prompt.system.as_deref(),
            Some(
                "Generate 10 short catchy Snapchat video titles in English. \
                 Return one title per line without any extra commentary."
            )
        );
        assert_eq!(prompt.user, "Topic: home workouts");
    }

    #[test]
    fn custom_template_substitutes_every_placeholder() {
        let template = PromptTemplate {
            system: String::new(),
            user: "Give me {count} {style} titles in {language} about {topic}".to_string(),
            style: "YouTube".to_string(),
        };
        let prompt = template.render(&TitleParams {
            language: "Spanish".to_string(),
            count: 5,
            ..params()
        });

        assert_eq!(prompt.system, None);
        assert_eq!(
            prompt.user,
            "Give me 5 YouTube titles in Spanish about home workouts"
        );
    }

    #[test]
    fn topic_placeholders_are_not_expanded() {
        let prompt = PromptTemplate::default().render(&TitleParams {
            topic: "{count} ways to {style}".to_string(),
            ..params()
        });
        assert_eq!(prompt.user, "Topic: {count} ways to {style}");
    }
}
