use chrono::{DateTime, Utc};

use crate::{
    foundation::error::{BlueboardError, BlueboardResult},
    generate::classify::GenerationParameters,
    scene::model::{AnimationKind, AnimationObject},
};

/// The animation part of a content record.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(default)]
    pub objects: Vec<AnimationObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<AnimationKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<GenerationParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
}

impl AnimationConfig {
    pub fn validate(&self) -> BlueboardResult<()> {
        for obj in &self.objects {
            obj.validate()?;
        }
        Ok(())
    }
}

fn default_public() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub animation_config: AnimationConfig,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl NewContent {
    pub fn validate(&self) -> BlueboardResult<()> {
        if self.title.trim().is_empty() {
            return Err(BlueboardError::validation("title must be non-empty"));
        }
        if self.subject.trim().is_empty() {
            return Err(BlueboardError::validation("subject must be non-empty"));
        }
        self.animation_config.validate()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub prompt: String,
    pub animation_config: AnimationConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub is_public: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgress {
    pub user_id: i64,
    pub content_id: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub feedback: Option<u8>, // 1..=5, 0 or absent means unrated
}

impl NewProgress {
    pub fn validate(&self) -> BlueboardResult<()> {
        if let Some(f) = self.feedback
            && f > 5
        {
            return Err(BlueboardError::validation("feedback must be between 0 and 5"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: i64,
    pub user_id: i64,
    pub content_id: i64,
    pub completed: bool,
    pub last_interaction: DateTime<Utc>,
    pub notes: Option<String>,
    pub feedback: u8,
}

/// A progress record joined with the content it refers to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressWithContent {
    #[serde(flatten)]
    pub progress: ProgressRecord,
    pub content: Option<ContentRecord>,
}
