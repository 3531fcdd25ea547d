use crate::{
    foundation::error::{BlueboardError, BlueboardResult},
    generate::{classify::Classification, client::Generator},
    scene::{list::Scene, model::AnimationObject},
};

#[derive(Clone, Debug)]
pub struct PromptOutcome {
    /// The prompt as accepted (trimmed).
    pub prompt: String,
    pub classification: Classification,
    pub object: AnimationObject,
    /// `scene` with `object` appended.
    pub scene: Scene,
}

/// Classifies `text` and appends the resulting object to a copy of `scene`.
///
/// On any failure the caller's scene is untouched; nothing is retried.
pub async fn submit_prompt(
    generator: &Generator,
    scene: &Scene,
    text: &str,
) -> BlueboardResult<PromptOutcome> {
    let prompt = text.trim();
    if prompt.is_empty() {
        return Err(BlueboardError::validation("prompt must be non-empty"));
    }

    let classification = generator.classify(prompt).await?;
    let object = classification.to_object()?;
    let scene = scene.with_object(object.clone())?;

    tracing::info!(
        subject = %classification.subject,
        animation = %classification.animation_type,
        shape = object.kind.as_str(),
        "prompt classified"
    );

    Ok(PromptOutcome {
        prompt: prompt.to_string(),
        classification,
        object,
        scene,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/generate/pipeline.rs"]
mod tests;
