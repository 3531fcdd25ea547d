//! Keyword-driven classifier used when no remote text-generation service is configured,
//! and behind the standalone `ai-service` endpoint.

use crate::{
    generate::classify::{Classification, GenerationParameters},
    scene::model::AnimationKind,
};

const SUBJECTS: [&str; 4] = ["physics", "math", "chemistry", "biology"];

fn template(subject: &str) -> &'static str {
    match subject {
        "physics" => "The {object} shows how {concept} works in physics.",
        "math" => "This {object} helps visualize {concept} in mathematics.",
        "chemistry" => "The {object} represents {concept} in chemical reactions.",
        "biology" => "The {object} illustrates {concept} in living systems.",
        _ => "This is an interactive {object} that demonstrates {concept}.",
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RuleBasedGenerator;

impl RuleBasedGenerator {
    pub fn classify(&self, prompt: &str) -> Classification {
        let lowered = prompt.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let has = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));

        let subject = SUBJECTS
            .iter()
            .copied()
            .find(|s| words.contains(s))
            .unwrap_or("default");

        let concept = if words.len() > 2 {
            words[words.len() - 2..].join(" ")
        } else {
            "educational concepts".to_string()
        };
        let object = words.first().copied().unwrap_or("visualization");
        let generated_text = template(subject)
            .replace("{object}", object)
            .replace("{concept}", &concept);

        let animation = if has(&["bounce", "bouncing", "jump", "jumping"]) {
            AnimationKind::Bounce
        } else if has(&["grow", "growing", "pulse", "pulsing", "scale", "shrink", "expand"]) {
            AnimationKind::Scale
        } else {
            AnimationKind::Rotate
        };

        let complexity = if has(&["complex", "detailed", "advanced"]) {
            "high"
        } else if has(&["simple", "basic"]) {
            "low"
        } else {
            "medium"
        };
        let duration = if complexity == "high" { 5.0 } else { 3.0 };

        Classification {
            generated_text,
            animation_type: animation.as_str().to_string(),
            subject: subject.to_string(),
            parameters: GenerationParameters {
                interactive: has(&["interactive", "explore"]),
                complexity: complexity.to_string(),
                duration,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/rules.rs"]
mod tests;
