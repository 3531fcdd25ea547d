use super::*;

#[test]
fn detects_subject_and_fills_template() {
    let c = RuleBasedGenerator.classify("Pendulum physics showing simple harmonic motion");
    assert_eq!(c.subject, "physics");
    assert_eq!(
        c.generated_text,
        "The pendulum shows how harmonic motion works in physics."
    );
    assert_eq!(c.parameters.complexity, "low");
    assert_eq!(c.parameters.duration, 3.0);
}

#[test]
fn first_listed_subject_wins() {
    let c = RuleBasedGenerator.classify("chemistry and physics of stars");
    assert_eq!(c.subject, "physics");
}

#[test]
fn short_prompts_use_default_concept() {
    let c = RuleBasedGenerator.classify("cube");
    assert_eq!(c.subject, "default");
    assert_eq!(
        c.generated_text,
        "This is an interactive cube that demonstrates educational concepts."
    );

    let empty = RuleBasedGenerator.classify("   ");
    assert!(empty.generated_text.contains("visualization"));
}

#[test]
fn keywords_pick_animation_type() {
    assert_eq!(
        RuleBasedGenerator.classify("a bouncing ball").animation_type,
        "bounce"
    );
    assert_eq!(
        RuleBasedGenerator.classify("cells that grow").animation_type,
        "scale"
    );
    assert_eq!(
        RuleBasedGenerator.classify("planet orbit").animation_type,
        "rotate"
    );
}

#[test]
fn detailed_prompts_are_high_complexity_and_longer() {
    let c = RuleBasedGenerator.classify("a detailed interactive biology model of dna");
    assert_eq!(c.subject, "biology");
    assert_eq!(c.parameters.complexity, "high");
    assert_eq!(c.parameters.duration, 5.0);
    assert!(c.parameters.interactive);
}
