//! Rule Pipeline - Ordered prompt transformations
//!
//! Each step pairs a rule with its activation and a transform. A step whose
//! gate passes but whose transform finds nothing to add (no matching domain,
//! no matching model) leaves the text alone and is not recorded.

use super::catalog::{
    self, CHAIN_OF_THOUGHT, CLARITY_DIRECTIVE, EXPERT_PREAMBLE, FEW_SHOT_HEADER,
    RESPONSE_STRUCTURE, TESTING_GUIDANCE,
};
use crate::domain::{Analysis, RuleName, RuleSet};

/// Clarity below this lets `auto_optimize` add the clarity directive.
const CLARITY_THRESHOLD: f64 = 0.7;

/// When a step fires without being named explicitly.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Activation {
    /// Implied whenever `auto_optimize` is requested.
    Always,
    /// Implied under `auto_optimize` when the analysis asks for it.
    When(fn(&Analysis) -> bool),
    /// Never implied; must be requested by name.
    ExplicitOnly,
}

impl Activation {
    fn implied(&self, analysis: &Analysis) -> bool {
        match self {
            Activation::Always => true,
            Activation::When(predicate) => predicate(analysis),
            Activation::ExplicitOnly => false,
        }
    }
}

/// Read-only inputs shared by every transform.
pub(crate) struct StepContext<'a> {
    pub original: &'a str,
    pub target_model: &'a str,
}

type Transform = fn(&str, &StepContext<'_>) -> Option<String>;

pub(crate) struct Step {
    pub rule: RuleName,
    pub activation: Activation,
    pub transform: Transform,
}

pub(crate) const PIPELINE: [Step; 8] = [
    Step {
        rule: RuleName::ExpertSystem,
        activation: Activation::Always,
        transform: expert_system,
    },
    Step {
        rule: RuleName::ChainOfThought,
        activation: Activation::When(|a: &Analysis| a.needs_reasoning),
        transform: chain_of_thought,
    },
    Step {
        rule: RuleName::FewShot,
        activation: Activation::When(|a: &Analysis| a.needs_examples),
        transform: few_shot,
    },
    Step {
        rule: RuleName::RolePlay,
        activation: Activation::When(|a: &Analysis| a.needs_expertise),
        transform: role_play,
    },
    Step {
        rule: RuleName::StructuredOutput,
        activation: Activation::When(|a: &Analysis| a.needs_structure),
        transform: structured_output,
    },
    Step {
        rule: RuleName::ModelOptimize,
        activation: Activation::ExplicitOnly,
        transform: model_optimize,
    },
    Step {
        rule: RuleName::EnhanceClarity,
        activation: Activation::When(|a: &Analysis| a.clarity_score < CLARITY_THRESHOLD),
        transform: enhance_clarity,
    },
    Step {
        rule: RuleName::AddTesting,
        activation: Activation::ExplicitOnly,
        transform: add_testing,
    },
];

fn expert_system(text: &str, _ctx: &StepContext<'_>) -> Option<String> {
    Some(format!("{}\n\nUser Request:\n{}", EXPERT_PREAMBLE, text))
}

fn chain_of_thought(text: &str, _ctx: &StepContext<'_>) -> Option<String> {
    Some(format!("{}{}", text, CHAIN_OF_THOUGHT))
}

fn few_shot(text: &str, ctx: &StepContext<'_>) -> Option<String> {
    catalog::few_shot_examples(ctx.original)
        .map(|examples| format!("{}\n\n{}\n\n{}", text, FEW_SHOT_HEADER, examples))
}

fn role_play(text: &str, ctx: &StepContext<'_>) -> Option<String> {
    catalog::expert_role(ctx.original).map(|role| format!("You are {}.\n\n{}", role, text))
}

fn structured_output(text: &str, _ctx: &StepContext<'_>) -> Option<String> {
    Some(format!("{}{}", text, RESPONSE_STRUCTURE))
}

fn model_optimize(text: &str, ctx: &StepContext<'_>) -> Option<String> {
    catalog::model_note(ctx.target_model).map(|note| format!("{}\n\n{}", text, note))
}

fn enhance_clarity(text: &str, _ctx: &StepContext<'_>) -> Option<String> {
    Some(format!("{}{}", text, CLARITY_DIRECTIVE))
}

fn add_testing(text: &str, _ctx: &StepContext<'_>) -> Option<String> {
    Some(format!("{}{}", text, TESTING_GUIDANCE))
}

/// Run every step in order, folding the prompt text through the ones that fire.
///
/// Returns the final text and the rules whose effect was applied.
pub(crate) fn run(
    prompt: &str,
    analysis: &Analysis,
    rules: &RuleSet,
    target_model: &str,
) -> (String, Vec<RuleName>) {
    let ctx = StepContext {
        original: prompt,
        target_model,
    };

    PIPELINE.iter().fold(
        (prompt.to_string(), Vec::new()),
        |(text, mut applied), step| {
            if !rules.activates(step.rule, step.activation.implied(analysis)) {
                return (text, applied);
            }
            match (step.transform)(&text, &ctx) {
                Some(next) => {
                    tracing::debug!("Applied '{}' rule", step.rule);
                    applied.push(step.rule);
                    (next, applied)
                }
                None => {
                    tracing::debug!("Rule '{}' matched nothing, skipped", step.rule);
                    (text, applied)
                }
            }
        },
    )
}
