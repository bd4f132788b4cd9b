use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::recovery::{AccessLevel, Entity, EntityKind};

struct Scripted {
    name: &'static str,
    reply: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

impl Scripted {
    fn boxed(name: &'static str, reply: Option<&'static str>) -> (Box<dyn Generator>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = Self {
            name,
            reply,
            calls: Arc::clone(&calls),
        };
        (Box::new(generator), calls)
    }
}

impl Generator for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn generate(&self, _request: &GenerationRequest<'_>) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(ToString::to_string)
            .ok_or_else(|| GeneratorError::Unavailable {
                provider: self.name.to_string(),
                reason: "offline".to_string(),
            })
    }
}

fn entity() -> Entity {
    Entity {
        id: 0,
        kind: EntityKind::Class,
        line: 1,
        name: "Mesh".to_string(),
        enclosing_class: None,
        access: AccessLevel::Private,
        text: "class Mesh {".to_string(),
        method: None,
    }
}

fn run(generator: &dyn Generator) -> Result<String, GeneratorError> {
    let entity = entity();
    let context: Vec<String> = Vec::new();
    generator.generate(&GenerationRequest {
        entity: &entity,
        context: &context,
    })
}

#[test]
fn primary_success_skips_secondary() {
    let (primary, primary_calls) = Scripted::boxed("groq", Some("/// Mesh."));
    let (secondary, secondary_calls) = Scripted::boxed("openai", Some("/// Other."));
    let generator = FallbackGenerator::new(primary, secondary);

    assert_eq!(run(&generator).unwrap(), "/// Mesh.");
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn primary_failure_uses_secondary() {
    let (primary, _) = Scripted::boxed("groq", None);
    let (secondary, secondary_calls) = Scripted::boxed("openai", Some("/// Mesh data."));
    let generator = FallbackGenerator::new(primary, secondary);

    assert_eq!(run(&generator).unwrap(), "/// Mesh data.");
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn both_failing_reports_exhausted() {
    let (primary, _) = Scripted::boxed("groq", None);
    let (secondary, _) = Scripted::boxed("openai", None);
    let generator = FallbackGenerator::new(primary, secondary);

    let err = run(&generator).unwrap_err();
    let message = match err {
        GeneratorError::Exhausted(message) => message,
        other => panic!("expected Exhausted, got {other:?}"),
    };
    assert_eq!(
        message,
        "groq is unavailable: offline; openai is unavailable: offline"
    );
}

#[test]
fn chain_flattens_nested_failures() {
    let (a, _) = Scripted::boxed("a", None);
    let (b, _) = Scripted::boxed("b", None);
    let (c, c_calls) = Scripted::boxed("c", None);
    let generator = FallbackGenerator::chain(vec![a, b, c]).unwrap();

    assert_eq!(generator.name(), "a -> b -> c");
    let err = run(&generator).unwrap_err();
    assert_eq!(
        err.to_string(),
        "all generators failed: a is unavailable: offline; b is unavailable: offline; c is unavailable: offline"
    );
    assert_eq!(c_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn chain_tries_in_order() {
    let (a, a_calls) = Scripted::boxed("a", None);
    let (b, b_calls) = Scripted::boxed("b", Some("/// From b."));
    let (c, c_calls) = Scripted::boxed("c", Some("/// From c."));
    let generator = FallbackGenerator::chain(vec![a, b, c]).unwrap();

    assert_eq!(run(&generator).unwrap(), "/// From b.");
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(c_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn chain_of_one_is_the_generator_itself() {
    let (a, _) = Scripted::boxed("solo", Some("/// Solo."));
    let generator = FallbackGenerator::chain(vec![a]).unwrap();
    assert_eq!(generator.name(), "solo");
}

#[test]
fn empty_chain_is_none() {
    assert!(FallbackGenerator::chain(Vec::new()).is_none());
}
