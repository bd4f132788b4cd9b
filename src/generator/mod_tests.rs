use super::*;
use crate::config::ProviderConfig;
use crate::recovery::{AccessLevel, EntityKind};

fn config_with(providers: Vec<ProviderConfig>, fallback_heuristic: bool) -> GeneratorConfig {
    GeneratorConfig {
        providers,
        fallback_heuristic,
        ..GeneratorConfig::default()
    }
}

fn keyless(name: &str) -> ProviderConfig {
    ProviderConfig::new(name, "http://localhost:11434/v1", "llama3.2", None)
}

fn missing_key(name: &str) -> ProviderConfig {
    ProviderConfig::new(
        name,
        "https://api.example.com/v1",
        "model",
        Some("DOXY_GUARD_TEST_KEY_THAT_IS_NEVER_SET"),
    )
}

fn build(config: &GeneratorConfig) -> Box<dyn Generator> {
    build_generator(config, &Guidelines::builtin(), &BriefStyle::default())
}

#[test]
fn offline_uses_heuristic_only() {
    let config = GeneratorConfig {
        offline: true,
        ..GeneratorConfig::default()
    };
    assert_eq!(build(&config).name(), "heuristic");
}

#[test]
fn providers_without_keys_are_skipped() {
    let config = config_with(vec![missing_key("groq"), keyless("ollama")], false);
    assert_eq!(build(&config).name(), "ollama");
}

#[test]
fn no_usable_provider_falls_back_to_heuristic() {
    let config = config_with(vec![missing_key("groq"), missing_key("openai")], false);
    assert_eq!(build(&config).name(), "heuristic");

    let config = config_with(Vec::new(), false);
    assert_eq!(build(&config).name(), "heuristic");
}

#[test]
fn chain_preserves_provider_order() {
    let config = config_with(vec![keyless("local"), keyless("backup")], true);
    assert_eq!(build(&config).name(), "local -> backup -> heuristic");
}

#[test]
fn offline_generator_uses_configured_style() {
    let config = GeneratorConfig {
        offline: true,
        ..GeneratorConfig::default()
    };
    let style = BriefStyle::new(Vec::new(), vec!["paint".to_string()]);
    let generator = build_generator(&config, &Guidelines::builtin(), &style);

    let entity = Entity {
        id: 0,
        kind: EntityKind::Method,
        line: 1,
        name: "PaintsWall".to_string(),
        enclosing_class: Some("Room".to_string()),
        access: AccessLevel::Public,
        text: "void PaintsWall();".to_string(),
        method: None,
    };
    let text = generator
        .generate(&GenerationRequest {
            entity: &entity,
            context: &[],
        })
        .unwrap();
    assert_eq!(text, "/// Paint wall.");
}

#[test]
fn boxed_generator_delegates() {
    let boxed: Box<HeuristicGenerator> = Box::new(HeuristicGenerator::new());
    assert_eq!(Generator::name(&boxed), "heuristic");
}

#[test]
fn error_messages_name_the_provider() {
    let err = GeneratorError::Unavailable {
        provider: "groq".to_string(),
        reason: "API key not set".to_string(),
    };
    assert_eq!(err.to_string(), "groq is unavailable: API key not set");

    let err = GeneratorError::MalformedResponse {
        provider: "openai".to_string(),
        message: "bad json".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "openai returned a malformed response: bad json"
    );
}
