use super::*;

#[test]
fn third_person_verbs_map_to_base_form() {
    let style = BriefStyle::default();
    assert_eq!(
        style.check("Gets the value."),
        Some(BriefViolation::ThirdPerson {
            word: "Gets".to_string(),
            base: "Get".to_string(),
        })
    );
    assert_eq!(style.base_form("Processes").as_deref(), Some("process"));
    assert_eq!(style.base_form("Initializes").as_deref(), Some("initialize"));
    assert_eq!(style.base_form("creates").as_deref(), Some("create"));
}

#[test]
fn base_form_verbs_pass() {
    let style = BriefStyle::default();
    assert_eq!(style.check("Get the value."), None);
    assert_eq!(style.check("Build the sweep graph."), None);
    assert_eq!(style.check("Returns"), Some(BriefViolation::ThirdPerson {
        word: "Returns".to_string(),
        base: "Return".to_string(),
    }));
}

#[test]
fn unknown_words_ending_in_s_pass() {
    let style = BriefStyle::default();
    assert_eq!(style.check("Sweeps the mesh."), None);
    assert_eq!(style.check("Angles per set."), None);
    assert_eq!(style.check("s"), None);
}

#[test]
fn filler_words_are_flagged_case_insensitively() {
    let style = BriefStyle::default();
    for brief in ["This method builds.", "The angle set.", "A helper.", "Method that runs."] {
        assert!(
            matches!(style.check(brief), Some(BriefViolation::FillerWord(_))),
            "{brief}"
        );
    }
}

#[test]
fn custom_word_lists() {
    let style = BriefStyle::new(vec!["helper".to_string()], vec!["sweep".to_string()]);
    assert!(matches!(
        style.check("Helper for sweeps."),
        Some(BriefViolation::FillerWord(_))
    ));
    assert_eq!(
        style.check("Sweeps the mesh."),
        Some(BriefViolation::ThirdPerson {
            word: "Sweeps".to_string(),
            base: "Sweep".to_string(),
        })
    );
    assert_eq!(style.check("Gets the value."), None);
}

#[test]
fn first_word_skips_punctuation_and_commands() {
    assert_eq!(first_word("Gets, then sets."), Some("Gets"));
    assert_eq!(first_word("\\param x"), None);
    assert_eq!(first_word("   "), None);
}

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("get"), "Get");
    assert_eq!(capitalize(""), "");
}
