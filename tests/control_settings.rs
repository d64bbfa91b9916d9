mod common;

use common::{bare, choice, init_tracing};
use formopts::{ControlKind, ControlSettings, SettingKind, SettingValue};
use serde_json::json;

#[test]
fn fresh_control_displays_defaults() {
    let settings = ControlSettings::new(ControlKind::Select);
    assert_eq!(settings.display("help").unwrap(), "");
    assert_eq!(settings.display("required").unwrap(), "0");
    assert_eq!(settings.display("options").unwrap(), "");
    assert_eq!(settings.display("default").unwrap(), "");
}

#[test]
fn submit_structures_choice_text() {
    init_tracing();
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings
        .submit("options", "foo : Foo\n\nbar : Bar\nBaz")
        .unwrap();

    assert_eq!(
        settings.get("options").unwrap(),
        SettingValue::Choices(vec![
            choice("foo", "Foo"),
            choice("bar", "Bar"),
            bare("Baz"),
        ])
    );
}

#[test]
fn submit_then_display_is_a_fixpoint_for_each_kind() {
    let inputs = [
        ("help", "Pick one of the sizes below."),
        ("required", "1"),
        ("options", "s : Small\nm : Medium\nLarge"),
        ("default", "s\nm"),
    ];

    let mut settings = ControlSettings::new(ControlKind::Select);
    for (name, raw) in inputs {
        settings.submit(name, raw).unwrap();
        let displayed = settings.display(name).unwrap();
        assert_eq!(displayed, raw, "display of {name} diverged");

        // resubmitting the displayed text changes nothing
        let before = settings.get(name).unwrap();
        settings.submit(name, &displayed).unwrap();
        assert_eq!(settings.get(name).unwrap(), before);
    }
}

#[test]
fn submitted_blank_lines_disappear_from_display() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings.submit("options", "\nFoo\n\nBar\n").unwrap();
    assert_eq!(settings.display("options").unwrap(), "Foo\nBar");
}

#[test]
fn checkbox_submission_is_sanitized() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings.submit("multiple", "on").unwrap();
    assert_eq!(settings.display("multiple").unwrap(), "0");
    settings.submit("multiple", "1").unwrap();
    assert_eq!(settings.display("multiple").unwrap(), "1");
}

#[test]
fn default_value_submission_discards_labels() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings.submit("default", "a : A\nb").unwrap();
    assert_eq!(
        settings.get("default").unwrap(),
        SettingValue::Values(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(settings.display("default").unwrap(), "a\nb");
}

#[test]
fn restore_accepts_stored_choice_arrays() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings
        .restore(
            "options",
            &json!([
                {"value": "foo", "label": "Foo"},
                {"value": "Bar", "label": "Bar"}
            ]),
        )
        .unwrap();
    assert_eq!(settings.display("options").unwrap(), "foo : Foo\nBar");
}

#[test]
fn restore_drops_partial_choice_entries() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings
        .restore(
            "options",
            &json!([
                {"value": "foo", "label": "Foo"},
                {"value": "half"},
                {"label": "Orphan"},
                {"value": "bar", "label": "Bar"}
            ]),
        )
        .unwrap();
    assert_eq!(settings.display("options").unwrap(), "foo : Foo\nbar : Bar");
}

#[test]
fn restore_accepts_stored_value_arrays() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings.restore("default", &json!(["x", "y"])).unwrap();
    assert_eq!(settings.display("default").unwrap(), "x\ny");
}

#[test]
fn restore_passes_raw_text_through() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    settings.restore("options", &json!("foo : Foo\nBar")).unwrap();
    assert_eq!(settings.display("options").unwrap(), "foo : Foo\nBar");
}

#[test]
fn unknown_setting_is_rejected_on_every_path() {
    let mut settings = ControlSettings::new(ControlKind::Select);
    assert!(settings.get("placeholder").is_err());
    assert!(settings.display("placeholder").is_err());
    assert!(settings.submit("placeholder", "x").is_err());
    assert!(settings.restore("placeholder", &json!("x")).is_err());

    let err = settings.submit("placeholder", "x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown setting 'placeholder' for select control"
    );
}

#[test]
fn registry_metadata_matches_the_editor_surface() {
    let defs = ControlKind::Select.settings();
    assert_eq!(defs.len(), 5);

    let options = defs.iter().find(|def| def.name == "options").unwrap();
    assert_eq!(options.kind, SettingKind::ChoiceList);
    assert!(options.help.unwrap().contains("foo : Foo"));

    let default = defs.iter().find(|def| def.name == "default").unwrap();
    assert_eq!(default.kind, SettingKind::ValueList);

    assert_eq!(ControlKind::Select.label(), "Select");
}

#[test]
fn stored_json_round_trips_through_serde() {
    let value = SettingValue::Choices(vec![choice("foo", "Foo"), bare("Bar")]);
    let stored = serde_json::to_value(&value).unwrap();
    assert_eq!(SettingValue::from_stored(&stored), value);

    let reparsed: SettingValue = serde_json::from_value(stored).unwrap();
    assert_eq!(reparsed, value);
}
