use fabula_beat::{
    ACTION_WRITE_BEAT, PromptBlocks, build_messages_from_prompts, render_prompts_for_action,
    render_template_set,
};
use fabula_core::Role;
use fabula_error::{ConfigErrorKind, FabulaErrorKind, PromptErrorKind};
use std::fs;
use std::path::Path;

const PROMPTING: &str = "\
actions:
  ACTIONS_WRITE_BEAT:
    template_set: nc/beat
    slots:
      - { slot: system, role: system, required: true }
      - { slot: user, role: user, required: true }
      - { slot: user2, role: user, required: false }
  ACTIONS_MAKE_PRESENT_TENSE:
    template_set: nc/tense
    slots:
      - { slot: system, role: system, required: true }
";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn blocks() -> PromptBlocks {
    [("TARGET_WORDS", "400"), ("CODEX_BLOCK", "<lore/>")]
        .into_iter()
        .collect()
}

fn prompt_kind(err: &fabula_error::FabulaError) -> &PromptErrorKind {
    match err.kind() {
        FabulaErrorKind::Prompt(e) => &e.kind,
        other => panic!("expected prompt error, got {other}"),
    }
}

#[test]
fn renders_configured_slots_with_roles() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "toolkit/config/prompting.yaml", PROMPTING);
    write(dir.path(), "toolkit/prompts/nc/beat/system_message.txt", "You write fiction.");
    write(dir.path(), "toolkit/prompts/nc/beat/user.txt", "<codex>{{CODEX_BLOCK}}</codex>");
    write(
        dir.path(),
        "toolkit/prompts/nc/beat/user_2.txt",
        "Write {{TARGET_WORDS}} words.",
    );

    let rendered = render_prompts_for_action(dir.path(), ACTION_WRITE_BEAT, &blocks()).expect("render");
    assert_eq!(rendered.get("system"), Some("You write fiction."));
    assert_eq!(rendered.get("user"), Some("<codex><lore/></codex>"));
    assert_eq!(rendered.get("user2"), Some("Write 400 words."));

    let roles: Vec<Role> = rendered.prompts().iter().map(|p| *p.role()).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::User]);
}

#[test]
fn missing_optional_template_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "toolkit/config/prompting.yaml", PROMPTING);
    write(dir.path(), "toolkit/prompts/nc/beat/system_message.txt", "S");
    write(dir.path(), "toolkit/prompts/nc/beat/user.txt", "U");

    let rendered = render_prompts_for_action(dir.path(), ACTION_WRITE_BEAT, &blocks()).expect("render");
    assert_eq!(rendered.prompts().len(), 2);
    assert!(rendered.get("user2").is_none());
    assert!(rendered.require("user2").is_err());
}

#[test]
fn missing_required_template_names_slot_and_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "toolkit/config/prompting.yaml", PROMPTING);
    write(dir.path(), "toolkit/prompts/nc/beat/system_message.txt", "S");

    let err = render_prompts_for_action(dir.path(), ACTION_WRITE_BEAT, &blocks()).unwrap_err();
    match prompt_kind(&err) {
        PromptErrorKind::TemplateNotFound { slot, path } => {
            assert_eq!(slot, "user");
            assert!(path.ends_with("user.txt"));
        }
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn unknown_action_lists_known_actions() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "toolkit/config/prompting.yaml", PROMPTING);

    let err = render_prompts_for_action(dir.path(), "UNKNOWN", &blocks()).unwrap_err();
    assert!(matches!(
        prompt_kind(&err),
        PromptErrorKind::UnknownAction { .. }
    ));
    assert!(
        err.to_string()
            .contains("Available actions: ACTIONS_MAKE_PRESENT_TENSE, ACTIONS_WRITE_BEAT")
    );
}

#[test]
fn missing_prompting_config_is_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = render_prompts_for_action(dir.path(), ACTION_WRITE_BEAT, &blocks()).unwrap_err();
    match err.kind() {
        FabulaErrorKind::Config(e) => match &e.kind {
            ConfigErrorKind::Read { path, .. } => assert!(path.ends_with("prompting.yaml")),
            other => panic!("expected read error, got {other}"),
        },
        other => panic!("expected config error, got {other}"),
    }
}

#[test]
fn template_set_renders_existing_standard_slots() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "toolkit/prompts/nc/beat/system_message.txt", "S {{TARGET_WORDS}}");
    write(dir.path(), "toolkit/prompts/nc/beat/user_2.txt", "U2");

    let rendered = render_template_set(dir.path(), "nc/beat", &blocks()).expect("render");
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered["system"], "S 400");
    assert_eq!(rendered["user2"], "U2");
}

#[test]
fn messages_skip_blank_secondary_prompt() {
    let messages = build_messages_from_prompts("sys", "ctx", None);
    assert_eq!(messages.len(), 2);
    assert_eq!(*messages[0].role(), Role::System);
    assert_eq!(*messages[1].role(), Role::User);

    let messages = build_messages_from_prompts("sys", "ctx", Some("\n  \t"));
    assert_eq!(messages.len(), 2);

    let messages = build_messages_from_prompts("sys", "ctx", Some("Write 400 words."));
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].content(), "Write 400 words.");
}
