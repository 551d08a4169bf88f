use fabula_codex::{CardType, CodexStore};
use fabula_error::{ConfigErrorKind, FabulaErrorKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn story() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(
        root,
        "codex/characters/b_maya.md",
        "---\nunique-id: [CHAR_MAYA]\nnames: [Maya]\n---\nMaya maps coastlines.\n",
    );
    write(
        root,
        "codex/characters/a_jonah.md",
        "---\nunique-id: [CHAR_JONAH]\nnames: [Jonah]\n---\nJonah keeps the lighthouse.\n",
    );
    write(
        root,
        "codex/characters_over_time/maya.md",
        "---\nunique-id: [CHAR_MAYA_OVER_TIME]\nchapter_state: grieving\n---\n",
    );
    write(
        root,
        "codex/characters_over_time/notes.md",
        "---\nunique-id: [CHAR_MAYA_OVER_TIME_NOTES]\n---\nScratch.\n",
    );
    write(root, "codex/characters/readme.txt", "not a card");
    dir
}

#[test]
fn missing_index_uses_default_folders() {
    let dir = story();
    let store = CodexStore::open(dir.path()).expect("open");
    let chars = store.cards(CardType::Char);
    assert_eq!(chars.len(), 2);
}

#[test]
fn cards_are_ordered_by_file_name() {
    let dir = story();
    let store = CodexStore::open(dir.path()).expect("open");
    let chars = store.characters_for_scene("");
    assert_eq!(chars.ids().collect::<Vec<_>>(), vec!["CHAR_JONAH", "CHAR_MAYA"]);
}

#[test]
fn unknown_type_and_missing_folder_are_empty() {
    let dir = story();
    let store = CodexStore::open(dir.path()).expect("open");
    assert!(store.load_cards("NOPE").is_empty());
    assert!(store.locations_for_scene("").is_empty());
    assert!(store.threads().is_empty());
}

#[test]
fn explicit_index_restricts_types() {
    let dir = story();
    write(
        dir.path(),
        "codex/index.yaml",
        "types:\n  CHAR: { folder: characters }\n  LOC: ~\n  THREAD: {}\n",
    );
    let store = CodexStore::open(dir.path()).expect("open");
    assert_eq!(store.cards(CardType::Char).len(), 2);
    assert!(store.cards(CardType::CharOvertime).is_empty());
    assert!(store.load_cards("LOC").is_empty());
    assert!(store.load_cards("THREAD").is_empty());
}

#[test]
fn malformed_index_is_config_error() {
    let dir = story();
    write(dir.path(), "codex/index.yaml", "types: [unclosed\n");
    let err = CodexStore::open(dir.path()).expect_err("malformed index");
    match err.kind() {
        FabulaErrorKind::Config(e) => assert!(matches!(
            &e.kind,
            ConfigErrorKind::Parse { document, .. } if document == "codex/index.yaml"
        )),
        other => panic!("expected config error, got {other}"),
    }
}

#[test]
fn over_time_uses_exact_suffix_and_requested_ids() {
    let dir = story();
    let store = CodexStore::open(dir.path()).expect("open");

    let ids = vec!["CHAR_MAYA".to_string(), "CHAR_JONAH".to_string()];
    let over_time = store.characters_over_time(&ids);
    assert_eq!(over_time.len(), 1);
    assert_eq!(
        over_time["CHAR_MAYA"].chapter_state().as_deref(),
        Some("grieving")
    );

    assert!(store.characters_over_time(&["CHAR_JONAH".to_string()]).is_empty());
}

#[test]
fn style_prefers_project_default() {
    let dir = story();
    write(dir.path(), "codex/style/a.md", "---\nunique-id: STYLE_TERSE\n---\nTerse.\n");
    write(
        dir.path(),
        "codex/style/b.md",
        "---\nunique-id: STYLE_PROJECT_DEFAULT\ndefault_tone: wistful\n---\nLyrical.\n",
    );
    let store = CodexStore::open(dir.path()).expect("open");
    let style = store.style_guide().expect("style");
    assert_eq!(style.id(), "STYLE_PROJECT_DEFAULT");

    fs::remove_file(dir.path().join("codex/style/b.md")).expect("rm");
    assert_eq!(store.style_guide().expect("style").id(), "STYLE_TERSE");
}

#[test]
fn voice_matches_character_name_or_falls_back_to_first() {
    let dir = story();
    write(
        dir.path(),
        "codex/voice/a.md",
        "---\nunique-id: VOICE_JONAH\ncharacter: Jonah\n---\nGruff.\n",
    );
    write(
        dir.path(),
        "codex/voice/b.md",
        "---\nunique-id: VOICE_MAYA\ncharacter: Maya\n---\nPrecise.\n",
    );
    let store = CodexStore::open(dir.path()).expect("open");

    assert_eq!(store.pov_voice("CHAR_MAYA").expect("voice").id(), "VOICE_MAYA");
    assert_eq!(store.voice_for_name(Some("Nobody")).expect("voice").id(), "VOICE_JONAH");
    assert_eq!(store.pov_voice("CHAR_UNKNOWN").expect("voice").id(), "VOICE_JONAH");
}

#[test]
fn no_voice_cards_means_none() {
    let dir = story();
    let store = CodexStore::open(dir.path()).expect("open");
    assert!(store.pov_voice("CHAR_MAYA").is_none());
    assert!(store.style_guide().is_none());
}
