use fabula_codex::{Card, split_front_matter};

#[test]
fn list_unique_id_yields_first_entry() {
    let card = Card::from_markdown("---\nunique-id: [CHAR_MAYA]\n---\nBody\n", "maya");
    assert_eq!(card.id(), "CHAR_MAYA");
}

#[test]
fn numeric_unique_id_is_stringified() {
    let card = Card::from_markdown("---\nunique-id: 42\n---\nBody\n", "stem");
    assert_eq!(card.id(), "42");
}

#[test]
fn missing_unique_id_falls_back_to_stem() {
    let card = Card::from_markdown("---\nnames: [Maya]\n---\nBody\n", "maya");
    assert_eq!(card.id(), "maya");
    assert_eq!(card.name().as_deref(), Some("Maya"));
}

#[test]
fn plain_name_used_without_names_list() {
    let card = Card::from_markdown("---\nname: Old Harbor\n---\nDocks.\n", "harbor");
    assert_eq!(card.name().as_deref(), Some("Old Harbor"));
    assert_eq!(card.display_name(), "Old Harbor");
}

#[test]
fn explicit_summary_wins_over_body() {
    let card = Card::from_markdown("---\nsummary: Short.\n---\nLong body line.\n", "x");
    assert_eq!(card.summary().as_deref(), Some("Short."));
}

#[test]
fn null_summary_is_derived_from_body() {
    let card = Card::from_markdown("---\nsummary: ~\n---\n\n  First line  \nSecond\n", "x");
    assert_eq!(card.summary().as_deref(), Some("First line"));
}

#[test]
fn known_fields_and_extra_bag() {
    let card = Card::from_markdown(
        "---\nchapter_state: wounded\ncharacter: Maya\ndefault_tone: wry\ntags: [hero]\n---\nx\n",
        "x",
    );
    assert_eq!(card.chapter_state().as_deref(), Some("wounded"));
    assert_eq!(card.character().as_deref(), Some("Maya"));
    assert_eq!(card.default_tone().as_deref(), Some("wry"));
    assert!(card.extra().contains_key("tags"));
    assert!(!card.extra().contains_key("character"));
}

#[test]
fn no_front_matter_means_whole_body() {
    let parsed = split_front_matter("# Title\n---\ntext");
    assert!(parsed.meta.is_empty());
    assert_eq!(parsed.body, "# Title\n---\ntext");
}

#[test]
fn unterminated_front_matter_means_whole_body() {
    let text = "---\nnames: [Maya]\nno closing marker\n";
    let parsed = split_front_matter(text);
    assert!(parsed.meta.is_empty());
    assert_eq!(parsed.body, text);
}

#[test]
fn malformed_yaml_degrades_to_empty_metadata() {
    let parsed = split_front_matter("---\nnames: [unclosed\n---\nBody\n");
    assert!(parsed.meta.is_empty());
    assert_eq!(parsed.body, "Body\n");
}

#[test]
fn scalar_front_matter_degrades_to_empty_metadata() {
    let parsed = split_front_matter("---\njust a string\n---\nBody\n");
    assert!(parsed.meta.is_empty());
    assert_eq!(parsed.body, "Body\n");
}
