use fabula_beat::{
    BeatSpec, BeatgenConfig, CODEX_BLOCK, INSTRUCTIONS_BLOCK, MergedCharacter, OutlineContext,
    Pov, PromptParameters, STORY_SO_FAR_BLOCK, TARGET_WORDS, build_blocks,
};
use fabula_codex::{Card, CardSet};
use fabula_core::BeatIds;

fn spec_with(
    characters: Vec<MergedCharacter>,
    locations: CardSet,
    threads: CardSet,
    outline: OutlineContext,
) -> BeatSpec {
    BeatSpec::builder()
        .ids(BeatIds::new(1, 2, 1))
        .characters(characters)
        .locations(locations)
        .threads(threads)
        .outline(outline)
        .build()
        .expect("spec")
}

#[test]
fn codex_block_renders_each_category() {
    let maya = Card::from_markdown("---\nunique-id: CHAR_MAYA\nnames: [Maya]\n---\nA pilot.\n", "m");
    let over = Card::from_markdown("---\nchapter_state: soaked\n---\n", "CHAR_MAYA_OVER_TIME");
    let docks: CardSet = [Card::from_markdown("---\nname: Docks\n---\nSalt and tar.\n", "LOC_DOCKS")]
        .into_iter()
        .collect();
    let threads: CardSet = [Card::from_markdown(
        "---\nname: Debt\nchapter_state: Due tomorrow.\n---\nLong history.\n",
        "THREAD_DEBT",
    )]
    .into_iter()
    .collect();

    let spec = spec_with(
        vec![MergedCharacter::new(maya, Some(over))],
        docks,
        threads,
        OutlineContext::default(),
    );
    let blocks = build_blocks(&spec);

    assert_eq!(
        blocks.get(CODEX_BLOCK),
        Some(
            "<lore name=\"CHAR: Maya\">\nA pilot.\nIn this chapter: soaked\n</lore>\n\n\
             <lore name=\"LOC: Docks\">\nSalt and tar.\n</lore>\n\n\
             <lore name=\"THREAD: Debt\">\nDue tomorrow.\n</lore>"
        )
    );
}

#[test]
fn codex_block_skips_entries_without_text() {
    let empty_char = Card::from_markdown("---\nnames: [Ghost]\n---\n", "CHAR_GHOST");
    let empty_loc: CardSet = [Card::from_markdown("---\nname: Void\n---\n", "LOC_VOID")]
        .into_iter()
        .collect();
    let empty_thread: CardSet = [Card::from_markdown("---\nname: Loose\n---\n", "THREAD_LOOSE")]
        .into_iter()
        .collect();

    let spec = spec_with(
        vec![MergedCharacter::new(empty_char, None)],
        empty_loc,
        empty_thread,
        OutlineContext::default(),
    );
    assert_eq!(build_blocks(&spec).get(CODEX_BLOCK), Some(""));
}

#[test]
fn story_so_far_includes_previous_scene_only_with_summary() {
    let without = OutlineContext::builder()
        .chapter_title("Landfall")
        .scene_title("Arrival")
        .scene_summary("Maya arrives.")
        .previous_scene_title("Departure")
        .build()
        .expect("outline");
    let spec = spec_with(vec![], CardSet::new(), CardSet::new(), without);
    assert_eq!(
        build_blocks(&spec).get(STORY_SO_FAR_BLOCK),
        Some(
            "<act number=\"1\" title=\"Novel\">\n  <chapter title=\"Landfall\" number=\"1\">\n    \
             <scene title=\"Arrival\" number=\"2\">\n      Maya arrives.\n    </scene>\n  \
             </chapter>\n</act>"
        )
    );

    let with = OutlineContext::builder()
        .scene_summary("Maya arrives.")
        .previous_scene_summary("The ship sails.")
        .build()
        .expect("outline");
    let spec = spec_with(vec![], CardSet::new(), CardSet::new(), with);
    let block = build_blocks(&spec);
    let text = block.get(STORY_SO_FAR_BLOCK).expect("block");
    assert!(text.contains("<chapter title=\"Chapter 1\" number=\"1\">"));
    assert!(text.contains("<scene title=\"Previous Scene\" number=\"1\">\n      The ship sails.\n    </scene>"));
    assert!(text.contains("<scene title=\"Scene 2\" number=\"2\">"));
}

#[test]
fn instructions_fall_back_without_pov_and_use_style_tone() {
    let style = Card::from_markdown("---\ndefault_tone: quietly ominous\n---\n", "STYLE_X");
    let spec = BeatSpec::builder()
        .ids(BeatIds::new(1, 1, 1))
        .style(Some(style))
        .build()
        .expect("spec");

    assert_eq!(
        build_blocks(&spec).get(INSTRUCTIONS_BLOCK),
        Some(
            "<pointOfView type=\"third person limited\"/>\n\n<beatGoal>\n  \
             Continue the story from the current point.\n</beatGoal>\n\n<tone>\n  \
             quietly ominous\n</tone>"
        )
    );
}

#[test]
fn instructions_name_the_pov_focus() {
    let outline = OutlineContext::builder()
        .beat_goal("Find the map.")
        .build()
        .expect("outline");
    let spec = BeatSpec::builder()
        .ids(BeatIds::new(1, 1, 1))
        .pov(Some(Pov::new("CHAR_A", "Maya")))
        .outline(outline)
        .build()
        .expect("spec");

    assert_eq!(
        build_blocks(&spec).get(INSTRUCTIONS_BLOCK),
        Some(
            "<pointOfView type=\"third person limited\" focus=\"Maya\"/>\n\n<beatGoal>\n  \
             Find the map.\n</beatGoal>"
        )
    );
}

#[test]
fn target_words_defaults_and_overrides() {
    let spec = spec_with(vec![], CardSet::new(), CardSet::new(), OutlineContext::default());
    assert_eq!(build_blocks(&spec).get(TARGET_WORDS), Some("400"));

    let cfg = BeatgenConfig::default().with_prompt_parameters(PromptParameters::new(Some(650), None, None));
    let spec = BeatSpec::builder()
        .ids(BeatIds::new(1, 1, 1))
        .generator_config(cfg)
        .build()
        .expect("spec");
    let blocks = build_blocks(&spec);
    assert_eq!(blocks.get(TARGET_WORDS), Some("650"));
    assert_eq!(
        blocks.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec![CODEX_BLOCK, STORY_SO_FAR_BLOCK, INSTRUCTIONS_BLOCK, TARGET_WORDS]
    );
}
