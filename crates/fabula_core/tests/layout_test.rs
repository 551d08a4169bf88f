use fabula_core::{BeatIds, StoryLayout};
use std::path::Path;

#[test]
fn ids_are_zero_padded_to_two_digits() {
    let ids = BeatIds::new(1, 2, 3);
    assert_eq!(ids.chapter_id(), "ch01");
    assert_eq!(ids.scene_id(), "sc02");
    assert_eq!(ids.beat_id(), "b03");
}

#[test]
fn wide_numbers_are_kept() {
    let ids = BeatIds::new(123, 10, 100);
    assert_eq!(ids.chapter_id(), "ch123");
    assert_eq!(ids.scene_id(), "sc10");
    assert_eq!(ids.beat_id(), "b100");
}

#[test]
fn layout_resolves_config_and_prompt_paths() {
    let layout = StoryLayout::new("/s");
    assert_eq!(layout.codex_index(), Path::new("/s/codex/index.yaml"));
    assert_eq!(
        layout.master_outline(),
        Path::new("/s/outlines/master_outline.md")
    );
    assert_eq!(
        layout.config_file("beatgen.yaml"),
        Path::new("/s/toolkit/config/beatgen.yaml")
    );
    assert_eq!(
        layout.template_set_dir("nc/beat"),
        Path::new("/s/toolkit/prompts/nc/beat")
    );
}

#[test]
fn beat_file_sits_beside_scene_outlines() {
    let layout = StoryLayout::new("/s");
    assert_eq!(
        layout.chapter_dir(12),
        Path::new("/s/manuscript/chapters/ch12")
    );
    assert_eq!(
        layout.scene_file(2, 4),
        Path::new("/s/manuscript/chapters/ch02/scenes/sc04.md")
    );
    assert_eq!(
        layout.beat_file(2, 4, 1),
        Path::new("/s/manuscript/chapters/ch02/beats/sc04_b01.md")
    );
}
