//! Pluggable time-aware steps of beat assembly.

use crate::{MergedCharacter, OverTimeConfig, ThreadConfig};
use fabula_codex::{Card, CardSet};
use std::collections::BTreeMap;

/// Produces the view of the thread cards appropriate for a chapter.
pub trait ThreadTimeFilter: Send + Sync {
    /// Filters `threads` for `chapter_num`.
    fn filter(&self, threads: CardSet, chapter_num: u32, cfg: &ThreadConfig) -> CardSet;
}

/// Returns every thread unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughThreads;

impl ThreadTimeFilter for PassThroughThreads {
    fn filter(&self, threads: CardSet, _chapter_num: u32, _cfg: &ThreadConfig) -> CardSet {
        threads
    }
}

/// Combines base character cards with their chapter-specific state.
pub trait CharacterStateMerge: Send + Sync {
    /// Merges each character with its over-time card, preserving card order.
    fn merge(
        &self,
        characters: &CardSet,
        over_time: &BTreeMap<String, Card>,
        chapter_num: u32,
        cfg: &OverTimeConfig,
    ) -> Vec<MergedCharacter>;
}

/// Wraps each character with its over-time card and takes the over-time
/// card's `chapter_state` verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverTimeCardMerge;

impl CharacterStateMerge for OverTimeCardMerge {
    fn merge(
        &self,
        characters: &CardSet,
        over_time: &BTreeMap<String, Card>,
        _chapter_num: u32,
        _cfg: &OverTimeConfig,
    ) -> Vec<MergedCharacter> {
        characters
            .iter()
            .map(|base| {
                let over_time = over_time.get(base.id()).cloned();
                MergedCharacter::new(base.clone(), over_time)
            })
            .collect()
    }
}
