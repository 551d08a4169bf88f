//! Lore card store.
//!
//! A story's codex is a set of folders of markdown cards, each optionally
//! headed by a YAML front matter block. `codex/index.yaml` maps card type keys
//! to folders:
//!
//! ```yaml
//! types:
//!   CHAR: { folder: characters }
//!   CHAR_OVERTIME: { folder: characters_over_time }
//!   LOC: { folder: locations }
//! ```
//!
//! Cards are re-read on every call. Nothing is cached.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod card;
mod card_set;
mod card_type;
mod front_matter;
mod index;
mod store;

pub use card::Card;
pub use card_set::CardSet;
pub use card_type::CardType;
pub use front_matter::{FrontMatter, split_front_matter};
pub use index::{CodexIndex, TypeEntry};
pub use store::{CodexStore, OVER_TIME_SUFFIX, PROJECT_DEFAULT_STYLE};
