//! YAML front matter splitting.

use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Metadata and body of a markdown card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontMatter {
    /// Parsed front matter, empty when absent or malformed
    pub meta: Mapping,
    /// Text after the front matter block
    pub body: String,
}

/// Splits a markdown document into YAML metadata and body.
///
/// A document that does not begin with `---`, or whose front matter is never
/// closed, is all body. Front matter that is not a YAML mapping yields empty
/// metadata.
///
/// # Examples
///
/// ```
/// use fabula_codex::split_front_matter;
///
/// let doc = "---\nnames: [Maya]\n---\n\nMaya is a cartographer.\n";
/// let parsed = split_front_matter(doc);
/// assert_eq!(parsed.meta.len(), 1);
/// assert_eq!(parsed.body, "Maya is a cartographer.\n");
///
/// let plain = split_front_matter("Just text.");
/// assert!(plain.meta.is_empty());
/// assert_eq!(plain.body, "Just text.");
/// ```
pub fn split_front_matter(text: &str) -> FrontMatter {
    let whole = || FrontMatter {
        meta: Mapping::new(),
        body: text.to_string(),
    };

    if !text.starts_with("---") {
        return whole();
    }
    let Some((_, rest)) = text.split_once('\n') else {
        return whole();
    };

    let (yaml, after) = if let Some(after) = rest.strip_prefix("---") {
        ("", after)
    } else {
        match rest.find("\n---") {
            Some(end) => (&rest[..end], &rest[end + "\n---".len()..]),
            None => {
                debug!("Unterminated front matter, treating file as body");
                return whole();
            }
        }
    };

    FrontMatter {
        meta: parse_mapping(yaml),
        body: after.trim_start_matches(['\r', '\n']).to_string(),
    }
}

fn parse_mapping(yaml: &str) -> Mapping {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => map,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            debug!("Front matter is not a mapping");
            Mapping::new()
        }
        Err(e) => {
            debug!(error = %e, "Malformed front matter");
            Mapping::new()
        }
    }
}
