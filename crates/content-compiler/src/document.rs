//! Per-document parsing and validation.
//!
//! Only two pieces of markdown syntax matter here: YAML frontmatter and
//! link/embed references. Everything else passes through verbatim.

use crate::dataset::Dataset;
use content_report::messages;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;

/// Wiki-style image embed, rewritten into standard syntax in the build tree.
static WIKI_EMBED: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap());

/// Markdown links, with capture 1 telling image embeds (`!`) apart from
/// plain links.
static MD_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[[^\]]*\]\(([^)]+)\)").unwrap());

/// Frontmatter fields the compiler understands; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Frontmatter {
    title: Option<String>,
    taxonomie: Vec<String>,
    tags: Vec<String>,
    wip: bool,
}

/// A parsed markdown document.
#[derive(Debug)]
pub struct Document {
    pub title: Option<String>,
    pub taxonomie: Vec<String>,
    pub tags: Vec<String>,
    /// Flagged work-in-progress by its frontmatter.
    pub wip: bool,
    /// Errors found while parsing, before any validation runs.
    pub errors: Vec<String>,
}

impl Document {
    /// Parse frontmatter from raw document text.
    ///
    /// Malformed YAML is a per-document finding, never fatal: the document
    /// is treated as having no frontmatter and the error is recorded.
    pub fn parse(content: &str) -> Self {
        let mut doc = Self {
            title: None,
            taxonomie: Vec::new(),
            tags: Vec::new(),
            wip: false,
            errors: Vec::new(),
        };

        let Some(raw) = frontmatter_block(content) else {
            return doc;
        };
        match serde_yaml::from_str::<Frontmatter>(raw) {
            Ok(front) => {
                doc.title = front.title;
                doc.taxonomie = front.taxonomie;
                doc.tags = front.tags;
                doc.wip = front.wip;
            }
            Err(e) => {
                doc.errors
                    .push(format!("{} {e}", messages::INVALID_FRONTMATTER));
            }
        }
        doc
    }

    /// One error per taxonomy code the dataset does not know.
    pub fn validate_taxonomie(&self, dataset: &Dataset) -> Vec<String> {
        self.taxonomie
            .iter()
            .filter(|code| !dataset.contains(code))
            .map(|code| format!("{} `{code}`", messages::UNKNOWN_TAXCO_CODE))
            .collect()
    }
}

/// The raw YAML between the opening and closing `---` fences, if present.
fn frontmatter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let end = rest.find("---")?;
    Some(&rest[..end])
}

/// Rewrite `![[name]]` wiki embeds into standard `![name](name)` image
/// syntax for the compiled output. Everything else is untouched.
pub fn rewrite_wiki_embeds(content: &str) -> String {
    WIKI_EMBED
        .replace_all(content, |caps: &Captures<'_>| {
            let name = caps[1].trim().to_string();
            format!("![{name}]({name})")
        })
        .into_owned()
}

/// Validate relative markdown link targets against the filesystem.
///
/// Image embeds are owned by the image copy pass and skipped here, as are
/// web links and pure in-page anchors. A relative target must exist either
/// next to the document or under the source root.
pub fn check_links(content: &str, doc_dir: &Path, src_root: &Path) -> Vec<String> {
    let mut errors = Vec::new();
    for caps in MD_LINK.captures_iter(content) {
        if &caps[1] == "!" {
            continue;
        }
        let target = caps[2].trim();
        let path_part = target.split('#').next().unwrap_or_default();
        if path_part.is_empty()
            || path_part.starts_with("http://")
            || path_part.starts_with("https://")
        {
            continue;
        }
        if !doc_dir.join(path_part).exists() && !src_root.join(path_part).exists() {
            errors.push(format!("{} `{target}`", messages::LINK_NOT_FOUND));
        }
    }
    errors
}
