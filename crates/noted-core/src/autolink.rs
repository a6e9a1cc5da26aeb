//! Hyperlinks note titles mentioned in free text
//!
//! Every link map token is searched for case-insensitively. Longer tokens are
//! applied first so a full title wins over the single words inside it, and
//! text that already became a link is never split again.

use regex::RegexBuilder;
use serde::Serialize;
use std::fmt;

use crate::index::{LinkMap, LinkTarget};

/// A run of plain text or a link produced from a title token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Link { label: String, target: LinkTarget },
}

impl Segment {
    fn text(text: &str) -> Self {
        Segment::Text {
            text: text.to_string(),
        }
    }
}

/// Text split into plain and linked segments, in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkedText {
    segments: Vec<Segment>,
}

impl LinkedText {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Link segments only
    pub fn links(&self) -> impl Iterator<Item = (&str, &LinkTarget)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Link { label, target } => Some((label.as_str(), target)),
            Segment::Text { .. } => None,
        })
    }

    /// Markdown with every link written as `[label](href)`
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(text),
                Segment::Link { label, target } => {
                    out.push('[');
                    out.push_str(label);
                    out.push_str("](");
                    out.push_str(&target.href());
                    out.push(')');
                }
            }
        }
        out
    }
}

impl fmt::Display for LinkedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

/// Tokens in application order: longest first, then lexical
fn ordered_tokens(links: &LinkMap) -> Vec<(&str, LinkTarget)> {
    let mut tokens: Vec<(&str, LinkTarget)> = links
        .iter()
        .filter(|(token, _)| !token.trim().is_empty())
        .filter_map(|(token, _)| links.target(token).map(|target| (token, target)))
        .collect();
    tokens.sort_by(|(a, _), (b, _)| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    tokens
}

/// Split `text` around every link map token it mentions
#[tracing::instrument(skip(text, links), fields(len = text.len(), tokens = links.len()))]
pub fn autolink(text: &str, links: &LinkMap) -> LinkedText {
    let mut segments = if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::text(text)]
    };

    for (token, target) in ordered_tokens(links) {
        let pattern = match RegexBuilder::new(&regex::escape(token))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!(token, error = %e, "skipping link token");
                continue;
            }
        };

        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            let Segment::Text { text } = &segment else {
                next.push(segment);
                continue;
            };
            if !pattern.is_match(text) {
                next.push(segment);
                continue;
            }

            let mut last = 0;
            for found in pattern.find_iter(text) {
                if found.start() > last {
                    next.push(Segment::text(&text[last..found.start()]));
                }
                next.push(Segment::Link {
                    label: token.to_string(),
                    target: target.clone(),
                });
                last = found.end();
            }
            if last < text.len() {
                next.push(Segment::text(&text[last..]));
            }
        }
        segments = next;
    }

    LinkedText { segments }
}
