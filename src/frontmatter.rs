// SPDX-FileCopyrightText: 2026 Nils Verbeek <nils@verbeek.dev>
// SPDX-License-Identifier: MIT

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The metadata block at the head of a post. The content pipeline owns the
/// body; the theme only ever reads these fields.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    #[serde(default, rename = "ogImage")]
    pub og_image: Option<String>,
    pub datetime: DateTime<Utc>,
}

impl Frontmatter {
    /// Split the `---`-fenced YAML block off the head of a post, returning
    /// the parsed record and the remaining body.
    pub fn from_str(input: &str) -> anyhow::Result<(Frontmatter, &str)> {
        const FENCE: &str = "---";

        if !input.starts_with(FENCE) {
            return Err(anyhow!("Post must begin with `---`"));
        }

        let offset = match input[FENCE.len()..].find(FENCE) {
            Some(offset) => offset,
            None => return Err(anyhow!("Missing closing `---`")),
        };

        let yaml = &input[FENCE.len()..FENCE.len() + offset];
        let body = &input[FENCE.len() + offset + FENCE.len()..];

        Ok((serde_yaml::from_str(yaml)?, body))
    }
}
