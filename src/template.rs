// SPDX-FileCopyrightText: 2026 Nils Verbeek <nils@verbeek.dev>
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::listing;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

#[derive(Clone, Debug)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(theme_dir: &Path) -> Self {
        Self {
            dir: theme_dir.to_owned(),
        }
    }

    /// Creates a Tera instance holding the theme's page shell.
    /// Autoescape is off; fragments are escaped when they are built.
    fn create_tera(&self) -> Result<Tera, tera::Error> {
        let mut tera: Tera = Tera::default();

        tera.add_template_files(vec![(self.dir.join("root.html"), Some("root.html"))])?;
        tera.autoescape_on(vec![]);

        Ok(tera)
    }

    /// Render a listing fragment into the page shell with the site context.
    pub fn render(
        &self,
        template: &str,
        content: &str,
        config: &Config,
    ) -> Result<String, tera::Error> {
        let mut context: Context = Context::new();

        context.insert("content", content);
        context.insert("site", &config.site);
        context.insert("logo", &config.logo);
        context.insert(
            "logo_src",
            if config.logo.svg { "logo.svg" } else { "logo.png" },
        );
        context.insert("socials", &listing::social_links(config));

        self.create_tera()?.render(template, &context)
    }
}
