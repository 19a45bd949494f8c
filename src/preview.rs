use crate::config::Config;
use crate::frontmatter::Frontmatter;
use crate::listing;
use crate::template::Templates;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

fn writeable(path: &Path) -> std::io::Result<std::fs::File> {
    use std::fs::{create_dir_all, File};

    create_dir_all(path.parent().unwrap())?;
    File::create(path)
}

fn filter_file(file: &Path) -> bool {
    let filename = match file.file_name().and_then(OsStr::to_str) {
        Some(filename) => filename,
        None => return false,
    };

    let is_backup = filename.ends_with('~');
    let is_buffer = filename.starts_with('#') && filename.ends_with('#');

    file.is_file() && filename.ends_with(".md") && !is_backup && !is_buffer
}

/// Renders a directory of posts through the theme so the components can be
/// seen end to end. The surrounding generator owns the real build.
pub struct SiteBuilder {
    config: Config,
    templates: Templates,
}

impl SiteBuilder {
    pub fn new(config: Config, theme_dir: &Path) -> Self {
        Self {
            config,
            templates: Templates::new(theme_dir),
        }
    }

    /// Collect posts under `posts_dir`, newest first. A post whose
    /// frontmatter does not parse is skipped, not fatal.
    fn collect_posts(&self, posts_dir: &Path) -> anyhow::Result<Vec<(String, Frontmatter)>> {
        let mut posts: Vec<(String, Frontmatter)> = vec![];

        for entry in walkdir::WalkDir::new(posts_dir) {
            let entry = entry?;
            let file = entry.path();

            if !filter_file(file) {
                continue;
            }

            let raw = std::fs::read_to_string(file)?;

            match Frontmatter::from_str(&raw) {
                Ok((post, _body)) => {
                    log::info!("Collected post {:?}", file);

                    let slug = file.file_stem().unwrap().to_string_lossy().into_owned();
                    posts.push((slug, post));
                }
                Err(err) => log::warn!("Skipping {:?}: {}", file, err),
            }
        }

        posts.sort_by(|a, b| b.1.datetime.cmp(&a.1.datetime));

        Ok(posts)
    }

    /// Render the listing pages for `posts_dir` into `dest`. Returns the
    /// number of posts rendered.
    pub fn build(&self, posts_dir: &Path, dest: &Path) -> anyhow::Result<usize> {
        let posts = self.collect_posts(posts_dir)?;
        let pages = listing::paginate(&posts, self.config.site.posts_per_page);
        let total = pages.len();

        for (index, page) in pages.iter().enumerate() {
            let entries = page
                .iter()
                .map(|(slug, post)| (format!("posts/{}.html", slug), post));

            let mut content = listing::post_list(entries);
            content.push_str(&listing::page_nav(index, total));

            let out = self.templates.render("root.html", &content, &self.config)?;
            let target = dest.join(listing::page_file_name(index));

            writeable(&target)?.write_all(out.as_bytes())?;
            log::info!("Wrote listing page {:?}", target);
        }

        Ok(posts.len())
    }
}

#[cfg(test)]
mod test {
    use super::SiteBuilder;
    use crate::config::Config;
    use std::path::Path;

    fn write_post(dir: &Path, slug: &str, day: u32) {
        std::fs::write(
            dir.join(format!("{}.md", slug)),
            format!(
                "---\ntitle: {slug}\ndescription: About {slug}\ndatetime: \"2024-01-{day:02}T00:00:00Z\"\n---\nBody.\n"
            ),
        )
        .unwrap();
    }

    #[test]
    fn builds_paginated_listing_pages() {
        let posts = tempfile::tempdir().unwrap();
        for (slug, day) in [("alpha", 1), ("beta", 2), ("gamma", 3), ("delta", 4)] {
            write_post(posts.path(), slug, day);
        }

        let dest = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(Config::default(), Path::new("theme"));

        let rendered = builder.build(posts.path(), dest.path()).unwrap();
        assert_eq!(rendered, 4);

        let index = std::fs::read_to_string(dest.path().join("index.html")).unwrap();
        assert!(index.contains("<title>Margin Notes</title>"));
        // Newest first: delta leads, alpha is pushed to the second page.
        assert!(index.contains("posts/delta.html"));
        assert!(!index.contains("alpha"));
        assert!(index.contains("rel=\"next\""));

        let second = std::fs::read_to_string(dest.path().join("page-2.html")).unwrap();
        assert!(second.contains("posts/alpha.html"));
        assert!(second.contains("rel=\"prev\""));
    }

    #[test]
    fn unparseable_posts_are_skipped() {
        let posts = tempfile::tempdir().unwrap();
        write_post(posts.path(), "good", 1);
        std::fs::write(posts.path().join("bad.md"), "no frontmatter here\n").unwrap();

        let dest = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(Config::default(), Path::new("theme"));

        let rendered = builder.build(posts.path(), dest.path()).unwrap();
        assert_eq!(rendered, 1);

        let index = std::fs::read_to_string(dest.path().join("index.html")).unwrap();
        assert!(index.contains("posts/good.html"));
        assert!(!index.contains("bad.html"));
    }
}
