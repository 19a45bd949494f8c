use crate::datetime;
use crate::frontmatter::Frontmatter;
use build_html::{escape_html, Container, ContainerType, Html, HtmlContainer};

/// A post preview: linked 100×100 image, title heading, date, description.
///
/// Rendering is a pure function of the inputs. Missing fields degrade
/// silently (an absent image renders an empty `src`), matching what the
/// surrounding generator does for the rest of the page.
#[derive(Debug)]
pub struct Card<'a> {
    post: &'a Frontmatter,
    href: Option<&'a str>,
    sec_heading: bool,
}

impl<'a> Card<'a> {
    pub fn new(post: &'a Frontmatter) -> Self {
        Self {
            post,
            href: None,
            sec_heading: true,
        }
    }

    /// Where the card links to. Without one the wrapper falls back to `#`.
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Demote the title from `<h2>` to `<h3>` for nested listings.
    pub fn sub_heading(mut self) -> Self {
        self.sec_heading = false;
        self
    }

    fn title_link(&self, target: &str) -> String {
        let title = escape_html(&self.post.title);
        let level: u8 = if self.sec_heading { 2 } else { 3 };

        format!(
            r#"<a class="post-card-title" href="{target}"><h{level}>{title}</h{level}></a>"#
        )
    }
}

impl Html for Card<'_> {
    fn to_html_string(&self) -> String {
        let target = escape_html(self.href.unwrap_or("#"));
        let image = escape_html(self.post.og_image.as_deref().unwrap_or_default());
        let alt = escape_html(&self.post.title);

        let body = Container::new(ContainerType::Div)
            .with_attributes([("class", "post-card")])
            .with_image_attr(
                image,
                alt,
                [
                    ("class", "post-card-image"),
                    ("width", "100"),
                    ("height", "100"),
                ],
            )
            .with_container(
                Container::new(ContainerType::Div)
                    .with_attributes([("class", "post-card-body")])
                    .with_raw(self.title_link(&target))
                    .with_raw(datetime::html(&self.post.datetime))
                    .with_paragraph_attr(
                        escape_html(&self.post.description),
                        [("class", "post-card-desc")],
                    ),
            );

        format!(
            r#"<a class="post-card-link" href="{target}">{}</a>"#,
            body.to_html_string()
        )
    }
}

#[cfg(test)]
mod test {
    use super::Card;
    use crate::frontmatter::Frontmatter;
    use build_html::Html;
    use chrono::TimeZone;

    fn sample() -> Frontmatter {
        Frontmatter {
            title: "Hello".into(),
            description: "World".into(),
            og_image: Some("/img.jpg".into()),
            datetime: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn renders_level_two_heading_by_default() {
        let post = sample();
        let html = Card::new(&post).href("/posts/hello").to_html_string();

        assert!(html.contains("<a class=\"post-card-link\" href=\"/posts/hello\">"));
        assert!(html.contains("<a class=\"post-card-title\" href=\"/posts/hello\"><h2>Hello</h2></a>"));
        assert!(!html.contains("<h3>"));
        assert!(html.contains("src=\"/img.jpg\""));
        assert!(html.contains("alt=\"Hello\""));
        assert!(html.contains(">World</p>"));
        assert!(html.contains("Jan 1, 2024"));
    }

    #[test]
    fn sub_heading_renders_level_three() {
        let post = sample();
        let html = Card::new(&post).href("/posts/hello").sub_heading().to_html_string();

        assert!(html.contains("<h3>Hello</h3>"));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let post = sample();

        assert_eq!(
            Card::new(&post).href("/posts/hello").to_html_string(),
            Card::new(&post).href("/posts/hello").to_html_string()
        );
    }

    #[test]
    fn missing_href_and_image_degrade() {
        let mut post = sample();
        post.og_image = None;

        let html = Card::new(&post).to_html_string();

        assert!(html.contains("href=\"#\""));
        assert!(html.contains("src=\"\""));
    }

    #[test]
    fn text_is_escaped() {
        let mut post = sample();
        post.title = "Ps & Qs".into();
        post.description = "<em>not markup</em>".into();

        let html = Card::new(&post).href("/posts/ps-qs").to_html_string();

        assert!(html.contains("Ps &amp; Qs"));
        assert!(html.contains("&lt;em&gt;not markup&lt;/em&gt;"));
        assert!(!html.contains("<em>"));
    }
}
