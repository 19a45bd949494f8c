use crate::card::Card;
use crate::config::Config;
use crate::frontmatter::Frontmatter;
use build_html::{Container, ContainerType, Html, HtmlContainer};

/// Render the `<ul>` of post cards for one listing page, in input order.
pub fn post_list<'a, I, S>(entries: I) -> String
where
    I: IntoIterator<Item = (S, &'a Frontmatter)>,
    S: AsRef<str>,
{
    let mut list =
        Container::new(ContainerType::UnorderedList).with_attributes([("class", "post-list")]);

    for (href, post) in entries {
        list.add_raw(Card::new(post).href(href.as_ref()).to_html_string());
    }

    list.to_html_string()
}

/// Render the social-links nav. Entries with `active: false` are excluded.
pub fn social_links(config: &Config) -> String {
    let mut nav =
        Container::new(ContainerType::Nav).with_attributes([("class", "social-links")]);

    for social in config.active_socials() {
        let title = social.link_title(&config.site);
        nav.add_link_attr(
            &social.href,
            social.name.to_string(),
            [("title", title.as_str())],
        );
    }

    nav.to_html_string()
}

/// Split a sorted listing into pages. Zero means everything on one page.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<&[T]> {
    if per_page == 0 || items.is_empty() {
        vec![items]
    } else {
        items.chunks(per_page).collect()
    }
}

/// Output file for a 0-based listing page index.
pub fn page_file_name(page: usize) -> String {
    if page == 0 {
        "index.html".into()
    } else {
        format!("page-{}.html", page + 1)
    }
}

/// Prev/next navigation between listing pages. A single page gets none.
pub fn page_nav(page: usize, total: usize) -> String {
    if total <= 1 {
        return String::new();
    }

    let mut nav = Container::new(ContainerType::Nav).with_attributes([("class", "pagination")]);

    if page > 0 {
        nav.add_link_attr(page_file_name(page - 1), "Newer", [("rel", "prev")]);
    }
    if page + 1 < total {
        nav.add_link_attr(page_file_name(page + 1), "Older", [("rel", "next")]);
    }

    nav.to_html_string()
}
