use chrono::{DateTime, SecondsFormat, Utc};

/// Human-readable form shown inside the card, e.g. `Jan 1, 2024`.
pub fn display(datetime: &DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y").to_string()
}

/// The `<time>` fragment embedded by the card renderer. The machine-readable
/// attribute stays RFC 3339.
pub fn html(datetime: &DateTime<Utc>) -> String {
    format!(
        r#"<time class="post-card-datetime" datetime="{}">{}</time>"#,
        datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
        display(datetime)
    )
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    #[test]
    fn display() {
        let datetime = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(super::display(&datetime), "Jan 1, 2024");
    }

    #[test]
    fn html() {
        let datetime = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            super::html(&datetime),
            "<time class=\"post-card-datetime\" datetime=\"2024-01-01T00:00:00Z\">Jan 1, 2024</time>"
        );
    }
}
