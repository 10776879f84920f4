//! Formatting of bucket listings as an HTML page or console text.

use crate::{
    models::listing::ListingEntry,
    routes::routes::{ADD_PATH, DELETE_PATH},
};

/// Render the interactive listing page with add/delete controls.
pub fn listing_html(bucket: &str, entries: &[ListingEntry]) -> String {
    let bucket = escape_html(bucket);
    let mut out = String::from("<html>\n");

    out.push_str(&format!("Objects in {}:<br>\n", bucket));
    for entry in entries {
        out.push_str(&format!("Name:           {} <br>\n", escape_html(&entry.key)));
        out.push_str(&format!("Last modified:  {} <br>\n", last_modified(entry)));
        out.push_str(&format!("Size:           {} <br>\n", entry.size));
        out.push_str(&format!(
            "Storage class:  {} <br>\n",
            escape_html(storage_class(entry))
        ));
        out.push('\n');
    }
    out.push_str(&format!(
        "Found {} items in bucket {} <br>\n",
        entries.len(),
        bucket
    ));
    out.push_str("<br>\n");
    out.push_str(&post_button(ADD_PATH, "add"));
    out.push_str(&post_button(DELETE_PATH, "delete"));
    out.push_str("<br>\n");
    out.push_str("</html>\n");
    out
}

/// Render the plain-text listing used by the console server.
pub fn listing_text(bucket: &str, entries: &[ListingEntry]) -> String {
    let mut out = format!("Objects in {}:\n", bucket);

    for entry in entries {
        out.push_str(&format!("Name:           {}\n", entry.key));
        out.push_str(&format!("Last modified:  {}\n", last_modified(entry)));
        out.push_str(&format!("Size:           {}\n", entry.size));
        out.push_str(&format!("Storage class:  {}\n", storage_class(entry)));
        out.push('\n');
    }
    out.push_str(&format!(
        "Found {} items in bucket {}\n",
        entries.len(),
        bucket
    ));
    out
}

fn post_button(action: &str, label: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\"><button type=\"submit\">{}</button></form>\n",
        action, label
    )
}

fn last_modified(entry: &ListingEntry) -> String {
    entry
        .last_modified
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".into())
}

fn storage_class(entry: &ListingEntry) -> &str {
    entry.storage_class.as_deref().unwrap_or("-")
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<ListingEntry> {
        vec![
            ListingEntry::new("Hello-World", 11)
                .with_last_modified(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
                .with_storage_class("STANDARD"),
            ListingEntry::new("notes.txt", 0),
        ]
    }

    #[test]
    fn html_has_one_block_per_entry_and_a_count() {
        let html = listing_html("demo", &sample());

        assert_eq!(html.matches("Name:").count(), 2);
        assert!(html.contains("Name:           Hello-World <br>"));
        assert!(html.contains("Last modified:  2024-05-01 12:00:00 UTC <br>"));
        assert!(html.contains("Size:           11 <br>"));
        assert!(html.contains("Storage class:  STANDARD <br>"));
        assert!(html.contains("Storage class:  - <br>"));
        assert!(html.contains("Found 2 items in bucket demo <br>"));
        assert!(html.starts_with("<html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn html_controls_post_to_mutation_routes() {
        let html = listing_html("demo", &[]);

        assert!(html.contains(&format!("method=\"post\" action=\"{}\"", ADD_PATH)));
        assert!(html.contains(&format!("method=\"post\" action=\"{}\"", DELETE_PATH)));
        assert_eq!(ADD_PATH, "/s3/add");
        assert_eq!(DELETE_PATH, "/s3/delete");
        assert!(!html.contains("href="));
        assert!(html.contains("Found 0 items in bucket demo"));
    }

    #[test]
    fn html_escapes_keys() {
        let entries = vec![ListingEntry::new("<script>&", 1)];
        let html = listing_html("demo", &entries);

        assert!(html.contains("&lt;script&gt;&amp;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn text_has_no_markup() {
        let text = listing_text("demo", &sample());

        assert_eq!(text.matches("Name:").count(), 2);
        assert!(text.ends_with("Found 2 items in bucket demo\n"));
        assert!(!text.contains("<br>"));
    }
}
