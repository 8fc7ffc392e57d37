//! Server-rendered HTML pages.
//!
//! Pages are built with `format!`; every value that came from a store or a
//! form goes through [`escape_html`] first.

use std::fmt::Write;

use url::Url;

use crate::domain::{Manager, ManagerDraft, ProductId, ProductListing, Store, ValidationReport};

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode `id` as a single path segment.
///
/// IDs are free text; `/`, `?`, `#` and `%` must not change how the router
/// splits the path.
#[must_use]
pub fn path_segment(id: &str) -> String {
    match id {
        "." => return "%2E".to_string(),
        ".." => return "%2E%2E".to_string(),
        _ => {}
    }
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return id.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(id);
    }
    url.path().trim_start_matches('/').to_string()
}

/// Link target `{prefix}/{id}`, encoded for the path and escaped for HTML.
fn route(prefix: &str, id: &str) -> String {
    escape_html(&format!("{prefix}/{}", path_segment(id)))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

const NAV: &str = "<p><a href=\"/\">Home</a></p>";

fn failures(report: &ValidationReport) -> String {
    if report.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for failure in report {
        let _ = writeln!(out, "<li>{}</li>", escape_html(&failure.message()));
    }
    out.push_str("</ul>\n");
    out
}

pub fn home() -> String {
    page(
        "Home",
        "<h1>Home</h1>\n<ul>\n\
         <li><a href=\"/stores\">Stores</a></li>\n\
         <li><a href=\"/products\">Products</a></li>\n\
         <li><a href=\"/managers\">Managers (MongoDB)</a></li>\n\
         </ul>",
    )
}

pub fn stores(stores: &[Store]) -> String {
    let mut body = String::from(
        "<h1>Stores</h1>\n<table>\n\
         <tr><th>SID</th><th>Location</th><th>Manager ID</th><th>Action</th></tr>\n",
    );
    for store in stores {
        let sid = escape_html(store.id.as_str());
        let _ = writeln!(
            body,
            "<tr><td>{sid}</td><td>{}</td><td>{}</td>\
             <td><a href=\"{}\">Update</a></td></tr>",
            escape_html(&store.location),
            escape_html(store.manager_id.as_ref().map_or("", |m| m.as_str())),
            route("/stores/edit", store.id.as_str()),
        );
    }
    body.push_str("</table>\n");
    body.push_str(NAV);
    page("Stores", &body)
}

/// Edit form prefilled with the persisted state of `store`.
pub fn store_edit(store: &Store, report: &ValidationReport) -> String {
    let sid = escape_html(store.id.as_str());
    let body = format!(
        "<h1>Edit Store</h1>\n{errors}\
         <form method=\"post\" action=\"{action}\">\n\
         <p>SID: {sid}</p>\n\
         <label>Location <input type=\"text\" name=\"location\" value=\"{location}\"></label>\n\
         <label>Manager ID <input type=\"text\" name=\"mgrid\" value=\"{mgrid}\"></label>\n\
         <button type=\"submit\">Update</button>\n\
         </form>\n\
         <p><a href=\"/stores\">Back to stores</a></p>",
        errors = failures(report),
        action = route("/stores/edit", store.id.as_str()),
        location = escape_html(&store.location),
        mgrid = escape_html(store.manager_id.as_ref().map_or("", |m| m.as_str())),
    );
    page("Edit Store", &body)
}

pub fn products(listings: &[ProductListing]) -> String {
    let mut body = String::from(
        "<h1>Products</h1>\n<table>\n\
         <tr><th>Product ID</th><th>Description</th><th>Store ID</th>\
         <th>Location</th><th>Price</th><th>Action</th></tr>\n",
    );
    for listing in listings {
        let pid = escape_html(listing.product_id.as_str());
        let (sid, location, price) = match &listing.offer {
            Some(offer) => (
                escape_html(offer.store_id.as_str()),
                escape_html(&offer.location),
                offer.price.to_string(),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        let _ = writeln!(
            body,
            "<tr><td>{pid}</td><td>{}</td><td>{sid}</td><td>{location}</td><td>{price}</td>\
             <td><a href=\"{}\">Delete</a></td></tr>",
            escape_html(&listing.description),
            route("/products/delete", listing.product_id.as_str()),
        );
    }
    body.push_str("</table>\n");
    body.push_str(NAV);
    page("Products", &body)
}

/// Blocking notice shown when a product still has pricing rows.
pub fn product_in_use(product_id: &ProductId) -> String {
    let body = format!(
        "<h1>Error Message</h1>\n\
         <p>{} is currently in stores and cannot be deleted</p>\n\
         <p><a href=\"/products\">Back to products</a></p>",
        escape_html(product_id.as_str()),
    );
    page("Error", &body)
}

pub fn managers(managers: &[Manager]) -> String {
    let mut body = String::from(
        "<h1>Managers</h1>\n<p><a href=\"/managers/add\">Add Manager (MongoDB)</a></p>\n\
         <table>\n<tr><th>Manager ID</th><th>Name</th><th>Salary</th></tr>\n",
    );
    for manager in managers {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(manager.id.as_str()),
            escape_html(&manager.name),
            manager.salary,
        );
    }
    body.push_str("</table>\n");
    body.push_str(NAV);
    page("Managers", &body)
}

/// Add form, echoing `draft` back into the inputs.
pub fn manager_add(draft: &ManagerDraft, report: &ValidationReport) -> String {
    let body = format!(
        "<h1>Add Manager</h1>\n{errors}\
         <form method=\"post\" action=\"/managers/add\">\n\
         <label>Manager ID <input type=\"text\" name=\"_id\" value=\"{id}\"></label>\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
         <label>Salary <input type=\"text\" name=\"salary\" value=\"{salary}\"></label>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <p><a href=\"/managers\">Back to managers</a></p>",
        errors = failures(report),
        id = escape_html(&draft.id),
        name = escape_html(&draft.name),
        salary = escape_html(&draft.salary),
    );
    page("Add Manager", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, Rule};

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn store_values_are_escaped() {
        let store = Store::new("PP-1", "<script>alert(1)</script>");
        let html = store_edit(&store, &ValidationReport::new());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn edit_form_lists_failures() {
        let store = Store::new("PP-1", "Galway");
        let mut report = ValidationReport::new();
        report.push(Field::Location, Rule::MinLength(1));
        let html = store_edit(&store, &report);
        assert!(html.contains("<li>Location must be at least 1 character long.</li>"));
    }

    #[test]
    fn manager_form_echoes_draft() {
        let html = manager_add(
            &ManagerDraft::new("M0", "Bob", "abc"),
            &ValidationReport::new(),
        );
        assert!(html.contains("name=\"_id\" value=\"M0\""));
        assert!(html.contains("name=\"salary\" value=\"abc\""));
        assert!(!html.contains("class=\"errors\""));
    }

    #[test]
    fn path_segment_encodes_router_significant_characters() {
        assert_eq!(path_segment("PP-1"), "PP-1");
        assert_eq!(path_segment("AB/1"), "AB%2F1");
        assert_eq!(path_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(path_segment("50%"), "50%25");
        assert_eq!(path_segment(".."), "%2E%2E");
    }

    #[test]
    fn links_use_encoded_ids() {
        let html = stores(&[Store::new("PP/9", "Cork")]);
        assert!(html.contains("href=\"/stores/edit/PP%2F9\""));

        let html = store_edit(&Store::new("PP#9", "Cork"), &ValidationReport::new());
        assert!(html.contains("action=\"/stores/edit/PP%239\""));

        let listing = ProductListing {
            product_id: ProductId::new("AB/1"),
            description: "Loose tea".to_string(),
            offer: None,
        };
        let html = products(&[listing]);
        assert!(html.contains("href=\"/products/delete/AB%2F1\""));
    }

    #[test]
    fn in_use_notice_names_product() {
        let html = product_in_use(&ProductId::new("AA-1"));
        assert!(html.contains("AA-1 is currently in stores and cannot be deleted"));
    }
}
