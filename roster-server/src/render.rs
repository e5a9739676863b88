//! HTML rendering for the listing page

use crate::models::User;

/// Cache directive sent with every page so each request re-reads the table.
pub const NO_STORE: &str = "no-store, max-age=0, must-revalidate";

/// Shown instead of the list when the table is empty.
pub const PLACEHOLDER: &str = "Belum ada data user.";

/// Body text of the generic error page.
pub const ERROR_MESSAGE: &str = "Terjadi kesalahan pada server.";

const HEADING: &str = "Daftar Pengguna (SQLite)";
const LIST_STYLE: &str = "margin-top: 1rem";
const ITEM_STYLE: &str = "margin-bottom: 0.5rem; border-bottom: 1px solid #ccc; padding-bottom: 0.5rem";

/// Render the full listing document.
///
/// Users appear in the order given. Each entry is keyed by the user's id.
pub fn render_page(users: &[User]) -> String {
    let mut body = String::new();

    if users.is_empty() {
        body.push_str(&format!("<p>{PLACEHOLDER}</p>"));
    } else {
        body.push_str(&format!("<ul style=\"{LIST_STYLE}\">"));
        for user in users {
            body.push_str(&format!(
                "<li data-key=\"{}\" style=\"{ITEM_STYLE}\"><strong>{}</strong> - {}</li>",
                user.id,
                escape_html(&user.name),
                escape_html(&user.email),
            ));
        }
        body.push_str("</ul>");
    }

    document(HEADING, &body)
}

/// Render the page shown when a request fails.
pub fn error_page() -> String {
    document("Kesalahan", &format!("<p>{ERROR_MESSAGE}</p>"))
}

fn document(heading: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"id\">\
         <head><meta charset=\"utf-8\"><title>Daftar Pengguna</title></head>\
         <body>\
         <main style=\"padding: 2rem; font-family: sans-serif\">\
         <h1>{heading}</h1>{body}\
         </main>\
         </body>\
         </html>"
    )
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
