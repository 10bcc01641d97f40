//! Markup helpers shared by every section renderer.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Percent-encode a string for use inside a mailto URL.
/// Unreserved characters (RFC 3986) pass through; everything else is
/// encoded byte-wise so multi-byte UTF-8 stays intact.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Fixed placeholder shown when a section fails to load: heading plus a
/// muted message. Terminal for the page load, there is no retry.
pub fn fallback_markup(heading: &str, message: &str) -> String {
    format!(
        "<h2>{}</h2>\
         <div class=\"load-fallback\" style=\"text-align:center;padding:2rem;color:var(--muted)\">\
         <p>{}</p>\
         </div>",
        html_escape(heading),
        html_escape(message),
    )
}
