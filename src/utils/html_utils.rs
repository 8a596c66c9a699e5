//! HTML escaping for rendered dictionary text.

/// Escapes HTML special characters in entry text and appends to the provided string.
///
/// `&`, `<`, `>`, `"` and `'` become entities, and line breaks become `<br>`.
///
/// # Examples
///
/// ```
/// use verborum::utils::html_escape_text;
///
/// let mut result = String::from("Example: ");
/// html_escape_text("forum <boarium>\nforum holitorium", &mut result);
/// assert_eq!(result, "Example: forum &lt;boarium&gt;<br>forum holitorium");
/// ```
pub fn html_escape_text(text: &str, escaped_text: &mut String) {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        escaped_text.push_str(&htmlescape::encode_minimal(first));
    }
    for line in lines {
        escaped_text.push_str("<br>");
        escaped_text.push_str(&htmlescape::encode_minimal(line));
    }
}
