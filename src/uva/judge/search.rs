extern crate regex;

use regex::Regex;

pub fn search_text(text: &str, regex: &Regex) -> Option<String> {
    regex
        .captures(text)
        .and_then(|v| v.get(1))
        .map(|v| v.as_str().to_owned())
}

pub struct HtmlRegex {
    hidden: Regex,
    name: Regex,
    value: Regex,
    tag: Regex,
}
impl HtmlRegex {
    pub fn new() -> Self {
        Self {
            hidden: Regex::new(r#"(?i)<input[^>]*type\s*=\s*"hidden"[^>]*>"#).unwrap(),
            name: Regex::new(r#"(?i)\bname\s*=\s*"([^"]*)""#).unwrap(),
            value: Regex::new(r#"(?i)\bvalue\s*=\s*"([^"]*)""#).unwrap(),
            tag: Regex::new(r"(?s)<[^>]*>").unwrap(),
        }
    }
    /// Name/value pairs of every hidden `<input>` in `html`, in document order.
    pub fn hidden_fields(&self, html: &str) -> Vec<(String, String)> {
        self.hidden
            .find_iter(html)
            .filter_map(|m| {
                let name = search_text(m.as_str(), &self.name)?;
                let value = search_text(m.as_str(), &self.value).unwrap_or_default();
                Some((unescape(&name), unescape(&value)))
            })
            .collect()
    }
    /// Text content of an html fragment.
    pub fn text(&self, html: &str) -> String {
        unescape(&self.tag.replace_all(html, ""))
    }
}

pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
