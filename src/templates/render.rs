//! Placeholder substitution.

use std::collections::HashMap;

use crate::templates::TemplateError;

/// Replace every `{{ key }}` in `source` with the HTML-escaped context
/// value. A placeholder with no matching key is an error; an opening
/// `{{` with no closing `}}` is treated as literal text.
pub(super) fn substitute(
    template: &str,
    source: &str,
    context: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let key = after[..end].trim();
        match context.get(key) {
            Some(value) => escape_into(value, &mut out),
            None => {
                return Err(TemplateError::MissingValue {
                    template: template.to_string(),
                    key: key.to_string(),
                })
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Append `value` to `out` with the HTML special characters escaped.
fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_named_placeholders() {
        let out = substitute("t", "Hello, {{ name }}!", &context(&[("name", "Ada")])).unwrap();
        assert_eq!(out, "Hello, Ada!");
    }

    #[test]
    fn placeholder_spacing_is_flexible() {
        let out = substitute("t", "{{name}} and {{  name  }}", &context(&[("name", "x")])).unwrap();
        assert_eq!(out, "x and x");
    }

    #[test]
    fn values_are_html_escaped() {
        let out = substitute(
            "t",
            "<p>{{ name }}</p>",
            &context(&[("name", "<script>\"&'")]),
        )
        .unwrap();
        assert_eq!(out, "<p>&lt;script&gt;&quot;&amp;&#39;</p>");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = substitute("page", "{{ who }}", &context(&[])).unwrap_err();
        match err {
            TemplateError::MissingValue { template, key } => {
                assert_eq!(template, "page");
                assert_eq!(key, "who");
            }
            other => panic!("expected MissingValue, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_marker_is_literal() {
        let out = substitute("t", "a {{ b", &context(&[])).unwrap();
        assert_eq!(out, "a {{ b");
    }
}
