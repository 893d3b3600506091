use crate::theme::Theme;

/// Expands `#{name}` placeholders in an option value.
///
/// A placeholder name is an optional `@` followed by at least one of
/// `[A-Za-z0-9_-]`. Each well-formed placeholder is replaced with the
/// cross-scope lookup of its name; unknown names expand to the empty
/// string. The pass is single and left-to-right over the original value —
/// substituted text is never re-scanned, so expansion cannot recurse.
pub fn interpolate(value: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find("#{") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        match placeholder_name(after) {
            Some(name) => {
                out.push_str(theme.lookup(name));
                // Skip past the name and the closing brace.
                rest = &after[name.len() + 1..];
            }
            None => {
                // Not a placeholder. Emit the `#` and rescan from the `{`
                // so something like `#{#{n}}` still finds the inner one.
                out.push('#');
                rest = &rest[pos + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the placeholder name if `s` starts with `@?[A-Za-z0-9_-]+}`.
fn placeholder_name(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'@') {
        end = 1;
    }
    let name_start = end;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_' || bytes[end] == b'-') {
        end += 1;
    }
    if end == name_start || bytes.get(end) != Some(&b'}') {
        return None;
    }

    Some(&s[..end])
}
