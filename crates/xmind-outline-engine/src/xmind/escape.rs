use std::borrow::Cow;

/// Characters XML 1.0 allows in a document.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Escapes text for use as XML character data or a quoted attribute value.
///
/// `&`, `<`, `>`, `"` and `'` become entity references. Characters that XML
/// cannot carry at all (most C0 controls) are dropped.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        html_escape::encode_quoted_attribute(text)
    } else {
        let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
        Cow::Owned(html_escape::encode_quoted_attribute(&cleaned).into_owned())
    }
}
