use crate::config::constants::REFERENCES_HEADER;
use crate::structs::probe::reference::Reference;

/// Markdown block appended to blackbox content. Empty when there is nothing to cite.
pub fn format_references(references: &[Reference]) -> String {
    if references.is_empty() {
        return String::new();
    }

    let mut text = String::from(REFERENCES_HEADER);
    for (index, reference) in references.iter().enumerate() {
        text.push_str(&format!("{}. [{}]({})\n", index + 1, reference.title, reference.link));
    }

    text
}
