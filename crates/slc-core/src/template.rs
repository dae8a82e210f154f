//! Starter content for newly created SLC documents.

use log::debug;

/// File extension used by SLC documents.
pub const EXTENSION: &str = "slc";

/// Returns the starter text for a document whose list is called `name`.
///
/// The result parses cleanly when saved as `<name>.slc`.
pub fn new_document(name: &str) -> String {
    debug!(name = name; "Generating document template");
    format!(
        "Create List {name}() {{\n\n    Create Square Sq1(x:100, y:100) {{\n        Style {{ color:red; }}\n    }}\n}}\n"
    )
}
