//! # SLC Parser
//!
//! Parser and validator for SLC scene documents. An SLC file declares one
//! named list of shapes, each with header parameters and a style block:
//!
//! ```text
//! Create List Scene() {
//!     Create Square Sq1(x:100, y:100) {
//!         Style { color:red; }
//!     }
//! }
//! ```
//!
//! [`parse`] turns such a source into a [`slc_core::Document`] or the first
//! [`Diagnostic`](error::Diagnostic) found, resolved to a 1-based line and
//! column. [`lint`] runs the line checks an editor shows while typing.
//!
//! ## Usage
//!
//! ```
//! # use slc_parser::{parse, error::Diagnostic};
//!
//! fn main() -> Result<(), Diagnostic> {
//!     let source = "Create List Foo() {\n\
//!                   Create Square Sq1(x:100, y:100) {\n\
//!                       Style { color:red; }\n\
//!                   }\n\
//!                   }";
//!
//!     let document = parse(source, Some("Foo.slc"))?;
//!     assert_eq!(document.shapes()[0].name(), "Sq1");
//!     Ok(())
//! }
//! ```

mod builder;
pub mod error;
mod lexer;
mod lint;
mod params;
mod position;
mod scanner;
mod span;
mod style;
mod tokens;
mod validate;

pub use lint::lint;
pub use position::{LineIndex, Position};
pub use span::{Span, Spanned};

use log::debug;

use slc_core::Document;

use builder::Builder;
use error::Diagnostic;

/// Parse SLC source text into a [`Document`].
///
/// The pipeline is:
///
/// 1. **Tokenize** - Split the source into positioned tokens
/// 2. **Scan** - Find the List header, shape headers and style blocks
/// 3. **Validate** - Check list and shape names
/// 4. **Convert** - Parse parameters and extract style entries
///
/// Parsing stops at the first error.
///
/// # Arguments
///
/// * `source` - The SLC source text
/// * `filename` - The file the source came from, if any. When given, the
///   List name must equal its stem, so `scenes/Foo.slc` requires
///   `Create List Foo() {`.
///
/// # Errors
///
/// Returns a [`Diagnostic`] carrying an [`ErrorCode`](error::ErrorCode),
/// labeled spans and the 1-based line/column of the offending construct.
pub fn parse(source: &str, filename: Option<&str>) -> Result<Document, Diagnostic> {
    Builder::new(source, filename).build().map_err(|diagnostic| {
        let diagnostic = diagnostic.locate(&LineIndex::new(source));
        debug!(
            code = diagnostic.code().map(|code| code.as_str()).unwrap_or(""),
            line = diagnostic.line(),
            column = diagnostic.column();
            "Parse failed"
        );
        diagnostic
    })
}
