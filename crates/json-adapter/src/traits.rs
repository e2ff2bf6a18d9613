use crate::Result;

/// Static facts about a parser binding.
///
/// Used to pick which binding a document should be parsed into and to name
/// the binding in diagnostics.
pub trait AdapterTraits {
    /// The parser's owning document type.
    type Document;

    fn adapter_name() -> &'static str;

    fn parse_document(text: &str) -> Result<Self::Document>;
}
