use std::path::PathBuf;

/// A parsed TypeScript declaration source.
///
/// Keeps the tree-sitter tree together with the source text it indexes
/// into, so node text can be recovered by byte range.
#[derive(Clone, Debug)]
pub struct TypeScriptAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}
