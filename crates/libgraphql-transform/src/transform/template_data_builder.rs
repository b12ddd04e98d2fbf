use crate::ast;
use crate::file_reader;
use crate::model::Fragment;
use crate::model::Operation;
use crate::model::OperationKind;
use crate::model::TemplateData;
use crate::transform::transform_fragment;
use crate::transform::transform_operation;
use crate::TransformError;
use std::path::Path;

type Result<T> = std::result::Result<T, TransformError>;

/// Accumulates the fragments, queries and mutations of one or more GraphQL
/// documents into a single [`TemplateData`].
///
/// Each document is added all-or-nothing: if any definition in it fails to
/// transform, none of that document's definitions are kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateDataBuilder {
    fragments: Vec<Fragment>,
    mutations: Vec<Operation>,
    queries: Vec<Operation>,
}

impl TemplateDataBuilder {
    /// Transform every definition in `ast` and append the results after those
    /// of any previously added documents.
    pub fn add_document(
        mut self,
        ast: &ast::operation::Document,
    ) -> Result<Self> {
        let mut fragments = vec![];
        let mut mutations = vec![];
        let mut queries = vec![];
        for def in &ast.definitions {
            use ast::operation::Definition as Def;
            match def {
                Def::Fragment(frag_def) =>
                    fragments.push(transform_fragment(frag_def)?),

                Def::Operation(op_def) => match transform_operation(op_def)? {
                    (OperationKind::Mutation, mutation) => mutations.push(mutation),
                    (OperationKind::Query, query) => queries.push(query),
                },
            }
        }

        log::trace!(
            "Transformed {} fragments, {} queries and {} mutations.",
            fragments.len(),
            queries.len(),
            mutations.len(),
        );

        self.fragments.append(&mut fragments);
        self.mutations.append(&mut mutations);
        self.queries.append(&mut queries);
        Ok(self)
    }

    pub fn add_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Transforming {file_path:?}.");
        let content = file_reader::read_content(file_path)?;
        self.add_str(content)
    }

    /// Parse `content` as an executable document and add it via
    /// [`TemplateDataBuilder::add_document()`].
    ///
    /// A document that contains type-system definitions (`type`, `schema`,
    /// `directive`, ...) fails with
    /// [`TransformError::UnknownDefinitionKind`] naming the first one.
    pub fn add_str(self, content: impl AsRef<str>) -> Result<Self> {
        let ast_doc = parse_executable_document(content.as_ref())?;
        self.add_document(&ast_doc)
    }

    /// Produce the [`TemplateData`], with fragments stably sorted by how
    /// many fragment dependencies they have (fewest first).
    pub fn build(self) -> TemplateData {
        let mut fragments = self.fragments;
        fragments.sort_by_key(Fragment::num_fragment_dependencies);

        TemplateData {
            fragments,
            queries: self.queries,
            mutations: self.mutations,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }
}

/// Transform a single document.
pub fn transform_document(
    ast: &ast::operation::Document,
) -> Result<TemplateData> {
    Ok(TemplateDataBuilder::new().add_document(ast)?.build())
}

fn parse_executable_document(content: &str) -> Result<ast::operation::Document> {
    let parse_error = match ast::operation::parse(content) {
        Ok(ast_doc) => return Ok(ast_doc),
        Err(parse_error) => parse_error,
    };

    // The executable-document parser rejects type-system definitions as a
    // syntax error. Tell that case apart from genuinely malformed input.
    if let Some(kind) = ast::type_system::first_definition_kind(content) {
        return Err(TransformError::UnknownDefinitionKind {
            kind: kind.to_string(),
        });
    }

    Err(parse_error.into())
}
