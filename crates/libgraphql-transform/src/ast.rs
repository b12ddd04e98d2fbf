pub mod operation {
    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type Mutation = graphql_parser::query::Mutation<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Query = graphql_parser::query::Query<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    pub type ParseError = graphql_parser::query::ParseError;
    pub fn parse(query_src: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::query::parse_query::<String>(query_src)?.into_static())
    }
}

/// Type-system definitions are never transformed. `graphql_parser` rejects
/// them inside an executable document as a plain syntax error, so
/// `apollo_parser` (which parses both grammars into one tree) is used to name
/// the offending definition.
pub mod type_system {
    use apollo_parser::cst::Definition as Def;

    /// The GraphQL grammar name of the first definition in `src` that is
    /// neither an operation nor a fragment.
    ///
    /// Returns `None` when `src` has syntax errors of its own or contains
    /// only executable definitions.
    pub fn first_definition_kind(src: &str) -> Option<&'static str> {
        let tree = apollo_parser::Parser::new(src).parse();
        if tree.errors().next().is_some() {
            return None;
        }

        tree.document()
            .definitions()
            .find_map(|def| definition_kind_name(&def))
    }

    fn definition_kind_name(def: &Def) -> Option<&'static str> {
        Some(match def {
            Def::OperationDefinition(_) | Def::FragmentDefinition(_) => return None,
            Def::DirectiveDefinition(_) => "DirectiveDefinition",
            Def::SchemaDefinition(_) => "SchemaDefinition",
            Def::ScalarTypeDefinition(_) => "ScalarTypeDefinition",
            Def::ObjectTypeDefinition(_) => "ObjectTypeDefinition",
            Def::InterfaceTypeDefinition(_) => "InterfaceTypeDefinition",
            Def::UnionTypeDefinition(_) => "UnionTypeDefinition",
            Def::EnumTypeDefinition(_) => "EnumTypeDefinition",
            Def::InputObjectTypeDefinition(_) => "InputObjectTypeDefinition",
            Def::SchemaExtension(_) => "SchemaExtension",
            Def::ScalarTypeExtension(_) => "ScalarTypeExtension",
            Def::ObjectTypeExtension(_) => "ObjectTypeExtension",
            Def::InterfaceTypeExtension(_) => "InterfaceTypeExtension",
            Def::UnionTypeExtension(_) => "UnionTypeExtension",
            Def::EnumTypeExtension(_) => "EnumTypeExtension",
            Def::InputObjectTypeExtension(_) => "InputObjectTypeExtension",
        })
    }
}

pub type Value = graphql_parser::query::Value<'static, String>;
