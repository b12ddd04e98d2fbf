use anyhow::Context;
use handlebars::Handlebars;
use handlebars::handlebars_helper;
use libgraphql_transform::casing;
use libgraphql_transform::file_reader;
use libgraphql_transform::TemplateData;
use std::path::Path;

handlebars_helper!(camel_case_helper: |input: str| casing::camel_case(input));
handlebars_helper!(pascal_case_helper: |input: str| casing::pascal_case(input));

/// Renders [`TemplateData`] through a single Handlebars template.
///
/// Templates produce source code rather than HTML, so nothing is escaped. The
/// `camelCase` and `pascalCase` helpers are available to every template:
///
/// ```handlebars
/// {{#each fragments}}
/// pub struct {{pascalCase name}}Fragment;
/// {{/each}}
/// ```
pub(crate) struct TemplateRenderer {
    registry: Handlebars<'static>,
    template_name: String,
}
impl TemplateRenderer {
    pub fn from_file(template_path: &Path) -> anyhow::Result<Self> {
        let template = file_reader::read_content(template_path)
            .with_context(|| format!("Failed to load template {template_path:?}"))?;
        Self::from_template_str(&template_path.to_string_lossy(), &template)
    }

    pub fn from_template_str(template_name: &str, template: &str) -> anyhow::Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("camelCase", Box::new(camel_case_helper));
        registry.register_helper("pascalCase", Box::new(pascal_case_helper));
        registry.register_template_string(template_name, template)
            .with_context(|| format!("Failed to compile template `{template_name}`"))?;

        Ok(Self {
            registry,
            template_name: template_name.to_string(),
        })
    }

    pub fn render(&self, data: &TemplateData) -> anyhow::Result<String> {
        self.registry.render(&self.template_name, data)
            .with_context(|| format!("Failed to render template `{}`", self.template_name))
    }
}
