//! AST visitor that records imports, classes and functions.
//!
//! The generated `Visit` trait dispatches on node kind and walks every child
//! field in source order. OXC nodes carry no parent links, so whether a
//! declaration is exported is tracked by remembering the span of the export
//! wrapper while its declaration is being visited.

use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, Class, ClassElement, ClassType, Declaration,
    ExportDefaultDeclaration, ExportDefaultDeclarationKind, ExportNamedDeclaration, Expression,
    FormalParameters, Function, FunctionType, ImportDeclaration, ImportDeclarationSpecifier,
    MethodDefinitionKind, MethodDefinitionType, PropertyKey, VariableDeclaration,
};
use oxc_ast_visit::{Visit, walk};
use oxc_semantic::ScopeFlags;
use oxc_span::{GetSpan, Span};

use crate::model::{
    ANONYMOUS_CLASS, ANONYMOUS_FUNCTION, PLACEHOLDER_PARAM, ParsedClass, ParsedFile,
    ParsedFunction, ParsedImport,
};
use crate::range::SourceRange;

pub(crate) struct StructureCollector<'s> {
    source_text: &'s str,
    parsed: ParsedFile,
    /// Span of the export statement wrapping the declaration about to be visited.
    /// Taken by the first class, function or variable declaration visited.
    export_wrapper: Option<Span>,
}

impl<'s> StructureCollector<'s> {
    pub(crate) fn new(source_text: &'s str, parsed: ParsedFile) -> Self {
        Self {
            source_text,
            parsed,
            export_wrapper: None,
        }
    }

    pub(crate) fn finish(self) -> ParsedFile {
        self.parsed
    }

    fn method_names(&self, class: &Class) -> Vec<String> {
        class
            .body
            .body
            .iter()
            .filter_map(|element| match element {
                ClassElement::MethodDefinition(method)
                    if matches!(method.r#type, MethodDefinitionType::MethodDefinition)
                        && matches!(
                            method.kind,
                            MethodDefinitionKind::Method | MethodDefinitionKind::Constructor
                        ) =>
                {
                    Some(self.key_name(&method.key))
                }
                _ => None,
            })
            .collect()
    }

    fn key_name(&self, key: &PropertyKey) -> String {
        match key {
            PropertyKey::StaticIdentifier(ident) => ident.name.to_string(),
            PropertyKey::PrivateIdentifier(ident) => ident.name.to_string(),
            PropertyKey::StringLiteral(lit) => lit.value.to_string(),
            // Computed keys keep their source text, e.g. `Symbol.iterator`.
            other => SourceRange::from(other.span())
                .slice(self.source_text)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl<'s, 'a> Visit<'a> for StructureCollector<'s> {
    fn visit_import_declaration(&mut self, import: &ImportDeclaration<'a>) {
        let specifiers = import
            .specifiers
            .iter()
            .flatten()
            .map(|specifier| match specifier {
                ImportDeclarationSpecifier::ImportSpecifier(named) => named.local.name.to_string(),
                ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
                    default.local.name.to_string()
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
                    namespace.local.name.to_string()
                }
            })
            .collect();

        self.parsed
            .imports
            .push(ParsedImport::new(import.source.value.as_str(), specifiers));

        walk::walk_import_declaration(self, import);
    }

    fn visit_export_named_declaration(&mut self, export: &ExportNamedDeclaration<'a>) {
        if export.declaration.as_ref().is_some_and(is_recorded_declaration) {
            self.export_wrapper = Some(export.span);
        }
        walk::walk_export_named_declaration(self, export);
        self.export_wrapper = None;
    }

    fn visit_export_default_declaration(&mut self, export: &ExportDefaultDeclaration<'a>) {
        let wraps_declaration = match &export.declaration {
            ExportDefaultDeclarationKind::ClassDeclaration(_) => true,
            ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                matches!(function.r#type, FunctionType::FunctionDeclaration)
            }
            _ => false,
        };
        if wraps_declaration {
            self.export_wrapper = Some(export.span);
        }
        walk::walk_export_default_declaration(self, export);
        self.export_wrapper = None;
    }

    fn visit_class(&mut self, class: &Class<'a>) {
        let wrapper = self.export_wrapper.take();

        if matches!(class.r#type, ClassType::ClassDeclaration) {
            let name = class
                .id
                .as_ref()
                .map_or(ANONYMOUS_CLASS, |id| id.name.as_str())
                .to_string();

            let methods = self.method_names(class);
            self.parsed.classes.push(ParsedClass {
                name,
                methods,
                is_exported: wrapper.is_some(),
                range: SourceRange::from(wrapper.unwrap_or(class.span)),
            });
        }

        walk::walk_class(self, class);
    }

    fn visit_function(&mut self, function: &Function<'a>, flags: ScopeFlags) {
        let wrapper = self.export_wrapper.take();

        // Function expressions are recorded through their variable declarator,
        // and `declare function` signatures have no body worth chunking.
        if matches!(function.r#type, FunctionType::FunctionDeclaration) {
            let name = function
                .id
                .as_ref()
                .map_or(ANONYMOUS_FUNCTION, |id| id.name.as_str())
                .to_string();

            self.parsed.functions.push(ParsedFunction {
                name,
                params: param_names(&function.params),
                is_async: function.r#async,
                is_exported: wrapper.is_some(),
                range: SourceRange::from(wrapper.unwrap_or(function.span)),
            });
        }

        walk::walk_function(self, function, flags);
    }

    fn visit_variable_declaration(&mut self, declaration: &VariableDeclaration<'a>) {
        let wrapper = self.export_wrapper.take();
        let range = SourceRange::from(wrapper.unwrap_or(declaration.span));

        for declarator in &declaration.declarations {
            let Some(init) = &declarator.init else {
                continue;
            };

            let (params, is_async) = match init.without_parentheses() {
                Expression::ArrowFunctionExpression(arrow) => {
                    (param_names(&arrow.params), arrow.r#async)
                }
                Expression::FunctionExpression(function) => {
                    (param_names(&function.params), function.r#async)
                }
                _ => continue,
            };

            self.parsed.functions.push(ParsedFunction {
                name: binding_name(&declarator.id)
                    .unwrap_or(ANONYMOUS_FUNCTION)
                    .to_string(),
                params,
                is_async,
                is_exported: wrapper.is_some(),
                range,
            });
        }

        walk::walk_variable_declaration(self, declaration);
    }
}

/// Declarations that produce a record when wrapped in `export`.
fn is_recorded_declaration(declaration: &Declaration) -> bool {
    match declaration {
        Declaration::ClassDeclaration(_) | Declaration::VariableDeclaration(_) => true,
        Declaration::FunctionDeclaration(function) => {
            matches!(function.r#type, FunctionType::FunctionDeclaration)
        }
        _ => false,
    }
}

fn param_names(params: &FormalParameters) -> Vec<String> {
    let mut names: Vec<String> = params
        .items
        .iter()
        .map(|param| {
            binding_name(&param.pattern)
                .unwrap_or(PLACEHOLDER_PARAM)
                .to_string()
        })
        .collect();

    if params.rest.is_some() {
        names.push(PLACEHOLDER_PARAM.to_string());
    }

    names
}

fn binding_name<'b>(pattern: &'b BindingPattern) -> Option<&'b str> {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}
