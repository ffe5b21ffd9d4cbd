//! sunny/type-naming-convention
//!
//! Enforce that interfaces start with an uppercase `I`, type aliases with a `T`
//! and enums with an `E`. Once a declaration is renamed, every reference to the
//! old name in the same file is fixed to the new one as well: type references
//! (qualified ones by their leftmost name), `typeof`, `implements`, interface
//! `extends`, export specifiers, member objects and assignment targets.
//!
//! Reference diagnostics carry the message id of the declaration they point
//! at, so `Status.A` reports `enumName` but `User` in `implements User`
//! reports `interfaceName`.

use oxc_ast::ast::{
    AssignmentExpression, AssignmentTarget, BindingIdentifier, ComputedMemberExpression,
    ExportSpecifier, Expression, IdentifierReference, ModuleExportName, Program,
    StaticMemberExpression, TSClassImplements, TSEnumDeclaration, TSInterfaceDeclaration,
    TSInterfaceHeritage, TSTypeAliasDeclaration, TSTypeQuery, TSTypeReference,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use rustc_hash::FxHashMap;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// The type-like declarations this rule names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclarationKind {
    Interface,
    TypeAlias,
    Enum,
}

impl TypeDeclarationKind {
    /// Letter the declared name has to start with
    pub const fn prefix(self) -> char {
        match self {
            Self::Interface => 'I',
            Self::TypeAlias => 'T',
            Self::Enum => 'E',
        }
    }

    pub const fn message_id(self) -> &'static str {
        match self {
            Self::Interface => "interfaceName",
            Self::TypeAlias => "typeAliasName",
            Self::Enum => "enumName",
        }
    }

    const fn keyword(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::TypeAlias => "type",
            Self::Enum => "enum",
        }
    }

    /// Name with the required prefix, or `None` if it already has it
    pub fn renamed(self, name: &str) -> Option<String> {
        if name.starts_with(self.prefix()) {
            None
        } else {
            Some(format!("{}{}", self.prefix(), name))
        }
    }
}

/// Where a renamed declaration came from and what it becomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub renamed: String,
    pub kind: TypeDeclarationKind,
    pub declared_at: Span,
}

/// Original name -> corrected name, scoped to one lint pass
#[derive(Debug, Default)]
pub struct RenameTable {
    entries: FxHashMap<String, RenameEntry>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rename. The first declaration seen for a name wins.
    pub fn record(&mut self, name: &str, entry: RenameEntry) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&RenameEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pre-pass that fills a [`RenameTable`] with every declaration needing a prefix
struct RenameCollector<'t> {
    table: &'t mut RenameTable,
}

impl RenameCollector<'_> {
    fn collect(&mut self, id: &BindingIdentifier, kind: TypeDeclarationKind) {
        if let Some(renamed) = kind.renamed(&id.name) {
            self.table.record(
                &id.name,
                RenameEntry {
                    renamed,
                    kind,
                    declared_at: id.span,
                },
            );
        }
    }
}

impl<'a> Visit<'a> for RenameCollector<'_> {
    fn visit_ts_interface_declaration(&mut self, it: &TSInterfaceDeclaration<'a>) {
        self.collect(&it.id, TypeDeclarationKind::Interface);
        walk::walk_ts_interface_declaration(self, it);
    }

    fn visit_ts_type_alias_declaration(&mut self, it: &TSTypeAliasDeclaration<'a>) {
        self.collect(&it.id, TypeDeclarationKind::TypeAlias);
        walk::walk_ts_type_alias_declaration(self, it);
    }

    fn visit_ts_enum_declaration(&mut self, it: &TSEnumDeclaration<'a>) {
        self.collect(&it.id, TypeDeclarationKind::Enum);
        walk::walk_ts_enum_declaration(self, it);
    }
}

/// type-naming-convention rule
#[derive(Debug, Clone, Default)]
pub struct TypeNamingConvention {
    /// Only fix references that come after their declaration in the source
    pub forward_only: bool,
}

impl RuleMeta for TypeNamingConvention {
    const NAME: &'static str = "type-naming-convention";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str =
        "Require interfaces to start with `I`, type aliases with `T` and enums with `E`.";
}

impl TypeNamingConvention {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the rename table while walking, so a reference that precedes
    /// its declaration is left untouched
    pub fn forward_only() -> Self {
        Self { forward_only: true }
    }

    /// Collect the renames for a whole program before the main pass.
    ///
    /// In forward-only mode the table starts empty and is filled by
    /// [`Self::check_declaration`] as declarations are reached.
    pub fn collect_renames(&self, program: &Program<'_>) -> RenameTable {
        let mut table = RenameTable::new();
        if !self.forward_only {
            RenameCollector { table: &mut table }.visit_program(program);
        }
        table
    }

    pub fn check_interface(
        &self,
        decl: &TSInterfaceDeclaration,
        table: &mut RenameTable,
    ) -> Option<Diagnostic> {
        self.check_declaration(&decl.id, decl.span, TypeDeclarationKind::Interface, table)
    }

    pub fn check_type_alias(
        &self,
        decl: &TSTypeAliasDeclaration,
        table: &mut RenameTable,
    ) -> Option<Diagnostic> {
        self.check_declaration(&decl.id, decl.span, TypeDeclarationKind::TypeAlias, table)
    }

    pub fn check_enum(
        &self,
        decl: &TSEnumDeclaration,
        table: &mut RenameTable,
    ) -> Option<Diagnostic> {
        self.check_declaration(&decl.id, decl.span, TypeDeclarationKind::Enum, table)
    }

    /// Check a declaration's name, recording the rename on a miss
    pub fn check_declaration(
        &self,
        id: &BindingIdentifier,
        decl_span: Span,
        kind: TypeDeclarationKind,
        table: &mut RenameTable,
    ) -> Option<Diagnostic> {
        let name = id.name.as_str();
        let renamed = kind.renamed(name)?;

        table.record(
            name,
            RenameEntry {
                renamed: renamed.clone(),
                kind,
                declared_at: id.span,
            },
        );

        Some(
            Diagnostic::warning(
                Self::NAME,
                decl_span,
                format!(
                    "The {} `{}` must start with an uppercase `{}`.",
                    kind.keyword(),
                    name,
                    kind.prefix()
                ),
            )
            .with_message_id(kind.message_id())
            .with_fix(
                Fix::new(id.span, renamed.clone())
                    .with_message(format!("Rename `{}` to `{}`", name, renamed)),
            ),
        )
    }

    /// `const user: User` or `let s: Status.A` where the leftmost name was renamed
    pub fn check_type_reference(
        &self,
        reference: &TSTypeReference,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        let ident = reference.type_name.get_identifier_reference()?;
        self.check_reference(&ident.name, ident.span, reference.span, table)
    }

    /// `typeof Status`
    pub fn check_type_query(&self, query: &TSTypeQuery, table: &RenameTable) -> Option<Diagnostic> {
        let ident = query.expr_name.as_ts_type_name()?.get_identifier_reference()?;
        self.check_reference(&ident.name, ident.span, query.span, table)
    }

    /// `class A implements User`
    pub fn check_class_implements(
        &self,
        implements: &TSClassImplements,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        let ident = implements.expression.get_identifier_reference()?;
        self.check_reference(&ident.name, ident.span, implements.span, table)
    }

    /// `interface Admin extends User`. Qualified heritage is a member
    /// expression and goes through [`Self::check_static_member`].
    pub fn check_interface_heritage(
        &self,
        heritage: &TSInterfaceHeritage,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        let ident = common::as_identifier(&heritage.expression)?;
        self.check_reference(&ident.name, ident.span, heritage.span, table)
    }

    /// `export { User }`. Only the local name is fixed, so
    /// `export { User as Account }` keeps its public name.
    pub fn check_export_specifier(
        &self,
        specifier: &ExportSpecifier,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        let ModuleExportName::IdentifierReference(ident) = &specifier.local else {
            return None;
        };
        self.check_identifier(ident, table)
    }

    /// `Status.Active` where `Status` was renamed
    pub fn check_static_member(
        &self,
        member: &StaticMemberExpression,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        self.check_member_object(&member.object, table)
    }

    /// `Status["Active"]` where `Status` was renamed
    pub fn check_computed_member(
        &self,
        member: &ComputedMemberExpression,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        self.check_member_object(&member.object, table)
    }

    /// `Status = other` where `Status` was renamed
    pub fn check_assignment(
        &self,
        assign: &AssignmentExpression,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        let AssignmentTarget::AssignmentTargetIdentifier(ident) = &assign.left else {
            return None;
        };
        self.check_identifier(ident, table)
    }

    fn check_member_object(&self, object: &Expression, table: &RenameTable) -> Option<Diagnostic> {
        self.check_identifier(common::as_identifier(object)?, table)
    }

    fn check_identifier(
        &self,
        ident: &IdentifierReference,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        self.check_reference(&ident.name, ident.span, ident.span, table)
    }

    fn check_reference(
        &self,
        name: &str,
        name_span: Span,
        report_span: Span,
        table: &RenameTable,
    ) -> Option<Diagnostic> {
        let entry = table.get(name)?;
        if self.forward_only && entry.declared_at.start > name_span.start {
            return None;
        }

        Some(
            Diagnostic::warning(
                Self::NAME,
                report_span,
                format!(
                    "`{}` refers to the {} renamed to `{}`.",
                    name,
                    entry.kind.keyword(),
                    entry.renamed
                ),
            )
            .with_message_id(entry.kind.message_id())
            .with_label(entry.declared_at, "declared here")
            .with_fix(
                Fix::new(name_span, entry.renamed.clone())
                    .with_message(format!("Rename `{}` to `{}`", name, entry.renamed)),
            ),
        )
    }
}
