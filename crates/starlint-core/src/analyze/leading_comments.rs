use swc_common::{BytePos, Spanned};
use swc_ecma_ast::{
    ClassDecl, ClassMethod, Constructor, ExportDecl, ExportDefaultDecl, ExportDefaultExpr, ExprStmt,
    FnDecl, NamedExport, PrivateMethod, VarDecl,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::check::Checker;
use crate::lints::comment_indent::comment_indent::comment_indent;

/// Walks the AST and resolves the documentation comments attached to the
/// declarations of interest.
///
/// Each `visit_*` method below is a registration entry; the work is shared by
/// [LeadingCommentVisitor::check_leading_comments], keyed by the position of
/// the node's first token, which is where the parser attaches the comments
/// that precede it.
pub struct LeadingCommentVisitor<'a, 'src> {
    checker: &'a mut Checker<'src>,
}

impl<'a, 'src> LeadingCommentVisitor<'a, 'src> {
    pub fn new(checker: &'a mut Checker<'src>) -> Self {
        Self { checker }
    }

    fn check_leading_comments(&mut self, pos: BytePos) {
        let source = self.checker.source;
        for comment in source.leading_block_comments(pos) {
            self.checker.report_diagnostic(comment_indent(&comment, source));
        }
    }
}

impl Visit for LeadingCommentVisitor<'_, '_> {
    fn visit_class_method(&mut self, n: &ClassMethod) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_private_method(&mut self, n: &PrivateMethod) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_constructor(&mut self, n: &Constructor) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, n: &FnDecl) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_var_decl(&mut self, n: &VarDecl) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_expr_stmt(&mut self, n: &ExprStmt) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, n: &ClassDecl) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    // `export const a = 1;` and friends: the comment precedes the `export`
    // token, not the inner declaration.
    fn visit_export_decl(&mut self, n: &ExportDecl) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_named_export(&mut self, n: &NamedExport) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, n: &ExportDefaultDecl) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }

    fn visit_export_default_expr(&mut self, n: &ExportDefaultExpr) {
        self.check_leading_comments(n.span_lo());
        n.visit_children_with(self);
    }
}
