//! Open/close text fragments for a declaration chain.
//!
//! For N type levels, type-open writes N headers and N-1 opening braces, and
//! type-close writes N-1 closing braces: the innermost declaration is opened
//! and closed by the body wrapper of `with_body`. Every block namespace
//! contributes one brace pair. Both the full text and the with-body text are
//! therefore balanced.

use std::fmt;

use csgen_common::RenderOptions;

use super::{NamespaceForm, QualifiedDeclarationInfo};
use crate::source_writer::SourceWriter;

pub struct DeclarationRenderer<'a> {
    info: &'a QualifiedDeclarationInfo,
    options: &'a RenderOptions,
}

impl<'a> DeclarationRenderer<'a> {
    pub fn new(info: &'a QualifiedDeclarationInfo, options: &'a RenderOptions) -> Self {
        Self { info, options }
    }

    pub fn namespace_open(&self) -> String {
        self.render_with(|this, writer| this.write_namespace_open(writer))
    }

    pub fn namespace_close(&self) -> String {
        self.render_with(|this, writer| this.write_namespace_close(writer))
    }

    pub fn type_open_no_namespace(&self) -> String {
        self.render_with(|this, writer| this.write_type_open(writer))
    }

    pub fn type_close_no_namespace(&self) -> String {
        self.render_with(|this, writer| this.write_type_close(writer))
    }

    /// Namespace open followed by type open.
    pub fn type_open(&self) -> String {
        self.render_with(|this, writer| {
            this.write_namespace_open(writer);
            this.write_type_open(writer);
        })
    }

    /// Type close followed by namespace close.
    pub fn type_close(&self) -> String {
        self.render_with(|this, writer| {
            this.write_type_close(writer);
            this.write_namespace_close(writer);
        })
    }

    /// The whole chain without a body.
    pub fn to_text(&self) -> String {
        self.render_with(|this, writer| {
            this.write_namespace_open(writer);
            this.write_type_open(writer);
            this.write_type_close(writer);
            this.write_namespace_close(writer);
        })
    }

    /// The whole chain wrapping `inner` in the innermost declaration's braces.
    pub fn with_body(&self, inner: &str) -> String {
        self.render_with(|this, writer| this.write_with_body(writer, inner))
    }

    /// Like `with_body`, with caller supplied using text placed before
    /// everything else.
    pub fn with_usings_and_body(&self, usings: &str, inner: &str) -> String {
        self.render_with(|this, writer| {
            writer.write(usings);
            writer.write_line();
            this.write_with_body(writer, inner);
        })
    }

    fn render_with(&self, emit: impl FnOnce(&Self, &mut SourceWriter)) -> String {
        let mut writer = SourceWriter::new(self.options.new_line);
        emit(self, &mut writer);
        writer.finish()
    }

    fn write_with_body(&self, writer: &mut SourceWriter, inner: &str) {
        self.write_namespace_open(writer);
        self.write_type_open(writer);
        writer.write_text_line("{");
        writer.write(inner);
        writer.write_line();
        writer.write_text_line("}");
        self.write_type_close(writer);
        self.write_namespace_close(writer);
    }

    fn write_namespace_open(&self, writer: &mut SourceWriter) {
        if let Some(codes) = self.options.pragma_codes() {
            writer.write_text_line(&format!("#pragma warning disable {codes}"));
            writer.write_line();
        }

        for namespace in self.info.namespaces() {
            match (namespace.form, namespace.declaration.as_deref()) {
                (NamespaceForm::Block, Some(name)) => {
                    writer.write("namespace ");
                    writer.write_text_line(name);
                    writer.write_text_line("{");
                }
                (NamespaceForm::FileScoped, Some(name)) => {
                    writer.write("namespace ");
                    writer.write(name);
                    writer.write_text_line(";");
                }
                _ => {}
            }

            for using in &namespace.usings {
                writer.write_text_line(using);
            }
            if !namespace.usings.is_empty() {
                writer.write_line();
            }
        }
    }

    fn write_namespace_close(&self, writer: &mut SourceWriter) {
        for _ in self
            .info
            .namespaces()
            .iter()
            .filter(|namespace| namespace.opens_block())
        {
            writer.write_text_line("}");
        }

        if let Some(codes) = self.options.pragma_codes() {
            writer.write_line();
            writer.write_text_line(&format!("#pragma warning restore {codes}"));
        }
    }

    fn write_type_open(&self, writer: &mut SourceWriter) {
        let types = self.info.types();
        for (i, ty) in types.iter().enumerate() {
            writer.write_text_line(&ty.declaration);
            if i + 1 < types.len() {
                writer.write_text_line("{");
            }
        }
    }

    fn write_type_close(&self, writer: &mut SourceWriter) {
        for _ in self.info.types().iter().skip(1) {
            writer.write_text_line("}");
        }
    }
}

impl fmt::Display for QualifiedDeclarationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default();
        f.write_str(&self.render(&options).to_text())
    }
}
