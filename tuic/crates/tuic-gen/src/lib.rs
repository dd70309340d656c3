//! tuic-gen - Go code generation from parsed `.tui` files.
//!
//! Walks a [`tuic_par::File`] and produces one Go source file: a package
//! clause, a deduplicated import block, and one constructor function per
//! component. Element trees are lowered to `element.New` calls with
//! configuration options; `class` attributes route through
//! [`tuic_class`], which supplies the option invocations and the engine
//! packages they require. Control flow (`@for`, `@if`) and free-standing
//! host statements pass through as Go statements, with the raw text the
//! parser preserved emitted verbatim.
//!
//! The generator never fails: it assumes a parse with no diagnostics, and
//! anything it does not recognize (unknown utility classes) is dropped
//! during emission.

#[cfg(test)]
mod tests;

use indexmap::IndexSet;

use tuic_class::{build_text_style_option, parse_classes, ImportKey};
use tuic_par::{AttrValue, Component, Element, File, Node};

/// Import path of the element package in generated code
const ELEMENT_IMPORT: &str = "github.com/tui-lang/tui/element";
/// Import path backing the `layout` import key
const LAYOUT_IMPORT: &str = "github.com/tui-lang/tui/layout";
/// Import path backing the `tui` import key
const TUI_IMPORT: &str = "github.com/tui-lang/tui/tui";

/// Generate Go source for a parsed file.
pub fn generate(file: &File) -> String {
    Generator::new().generate(file)
}

/// Go source generator
///
/// Holds the output buffer and indentation state; components are lowered
/// one at a time into the buffer, collecting required engine imports along
/// the way.
struct Generator {
    out: String,
    indent: usize,
    next_var: usize,
    engine_imports: IndexSet<&'static str>,
}

impl Generator {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
            next_var: 0,
            engine_imports: IndexSet::new(),
        }
    }

    fn generate(mut self, file: &File) -> String {
        // lower components into a side buffer first so the import block
        // can include everything the class strings turned out to need
        let mut bodies = String::new();
        for component in &file.decls {
            self.next_var = 0;
            self.emit_component(component);
            bodies.push_str(&self.out);
            self.out = String::new();
        }

        let mut header = String::new();
        header.push_str("// Code generated by tuic; do not edit.\n");
        header.push_str(&format!("package {}\n\n", file.package));

        header.push_str("import (\n");
        header.push_str(&format!("\t\"{}\"\n", ELEMENT_IMPORT));
        for import in &self.engine_imports {
            header.push_str(&format!("\t\"{}\"\n", import));
        }
        for import in &file.imports {
            match &import.alias {
                Some(alias) => header.push_str(&format!("\t{} \"{}\"\n", alias, import.path)),
                None => header.push_str(&format!("\t\"{}\"\n", import.path)),
            }
        }
        header.push_str(")\n\n");

        header.push_str(&bodies);
        header
    }

    // ==================== components ====================

    fn emit_component(&mut self, component: &Component) {
        let mut params: Vec<String> = component
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect();
        params.push("children ...*element.Element".to_string());

        self.line(&format!(
            "func {}({}) *element.Element {{",
            component.name,
            params.join(", ")
        ));
        self.indent += 1;

        // a body whose only element-producing item is a single element
        // becomes the return value directly; anything else gets grouped
        let roots = component
            .body
            .iter()
            .filter(|n| produces_element(n))
            .count();
        if roots == 1 {
            let mut returned = None;
            for node in &component.body {
                if produces_element(node) {
                    let var = self.emit_producer(node);
                    returned = Some(var);
                } else {
                    self.emit_statement(node, None);
                }
            }
            if let Some(var) = returned {
                self.line(&format!("return {}", var));
            }
        } else {
            let root = self.fresh_var();
            self.line(&format!("{} := element.New(\"group\")", root));
            for node in &component.body {
                self.emit_statement(node, Some(root.as_str()));
            }
            self.line(&format!("return {}", root));
        }

        self.indent -= 1;
        self.line("}");
        self.out.push('\n');
    }

    // ==================== nodes ====================

    /// Emit a node that yields an element value, returning its variable.
    fn emit_producer(&mut self, node: &Node) -> String {
        match node {
            Node::Element(element) => self.emit_element(element),
            Node::Call(call) => {
                let expr = self.lower_call(call);
                let var = self.fresh_var();
                self.line(&format!("{} := {}", var, expr));
                var
            }
            // callers check with produces_element first
            _ => String::new(),
        }
    }

    /// Emit a node in statement position, appending produced elements to
    /// `sink` when one is given.
    fn emit_statement(&mut self, node: &Node, sink: Option<&str>) {
        match node {
            Node::Element(element) => {
                let var = self.emit_element(element);
                if let Some(sink) = sink {
                    self.line(&format!("{}.Append({})", sink, var));
                }
            }
            Node::Call(call) => {
                let expr = self.lower_call(call);
                match sink {
                    Some(sink) => self.line(&format!("{}.Append({})", sink, expr)),
                    None => self.line(&expr),
                }
            }
            Node::Let(binding) => {
                let var = self.emit_element(&binding.element);
                self.line(&format!("{} := {}", binding.name, var));
            }
            Node::For(for_loop) => {
                if for_loop.index.is_empty() {
                    self.line(&format!(
                        "for _, {} := range {} {{",
                        for_loop.value, for_loop.iterable
                    ));
                } else {
                    self.line(&format!(
                        "for {}, {} := range {} {{",
                        for_loop.index, for_loop.value, for_loop.iterable
                    ));
                }
                self.indent += 1;
                for child in &for_loop.body {
                    self.emit_statement(child, sink);
                }
                self.indent -= 1;
                self.line("}");
            }
            Node::If(if_stmt) => {
                self.line(&format!("if {} {{", if_stmt.condition));
                self.indent += 1;
                for child in &if_stmt.then_branch {
                    self.emit_statement(child, sink);
                }
                self.indent -= 1;
                if if_stmt.else_branch.is_empty() {
                    self.line("}");
                } else {
                    self.line("} else {");
                    self.indent += 1;
                    for child in &if_stmt.else_branch {
                        self.emit_statement(child, sink);
                    }
                    self.indent -= 1;
                    self.line("}");
                }
            }
            Node::HostCode { code, .. } => {
                for line in code.lines() {
                    self.line(line);
                }
            }
            Node::Text(text) => {
                if let Some(sink) = sink {
                    self.line(&format!(
                        "{}.Append(element.Text({}))",
                        sink,
                        go_quote(&text.text)
                    ));
                }
            }
            Node::HostExpr { code, .. } => {
                if let Some(sink) = sink {
                    self.line(&format!("{}.Append(element.Value({}))", sink, code));
                }
            }
            Node::ChildrenSlot { .. } => {
                if let Some(sink) = sink {
                    self.line(&format!("{}.Append(children...)", sink));
                }
            }
        }
    }

    /// Lower an element to statements, returning the variable holding it.
    fn emit_element(&mut self, element: &Element) -> String {
        let var = self.fresh_var();
        let options = self.element_options(element);
        if options.is_empty() {
            self.line(&format!("{} := element.New({})", var, go_quote(&element.tag)));
        } else {
            self.line(&format!(
                "{} := element.New({}, {})",
                var,
                go_quote(&element.tag),
                options.join(", ")
            ));
        }
        if let Some(name) = &element.named_ref {
            self.line(&format!("{}.SetRef({})", var, go_quote(name)));
        }
        if let Some(key) = &element.ref_key {
            self.line(&format!("{}.SetKey({})", var, key));
        }
        for child in &element.children {
            self.emit_statement(child, Some(var.as_str()));
        }
        var
    }

    /// Configuration options for an element: class-string translation
    /// first, then the remaining attributes.
    fn element_options(&mut self, element: &Element) -> Vec<String> {
        let mut options = Vec::new();
        for attr in &element.attributes {
            match (&attr.name[..], &attr.value) {
                ("class", AttrValue::Str(classes)) => {
                    let translated = parse_classes(classes);
                    options.extend(translated.options);
                    let style = build_text_style_option(&translated.text_methods);
                    if !style.is_empty() {
                        options.push(style);
                        self.require(ImportKey::Tui);
                    }
                    for import in translated.needs_imports {
                        self.require(import);
                    }
                }
                (name, value) => {
                    options.push(format!(
                        "element.WithAttr({}, {})",
                        go_quote(name),
                        go_value(value)
                    ));
                }
            }
        }
        options
    }

    /// A component call as a Go expression. Body children are collected
    /// into a group element and passed as the variadic tail.
    fn lower_call(&mut self, call: &tuic_par::ComponentCall) -> String {
        let kids = if call.children.is_empty() {
            None
        } else {
            let group = self.fresh_var();
            self.line(&format!("{} := element.New(\"group\")", group));
            for child in &call.children {
                self.emit_statement(child, Some(group.as_str()));
            }
            Some(group)
        };

        let mut args = Vec::new();
        if !call.args.is_empty() {
            args.push(call.args.clone());
        }
        if let Some(group) = kids {
            args.push(format!("{}.Children()...", group));
        }
        format!("{}({})", call.name, args.join(", "))
    }

    // ==================== plumbing ====================

    fn require(&mut self, import: ImportKey) {
        let path = match import {
            ImportKey::Layout => LAYOUT_IMPORT,
            ImportKey::Tui => TUI_IMPORT,
        };
        self.engine_imports.insert(path);
    }

    fn fresh_var(&mut self) -> String {
        let var = format!("el{}", self.next_var);
        self.next_var += 1;
        var
    }

    fn line(&mut self, content: &str) {
        for _ in 0..self.indent {
            self.out.push('\t');
        }
        self.out.push_str(content);
        self.out.push('\n');
    }
}

/// True when the node lowers to an element value usable as a return
fn produces_element(node: &Node) -> bool {
    matches!(node, Node::Element(_) | Node::Call(_))
}

/// Quote a string as a Go string literal
fn go_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render an attribute value as a Go expression
fn go_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Str(s) => go_quote(s),
        AttrValue::Int(i) => i.to_string(),
        AttrValue::Float(f) => {
            let rendered = f.to_string();
            // keep a decimal point so the Go literal stays a float
            if rendered.contains('.') || rendered.contains('e') {
                rendered
            } else {
                format!("{}.0", rendered)
            }
        }
        AttrValue::Bool(b) => b.to_string(),
        AttrValue::HostExpr(code) => code.clone(),
    }
}
