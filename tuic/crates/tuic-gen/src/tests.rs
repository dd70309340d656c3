//! Generator tests: parse a source, generate Go, assert on the emitted
//! shapes.

use crate::generate;
use tuic_par::parse;

fn gen(source: &str) -> String {
    let (file, diagnostics) = parse(source);
    assert!(diagnostics.is_empty(), "parse failed: {:?}", diagnostics);
    generate(&file)
}

#[test]
fn test_package_and_header() {
    let out = gen("package demo\n@component App() {\n<box/>\n}\n");
    assert!(out.starts_with("// Code generated by tuic; do not edit.\n"));
    assert!(out.contains("package demo\n"));
    assert!(out.contains("\"github.com/tui-lang/tui/element\""));
}

#[test]
fn test_single_root_is_returned_directly() {
    let out = gen("package demo\n@component App() {\n<box/>\n}\n");
    assert!(out.contains("func App(children ...*element.Element) *element.Element {"));
    assert!(out.contains("el0 := element.New(\"box\")"));
    assert!(out.contains("return el0"));
    assert!(!out.contains("element.New(\"group\")"));
}

#[test]
fn test_multiple_roots_are_grouped() {
    let out = gen("package demo\n@component App() {\n<a/>\n<b/>\n}\n");
    assert!(out.contains("element.New(\"group\")"));
    assert!(out.contains("el0.Append(el1)"));
    assert!(out.contains("el0.Append(el2)"));
    assert!(out.contains("return el0"));
}

#[test]
fn test_params_preserve_types() {
    let out = gen("package demo\n@component Row(title string, items []state.Item) {\n<box/>\n}\n");
    assert!(out.contains(
        "func Row(title string, items []state.Item, children ...*element.Element) *element.Element {"
    ));
}

#[test]
fn test_user_imports_carried_over() {
    let out = gen("package demo\nimport (\n\t\"fmt\"\n\ts \"strings\"\n)\n@component A() {\n<box/>\n}\n");
    assert!(out.contains("\t\"fmt\"\n"));
    assert!(out.contains("\ts \"strings\"\n"));
}

#[test]
fn test_class_attribute_becomes_options() {
    let out = gen("package demo\n@component A() {\n<box class=\"flex flex-col gap-2 pt-1\"/>\n}\n");
    assert!(out.contains("element.WithDirection(layout.Row)"));
    assert!(out.contains("element.WithDirection(layout.Column)"));
    assert!(out.contains("element.WithGap(2)"));
    assert!(out.contains("element.WithPaddingTRBL(1, 0, 0, 0)"));
    assert!(out.contains("\"github.com/tui-lang/tui/layout\""));
}

#[test]
fn test_text_style_option_and_tui_import() {
    let out = gen("package demo\n@component A() {\n<text class=\"font-bold text-cyan\"/>\n}\n");
    assert!(out.contains("element.WithTextStyle(tui.NewStyle().Bold().Foreground(tui.Cyan))"));
    assert!(out.contains("\"github.com/tui-lang/tui/tui\""));
}

#[test]
fn test_unknown_classes_dropped() {
    let out = gen("package demo\n@component A() {\n<box class=\"sparkle gap-1\"/>\n}\n");
    assert!(out.contains("element.WithGap(1)"));
    assert!(!out.contains("sparkle"));
}

#[test]
fn test_plain_attributes() {
    let out =
        gen("package demo\n@component A() {\n<box title=\"hi\" width=80 focus bound={state.V}/>\n}\n");
    assert!(out.contains("element.WithAttr(\"title\", \"hi\")"));
    assert!(out.contains("element.WithAttr(\"width\", 80)"));
    assert!(out.contains("element.WithAttr(\"focus\", true)"));
    assert!(out.contains("element.WithAttr(\"bound\", state.V)"));
}

#[test]
fn test_named_ref_and_key() {
    let out = gen("package demo\n@component A() {\n<box#Header key={item.ID}/>\n}\n");
    assert!(out.contains("el0.SetRef(\"Header\")"));
    assert!(out.contains("el0.SetKey(item.ID)"));
}

#[test]
fn test_text_and_expr_children() {
    let out = gen("package demo\n@component A() {\n<text>Hello there {name}</text>\n}\n");
    assert!(out.contains("el0.Append(element.Text(\"Hello there\"))"));
    assert!(out.contains("el0.Append(element.Value(name))"));
}

#[test]
fn test_for_loop_lowering() {
    let out = gen(
        "package demo\n@component A() {\n<box>\n@for i, row := range rows {\n<text>{row}</text>\n}\n</box>\n}\n",
    );
    assert!(out.contains("for i, row := range rows {"));
    assert!(out.contains("el0.Append(el1)"));
}

#[test]
fn test_for_single_variable_uses_blank_index() {
    let out = gen("package demo\n@component A() {\n<box>\n@for row := range rows {\n<s/>\n}\n</box>\n}\n");
    assert!(out.contains("for _, row := range rows {"));
}

#[test]
fn test_if_else_lowering() {
    let out = gen(
        "package demo\n@component A() {\n<box>\n@if ok {\n<a/>\n} @else {\n<b/>\n}\n</box>\n}\n",
    );
    assert!(out.contains("if ok {"));
    assert!(out.contains("} else {"));
}

#[test]
fn test_host_code_verbatim() {
    let out = gen("package demo\n@component A() {\ncount := len(items)\n<box/>\n}\n");
    assert!(out.contains("\tcount := len(items)\n"));
}

#[test]
fn test_let_binding_lowering() {
    let out = gen("package demo\n@component A() {\n@let header = <text>hi</text>\n<box/>\n}\n");
    assert!(out.contains("header := el0"));
}

#[test]
fn test_children_slot() {
    let out = gen("package demo\n@component A() {\n<box>{children...}</box>\n}\n");
    assert!(out.contains("el0.Append(children...)"));
}

#[test]
fn test_component_call_without_body() {
    let out = gen("package demo\n@component A() {\n<box>\n@Button(\"save\", onSave)\n</box>\n}\n");
    assert!(out.contains("el0.Append(Button(\"save\", onSave))"));
}

#[test]
fn test_component_call_with_body() {
    let out = gen(
        "package demo\n@component A() {\n<box>\n@Card(title) {\n<text>inner</text>\n}\n</box>\n}\n",
    );
    assert!(out.contains(":= element.New(\"group\")"));
    assert!(out.contains(".Children()...)"));
    assert!(out.contains("Card(title, "));
}

#[test]
fn test_go_quote_escapes() {
    let out = gen("package demo\n@component A() {\n<box title=\"a\\\"b\\\\c\"/>\n}\n");
    assert!(out.contains("element.WithAttr(\"title\", \"a\\\"b\\\\c\")"));
}
