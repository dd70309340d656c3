//! Edge case and integration tests for tuic-par.

#[cfg(test)]
mod tests {
    use crate::ast::{AttrValue, Node};
    use crate::test_util::{parse_err, parse_ok};
    use crate::parse;

    #[test]
    fn test_edge_empty_source() {
        let (file, diagnostics) = parse("");
        assert!(file.package.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("missing package declaration"));
    }

    #[test]
    fn test_edge_whole_file_shape() {
        let file = parse_ok(
            "package x\n@component Test() {\n\t<box>\n\t\t<text>Hello</text>\n\t</box>\n}\n",
        );
        assert_eq!(file.package, "x");
        assert_eq!(file.decls.len(), 1);
        let component = &file.decls[0];
        assert_eq!(component.name, "Test");
        assert!(component.params.is_empty());
        assert_eq!(component.body.len(), 1);
        match &component.body[0] {
            Node::Element(outer) => {
                assert_eq!(outer.tag, "box");
                assert_eq!(outer.children.len(), 1);
                match &outer.children[0] {
                    Node::Element(inner) => {
                        assert_eq!(inner.tag, "text");
                        assert!(
                            matches!(&inner.children[0], Node::Text(t) if t.text == "Hello")
                        );
                    }
                    other => panic!("expected inner element, got {:?}", other),
                }
            }
            other => panic!("expected outer element, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_full_component_mix() {
        let source = r#"package dashboard

import (
	"fmt"
	state "internal/state"
)

@component Dashboard(title string, rows []state.Row) {
	count := len(rows)
	<box#Main class="flex flex-col p-2">
		<text class="font-bold">{title}</text>
		@if count > 0 {
			@for i, row := range rows {
				<text key={row.ID}>{fmt.Sprintf("%d: %s", i, row.Name)}</text>
			}
		} @else {
			<text>no rows</text>
		}
		@Footer(count) {
			<text>inner</text>
		}
		{children...}
	</box>
}
"#;
        let file = parse_ok(source);
        assert_eq!(file.package, "dashboard");
        assert_eq!(file.imports.len(), 2);
        let component = &file.decls[0];
        assert_eq!(component.params.len(), 2);
        assert_eq!(component.params[1].ty, "[]state.Row");

        assert!(matches!(&component.body[0], Node::HostCode { code, .. } if code == "count := len(rows)"));
        match &component.body[1] {
            Node::Element(root) => {
                assert_eq!(root.named_ref.as_deref(), Some("Main"));
                assert_eq!(root.children.len(), 4);
                assert!(matches!(&root.children[1], Node::If(i) if i.condition == "count > 0"));
                assert!(matches!(&root.children[2], Node::Call(c) if c.name == "Footer"));
                assert!(matches!(&root.children[3], Node::ChildrenSlot { .. }));
            }
            other => panic!("expected root element, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_self_close_invariant() {
        // every self-closed element has zero children
        let file = parse_ok("package x\n@component C() {\n<box><a/><b/><c/></box>\n}\n");
        fn check(node: &Node) {
            if let Node::Element(e) = node {
                if e.self_close {
                    assert!(e.children.is_empty());
                }
                e.children.iter().for_each(check);
            }
        }
        file.decls[0].body.iter().for_each(check);
    }

    #[test]
    fn test_edge_error_recovery_keeps_later_decls() {
        let source = "package x\n@component Broken( {\n}\n@component Fine() {\n<box/>\n}\n";
        let (file, diagnostics) = parse_err(source);
        assert!(!diagnostics.is_empty());
        assert!(file.decls.iter().any(|c| c.name == "Fine"));
    }

    #[test]
    fn test_edge_parse_is_total_on_garbage() {
        // arbitrary junk still yields a file plus diagnostics, never a panic
        for source in [
            "}{)(",
            "package",
            "package x @component",
            "@component X( {{{",
            "package x\n@component C() {\n<box a=\n}",
            "package x\n@component C() {\n<box>{unclosed\n}",
            "\"\n`\n@\n",
        ] {
            let (_, diagnostics) = parse(source);
            assert!(!diagnostics.is_empty(), "expected diagnostics for {source:?}");
        }
    }

    #[test]
    fn test_edge_component_call_as_only_body_item() {
        let file = parse_ok("package x\n@component C() {\n@Header(\"hi\")\n}\n");
        assert!(matches!(&file.decls[0].body[0], Node::Call(c) if c.args == "\"hi\""));
    }

    #[test]
    fn test_edge_attr_value_grammar_rejects_stray_ident() {
        let (_, diagnostics) =
            parse_err("package x\n@component C() {\n<box mode=fast/>\n}\n");
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("invalid attribute value")));
    }

    #[test]
    fn test_edge_raw_string_attr() {
        let file = parse_ok("package x\n@component C() {\n<box note={`multi\nline`}/>\n}\n");
        match &file.decls[0].body[0] {
            Node::Element(e) => {
                assert_eq!(
                    e.attributes[0].value,
                    AttrValue::HostExpr("`multi\nline`".to_string())
                );
            }
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_diagnostics_in_detection_order() {
        let (_, diagnostics) = parse("package x\n@component C( {\n<box>\n</text>\n}\n");
        let lines: Vec<u32> = diagnostics.iter().map(|d| d.span.line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
    }
}
