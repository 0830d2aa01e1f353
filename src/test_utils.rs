//! Parse/print helpers shared by the unit tests.

use swc_core::{
    common::{sync::Lrc, FileName, SourceMap},
    ecma::{
        ast::*,
        codegen::{text_writer::JsWriter, Emitter},
        parser::{lexer::Lexer, EsSyntax, Parser, StringInput, Syntax},
    },
};

use crate::attributes::{attr_name, find_attr};

pub fn parse_module(src: &str) -> Module {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Anon), src.to_string());
    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        Default::default(),
        StringInput::from(&*fm),
        None,
    );
    Parser::new_from(lexer)
        .parse_module()
        .unwrap_or_else(|e| panic!("failed to parse {src:?}: {e:?}"))
}

pub fn print_module(module: &Module) -> String {
    let cm: Lrc<SourceMap> = Default::default();
    let mut buf = vec![];
    {
        let mut emitter = Emitter {
            cfg: Default::default(),
            cm: cm.clone(),
            comments: None,
            wr: JsWriter::new(cm, "\n", &mut buf, None),
        };
        emitter.emit_module(module).expect("emit module");
    }
    String::from_utf8(buf).expect("utf8 output").trim().to_string()
}

/// Parses a single JSX element written as an expression statement.
pub fn parse_element(src: &str) -> JSXElement {
    let module = parse_module(&format!("{src};"));
    let Some(ModuleItem::Stmt(Stmt::Expr(ExprStmt { expr, .. }))) = module.body.into_iter().next() else {
        panic!("expected an expression statement in {src:?}");
    };
    let expr = match *expr {
        Expr::Paren(paren) => *paren.expr,
        expr => expr,
    };
    match expr {
        Expr::JSXElement(el) => *el,
        other => panic!("expected a JSX element, got {other:?}"),
    }
}

pub fn print_element(el: &JSXElement) -> String {
    let module = Module {
        span: Default::default(),
        body: vec![ModuleItem::Stmt(Stmt::Expr(ExprStmt {
            span: Default::default(),
            expr: Box::new(Expr::JSXElement(Box::new(el.clone()))),
        }))],
        shebang: None,
    };
    let printed = print_module(&module);
    printed.strip_suffix(';').unwrap_or(&printed).to_string()
}

pub fn attr_names(attrs: &[JSXAttrOrSpread]) -> Vec<&str> {
    attrs.iter().filter_map(attr_name).collect()
}

pub fn string_value(el: &JSXElement, name: &str) -> Option<String> {
    match &find_attr(&el.opening.attrs, name)?.value {
        Some(JSXAttrValue::Lit(Lit::Str(s))) => Some(s.value.to_string()),
        _ => None,
    }
}
