//! Formatted output through [`Formatter`].

use javast::ast::*;
use javast::token::*;
use javast::{Error, Formatter, FormatterOptions, Printer, ToTokens};

fn id(name: &str) -> Expression {
    Expression::ident(name)
}

fn pretty_printer() -> Class {
    Class {
        modifiers: Modifiers::flags([Modifier::Public, Modifier::Final]),
        name: "PrettyPrinter".into(),
        type_parameters: vec![TypeParameter::bounded("T", vec![Type::name("Printable")])],
        extends: Some(Type::name("ConsolePrinter")),
        implements: vec![Type::name("Printer")],
        ..Class::default()
    }
}

fn point() -> Class {
    Class {
        name: "A".into(),
        members: vec![
            Variable::new(Type::primitive(TypeKind::Int), "x").into(),
            Method {
                return_type: Some(Type::primitive(TypeKind::Void)),
                body: Some(Block::new(vec![Statement::ret(None)])),
                ..Method::new("f")
            }
            .into(),
        ],
        ..Class::default()
    }
}

/// Wraps a [`Formatter`] and checks every `{` and `}` against its depth.
struct BraceProbe {
    inner: Formatter<Vec<u8>>,
    opens: usize,
    closes: usize,
}

impl Printer for BraceProbe {
    fn word(&mut self, token: &str) -> Result<usize, Error> {
        let n = self.inner.word(token)?;
        match token {
            "{" => self.opens += 1,
            "}" => self.closes += 1,
            _ => {}
        }
        assert_eq!(self.inner.indent_depth(), self.opens - self.closes);
        Ok(n)
    }

    fn bytes_written(&self) -> usize {
        self.inner.bytes_written()
    }
}

#[test]
fn class_header() {
    let out = pretty_printer().to_source().unwrap();
    assert_eq!(
        out,
        "public final class PrettyPrinter <T extends Printable> extends ConsolePrinter implements Printer {\n}"
    );
}

#[test]
fn members_on_their_own_lines() {
    let out = point().to_source().unwrap();
    assert_eq!(
        out,
        "class A {\n    int x ;\n    void f ( ) {\n        return ;\n    }\n}"
    );
}

#[test]
fn compilation_unit_lines() {
    let unit = CompilationUnit {
        package: Some(Package::new("printer")),
        imports: vec![Import::new("java.util.List")],
        type_decls: vec![
            Class {
                name: "A".into(),
                ..Class::default()
            }
            .into(),
        ],
        ..CompilationUnit::default()
    };
    assert_eq!(
        unit.to_source().unwrap(),
        "package printer ;\nimport java.util.List ;\nclass A {\n}"
    );
}

#[test]
fn member_chain_is_glued() {
    let stmt = Statement::expr(Expression::call(
        Expression::qualified("System.out.println"),
        vec![Expression::string("hi")],
    ));
    insta::assert_snapshot!(stmt.to_source().unwrap(), @r#"System.out.println ( "hi" ) ;"#);
}

#[test]
fn generic_brackets_hug_their_arguments() {
    let v = Variable::new(
        Type::name("Map").parameterized(vec![Type::name("String"), Type::name("String")]),
        "m",
    );
    insta::assert_snapshot!(v.to_source().unwrap(), @"Map <String , String> m");
}

#[test]
fn relational_operators_share_generic_layout() {
    let gt = Expression::binary(BinaryOperator::GreaterThan, id("a"), id("b"));
    assert_eq!(gt.to_source().unwrap(), "a> b");
    let lt = Expression::binary(BinaryOperator::LessThan, id("a"), id("b"));
    assert_eq!(lt.to_source().unwrap(), "a <b");
}

#[test]
fn for_header_semicolons_break_lines() {
    let s = ForLoop {
        initializer: vec![ForInit::Variable(
            Variable::new(Type::primitive(TypeKind::Int), "i").with_initializer(Expression::int("0")),
        )],
        condition: Some(Expression::binary(BinaryOperator::NotEqualTo, id("i"), id("n"))),
        update: vec![Expression::unary(UnaryOperator::PostfixIncrement, id("i"))],
        statement: Box::new(Statement::Empty(EmptyStatement)),
    };
    assert_eq!(s.to_source().unwrap(), "for ( int i = 0 ;\ni != n ;\ni ++ ) ;");
}

#[test]
fn custom_indentation_unit() {
    let mut f = Formatter::with_options(Vec::new(), FormatterOptions::DEFAULT.with_indentation("\t"));
    point().write(&mut f).unwrap();
    assert_eq!(f.indent_depth(), 0);
    assert_eq!(
        String::from_utf8(f.into_inner()).unwrap(),
        "class A {\n\tint x ;\n\tvoid f ( ) {\n\t\treturn ;\n\t}\n}"
    );
}

#[test]
fn depth_tracks_unclosed_braces() {
    let body = Block::new(vec![
        Statement::block(vec![Statement::block(Vec::new())]),
        Switch {
            expression: id("n"),
            cases: vec![
                RuleCase {
                    labels: Vec::new(),
                    body: Box::new(Statement::block(vec![Statement::ret(None)])),
                }
                .into(),
            ],
        }
        .into(),
    ]);
    let class = Class {
        name: "Outer".into(),
        members: vec![
            Method {
                return_type: Some(Type::primitive(TypeKind::Void)),
                body: Some(body),
                ..Method::new("run")
            }
            .into(),
            TypeDecl::from(point()).into(),
        ],
        ..Class::default()
    };

    let mut probe = BraceProbe {
        inner: Formatter::new(Vec::new()),
        opens: 0,
        closes: 0,
    };
    let n = class.write(&mut probe).unwrap();
    assert_eq!(probe.opens, probe.closes);
    assert_eq!(probe.opens, 8);
    assert_eq!(probe.inner.indent_depth(), 0);
    assert_eq!(n, probe.bytes_written());
}

#[test]
fn output_is_deterministic() {
    let unit = CompilationUnit {
        package: Some(Package::new("a.b")),
        type_decls: vec![pretty_printer().into(), point().into()],
        ..CompilationUnit::default()
    };
    let first = unit.to_source().unwrap();
    let second = unit.clone().to_source().unwrap();
    assert_eq!(first, second);

    let mut f = Formatter::new(Vec::new());
    let n = unit.write(&mut f).unwrap();
    assert_eq!(n, first.len());
    assert_eq!(f.into_inner(), first.into_bytes());
}
