//! Token layout of statements, cases and patterns.

use javast::ToTokens;
use javast::ast::*;
use javast::token::*;

fn spaced<T: ToTokens>(node: &T) -> String {
    node.to_spaced().unwrap()
}

fn id(name: &str) -> Expression {
    Expression::ident(name)
}

fn assign(variable: &str, value: &str) -> Statement {
    Statement::expr(Expression::assign(id(variable), id(value)))
}

fn int_var(name: &str) -> Variable {
    Variable::new(Type::primitive(TypeKind::Int), name)
}

fn lt(a: &str, b: &str) -> Expression {
    Expression::binary(BinaryOperator::LessThan, id(a), id(b))
}

#[test]
fn assert_with_and_without_detail() {
    let mut s = Assert {
        condition: Expression::binary(BinaryOperator::GreaterThan, id("a"), id("b")),
        detail: None,
    };
    insta::assert_snapshot!(spaced(&s), @"assert a > b ;");
    s.detail = Some(Expression::string("oops"));
    insta::assert_snapshot!(spaced(&s), @r#"assert a > b : "oops" ;"#);
}

#[test]
fn blocks() {
    let b = Block::new(vec![Statement::expr(Expression::call(
        Expression::qualified("writer.write"),
        vec![id("arguments")],
    ))]);
    insta::assert_snapshot!(spaced(&b), @"{ writer . write ( arguments ) ; }");

    let empty = Block {
        is_static: true,
        statements: Vec::new(),
    };
    insta::assert_snapshot!(spaced(&empty), @"static { }");
}

#[test]
fn jumps() {
    insta::assert_snapshot!(spaced(&Break { label: None }), @"break ;");
    insta::assert_snapshot!(spaced(&Break { label: Some("outer".into()) }), @"break outer ;");
    insta::assert_snapshot!(spaced(&Continue { label: Some("outer".into()) }), @"continue outer ;");
}

#[test]
fn do_while_loop() {
    let s = DoWhileLoop {
        condition: lt("a", "b"),
        statement: Box::new(Statement::block(vec![
            Statement::expr(
                CompoundAssignment {
                    operator: AssignmentOperator::Plus,
                    variable: Box::new(id("a")),
                    expression: Box::new(id("c")),
                }
                .into(),
            ),
            Statement::expr(Expression::unary(UnaryOperator::PostfixIncrement, id("cnt"))),
        ])),
    };
    insta::assert_snapshot!(spaced(&s), @"do { a += c ; cnt ++ ; } while ( a < b ) ;");
}

#[test]
fn nested_do_while_under_label() {
    let inner = DoWhileLoop {
        condition: lt("j", "n"),
        statement: Box::new(Statement::block(vec![Statement::expr(
            Expression::unary(UnaryOperator::PostfixIncrement, id("j")),
        )])),
    };
    let outer = DoWhileLoop {
        condition: lt("i", "n"),
        statement: Box::new(inner.into()),
    };
    let s = LabeledStatement {
        label: "start".into(),
        statement: Box::new(outer.into()),
    };
    insta::assert_snapshot!(
        spaced(&s),
        @"start : do do { j ++ ; } while ( j < n ) ; while ( i < n ) ;"
    );
}

#[test]
fn empty_statement() {
    insta::assert_snapshot!(spaced(&Statement::Empty(EmptyStatement)), @";");
}

#[test]
fn enhanced_for_loop() {
    let s = EnhancedForLoop {
        variable: Variable::new(Type::name("Elem"), "elem"),
        expression: id("elements"),
        statement: Box::new(Statement::expr(
            CompoundAssignment {
                operator: AssignmentOperator::Plus,
                variable: Box::new(id("buf")),
                expression: Box::new(id("elem")),
            }
            .into(),
        )),
    };
    insta::assert_snapshot!(spaced(&s), @"for ( Elem elem : elements ) buf += elem ;");
}

#[test]
fn for_loop() {
    let s = ForLoop {
        initializer: vec![ForInit::Variable(int_var("i").with_initializer(Expression::int("0")))],
        condition: Some(lt("i", "n")),
        update: vec![Expression::unary(UnaryOperator::PostfixIncrement, id("i"))],
        statement: Box::new(Statement::expr(Expression::call(
            Expression::qualified("buf.addOne"),
            vec![
                ArrayAccess {
                    expression: Box::new(id("array")),
                    index: Box::new(id("i")),
                }
                .into(),
            ],
        ))),
    };
    insta::assert_snapshot!(
        spaced(&s),
        @"for ( int i = 0 ; i < n ; i ++ ) buf . addOne ( array [ i ] ) ;"
    );
}

#[test]
fn for_loop_with_empty_header() {
    let s = ForLoop {
        initializer: Vec::new(),
        condition: None,
        update: Vec::new(),
        statement: Box::new(Statement::Empty(EmptyStatement)),
    };
    insta::assert_snapshot!(spaced(&s), @"for ( ; ; ) ;");
}

#[test]
fn for_loop_absent_parts_leave_only_separators() {
    let full = ForLoop {
        initializer: vec![ForInit::Expression(Expression::assign(id("i"), Expression::int("0")))],
        condition: Some(lt("i", "n")),
        update: vec![Expression::unary(UnaryOperator::PostfixIncrement, id("i"))],
        statement: Box::new(Statement::Empty(EmptyStatement)),
    };
    let bare = ForLoop {
        initializer: Vec::new(),
        condition: None,
        update: Vec::new(),
        ..full.clone()
    };
    let full = spaced(&full);
    let bare = spaced(&bare);
    assert_eq!(full.matches(';').count(), bare.matches(';').count());
    assert!(full.starts_with("for ( i = 0 ;"));
}

#[test]
fn for_loop_multiple_declarators_and_updates() {
    let s = ForLoop {
        initializer: vec![
            ForInit::Variable(int_var("i").with_initializer(Expression::int("0"))),
            ForInit::Variable(int_var("j").with_initializer(Expression::int("10"))),
        ],
        condition: Some(lt("i", "j")),
        update: vec![
            Expression::unary(UnaryOperator::PostfixIncrement, id("i")),
            Expression::unary(UnaryOperator::PostfixDecrement, id("j")),
        ],
        statement: Box::new(Statement::Empty(EmptyStatement)),
    };
    insta::assert_snapshot!(spaced(&s), @"for ( int i = 0 , j = 10 ; i < j ; i ++ , j -- ) ;");
}

#[test]
fn if_else() {
    let mut s = If {
        condition: Expression::binary(BinaryOperator::GreaterThan, id("a"), id("b")),
        then_statement: Box::new(assign("max", "a")),
        else_statement: None,
    };
    insta::assert_snapshot!(spaced(&s), @"if ( a > b ) max = a ;");
    s.else_statement = Some(Box::new(assign("max", "b")));
    insta::assert_snapshot!(spaced(&s), @"if ( a > b ) max = a ; else max = b ;");
}

#[test]
fn labeled_while() {
    let s = LabeledStatement {
        label: "outer".into(),
        statement: Box::new(
            WhileLoop {
                condition: Literal::Boolean(true).into(),
                statement: Box::new(
                    Break {
                        label: Some("outer".into()),
                    }
                    .into(),
                ),
            }
            .into(),
        ),
    };
    insta::assert_snapshot!(spaced(&s), @"outer : while ( true ) break outer ;");
}

#[test]
fn returns() {
    insta::assert_snapshot!(spaced(&Statement::ret(Some(id("n")))), @"return n ;");
    insta::assert_snapshot!(spaced(&Statement::ret(None)), @"return ;");
}

#[test]
fn switch_with_statement_cases() {
    let s = Switch {
        expression: id("n"),
        cases: vec![
            StatementCase {
                expression: Some(Expression::int("1")),
                statements: vec![
                    Statement::expr(Expression::assign(id("a"), Expression::int("5"))),
                    Break { label: None }.into(),
                ],
            }
            .into(),
            StatementCase {
                expression: None,
                statements: vec![assign("a", "b")],
            }
            .into(),
        ],
    };
    insta::assert_snapshot!(
        spaced(&s),
        @"switch ( n ) { case 1 : a = 5 ; break ; default : a = b ; }"
    );
}

#[test]
fn statement_case() {
    let c: Case = StatementCase {
        expression: Some(id("CONST")),
        statements: vec![assign("a", "b"), Break { label: None }.into()],
    }
    .into();
    assert_eq!(c.case_kind(), CaseKind::Statement);
    insta::assert_snapshot!(spaced(&c), @"case CONST : a = b ; break ;");
}

#[test]
fn rule_case() {
    let c: Case = RuleCase {
        labels: vec![id("A").into(), id("B").into()],
        body: Box::new(assign("a", "b")),
    }
    .into();
    assert_eq!(c.case_kind(), CaseKind::Rule);
    insta::assert_snapshot!(spaced(&c), @"case A , B -> a = b ;");
}

#[test_case::test_case(Vec::new(); "no labels")]
#[test_case::test_case(vec![CaseLabel::Default(DefaultCaseLabel)]; "default label")]
fn rule_case_default(labels: Vec<CaseLabel>) {
    let c = RuleCase {
        labels,
        body: Box::new(assign("a", "b")),
    };
    assert!(c.is_default());
    assert_eq!(spaced(&c), "default -> a = b ;");
}

#[test]
fn rule_case_null_and_default() {
    let c = RuleCase {
        labels: vec![Expression::null().into(), CaseLabel::Default(DefaultCaseLabel)],
        body: Box::new(assign("a", "b")),
    };
    assert!(!c.is_default());
    insta::assert_snapshot!(spaced(&c), @"case null , default -> a = b ;");
}

#[test]
fn rule_case_with_guarded_pattern() {
    let pattern: Pattern = GuardedPattern {
        pattern: Box::new(
            BindingPattern {
                variable: Variable::new(Type::name("Circle"), "c"),
            }
            .into(),
        ),
        expression: Expression::binary(
            BinaryOperator::GreaterThan,
            Expression::qualified("c.radius"),
            Expression::int("0"),
        ),
    }
    .into();
    let c = RuleCase {
        labels: vec![pattern.into()],
        body: Box::new(Statement::block(Vec::new())),
    };
    insta::assert_snapshot!(spaced(&c), @"case Circle c && c . radius > 0 -> { }");
}

#[test]
fn parenthesized_pattern() {
    let p: Pattern = ParenthesizedPattern {
        pattern: Box::new(
            BindingPattern {
                variable: int_var("a"),
            }
            .into(),
        ),
    }
    .into();
    assert_eq!(p.kind(), Kind::ParenthesizedPattern);
    insta::assert_snapshot!(spaced(&p), @"( int a )");
}

#[test]
fn synchronized() {
    let s = Synchronized {
        expression: id("obj"),
        block: Block::new(vec![Statement::expr(
            CompoundAssignment {
                operator: AssignmentOperator::Plus,
                variable: Box::new(Expression::qualified("obj.a")),
                expression: Box::new(id("b")),
            }
            .into(),
        )]),
    };
    insta::assert_snapshot!(spaced(&s), @"synchronized ( obj ) { obj . a += b ; }");
}

#[test]
fn throw_new_exception() {
    let s = Throw {
        expression: NewClass {
            enclosing_expression: None,
            type_arguments: Vec::new(),
            identifier: Box::new(Type::name("IllegalStateException")),
            arguments: vec![Expression::string("couldn't do something")],
            class_body: None,
        }
        .into(),
    };
    insta::assert_snapshot!(
        spaced(&s),
        @r#"throw new IllegalStateException ( "couldn't do something" ) ;"#
    );
}

#[test]
fn try_catch_finally() {
    let s = Try {
        resources: Vec::new(),
        block: Block::new(vec![assign("a", "b")]),
        catches: vec![Catch {
            parameter: Variable::new(Type::name("IllegalStateException"), "e"),
            block: Block::new(vec![assign("a", "c")]),
        }],
        finally_block: Some(Block::new(vec![Statement::expr(Expression::call(
            Expression::qualified("resource.close"),
            Vec::new(),
        ))])),
    };
    insta::assert_snapshot!(
        spaced(&s),
        @"try { a = b ; } catch ( IllegalStateException e ) { a = c ; } finally { resource . close ( ) ; }"
    );
}

#[test]
fn multi_catch() {
    let c = Catch {
        parameter: Variable::new(
            UnionType {
                alternatives: vec![Type::name("IOException"), Type::name("SQLException")],
            }
            .into(),
            "e",
        ),
        block: Block::default(),
    };
    insta::assert_snapshot!(spaced(&c), @"catch ( IOException | SQLException e ) { }");
}

#[test]
fn try_with_resources() {
    let s = Try {
        resources: vec![
            Resource::Variable(
                Variable::new(Type::name("InputStream"), "in")
                    .with_initializer(Expression::call(id("open"), Vec::new())),
            ),
            Resource::Expression(id("out")),
        ],
        block: Block::default(),
        catches: Vec::new(),
        finally_block: None,
    };
    insta::assert_snapshot!(spaced(&s), @"try ( InputStream in = open ( ) ; out ) { }");
}

#[test]
fn local_variable_statement() {
    let s: Statement = Variable::new(Type::name("String"), "HOST")
        .with_modifiers(Modifiers::flags([Modifier::Public, Modifier::Static]))
        .with_initializer(Expression::string("google.com"))
        .into();
    insta::assert_snapshot!(spaced(&s), @r#"public static String HOST = "google.com" ;"#);
}

#[test]
fn local_class_statement() {
    let s: Statement = TypeDecl::from(Class {
        name: "Local".into(),
        ..Class::default()
    })
    .into();
    assert_eq!(s.kind(), Kind::Class);
    insta::assert_snapshot!(spaced(&s), @"class Local { }");
}

#[test]
fn while_loop() {
    let s = WhileLoop {
        condition: id("running"),
        statement: Box::new(Statement::expr(Expression::call(id("tick"), Vec::new()))),
    };
    insta::assert_snapshot!(spaced(&s), @"while ( running ) tick ( ) ;");
}

#[test]
fn yield_statement() {
    let s = Yield {
        value: Expression::binary(BinaryOperator::Plus, id("a"), id("b")),
    };
    insta::assert_snapshot!(spaced(&s), @"yield a + b ;");
}
