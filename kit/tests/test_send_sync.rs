//! Trees are plain data and can cross threads.

use javast::ast::*;
use javast::walk::NodeRef;
use javast::{Error, Formatter, FormatterOptions, SpacedPrinter};

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn test_tree_is_send_sync() {
    assert_send::<CompilationUnit>();
    assert_sync::<CompilationUnit>();
    assert_send::<Tree>();
    assert_sync::<Tree>();
    assert_send::<Expression>();
    assert_sync::<Statement>();
    assert_send::<NodeRef<'static>>();
    assert_sync::<NodeRef<'static>>();
}

#[test]
fn test_printers_are_send() {
    assert_send::<Formatter<Vec<u8>>>();
    assert_send::<SpacedPrinter<Vec<u8>>>();
    assert_send::<FormatterOptions>();
    assert_sync::<FormatterOptions>();
    assert_send::<Error>();
    assert_sync::<Error>();
}

#[test]
fn test_serialize_on_another_thread() {
    let unit = CompilationUnit {
        package: Some(Package::new("a.b")),
        ..CompilationUnit::default()
    };
    let out = std::thread::spawn(move || {
        use javast::ToTokens;
        unit.to_spaced()
    })
    .join()
    .unwrap()
    .unwrap();
    assert_eq!(out, "package a . b ;");
}
