use proptest::prelude::*;

use super::{split_qualified_name, CallerInfo};
use crate::Addr;

fn info(name: &str, file: &str, line: u32) -> CallerInfo {
    CallerInfo::new(name, file, line, Addr(0x5000))
}

#[test]
fn splits_on_the_last_separator() {
    assert_eq!(split_qualified_name("a::b::c"), ("a::b", "c"));
    assert_eq!(split_qualified_name("a::b"), ("a", "b"));
    assert_eq!(split_qualified_name("main"), ("", "main"));
    assert_eq!(split_qualified_name(""), ("", ""));
}

#[test]
fn leading_separator_is_kept_in_the_function() {
    assert_eq!(split_qualified_name("::f"), ("", "::f"));
    assert_eq!(split_qualified_name("::"), ("", "::"));

    let info = info("::f", "lib.rs", 1);
    assert_eq!(info.package(), "");
    assert_eq!(info.qualified_name(), "::f");
}

#[test]
fn separators_inside_generics_are_not_split() {
    assert_eq!(
        split_qualified_name("<my_app::Conn as core::fmt::Debug>::fmt"),
        ("<my_app::Conn as core::fmt::Debug>", "fmt")
    );
    assert_eq!(
        split_qualified_name("my_app::Pool<alloc::string::String>::get"),
        ("my_app::Pool<alloc::string::String>", "get")
    );
    assert_eq!(
        split_qualified_name("<fn() -> core::option::Option<u8> as my_app::Run>::run"),
        ("<fn() -> core::option::Option<u8> as my_app::Run>", "run")
    );
}

#[test]
fn closures_keep_their_marker_as_function_name() {
    let info = info("my_app::worker::spawn::{{closure}}", "src/worker.rs", 9);
    assert_eq!(info.package(), "my_app::worker::spawn");
    assert_eq!(info.function(), "{{closure}}");
}

#[test]
fn package_base_name() {
    assert_eq!(info("main", "main.rs", 1).package_base_name(), "");
    assert_eq!(info("my_app::main", "main.rs", 1).package_base_name(), "my_app");
    assert_eq!(
        info("my_app::net::tcp::connect", "tcp.rs", 1).package_base_name(),
        "tcp"
    );
    assert_eq!(
        info("<my_app::Conn as core::fmt::Debug>::fmt", "conn.rs", 1).package_base_name(),
        "<my_app::Conn as core::fmt::Debug>"
    );
}

#[test]
fn file_base_name() {
    assert_eq!(info("f", "net.rs", 1).file_base_name(), "net.rs");
    assert_eq!(info("f", "src/net.rs", 1).file_base_name(), "net.rs");
    assert_eq!(
        info("f", "/home/user/my_app/src/net/tcp.rs", 1).file_base_name(),
        "tcp.rs"
    );
    assert_eq!(info("f", "?", 0).file_base_name(), "?");
}

#[test]
fn short_label() {
    let info = info("my_app::net::tcp::connect", "src/net/tcp.rs", 42);
    assert_eq!(info.short_label(), "tcp.connect");
    assert_eq!(info.to_string(), "tcp.connect");

    assert_eq!(
        CallerInfo::new("main", "main.rs", 3, Addr::NULL).short_label(),
        ".main"
    );
}

#[test]
fn debug_label() {
    let info = info("my_app::net::tcp::connect", "src/net/tcp.rs", 42);
    assert_eq!(info.debug_label(), "src/net/tcp.rs:42->tcp.connect");
}

#[test]
fn accessors() {
    let info = info("my_app::net::connect", "src/net.rs", 7);
    assert_eq!(info.entry(), Addr(0x5000));
    assert_eq!(info.line(), 7);
    assert_eq!(info.package(), "my_app::net");
    assert_eq!(info.function(), "connect");
    assert_eq!(info.file(), "src/net.rs");
    assert_eq!(info.qualified_name(), "my_app::net::connect");
}

proptest! {
    #[test]
    fn qualified_name_is_restored(segments in prop::collection::vec("[a-z_][a-z0-9_]{0,8}", 1..6)) {
        let name = segments.join("::");
        let info = info(&name, "lib.rs", 1);

        prop_assert_eq!(info.qualified_name(), name);
        prop_assert_eq!(info.function(), segments.last().unwrap().as_str());
        prop_assert_eq!(info.package_base_name(), if segments.len() > 1 {
            segments[segments.len() - 2].as_str()
        } else {
            ""
        });
    }
}
