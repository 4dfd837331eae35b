fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Tests and the demo binary call `dladdr` on their own functions; export
    // them so the loader can name them.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux") {
        println!("cargo:rustc-link-arg-tests=-rdynamic");
        println!("cargo:rustc-link-arg-bins=-rdynamic");
    }
}
