use std::env;
use std::path::PathBuf;

/// Generate `include/listing_ffi.h` for C and mobile hosts.
fn main() {
    println!("cargo:rerun-if-changed=src");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let header = crate_dir.join("include").join("listing_ffi.h");

    let result = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("LISTING_FFI_H")
        .with_documentation(true)
        .generate();

    match result {
        Ok(bindings) => {
            bindings.write_to_file(header);
        }
        // Header generation must never break the library build.
        Err(e) => println!("cargo:warning=cbindgen failed: {e}"),
    }
}
