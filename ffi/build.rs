fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");

    // Header generation is best-effort; a cbindgen failure must not break
    // the Rust build.
    if let Ok(bindings) = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("GALLERY_FFI_H")
        .generate()
    {
        bindings.write_to_file(format!("{crate_dir}/include/gallery.h"));
    }
}
