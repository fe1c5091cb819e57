use std::env;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let linker_script = Path::new(&manifest_dir).join("linker.ld");

    println!("cargo:rustc-link-arg-bins=-T{}", linker_script.display());
    println!("cargo:rerun-if-changed=linker.ld");
}
