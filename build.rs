#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Solo metadati: nessuna icona dedicata per ora
    let mut res = WindowsResource::new();
    res.set("FileDescription", "rServiceLog CLI")
        .set("ProductName", "rServiceLog")
        .set("OriginalFilename", "rservicelog.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {
    println!("cargo:rerun-if-changed=assets/data/services.json");
}
