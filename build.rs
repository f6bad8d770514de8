//! Build script para generar recursos de Windows

fn main() {
    // Solo generar recursos cuando el destino es Windows
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        return;
    }

    let mut res = winres::WindowsResource::new();

    res.set("ProductName", "EyeNurse")
        .set("FileDescription", "Recordatorio de descanso visual")
        .set("CompanyName", "Néstor")
        .set("OriginalFilename", "eye-nurse.exe");

    let version = env!("CARGO_PKG_VERSION");
    res.set("ProductVersion", version)
        .set("FileVersion", version);

    if let Err(e) = res.compile() {
        println!("cargo:warning=Error compilando recursos de Windows: {}", e);
    }
}
