fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure a `protoc` binary is available even when the system does not
    // provide one, by falling back to the vendored compiler.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(path) = protoc_bin_vendored::protoc_bin_path() {
            unsafe {
                std::env::set_var("PROTOC", path);
            }
        }
    }
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["proto/auth.proto", "proto/courier.proto"], &["proto"])?;
    Ok(())
}
