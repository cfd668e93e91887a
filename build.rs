//! Build script for Linkboard
//!
//! When the `ui` feature is enabled, warns if `trunk` is missing or if the
//! dashboard has not been built into `ui/dist/` yet (rust-embed needs the
//! folder to exist).

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "ui")]
    {
        check_ui_build();
        println!("cargo:rerun-if-changed=ui/dist/");
        println!("cargo:rerun-if-changed=ui/src/");
        println!("cargo:rerun-if-changed=ui/index.html");
        println!("cargo:rerun-if-changed=ui/Cargo.toml");
    }
}

#[cfg(feature = "ui")]
fn check_ui_build() {
    use std::process::Command;

    let trunk = Command::new("trunk")
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success());

    match trunk {
        Some(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            println!("cargo:warning=Linkboard UI: found {}", version.trim());
        }
        None => {
            println!("cargo:warning=Linkboard UI: `trunk` not found; install it with `cargo install trunk`");
        }
    }

    let ui_dist = std::path::Path::new("ui/dist");
    if !ui_dist.join("index.html").exists() {
        println!("cargo:warning=Linkboard UI: ui/dist/index.html is missing");
        println!("cargo:warning=Build the dashboard first: cd ui && trunk build --release");
    }
}
