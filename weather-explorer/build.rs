use std::env;

/// Resolve the deploy profile at build time and hand it to the crate.
///
/// `WX_DEPLOY_PROFILE` wins when set; otherwise release builds target the
/// deployed backend and everything else the local one. `WX_API_BASE_URL`,
/// when set, is forwarded as an explicit override.
fn main() {
    let profile = env::var("WX_DEPLOY_PROFILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| match env::var("PROFILE").as_deref() {
            Ok("release") => "deployed".to_string(),
            _ => "local".to_string(),
        });
    println!("cargo:rustc-env=WX_DEPLOY_PROFILE={}", profile);

    if let Ok(url) = env::var("WX_API_BASE_URL") {
        println!("cargo:rustc-env=WX_API_BASE_URL={}", url);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=WX_DEPLOY_PROFILE");
    println!("cargo:rerun-if-env-changed=WX_API_BASE_URL");
}
