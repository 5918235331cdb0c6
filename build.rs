use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // The footer copyright renders this so server and client markup agree.
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
