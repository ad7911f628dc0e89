// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU pull in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by the system font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
