const FORWARDED_VARS: [&str; 3] = [
    "PORTFOLIO_GA_ID",
    "PORTFOLIO_DEFAULT_LANG",
    "PORTFOLIO_MOTION",
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Site settings are baked in so the server render and the hydrated bundle agree
    for var in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }

    // Rerun if build.rs or the locale catalogs change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales");
}
