use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

const PLACEHOLDERS: [(&str, &str); 3] = [
    ("WIFI_SSID", "YOUR_WIFI_NAME"),
    ("WIFI_PASS", "YOUR_WIFI_PASSWORD"),
    ("OWM_API_KEY", "YOUR_API_KEY_HERE"),
];

fn ensure_generated_file(src_dir: &Path, generated_name: &str, defaults_name: &str) -> PathBuf {
    let generated_path = src_dir.join(generated_name);
    if generated_path.exists() {
        println!("cargo:rerun-if-changed={}", generated_path.display());
        return generated_path;
    }

    let defaults_path = src_dir.join(defaults_name);
    if !defaults_path.exists() {
        panic!(
            "Missing fallback template for {}: {}",
            generated_name,
            defaults_path.display()
        );
    }

    fs::copy(&defaults_path, &generated_path).unwrap_or_else(|error| {
        panic!(
            "Failed to bootstrap {} from {}: {}",
            generated_path.display(),
            defaults_path.display(),
            error
        )
    });

    println!(
        "cargo:warning=Bootstrapped {} from {}",
        generated_name, defaults_name
    );
    println!("cargo:rerun-if-changed={}", generated_path.display());
    generated_path
}

fn warn_on_placeholders(generated_path: &Path) {
    let Ok(contents) = fs::read_to_string(generated_path) else {
        return;
    };

    for (name, placeholder) in PLACEHOLDERS {
        let literal = format!("\"{placeholder}\"");
        let unedited = contents
            .lines()
            .any(|line| line.contains(name) && line.contains(&literal));
        if unedited {
            println!("cargo:warning={name} still holds placeholder {placeholder}");
        }
    }
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing");
    let src_dir = PathBuf::from(manifest_dir).join("src");

    println!("cargo:rerun-if-changed=build.rs");
    println!(
        "cargo:rerun-if-changed={}",
        src_dir.join("secrets.defaults.rs").display()
    );

    let generated = ensure_generated_file(&src_dir, "secrets.rs", "secrets.defaults.rs");
    warn_on_placeholders(&generated);
}
