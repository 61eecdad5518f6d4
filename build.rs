use std::env;
use std::fs;
use std::path::Path;

// Variables que config.rs lee con option_env!
const FORWARDED_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "ROOT_ELEMENT_ID",
    "CATEGORIES_JSON",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                if !FORWARDED_KEYS.contains(&key) {
                    println!("cargo:warning=Ignorando variable desconocida en .env: {}", key);
                    continue;
                }

                // El entorno del proceso tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value.trim());
                }
            }
        }
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
