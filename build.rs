use std::collections::BTreeMap;
use std::env;
use std::fs;

/// Keys read through `option_env!` in src/config.rs.
const CONFIG_KEYS: [&str; 5] = [
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

const ENVIRONMENTS: [&str; 2] = ["development", "production"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let dotenv = match fs::read_to_string(".env") {
        Ok(contents) => parse_dotenv(&contents),
        Err(_) => BTreeMap::new(),
    };

    for (key, value) in &dotenv {
        if !CONFIG_KEYS.contains(&key.as_str()) {
            println!("cargo:warning=.env: ignoring unknown key {}", key);
            continue;
        }
        // The process environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    let environment = env::var("ENVIRONMENT")
        .ok()
        .or_else(|| dotenv.get("ENVIRONMENT").cloned());
    if let Some(environment) = environment {
        if !ENVIRONMENTS.contains(&environment.as_str()) {
            println!(
                "cargo:warning=ENVIRONMENT={} is not one of {:?}; the development backend will be used",
                environment, ENVIRONMENTS
            );
        }
    }
}

/// `KEY=VALUE` lines; `#` comments, blank lines and an `export ` prefix are
/// tolerated, surrounding quotes are stripped.
fn parse_dotenv(contents: &str) -> BTreeMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}
