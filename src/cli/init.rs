//! Init command implementation
//!
//! Scaffolds a Linkboard project: `linkboard.toml`, `.env.example`, a
//! `.gitignore` and the `config/` and `data/` directories.

use super::output::Output;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (linkboard.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing Linkboard Project");

    let base_path = &config.path;

    let config_path = base_path.join("linkboard.toml");
    if config_path.exists() && !config.force {
        output.warning("linkboard.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    output.subheader("Creating directories");
    for dir in ["config", "data"] {
        let dir_path = base_path.join(dir);
        if dir_path.exists() {
            output.skipped(dir, "already exists");
            continue;
        }
        if let Err(e) = fs::create_dir_all(&dir_path) {
            output.error(&format!("Failed to create {}: {}", dir, e));
            return InitResult::Error(e.to_string());
        }
        output.created("directory", dir);
    }

    output.subheader("Creating configuration files");

    let files = [
        ("config", "linkboard.toml", generate_linkboard_toml(&config)),
        ("env", ".env.example", generate_env_example()),
    ];
    for (kind, name, content) in files {
        if let Err(e) = write_file(&base_path.join(name), &content, config.force) {
            output.error(&format!("Failed to create {}: {}", name, e));
            return InitResult::Error(e.to_string());
        }
        output.created(kind, name);
    }

    let gitignore_path = base_path.join(".gitignore");
    if !gitignore_path.exists() {
        match write_file(&gitignore_path, &generate_gitignore(), false) {
            Ok(()) => output.created("file", ".gitignore"),
            Err(e) => output.warning(&format!("Failed to create .gitignore: {}", e)),
        }
    }

    output.complete("Linkboard project initialized successfully!");

    output.header("Next Steps");
    output.newline();
    output.info("1. Start the server:");
    output.command("linkboard-server");
    output.newline();
    output.info("2. Open the dashboard's Configuration page and enter your LinkedIn app's");
    output.info("   Client ID, Client Secret and Access Token, or authorize through:");
    output.command(&format!(
        "open http://{}:{}/api/auth/login",
        config.host, config.port
    ));

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));
    output.hint("API docs available at /swagger-ui/ (requires 'swagger-ui' feature)");

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(());
    }
    fs::write(path, content)
}

fn generate_linkboard_toml(config: &InitConfig) -> String {
    format!(
        r#"# Linkboard configuration
# Every section and key is optional; the values below are the defaults.

[server]
host = "{host}"
port = {port}
log_level = "info"
# "pretty" for humans, "json" for log shippers
log_format = "pretty"
# "*" allows any origin
cors_origins = ["http://localhost:3000", "http://127.0.0.1:8080", "http://localhost:8080"]

[storage]
# Encrypted credentials (linkedin_config.enc) and their key (.key)
config_dir = "config"
# Cached profile.json, posts.json and articles.json
data_dir = "data"

[linkedin]
api_base = "https://api.linkedin.com/v2"
oauth_base = "https://www.linkedin.com/oauth/v2"
redirect_uri = "http://{host}:{port}/api/auth/callback"
scopes = ["r_liteprofile", "r_emailaddress", "w_member_social"]
cache_ttl_hours = 24
request_timeout_secs = 30
# Read LINKEDIN_CLIENT_ID/SECRET/ACCESS_TOKEN when nothing has been saved
env_credentials = false
"#,
        host = config.host,
        port = config.port
    )
}

fn generate_env_example() -> String {
    r#"# Linkboard environment overrides (copy to .env)

# Server
# LINKBOARD_HOST=127.0.0.1
# LINKBOARD_PORT=8000
# LINKBOARD_LOG=info
# RUST_LOG=linkboard=debug,tower_http=debug

# Credentials used when none have been saved through the API
# (requires env_credentials = true in linkboard.toml)
# LINKEDIN_CLIENT_ID=
# LINKEDIN_CLIENT_SECRET=
# LINKEDIN_ACCESS_TOKEN=
"#
    .to_string()
}

fn generate_gitignore() -> String {
    r#"# Linkboard
.env
config/
data/

# Rust
target/
ui/dist/
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::LinkboardConfig;
    use tempfile::TempDir;

    fn create_test_config(temp_dir: &TempDir) -> InitConfig {
        InitConfig {
            path: temp_dir.path().to_path_buf(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }

    #[test]
    fn test_generated_toml_is_valid_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut init = create_test_config(&temp_dir);
        init.port = 9123;

        let config = LinkboardConfig::from_toml_str(&generate_linkboard_toml(&init))
            .expect("generated linkboard.toml should parse");

        assert_eq!(config.server.port, 9123);
        assert_eq!(
            config.linkedin.redirect_uri,
            "http://127.0.0.1:9123/api/auth/callback"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_file_skips_existing_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "original").expect("Failed to write");

        write_file(&file_path, "new content", false).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");

        write_file(&file_path, "new content", true).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_run_creates_all_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = run(create_test_config(&temp_dir), &Output::no_color());

        assert!(matches!(result, InitResult::Success), "got {:?}", result);
        assert!(temp_dir.path().join("linkboard.toml").exists());
        assert!(temp_dir.path().join(".env.example").exists());
        assert!(temp_dir.path().join(".gitignore").exists());
        assert!(temp_dir.path().join("config").is_dir());
        assert!(temp_dir.path().join("data").is_dir());
    }

    #[test]
    fn test_run_already_exists_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("linkboard.toml"), "existing").expect("Failed to write");

        let result = run(create_test_config(&temp_dir), &Output::no_color());
        assert!(matches!(result, InitResult::AlreadyExists));
    }

    #[test]
    fn test_run_force_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("linkboard.toml"), "existing").expect("Failed to write");

        let mut config = create_test_config(&temp_dir);
        config.force = true;
        let result = run(config, &Output::no_color());

        assert!(matches!(result, InitResult::Success));
        let content =
            fs::read_to_string(temp_dir.path().join("linkboard.toml")).expect("Failed to read");
        assert!(content.contains("[server]"));
        assert!(!content.contains("existing"));
    }
}
