//! GitHub Pages deployment configuration.
//!
//! Wires a scaffolded project for `npm run deploy`: installs the gh-pages
//! helper, adds `predeploy`/`deploy` scripts to the package manifest, and
//! points Vite's `base` at the project path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::npm;

/// Configure the project in the current working directory for GitHub Pages.
///
/// The helper install is fatal on failure. A missing or unparseable
/// `package.json` logs an error and returns success without further
/// configuration.
pub fn configure_github_pages(name: &str) -> Result<()> {
    npm::install_gh_pages()?;
    apply_deploy_config(Path::new("."), name)
}

/// Apply the manifest and vite config edits for Pages deployment.
pub fn apply_deploy_config(project_root: &Path, name: &str) -> Result<()> {
    let manifest = project_root.join("package.json");
    if !manifest.exists() {
        error!("package.json not found");
        return Ok(());
    }

    let content = fs::read_to_string(&manifest).context("Failed to read package.json")?;
    let mut pkg: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            error!("Failed to parse package.json: {err}");
            return Ok(());
        }
    };

    let fields = pkg
        .as_object_mut()
        .context("package.json is not a JSON object")?;
    let scripts = fields
        .entry("scripts")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .context("package.json 'scripts' is not an object")?;

    scripts.insert("predeploy".to_string(), json!("npm run build"));
    scripts.insert("deploy".to_string(), json!("gh-pages -d dist"));

    let pretty = serde_json::to_string_pretty(&pkg)?;
    fs::write(&manifest, pretty).context("Failed to write package.json")?;
    info!("Updated package.json with predeploy and deploy scripts");

    let config = project_root.join("vite.config.js");
    if !config.exists() {
        warn!("vite.config.js not found; cannot set base property for GitHub Pages");
        return Ok(());
    }

    match inject_base_path(&config, name) {
        Ok(()) => info!("Updated vite.config.js with base property for GitHub Pages"),
        Err(err) => error!("Failed to update vite.config.js: {err}"),
    }

    Ok(())
}

/// Insert `base: '/<name>',` as the first property of the config object.
/// Only the first `defineConfig({` token is patched.
fn inject_base_path(config: &Path, name: &str) -> Result<()> {
    let text = fs::read_to_string(config)?;

    let open_re = Regex::new(r"(defineConfig\(\s*\{)").unwrap();
    let patched = open_re.replace(&text, format!("${{1}}\n  base: '/{name}',"));

    fs::write(config, patched.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VITE_CONFIG: &str = "import { defineConfig } from 'vite'\n\
                               import react from '@vitejs/plugin-react'\n\
                               \n\
                               export default defineConfig({\n\
                               \x20 plugins: [\n\
                               \x20   react(),\n\
                               \n\
                               \x20 ]\n\
                               })";

    #[test]
    fn manifest_gains_deploy_scripts_preserving_existing() -> Result<()> {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name": "demo", "scripts": {"test": "jest"}, "version": "0.0.0"}"#,
        )?;
        fs::write(temp.path().join("vite.config.js"), VITE_CONFIG)?;

        apply_deploy_config(temp.path(), "demo")?;

        let pkg: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("package.json"))?)?;
        assert_eq!(pkg["scripts"]["test"], "jest");
        assert_eq!(pkg["scripts"]["predeploy"], "npm run build");
        assert_eq!(pkg["scripts"]["deploy"], "gh-pages -d dist");
        assert_eq!(pkg["name"], "demo");
        assert_eq!(pkg["version"], "0.0.0");
        Ok(())
    }

    #[test]
    fn manifest_without_scripts_gets_a_scripts_block() -> Result<()> {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "demo"}"#)?;

        apply_deploy_config(temp.path(), "demo")?;

        let pkg: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("package.json"))?)?;
        assert_eq!(pkg["scripts"]["predeploy"], "npm run build");
        assert_eq!(pkg["scripts"]["deploy"], "gh-pages -d dist");
        Ok(())
    }

    #[test]
    fn base_path_is_first_property_of_config_object() -> Result<()> {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "demo"}"#)?;
        fs::write(temp.path().join("vite.config.js"), VITE_CONFIG)?;

        apply_deploy_config(temp.path(), "demo")?;

        let config = fs::read_to_string(temp.path().join("vite.config.js"))?;
        assert!(config.contains("defineConfig({\n  base: '/demo',\n  plugins: ["));
        Ok(())
    }

    #[test]
    fn base_path_is_injected_at_most_once() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("vite.config.js");
        fs::write(
            &config_path,
            "export default defineConfig({})\n// defineConfig({ in a comment\n",
        )?;

        inject_base_path(&config_path, "demo")?;

        let config = fs::read_to_string(&config_path)?;
        assert_eq!(config.matches("base: '/demo',").count(), 1);
        assert!(config.starts_with("export default defineConfig({\n  base: '/demo',})"));
        Ok(())
    }

    #[test]
    fn missing_manifest_is_not_fatal() -> Result<()> {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vite.config.js"), VITE_CONFIG)?;

        apply_deploy_config(temp.path(), "demo")?;

        // No manifest means no edits at all, including the vite config
        let config = fs::read_to_string(temp.path().join("vite.config.js"))?;
        assert!(!config.contains("base:"));
        assert!(!temp.path().join("package.json").exists());
        Ok(())
    }

    #[test]
    fn unparseable_manifest_is_left_untouched() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let garbage = "{ not json";
        fs::write(temp.path().join("package.json"), garbage)?;

        apply_deploy_config(temp.path(), "demo")?;

        assert_eq!(
            fs::read_to_string(temp.path().join("package.json"))?,
            garbage
        );
        Ok(())
    }

    #[test]
    fn missing_vite_config_skips_base_injection() -> Result<()> {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "demo"}"#)?;

        apply_deploy_config(temp.path(), "demo")?;

        let pkg: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("package.json"))?)?;
        assert_eq!(pkg["scripts"]["deploy"], "gh-pages -d dist");
        assert!(!temp.path().join("vite.config.js").exists());
        Ok(())
    }
}
