//! Project scaffolding: stand up a Vite React app and trim it to a clean
//! baseline.
//!
//! Every step gates the next; a fatal failure leaves the project directory
//! in whatever state the prior steps produced. The file-editing operations
//! take the project root as a parameter so they can run against any
//! directory; the orchestrator changes into the new project and drives them
//! from there.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use tracing::{debug, warn};

use crate::npm;

/// Template assets the generated project never keeps.
const BOILERPLATE_FILES: [&str; 4] = [
    "src/App.css",
    "README.md",
    "src/assets/react.svg",
    "public/vite.svg",
];

const GITIGNORE_ENTRIES: [&str; 6] = [
    "node_modules",
    "*.log",
    "dist",
    ".vit",
    "stats.html",
    ".eslintcache",
];

/// Run the full scaffolding sequence for `name`, relative to the current
/// working directory.
///
/// Changes the process working directory into the new project and leaves it
/// there. Callers embedding this in a longer-lived process must isolate the
/// call or restore the directory themselves.
pub fn create_project(name: &str, install_tailwind: bool, install_lucide: bool) -> Result<()> {
    npm::ensure_npm_available()?;

    stand_up(name, install_tailwind, install_lucide)?;

    let root = Path::new(".");
    remove_boilerplate(root);
    write_gitignore(root)?;
    write_vite_config(root, install_tailwind)?;
    patch_main_jsx(root)?;
    patch_index_html(root, name)?;

    Ok(())
}

/// Generate the base project, enter it, and install dependencies.
fn stand_up(name: &str, install_tailwind: bool, install_lucide: bool) -> Result<()> {
    npm::create_vite_app(name)?;

    env::set_current_dir(name).with_context(|| format!("Failed to change directory to {name}"))?;

    npm::install()?;

    if install_tailwind {
        npm::install_tailwind()?;
    }

    if install_lucide {
        npm::install_lucide()?;
    }

    Ok(())
}

/// Delete template boilerplate. Best-effort: a missing file is skipped and
/// any other error is logged without aborting the run.
pub fn remove_boilerplate(project_root: &Path) {
    for relative in BOILERPLATE_FILES {
        match fs::remove_file(project_root.join(relative)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{relative} does not exist, skipping");
            }
            Err(err) => {
                warn!("Failed to unlink {relative}: {err}");
            }
        }
    }
}

/// Overwrite `.gitignore` with the standard entry list.
pub fn write_gitignore(project_root: &Path) -> Result<()> {
    fs::write(project_root.join(".gitignore"), GITIGNORE_ENTRIES.join("\n"))
        .context("Failed to write .gitignore")
}

/// Write `vite.config.js` registering the React plugin and, when requested,
/// Tailwind's plugin plus its entry stylesheet.
pub fn write_vite_config(project_root: &Path, install_tailwind: bool) -> Result<()> {
    let mut config_lines = [
        "import { defineConfig } from 'vite'",
        "import react from '@vitejs/plugin-react'",
        "",
        "export default defineConfig({",
        "  plugins: [",
        "    react(),",
        "",
        "  ]",
        "})",
    ];

    if install_tailwind {
        fs::write(
            project_root.join("src/index.css"),
            "@import \"tailwindcss\";\n",
        )
        .context("Failed to update src/index.css")?;

        config_lines[2] = "import tailwindcss from '@tailwindcss/vite'";
        config_lines[6] = "    tailwindcss(),";
    }

    fs::write(project_root.join("vite.config.js"), config_lines.join("\n"))
        .context("Failed to write vite.config.js")
}

/// Prepend the React import the template leaves implicit.
pub fn patch_main_jsx(project_root: &Path) -> Result<()> {
    let path = project_root.join("src/main.jsx");
    let jsx = fs::read_to_string(&path).context("Failed to patch src/main.jsx")?;
    fs::write(&path, format!("import React from 'react';\n{jsx}"))
        .context("Failed to patch src/main.jsx")
}

/// Replace the template's default page title with the project name.
///
/// When the template's title is absent the file is rewritten unchanged.
pub fn patch_index_html(project_root: &Path, name: &str) -> Result<()> {
    let path = project_root.join("index.html");
    let html = fs::read_to_string(&path).context("Failed to update index.html")?;

    let title_re = Regex::new(r"<title>Vite \+ React</title>").unwrap();
    let replacement = format!("<title>{name}</title>");
    let html = title_re.replace_all(&html, NoExpand(&replacement));

    fs::write(&path, html.as_ref()).context("Failed to update index.html")
}
