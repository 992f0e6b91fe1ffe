//! npm operations for project scaffolding

use anyhow::Result;

use crate::exec::run_command;

/// Check that npm is reachable on PATH
pub fn ensure_npm_available() -> Result<()> {
    if which::which("npm").is_ok() {
        return Ok(());
    }

    eprintln!("Error: npm is required but not found.");
    eprintln!();
    eprintln!("Please install Node.js, which ships npm:");
    eprintln!("  • macOS: brew install node");
    eprintln!("  • Linux: https://nodejs.org/en/download/package-manager");
    eprintln!("  • Windows: winget install OpenJS.NodeJS");
    anyhow::bail!("npm not found")
}

/// Scaffold the Vite React template into a new directory named `name`
pub fn create_vite_app(name: &str) -> Result<()> {
    if !run_command(
        "npm",
        &["create", "vite@latest", name, "--", "--template", "react"],
    ) {
        anyhow::bail!("Failed to initialize project");
    }
    Ok(())
}

/// Install the generated project's base dependencies
pub fn install() -> Result<()> {
    if !run_command("npm", &["install"]) {
        anyhow::bail!("Failed to install dependencies");
    }
    Ok(())
}

/// Install Tailwind CSS and its Vite plugin
pub fn install_tailwind() -> Result<()> {
    if !run_command("npm", &["install", "tailwindcss", "@tailwindcss/vite"]) {
        anyhow::bail!("Failed to install tailwind CSS");
    }
    Ok(())
}

/// Install the Lucide icon library
pub fn install_lucide() -> Result<()> {
    if !run_command("npm", &["install", "lucide-react"]) {
        anyhow::bail!("Failed to install Lucide-React");
    }
    Ok(())
}

/// Install gh-pages as a development dependency
pub fn install_gh_pages() -> Result<()> {
    if !run_command("npm", &["install", "gh-pages", "--save-dev"]) {
        anyhow::bail!("Failed to install gh-pages");
    }
    Ok(())
}
