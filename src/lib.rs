pub mod exec;
pub mod ideas;
pub mod npm;
pub mod pages;
pub mod paths;
pub mod scaffold;

// Re-export commonly used entry points
pub use pages::configure_github_pages;
pub use scaffold::create_project;
