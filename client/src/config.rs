//! Build-time configuration for the books API.
//!
//! The collaborator base URL is baked into the bundle at compile time. Set
//! `BOOKSHELF_API_BASE_URL` while building to point at another deployment;
//! there is no runtime override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when no build-time override is present.
pub const DEFAULT_API_BASE_URL: &str = "https://crud-app-backend-jade.vercel.app";

/// Resolve the collaborator base URL for this build.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("BOOKSHELF_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    raw.trim_end_matches('/').to_owned()
}
