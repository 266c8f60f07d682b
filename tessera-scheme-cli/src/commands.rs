pub mod export;
pub mod role;
pub mod show;

/// Accepts `on-surface` as well as `on_surface`.
pub fn normalize_role_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}
