pub mod lint;
pub mod testing;

/// Expands short crate names (`domain`) into full package names (`gate-domain`).
pub(crate) fn normalize_project_name(project: &str) -> String {
    if project == "gatecheck" || project == "xtask" || project.starts_with("gate-") {
        project.to_owned()
    } else {
        format!("gate-{project}")
    }
}
