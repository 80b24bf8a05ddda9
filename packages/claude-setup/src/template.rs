//! Project name interpolation for template files.
//!
//! Supports a single placeholder, `{{ project_name }}`; everything else in a
//! template is copied through as-is.

/// The placeholder replaced by the project name.
pub const PROJECT_NAME: &str = "{{ project_name }}";

/// Interpolate the project name into a template string.
///
/// The name is inserted literally, without escaping or case changes.
///
/// # Examples
///
/// ```
/// use claude_setup::template::interpolate;
///
/// let result = interpolate("# {{ project_name }} Playbook", "demo");
/// assert_eq!(result, "# demo Playbook");
/// ```
pub fn interpolate(template: &str, project_name: &str) -> String {
    template.replace(PROJECT_NAME, project_name)
}
