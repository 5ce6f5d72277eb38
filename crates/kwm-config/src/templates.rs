//! Configuration templates for `kwm init`.
//!
//! Templates are kept as valid TOML so tests can check them against the
//! built-in defaults, then written out with every setting commented.

/// Project configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Home directory configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project configuration template with every setting commented out.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template with every setting commented out.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Prefixes each setting and section line with `# `.
///
/// Blank lines and existing comments are left alone, so the output parses as
/// an empty config.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
