//! Pure formatting functions for UI output.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::SemanticVersion;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// The `Old Version` / `New Version` lines.
pub fn version_change_lines(old: &SemanticVersion, new: &SemanticVersion) -> [String; 2] {
    [
        format!("Old Version: {}", old),
        format!("New Version: {}", new),
    ]
}

/// Display the version change produced by a run.
pub fn display_version_change(old: &SemanticVersion, new: &SemanticVersion) {
    let [old_line, new_line] = version_change_lines(old, new);
    println!("{}", old_line);
    println!("{}", style(new_line).bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_change_lines() {
        let old = SemanticVersion::parse("1.2.3").unwrap();
        let new = SemanticVersion::parse("1.2.3++.41").unwrap();
        assert_eq!(
            version_change_lines(&old, &new),
            [
                "Old Version: 1.2.3".to_string(),
                "New Version: 1.2.3++.41".to_string()
            ]
        );
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_boundary_warning(&BoundaryWarning::NoBuildsFound {
            repo_slug: "o/r".to_string(),
        });
    }
}
