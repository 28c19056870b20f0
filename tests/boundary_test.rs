use traviscli::boundary::BoundaryWarning;
use traviscli::ui;

#[test]
fn test_boundary_warning_placeholder_token_display() {
    let warning = BoundaryWarning::PlaceholderToken {
        preferences_path: "/home/me/.travisci-cli.ini".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No Travis CI API token configured"),
        "Message should mention the missing token, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("/home/me/.travisci-cli.ini"),
        "Message should contain the preferences path, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_builds_display() {
    let warning = BoundaryWarning::NoBuildsFound {
        repo_slug: "hasii2011/PyUt".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("hasii2011/PyUt"),
        "Message should contain the repository, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("build number 0"),
        "Message should say which build number is used, got: {}",
        display_msg
    );
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    ui::display_boundary_warning(&BoundaryWarning::NoBuildsFound {
        repo_slug: "a/b".to_string(),
    });
}
