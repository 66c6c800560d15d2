use crate::handlers::normalize_project_name;

/// Runs tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if the test execution fails or if the test runner is not found.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let target_is_workspace = project.is_none_or(|value| value == "all");
    let target_label = if target_is_workspace { "workspace" } else { "crate" };

    println!("🧪 Running {target_label} tests...");
    let has_nextest = std::process::Command::new("cargo-nextest").arg("--version").output().is_ok();

    let mut args: Vec<String> = if has_nextest {
        vec!["nextest".into(), "run".into()]
    } else {
        vec!["test".into()]
    };

    if target_is_workspace {
        args.push("--workspace".into());
    } else if let Some(project) = project {
        args.push("-p".into());
        args.push(normalize_project_name(project));
    }

    args.push("--all-features".into());

    let status = std::process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("Tests failed!");
    }
    Ok(())
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if the doctest execution fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    let target_is_workspace = project.is_none_or(|value| value == "all");
    let target_label = if target_is_workspace { "workspace" } else { "crate" };

    println!("📚 Running {target_label} doc tests...");

    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];

    if target_is_workspace {
        args.push("--workspace".into());
    } else if let Some(project) = project {
        args.push("-p".into());
        args.push(normalize_project_name(project));
    }

    args.push("--all-features".into());

    let status = std::process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("Doc tests failed!");
    }

    Ok(())
}
