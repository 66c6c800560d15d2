/// Runs rustfmt and clippy over the whole workspace.
///
/// With `fix` the formatter rewrites files in place; otherwise it only checks.
/// Clippy always runs with warnings denied.
///
/// # Errors
/// Returns an error if formatting or clippy reports problems.
pub fn run_lint(fix: bool) -> anyhow::Result<()> {
    println!("🎨 Checking formatting...");
    let mut fmt_args = vec!["fmt", "--all"];
    if !fix {
        fmt_args.extend(["--", "--check"]);
    }

    let status = std::process::Command::new("cargo").args(fmt_args).status()?;
    if !status.success() {
        anyhow::bail!("Formatting check failed!");
    }

    println!("📎 Running clippy...");
    let status = std::process::Command::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Clippy reported issues!");
    }

    Ok(())
}
