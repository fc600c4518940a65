//! `house-price launch`: check files, build the server, run it.

use crate::args::LaunchArgs;
use anyhow::Context;
use house_price_core::ArtifactPaths;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};

pub const WEB_PACKAGE: &str = "house-price-web";
const SEPARATOR_WIDTH: usize = 60;
const STOP_GRACE: Duration = Duration::from_secs(5);

/// Artifact paths with relative entries anchored at `root`.
pub fn resolve_artifacts(root: &Path, artifacts: &ArtifactPaths) -> ArtifactPaths {
    ArtifactPaths {
        columns: resolve(root, &artifacts.columns),
        model: resolve(root, &artifacts.model),
    }
}

fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Workspace manifests the build step needs.
fn manifests(root: &Path) -> [PathBuf; 2] {
    [
        root.join("Cargo.toml"),
        root.join("crates").join(WEB_PACKAGE).join("Cargo.toml"),
    ]
}

/// Files the app needs that are absent: manifests first, then artifacts.
pub fn missing_files(root: &Path, artifacts: &ArtifactPaths) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = manifests(root)
        .into_iter()
        .filter(|p| !p.exists())
        .collect();
    missing.extend(
        resolve_artifacts(root, artifacts)
            .missing()
            .into_iter()
            .map(Path::to_path_buf),
    );
    missing
}

/// Prints the result of the file check; `true` when nothing is missing.
pub fn check_requirements(root: &Path, artifacts: &ArtifactPaths) -> bool {
    let missing = missing_files(root, artifacts);
    if missing.is_empty() {
        println!("✓ All required files found!");
        return true;
    }
    println!("✗ Missing required files:");
    for file in &missing {
        println!("   - {}", file.display());
    }
    false
}

fn server_binary(root: &Path) -> PathBuf {
    root.join("target")
        .join("release")
        .join(format!("{WEB_PACKAGE}{}", std::env::consts::EXE_SUFFIX))
}

/// `<cargo> build --release -p house-price-web`; `true` on success.
pub async fn build_server(root: &Path, cargo: &str) -> bool {
    println!("Building {WEB_PACKAGE} (release)...");
    let status = Command::new(cargo)
        .args(["build", "--release", "-p", WEB_PACKAGE])
        .current_dir(root)
        .status()
        .await;

    match status {
        Ok(s) if s.success() => {
            println!("✓ Build finished successfully!");
            true
        }
        Ok(s) => {
            tracing::error!(%s, "cargo build failed");
            println!("✗ Failed to build {WEB_PACKAGE}");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, cargo, "could not run cargo");
            println!("✗ Failed to build {WEB_PACKAGE}: {e}");
            false
        }
    }
}

/// Polls `/health` until it answers 200 or `timeout` elapses.
pub async fn wait_until_ready(base_url: &str, timeout: Duration) -> bool {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/health");
    let deadline = tokio::time::Instant::now() + timeout;

    while tokio::time::Instant::now() < deadline {
        match client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => return true,
            Ok(resp) => tracing::debug!(status = %resp.status(), "server not ready"),
            Err(e) => tracing::trace!(error = %e, "server not reachable yet"),
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    false
}

fn spawn_server(root: &Path, artifacts: &ArtifactPaths, port: u16) -> anyhow::Result<Child> {
    let bin = server_binary(root);
    let artifacts_dir = artifacts
        .columns
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());

    Command::new(&bin)
        .current_dir(root)
        .env("PORT", port.to_string())
        .env("HOUSE_PRICE_ARTIFACTS_DIR", &artifacts_dir)
        .env("HOUSE_PRICE_MODEL_FILE", &artifacts.model)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to start {}", bin.display()))
}

/// Runs the server until it exits or Ctrl+C arrives.
pub async fn run_app(
    root: &Path,
    artifacts: &ArtifactPaths,
    port: u16,
    ready_timeout: Duration,
) -> anyhow::Result<()> {
    println!("Starting {WEB_PACKAGE}...");
    let mut child = spawn_server(root, artifacts, port)?;

    let url = format!("http://localhost:{port}");
    let probe = tokio::spawn({
        let url = url.clone();
        async move {
            if wait_until_ready(&url, ready_timeout).await {
                println!("✓ App is ready at {url}");
            } else {
                println!("✗ App did not answer on {url}/health within {ready_timeout:?}");
            }
        }
    });

    tokio::select! {
        status = child.wait() => {
            let status = status.context("failed to wait for the server")?;
            if !status.success() {
                println!("✗ Error running app: server exited with {status}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            stop(&mut child).await;
            println!("\nApp stopped by user");
        }
    }

    probe.abort();
    Ok(())
}

/// The child shares our process group and sees the same interrupt; give it
/// a moment to shut down on its own before killing it.
async fn stop(child: &mut Child) {
    match tokio::time::timeout(STOP_GRACE, child.wait()).await {
        Ok(Ok(status)) => tracing::debug!(%status, "server stopped"),
        Ok(Err(e)) => tracing::warn!(error = %e, "failed to wait for server"),
        Err(_) => {
            tracing::warn!("server did not stop in time, killing it");
            if let Err(e) = child.kill().await {
                tracing::error!(error = %e, "failed to kill server");
            }
        }
    }
}

/// Full deployment flow. Returns `false` when it stopped before launching.
pub async fn launch(args: &LaunchArgs, artifacts: &ArtifactPaths) -> anyhow::Result<bool> {
    let root = args.project.root.as_path();

    println!("Bangalore House Price Predictor - Deployment");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    if !check_requirements(root, artifacts) {
        println!("\n✗ Deployment failed: Missing required files");
        return Ok(false);
    }

    if args.skip_build {
        println!("Skipping build (--skip-build)");
    } else if !build_server(root, &args.cargo).await {
        println!("\n✗ Deployment failed: Could not build {WEB_PACKAGE}");
        return Ok(false);
    }

    println!("\nSetup complete! Starting the application...");
    println!("The app will be available at: http://localhost:{}", args.port);
    println!("Press Ctrl+C to stop the application");
    println!("{}", "-".repeat(SEPARATOR_WIDTH));

    let artifacts = resolve_artifacts(root, artifacts);
    run_app(
        root,
        &artifacts,
        args.port,
        Duration::from_secs(args.ready_timeout),
    )
    .await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scaffold(root: &Path) {
        fs::write(root.join("Cargo.toml"), "[workspace]\n").unwrap();
        fs::create_dir_all(root.join("crates").join(WEB_PACKAGE)).unwrap();
        fs::write(root.join("crates").join(WEB_PACKAGE).join("Cargo.toml"), "").unwrap();
        fs::create_dir_all(root.join("artifacts")).unwrap();
        fs::write(root.join("artifacts/columns.json"), "{}").unwrap();
        fs::write(root.join("artifacts/model.json"), "{}").unwrap();
    }

    #[test]
    fn relative_artifacts_are_anchored_at_root() {
        let resolved = resolve_artifacts(Path::new("/srv/app"), &ArtifactPaths::default());
        assert_eq!(resolved.columns, PathBuf::from("/srv/app/artifacts/columns.json"));
        assert_eq!(resolved.model, PathBuf::from("/srv/app/artifacts/model.json"));
    }

    #[test]
    fn absolute_artifacts_are_kept() {
        let paths = ArtifactPaths::in_dir("/data");
        let resolved = resolve_artifacts(Path::new("/srv/app"), &paths);
        assert_eq!(resolved, paths);
    }

    #[test]
    fn complete_project_has_nothing_missing() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());
        assert!(missing_files(dir.path(), &ArtifactPaths::default()).is_empty());
        assert!(check_requirements(dir.path(), &ArtifactPaths::default()));
    }

    #[test]
    fn missing_artifacts_are_reported_in_order() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());
        fs::remove_file(dir.path().join("artifacts/model.json")).unwrap();
        fs::remove_file(dir.path().join("Cargo.toml")).unwrap();

        let missing = missing_files(dir.path(), &ArtifactPaths::default());
        assert_eq!(
            missing,
            vec![
                dir.path().join("Cargo.toml"),
                dir.path().join("artifacts/model.json"),
            ]
        );
        assert!(!check_requirements(dir.path(), &ArtifactPaths::default()));
    }

    #[tokio::test]
    async fn launch_stops_before_building_when_files_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        let args = LaunchArgs {
            project: crate::args::ProjectArgs {
                root: dir.path().to_path_buf(),
            },
            port: 0,
            skip_build: false,
            cargo: "cargo".to_string(),
            ready_timeout: 1,
        };
        assert!(!launch(&args, &ArtifactPaths::default()).await.unwrap());
    }

    #[tokio::test]
    async fn launch_stops_when_the_build_fails() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());
        let args = LaunchArgs {
            project: crate::args::ProjectArgs {
                root: dir.path().to_path_buf(),
            },
            port: 0,
            skip_build: false,
            // Exits non-zero without building anything.
            cargo: "false".to_string(),
            ready_timeout: 1,
        };
        assert!(!launch(&args, &ArtifactPaths::default()).await.unwrap());
        assert!(!server_binary(dir.path()).exists());
    }

    #[tokio::test]
    async fn unrunnable_build_tool_fails_the_build() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!build_server(dir.path(), "/no/such/cargo").await);
    }

    #[tokio::test]
    async fn readiness_probe_gives_up() {
        // Nothing listens on port 9 (discard) in test environments.
        assert!(!wait_until_ready("http://127.0.0.1:9", Duration::from_millis(300)).await);
    }
}
