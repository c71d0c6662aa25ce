//! End-to-end CLI tests for the portfolio renderer.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command pointing at the binary, run inside an empty scratch directory
/// so no stray `portfolio.toml` is picked up.
fn portfolio(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("portfolio");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn scratch() -> TempDir {
    TempDir::new().expect("tempdir")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = scratch();
        portfolio(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("catalog"));
    }

    #[test]
    fn shows_version() {
        let dir = scratch();
        portfolio(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_subcommand() {
        let dir = scratch();
        portfolio(&dir).assert().failure();
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_default_output_path() {
        let dir = scratch();
        portfolio(&dir).args(["render", "--year", "2026"]).assert().success();

        let html = std::fs::read_to_string(dir.path().join("dist/index.html")).expect("output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"href="https://match.tina-ai.xyz/""#));
        assert!(html.contains("© 2026 Built with AI for the Future."));
    }

    #[test]
    fn writes_custom_output_path() {
        let dir = scratch();
        portfolio(&dir)
            .args(["render", "-o", "public/site/page.html"])
            .assert()
            .success()
            .stderr(predicate::str::contains("page.html"));

        assert!(dir.path().join("public/site/page.html").is_file());
    }

    #[test]
    fn prints_to_stdout() {
        let dir = scratch();
        portfolio(&dir)
            .args(["render", "--stdout", "--year", "2030"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("消消乐"))
            .stdout(predicate::str::contains("© 2030"));

        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn picks_up_local_config() {
        let dir = scratch();
        std::fs::write(
            dir.path().join("portfolio.toml"),
            r#"
[profile]
profile_url = "https://github.com/example"

[[catalog.games]]
name = "Snake"
url = "https://snake.example/"
description = "Classic"
"#,
        )
        .expect("write config");

        portfolio(&dir)
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"href="https://snake.example/""#))
            .stdout(predicate::str::contains(r#"href="https://github.com/example""#))
            .stdout(predicate::str::contains("消消乐").not());
    }

    #[test]
    fn fails_on_missing_explicit_config() {
        let dir = scratch();
        portfolio(&dir)
            .args(["render", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.toml"));
    }

    #[test]
    fn fails_on_invalid_catalog() {
        let dir = scratch();
        std::fs::write(
            dir.path().join("bad.toml"),
            "[[catalog.apps]]\nname = \"\"\nurl = \"https://x.example/\"\n",
        )
        .expect("write config");

        portfolio(&dir)
            .args(["render", "--config", "bad.toml", "--stdout"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("empty name"));
    }

    #[test]
    fn duplicate_urls_warn_but_render() {
        let dir = scratch();
        std::fs::write(
            dir.path().join("portfolio.toml"),
            r#"
[[catalog.games]]
name = "One"
url = "https://same.example/"

[[catalog.games]]
name = "Two"
url = "https://same.example/"
"#,
        )
        .expect("write config");

        portfolio(&dir)
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::contains("One"))
            .stdout(predicate::str::contains("Two"))
            .stderr(predicate::str::contains("more than once"));
    }
}

// ============================================
// Catalog Listing Tests
// ============================================

mod catalog {
    use super::*;

    #[test]
    fn lists_builtin_catalog() {
        let dir = scratch();
        portfolio(&dir)
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("games (6)"))
            .stdout(predicate::str::contains("apps (6)"))
            .stdout(predicate::str::contains("https://card.tina-ai.xyz/"));
    }

    #[test]
    fn emits_json() {
        let dir = scratch();
        let output = portfolio(&dir)
            .args(["catalog", "--json"])
            .output()
            .expect("runs");
        assert!(output.status.success());

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid json");
        assert_eq!(value["games"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["apps"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["games"][0]["name"], "消消乐");
        assert_eq!(value["games"][0]["url"], "https://match.tina-ai.xyz/");
    }
}
