//! End-to-end command tests against a mock GitHub API.

use std::fs;

use gistline::cli::Command;
use gistline::{App, Config, Error, GithubClient};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

fn app_for(server: &ServerGuard) -> App {
    let config = Config {
        token: "test-token".to_string(),
        api_url: server.url(),
    };
    App::new(GithubClient::new(&config).unwrap())
}

async fn run(app: &App, command: Command) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = app.run(command, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

mod fetch {
    use super::*;

    #[tokio::test]
    async fn test_prints_names_in_api_order() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/alice/repos")
            .with_status(200)
            .with_body(json!([{ "name": "r1" }, { "name": "r2" }]).to_string())
            .create_async()
            .await;

        let (result, stdout) = run(
            &app_for(&server),
            Command::Fetch {
                args: vec!["alice".to_string()],
            },
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(stdout, "r1\nr2\n");
    }

    #[tokio::test]
    async fn test_api_failure_prints_nothing_and_succeeds() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/alice/repos")
            .with_status(500)
            .with_body(json!({ "message": "boom" }).to_string())
            .create_async()
            .await;

        let (result, stdout) = run(
            &app_for(&server),
            Command::Fetch {
                args: vec!["alice".to_string()],
            },
        )
        .await;

        assert!(result.is_ok());
        assert!(stdout.is_empty());
    }

    #[tokio::test]
    async fn test_missing_username_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let (result, stdout) = run(&app_for(&server), Command::Fetch { args: Vec::new() }).await;

        mock.assert_async().await;
        assert!(result.is_ok());
        assert!(stdout.is_empty());
    }
}

mod create {
    use super::*;

    #[tokio::test]
    async fn test_gist_from_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();
        let a = a.to_string_lossy().into_owned();
        let b = b.to_string_lossy().into_owned();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .match_body(Matcher::Json(json!({
                "description": "desc",
                "files": {
                    a.clone(): { "content": "alpha" },
                    b.clone(): { "content": "beta" }
                },
                "public": true
            })))
            .with_status(201)
            .with_body(json!({ "html_url": "u", "description": "desc" }).to_string())
            .create_async()
            .await;

        let (result, stdout) = run(
            &app_for(&server),
            Command::Create {
                description: Some("desc".to_string()),
                files: vec![a, b],
            },
        )
        .await;

        mock.assert_async().await;
        assert!(result.is_ok());
        assert_eq!(stdout, "URL  u\nDescription  desc\n");
    }

    #[tokio::test]
    async fn test_unreadable_file_is_left_out() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "alpha").unwrap();
        let a = a.to_string_lossy().into_owned();
        let missing = dir.path().join("nope.txt").to_string_lossy().into_owned();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .match_body(Matcher::Json(json!({
                "description": "desc",
                "files": { a.clone(): { "content": "alpha" } },
                "public": true
            })))
            .with_status(201)
            .with_body(json!({ "html_url": "u", "description": "desc" }).to_string())
            .create_async()
            .await;

        let (result, _) = run(
            &app_for(&server),
            Command::Create {
                description: Some("desc".to_string()),
                files: vec![a, missing],
            },
        )
        .await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_api_rejection_is_returned() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "alpha").unwrap();

        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/gists")
            .with_status(401)
            .with_body(json!({ "message": "Bad credentials" }).to_string())
            .create_async()
            .await;

        let (result, stdout) = run(
            &app_for(&server),
            Command::Create {
                description: Some("desc".to_string()),
                files: vec![a.to_string_lossy().into_owned()],
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Api { message, .. }) if message == "Bad credentials"));
        assert!(stdout.is_empty());
    }
}

mod create_from_dir {
    use super::*;

    #[tokio::test]
    async fn test_gist_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
        fs::write(dir.path().join("README.md"), "# hi").unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .match_body(Matcher::Json(json!({
                "description": "snippets",
                "files": {
                    "README.md": { "content": "# hi" },
                    "main.rs": { "content": "fn main() {}" }
                },
                "public": true
            })))
            .with_status(201)
            .with_body(json!({ "html_url": "u", "description": "snippets" }).to_string())
            .create_async()
            .await;

        let (result, stdout) = run(
            &app_for(&server),
            Command::CreateFromDir {
                args: vec![
                    "snippets".to_string(),
                    dir.path().to_string_lossy().into_owned(),
                ],
            },
        )
        .await;

        mock.assert_async().await;
        assert!(result.is_ok());
        assert_eq!(stdout, "URL  u\nDescription  snippets\n");
    }

    #[tokio::test]
    async fn test_missing_directory_is_rejected_before_request() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missingdir");

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .expect(0)
            .create_async()
            .await;

        let (result, _) = run(
            &app_for(&server),
            Command::CreateFromDir {
                args: vec!["desc".to_string(), missing.to_string_lossy().into_owned()],
            },
        )
        .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(Error::EmptyGist)));
    }

    #[tokio::test]
    async fn test_wrong_argument_count_is_a_no_op() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .expect(0)
            .create_async()
            .await;

        let (result, _) = run(
            &app_for(&server),
            Command::CreateFromDir {
                args: vec!["desc".to_string()],
            },
        )
        .await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }
}

mod create_timeline {
    use super::*;

    #[tokio::test]
    async fn test_renders_oldest_first() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out").join("timeline.html");

        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/alice/repos")
            .with_status(200)
            .with_body(
                json!([
                    {
                        "name": "newer",
                        "html_url": "https://github.com/alice/newer",
                        "description": "second",
                        "created_at": "2021-03-04T00:00:00Z"
                    },
                    {
                        "name": "older",
                        "html_url": "https://github.com/alice/older",
                        "description": null,
                        "created_at": "2019-11-02T00:00:00Z"
                    }
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let app = app_for(&server).with_timeline_path(&output);
        let (result, stdout) = run(
            &app,
            Command::CreateTimeline {
                args: vec!["alice".to_string()],
            },
        )
        .await;

        assert!(result.is_ok());
        assert!(stdout.is_empty());

        let html = fs::read_to_string(&output).unwrap();
        let older = html.find("older").unwrap();
        let newer = html.find("newer").unwrap();
        assert!(older < newer);
        assert!(html.contains("02 November 2019"));
        assert!(html.contains("04 March 2021"));
        assert!(html.contains("2 repositories"));
    }

    #[tokio::test]
    async fn test_api_failure_renders_empty_page() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("timeline.html");

        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/alice/repos")
            .with_status(404)
            .with_body(json!({ "message": "Not Found" }).to_string())
            .create_async()
            .await;

        let app = app_for(&server).with_timeline_path(&output);
        let (result, _) = run(
            &app,
            Command::CreateTimeline {
                args: vec!["alice".to_string()],
            },
        )
        .await;

        assert!(result.is_ok());
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("0 repositories"));
        assert!(!html.contains("<article"));
    }
}
