use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use village_cms_api::auth::{generate_jwt, Claims};

/// Shared secret for the spawned server and locally minted tokens.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests.
        // Inherits the environment so DATABASE_URL from .env is visible.
        let mut cmd = Command::new("target/debug/village-cms-api");
        cmd.env("APP_PORT", port.to_string())
            .env("JWT_SECRET", TEST_JWT_SECRET)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> bool {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/api/check", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return true;
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        false
    }
}

/// Returns the shared server, or None when it cannot start (typically no
/// reachable database). Callers skip their scenario in that case.
pub async fn try_server() -> Option<&'static TestServer> {
    // The config singleton snapshots env on first access; set the secret
    // before any token is minted in this process.
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);

    let slot = SERVER.get_or_init(|| TestServer::spawn().ok());
    let server = slot.as_ref()?;
    if server.wait_ready(Duration::from_secs(10)).await {
        Some(server)
    } else {
        eprintln!("skipping: server did not become ready (database unavailable?)");
        None
    }
}

/// Mints a token the spawned server accepts.
pub fn admin_token() -> String {
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
    generate_jwt(&Claims::new(1)).expect("mint test token")
}

/// Per-run suffix so repeated runs against a persistent database do not
/// collide on unique slugs.
pub fn unique(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    format!("{}-{}-{}", tag, secs, nanos)
}
