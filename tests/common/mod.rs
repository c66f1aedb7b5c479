use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub deploy: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let deploy = make_fixture_tree(tmp.path());
        Self { _tmp: tmp, deploy }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("verify-deploy");
        cmd.arg("--base-dir").arg(&self.deploy);
        cmd
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let mut cmd = self.cmd();
        let out = cmd.args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(out).expect("utf8 output")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Builds a deployment tree satisfying every built-in check.
pub fn make_fixture_tree(base: &Path) -> PathBuf {
    let deploy = base.join("deploy");
    fs::create_dir_all(deploy.join("src/lib/mcp")).expect("create config module dir");
    fs::create_dir_all(deploy.join("src/app/api/mcp/config")).expect("create route dir");

    fs::write(
        deploy.join("docker-compose.yml"),
        r#"services:
  app:
    build: .
    command: npm run dev
    volumes: ["./mcp_config.db:/data/mcp_config.db"]
    ports:
      - "9229:9229"
  certbot:
    image: certbot/certbot
"#,
    )
    .expect("write compose file");

    fs::write(
        deploy.join("nginx.conf"),
        r#"server {
    listen 443 ssl;
    ssl_certificate /etc/letsencrypt/live/app/fullchain.pem; # managed by certbot
    location / {
        proxy_pass http://app:3000;
    }
}
"#,
    )
    .expect("write nginx config");

    fs::write(
        deploy.join(".env.example"),
        "NODE_ENV=development\nPORT=3000\nMCP_DB_PATH=./mcp_config.db\nDEBUG_MODE=false\n",
    )
    .expect("write env template");

    fs::write(
        deploy.join("src/lib/mcp/config.ts"),
        "import sqlite3 from 'sqlite3';\nexport const MCP_COOKIE_KEY = 'mcp_session';\n",
    )
    .expect("write config module");

    fs::write(
        deploy.join("src/app/api/mcp/config/route.ts"),
        "const session_id = request.cookies.get('mcp_session');\nawait db.run('INSERT OR REPLACE INTO mcp_config (session_id, data) VALUES (?, ?)');\n",
    )
    .expect("write route module");

    deploy
}
