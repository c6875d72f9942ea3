//! Serveo SSH tunnel lifecycle management.
//!
//! The tunnel is a plain `ssh -R <domain> serveo.net` child process: an
//! outbound connection that makes the locally bound server reachable through
//! the public relay host. Lifecycle is `NotStarted → Running → Stopped` with
//! no retries; a failed spawn is reported and propagated, never papered
//! over. Stopping is graceful-then-forced: SIGTERM, a 5-second grace period,
//! then SIGKILL.

use std::{process::Stdio, sync::Arc, time::Duration};

use nix::{sys::signal, unistd::Pid};
use tokio::process::{Child, Command};

use crate::{Error, Res, info, report::Reporter, warning};

const SSH_PROGRAM: &str = "ssh";
const RELAY_HOST: &str = "serveo.net";
const STOP_GRACE: Duration = Duration::from_secs(5);

/// Lifecycle state of a tunnel process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelState {
    NotStarted,
    Running,
    Stopped,
}

/// A spawned tunnel child process and its lifecycle state.
///
/// Owned by the application's top-level lifecycle; request handlers never
/// touch it.
pub struct TunnelProcess {
    child: Child,
    state: TunnelState,
}

impl TunnelProcess {
    pub fn state(&self) -> TunnelState {
        self.state
    }

    /// PID of the child, when it is still running.
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }
}

/// Spawns and tears down the Serveo SSH tunnel.
pub struct TunnelManager {
    program: String,
    args: Vec<String>,
    reporter: Arc<Reporter>,
}

impl TunnelManager {
    /// A manager that will request reverse forwarding for `domain` from the
    /// public relay host.
    pub fn new(domain: &str, reporter: Arc<Reporter>) -> Self {
        TunnelManager {
            program: SSH_PROGRAM.to_string(),
            args: vec!["-R".to_string(), domain.to_string(), RELAY_HOST.to_string()],
            reporter,
        }
    }

    #[cfg(test)]
    fn with_command(program: &str, args: &[&str], reporter: Arc<Reporter>) -> Self {
        TunnelManager {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            reporter,
        }
    }

    /// Starts the tunnel child process with captured stdout/stderr.
    ///
    /// # Errors
    ///
    /// [`Error::ExecutableNotFound`] when the SSH binary is absent,
    /// [`Error::Os`] for any other spawn failure. Both are reported before
    /// propagating; the caller must not continue without a requested tunnel.
    pub async fn start(&self) -> Res<TunnelProcess> {
        match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => {
                info!(
                    "Túnel SSH Serveo iniciado com sucesso (pid {}).",
                    child.id().map(|p| p.to_string()).unwrap_or_default()
                );
                Ok(TunnelProcess {
                    child,
                    state: TunnelState::Running,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(self
                .reporter
                .fail(Error::ExecutableNotFound(self.program.clone()))),
            Err(e) => Err(self.reporter.fail(Error::Os(e))),
        }
    }

    /// Stops the tunnel: graceful termination, up to [`STOP_GRACE`] of
    /// waiting, then a forced kill. Idempotent; stopping an already-stopped
    /// or already-exited tunnel is an observed, logged no-op.
    pub async fn stop(&self, proc: &mut TunnelProcess) -> Res<()> {
        if proc.state == TunnelState::Stopped {
            info!("Túnel SSH Serveo já encerrado; nada a fazer.");
            return Ok(());
        }

        match proc.child.try_wait() {
            Ok(Some(status)) => {
                info!("Túnel SSH Serveo já havia saído ({status}).");
                proc.state = TunnelState::Stopped;
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => return Err(self.reporter.fail(Error::Os(e))),
        }

        if let Some(pid) = proc.child.id() {
            signal::kill(Pid::from_raw(pid as i32), signal::Signal::SIGTERM)
                .map_err(|errno| self.reporter.fail(Error::Os(errno.into())))?;
        }

        match tokio::time::timeout(STOP_GRACE, proc.child.wait()).await {
            Ok(Ok(_)) => info!("Túnel SSH Serveo encerrado com sucesso."),
            Ok(Err(e)) => return Err(self.reporter.fail(Error::Os(e))),
            Err(_) => {
                warning!("Forçou encerramento do túnel SSH Serveo após timeout.");
                proc.child
                    .kill()
                    .await
                    .map_err(|e| self.reporter.fail(Error::Os(e)))?;
            }
        }

        proc.state = TunnelState::Stopped;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter() -> Arc<Reporter> {
        Arc::new(Reporter::new())
    }

    #[tokio::test]
    async fn start_with_missing_executable_fails() {
        let manager =
            TunnelManager::with_command("serveolist-no-such-ssh-binary", &[], reporter());
        match manager.start().await {
            Err(Error::ExecutableNotFound(program)) => {
                assert_eq!(program, "serveolist-no-such-ssh-binary");
            }
            Err(other) => panic!("expected ExecutableNotFound, got {other}"),
            Ok(_) => panic!("expected spawn to fail"),
        }
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let manager = TunnelManager::with_command("sleep", &["30"], reporter());
        let mut proc = manager.start().await.expect("spawn sleep");
        assert_eq!(proc.state(), TunnelState::Running);

        manager.stop(&mut proc).await.expect("first stop");
        assert_eq!(proc.state(), TunnelState::Stopped);

        // Second stop must not signal anything and must not fail.
        manager.stop(&mut proc).await.expect("second stop");
        assert_eq!(proc.state(), TunnelState::Stopped);
    }

    #[tokio::test]
    async fn stop_after_child_exit_is_a_noop() {
        let manager = TunnelManager::with_command("true", &[], reporter());
        let mut proc = manager.start().await.expect("spawn true");

        // Give the child a moment to exit on its own.
        tokio::time::sleep(Duration::from_millis(200)).await;

        manager.stop(&mut proc).await.expect("stop exited child");
        assert_eq!(proc.state(), TunnelState::Stopped);
    }
}
