use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

#[derive(Debug, Clone)]
pub struct MonitorSnapshot {
    pub cpu_usage: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed: Duration,
}

/// Samples CPU and memory of the current process between benchmark phases.
/// A disabled monitor never touches `sysinfo`.
pub struct SystemMonitor {
    system: Option<System>,
    pid: Option<Pid>,
    started: Instant,
    peak_memory_mb: u64,
}

impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => Some(pid),
                Err(e) => {
                    tracing::warn!("Process monitoring unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            system: pid.map(|_| System::new()),
            pid,
            started: Instant::now(),
            peak_memory_mb: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }

    pub fn sample(&mut self) -> Option<MonitorSnapshot> {
        let pid = self.pid?;
        let system = self.system.as_mut()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_cpu().with_memory(),
        );

        let process = system.process(pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        self.peak_memory_mb = self.peak_memory_mb.max(memory_mb);

        Some(MonitorSnapshot {
            cpu_usage: process.cpu_usage(),
            memory_mb,
            peak_memory_mb: self.peak_memory_mb,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_stats(&mut self, phase: &str) {
        if let Some(snapshot) = self.sample() {
            tracing::info!(
                "{} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                phase,
                snapshot.cpu_usage,
                snapshot.memory_mb,
                snapshot.peak_memory_mb,
                snapshot.elapsed
            );
        }
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
