use crate::domain::model::RunReport;
use crate::domain::ports::Runnable;
use crate::utils::error::{ForgeError, Result};
use crate::utils::monitor::SystemMonitor;
use std::time::Instant;

pub struct ForgeEngine<R: Runnable> {
    runnable: R,
    monitor: SystemMonitor,
}

impl<R: Runnable> ForgeEngine<R> {
    pub fn new(runnable: R) -> Self {
        Self::new_with_monitoring(runnable, false)
    }

    pub fn new_with_monitoring(runnable: R, monitor_enabled: bool) -> Self {
        Self {
            runnable,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn runnable(&self) -> &R {
        &self.runnable
    }

    /// Runs once. A `false` from the runnable becomes `ForgeError::RunFailed`.
    pub fn run(&self) -> Result<RunReport> {
        let subject = self.runnable.name().to_string();
        tracing::info!("🚀 Starting run of '{}'", subject);
        self.monitor.log_stats("Before run");

        let started = Instant::now();
        let success = self.runnable.run();
        let elapsed_ms = started.elapsed().as_millis();

        self.monitor.log_stats("After run");

        if !success {
            tracing::error!("❌ Run of '{}' failed after {}ms", subject, elapsed_ms);
            return Err(ForgeError::RunFailed { subject });
        }

        tracing::info!("✅ Run of '{}' completed in {}ms", subject, elapsed_ms);
        Ok(RunReport {
            subject,
            success,
            elapsed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chronoforge::ChronoForge;

    struct FailingRunnable;

    impl Runnable for FailingRunnable {
        fn name(&self) -> &str {
            "broken"
        }

        fn run(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_engine_reports_success() {
        let engine = ForgeEngine::new(ChronoForge::new());
        let report = engine.run().unwrap();

        assert_eq!(report.subject, "chronoforge");
        assert!(report.success);
    }

    #[test]
    fn test_engine_maps_false_to_error() {
        let engine = ForgeEngine::new(FailingRunnable);
        match engine.run() {
            Err(ForgeError::RunFailed { subject }) => assert_eq!(subject, "broken"),
            other => panic!("expected RunFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_engine_with_monitoring_still_succeeds() {
        let engine = ForgeEngine::new_with_monitoring(ChronoForge::new(), true);
        assert!(engine.run().unwrap().success);
        assert_eq!(engine.runnable().label(), "chronoforge");
    }
}
