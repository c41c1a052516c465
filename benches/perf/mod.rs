use criterion::profiler::Profiler;
use pprof::ProfilerGuard;
use std::fs::File;
use std::os::raw::c_int;
use std::path::Path;

/// Criterion profiler writing a flamegraph per benchmark
/// when run with `--profile-time`.
pub struct FlamegraphProfiler<'a> {
    frequency: c_int,
    active_profiler: Option<ProfilerGuard<'a>>,
}

impl<'a> FlamegraphProfiler<'a> {
    pub fn new(frequency: c_int) -> Self {
        FlamegraphProfiler {
            frequency,
            active_profiler: None,
        }
    }
}

impl<'a> Profiler for FlamegraphProfiler<'a> {
    fn start_profiling(&mut self, _benchmark_id: &str, _benchmark_dir: &Path) {
        self.active_profiler = ProfilerGuard::new(self.frequency).ok();
    }

    fn stop_profiling(&mut self, _benchmark_id: &str, benchmark_dir: &Path) {
        let guard = match self.active_profiler.take() {
            Some(guard) => guard,
            None => return,
        };
        if std::fs::create_dir_all(benchmark_dir).is_err() {
            return;
        }
        let flamegraph_path = benchmark_dir.join("flamegraph.svg");
        if let (Ok(report), Ok(file)) = (guard.report().build(), File::create(&flamegraph_path)) {
            if let Err(e) = report.flamegraph(file) {
                eprintln!("failed to write flamegraph: {:?}", e);
            }
        }
    }
}
