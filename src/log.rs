use std::{io::Write, time::Instant};

use log::LevelFilter;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs an env_logger writing to stderr; stdout is reserved for the route protocol.
/// Calling it more than once is harmless.
pub fn build_logger_for_level(level: LevelFilter) {
    let start = Instant::now();
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:>9.3}s {:<5}] {}",
                start.elapsed().as_secs_f64(),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

/// Raises `base` by one level for each verbosity flag
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    LEVELS[(base as usize + verbosity).min(LEVELS.len() - 1)]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 9), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(LevelFilter::Off, 0), LevelFilter::Off);
    }
}
