use log::{Level, LevelFilter};

/// Sets up `env_logger`. `RUST_LOG` takes precedence over `verbosity`,
/// which raises the default level from warn (0) up to trace (3+).
pub fn init(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  env_logger::builder()
    .filter_level(level)
    .parse_default_env()
    .init();
}

pub trait LogExt<T>: Sized {
  fn log_at(self, level: Level, msg: &str) -> anyhow::Result<T>;

  #[track_caller]
  fn log_debug(self, msg: &str) -> anyhow::Result<T> {
    self.log_at(Level::Debug, msg)
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    self.log_at(Level::Warn, msg)
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    self.log_at(Level::Error, msg)
  }
}

impl<T> LogExt<T> for Option<T> {
  #[track_caller]
  fn log_at(self, level: Level, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.ok_or_else(|| {
      log::log!(level, "[{location}] {msg}");

      anyhow::anyhow!(msg.to_string())
    })
  }
}

impl<T, E> LogExt<T> for Result<T, E> where E: std::fmt::Debug {
  #[track_caller]
  fn log_at(self, level: Level, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.map_err(|error| {
      log::log!(level, "[{location}] {msg}: {error:?}");

      anyhow::anyhow!("{msg}: {error:?}")
    })
  }
}
