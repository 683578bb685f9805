/// Time a statement and log the elapsed milliseconds at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// Human readable byte count, e.g. `1.21 MB`.
pub fn file_size(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn file_size_is_readable() {
    let s = file_size(3 * 1024 * 1024);
    assert!(s.starts_with('3') && s.ends_with('B'), "{}", s);
  }

  #[test] fn profile_yields_value_binding() {
    let mut n = 0;
    profile!("sum", { n = (1..=10).sum::<i32>(); });
    assert_eq!(n, 55);
  }
}
