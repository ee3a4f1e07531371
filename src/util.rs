/// Time an expression, print the elapsed milliseconds, and return its value.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable byte count, `"3 MB"`.
pub fn file_size(bytes: u64) -> String {
  use humansize::{FileSize, file_size_opts as options};
  bytes.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}

#[cfg(test)]
mod tests {
  #[test] fn profile_returns_value() {
    let value = profile!("sum", (1..=10).sum::<u32>());
    assert_eq!(value, 55);
  }

  #[test] fn file_size() {
    assert!(super::file_size(3 * 1024 * 1024).starts_with("3"));
    assert!(super::file_size(0).starts_with("0"));
  }
}
