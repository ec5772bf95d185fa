use crate::utils::error::Result;
use std::io::Write;

/// Renders `numbers` as `"n1 n2 ... nk \n"`; every element, the last one
/// included, is followed by a space. An empty slice renders as `"\n"`.
pub fn render_sequence(numbers: &[i32]) -> String {
    let mut line = String::new();
    for num in numbers {
        line.push_str(&num.to_string());
        line.push(' ');
    }
    line.push('\n');
    line
}

/// Writes the rendered sequence to `out` with a single `write_all`, so one
/// call never interleaves with another call on the same serialized sink.
pub fn process_sequence<W: Write>(numbers: &[i32], out: &mut W) -> Result<()> {
    let line = render_sequence(numbers);
    out.write_all(line.as_bytes())?;
    out.flush()?;
    tracing::trace!(len = numbers.len(), "sequence written");
    Ok(())
}

/// [`process_sequence`] against the locked standard output.
pub fn print_sequence(numbers: &[i32]) -> Result<()> {
    let mut handle = std::io::stdout().lock();
    process_sequence(numbers, &mut handle)
}

/// Arithmetic mean; an empty sequence averages to `0.0`.
pub fn average(numbers: &[i32]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let sum: i64 = numbers.iter().map(|&n| i64::from(n)).sum();
    sum as f64 / numbers.len() as f64
}
