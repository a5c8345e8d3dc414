//! Interactive parameter collection
//!
//! Reads from any `BufRead` and writes prompts to any `Write`, so the same
//! code serves stdin/stdout and tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::consts::*;
use crate::error::{Error, Result};
use crate::launch::LaunchParams;

/// Ask until the answer parses and lies within `min..=max`
pub fn read_value<T, R, W>(input: &mut R, output: &mut W, prompt: &str, min: T, max: T) -> Result<T>
where
    T: FromStr + PartialOrd + Display + Copy,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        // `contains` is false for unordered values such as NaN
        match line.trim().parse::<T>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            Ok(_) => writeln!(output, "Value must be between {min} and {max}")?,
            Err(_) => writeln!(output, "Invalid input. Please try again.")?,
        }
    }
}

/// Ball count, then speed and angle for each ball
pub fn collect_launches<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<LaunchParams>> {
    writeln!(output, "BILLIARD SIMULATION")?;
    writeln!(output, "{}", "=".repeat(50))?;

    let count: usize = read_value(
        input,
        output,
        &format!("Number of balls ({MIN_BALLS}-{MAX_BALLS}): "),
        MIN_BALLS,
        MAX_BALLS,
    )?;

    writeln!(output, "\nEnter parameters for each ball:")?;
    let mut launches = Vec::with_capacity(count);
    for i in 0..count {
        writeln!(output, "\nBall {}:", i + 1)?;
        let speed = read_value(
            input,
            output,
            &format!("  Speed ({MIN_SPEED}-{MAX_SPEED}): "),
            MIN_SPEED,
            MAX_SPEED,
        )?;
        let angle_deg = read_value(
            input,
            output,
            &format!("  Direction in degrees ({MIN_ANGLE_DEG}-{MAX_ANGLE_DEG}): "),
            MIN_ANGLE_DEG,
            MAX_ANGLE_DEG,
        )?;
        launches.push(LaunchParams::new(speed, angle_deg));
    }

    Ok(launches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_value_retries_until_valid() -> Result<()> {
        let mut input = Cursor::new("abc\n0\n20\n7\n");
        let mut output = Vec::new();
        let value: usize = read_value(&mut input, &mut output, "n: ", 1, 15)?;
        assert_eq!(value, 7);

        let text = String::from_utf8_lossy(&output);
        assert!(text.contains("Invalid input"));
        assert_eq!(text.matches("between 1 and 15").count(), 2);
        assert_eq!(text.matches("n: ").count(), 4);
        Ok(())
    }

    #[test]
    fn test_read_value_rejects_nan() -> Result<()> {
        let mut input = Cursor::new("NaN\nnan\n5\n");
        let mut output = Vec::new();
        let speed: f64 = read_value(&mut input, &mut output, "speed: ", MIN_SPEED, MAX_SPEED)?;
        assert_eq!(speed, 5.0);

        let text = String::from_utf8_lossy(&output);
        assert_eq!(text.matches("speed: ").count(), 3);
        assert!(text.contains("between 0.1 and 10"));
        Ok(())
    }

    #[test]
    fn test_collect_launches_reasks_nan_speed() -> Result<()> {
        let mut input = Cursor::new("1\nnan\n2\n0\n");
        let mut output = Vec::new();
        let launches = collect_launches(&mut input, &mut output)?;
        assert_eq!(launches, vec![LaunchParams::new(2.0, 0.0)]);
        assert!(launches.iter().all(|l| l.validate().is_ok()));
        Ok(())
    }

    #[test]
    fn test_read_value_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let result: Result<f64> = read_value(&mut input, &mut output, "x: ", 0.0, 1.0);
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_collect_launches() -> Result<()> {
        let mut input = Cursor::new("2\n1.5\n90\n  3 \n400\n180\n");
        let mut output = Vec::new();
        let launches = collect_launches(&mut input, &mut output)?;
        assert_eq!(
            launches,
            vec![LaunchParams::new(1.5, 90.0), LaunchParams::new(3.0, 180.0)]
        );
        Ok(())
    }

    #[test]
    fn test_collect_launches_truncated_input() {
        let mut input = Cursor::new("3\n1.0\n45\n");
        let mut output = Vec::new();
        assert!(matches!(
            collect_launches(&mut input, &mut output),
            Err(Error::InputClosed)
        ));
    }
}
