use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr};

/// Numbers to average, as read from a TOML input file.
///
/// Integers and floats may be mixed in the `numbers` array.
/// See [`Input::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    /// Values in encounter order.
    pub numbers: Vec<f64>,
}

impl Input {
    /// Load an [`Input`] from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if any value is not finite.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let input_str =
            fs::read_to_string(file).with_context(|| format!("failed to open {file:?}"))?;

        input_str.parse()
    }

    fn validate(&self) -> Result<()> {
        check_numbers(&self.numbers)
    }
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let input: Input = toml::from_str(s).context("failed to deserialize input")?;

        input.validate().context("failed to validate input")?;

        Ok(input)
    }
}

/// Check that every value is finite, naming the index of the first one that is not.
pub fn check_numbers(numbers: &[f64]) -> Result<()> {
    for (idx, &num) in numbers.iter().enumerate() {
        check_finite(num).with_context(|| format!("invalid number at index {idx}"))?;
    }
    Ok(())
}

fn check_finite(num: f64) -> Result<()> {
    if !num.is_finite() {
        bail!("number must be finite, but is {num:?}");
    }
    Ok(())
}
