use std::io::Read;

use anyhow::{Context, Result};
use camino::Utf8Path as Path;
use tracing::debug;

/// Reads the whole puzzle input, from `path` if given or from stdin otherwise.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let input = match path {
        Some(path) => {
            std::fs::read_to_string(path).context(format!("Couldn't read input file '{path}'"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("Couldn't read input from stdin")?;
            buf
        }
    };
    debug!("Read {} bytes of input", input.len());
    Ok(input)
}

#[cfg(test)]
mod tests {
    use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};

    use super::read_input;

    #[test]
    fn test_read_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/ranges/scenario1.txt");
        let input = read_input(Some(path.as_path())).unwrap();
        assert!(input.starts_with("3-5\n"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/puzzle.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/puzzle.txt"));
    }
}
