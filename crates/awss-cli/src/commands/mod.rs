pub mod ca;
pub mod emr;
pub mod mwaa;
pub mod sketch;

use anyhow::{bail, Result};
use console::style;

use awss::errors::SketchError;
use awss::sketches::{SketchItemKind, Sketches};

/// Picks the sketch to operate on: the explicit `--sketch` argument, or the
/// store's default.
pub fn resolve_sketch(sketches: &Sketches, requested: Option<String>) -> Result<String> {
    match requested.or_else(|| sketches.get_default()) {
        Some(sketch) => Ok(sketch),
        None => bail!("no sketch specified and no default sketch is set"),
    }
}

/// Reports a store precondition failure and continues; anything else (I/O,
/// malformed JSON) stays fatal.
pub fn report_sketch_error(error: SketchError) -> Result<()> {
    match error {
        SketchError::UnknownItemType(name) => {
            println!(
                "{}",
                style(format!(
                    "Unknown sketch item name: {name}. Available sketch items: {:?}",
                    SketchItemKind::names()
                ))
                .yellow()
            );
            Ok(())
        }
        error @ (SketchError::ItemAlreadyExists(_)
        | SketchError::ItemNotFound(_)
        | SketchError::SketchNotFound(_)
        | SketchError::DefaultNotSymlink) => {
            println!("{}", style(error).yellow());
            Ok(())
        }
        error => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_sketch_wins_over_default() {
        let dir = tempdir().unwrap();
        let sketches = Sketches::at(dir.path().join("sketches")).unwrap();
        sketches.make_default("dev").unwrap();

        assert_eq!(
            resolve_sketch(&sketches, Some("prod".to_string())).unwrap(),
            "prod"
        );
        assert_eq!(resolve_sketch(&sketches, None).unwrap(), "dev");
    }

    #[test]
    fn missing_sketch_and_default_is_an_error() {
        let dir = tempdir().unwrap();
        let sketches = Sketches::at(dir.path().join("sketches")).unwrap();
        assert!(resolve_sketch(&sketches, None).is_err());
    }
}
