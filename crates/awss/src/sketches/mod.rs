//! Sketches: named, persisted, inheritable bundles of per-service
//! configuration.
//!
//! Each sketch is one JSON document under `~/.aws-scripts/sketches/`, holding
//! one section ("item") per service. A sketch may `include` other sketches
//! and overlay its own keys on top; a `.default.json` symlink designates the
//! default sketch. Writes are whole-document rewrites with last-write-wins
//! semantics: the tool serves a single interactive operator, so the store
//! takes no locks.

pub mod codeartifact;
pub mod emr;
pub mod item;
pub mod mwaa;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

use crate::errors::{SketchError, SketchResult};
use crate::sketches::codeartifact::CodeArtifactSketchItem;
use crate::sketches::emr::EmrSketchItem;
use crate::sketches::mwaa::MwaaSketchItem;

const DEFAULT_POINTER: &str = ".default.json";

/// The registered sketch item kinds. New services plug in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SketchItemKind {
    Emr,
    CodeArtifact,
    Mwaa,
}

impl SketchItemKind {
    pub fn name(self) -> &'static str {
        match self {
            SketchItemKind::Emr => "emr",
            SketchItemKind::CodeArtifact => "codeartifact",
            SketchItemKind::Mwaa => "mwaa",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.name() == name)
    }

    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }

    /// Default document for a freshly added item of this kind.
    pub fn generate(self) -> Value {
        match self {
            SketchItemKind::Emr => EmrSketchItem::generate(),
            SketchItemKind::CodeArtifact => CodeArtifactSketchItem::generate(),
            SketchItemKind::Mwaa => MwaaSketchItem::generate(),
        }
    }
}

/// The sketch store: manages sketch files and their content.
#[derive(Debug, Clone)]
pub struct Sketches {
    home: PathBuf,
}

impl Sketches {
    /// Opens the store at `~/.aws-scripts/sketches`, creating it if needed.
    pub fn new() -> SketchResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| {
                SketchError::Io(std::io::Error::new(
                    ErrorKind::NotFound,
                    "could not determine home directory",
                ))
            })?
            .join(".aws-scripts")
            .join("sketches");
        Self::at(home)
    }

    /// Opens the store at an explicit directory.
    pub fn at(home: impl Into<PathBuf>) -> SketchResult<Self> {
        let home = home.into();
        fs::create_dir_all(&home)?;
        Ok(Sketches { home })
    }

    /// Names of the sketches present on disk, sorted for determinism
    /// (directory order is not meaningful to callers).
    pub fn list(&self) -> SketchResult<Vec<String>> {
        let mut names = vec![];
        for entry in fs::read_dir(&self.home)? {
            let path = entry?.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if name.starts_with('.') || !name.ends_with(".json") {
                continue;
            }
            names.push(name.trim_end_matches(".json").to_string());
        }
        names.sort();
        Ok(names)
    }

    /// Name of the default sketch, if one is designated.
    pub fn get_default(&self) -> Option<String> {
        let pointer = self.home.join(DEFAULT_POINTER);
        if !pointer.exists() {
            return None;
        }
        if pointer.is_symlink() {
            let target = fs::read_link(&pointer).ok()?;
            let name = target.file_name()?.to_str()?;
            Some(name.trim_end_matches(".json").to_string())
        } else {
            Some(DEFAULT_POINTER.trim_end_matches(".json").to_string())
        }
    }

    /// Designates a sketch as the default, creating it if necessary.
    ///
    /// The pointer location must be free or already a symlink; a regular
    /// file there is somebody's data and is refused, not overwritten.
    pub fn make_default(&self, sketch: &str) -> SketchResult<()> {
        let pointer = self.home.join(DEFAULT_POINTER);
        if pointer.exists() && !pointer.is_symlink() {
            return Err(SketchError::DefaultNotSymlink);
        }
        self.create_sketch(sketch)?;
        match fs::remove_file(&pointer) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        std::os::unix::fs::symlink(self.sketch_path(sketch), &pointer)?;
        debug!(sketch, "default sketch updated");
        Ok(())
    }

    /// Item names present in a sketch's raw document (inherited items from
    /// `include` are not listed).
    pub fn list_items(&self, sketch: &str) -> SketchResult<Vec<String>> {
        let content = self.load_content(sketch)?;
        Ok(content.keys().cloned().collect())
    }

    /// Adds a freshly generated item to a sketch. Non-destructive: an
    /// existing item of the same name is left alone and reported.
    pub fn add_item(&self, sketch: &str, item_name: &str) -> SketchResult<PathBuf> {
        let kind = SketchItemKind::from_name(item_name)
            .ok_or_else(|| SketchError::UnknownItemType(item_name.to_string()))?;

        self.create_sketch(sketch)?;
        let mut content = self.load_content(sketch)?;
        if content.contains_key(item_name) {
            return Err(SketchError::ItemAlreadyExists(item_name.to_string()));
        }
        content.insert(item_name.to_string(), kind.generate());
        self.write_content(sketch, &content)?;
        Ok(self.sketch_path(sketch))
    }

    /// Removes an item from a sketch. Not an undoable action. The item must
    /// exist directly in the sketch, not via inheritance.
    pub fn remove_item(&self, sketch: &str, item_name: &str) -> SketchResult<PathBuf> {
        if !self.exists(sketch) {
            return Err(SketchError::SketchNotFound(sketch.to_string()));
        }
        SketchItemKind::from_name(item_name)
            .ok_or_else(|| SketchError::UnknownItemType(item_name.to_string()))?;

        let mut content = self.load_content(sketch)?;
        if content.remove(item_name).is_none() {
            return Err(SketchError::ItemNotFound(item_name.to_string()));
        }
        self.write_content(sketch, &content)?;
        Ok(self.sketch_path(sketch))
    }

    /// Creates or overwrites an item with the given content. Destructive by
    /// design: reverse-derivation flows replace whatever was there.
    pub fn replace_item(&self, sketch: &str, item_name: &str, content: Value) -> SketchResult<PathBuf> {
        SketchItemKind::from_name(item_name)
            .ok_or_else(|| SketchError::UnknownItemType(item_name.to_string()))?;

        self.create_sketch(sketch)?;
        let mut sketch_content = self.load_content(sketch)?;
        sketch_content.insert(item_name.to_string(), content);
        self.write_content(sketch, &sketch_content)?;
        Ok(self.sketch_path(sketch))
    }

    /// Loads a sketch with its `include` directive resolved.
    ///
    /// Included sketches are read raw (their own `include` is ignored) and
    /// shallow-merged in list order; the sketch's own keys win on collision.
    /// The resolved view never carries the directive itself.
    pub fn get(&self, sketch: &str) -> SketchResult<Map<String, Value>> {
        let content = self.load_content(sketch)?;
        self.interpret_content(content)
    }

    pub fn exists(&self, sketch: &str) -> bool {
        self.sketch_path(sketch).exists()
    }

    /// Absolute path of a sketch's backing file.
    pub fn sketch_path(&self, sketch: &str) -> PathBuf {
        let filename = if sketch.ends_with(".json") {
            sketch.to_string()
        } else {
            format!("{sketch}.json")
        };
        self.home.join(filename)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    fn load_content(&self, sketch: &str) -> SketchResult<Map<String, Value>> {
        let path = self.sketch_path(sketch);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SketchError::SketchNotFound(sketch.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(content) => Ok(content),
            _ => Err(SketchError::NotAnObject(sketch.to_string())),
        }
    }

    fn write_content(&self, sketch: &str, content: &Map<String, Value>) -> SketchResult<()> {
        let path = self.sketch_path(sketch);
        fs::write(&path, serde_json::to_string_pretty(content)?)?;
        debug!(sketch, path = %path.display(), "sketch persisted");
        Ok(())
    }

    fn create_sketch(&self, sketch: &str) -> SketchResult<()> {
        if !self.exists(sketch) {
            fs::write(self.sketch_path(sketch), "")?;
        }
        Ok(())
    }

    fn interpret_content(&self, content: Map<String, Value>) -> SketchResult<Map<String, Value>> {
        let mut result = Map::new();
        match content.get("include") {
            Some(Value::String(base)) => {
                result.append(&mut self.load_content(base)?);
            }
            Some(Value::Array(bases)) => {
                for base in bases {
                    if let Some(base) = base.as_str() {
                        result.append(&mut self.load_content(base)?);
                    }
                }
            }
            _ => {}
        }
        for (key, value) in content {
            if key == "include" {
                continue;
            }
            result.insert(key, value);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn store(dir: &tempfile::TempDir) -> Sketches {
        Sketches::at(dir.path().join("sketches")).unwrap()
    }

    #[test]
    fn item_kind_registry() {
        assert_eq!(SketchItemKind::names(), vec!["emr", "codeartifact", "mwaa"]);
        assert_eq!(SketchItemKind::from_name("emr"), Some(SketchItemKind::Emr));
        assert_eq!(SketchItemKind::from_name("s3"), None);
    }

    #[test]
    fn add_list_and_remove_items() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        sketches.add_item("dev", "emr").unwrap();
        sketches.add_item("dev", "codeartifact").unwrap();
        assert_eq!(sketches.list().unwrap(), vec!["dev"]);
        // Documents are key-sorted maps, so item listing is alphabetical.
        assert_eq!(
            sketches.list_items("dev").unwrap(),
            vec!["codeartifact", "emr"]
        );

        sketches.remove_item("dev", "codeartifact").unwrap();
        assert_eq!(sketches.list_items("dev").unwrap(), vec!["emr"]);
    }

    #[test]
    fn add_item_precondition_failures() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        assert!(matches!(
            sketches.add_item("dev", "s3"),
            Err(SketchError::UnknownItemType(_))
        ));

        sketches.add_item("dev", "emr").unwrap();
        assert!(matches!(
            sketches.add_item("dev", "emr"),
            Err(SketchError::ItemAlreadyExists(_))
        ));
    }

    #[test]
    fn remove_item_precondition_failures() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        assert!(matches!(
            sketches.remove_item("ghost", "emr"),
            Err(SketchError::SketchNotFound(_))
        ));

        sketches.add_item("dev", "emr").unwrap();
        assert!(matches!(
            sketches.remove_item("dev", "s3"),
            Err(SketchError::UnknownItemType(_))
        ));
        assert!(matches!(
            sketches.remove_item("dev", "mwaa"),
            Err(SketchError::ItemNotFound(_))
        ));
    }

    #[test]
    fn replace_item_roundtrips_exactly() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        let content = json!({"environment": "data-prod"});
        sketches.replace_item("dev", "mwaa", content.clone()).unwrap();
        assert_eq!(sketches.get("dev").unwrap()["mwaa"], content);

        // Destructive by design: a second replace overwrites.
        let updated = json!({"environment": "data-staging"});
        sketches.replace_item("dev", "mwaa", updated.clone()).unwrap();
        assert_eq!(sketches.get("dev").unwrap()["mwaa"], updated);
    }

    #[test]
    fn include_resolution_prefers_own_keys() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        fs::write(
            sketches.sketch_path("base"),
            json!({"x": 2, "y": 3}).to_string(),
        )
        .unwrap();
        fs::write(
            sketches.sketch_path("dev"),
            json!({"include": "base", "x": 1}).to_string(),
        )
        .unwrap();

        let resolved = sketches.get("dev").unwrap();
        assert_eq!(resolved["x"], 1);
        assert_eq!(resolved["y"], 3);
        assert!(!resolved.contains_key("include"));
    }

    #[test]
    fn later_includes_override_earlier_ones() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        fs::write(
            sketches.sketch_path("a"),
            json!({"x": "a", "only_a": 1}).to_string(),
        )
        .unwrap();
        fs::write(
            sketches.sketch_path("b"),
            json!({"x": "b", "only_b": 2}).to_string(),
        )
        .unwrap();
        fs::write(
            sketches.sketch_path("dev"),
            json!({"include": ["a", "b"]}).to_string(),
        )
        .unwrap();

        let resolved = sketches.get("dev").unwrap();
        assert_eq!(resolved["x"], "b");
        assert_eq!(resolved["only_a"], 1);
        assert_eq!(resolved["only_b"], 2);
    }

    #[test]
    fn includes_are_not_transitive() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        fs::write(
            sketches.sketch_path("grandparent"),
            json!({"deep": true}).to_string(),
        )
        .unwrap();
        fs::write(
            sketches.sketch_path("parent"),
            json!({"include": "grandparent", "shallow": true}).to_string(),
        )
        .unwrap();
        fs::write(
            sketches.sketch_path("dev"),
            json!({"include": "parent"}).to_string(),
        )
        .unwrap();

        let resolved = sketches.get("dev").unwrap();
        assert_eq!(resolved["shallow"], true);
        assert!(!resolved.contains_key("deep"));
        // The included sketch's raw directive comes through as data, untouched.
        assert_eq!(resolved["include"], "grandparent");
    }

    #[test]
    fn get_missing_sketch_fails() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);
        assert!(matches!(
            sketches.get("ghost"),
            Err(SketchError::SketchNotFound(_))
        ));
    }

    #[test]
    fn empty_sketch_file_reads_as_empty_document() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);
        fs::write(sketches.sketch_path("blank"), "").unwrap();
        assert!(sketches.get("blank").unwrap().is_empty());
    }

    #[test]
    fn make_default_links_and_relinks() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        assert_eq!(sketches.get_default(), None);

        sketches.make_default("dev").unwrap();
        assert_eq!(sketches.get_default().as_deref(), Some("dev"));
        // The target was created as an empty sketch.
        assert!(sketches.exists("dev"));

        sketches.make_default("prod").unwrap();
        assert_eq!(sketches.get_default().as_deref(), Some("prod"));
    }

    #[test]
    fn default_pointer_is_not_listed_as_a_sketch() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);
        sketches.add_item("dev", "emr").unwrap();
        sketches.make_default("dev").unwrap();
        assert_eq!(sketches.list().unwrap(), vec!["dev"]);
    }

    #[test]
    fn make_default_refuses_to_replace_a_regular_file() {
        let dir = tempdir().unwrap();
        let sketches = store(&dir);

        let pointer = sketches.home().join(".default.json");
        fs::write(&pointer, "{\"precious\": true}").unwrap();

        assert!(matches!(
            sketches.make_default("dev"),
            Err(SketchError::DefaultNotSymlink)
        ));
        // The occupant is left untouched.
        assert_eq!(
            fs::read_to_string(&pointer).unwrap(),
            "{\"precious\": true}"
        );
        // Python's literal behavior: a plain pointer file resolves to its
        // own stem rather than a target sketch.
        assert_eq!(sketches.get_default().as_deref(), Some(".default"));
    }
}
