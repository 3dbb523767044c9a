//! Exercise catalog: lookup of exercise definitions by id.

use std::collections::BTreeMap;

use log::{info, warn};

use super::spec::ProjectSpec;
use crate::dsl::{self, CatalogAst};
use crate::error::{ChispaError, Result};

/// Exercises shipped with the crate.
pub const BUILTIN_EXERCISES: &str = r#"
.exercise led-basic
.name "Encender un LED"
.description "Un proyecto básico para encender un LED utilizando una resistencia."
.component ARDUINO_UNO ARDUINO 400 50
.component RESISTOR RES1 500 90
.component LED LED1 600 200
.connect D13 RES1
.connect RES1 LED1_ANODO(+)
.connect LED1_CATODO(-) GND
"#;

/// Read-only set of exercises keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    exercises: BTreeMap<String, ProjectSpec>,
}

impl ProjectCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in exercises.
    pub fn builtin() -> Result<Self> {
        Self::from_dsl(BUILTIN_EXERCISES)
    }

    /// Build a catalog from DSL source.
    pub fn from_dsl(input: &str) -> Result<Self> {
        Self::from_ast(dsl::parse_catalog(input)?)
    }

    /// Load a catalog file.
    #[cfg(feature = "cli")]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let catalog = Self::from_ast(dsl::parse_catalog_file(path)?)?;
        info!("loaded {} exercises from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Build a catalog from a parsed AST, checking every exercise.
    pub fn from_ast(ast: CatalogAst) -> Result<Self> {
        let mut catalog = Self::new();
        for def in ast.exercises {
            catalog.insert(ProjectSpec::from_def(def)?)?;
        }
        info!("catalog ready with {} exercises", catalog.len());
        Ok(catalog)
    }

    /// Add an exercise. Ids must be unique.
    pub fn insert(&mut self, spec: ProjectSpec) -> Result<()> {
        spec.validate()?;
        if self.exercises.contains_key(&spec.id) {
            return Err(ChispaError::DuplicateExercise { id: spec.id });
        }
        self.exercises.insert(spec.id.clone(), spec);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ProjectSpec> {
        self.exercises.get(id)
    }

    /// Look up an exercise, reporting unknown ids as an error the caller can
    /// turn into a not-found page.
    pub fn lookup(&self, id: &str) -> Result<&ProjectSpec> {
        self.get(id).ok_or_else(|| {
            warn!(
                "exercise not found: {} (known: {})",
                id,
                self.ids().collect::<Vec<_>>().join(", ")
            );
            ChispaError::UnknownExercise { id: id.to_string() }
        })
    }

    /// Exercise ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.exercises.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectSpec> {
        self.exercises.values()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::ComponentKind;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ProjectCatalog::builtin().unwrap();
        let spec = catalog.lookup("led-basic").unwrap();
        assert_eq!(spec.name, "Encender un LED");
        assert_eq!(spec.correct_connections.len(), 3);
        assert_eq!(spec.components.len(), 3);
        assert_eq!(spec.component("LED1").unwrap().kind, ComponentKind::Led);
        assert!(spec.ignored_pins.is_empty());
    }

    #[test]
    fn test_unknown_exercise() {
        let catalog = ProjectCatalog::builtin().unwrap();
        assert!(catalog.get("missing").is_none());
        assert!(matches!(
            catalog.lookup("missing"),
            Err(ChispaError::UnknownExercise { .. })
        ));
    }

    #[test]
    fn test_duplicate_exercise_rejected() {
        let input = ".exercise a\n.connect D1 D2\n.exercise a\n.connect D3 D4\n";
        assert!(matches!(
            ProjectCatalog::from_dsl(input),
            Err(ChispaError::DuplicateExercise { .. })
        ));
    }

    #[test]
    fn test_ids_sorted() {
        let input = ".exercise zeta\n.exercise alpha\n";
        let catalog = ProjectCatalog::from_dsl(input).unwrap();
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }
}
