//! Question catalog construction and loading.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Question, QuestionKind};

use super::defaults;

/// The configuration modules the engine can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigModule {
    /// Payroll area configuration.
    PayrollArea,
    /// Payment method configuration.
    PaymentMethod,
}

impl ConfigModule {
    /// Parses a module name.
    ///
    /// Accepts both the wire form (`payroll_area`) and the legacy
    /// space-separated form (`payroll area`) found in stored sessions.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "payroll_area" | "payroll area" => Some(ConfigModule::PayrollArea),
            "payment_method" | "payment method" => Some(ConfigModule::PaymentMethod),
            _ => None,
        }
    }

    /// Returns the wire name of the module.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigModule::PayrollArea => "payroll_area",
            ConfigModule::PaymentMethod => "payment_method",
        }
    }

    /// Returns the catalog file name for this module.
    fn file_name(&self) -> &'static str {
        match self {
            ConfigModule::PayrollArea => "payroll_area.yaml",
            ConfigModule::PaymentMethod => "payment_method.yaml",
        }
    }
}

impl fmt::Display for ConfigModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk catalog file structure: a flat list of questions in flow order.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

/// The validated question catalog for all modules.
///
/// Catalogs are validated when constructed: duplicate question ids, empty
/// ids or texts, and choice questions without options are rejected up
/// front, so a half-valid question can never be served mid-session.
///
/// # Example
///
/// ```
/// use payroll_config_engine::catalog::{ConfigModule, QuestionCatalog};
///
/// let catalog = QuestionCatalog::builtin();
/// assert!(catalog.question(ConfigModule::PaymentMethod, "q3_payment_method_k").is_some());
/// assert!(catalog.question(ConfigModule::PaymentMethod, "q9_unknown").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    modules: HashMap<ConfigModule, Vec<Question>>,
}

impl QuestionCatalog {
    /// Creates the catalog of built-in questions.
    ///
    /// The built-in definitions are validated by test, not at runtime: this
    /// constructor cannot fail.
    pub fn builtin() -> Self {
        let mut modules = HashMap::new();
        modules.insert(ConfigModule::PayrollArea, defaults::payroll_area_questions());
        modules.insert(
            ConfigModule::PaymentMethod,
            defaults::payment_method_questions(),
        );
        Self { modules }
    }

    /// Builds a catalog from explicit per-module question lists.
    ///
    /// # Errors
    ///
    /// Returns an error if any module's questions fail validation.
    pub fn from_questions(
        modules: impl IntoIterator<Item = (ConfigModule, Vec<Question>)>,
    ) -> EngineResult<Self> {
        let modules: HashMap<ConfigModule, Vec<Question>> = modules.into_iter().collect();
        for (module, questions) in &modules {
            Self::validate(*module, questions)?;
        }
        Ok(Self { modules })
    }

    /// Loads the catalog from a directory.
    ///
    /// The directory must contain one YAML file per module
    /// (`payroll_area.yaml`, `payment_method.yaml`), each a `questions:`
    /// list in flow order.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is missing, fails to parse, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        let dir = dir.as_ref();
        let mut modules = HashMap::new();

        for module in [ConfigModule::PayrollArea, ConfigModule::PaymentMethod] {
            let path = dir.join(module.file_name());
            let questions = Self::load_file(&path)?;
            Self::validate(module, &questions)?;
            modules.insert(module, questions);
        }

        Ok(Self { modules })
    }

    /// Replaces this catalog with a fresh load from the directory.
    ///
    /// On error the existing catalog is left untouched.
    pub fn reload<P: AsRef<Path>>(&mut self, dir: P) -> EngineResult<()> {
        *self = Self::load(dir)?;
        Ok(())
    }

    /// Loads and parses one catalog file.
    fn load_file(path: &Path) -> EngineResult<Vec<Question>> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        let file: CatalogFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(file.questions)
    }

    /// Validates one module's question list.
    fn validate(module: ConfigModule, questions: &[Question]) -> EngineResult<()> {
        let mut seen = HashSet::new();

        for question in questions {
            if question.id.trim().is_empty() {
                return Err(EngineError::InvalidQuestion {
                    id: "<missing>".to_string(),
                    message: "question id must not be empty".to_string(),
                });
            }
            if question.text.trim().is_empty() {
                return Err(EngineError::InvalidQuestion {
                    id: question.id.clone(),
                    message: "question text must not be empty".to_string(),
                });
            }
            if !seen.insert(question.id.clone()) {
                return Err(EngineError::DuplicateQuestionId {
                    id: question.id.clone(),
                    module: module.as_str().to_string(),
                });
            }
            match &question.kind {
                QuestionKind::MultipleChoice { options }
                | QuestionKind::MultipleSelect { options } => {
                    if options.is_empty() {
                        return Err(EngineError::InvalidQuestion {
                            id: question.id.clone(),
                            message: "choice question must have at least one option".to_string(),
                        });
                    }
                    for option in options {
                        if option.id.trim().is_empty() || option.label.trim().is_empty() {
                            return Err(EngineError::InvalidQuestion {
                                id: question.id.clone(),
                                message: "options require a non-empty id and label".to_string(),
                            });
                        }
                    }
                }
                QuestionKind::Text { .. } => {}
            }
        }

        Ok(())
    }

    /// Returns a question by id, if present in the module.
    pub fn question(&self, module: ConfigModule, id: &str) -> Option<&Question> {
        self.questions(module).iter().find(|q| q.id == id)
    }

    /// Returns a question by id, or a `QuestionNotFound` error.
    pub fn require_question(&self, module: ConfigModule, id: &str) -> EngineResult<&Question> {
        self.question(module, id)
            .ok_or_else(|| EngineError::QuestionNotFound {
                id: id.to_string(),
                module: module.as_str().to_string(),
            })
    }

    /// Returns the first question of a module's flow.
    pub fn first_question(&self, module: ConfigModule) -> EngineResult<&Question> {
        self.questions(module)
            .first()
            .ok_or_else(|| EngineError::QuestionNotFound {
                id: "<first>".to_string(),
                module: module.as_str().to_string(),
            })
    }

    /// Returns all questions of a module in flow order.
    pub fn questions(&self, module: ConfigModule) -> &[Question] {
        self.modules.get(&module).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChoiceOption;
    use std::io::Write;

    fn text_question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {id}"),
            kind: QuestionKind::Text { placeholder: None },
            show_if: None,
        }
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let catalog = QuestionCatalog::builtin();
        for (module, questions) in &catalog.modules {
            QuestionCatalog::validate(*module, questions).expect("builtin catalog must be valid");
        }
    }

    #[test]
    fn test_builtin_first_questions() {
        let catalog = QuestionCatalog::builtin();
        assert_eq!(
            catalog
                .first_question(ConfigModule::PayrollArea)
                .unwrap()
                .id,
            "q1_frequencies"
        );
        assert_eq!(
            catalog
                .first_question(ConfigModule::PaymentMethod)
                .unwrap()
                .id,
            "q1_payment_method_p"
        );
    }

    #[test]
    fn test_require_question_unknown_id_returns_error() {
        let catalog = QuestionCatalog::builtin();
        let result = catalog.require_question(ConfigModule::PayrollArea, "q9_unknown");
        assert!(matches!(
            result,
            Err(EngineError::QuestionNotFound { id, .. }) if id == "q9_unknown"
        ));
    }

    #[test]
    fn test_duplicate_question_id_rejected_at_construction() {
        let questions = vec![text_question("q1_dup"), text_question("q1_dup")];
        let result =
            QuestionCatalog::from_questions([(ConfigModule::PaymentMethod, questions)]);
        assert!(matches!(
            result,
            Err(EngineError::DuplicateQuestionId { id, module })
                if id == "q1_dup" && module == "payment_method"
        ));
    }

    #[test]
    fn test_empty_question_text_rejected() {
        let mut question = text_question("q1_blank");
        question.text = "   ".to_string();
        let result = QuestionCatalog::from_questions([(
            ConfigModule::PayrollArea,
            vec![question],
        )]);
        assert!(matches!(result, Err(EngineError::InvalidQuestion { .. })));
    }

    #[test]
    fn test_choice_question_without_options_rejected() {
        let question = Question {
            id: "q1_empty_choice".to_string(),
            text: "Pick one".to_string(),
            kind: QuestionKind::MultipleChoice { options: vec![] },
            show_if: None,
        };
        let result = QuestionCatalog::from_questions([(
            ConfigModule::PayrollArea,
            vec![question],
        )]);
        assert!(matches!(result, Err(EngineError::InvalidQuestion { .. })));
    }

    #[test]
    fn test_option_without_label_rejected() {
        let question = Question {
            id: "q1_bad_option".to_string(),
            text: "Pick one".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: vec![ChoiceOption::new("yes", "")],
            },
            show_if: None,
        };
        let result = QuestionCatalog::from_questions([(
            ConfigModule::PayrollArea,
            vec![question],
        )]);
        assert!(matches!(result, Err(EngineError::InvalidQuestion { .. })));
    }

    #[test]
    fn test_load_missing_directory_returns_not_found() {
        let result = QuestionCatalog::load("/nonexistent/catalog");
        assert!(matches!(
            result,
            Err(EngineError::CatalogNotFound { path }) if path.contains("payroll_area.yaml")
        ));
    }

    #[test]
    fn test_load_from_directory_and_reload() {
        let dir = tempfile::tempdir().unwrap();

        let payroll = r#"
questions:
  - id: q1_frequencies
    text: Which pay frequencies does your organization use?
    type: multiple_select
    options:
      - id: weekly
        label: Weekly
"#;
        let payment = r#"
questions:
  - id: q1_payment_method_p
    text: Is P - Direct Deposit (ACH) used?
    type: multiple_choice
    options:
      - id: "yes"
        label: "Yes"
      - id: "no"
        label: "No"
  - id: q1_p_house_banks
    text: Which house banks originate the ACH files?
    type: text
    showIf:
      questionId: q1_payment_method_p
      answerId: "yes"
"#;
        let mut f = fs::File::create(dir.path().join("payroll_area.yaml")).unwrap();
        f.write_all(payroll.as_bytes()).unwrap();
        let mut f = fs::File::create(dir.path().join("payment_method.yaml")).unwrap();
        f.write_all(payment.as_bytes()).unwrap();

        let catalog = QuestionCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.questions(ConfigModule::PayrollArea).len(), 1);
        assert_eq!(catalog.questions(ConfigModule::PaymentMethod).len(), 2);

        let house_banks = catalog
            .question(ConfigModule::PaymentMethod, "q1_p_house_banks")
            .unwrap();
        assert!(house_banks.show_if.is_some());

        let mut catalog = QuestionCatalog::builtin();
        catalog.reload(dir.path()).unwrap();
        assert_eq!(catalog.questions(ConfigModule::PayrollArea).len(), 1);
    }

    #[test]
    fn test_reload_failure_leaves_catalog_untouched() {
        let mut catalog = QuestionCatalog::builtin();
        let before = catalog.questions(ConfigModule::PayrollArea).len();

        assert!(catalog.reload("/nonexistent/catalog").is_err());
        assert_eq!(catalog.questions(ConfigModule::PayrollArea).len(), before);
    }

    #[test]
    fn test_module_parse_accepts_legacy_names() {
        assert_eq!(
            ConfigModule::parse("payroll area"),
            Some(ConfigModule::PayrollArea)
        );
        assert_eq!(
            ConfigModule::parse("payment_method"),
            Some(ConfigModule::PaymentMethod)
        );
        assert_eq!(ConfigModule::parse("benefits"), None);
    }
}
