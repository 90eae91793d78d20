#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("operator '{operator}' is missing its right operand")]
    DanglingOperator { operator: String },

    #[error("operator '{operator}' has no left operand")]
    MissingLeftOperand { operator: String },

    #[error("expected an operator before '{term}'")]
    MissingOperator { term: String },

    #[error("phonetic search needs at least one letter")]
    EmptyPhoneticInput,

    #[error("phrase is too short for biword search ({tokens} usable token(s), need 2)")]
    PhraseTooShort { tokens: usize },
}

pub type Result<T> = core::result::Result<T, SearchError>;
