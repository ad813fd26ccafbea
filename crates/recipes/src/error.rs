use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Unknown recipe type '{0}'")]
    UnknownType(String),

    #[error("Invalid arguments for recipe '{tag}': {message}")]
    Arguments { tag: String, message: String },
}
