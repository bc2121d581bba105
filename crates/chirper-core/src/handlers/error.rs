use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No element with id '{0}' in document")]
    MissingElement(String),
}
