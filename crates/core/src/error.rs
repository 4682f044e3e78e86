use thiserror::Error;

use crate::catalog::CatalogError;
use crate::exercise::AttemptError;
use crate::gate::GateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Gate(#[from] GateError),
}
