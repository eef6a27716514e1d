use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransectError {
    #[error("cannot cut profiles from an empty grid")]
    EmptyGrid,
}
