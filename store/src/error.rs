// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, DError)]
pub enum ErrorKind {
    #[error("no user found")]
    NoUserFound,

    #[error("Couldn't found entity with id({0})")]
    NotFoundById(String),

    #[error("Missing attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("Failed to cast to some value ({0})")]
    ValueConvert(String),

    #[error("Couldn't cast value to {0}")]
    CastingValue(&'static str),
}
