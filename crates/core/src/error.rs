// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use str_projection_domain::{DomainError, ErrorKind};
use thiserror::Error;

/// Errors that abort a projection.
///
/// Degenerate break-even and payback results never surface here; they are
/// reported as `None` fields on the result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The input failed validation at the projection boundary.
    #[error("Invalid projection input: {0}")]
    InvalidInput(DomainError),
    /// A pipeline stage failed on input that passed validation.
    #[error("Projection failed: {0}")]
    Computation(DomainError),
}

impl ProjectionError {
    /// Returns the underlying domain error.
    #[must_use]
    pub const fn domain_error(&self) -> &DomainError {
        match self {
            Self::InvalidInput(err) | Self::Computation(err) => err,
        }
    }
}

impl From<DomainError> for ProjectionError {
    fn from(err: DomainError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => Self::InvalidInput(err),
            ErrorKind::DegenerateBreakEven | ErrorKind::NoPayback => Self::Computation(err),
        }
    }
}
