use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error type returned by settings validation.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Bad value assigned to a settings field
    #[error("bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Tolerances governing classification and pivot checks in
/// [`DirectSolver`](crate::solver::DirectSolver).
///
/// All tolerances are nonnegative.   Construct via
/// [`DirectSolverSettingsBuilder`] to pick up defaults for
/// unspecified fields:
///
/// ```
/// use densolve::solver::DirectSolverSettingsBuilder;
///
/// let settings = DirectSolverSettingsBuilder::<f64>::default()
///     .zero_pivot_tol(1e-10)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirectSolverSettings<T: FloatT> {
    ///absolute tolerance for the entrywise symmetry comparison
    #[builder(default = "(1e-12).as_T()")]
    pub symmetry_tol_abs: T,

    ///relative tolerance for the entrywise symmetry comparison,
    ///scaled by the larger magnitude of the two entries compared
    #[builder(default = "(1e-8).as_T()")]
    pub symmetry_tol_rel: T,

    ///pivots with magnitude at or below this value are treated as
    ///zero during LU elimination and back substitution
    #[builder(default = "(1e-12).as_T()")]
    pub zero_pivot_tol: T,

    ///reject solutions containing NaN or Inf values rather than
    ///returning them
    #[builder(default = "true")]
    pub check_finite: bool,
}

impl<T> Default for DirectSolverSettings<T>
where
    T: FloatT,
{
    fn default() -> DirectSolverSettings<T> {
        DirectSolverSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl From<SettingsError> for DirectSolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DirectSolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DirectSolverSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that all tolerance fields are nonnegative
    pub fn validate(&self) -> Result<(), SettingsError> {
        macro_rules! check_nonnegative {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    if !(v >= T::zero()) {
                        return Err(SettingsError::BadFieldValue(stringify!($field)));
                    }
                }
            };
        }

        check_nonnegative!(symmetry_tol_abs);
        check_nonnegative!(symmetry_tol_rel);
        check_nonnegative!(zero_pivot_tol);

        Ok(())
    }
}
