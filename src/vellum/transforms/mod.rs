//! Transform pipeline infrastructure.
//!
//! Compiler phases are modeled as composable stages: anything implementing
//! `Runnable<I, O>` turns an input of type `I` into an output of type `O`,
//! and a `Transform<I, O>` chains stages with `.then()` under compile-time
//! type checking. Pre-built pipelines live in [`standard`].
//!
//! Phases exchange data explicitly through their input/output types; there
//! is no shared compilation context mutated behind the scenes.

pub mod stages;
pub mod standard;

use std::fmt;

/// Error that can occur while running a transform.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Generic error with message
    Error(String),
    /// Stage failed with a specific error
    StageFailed { stage: String, message: String },
    /// A stage was invoked before the phase it depends on has run
    MissingDependency { stage: String, dependency: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
            TransformError::MissingDependency { stage, dependency } => {
                write!(f, "Stage '{}' requires a {} to run", stage, dependency)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input to an output.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain this transform's output into the next stage's input.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input.
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input * 2)
        }
    }

    struct FailingStage;
    impl Runnable<i32, i32> for FailingStage {
        fn run(&self, _input: i32) -> Result<i32, TransformError> {
            Err(TransformError::Error("intentional failure".to_string()))
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|x: i32| Ok(x * 2));
        assert_eq!(transform.run(5).unwrap(), 10);
    }

    #[test]
    fn test_chained_stages() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(DoubleNumber)
            .then(DoubleNumber);
        assert_eq!(transform.run(5).unwrap(), 20);
    }

    #[test]
    fn test_error_propagation() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(FailingStage)
            .then(DoubleNumber);

        let result = transform.run(5);
        assert_eq!(
            result.unwrap_err(),
            TransformError::Error("intentional failure".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::StageFailed {
            stage: "lowering".to_string(),
            message: "bad input".to_string(),
        };
        assert_eq!(format!("{}", err), "Stage 'lowering' failed: bad input");

        let missing = TransformError::MissingDependency {
            stage: "lowering".to_string(),
            dependency: "syntax tree".to_string(),
        };
        assert_eq!(
            format!("{}", missing),
            "Stage 'lowering' requires a syntax tree to run"
        );
    }
}
