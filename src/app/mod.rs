// Application layer: use case contracts orchestrating domain ports.

pub mod use_cases;

pub use use_cases::{UseCase, UseCaseOutput};
