use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Result mapping produced by a use case, keyed by field name.
pub type UseCaseOutput = HashMap<String, serde_json::Value>;

/// A single unit of application behaviour: accept a typed request and
/// produce a result mapping.
#[async_trait]
pub trait UseCase<Req>: Send + Sync
where
    Req: Send + 'static,
{
    async fn execute(&self, request: Req) -> Result<UseCaseOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Entity;
    use crate::domain::ports::Repository;
    use crate::utils::error::ServiceError;
    use std::sync::Arc;

    struct StubRepository;
    impl Repository for StubRepository {}

    struct DescribeEntity {
        _repository: Arc<dyn Repository>,
    }

    #[async_trait]
    impl UseCase<Entity> for DescribeEntity {
        async fn execute(&self, request: Entity) -> Result<UseCaseOutput> {
            let id = request.id.ok_or_else(|| ServiceError::UseCaseError {
                message: "entity has no id".to_string(),
            })?;

            let mut output = UseCaseOutput::new();
            output.insert("id".to_string(), serde_json::Value::String(id));
            Ok(output)
        }
    }

    #[tokio::test]
    async fn test_use_case_through_trait_object() {
        let use_case: Box<dyn UseCase<Entity>> = Box::new(DescribeEntity {
            _repository: Arc::new(StubRepository),
        });

        let output = use_case.execute(Entity::with_id("abc")).await.unwrap();
        assert_eq!(output["id"], "abc");

        let err = use_case.execute(Entity::new()).await.unwrap_err();
        assert!(matches!(err, ServiceError::UseCaseError { .. }));
    }
}
