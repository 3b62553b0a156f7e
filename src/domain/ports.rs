/// Marker for domain services. Concrete services live with the feature
/// that needs them; none exist yet.
pub trait DomainService: Send + Sync {}

/// Marker for persistence adapters, injected into use cases as
/// `Arc<dyn Repository>` or a generic bound.
pub trait Repository: Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct InMemoryRepository;
    impl Repository for InMemoryRepository {}

    struct NoopService;
    impl DomainService for NoopService {}

    fn assert_send_sync<T: Send + Sync + ?Sized>() {}

    #[test]
    fn test_ports_are_object_safe_and_shareable() {
        assert_send_sync::<dyn Repository>();
        assert_send_sync::<dyn DomainService>();

        let repos: Vec<Arc<dyn Repository>> = vec![Arc::new(InMemoryRepository)];
        let services: Vec<Box<dyn DomainService>> = vec![Box::new(NoopService)];
        assert_eq!(repos.len(), 1);
        assert_eq!(services.len(), 1);
    }
}
