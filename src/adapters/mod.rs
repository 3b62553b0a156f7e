// Adapters layer: the edges of the service. HTTP is the only inbound
// adapter; persistence adapters will implement `domain::ports::Repository`.

pub mod http;
