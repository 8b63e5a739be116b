pub mod binary_light;
pub mod device_factory;
pub mod scalable_light;
pub mod speaker;
