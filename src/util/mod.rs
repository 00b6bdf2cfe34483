mod tracing;

pub use self::tracing::init as init_tracing;
