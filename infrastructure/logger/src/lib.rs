mod cart_subscriber;
mod tracing_logger;

pub use cart_subscriber::TracingCartSubscriber;
pub use tracing_logger::TracingLogger;
