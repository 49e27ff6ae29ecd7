//! Rate limiting logic and state management.

mod limiter;
mod window;

pub use limiter::WindowRateLimiter;
pub use window::TimeUnit;
