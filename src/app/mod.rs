// Front ends that drive the pricing core.

pub mod interactive;

pub use interactive::InteractiveSession;
