pub mod game;
pub mod platform;

pub use game::GameEntity;
pub use platform::{ExtensionSupport, PlatformDescriptor, descriptor_for, is_placeholder_system};
