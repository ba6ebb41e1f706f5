mod directories;
pub use directories::Directories;

mod messages;
pub use messages::Messages;
