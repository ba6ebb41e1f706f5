mod tasks;

mod directory_list;
pub use directory_list::DirectoryListView;

mod message_list;
pub use message_list::MessageListView;
