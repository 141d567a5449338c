pub mod practicum;
pub mod telegram;

// Re-export commonly used types
pub use practicum::{HomeworkSource, PracticumClient};
pub use telegram::{send_message, Messenger, TelegramClient};
