pub mod handlers;
pub mod prompts;
pub mod router;
pub mod technical;
