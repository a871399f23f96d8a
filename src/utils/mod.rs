pub mod layout;
pub mod list_navigation;
pub mod text;
pub mod text_input;

pub use layout::{center_popup, centered_column, create_standard_layout};
pub use list_navigation::{wrap_index, ListStateExt, DEFAULT_PAGE_SIZE};
pub use text::wrap_text;
pub use text_input::TextInput;
