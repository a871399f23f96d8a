// Reusable UI widgets

pub mod logo;
pub mod menu;
pub mod text_input;
pub mod toast;

pub use logo::{Size, ZwicklyLogo};
pub use menu::{Menu, MenuItem, MenuState};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
