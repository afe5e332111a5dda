pub mod badge;
pub mod button;
pub mod checkbox;
pub mod helper_text;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use helper_text::HelperText;
pub use input::Input;
pub use radio::{Radio, RadioGroup};
pub use select::Select;
pub use textarea::Textarea;
