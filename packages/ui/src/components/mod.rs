//! Building-block components shared by every view.

mod alert;
mod button;
mod input;
mod loader;
mod modal;
mod section_card;
mod select;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Label, TextArea};
pub use loader::{Loader, SmallLoader};
pub use modal::Modal;
pub use section_card::SectionCard;
pub use select::{Select, SelectOption};
