// Standalone components
pub mod badge;
pub mod banner;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod spinner;
pub mod stat_card;

// Overlays and layout
pub mod modal;
pub mod sidebar;

pub use badge::*;
pub use banner::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use modal::*;
pub use sidebar::*;
pub use spinner::*;
pub use stat_card::*;
