//! Core of the menu browser: wire records, the group/heading/subheading
//! hierarchy, navigation state and the cascading level renderer.
//!
//! Nothing in here performs I/O. Front-ends fetch the payload, hand the
//! records to [`Hierarchy::build`], and drive a [`LevelRenderer`] against
//! their own [`DisplaySurface`].

pub mod cursor;
pub mod error;
pub mod format;
pub mod hierarchy;
pub mod navigation;
pub mod record;
pub mod render;
pub mod surface;
pub mod view;

pub use cursor::LevelCursor;
pub use error::{MenuError, NavigationError};
pub use format::{format_price, format_size_price, render_item, render_value};
pub use hierarchy::{Branch, Hierarchy, Node};
pub use navigation::NavigationState;
pub use record::{parse_records, records_from_values, ItemRecord, SizePrice, EMPTY};
pub use render::LevelRenderer;
pub use surface::{DisplaySurface, Level};
pub use view::{LevelView, MenuView};
