pub mod frame;
pub mod header;
pub mod layout;
pub mod renderer;
pub mod span;
pub mod spinner;
pub mod style;
pub mod theme;

pub use frame::{Frame, Line};
pub use layout::Layout;
pub use renderer::Renderer;
pub use span::{Span, SpanLine, Wrap};
pub use spinner::Spinner;
pub use style::{Color, Style};
pub use theme::Theme;
