pub mod core;
pub mod input;
pub mod logging;
pub mod net;
pub mod terminal;
pub mod ui;

pub use self::core::action_bindings;
pub use self::core::app;
pub use self::core::event;
pub use self::core::event_queue;
pub use self::core::form;
pub use self::core::form_engine;
pub use self::core::page;
pub use self::core::reducer;
pub use self::core::state;
pub use self::core::validation;

pub use self::input::text_area;
pub use self::input::text_input;
pub use self::input::validators;

pub use self::net::gateway;
pub use self::net::payload;
pub use self::net::worker;

pub use self::ui::header;
pub use self::ui::layout;
pub use self::ui::renderer;
pub use self::ui::span;
pub use self::ui::spinner;
pub use self::ui::style;
pub use self::ui::theme;
