pub mod content;
pub mod desktop;
pub mod dock;
pub mod drivers;
pub mod event_loop;
pub mod help;
pub mod hint;
pub mod markdown;
pub mod panels;
pub mod registry;
pub mod sidebar;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod viewport;
pub mod window;
