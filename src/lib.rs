pub mod board;
pub mod route;
pub mod task;
pub mod task_card;
pub mod ui;

pub use board::{Board, BoardError};
pub use route::{Route, RouteError};
pub use task::{Priority, Status, Task, TaskId};
pub use task_card::{edit_route, render_card, TaskCard, CARD_CLASSES};
