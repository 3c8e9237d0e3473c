use crate::route::Route;
use crate::task::Task;
use leptos::prelude::*;

/// Class tokens carried by every card root, independent of task state.
pub const CARD_CLASSES: [&str; 6] = [
    "flex",
    "flex-col",
    "gap-2",
    "bg-slate-500",
    "rounded-sm",
    "p-5",
];

pub fn edit_route(task: &Task) -> Route {
    Route::EditTask(task.id.clone())
}

/// A card showing one task, with a link to its edit view.
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let href = edit_route(&task).path();

    view! {
        <div class="flex flex-col gap-2 bg-slate-500 rounded-sm p-5">
            <strong>{task.title}</strong>
            <span>{task.description}</span>
            <span>{task.priority.as_str()}</span>
            <span>{task.status.as_str()}</span>
            <span>{task.due_date}</span>
            <a href=href>"Edit"</a>
        </div>
    }
}

/// Renders one task card to HTML. The same task always yields the same markup.
pub fn render_card(task: &Task) -> String {
    let task = task.clone();
    Owner::new().with(move || view! { <TaskCard task=task /> }.to_html())
}
