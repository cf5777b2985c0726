use web_sys::DragEvent;

use common::error::ToolError;

pub enum Msg {
    FileSelected(Option<web_sys::File>),
    Dropped(DragEvent),
    SelectTarget(String),
    Submit,
    Finished(Result<Vec<u8>, ToolError>),
}
