use crate::core::page::Page;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    Submit,
    ClearForm,
    NextInput,
    PrevInput,
    DeleteWord,
    DeleteWordForward,
    ShowPage(Page),
    InputKey(KeyEvent),
}
