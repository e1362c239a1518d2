use crate::commands::{CmdMessage, CmdResult};

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
}

pub fn goodbye() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("Goodbye!"))
}

pub fn unknown() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning("Invalid command. Please try again."))
}
